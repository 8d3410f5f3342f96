//! Six-face cuboid builder.
//!
//! Faces are stitched in a fixed order (top, bottom, far, near, right, left).
//! Top and bottom own their whole grids; far and near borrow their first and
//! last rows from top and bottom; right and left borrow their entire rim.

use std::fmt;
use std::time::Instant;

use pcuboid_geom::Vec3;

use crate::ease::ease_offsets;
use crate::error::CuboidError;
use crate::face::{Quad, Side, assemble_quads};
use crate::grid::{Boundary, FaceGrid, Seams};
use crate::mesh::CuboidMesh;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Shape of the cuboid along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisParams {
    /// Distance from the center to either side. Must be positive.
    pub half_extent: f64,
    /// Segment count; the axis carries `subdivisions + 1` points.
    pub subdivisions: u32,
    /// Easing exponent for point spacing; `1.0` is uniform.
    pub tone: f64,
}

impl AxisParams {
    #[inline]
    pub fn points(&self) -> usize {
        self.subdivisions as usize + 1
    }

    fn validate(&self, axis: Axis) -> Result<(), CuboidError> {
        let reason = if self.subdivisions < 1 {
            "subdivisions must be at least 1"
        } else if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            "half extent must be positive and finite"
        } else if !self.tone.is_finite() || self.tone <= 0.0 {
            "tone must be positive and finite"
        } else {
            return Ok(());
        };
        Err(CuboidError::InvalidParameter { axis, reason })
    }

    /// Coordinates from `+half_extent` down to `-half_extent`, strictly decreasing.
    ///
    /// A steep tone on a fine axis can push neighbouring offsets below the
    /// resolution of `f64` near `±half_extent`; those inputs are rejected
    /// rather than producing coincident vertices.
    fn coords(&self, axis: Axis) -> Result<Vec<f64>, CuboidError> {
        let h = self.half_extent;
        let offsets = ease_offsets(self.tone, 2.0 * h, self.points())?;
        let coords: Vec<f64> = offsets.into_iter().map(|o| h - o).collect();
        if coords.windows(2).any(|w| w[0] <= w[1]) {
            return Err(CuboidError::InvalidParameter {
                axis,
                reason: "tone too steep for subdivisions: neighbouring points coincide",
            });
        }
        Ok(coords)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CuboidParams {
    pub x: AxisParams,
    pub y: AxisParams,
    pub z: AxisParams,
}

impl CuboidParams {
    pub fn new(half_extents: [f64; 3], subdivisions: [u32; 3], tones: [f64; 3]) -> Self {
        let axis = |i: usize| AxisParams {
            half_extent: half_extents[i],
            subdivisions: subdivisions[i],
            tone: tones[i],
        };
        Self {
            x: axis(0),
            y: axis(1),
            z: axis(2),
        }
    }

    /// Checks every axis, the index range, and point separation.
    pub fn validate(&self) -> Result<(), CuboidError> {
        self.lattice().map(|_| ())
    }

    /// Per-axis coordinates, after all input checks pass.
    fn lattice(&self) -> Result<[Vec<f64>; 3], CuboidError> {
        self.x.validate(Axis::X)?;
        self.y.validate(Axis::Y)?;
        self.z.validate(Axis::Z)?;
        match self.checked_vertex_count() {
            Some(n) if n <= u32::MAX as usize => {}
            _ => {
                return Err(CuboidError::InvalidParameter {
                    axis: self.densest_axis(),
                    reason: "vertex count exceeds the u32 index range",
                });
            }
        }
        Ok([
            self.x.coords(Axis::X)?,
            self.y.coords(Axis::Y)?,
            self.z.coords(Axis::Z)?,
        ])
    }

    fn densest_axis(&self) -> Axis {
        [(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)]
            .into_iter()
            .max_by_key(|(_, a)| a.subdivisions)
            .map_or(Axis::X, |(axis, _)| axis)
    }

    /// Vertex count of the built mesh, or `None` if it overflows `usize`.
    pub fn checked_vertex_count(&self) -> Option<usize> {
        let (px, py, pz) = (self.x.points(), self.y.points(), self.z.points());
        let (iy, iz) = (py.saturating_sub(2), pz.saturating_sub(2));
        let caps = px.checked_mul(py)?;
        let bands = px.checked_mul(iz)?;
        let inner = iy.checked_mul(iz)?;
        caps.checked_add(bands)?.checked_add(inner)?.checked_mul(2)
    }

    /// Vertex count of the built mesh. Saturates at `usize::MAX`.
    pub fn vertex_count(&self) -> usize {
        self.checked_vertex_count().unwrap_or(usize::MAX)
    }

    /// Quad count of the built mesh. Saturates at `usize::MAX`.
    pub fn face_count(&self) -> usize {
        let (rx, ry, rz) = (
            self.x.subdivisions as usize,
            self.y.subdivisions as usize,
            self.z.subdivisions as usize,
        );
        rx.checked_mul(ry)
            .and_then(|a| a.checked_add(rx.checked_mul(rz)?))
            .and_then(|a| a.checked_add(ry.checked_mul(rz)?))
            .and_then(|a| a.checked_mul(2))
            .unwrap_or(usize::MAX)
    }

    /// Builds the mesh. Fails before allocating if any axis is out of range.
    pub fn build(&self) -> Result<CuboidMesh, CuboidError> {
        let t0 = Instant::now();
        let [xs, ys, zs] = self.lattice()?;
        let (px, py, pz) = (self.x.points(), self.y.points(), self.z.points());
        let (hx, hy, hz) = (self.x.half_extent, self.y.half_extent, self.z.half_extent);

        let mut st = Stitcher::with_capacity(self.vertex_count(), self.face_count());
        let top = st.stitch(Side::Top, px, py, Boundary::Free, |r, c| {
            Vec3::new(xs[c], ys[r], hz)
        })?;
        let bottom = st.stitch(Side::Bottom, px, py, Boundary::Free, |r, c| {
            Vec3::new(xs[c], ys[r], -hz)
        })?;
        let far = st.stitch(
            Side::Far,
            px,
            pz,
            Boundary::TwoOpposite {
                first_row: &top.first_row,
                last_row: &bottom.first_row,
            },
            |r, c| Vec3::new(xs[c], hy, zs[r]),
        )?;
        let near = st.stitch(
            Side::Near,
            px,
            pz,
            Boundary::TwoOpposite {
                first_row: &top.last_row,
                last_row: &bottom.last_row,
            },
            |r, c| Vec3::new(xs[c], -hy, zs[r]),
        )?;
        st.stitch(
            Side::Right,
            py,
            pz,
            Boundary::AllFour {
                first_row: &top.first_col,
                last_row: &bottom.first_col,
                first_col: &far.first_col,
                last_col: &near.first_col,
            },
            |r, c| Vec3::new(hx, ys[c], zs[r]),
        )?;
        st.stitch(
            Side::Left,
            py,
            pz,
            Boundary::AllFour {
                first_row: &top.last_col,
                last_row: &bottom.last_col,
                first_col: &far.last_col,
                last_col: &near.last_col,
            },
            |r, c| Vec3::new(-hx, ys[c], zs[r]),
        )?;

        let mesh = st.finish();
        let ms: u32 = t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
        log::info!(
            target: "perf",
            "ms={} cuboid_build res=({}, {}, {}) verts={} quads={}",
            ms,
            self.x.subdivisions,
            self.y.subdivisions,
            self.z.subdivisions,
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }
}

/// Builds a cuboid from per-axis half extents, subdivision counts and tones.
pub fn build_cuboid(
    half_extents: [f64; 3],
    subdivisions: [u32; 3],
    tones: [f64; 3],
) -> Result<CuboidMesh, CuboidError> {
    CuboidParams::new(half_extents, subdivisions, tones).build()
}

/// Growing vertex and quad lists threaded through the six stitching steps.
struct Stitcher {
    vertices: Vec<Vec3>,
    faces: Vec<Quad>,
    side_ranges: [(usize, usize); 6],
}

impl Stitcher {
    fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
            side_ranges: [(0, 0); 6],
        }
    }

    /// Lays out one side, appends its new vertices and quads, and returns
    /// its seams for the sides built after it.
    fn stitch(
        &mut self,
        side: Side,
        cols: usize,
        rows: usize,
        boundary: Boundary<'_>,
        position: impl Fn(usize, usize) -> Vec3,
    ) -> Result<Seams, CuboidError> {
        // Fits: the total vertex count was checked against u32 in `lattice`.
        let base = self.vertices.len() as u32;
        let grid = FaceGrid::allocate(cols, rows, base, boundary)?;
        // New indices are consecutive from `base` in scan order, so pushing
        // positions in scan order lines them up.
        for (k, &v) in grid.scan().iter().enumerate() {
            if v >= base {
                debug_assert_eq!(v as usize, self.vertices.len());
                self.vertices.push(position(k / cols, k % cols));
            }
        }
        let start = self.faces.len();
        assemble_quads(&grid, side.flip(), &mut self.faces);
        self.side_ranges[side.index()] = (start, self.faces.len());
        log::debug!(
            "cuboid side={} grid={}x{} new_verts={} quads={}",
            side.name(),
            cols,
            rows,
            grid.fresh(),
            self.faces.len() - start
        );
        Ok(grid.seams())
    }

    fn finish(self) -> CuboidMesh {
        CuboidMesh {
            vertices: self.vertices,
            faces: self.faces,
            side_ranges: self.side_ranges,
        }
    }
}
