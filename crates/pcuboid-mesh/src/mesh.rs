use std::ops::Range;

use hashbrown::HashMap;
use pcuboid_geom::{Aabb, Vec3};

use crate::face::{Quad, Side};

/// Output of a cuboid build: shared vertices plus quads indexing into them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CuboidMesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Quad>,
    // [start, end) into `faces` per side, in `Side` index order.
    pub(crate) side_ranges: [(usize, usize); 6],
}

impl CuboidMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Range of `faces` built for one side.
    pub fn side_range(&self, side: Side) -> Range<usize> {
        let (start, end) = self.side_ranges[side.index()];
        start..end
    }

    /// Quads that belong to one side.
    pub fn side_faces(&self, side: Side) -> &[Quad] {
        &self.faces[self.side_range(side)]
    }

    /// Unnormalized normal of face `i` from its first two edges.
    pub fn quad_normal(&self, i: usize) -> Vec3 {
        let [a, b, c, _] = self.faces[i].map(|v| self.vertices[v as usize]);
        (b - a).cross(c - b)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// How many quads use each undirected edge.
    pub fn edge_use_counts(&self) -> HashMap<(u32, u32), u32> {
        let mut counts = HashMap::with_capacity(self.faces.len() * 2);
        for quad in &self.faces {
            for k in 0..4 {
                let (a, b) = (quad[k], quad[(k + 1) % 4]);
                let key = if a < b { (a, b) } else { (b, a) };
                *counts.entry(key).or_insert(0) += 1;
            }
        }
        counts
    }

    /// True when every index is in range, every vertex is used, and every
    /// edge is shared by exactly two quads.
    pub fn is_closed(&self) -> bool {
        let n = self.vertices.len();
        let mut used = vec![false; n];
        for quad in &self.faces {
            for &v in quad {
                match used.get_mut(v as usize) {
                    Some(u) => *u = true,
                    None => return false,
                }
            }
        }
        used.into_iter().all(|u| u) && self.edge_use_counts().values().all(|&c| c == 2)
    }

    /// Positions as a flat `xyz` stream.
    pub fn positions_flat(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            out.extend_from_slice(&v.to_array());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_square() -> CuboidMesh {
        CuboidMesh {
            vertices: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![[0, 1, 2, 3]],
            side_ranges: [(0, 1), (1, 1), (1, 1), (1, 1), (1, 1), (1, 1)],
        }
    }

    #[test]
    fn single_quad_is_open() {
        let m = open_square();
        assert!(!m.is_closed());
        assert_eq!(m.edge_use_counts().len(), 4);
        assert_eq!(m.side_faces(Side::Top).len(), 1);
        assert!(m.side_faces(Side::Left).is_empty());
    }

    #[test]
    fn ccw_quad_normal_points_up() {
        let n = open_square().quad_normal(0);
        assert!(n.z > 0.0);
        assert_eq!(n.x, 0.0);
        assert_eq!(n.y, 0.0);
    }

    #[test]
    fn out_of_range_index_is_not_closed() {
        let mut m = open_square();
        m.faces[0][3] = 7;
        assert!(!m.is_closed());
    }

    #[test]
    fn flat_positions_interleave() {
        let m = open_square();
        let flat = m.positions_flat();
        assert_eq!(flat.len(), 12);
        assert_eq!(&flat[6..9], &[1.0, 1.0, 0.0]);
    }
}
