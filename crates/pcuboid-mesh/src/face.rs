use pcuboid_geom::Vec3;

use crate::grid::FaceGrid;

/// Four vertex indices of one face, wound counter-clockwise seen from outside.
pub type Quad = [u32; 4];

/// The six sides of a cuboid, in build order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Top = 0,
    Bottom = 1,
    Far = 2,
    Near = 3,
    Right = 4,
    Left = 5,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Top,
        Side::Bottom,
        Side::Far,
        Side::Near,
        Side::Right,
        Side::Left,
    ];

    /// Returns the `[0..6)` index of this side.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit normal pointing away from the cuboid's center.
    #[inline]
    pub fn outward_normal(self) -> Vec3 {
        match self {
            Side::Top => Vec3::Z,
            Side::Bottom => -Vec3::Z,
            Side::Far => Vec3::Y,
            Side::Near => -Vec3::Y,
            Side::Right => Vec3::X,
            Side::Left => -Vec3::X,
        }
    }

    /// Whether this side's grid winds inward and must be reversed.
    ///
    /// Grids are laid out with columns and rows running from `+` to `-`
    /// along their two axes, which faces `+Z`, `-Y` and `+X` as scanned.
    #[inline]
    pub fn flip(self) -> bool {
        matches!(self, Side::Bottom | Side::Far | Side::Left)
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Far => "far",
            Side::Near => "near",
            Side::Right => "right",
            Side::Left => "left",
        }
    }
}

/// Appends one quad per grid cell, reversed when `flip` is set.
pub fn assemble_quads(grid: &FaceGrid, flip: bool, out: &mut Vec<Quad>) {
    out.reserve((grid.cols() - 1) * (grid.rows() - 1));
    for row in 0..grid.rows() - 1 {
        for col in 0..grid.cols() - 1 {
            let mut quad = [
                grid.get(row, col),
                grid.get(row, col + 1),
                grid.get(row + 1, col + 1),
                grid.get(row + 1, col),
            ];
            if flip {
                quad.reverse();
            }
            out.push(quad);
        }
    }
}
