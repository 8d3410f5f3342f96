use std::fmt;

use crate::Axis;

#[derive(Clone, Debug, PartialEq)]
pub enum CuboidError {
    /// An axis triple is outside its valid range. Raised before any allocation.
    InvalidParameter { axis: Axis, reason: &'static str },
    /// A supplied seam does not span the grid edge it is meant to bound.
    SeamMismatch {
        edge: &'static str,
        expected: usize,
        found: usize,
    },
    /// Two supplied seams name different vertices for the same grid corner.
    SeamCorner { row: usize, col: usize },
    /// The easing engine needs at least two samples.
    PointCount(usize),
}

impl fmt::Display for CuboidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuboidError::InvalidParameter { axis, reason } => {
                write!(f, "invalid parameter on {} axis: {}", axis, reason)
            }
            CuboidError::SeamMismatch {
                edge,
                expected,
                found,
            } => write!(
                f,
                "seam for {} has {} indices, grid needs {}",
                edge, found, expected
            ),
            CuboidError::SeamCorner { row, col } => {
                write!(f, "seams disagree at grid corner ({}, {})", row, col)
            }
            CuboidError::PointCount(n) => {
                write!(f, "easing needs at least 2 points, got {}", n)
            }
        }
    }
}

impl std::error::Error for CuboidError {}
