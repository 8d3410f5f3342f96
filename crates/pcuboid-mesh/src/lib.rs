//! Closed quad-faced cuboid meshes with eased, per-axis subdivision.
#![forbid(unsafe_code)]

pub mod cuboid;
pub mod ease;
pub mod error;
pub mod face;
pub mod grid;
pub mod mesh;

pub use cuboid::{Axis, AxisParams, CuboidParams, build_cuboid};
pub use error::CuboidError;
pub use face::{Quad, Side};
pub use mesh::CuboidMesh;
