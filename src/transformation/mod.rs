//! Conversions between voxel grids, sparse voxel sets, and triangle meshes.

pub use self::off::OffDisplay;

pub mod to_trimesh;
pub mod voxelization;

mod off;
#[cfg(feature = "wavefront")]
pub mod wavefront;
