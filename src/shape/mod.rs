//! The data model: dense voxel grids, voxel pitch, colors and triangle meshes.

pub use self::color::Color;
pub use self::dense_voxels::{BoundingPadding, DenseVoxels};
pub use self::pitch::Pitch;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod color;
mod dense_voxels;
mod pitch;
mod trimesh;
