//! Conversions between voxel representations, solid filling, and sparse set algebra.
//!
//! Three representations of volumetric occupancy are handled here:
//! - world-space points ([`Point<Real>`](crate::math::Point)) together with a [`Pitch`](crate::shape::Pitch)
//!   and an origin,
//! - sparse voxel sets: lists of integer cell indices (`Point<i64>`),
//! - dense voxel grids: [`DenseVoxels`](crate::shape::DenseVoxels).
//!
//! Surface voxelizations can be turned into solids either with [`fill_orthographic`] (fast,
//! exact only for shapes convex along each axis) or with [`fill_base`] (scanline based).

pub use self::boolean_sparse::{boolean_sparse, BooleanOp};
pub use self::conversion::{
    indices_from_flat, indices_to_points, matrix_to_indices, matrix_to_points,
    points_from_flat, points_to_indices, sparse_to_matrix, strip_array,
};
pub use self::fill_orthographic::fill_orthographic;
pub use self::fill_scanline::{fill_base, fill_voxelization, FILL_MARGIN, FILL_SHIFT};
pub use self::voxelization_error::VoxelizationError;

mod boolean_sparse;
mod conversion;
mod fill_orthographic;
mod fill_scanline;
mod voxelization_error;
