use crate::shape::TriMeshBuilderError;

/// Errors that can occur while converting between voxel representations or meshing them.
///
/// All these errors are detected before any partial result is produced.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxkit3d::math::Point;
/// use voxkit3d::transformation::voxelization::{boolean_sparse, BooleanOp, VoxelizationError};
///
/// let a = [Point::new(0i64, 0, 0)];
/// let result = boolean_sparse(&a, &[], BooleanOp::Union);
/// assert_eq!(result, Err(VoxelizationError::EmptyInput));
/// # }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum VoxelizationError {
    /// An input buffer doesn’t have the required size.
    ///
    /// This is raised when a flat coordinate buffer isn’t made of triplets, when a dense
    /// occupancy buffer doesn’t match its grid shape, or when the number of per-box
    /// colors doesn’t match the number of boxes.
    #[error("shape mismatch: expected {expected} elements, found {found}.")]
    ShapeMismatch {
        /// The expected number of elements.
        expected: usize,
        /// The actual number of elements.
        found: usize,
    },
    /// A voxel index is negative where only non-negative indices are allowed.
    #[error("the voxel index {index:?} has a negative coordinate.")]
    NegativeIndex {
        /// The offending voxel index.
        index: [i64; 3],
    },
    /// A point coordinate is NaN, infinite, or too large to be converted to a voxel index.
    #[error("the point {point:?} cannot be converted to a voxel index.")]
    NonFiniteCoordinate {
        /// The offending point, converted to `f64`.
        point: [f64; 3],
    },
    /// An operation that requires at least one voxel (or point) was given none.
    #[error("the input voxel set is empty.")]
    EmptyInput,
    /// The pitch has a non-finite, zero, or negative component.
    #[error("the voxel pitch must be finite and positive along every axis.")]
    InvalidPitch,
    /// An isosurface extractor returned neither a (vertices, faces) nor a
    /// (vertices, faces, normals, values) result.
    #[error("unsupported isosurface result with {parts} parts; expected 2 or 4.")]
    UnsupportedResultShape {
        /// The number of parts of the result.
        parts: usize,
    },
    /// A grid has more cells than can be allocated, or than the isosurface extractor can
    /// address.
    #[error("the grid has {cells} cells, which is too large.")]
    GridTooLarge {
        /// The number of cells of the grid, saturated to `usize::MAX` when it overflows.
        cells: usize,
    },
    /// The triangle mesh generated from the voxels is invalid.
    #[error("mesh construction failed: {0}")]
    Mesh(#[from] TriMeshBuilderError),
}
