//! Triangle mesh generation from voxels.
//!
//! Two kinds of meshes can be generated:
//! - **Isosurfaces**: a smooth surface enclosing the occupied cells of a grid (or of a
//!   voxelized point cloud), see [`matrix_to_isosurface`] and [`points_to_isosurface`].
//!   The extraction algorithm is pluggable through the [`IsosurfaceExtractor`] trait;
//!   [`SurfaceNets`] is the default implementation.
//! - **Box instances**: one axis-aligned unit box per voxel center, see [`multibox`].
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")]
//! # {
//! use voxkit3d::shape::{DenseVoxels, Pitch};
//! use voxkit3d::transformation::to_trimesh::{matrix_to_isosurface, SurfaceNets};
//!
//! let mut grid = DenseVoxels::new([2, 2, 2]);
//! grid.set([0, 0, 0], true);
//! grid.set([1, 1, 1], true);
//!
//! let mesh = matrix_to_isosurface(&grid, Pitch::Uniform(0.5), &SurfaceNets).unwrap();
//! assert!(mesh.num_triangles() > 0);
//! # }
//! ```

pub use self::isosurface::{Isosurface, IsosurfaceExtractor, SurfaceNets};
pub use self::multibox::{multibox, MultiboxColors, BOX_FACES, BOX_VERTICES};
pub use self::voxels_to_trimesh::{matrix_to_isosurface, points_to_isosurface, ISOSURFACE_PAD};

mod isosurface;
mod multibox;
mod voxels_to_trimesh;
