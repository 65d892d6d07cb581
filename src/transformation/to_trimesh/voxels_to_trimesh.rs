use super::{Isosurface, IsosurfaceExtractor};
use crate::math::{Point, Real};
use crate::shape::{DenseVoxels, Pitch, TriMesh};
use crate::transformation::voxelization::{points_to_indices, sparse_to_matrix, VoxelizationError};
use alloc::vec::Vec;

/// Number of empty cells added around a grid before extracting its isosurface.
///
/// This guarantees that voxels touching the border of the grid still produce a closed
/// surface.
pub const ISOSURFACE_PAD: usize = 1;

const ISOSURFACE_LEVEL: f32 = 0.5;

/// Computes a triangle mesh of the boundary of the occupied cells of a dense grid.
///
/// The grid is inverted (so occupied cells get the sample value `0` and empty cells the
/// value `1`), padded by [`ISOSURFACE_PAD`] empty cells on every side, and its `0.5`
/// isosurface is extracted with the given `extractor`, using `pitch` as the sample spacing.
/// The vertices are then shifted back so that the center of the cell `[i, j, k]` lies at
/// `[i, j, k] * pitch`.
///
/// Vertex normals are attached to the mesh if the extractor computes them. Otherwise a
/// warning is logged since the mesh might not be watertight.
pub fn matrix_to_isosurface(
    matrix: &DenseVoxels,
    pitch: impl Into<Pitch>,
    extractor: &impl IsosurfaceExtractor,
) -> Result<TriMesh, VoxelizationError> {
    let spacing = pitch.into().validated()?;
    let volume = matrix.inverted().padded(ISOSURFACE_PAD, true);
    let samples: Vec<f32> = volume
        .data()
        .iter()
        .map(|empty| if *empty { 1.0 } else { 0.0 })
        .collect();

    let surface = extractor.extract(&samples, volume.shape(), ISOSURFACE_LEVEL, &spacing)?;
    let (vertices, faces, normals) = match surface {
        Isosurface::Legacy { vertices, faces } => {
            log::warn!(
                "The isosurface extractor didn’t compute normals: the mesh may not be watertight."
            );
            (vertices, faces, None)
        }
        Isosurface::WithNormals {
            vertices,
            faces,
            normals,
            ..
        } => (vertices, faces, Some(normals)),
    };

    let shift = spacing * ISOSURFACE_PAD as Real;
    let vertices = vertices.into_iter().map(|pt| pt - shift).collect();
    let mesh = TriMesh::new(vertices, faces)?;

    match normals {
        Some(normals) => Ok(mesh.with_vertex_normals(normals)?),
        None => Ok(mesh),
    }
}

/// Computes a triangle mesh enclosing a point cloud, by voxelizing it first.
///
/// Each point is snapped to the voxel grid of the given `pitch` whose origin is the
/// component-wise minimum of all the points. The resulting grid is meshed with
/// [`matrix_to_isosurface`] and the mesh is translated back to world space.
pub fn points_to_isosurface(
    points: &[Point<Real>],
    pitch: impl Into<Pitch>,
    extractor: &impl IsosurfaceExtractor,
) -> Result<TriMesh, VoxelizationError> {
    let pitch = pitch.into();
    let first = points.first().ok_or(VoxelizationError::EmptyInput)?;
    let origin = points.iter().fold(*first, |acc, pt| acc.inf(pt));

    let indices = points_to_indices(points, pitch, Some(origin))?;
    let matrix = sparse_to_matrix(&indices)?;
    let mut mesh = matrix_to_isosurface(&matrix, pitch, extractor)?;
    mesh.translate(&origin.coords);

    Ok(mesh)
}
