use super::VoxelizationError;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{BoundingPadding, DenseVoxels, Pitch};
use alloc::vec::Vec;
use num::ToPrimitive;

/// Reads a flat `(n, 3)` row-major buffer of coordinates as a list of points.
pub fn points_from_flat(flat: &[Real]) -> Result<Vec<Point<Real>>, VoxelizationError> {
    check_triplets(flat.len())?;
    Ok(flat
        .chunks_exact(DIM)
        .map(|c| Point::new(c[0], c[1], c[2]))
        .collect())
}

/// Reads a flat `(n, 3)` row-major buffer of integers as a list of voxel indices.
pub fn indices_from_flat(flat: &[i64]) -> Result<Vec<Point<i64>>, VoxelizationError> {
    check_triplets(flat.len())?;
    Ok(flat
        .chunks_exact(DIM)
        .map(|c| Point::new(c[0], c[1], c[2]))
        .collect())
}

fn check_triplets(len: usize) -> Result<(), VoxelizationError> {
    if len % DIM == 0 {
        Ok(())
    } else {
        Err(VoxelizationError::ShapeMismatch {
            expected: (len / DIM + 1) * DIM,
            found: len,
        })
    }
}

/// Converts world-space points into the indices of the voxels containing them.
///
/// Each point has `origin` subtracted (if given), is divided by the `pitch`, and is
/// rounded to the nearest integer, with ties rounded to the nearest even integer.
///
/// Fails if the pitch isn’t positive, or if a point cannot be represented as an `i64`
/// index after scaling.
pub fn points_to_indices(
    points: &[Point<Real>],
    pitch: impl Into<Pitch>,
    origin: Option<Point<Real>>,
) -> Result<Vec<Point<i64>>, VoxelizationError> {
    let pitch = pitch.into().validated()?;
    let shift = origin.map(|o| o.coords).unwrap_or_else(Vector::zeros);

    points
        .iter()
        .map(|pt| {
            let scaled = (pt.coords - shift).component_div(&pitch);
            let index = scaled.map(|e| e.round_ties_even().to_i64());

            match (index.x, index.y, index.z) {
                (Some(i), Some(j), Some(k)) => Ok(Point::new(i, j, k)),
                _ => Err(VoxelizationError::NonFiniteCoordinate {
                    point: [pt.x as f64, pt.y as f64, pt.z as f64],
                }),
            }
        })
        .collect()
}

/// Converts voxel indices into world-space points: `index * pitch + origin`.
///
/// A missing pitch is treated as `1` and a missing origin as the world origin.
pub fn indices_to_points(
    indices: &[Point<i64>],
    pitch: Option<Pitch>,
    origin: Option<Point<Real>>,
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    let pitch = match pitch {
        Some(pitch) => pitch.validated()?,
        None => Vector::repeat(1.0),
    };
    let origin = origin.unwrap_or_else(Point::origin);

    Ok(indices
        .iter()
        .map(|idx| origin + idx.coords.map(|e| e as Real).component_mul(&pitch))
        .collect())
}

/// Builds the smallest dense grid containing all the given non-negative voxel indices.
///
/// The grid has the shape `max_index + 1` along each axis, and its cells at `sparse` are
/// marked as occupied. Duplicate indices are allowed.
///
/// Fails with [`VoxelizationError::GridTooLarge`] if the grid cannot be allocated.
pub fn sparse_to_matrix(sparse: &[Point<i64>]) -> Result<DenseVoxels, VoxelizationError> {
    if sparse.is_empty() {
        return Err(VoxelizationError::EmptyInput);
    }

    if let Some(negative) = sparse.iter().find(|idx| idx.iter().any(|e| *e < 0)) {
        return Err(VoxelizationError::NegativeIndex {
            index: [negative.x, negative.y, negative.z],
        });
    }

    let maxs = sparse
        .iter()
        .fold(Point::origin(), |acc: Point<i64>, idx| acc.sup(idx));
    let shape = [maxs.x, maxs.y, maxs.z]
        .map(|e| usize::try_from(e).ok().and_then(|e| e.checked_add(1)));
    let mut dense = match shape {
        [Some(x), Some(y), Some(z)] => DenseVoxels::try_new([x, y, z])?,
        _ => return Err(VoxelizationError::GridTooLarge { cells: usize::MAX }),
    };

    for idx in sparse {
        dense.set([idx.x as usize, idx.y as usize, idx.z as usize], true);
    }

    Ok(dense)
}

/// The indices of all the occupied cells of a dense grid, in row-major order.
pub fn matrix_to_indices(matrix: &DenseVoxels) -> Vec<Point<i64>> {
    matrix
        .occupied()
        .map(|[i, j, k]| Point::new(i as i64, j as i64, k as i64))
        .collect()
}

/// The world-space points of all the occupied cells of a dense grid, in row-major order.
///
/// See [`indices_to_points`] for the meaning of `pitch` and `origin`.
pub fn matrix_to_points(
    matrix: &DenseVoxels,
    pitch: Option<Pitch>,
    origin: Option<Point<Real>>,
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    indices_to_points(&matrix_to_indices(matrix), pitch, origin)
}

/// Crops a dense grid around its occupied cells.
///
/// For each axis, `low` and `high` are the first and last indices of a slice containing at
/// least one occupied cell. The grid is cropped to `[low, high)` along each axis: the last
/// occupied slice itself is excluded from the result, so an axis where only one slice is
/// occupied ends up with a zero extent. The returned [`BoundingPadding`] records
/// the `[low, high]` pairs.
///
/// Fails if the grid has no occupied cell.
pub fn strip_array(
    dense: &DenseVoxels,
) -> Result<(DenseVoxels, BoundingPadding), VoxelizationError> {
    let mut occupied = dense.occupied();
    let first = occupied.next().ok_or(VoxelizationError::EmptyInput)?;
    let (lows, highs) = occupied.fold((first, first), |(mut lows, mut highs), cell| {
        for d in 0..DIM {
            lows[d] = lows[d].min(cell[d]);
            highs[d] = highs[d].max(cell[d]);
        }
        (lows, highs)
    });

    let padding = BoundingPadding {
        axes: [
            [lows[0], highs[0]],
            [lows[1], highs[1]],
            [lows[2], highs[2]],
        ],
    };

    Ok((dense.crop(lows, highs), padding))
}
