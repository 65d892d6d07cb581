use super::VoxelizationError;
use crate::math::Point;
use crate::utils::SparseCoo;
use alloc::vec::Vec;

/// The logical operation applied element-wise by [`boolean_sparse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BooleanOp {
    /// Voxels present in both sets.
    Intersection,
    /// Voxels present in at least one of the sets.
    Union,
    /// Voxels present in the first set but not in the second.
    Difference,
}

/// Computes a set operation between two sparse voxel sets.
///
/// Both sets are rebased into the bounding box they share (grown by one cell of margin)
/// and stored as sparse coordinate tensors, so memory stays proportional to the number of
/// voxels even when the sets are far apart. The result is sorted in row-major order of that
/// box and contains no duplicates.
///
/// Fails with [`VoxelizationError::EmptyInput`] if either set is empty, since the shared
/// bounding box is then undefined, and with [`VoxelizationError::GridTooLarge`] if the box
/// and its margin have more than `u64::MAX` cells along one axis.
pub fn boolean_sparse(
    a: &[Point<i64>],
    b: &[Point<i64>],
    operation: BooleanOp,
) -> Result<Vec<Point<i64>>, VoxelizationError> {
    if a.is_empty() || b.is_empty() {
        return Err(VoxelizationError::EmptyInput);
    }

    let first = a[0];
    let (mins, maxs) = a
        .iter()
        .chain(b.iter())
        .fold((first, first), |(mins, maxs), pt| (mins.inf(pt), maxs.sup(pt)));

    // One cell of margin on each side of the shared box. The box may span more than the
    // `i64` range so its bounds are computed with `i128`.
    let origin = [mins.x, mins.y, mins.z].map(|e| e as i128 - 1);
    let size = [0, 1, 2].map(|d| u64::try_from(maxs[d] as i128 - mins[d] as i128 + 3));
    let shape = match size {
        [Ok(x), Ok(y), Ok(z)] => [x, y, z],
        _ => return Err(VoxelizationError::GridTooLarge { cells: usize::MAX }),
    };

    log::debug!("Sparse boolean {operation:?} in a {shape:?} box.");

    let rebase = |pts: &[Point<i64>]| {
        SparseCoo::from_coords(
            shape,
            pts.iter()
                .map(|pt| [0, 1, 2].map(|d| (pt[d] as i128 - origin[d]) as u64)),
        )
        .unwrap_or_else(|| unreachable!("all the points are inside of their bounding box"))
    };
    let sp_a = rebase(a);
    let sp_b = rebase(b);

    let applied = match operation {
        BooleanOp::Intersection => sp_a.and(&sp_b),
        BooleanOp::Union => sp_a.or(&sp_b),
        BooleanOp::Difference => sp_a.and_not(&sp_b),
    };

    // Every resulting voxel comes from one of the inputs, so it fits an `i64` again.
    Ok(applied
        .coords()
        .iter()
        .map(|c| Point::from([0, 1, 2].map(|d| (c[d] as i128 + origin[d]) as i64)))
        .collect())
}
