use crate::math::DIM;
use crate::shape::DenseVoxels;

/// Fills the interior of a hollow voxel shell, using per-axis occupancy bounds.
///
/// For each axis, every line of cells parallel to that axis is filled between its first
/// and last occupied cells (lines without any occupied cell are left entirely empty). The
/// result is the intersection of the three per-axis fills.
///
/// This is fast but only exact for shapes whose intersection with every axis-aligned line
/// is a single segment. Concave shapes are under-filled, which is not reported as an error.
pub fn fill_orthographic(dense: &DenseVoxels) -> DenseVoxels {
    let shape = dense.shape();
    let strides = [shape[1] * shape[2], shape[2], 1];
    let mut filled = dense.clone();
    filled.data_mut().fill(true);

    for axis in 0..DIM {
        let (b, c) = ((axis + 1) % DIM, (axis + 2) % DIM);

        for ib in 0..shape[b] {
            for ic in 0..shape[c] {
                let base = ib * strides[b] + ic * strides[c];
                let line = (0..shape[axis]).map(|t| base + t * strides[axis]);
                let mut bounds = None;

                for (t, id) in line.clone().enumerate() {
                    if dense.data()[id] {
                        bounds = match bounds {
                            None => Some((t, t)),
                            Some((min, _)) => Some((min, t)),
                        };
                    }
                }

                let data = filled.data_mut();
                for (t, id) in line.enumerate() {
                    let inside = bounds.is_some_and(|(min, max)| t >= min && t <= max);
                    data[id] &= inside;
                }
            }
        }
    }

    filled
}
