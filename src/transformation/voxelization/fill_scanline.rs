use super::VoxelizationError;
use crate::math::Point;
use crate::shape::DenseVoxels;
use alloc::vec::Vec;
use smallvec::SmallVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Offset applied to the input voxel indices so that no surface voxel touches the
/// low boundary of the working grid.
pub const FILL_SHIFT: i64 = 1;

/// Number of cells added to the largest shifted index to size the working grid.
///
/// This leaves at least one empty cell after the last surface voxel along every axis, so
/// scanlines always start and end outside of the shape.
pub const FILL_MARGIN: i64 = 2 + FILL_SHIFT;

/// Number of transitions making one solid span along a scanline.
const TRANSITIONS_PER_SPAN: usize = 4;

/// Fills the interior of a surface voxelization using scanlines.
///
/// The surface voxels are rasterized into a cubic working grid. Then each scanline parallel
/// to the third axis is split at its occupancy transitions (indices where a cell differs from
/// its predecessor). Lines with fewer than four transitions are left untouched. Otherwise,
/// each consecutive group of four transitions `(t0, t1, t2, t3)` is taken as the entry and
/// exit of one solid region, and the cells `t0..t3` are filled. A trailing incomplete group
/// is ignored.
///
/// When at least one scanline of a given first-axis layer has an incomplete trailing group
/// (and more than four transitions), the whole layer is swept a second time along the second
/// axis with the same rule, to recover cells a single scan direction misses.
///
/// This is a heuristic, not an exact inside/outside test: it is reliable for closed,
/// layered surfaces such as voxelized convex or mildly concave solids, and may misfill
/// irregular or self-intersecting ones.
///
/// Returns the indices of the filled voxels (including the input surface voxels), in
/// row-major order. Input indices must be at least `-FILL_SHIFT` along every axis, and the
/// working grid must fit in memory, otherwise [`VoxelizationError::GridTooLarge`] is returned.
pub fn fill_base(sparse: &[Point<i64>]) -> Result<Vec<Point<i64>>, VoxelizationError> {
    let max_value = sparse
        .iter()
        .flat_map(|idx| idx.iter().copied())
        .max()
        .ok_or(VoxelizationError::EmptyInput)?;

    if let Some(idx) = sparse.iter().find(|idx| idx.iter().any(|e| *e < -FILL_SHIFT)) {
        return Err(VoxelizationError::NegativeIndex {
            index: [idx.x, idx.y, idx.z],
        });
    }

    let n = max_value
        .checked_add(FILL_MARGIN)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(VoxelizationError::GridTooLarge { cells: usize::MAX })?;
    let mut grid = DenseVoxels::try_new([n, n, n])?;

    for idx in sparse {
        let cell = idx.coords.map(|e| (e + FILL_SHIFT) as usize);
        grid.set([cell.x, cell.y, cell.z], true);
    }

    let layer_len = n * n;

    #[cfg(feature = "parallel")]
    let swept_twice = grid
        .data_mut()
        .par_chunks_mut(layer_len)
        .map(|layer| fill_layer(layer, n))
        .filter(|swept| *swept)
        .count();
    #[cfg(not(feature = "parallel"))]
    let swept_twice = grid
        .data_mut()
        .chunks_mut(layer_len)
        .map(|layer| fill_layer(layer, n))
        .filter(|swept| *swept)
        .count();

    log::debug!(
        "Scanline fill on a {n}³ grid: {swept_twice} layer(s) needed a second sweep."
    );

    Ok(grid
        .occupied()
        .map(|[i, j, k]| Point::new(i as i64, j as i64, k as i64).map(|e| e - FILL_SHIFT))
        .collect())
}

/// Alias of [`fill_base`].
pub use fill_base as fill_voxelization;

/// Fills one `n × n` layer of the working grid (the second axis varies slowest).
///
/// Returns `true` if the layer needed the sweep along its second axis.
fn fill_layer(layer: &mut [bool], n: usize) -> bool {
    let mut incomplete = false;

    for j in 0..n - 1 {
        incomplete |= fill_line(layer, j * n, 1, n);
    }

    if incomplete {
        for k in 0..n - 1 {
            let _ = fill_line(layer, k, n, n);
        }
    }

    incomplete
}

/// Fills the solid spans of one scanline of `len` cells, starting at `start` with the given
/// stride.
///
/// Returns `true` if the line had more than four transitions and a trailing incomplete group.
fn fill_line(layer: &mut [bool], start: usize, stride: usize, len: usize) -> bool {
    let at = move |t: usize| start + t * stride;
    let transitions: SmallVec<[usize; 8]> = (1..len)
        .filter(|t| layer[at(*t)] != layer[at(*t - 1)])
        .collect();

    if transitions.len() < TRANSITIONS_PER_SPAN {
        return false;
    }

    for span in transitions.chunks_exact(TRANSITIONS_PER_SPAN) {
        for t in span[0]..span[3] {
            layer[at(t)] = true;
        }
    }

    transitions.len() % TRANSITIONS_PER_SPAN != 0
}
