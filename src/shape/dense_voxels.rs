use crate::transformation::voxelization::VoxelizationError;
use alloc::vec::Vec;

/// A dense 3D occupancy grid.
///
/// Cells are stored in row-major order: the last axis varies fastest, so the
/// cell `[i, j, k]` lives at `(i * shape[1] + j) * shape[2] + k`. This is the
/// order in which [`DenseVoxels::occupied`] enumerates cells.
///
/// A dense grid carries no world-space information. The pitch and origin that
/// map a cell index to a world-space point are passed explicitly to the
/// conversion functions of [`crate::transformation::voxelization`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DenseVoxels {
    shape: [usize; 3],
    data: Vec<bool>,
}

impl DenseVoxels {
    /// Creates a grid of the given shape where every cell is empty.
    ///
    /// # Panics
    /// Panics if the number of cells overflows `usize`. See [`DenseVoxels::try_new`] for
    /// a fallible version.
    pub fn new(shape: [usize; 3]) -> Self {
        Self {
            shape,
            data: vec![false; shape[0] * shape[1] * shape[2]],
        }
    }

    /// Creates a grid of the given shape where every cell is empty.
    ///
    /// Fails with [`VoxelizationError::GridTooLarge`] if the number of cells overflows
    /// `usize` or if the grid cannot be allocated.
    pub fn try_new(shape: [usize; 3]) -> Result<Self, VoxelizationError> {
        let cells = Self::num_cells(shape)?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| VoxelizationError::GridTooLarge { cells })?;
        data.resize(cells, false);

        Ok(Self { shape, data })
    }

    /// The number of cells of a grid with the given shape.
    ///
    /// Fails with [`VoxelizationError::GridTooLarge`] (with `cells == usize::MAX`) if this
    /// number overflows `usize`.
    pub fn num_cells(shape: [usize; 3]) -> Result<usize, VoxelizationError> {
        shape
            .iter()
            .try_fold(1usize, |acc, e| acc.checked_mul(*e))
            .ok_or(VoxelizationError::GridTooLarge { cells: usize::MAX })
    }

    /// Creates a grid from its row-major occupancy buffer.
    ///
    /// Fails if `data.len()` doesn’t match the number of cells described by `shape`.
    pub fn from_vec(shape: [usize; 3], data: Vec<bool>) -> Result<Self, VoxelizationError> {
        let expected = Self::num_cells(shape)?;

        if data.len() != expected {
            return Err(VoxelizationError::ShapeMismatch {
                expected,
                found: data.len(),
            });
        }

        Ok(Self { shape, data })
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// The total number of cells (occupied or not) of this grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Does this grid have zero cells?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The row-major occupancy buffer.
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// The mutable row-major occupancy buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [bool] {
        &mut self.data
    }

    /// The index of `cell` in the row-major occupancy buffer.
    #[inline]
    pub fn linear_index(&self, cell: [usize; 3]) -> usize {
        (cell[0] * self.shape[1] + cell[1]) * self.shape[2] + cell[2]
    }

    /// The cell stored at the given index of the row-major occupancy buffer.
    #[inline]
    pub fn cell_at(&self, linear_index: usize) -> [usize; 3] {
        let k = linear_index % self.shape[2];
        let ij = linear_index / self.shape[2];
        [ij / self.shape[1], ij % self.shape[1], k]
    }

    /// Is the given cell inside of this grid’s bounds?
    #[inline]
    pub fn contains(&self, cell: [usize; 3]) -> bool {
        cell[0] < self.shape[0] && cell[1] < self.shape[1] && cell[2] < self.shape[2]
    }

    /// Is the given cell occupied?
    ///
    /// Cells outside of this grid’s bounds are reported as empty.
    #[inline]
    pub fn get(&self, cell: [usize; 3]) -> bool {
        self.contains(cell) && self.data[self.linear_index(cell)]
    }

    /// Sets the occupancy of the given cell.
    ///
    /// # Panics
    /// Panics if `cell` is outside of this grid’s bounds.
    #[inline]
    pub fn set(&mut self, cell: [usize; 3], occupied: bool) {
        assert!(self.contains(cell), "voxel {cell:?} out of bounds");
        let id = self.linear_index(cell);
        self.data[id] = occupied;
    }

    /// The number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.data.iter().filter(|v| **v).count()
    }

    /// Iterates through all the occupied cells, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(id, _)| self.cell_at(id))
    }

    /// A grid of the same shape where every cell has the opposite occupancy.
    pub fn inverted(&self) -> Self {
        Self {
            shape: self.shape,
            data: self.data.iter().map(|v| !*v).collect(),
        }
    }

    /// The cells within `[mins, maxs)` along each axis, as a new grid.
    ///
    /// Bounds are clamped to this grid’s shape; an empty range yields a grid with a
    /// zero extent along that axis.
    pub fn crop(&self, mins: [usize; 3], maxs: [usize; 3]) -> Self {
        let maxs = [
            maxs[0].min(self.shape[0]),
            maxs[1].min(self.shape[1]),
            maxs[2].min(self.shape[2]),
        ];
        let shape = [
            maxs[0].saturating_sub(mins[0]),
            maxs[1].saturating_sub(mins[1]),
            maxs[2].saturating_sub(mins[2]),
        ];
        let mut result = Self::new(shape);

        for i in 0..shape[0] {
            for j in 0..shape[1] {
                let src = self.linear_index([mins[0] + i, mins[1] + j, mins[2]]);
                let dst = result.linear_index([i, j, 0]);
                result.data[dst..dst + shape[2]].copy_from_slice(&self.data[src..src + shape[2]]);
            }
        }

        result
    }

    /// Copies this grid into a larger one, surrounded by `width` cells set to `value`
    /// on every side.
    pub fn padded(&self, width: usize, value: bool) -> Self {
        let shape = self.shape.map(|s| s + 2 * width);
        let mut result = Self {
            shape,
            data: vec![value; shape[0] * shape[1] * shape[2]],
        };

        for i in 0..self.shape[0] {
            for j in 0..self.shape[1] {
                let src = self.linear_index([i, j, 0]);
                let dst = result.linear_index([i + width, j + width, width]);
                result.data[dst..dst + self.shape[2]]
                    .copy_from_slice(&self.data[src..src + self.shape[2]]);
            }
        }

        result
    }
}

/// The per-axis offsets removed when cropping a dense grid to its occupied cells.
///
/// `axes[d] == [low, high]` where `low` and `high` are the first and last indices
/// along the axis `d` containing at least one occupied cell in the original grid.
/// Adding `low(d)` to an index of the cropped grid gives the index in the original grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundingPadding {
    /// The `[low, high]` pair for each axis.
    pub axes: [[usize; 2]; 3],
}

impl BoundingPadding {
    /// The first occupied index along the given axis.
    #[inline]
    pub fn low(&self, axis: usize) -> usize {
        self.axes[axis][0]
    }

    /// The last occupied index along the given axis.
    #[inline]
    pub fn high(&self, axis: usize) -> usize {
        self.axes[axis][1]
    }

    /// Converts a cell index of the cropped grid into a cell index of the original grid.
    #[inline]
    pub fn to_original(&self, cell: [usize; 3]) -> [usize; 3] {
        [
            cell[0] + self.low(0),
            cell[1] + self.low(1),
            cell[2] + self.low(2),
        ]
    }
}
