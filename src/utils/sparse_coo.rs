use alloc::vec::Vec;
use core::cmp::Ordering;

/// A sparse 3D boolean tensor in coordinate (COO) format.
///
/// Only the coordinates of the `true` elements are stored, sorted in row-major
/// order and without duplicates. Memory usage is proportional to the number of
/// `true` elements, regardless of the tensor’s shape.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SparseCoo {
    shape: [u64; 3],
    coords: Vec<[u64; 3]>,
}

impl SparseCoo {
    /// Builds a sparse tensor of the given shape, `true` at each of `coords`.
    ///
    /// Duplicate coordinates are merged. Returns `None` if any coordinate lies
    /// outside of `shape`.
    pub fn from_coords(shape: [u64; 3], coords: impl IntoIterator<Item = [u64; 3]>) -> Option<Self> {
        let mut coords: Vec<_> = coords.into_iter().collect();

        if coords
            .iter()
            .any(|c| c[0] >= shape[0] || c[1] >= shape[1] || c[2] >= shape[2])
        {
            return None;
        }

        coords.sort_unstable();
        coords.dedup();
        Some(Self { shape, coords })
    }

    /// The shape of this tensor.
    #[inline]
    pub fn shape(&self) -> [u64; 3] {
        self.shape
    }

    /// The number of `true` elements.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.coords.len()
    }

    /// The coordinates of the `true` elements, in row-major order.
    #[inline]
    pub fn coords(&self) -> &[[u64; 3]] {
        &self.coords
    }

    /// Is the element at `coord` true?
    pub fn get(&self, coord: [u64; 3]) -> bool {
        self.coords.binary_search(&coord).is_ok()
    }

    /// Element-wise logical AND.
    ///
    /// # Panics
    /// Panics if both tensors don’t have the same shape.
    pub fn and(&self, other: &Self) -> Self {
        self.merge(other, false, true, false)
    }

    /// Element-wise logical OR.
    ///
    /// # Panics
    /// Panics if both tensors don’t have the same shape.
    pub fn or(&self, other: &Self) -> Self {
        self.merge(other, true, true, true)
    }

    /// Element-wise `self AND NOT other`.
    ///
    /// # Panics
    /// Panics if both tensors don’t have the same shape.
    pub fn and_not(&self, other: &Self) -> Self {
        self.merge(other, true, false, false)
    }

    // Single pass over both sorted coordinate lists. The flags tell which elements to keep:
    // those only in `self`, those in both, and those only in `other`.
    fn merge(&self, other: &Self, keep_left: bool, keep_both: bool, keep_right: bool) -> Self {
        assert_eq!(
            self.shape, other.shape,
            "sparse tensors must have the same shape"
        );

        let mut coords = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.coords.len() && j < other.coords.len() {
            match self.coords[i].cmp(&other.coords[j]) {
                Ordering::Less => {
                    if keep_left {
                        coords.push(self.coords[i]);
                    }
                    i += 1;
                }
                Ordering::Greater => {
                    if keep_right {
                        coords.push(other.coords[j]);
                    }
                    j += 1;
                }
                Ordering::Equal => {
                    if keep_both {
                        coords.push(self.coords[i]);
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        if keep_left {
            coords.extend_from_slice(&self.coords[i..]);
        }
        if keep_right {
            coords.extend_from_slice(&other.coords[j..]);
        }

        Self {
            shape: self.shape,
            coords,
        }
    }
}
