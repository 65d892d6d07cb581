//! Various unsorted geometrical and logical operators.

pub use self::sorted_pair::SortedPair;
pub use self::sparse_coo::SparseCoo;

pub mod hashmap;
mod sorted_pair;
mod sparse_coo;
