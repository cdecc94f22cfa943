//! A growable array container for teaching: indexed access, removal by
//! value, deduplication, sub-ranging, reversal, and two hand-written sorts.
//!
//! # History
//!
//! - 1.0: construction, `size`/`get`/`set`, `add`, `index_of`, `count_of`,
//!   the `remove` family, `remove_duplicates`, and length-based `compare_to`.
//! - 1.1: `sub_array`, `sub_array_range`, `bubble_sort`, `selection_sort`
//!   and `reverse`. `compare_to` checks equality before length.
//!
//! Only the 1.1 behaviour is provided.

mod dynamic_array;
mod error;
pub mod sort;

pub use dynamic_array::DynamicArray;
pub use error::{ArrayError, Result};
