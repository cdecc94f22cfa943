//! In-place teaching sorts over slices.
//!
//! Both algorithms are O(n²) and neither is stable. They exist for
//! [`DynamicArray::bubble_sort`](crate::DynamicArray::bubble_sort) and
//! [`DynamicArray::selection_sort`](crate::DynamicArray::selection_sort),
//! but work on any `&mut [T]`.

/// Sorts `data` ascending by swapping adjacent out-of-order pairs.
///
/// Stops after the first pass that makes no swap. Returns the number of
/// passes run, which is `0` for slices shorter than two elements.
pub fn bubble_sort<T: Ord>(data: &mut [T]) -> usize {
    let n = data.len();
    let mut passes = 0;
    for i in 0..n.saturating_sub(1) {
        passes += 1;
        let mut swapped = false;
        // The last `i` elements are already in their final place.
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    passes
}

/// Sorts `data` ascending by moving the minimum of the unsorted tail into
/// place, one position at a time.
///
/// The first minimum found wins ties. Returns the number of swaps performed.
pub fn selection_sort<T: Ord>(data: &mut [T]) -> usize {
    let n = data.len();
    let mut swaps = 0;
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
            swaps += 1;
        }
    }
    swaps
}
