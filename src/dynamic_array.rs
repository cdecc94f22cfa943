use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use crate::error::{ArrayError, Result};
use crate::sort;

/// A growable, index-addressable sequence of `T`.
///
/// Elements are stored contiguously in a `Vec<T>`; valid indices are always
/// `0..size()`. Sub-range operations return a new array and never touch the
/// receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data.get(index).ok_or_else(|| out_of_range(index, len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data.get_mut(index).ok_or_else(|| out_of_range(index, len))
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Overwrites the element at `index`, returning the value it replaced.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, item))
    }

    /// Appends `item` to the end. Amortized O(1).
    pub fn add(&mut self, item: T) {
        self.data.push(item);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Length-only ordering. Unlike [`compare_to`](Self::compare_to) this is
    /// a consistent total preorder.
    pub fn cmp_len(&self, other: &Self) -> Ordering {
        self.size().cmp(&other.size())
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Builds an array holding a copy of `items`.
    pub fn from_slice(items: &[T]) -> Self {
        Self {
            data: items.to_vec(),
        }
    }

    /// Owned snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Copies `start..size()` into a new array.
    ///
    /// `start == size()` yields an empty array; anything past that is
    /// [`ArrayError::IndexOutOfRange`].
    pub fn sub_array(&self, start: usize) -> Result<Self> {
        let len = self.data.len();
        if start > len {
            return Err(out_of_range(start, len));
        }
        Ok(Self::from_slice(&self.data[start..]))
    }

    /// Copies `start..end` into a new array.
    pub fn sub_array_range(&self, start: usize, end: usize) -> Result<Self> {
        let len = self.data.len();
        if end < start || start > len || end > len {
            tracing::debug!(start, end, len, "invalid sub-array range");
            return Err(ArrayError::InvalidRange { start, end, len });
        }
        Ok(Self::from_slice(&self.data[start..end]))
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Index of the first element equal to `target`, or `None`.
    pub fn index_of(&self, target: &T) -> Option<usize> {
        self.data.iter().position(|x| x == target)
    }

    pub fn count_of(&self, target: &T) -> usize {
        self.data.iter().filter(|x| *x == target).count()
    }

    pub fn contains(&self, target: &T) -> bool {
        self.index_of(target).is_some()
    }

    /// Removes the first element equal to `target`. Returns whether one was
    /// found.
    pub fn remove(&mut self, target: &T) -> bool {
        match self.index_of(target) {
            Some(idx) => {
                self.data.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes at most `max_count` elements equal to `target`, front to back,
    /// keeping the order of everything else. Returns how many were removed.
    pub fn remove_n(&mut self, target: &T, max_count: usize) -> usize {
        let mut removed = 0;
        self.data.retain(|x| {
            if removed < max_count && x == target {
                removed += 1;
                false
            } else {
                true
            }
        });
        tracing::trace!(removed, max_count, "remove_n");
        removed
    }

    /// Removes every element equal to `target`. Returns how many were removed.
    pub fn remove_all(&mut self, target: &T) -> usize {
        let before = self.data.len();
        self.data.retain(|x| x != target);
        let removed = before - self.data.len();
        tracing::trace!(removed, "remove_all");
        removed
    }

    /// Keeps only the first occurrence of each distinct value, in order.
    ///
    /// Uses equality alone, so this is O(n²).
    pub fn remove_duplicates(&mut self) {
        let before = self.data.len();
        let mut kept: Vec<T> = Vec::with_capacity(before);
        for item in self.data.drain(..) {
            if !kept.contains(&item) {
                kept.push(item);
            }
        }
        self.data = kept;
        tracing::trace!(removed = before - self.data.len(), "remove_duplicates");
    }

    /// Legacy comparison kept for compatibility: `Equal` when the arrays are
    /// equal, otherwise `Greater` if `other` is shorter and `Less` in every
    /// other case.
    ///
    /// This is not a lawful ordering (two unequal arrays of the same length
    /// are each `Less` than the other), which is why `DynamicArray` does not
    /// implement `PartialOrd`. Prefer [`cmp_len`](Self::cmp_len).
    pub fn compare_to(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if other.size() < self.size() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl<T: PartialEq + 'static> DynamicArray<T> {
    /// `false` unless `other` is a `DynamicArray<T>` with equal contents.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// [`compare_to`](Self::compare_to) against a value of unknown type;
    /// anything that is not a `DynamicArray<T>` compares `Less`.
    pub fn compare_to_any(&self, other: &dyn Any) -> Ordering {
        match other.downcast_ref::<Self>() {
            Some(other) => self.compare_to(other),
            None => Ordering::Less,
        }
    }
}

impl<T: Ord> DynamicArray<T> {
    /// Sorts ascending with bubble sort, stopping early once a pass makes no
    /// swap. Not stable.
    pub fn bubble_sort(&mut self) {
        let passes = sort::bubble_sort(&mut self.data);
        tracing::trace!(len = self.data.len(), passes, "bubble_sort");
    }

    /// Sorts ascending with selection sort. Not stable.
    pub fn selection_sort(&mut self) {
        let swaps = sort::selection_sort(&mut self.data);
        tracing::trace!(len = self.data.len(), swaps, "selection_sort");
    }
}

fn out_of_range(index: usize, len: usize) -> ArrayError {
    tracing::debug!(index, len, "index out of range");
    ArrayError::IndexOutOfRange { index, len }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            data: Vec::from(items),
        }
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.data
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> core::ops::Index<usize> for DynamicArray<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> core::ops::IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
