//! Array-backed binary heap with a selectable ordering policy
//!
//! [`OrderedHeap`] keeps its elements in a single `Vec<T>`. The tree shape is
//! implicit in the indices: the parent of `i` is `(i - 1) / 2` and its
//! children are `2i + 1` and `2i + 2`. Every public mutation restores the
//! heap property before returning: no element is better than its parent
//! under the heap's [`HeapOrder`].
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `push`        | O(log n)   |
//! | `pop`         | O(log n)   |
//! | `peek`        | O(1)       |
//! | `remove`      | O(n)       |
//! | `remove_at`   | O(log n)   |
//! | `replace_at`  | O(log n)   |
//! | `set_policy`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use ordered_heap::{HeapPolicy, OrderedHeap};
//!
//! let mut heap = OrderedHeap::from_elements([5, 3, 8, 1, 4], HeapPolicy::Min);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! assert!(heap.remove(&3));
//! assert!(!heap.remove(&3));
//!
//! assert_eq!(heap.into_sorted_vec(), vec![1, 4, 5, 8]);
//! ```

use std::ops::Index;

use log::{debug, trace};

use crate::policy::{HeapOrder, HeapPolicy};
use crate::traits::{Heap, HeapError};

/// A binary heap over a dense array, ordered by `C`
///
/// With the default `C = HeapPolicy` the element type must be `Ord` and the
/// heap is either a min-heap or a max-heap. Any other [`HeapOrder`], such as
/// [`ByComparator`](crate::ByComparator), lifts that requirement.
///
/// Elements are only reachable read-only by position. Use
/// [`replace_at`](Self::replace_at) to change an element in place; it moves
/// the new value to wherever the ordering requires.
#[derive(Debug, Clone)]
pub struct OrderedHeap<T, C = HeapPolicy> {
    data: Vec<T>,
    order: C,
}

impl<T: Ord> OrderedHeap<T, HeapPolicy> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_policy(HeapPolicy::Min)
    }

    /// Creates an empty heap with the given policy
    pub fn with_policy(policy: HeapPolicy) -> Self {
        Self::with_order(policy)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize, policy: HeapPolicy) -> Self {
        Self::with_capacity_and_order(capacity, policy)
    }

    /// Builds a heap by pushing every element of `elements` in input order
    pub fn from_elements<I>(elements: I, policy: HeapPolicy) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self::with_policy(policy);
        heap.extend(elements);
        debug!("built {} heap with {} elements", policy, heap.len());
        heap
    }

    /// The ordering policy currently in force
    pub fn policy(&self) -> HeapPolicy {
        self.order
    }

    /// Switches to `policy` and reorders the existing elements to match
    ///
    /// Setting the policy already in force does nothing.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn set_policy(&mut self, policy: HeapPolicy) {
        if self.order == policy {
            return;
        }
        debug!(
            "switching heap policy from {} to {}, reheapifying {} elements",
            self.order,
            policy,
            self.data.len()
        );
        self.order = policy;
        self.rebuild();
    }
}

impl<T, C> OrderedHeap<T, C> {
    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Drops any spare capacity
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The ordering strategy of this heap
    pub fn order(&self) -> &C {
        &self.order
    }

    /// Returns the element at `index` in array order
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Elements in array order, which is heap order and not sorted order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in array order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its storage in array order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns true if some element equals `item`
    ///
    /// # Time Complexity
    /// O(n)
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(item)
    }

    /// Clones every element, in array order, into `dest` starting at `offset`
    ///
    /// `dest` is left untouched on error.
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), HeapError>
    where
        T: Clone,
    {
        if offset > dest.len() {
            return Err(HeapError::IndexOutOfBounds {
                index: offset,
                len: dest.len(),
            });
        }
        let available = dest.len() - offset;
        if available < self.data.len() {
            return Err(HeapError::InsufficientSpace {
                needed: self.data.len(),
                available,
            });
        }
        dest[offset..offset + self.data.len()].clone_from_slice(&self.data);
        Ok(())
    }
}

impl<T, C: HeapOrder<T>> OrderedHeap<T, C> {
    /// Creates an empty heap ordered by `order`
    pub fn with_order(order: C) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap ordered by `order` with room for `capacity` elements
    pub fn with_capacity_and_order(capacity: usize, order: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the root element
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        self.remove_at(0).ok()
    }

    /// Removes one element equal to `item`
    ///
    /// Returns false, leaving the heap unchanged, if no element matches. When
    /// several elements are equal to `item` exactly one of them is removed.
    ///
    /// # Time Complexity
    /// O(n) to find the element, then O(log n) to repair the heap
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.data.iter().position(|candidate| candidate == item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => {
                trace!("remove: no matching element among {}", self.data.len());
                false
            }
        }
    }

    /// Removes and returns the element at `index`
    ///
    /// The last element takes the vacated slot and is then moved up or down
    /// until the heap property holds again.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfBounds` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        self.check_index(index)?;
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.resift(index);
        }
        Ok(removed)
    }

    /// Replaces the element at `index`, returning the old one
    ///
    /// The new value is moved up or down as needed, so the heap stays valid.
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfBounds` if `index >= len()`.
    pub fn replace_at(&mut self, index: usize, item: T) -> Result<T, HeapError> {
        self.check_index(index)?;
        let old = std::mem::replace(&mut self.data[index], item);
        self.resift(index);
        Ok(old)
    }

    /// Consumes the heap, returning its elements best-first
    ///
    /// Ascending for a min-heap, descending for a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the heap property at every non-root index
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.order.is_better(&self.data[i], &self.data[parent])
        })
    }

    fn check_index(&self, index: usize) -> Result<(), HeapError> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(HeapError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
        }
    }

    /// Restores the heap property around a slot whose value just changed
    fn resift(&mut self, index: usize) {
        if index > 0 && self.order.is_better(&self.data[index], &self.data[(index - 1) / 2]) {
            trace!("resift: sifting up from {index}");
            self.sift_up(index);
        } else {
            trace!("resift: sifting down from {index}");
            self.sift_down(index);
        }
    }

    /// Move element at index up while it is better than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.order.is_better(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while some child is better than it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child =
                if right < len && self.order.is_better(&self.data[right], &self.data[left]) {
                    right
                } else {
                    left
                };

            if self.order.is_better(&self.data[child], &self.data[index]) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Bottom-up heapify of the whole array
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, C: HeapOrder<T>> Heap<T> for OrderedHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        OrderedHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        OrderedHeap::pop(self)
    }
}

impl<T: Ord> Default for OrderedHeap<T, HeapPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Index<usize> for OrderedHeap<T, C> {
    type Output = T;

    /// Panics if `index` is out of bounds, like slice indexing
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, C: HeapOrder<T>> Extend<T> for OrderedHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedHeap<T, HeapPolicy> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter, HeapPolicy::Min)
    }
}

impl<T, C> IntoIterator for OrderedHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
