//! Common traits and the error type for heap containers
//!
//! [`Heap`] is the small interface every heap in this crate implements. It
//! follows the shape of `std::collections::BinaryHeap`:
//! - `push` inserts an element
//! - `peek` returns the root element without removing it
//! - `pop` removes and returns the root element
//!
//! Which element sits at the root depends on the heap's ordering policy,
//! so unlike `BinaryHeap` a heap here can be either a min-heap or a max-heap.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// An index-based operation addressed a slot past the end of the heap
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Length of the indexed sequence at the time of the call
        len: usize,
    },
    /// A destination buffer cannot hold every element of the heap
    InsufficientSpace {
        /// Slots required from the requested offset onward
        needed: usize,
        /// Slots available from the requested offset onward
        available: usize,
    },
    /// A string did not name a known ordering policy
    InvalidPolicy(String),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for heap of length {len}")
            }
            HeapError::InsufficientSpace { needed, available } => {
                write!(
                    f,
                    "destination has room for {available} elements but {needed} are required"
                )
            }
            HeapError::InvalidPolicy(name) => {
                write!(f, "unknown heap policy {name:?} (expected \"min\" or \"max\")")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue containers
///
/// # Example
///
/// ```rust
/// use ordered_heap::{Heap, HeapPolicy, OrderedHeap};
///
/// fn drain<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::with_capacity(heap.len());
///     while let Some(item) = heap.pop() {
///         out.push(item);
///     }
///     out
/// }
///
/// let mut heap = OrderedHeap::with_policy(HeapPolicy::Max);
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(drain(&mut heap), vec![3, 2, 1]);
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the root element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the root element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
