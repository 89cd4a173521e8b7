//! Array-backed binary heaps with a per-instance ordering policy
//!
//! This crate provides [`OrderedHeap`], a binary heap stored in a single
//! `Vec`, whose ordering is chosen when the heap is created rather than
//! fixed by the type:
//!
//! - [`HeapPolicy::Min`] keeps the smallest element at the root
//! - [`HeapPolicy::Max`] keeps the largest element at the root
//! - [`ByComparator`] orders elements with any three-way comparator
//!
//! Besides `push`/`pop`, the heap supports removing an arbitrary element by
//! value or by position and replacing an element in place, all of which
//! restore the heap property before returning.
//!
//! # Example
//!
//! ```rust
//! use ordered_heap::{HeapPolicy, OrderedHeap};
//!
//! let mut heap = OrderedHeap::with_policy(HeapPolicy::Max);
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//!
//! assert_eq!(heap.peek(), Some(&8));
//! assert!(heap.remove(&5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```
//!
//! # Logging
//!
//! Operations report through the [`log`] facade at `debug` and `trace`
//! level. No logger is installed by this crate.

pub mod ordered;
pub mod policy;
pub mod traits;

pub use ordered::OrderedHeap;
pub use policy::{ByComparator, HeapOrder, HeapPolicy};
pub use traits::{Heap, HeapError};
