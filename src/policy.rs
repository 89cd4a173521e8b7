//! Ordering policies
//!
//! A heap only ever asks one question of its elements: must `a` sit closer
//! to the root than `b`? [`HeapOrder`] captures that question, so the sift
//! routines in [`OrderedHeap`](crate::OrderedHeap) are written once and work
//! for min-heaps, max-heaps, and heaps ordered by a caller-supplied
//! comparator.
//!
//! # Example
//!
//! ```rust
//! use ordered_heap::{ByComparator, HeapPolicy, OrderedHeap};
//!
//! // Order strings by length, longest first.
//! let order = ByComparator::new(HeapPolicy::Max, |a: &&str, b: &&str| a.len().cmp(&b.len()));
//! let mut heap = OrderedHeap::with_order(order);
//! heap.push("fig");
//! heap.push("banana");
//! heap.push("kiwi");
//! assert_eq!(heap.pop(), Some("banana"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::traits::HeapError;

/// Strategy deciding which of two elements belongs nearer the root
pub trait HeapOrder<T> {
    /// Returns true iff `a` must sit strictly closer to the root than `b`
    ///
    /// Equal elements are never better than each other, which keeps the
    /// sift routines from swapping ties.
    fn is_better(&self, a: &T, b: &T) -> bool;
}

/// Direction of the heap ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeapPolicy {
    /// Smallest element at the root
    #[default]
    Min,
    /// Largest element at the root
    Max,
}

impl HeapPolicy {
    /// The opposite policy
    pub fn reverse(self) -> Self {
        match self {
            HeapPolicy::Min => HeapPolicy::Max,
            HeapPolicy::Max => HeapPolicy::Min,
        }
    }

    /// Interprets a three-way comparison of `a` against `b` under this policy
    #[inline]
    pub fn prefers(self, ordering: Ordering) -> bool {
        match self {
            HeapPolicy::Min => ordering == Ordering::Less,
            HeapPolicy::Max => ordering == Ordering::Greater,
        }
    }
}

impl<T: Ord> HeapOrder<T> for HeapPolicy {
    #[inline]
    fn is_better(&self, a: &T, b: &T) -> bool {
        self.prefers(a.cmp(b))
    }
}

impl fmt::Display for HeapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapPolicy::Min => f.write_str("min"),
            HeapPolicy::Max => f.write_str("max"),
        }
    }
}

impl FromStr for HeapPolicy {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(HeapPolicy::Min),
            "max" => Ok(HeapPolicy::Max),
            _ => Err(HeapError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Orders elements with a caller-supplied three-way comparator
///
/// Useful for element types without an `Ord` impl, or to order by a key.
/// Under [`HeapPolicy::Min`] an element comparing `Less` is better; under
/// [`HeapPolicy::Max`] an element comparing `Greater` is.
#[derive(Clone, Copy)]
pub struct ByComparator<F> {
    policy: HeapPolicy,
    compare: F,
}

impl<F> ByComparator<F> {
    /// Creates a comparator-based order with the given direction
    pub fn new(policy: HeapPolicy, compare: F) -> Self {
        Self { policy, compare }
    }

    /// The direction this order applies to the comparator
    pub fn policy(&self) -> HeapPolicy {
        self.policy
    }
}

impl<T, F> HeapOrder<T> for ByComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn is_better(&self, a: &T, b: &T) -> bool {
        self.policy.prefers((self.compare)(a, b))
    }
}

impl<F> fmt::Debug for ByComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByComparator")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
