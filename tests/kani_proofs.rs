//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use ordered_heap::{HeapPolicy, OrderedHeap};

#[cfg(kani)]
fn any_policy() -> HeapPolicy {
    if kani::any() {
        HeapPolicy::Min
    } else {
        HeapPolicy::Max
    }
}

/// Proof that push always increments the length and keeps the heap valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_push_keeps_invariant() {
    let mut heap: OrderedHeap<u8> = OrderedHeap::with_policy(any_policy());
    for _ in 0..4 {
        let before = heap.len();
        heap.push(kani::any());
        assert!(heap.len() == before + 1);
        assert!(heap.is_valid());
    }
}

/// Proof that the root is extreme under either policy
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_root_is_extreme() {
    let policy = any_policy();
    let mut heap: OrderedHeap<u8> = OrderedHeap::with_policy(policy);
    for _ in 0..4 {
        heap.push(kani::any());
    }

    let root = *heap.peek().unwrap();
    for value in heap.iter() {
        match policy {
            HeapPolicy::Min => assert!(root <= *value),
            HeapPolicy::Max => assert!(root >= *value),
        }
    }
}

/// Proof that removing any present value keeps the heap valid and drops
/// exactly one element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_remove_keeps_invariant() {
    let mut heap: OrderedHeap<u8> = OrderedHeap::with_policy(any_policy());
    for _ in 0..5 {
        heap.push(kani::any());
    }

    let index: usize = kani::any();
    kani::assume(index < heap.len());
    let target = heap[index];

    assert!(heap.remove(&target));
    assert!(heap.len() == 4);
    assert!(heap.is_valid());
}

/// Proof that removing an absent value leaves the heap unchanged
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_missing_is_noop() {
    let mut heap: OrderedHeap<u8> = OrderedHeap::with_policy(any_policy());
    for _ in 0..3 {
        let value: u8 = kani::any();
        kani::assume(value < 100);
        heap.push(value);
    }

    let before = heap.clone();
    assert!(!heap.remove(&200));
    assert!(heap.as_slice() == before.as_slice());
}
