//! Edge-case tests for both heap variants
//!
//! Empty heaps, single elements, duplicate identifiers, operations on
//! absent identifiers, and the smallest allowed branching factor.

use rust_kary_heaps::{AddressableKaryHeap, HeapError, KaryHeap};

#[test]
fn test_empty_plain_heap() {
    let mut heap = KaryHeap::<i64>::new(4);

    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.extract_min(), None);
    // Vacuously true on an empty heap.
    assert!(heap.is_heap());
}

#[test]
fn test_empty_addressable_heap() {
    let mut heap = AddressableKaryHeap::<u32, i64>::new(4);

    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.extract_min(), None);
    assert_eq!(heap.front_key(), None);
    assert_eq!(heap.front_id(), None);
    assert!(!heap.contains(&0));
    assert!(heap.is_heap());
}

#[test]
fn test_single_element_lifecycle() {
    let mut heap = AddressableKaryHeap::new(2);

    heap.insert(5u32, 42i64).unwrap();
    assert_eq!(heap.len(), 1);
    assert!(heap.contains(&5));
    assert_eq!(heap.front_key(), Some(&42));
    assert_eq!(heap.front_id(), Some(&5));

    assert_eq!(heap.extract_min(), Some((42, 5)));
    assert!(heap.is_empty());
    assert!(!heap.contains(&5));
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_duplicate_id_rejected() {
    let mut heap = AddressableKaryHeap::new(4);

    heap.insert(1u32, 10i64).unwrap();
    assert_eq!(heap.insert(1, 99), Err(HeapError::DuplicateId));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.front_key(), Some(&10));

    // The id becomes available again once the element leaves.
    assert_eq!(heap.extract_min(), Some((10, 1)));
    heap.insert(1, 99).unwrap();
    assert_eq!(heap.front_key(), Some(&99));
}

#[test]
fn test_absent_id_operations_are_noops() {
    let mut heap = AddressableKaryHeap::new(4);
    heap.insert(0u32, 10i64).unwrap();

    assert!(heap.decrease_key(&7, -100).is_ok());
    assert_eq!(heap.remove(&7), None);
    assert_eq!(heap.len(), 1);
    assert!(heap.is_heap());
}

#[test]
fn test_removal_bookkeeping_is_idempotent() {
    let mut heap = AddressableKaryHeap::new(4);
    for id in 0..5u32 {
        heap.insert(id, i64::from(id)).unwrap();
    }

    assert_eq!(heap.remove(&3), Some((3, 3)));
    assert!(!heap.contains(&3));

    // A second removal and a decrease on the gone id do nothing.
    assert_eq!(heap.remove(&3), None);
    assert!(heap.decrease_key(&3, -100).is_ok());
    assert_eq!(heap.len(), 4);
    assert!(!heap.contains(&3));
    assert!(heap.is_heap());
}

#[test]
fn test_decrease_key_never_increases() {
    let mut heap = AddressableKaryHeap::new(2);
    heap.insert(0u32, 0i64).unwrap();
    heap.insert(1, 5).unwrap();

    assert_eq!(heap.decrease_key(&1, 6), Err(HeapError::KeyNotDecreased));
    assert_eq!(heap.remove(&1), Some((5, 1)));
}

#[test]
fn test_update_raises_key_of_the_minimum() {
    let mut heap = AddressableKaryHeap::new(2);
    for id in 0..7u32 {
        heap.insert(id, i64::from(id)).unwrap();
    }

    // Raising the root's key must push it down, not leave a broken
    // subtree behind.
    heap.update(0, 100);
    assert!(heap.is_heap());
    assert_eq!(heap.front_id(), Some(&1));

    let mut order = Vec::new();
    while let Some((_, id)) = heap.extract_min() {
        order.push(id);
    }
    assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 0]);
}

#[test]
fn test_update_absent_inserts() {
    let mut heap = AddressableKaryHeap::new(4);
    heap.update(9u32, 1i64);

    assert_eq!(heap.len(), 1);
    assert!(heap.contains(&9));
    assert_eq!(heap.extract_min(), Some((1, 9)));
}

#[test]
fn test_equal_keys_all_extracted() {
    let mut heap = AddressableKaryHeap::new(2);
    for id in 0..6u32 {
        heap.insert(id, 7i64).unwrap();
    }

    let mut ids = Vec::new();
    while let Some((key, id)) = heap.extract_min() {
        assert_eq!(key, 7);
        ids.push(id);
    }
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_minimum_branching_factor() {
    let mut heap = AddressableKaryHeap::new(2);
    assert_eq!(heap.arity(), 2);

    for id in 0..32u32 {
        heap.insert(id, i64::from(31 - id)).unwrap();
    }
    assert!(heap.is_heap());
    assert_eq!(heap.front_key(), Some(&0));
    assert_eq!(heap.front_id(), Some(&31));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        HeapError::DuplicateId.to_string(),
        "an element with this identifier is already in the heap"
    );
    assert_eq!(
        HeapError::KeyNotDecreased.to_string(),
        "new key is greater than the current key"
    );
}
