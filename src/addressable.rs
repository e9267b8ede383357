//! Addressable k-ary min-heap
//!
//! A k-ary min-heap over (key, id) pairs where the caller addresses
//! elements by an identifier of their choosing: keys can be lowered in
//! place, updated in either direction, or removed before they reach
//! the front, all in logarithmic time.
//!
//! The structure is a pair of collections kept in lockstep: the
//! implicit-tree array of elements, and a hash map from identifier to
//! the element's current slot. Every slot exchange goes through one
//! routine that rewrites both position entries together with the
//! array swap, so there is no code path on which the two views can
//! diverge.
//!
//! Identifiers are caller-supplied and must be unique among the
//! elements currently in the heap; inserting a duplicate is reported
//! as an error rather than corrupting the index.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity       |
//! |----------------|------------------|
//! | `insert`       | O(log_k n)       |
//! | `extract_min`  | O(k · log_k n)   |
//! | `decrease_key` | O(log_k n)       |
//! | `update`       | O(k · log_k n)   |
//! | `remove`       | O(k · log_k n)   |
//! | `front_key` / `front_id` / `contains` | O(1) |
//!
//! # Example
//!
//! ```rust
//! use rust_kary_heaps::addressable::AddressableKaryHeap;
//!
//! let mut queue = AddressableKaryHeap::new(4);
//! queue.insert(7u32, 40).unwrap();
//! queue.insert(3, 10).unwrap();
//! queue.insert(9, 20).unwrap();
//!
//! queue.decrease_key(&7, 5).unwrap();
//! assert_eq!(queue.front_key(), Some(&5));
//! assert_eq!(queue.front_id(), Some(&7));
//!
//! assert_eq!(queue.extract_min(), Some((5, 7)));
//! assert_eq!(queue.remove(&9), Some((20, 9)));
//! assert_eq!(queue.extract_min(), Some((10, 3)));
//! assert!(queue.is_empty());
//! ```

use rustc_hash::FxHashMap;
use std::cmp;
use std::hash::Hash;
use std::mem;

use crate::error::HeapError;

/// A k-ary min-heap with O(1) lookup of any element's slot by id
///
/// Elements are `(key, id)` pairs stored in implicit-tree order; the
/// position map carries `id -> slot` for exactly the ids currently in
/// the heap. Slot 0 holds a minimum-key element whenever the heap is
/// non-empty.
#[derive(Debug)]
pub struct AddressableKaryHeap<I: Eq + Hash + Clone, P: Ord> {
    /// Branching factor, fixed at construction
    arity: usize,
    /// The heap data in implicit-tree order
    data: Vec<(P, I)>,
    /// id -> current slot, one entry per live element
    positions: FxHashMap<I, usize>,
}

impl<I: Eq + Hash + Clone, P: Ord> AddressableKaryHeap<I, P> {
    /// Creates an empty heap with branching factor `arity`.
    ///
    /// # Panics
    ///
    /// Panics if `arity < 2`.
    pub fn new(arity: usize) -> Self {
        assert!(arity >= 2, "branching factor must be at least 2");
        Self {
            arity,
            data: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Creates an empty heap preallocated for `capacity` elements.
    pub fn with_capacity(arity: usize, capacity: usize) -> Self {
        assert!(arity >= 2, "branching factor must be at least 2");
        Self {
            arity,
            data: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the branching factor of this heap.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if an element with identifier `id` is in the heap.
    pub fn contains(&self, id: &I) -> bool {
        self.positions.contains_key(id)
    }

    /// Returns the minimum key, or `None` if the heap is empty.
    pub fn front_key(&self) -> Option<&P> {
        self.data.first().map(|(key, _)| key)
    }

    /// Returns the identifier of the minimum-key element, or `None` if
    /// the heap is empty.
    pub fn front_id(&self) -> Option<&I> {
        self.data.first().map(|(_, id)| id)
    }

    /// Inserts an element with the given identifier and key.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::DuplicateId`] if an element with this
    /// identifier is already present. A duplicate entry would leave
    /// the position map pointing at only one of the two copies, so
    /// this is a caller bug and is reported loudly.
    pub fn insert(&mut self, id: I, key: P) -> Result<(), HeapError> {
        if self.positions.contains_key(&id) {
            return Err(HeapError::DuplicateId);
        }
        self.push_new(id, key);
        Ok(())
    }

    /// Lowers the key of the element with identifier `id`.
    ///
    /// Does nothing if no such element is in the heap. Lowering the
    /// key can only move the element toward the root, so a single
    /// sift-up restores the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::KeyNotDecreased`] if `new_key` is greater
    /// than the element's current key; use [`update`](Self::update)
    /// for changes in either direction.
    pub fn decrease_key(&mut self, id: &I, new_key: P) -> Result<(), HeapError> {
        let slot = match self.positions.get(id) {
            Some(&slot) => slot,
            None => return Ok(()),
        };
        if new_key > self.data[slot].0 {
            return Err(HeapError::KeyNotDecreased);
        }
        self.data[slot].0 = new_key;
        self.sift_up(slot);
        Ok(())
    }

    /// Sets the key of the element with identifier `id`, inserting the
    /// element if it is not present.
    ///
    /// The new key may be smaller or greater than the current one; the
    /// element is sifted toward the root or toward the leaves
    /// accordingly, so the heap invariant holds on return either way.
    pub fn update(&mut self, id: I, new_key: P) {
        match self.positions.get(&id) {
            Some(&slot) => {
                if new_key < self.data[slot].0 {
                    self.data[slot].0 = new_key;
                    self.sift_up(slot);
                } else if new_key > self.data[slot].0 {
                    self.data[slot].0 = new_key;
                    self.sift_down(slot);
                }
            }
            None => self.push_new(id, new_key),
        }
    }

    /// Removes and returns the minimum-key element, or `None` if the
    /// heap is empty.
    pub fn extract_min(&mut self) -> Option<(P, I)> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            self.positions.remove(&last.1);
            return Some(last);
        }
        let min = mem::replace(&mut self.data[0], last);
        self.positions.remove(&min.1);
        self.positions.insert(self.data[0].1.clone(), 0);
        self.sift_down(0);
        Some(min)
    }

    /// Removes the element with identifier `id`, returning its
    /// `(key, id)` pair, or `None` if no such element is in the heap.
    ///
    /// The last element is moved into the vacated slot and sifted in
    /// whichever direction the invariant requires (at most one of the
    /// two sifts moves anything). This works for any `Ord` key; no
    /// sentinel minimum value is needed.
    pub fn remove(&mut self, id: &I) -> Option<(P, I)> {
        let slot = *self.positions.get(id)?;
        let last = self.data.len() - 1;
        self.data.swap(slot, last);
        let removed = self.data.pop()?;
        self.positions.remove(&removed.1);
        if slot < self.data.len() {
            self.positions.insert(self.data[slot].1.clone(), slot);
            self.sift_up(slot);
            self.sift_down(slot);
        }
        Some(removed)
    }

    /// Drops all elements and their position entries.
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Verifies the min-heap invariant over the whole backing array.
    ///
    /// O(n) full scan. Diagnostic only, never called by the other
    /// operations.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|slot| self.data[(slot - 1) / self.arity].0 <= self.data[slot].0)
    }

    /// Append a new element and restore the invariant. The caller
    /// guarantees `id` is not already present.
    fn push_new(&mut self, id: I, key: P) {
        let slot = self.data.len();
        self.positions.insert(id.clone(), slot);
        self.data.push((key, id));
        self.sift_up(slot);
    }

    /// Exchange two slots, rewriting both position entries.
    ///
    /// This is the only routine that moves elements between slots, so
    /// the array and the position map cannot get out of step.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        let id_a = self.data[a].1.clone();
        self.positions.insert(id_a, a);
        let id_b = self.data[b].1.clone();
        self.positions.insert(id_b, b);
    }

    /// Move the element at `slot` up until its parent is no larger
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / self.arity;
            if self.data[slot].0 < self.data[parent].0 {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `slot` down while some child is smaller
    fn sift_down(&mut self, mut slot: usize) {
        while let Some(child) = self.min_child(slot) {
            if self.data[child].0 < self.data[slot].0 {
                self.swap_slots(slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }

    /// Index of the smallest existing child of `slot`, or `None` for a
    /// leaf. Ties go to the lowest child index.
    fn min_child(&self, slot: usize) -> Option<usize> {
        let first = self.arity * slot + 1;
        if first >= self.data.len() {
            return None;
        }
        let last = cmp::min(first + self.arity, self.data.len());
        (first..last).min_by_key(|&child| &self.data[child].0)
    }
}
