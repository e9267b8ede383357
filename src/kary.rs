//! Plain k-ary min-heap
//!
//! An array-backed min-heap where every node has up to `k` children,
//! generalizing the binary heap. The branching factor is chosen at
//! construction time; wider heaps trade deeper comparisons per level
//! for a shallower tree, which tends to favor insert-heavy workloads.
//!
//! This variant stores bare keys and does not track element identity.
//! If you need to update or remove elements that are already in the
//! heap, use [`AddressableKaryHeap`](crate::addressable::AddressableKaryHeap)
//! instead.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity       |
//! |---------------|------------------|
//! | `insert`      | O(log_k n)       |
//! | `extract_min` | O(k · log_k n)   |
//! | `peek`        | O(1)             |
//! | `insert_many` | O(m · log_k n)   |
//!
//! # Example
//!
//! ```rust
//! use rust_kary_heaps::kary::KaryHeap;
//!
//! let mut heap = KaryHeap::new(4);
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.extract_min(), Some(2));
//! assert_eq!(heap.extract_min(), Some(3));
//! assert_eq!(heap.extract_min(), None);
//! ```

use std::cmp;
use std::mem;

/// A k-ary min-heap over bare keys
///
/// The element at slot 0 is always a minimum. For a slot `i > 0` the
/// parent lives at `(i - 1) / k` and the children of `i` occupy
/// `k*i + 1 ..= k*i + k` (those below `len`).
#[derive(Debug)]
pub struct KaryHeap<P: Ord> {
    /// Branching factor, fixed at construction
    arity: usize,
    /// The heap data in implicit-tree order
    data: Vec<P>,
}

impl<P: Ord> KaryHeap<P> {
    /// Creates an empty heap with branching factor `arity`.
    ///
    /// # Panics
    ///
    /// Panics if `arity < 2`. A one-way "heap" is a linked list and
    /// never what the caller meant.
    pub fn new(arity: usize) -> Self {
        assert!(arity >= 2, "branching factor must be at least 2");
        Self {
            arity,
            data: Vec::new(),
        }
    }

    /// Creates an empty heap preallocated for `capacity` elements.
    pub fn with_capacity(arity: usize, capacity: usize) -> Self {
        assert!(arity >= 2, "branching factor must be at least 2");
        Self {
            arity,
            data: Vec::with_capacity(capacity),
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

    /// Returns the minimum key without removing it, or `None` if the
    /// heap is empty.
    pub fn peek(&self) -> Option<&P> {
        self.data.first()
    }

    /// Inserts a key.
    pub fn insert(&mut self, key: P) {
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
    }

    /// Inserts every key yielded by `keys`.
    ///
    /// The batch is appended first and then each new slot is sifted up
    /// in ascending index order. That order is what makes the loop
    /// correct: a sift-up only moves elements along the ancestor path,
    /// so slots appended later are untouched when their turn comes.
    /// A bulk O(n) heapify would also work but is not worth the extra
    /// code at this size.
    pub fn insert_many<T>(&mut self, keys: T)
    where
        T: IntoIterator<Item = P>,
    {
        let start = self.data.len();
        self.data.extend(keys);
        for slot in start..self.data.len() {
            self.sift_up(slot);
        }
    }

    /// Removes and returns the minimum key, or `None` if the heap is
    /// empty.
    pub fn extract_min(&mut self) -> Option<P> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let min = mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(min)
    }

    /// Drops all elements.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Verifies the min-heap invariant over the whole backing array.
    ///
    /// O(n) full scan. Diagnostic only, never called by the other
    /// operations.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|slot| self.data[(slot - 1) / self.arity] <= self.data[slot])
    }

    /// Move the element at `slot` up until its parent is no larger
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / self.arity;
            if self.data[slot] < self.data[parent] {
                self.data.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `slot` down while some child is smaller
    fn sift_down(&mut self, mut slot: usize) {
        while let Some(child) = self.min_child(slot) {
            if self.data[child] < self.data[slot] {
                self.data.swap(slot, child);
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
        (first..last).min_by_key(|&child| &self.data[child])
    }
}
