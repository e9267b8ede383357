//! K-ary heap data structures
//!
//! This crate provides array-backed k-ary min-heaps, generalizing the
//! binary heap to a configurable branching factor:
//!
//! - [`KaryHeap`]: a plain heap over bare keys; insert and extract-min
//!   only
//! - [`AddressableKaryHeap`]: a heap over (key, id) pairs with O(1)
//!   slot lookup by caller-supplied identifier, supporting
//!   `decrease_key`, bidirectional `update`, and removal by id in
//!   O(log_k n)
//!
//! The addressable variant keeps a hash map from identifier to slot in
//! lockstep with every structural move, which is what algorithms like
//! Dijkstra's shortest path need to relax tentative distances of
//! elements that are already queued.
//!
//! # Example
//!
//! ```rust
//! use rust_kary_heaps::AddressableKaryHeap;
//!
//! let mut queue = AddressableKaryHeap::new(4);
//! queue.insert("a", 5).unwrap();
//! queue.insert("b", 3).unwrap();
//! queue.decrease_key(&"a", 1).unwrap();
//!
//! assert_eq!(queue.extract_min(), Some((1, "a")));
//! assert_eq!(queue.extract_min(), Some((3, "b")));
//! assert_eq!(queue.extract_min(), None);
//! ```

pub mod addressable;
pub mod error;
pub mod kary;

// Re-export the main surface for convenience
pub use addressable::AddressableKaryHeap;
pub use error::HeapError;
pub use kary::KaryHeap;
