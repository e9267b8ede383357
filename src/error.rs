//! Error type shared by the heap implementations

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An element with the same identifier is already in the heap
    DuplicateId,
    /// The new key is greater than the element's current key
    KeyNotDecreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::DuplicateId => {
                write!(f, "an element with this identifier is already in the heap")
            }
            HeapError::KeyNotDecreased => {
                write!(f, "new key is greater than the current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}
