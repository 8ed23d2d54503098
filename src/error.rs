//! Errors reported by [`Tree`][crate::Tree] operations.

use thiserror::Error;

/// Why [`Tree::copy_to`][crate::Tree::copy_to] refused to write into a destination slice.
/// Nothing is written when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The starting index doesn't point inside the destination.
    #[error("start index {index} is out of range for a destination of length {len}")]
    IndexOutOfRange {
        /// The requested starting index.
        index: usize,
        /// The destination's length.
        len: usize,
    },
    /// The destination doesn't have room for every value past the starting index.
    #[error("insufficient space in destination: need {needed} slots, {available} available")]
    InsufficientSpace {
        /// How many values the tree holds.
        needed: usize,
        /// How many slots remain after the starting index.
        available: usize,
    },
}
