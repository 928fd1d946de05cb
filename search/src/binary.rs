//! Binary search over an abstractly-indexable ascending sequence.
//!
//! The sequence is never materialized: elements are read through an indexer
//! callback and related to the implicit target through a tri-state
//! comparator (see [`wayfind_kernel::compare`]). The absent case does not
//! lose information — the outcome carries the position at which the sought
//! value would be inserted to keep the sequence ascending.

use std::cmp::Ordering;

use crate::error::SearchError;

/// Outcome of a binary search.
///
/// The two variants are the Rust rendition of the classic
/// "index or bitwise-complement-of-insertion-point" integer encoding: a
/// match position, or the order-preserving insertion position when no
/// element matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOutcome {
    /// An element at this index matched the comparator.
    Found(usize),
    /// No match; inserting the sought value at this index keeps the
    /// sequence ascending.
    Insert(usize),
}

impl BinaryOutcome {
    /// The matching index, if the value was found.
    #[must_use]
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::Insert(_) => None,
        }
    }

    /// The carried position regardless of variant: the match index, or the
    /// insertion point when absent.
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Found(index) | Self::Insert(index) => index,
        }
    }
}

/// Binary search over `[0, length)` through an indexer callback.
///
/// `read_at(i)` must yield element `i` of a sequence that is ascending
/// under the ordering the comparator was derived from. `compare(probe)`
/// reports `Less` while the probe sorts before the sought value, `Greater`
/// after, `Equal` on a match. One comparator evaluation per halving step;
/// the bracket `[low, high)` always contains the answer if one exists.
///
/// # Errors
///
/// Returns [`SearchError::EmptySequence`] when `length == 0`.
pub fn binary_search_by<T, R, C>(
    mut read_at: R,
    length: usize,
    mut compare: C,
) -> Result<BinaryOutcome, SearchError>
where
    R: FnMut(usize) -> T,
    C: FnMut(&T) -> Ordering,
{
    if length == 0 {
        return Err(SearchError::EmptySequence);
    }
    let mut low = 0usize;
    let mut high = length;
    while low < high {
        // Midpoint without overflow: high - low never exceeds length.
        let median = low + (high - low) / 2;
        match compare(&read_at(median)) {
            Ordering::Less => low = median + 1,
            Ordering::Greater => high = median,
            Ordering::Equal => return Ok(BinaryOutcome::Found(median)),
        }
    }
    Ok(BinaryOutcome::Insert(low))
}

/// Binary search over a slice.
///
/// Convenience over [`binary_search_by`] with the slice as the indexed
/// sequence.
///
/// # Errors
///
/// Returns [`SearchError::EmptySequence`] when the slice is empty.
pub fn binary_search<T, C>(items: &[T], mut compare: C) -> Result<BinaryOutcome, SearchError>
where
    C: FnMut(&T) -> Ordering,
{
    binary_search_by(|i| &items[i], items.len(), move |probe| compare(*probe))
}
