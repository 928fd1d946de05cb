//! Typed search errors.
//!
//! `SearchError` represents pre-flight argument failures only. Runtime
//! outcomes — no path found, a `Break` signal from the caller's check — are
//! ordinary values ([`None`] paths, telemetry termination reasons), never
//! errors.

/// Typed failure for pre-flight argument validation.
///
/// Returned before any search work begins; nothing is partially executed
/// when one of these is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Binary search was asked to search a zero-length sequence.
    EmptySequence,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySequence => {
                write!(f, "binary search requires a sequence of length > 0")
            }
        }
    }
}

impl std::error::Error for SearchError {}
