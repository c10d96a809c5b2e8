use thiserror::Error;

/// Errors surfaced by the sorts in this crate.
///
/// Sorting is deterministic, so none of these are worth retrying with the same input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A range-bounded sort was asked to work on `[low, high]` which does not lie inside a
    /// sequence of `len` elements.
    #[error("range [{low}, {high}] is not inside a sequence of length {len}")]
    InvalidRange { low: usize, high: usize, len: usize },

    /// Two extracted keys had no defined order, `partial_cmp` returned `None`.
    #[error("keys of type `{key_type}` cannot be ordered against each other")]
    IncomparableKeys { key_type: &'static str },

    /// The name does not match any of the sorts in [`Algorithm::ALL`](crate::Algorithm::ALL).
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// The name does not match any [`GapSequence`](crate::GapSequence).
    #[error("unknown shell sort gap sequence `{0}`")]
    UnknownGapSequence(String),
}
