//! Input patterns and a shared test battery for the sorts in `keyed_sorts`.
//!
//! Instantiate the battery for a sort with:
//!
//! ```ignore
//! use keyed_sorts::stable::merge_sort::SortImpl;
//!
//! sort_test_tools::instantiate_sort_tests!(SortImpl);
//! ```

pub mod patterns;

// Re-exported so the macro works without the caller depending on paste.
#[doc(hidden)]
pub use paste;
