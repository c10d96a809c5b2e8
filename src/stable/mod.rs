//! Sorts that keep equal keys in their input order.

// Adjacent swaps with an early exit once a pass swaps nothing.
pub mod bubble_sort;

// Shifts each element left past strictly greater keys.
pub mod insertion_sort;

// Top-down merge sort into freshly allocated vectors.
pub mod merge_sort;
