//! Sorts that may reorder elements with equal keys.

// Swaps the first minimum of the unsorted suffix into place.
pub mod selection_sort;

// Lomuto partition around the rightmost element, sorting a copy of the input.
pub mod quick_sort;

// Max-heap build followed by repeated root extraction.
pub mod heap_sort;

// Gapped insertion sort over a decreasing gap sequence.
pub mod shell_sort;
