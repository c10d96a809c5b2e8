use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::stable::{bubble_sort, insertion_sort, merge_sort};
use crate::unstable::{heap_sort, quick_sort, selection_sort, shell_sort};
use crate::{KeyExtractor, Sort, SortError};

/// Names one of the sorts, for callers that pick the algorithm at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Shell,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
    ];

    /// The module name of the sort, e.g. `"quick_sort"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Heap => "heap_sort",
            Algorithm::Shell => "shell_sort",
        }
    }

    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble => bubble_sort::SortImpl::STABLE,
            Algorithm::Insertion => insertion_sort::SortImpl::STABLE,
            Algorithm::Selection => selection_sort::SortImpl::STABLE,
            Algorithm::Merge => merge_sort::SortImpl::STABLE,
            Algorithm::Quick => quick_sort::SortImpl::STABLE,
            Algorithm::Heap => heap_sort::SortImpl::STABLE,
            Algorithm::Shell => shell_sort::SortImpl::STABLE,
        }
    }

    /// Whether the module's `sort` reorders the caller's slice rather than returning a new `Vec`.
    pub fn mutates_input(self) -> bool {
        match self {
            Algorithm::Bubble => bubble_sort::SortImpl::MUTATES_INPUT,
            Algorithm::Insertion => insertion_sort::SortImpl::MUTATES_INPUT,
            Algorithm::Selection => selection_sort::SortImpl::MUTATES_INPUT,
            Algorithm::Merge => merge_sort::SortImpl::MUTATES_INPUT,
            Algorithm::Quick => quick_sort::SortImpl::MUTATES_INPUT,
            Algorithm::Heap => heap_sort::SortImpl::MUTATES_INPUT,
            Algorithm::Shell => shell_sort::SortImpl::MUTATES_INPUT,
        }
    }

    /// Sorts `v` by `key` with this algorithm.
    ///
    /// For the copying sorts `v` is only replaced once sorting succeeded, for the in-place sorts
    /// a failure leaves `v` holding its elements in an unspecified order.
    pub fn sort_vec<T, X>(self, v: &mut Vec<T>, key: X) -> Result<(), SortError>
    where
        T: Clone,
        X: KeyExtractor<T>,
    {
        trace!(algorithm = self.name(), len = v.len(), "sorting");

        match self {
            Algorithm::Bubble => bubble_sort::SortImpl::sort_vec(v, key),
            Algorithm::Insertion => insertion_sort::SortImpl::sort_vec(v, key),
            Algorithm::Selection => selection_sort::SortImpl::sort_vec(v, key),
            Algorithm::Merge => merge_sort::SortImpl::sort_vec(v, key),
            Algorithm::Quick => quick_sort::SortImpl::sort_vec(v, key),
            Algorithm::Heap => heap_sort::SortImpl::sort_vec(v, key),
            Algorithm::Shell => shell_sort::SortImpl::sort_vec(v, key),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Shell => "Shell Sort",
        })
    }
}

/// Accepts `"quick"`, `"quick_sort"`, `"quick-sort"` and `"Quick Sort"`, ignoring case.
impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let short = normalized.strip_suffix("_sort").unwrap_or(&normalized);

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().strip_suffix("_sort") == Some(short))
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identity;

    #[test]
    fn parses_every_spelling() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("HEAP".parse::<Algorithm>(), Ok(Algorithm::Heap));
        assert_eq!("shell-sort".parse::<Algorithm>(), Ok(Algorithm::Shell));
        assert_eq!(
            "bogo".parse::<Algorithm>(),
            Err(SortError::UnknownAlgorithm("bogo".into()))
        );
    }

    #[test]
    fn contracts() {
        let stable: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_stable()).collect();
        assert_eq!(stable, [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge]);

        let copying: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| !a.mutates_input())
            .collect();
        assert_eq!(copying, [Algorithm::Merge, Algorithm::Quick]);
    }

    #[test]
    fn sort_vec_covers_both_contracts() {
        for algorithm in Algorithm::ALL {
            let mut v = vec![5, 3, 8, 1, 9, 2];
            algorithm.sort_vec(&mut v, Identity).unwrap();
            assert_eq!(v, [1, 2, 3, 5, 8, 9], "{algorithm}");
        }
    }
}
