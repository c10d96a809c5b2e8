//! Seven textbook comparison sorts sharing one ordering contract.
//!
//! Every sort orders elements by a key obtained through a [`KeyExtractor`]. Passing [`Identity`]
//! orders elements by themselves, [`ByKey`] orders them by a derived value, for example a field
//! of a record. All comparisons go through a [`Comparator`], which turns keys without a defined
//! order into [`SortError::IncomparableKeys`].
//!
//! | Sort | Stable | Contract |
//! |---|---|---|
//! | [`bubble_sort`] | yes | sorts the slice in place and hands it back |
//! | [`insertion_sort`] | yes | sorts the slice in place and hands it back |
//! | [`merge_sort`] | yes | returns a new `Vec`, input untouched |
//! | [`selection_sort`] | no | sorts the slice in place and hands it back |
//! | [`quick_sort`] | no | returns a new `Vec`, input untouched |
//! | [`heap_sort`] | no | sorts the slice in place and hands it back |
//! | [`shell_sort`] | no | sorts the slice in place and hands it back |
//!
//! ```
//! use keyed_sorts::{merge_sort, quick_sort, Identity};
//!
//! let v = [5, 3, 8, 1, 9, 2];
//! assert_eq!(merge_sort::sort(&v, Identity).unwrap(), [1, 2, 3, 5, 8, 9]);
//! assert_eq!(quick_sort::sort_by_key(&v, |x: &i32| -x).unwrap(), [9, 8, 5, 3, 2, 1]);
//! ```

/// Uniform access to one sort, used for dispatch by [`Algorithm`] and by the test battery.
pub trait Sort {
    /// Whether equal keys keep their input order.
    const STABLE: bool;

    /// Whether the public `sort` of this module reorders the caller's slice, as opposed to
    /// returning a freshly allocated `Vec`.
    const MUTATES_INPUT: bool;

    fn name() -> String;

    /// Sorts `v` by `key`. On success `v` holds the sorted sequence whichever contract the
    /// underlying sort has.
    fn sort_vec<T, X>(v: &mut Vec<T>, key: X) -> Result<(), SortError>
    where
        T: Clone,
        X: KeyExtractor<T>;
}

/// Implements [`Sort`] as `SortImpl` for the module it is invoked in, on top of that module's
/// `sort` function.
macro_rules! sort_impl {
    ($name:expr, stable: $stable:literal, in_place) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            const STABLE: bool = $stable;
            const MUTATES_INPUT: bool = true;

            fn name() -> String {
                $name.into()
            }

            fn sort_vec<T, X>(v: &mut Vec<T>, key: X) -> Result<(), $crate::SortError>
            where
                T: Clone,
                X: $crate::KeyExtractor<T>,
            {
                sort(v.as_mut_slice(), key).map(|_| ())
            }
        }
    };
    ($name:expr, stable: $stable:literal, copying) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            const STABLE: bool = $stable;
            const MUTATES_INPUT: bool = false;

            fn name() -> String {
                $name.into()
            }

            fn sort_vec<T, X>(v: &mut Vec<T>, key: X) -> Result<(), $crate::SortError>
            where
                T: Clone,
                X: $crate::KeyExtractor<T>,
            {
                *v = sort(v.as_slice(), key)?;
                Ok(())
            }
        }
    };
}

pub mod algorithm;
pub mod error;
pub mod key;
pub mod stable;
pub mod unstable;

pub use algorithm::Algorithm;
pub use error::SortError;
pub use key::{ByKey, Comparator, Identity, KeyExtractor};
pub use stable::{bubble_sort, insertion_sort, merge_sort};
pub use unstable::shell_sort::GapSequence;
pub use unstable::{heap_sort, quick_sort, selection_sort, shell_sort};
