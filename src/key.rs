//! Key extraction and the comparator every sort goes through.
//!
//! A missing key function is not a special case anywhere in the crate, it is the [`Identity`]
//! extractor. All seven sorts only ever ask a [`Comparator`] whether one element is `<=`, `<` or
//! `>` another.

use std::any;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::SortError;

/// Maps an element to the value it is ordered by.
///
/// Keys are only required to be [`PartialOrd`]. If two keys turn out to have no order, the
/// comparison fails with [`SortError::IncomparableKeys`] instead of guessing.
pub trait KeyExtractor<T> {
    /// The extracted key, possibly borrowing from the element.
    type Key<'a>: PartialOrd
    where
        T: 'a;

    fn extract<'a>(&self, elem: &'a T) -> Self::Key<'a>;
}

/// Orders elements by themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: PartialOrd> KeyExtractor<T> for Identity {
    type Key<'a>
        = &'a T
    where
        T: 'a;

    #[inline]
    fn extract<'a>(&self, elem: &'a T) -> &'a T {
        elem
    }
}

/// Orders elements by the value a function derives from them.
///
/// ```
/// use keyed_sorts::{insertion_sort, ByKey};
///
/// let mut words = ["banana", "fig", "apple"];
/// insertion_sort::sort(&mut words, ByKey::new(|w: &&str| w.len())).unwrap();
/// assert_eq!(words, ["fig", "apple", "banana"]);
/// ```
pub struct ByKey<F, K> {
    f: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub fn new<T>(f: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self {
            f,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey")
            .field("key_type", &any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

impl<T, F, K> KeyExtractor<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    type Key<'a>
        = K
    where
        T: 'a;

    #[inline]
    fn extract<'a>(&self, elem: &'a T) -> K {
        (self.f)(elem)
    }
}

/// The single comparison primitive shared by all sorts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Comparator<X> {
    extractor: X,
}

impl<X> Comparator<X> {
    pub const fn new(extractor: X) -> Self {
        Self { extractor }
    }

    /// Compares the keys of `a` and `b`.
    pub fn compare<'a, T>(&self, a: &'a T, b: &'a T) -> Result<Ordering, SortError>
    where
        X: KeyExtractor<T>,
    {
        let a_key = self.extractor.extract(a);
        let b_key = self.extractor.extract(b);

        match a_key.partial_cmp(&b_key) {
            Some(ordering) => Ok(ordering),
            None => Err(incomparable(&a_key)),
        }
    }

    /// `key(a) <= key(b)`, the tie-keeping test used by merging and partitioning.
    #[inline]
    pub fn le<T>(&self, a: &T, b: &T) -> Result<bool, SortError>
    where
        X: KeyExtractor<T>,
    {
        self.compare(a, b).map(Ordering::is_le)
    }

    #[inline]
    pub fn lt<T>(&self, a: &T, b: &T) -> Result<bool, SortError>
    where
        X: KeyExtractor<T>,
    {
        self.compare(a, b).map(Ordering::is_lt)
    }

    #[inline]
    pub fn gt<T>(&self, a: &T, b: &T) -> Result<bool, SortError>
    where
        X: KeyExtractor<T>,
    {
        self.compare(a, b).map(Ordering::is_gt)
    }
}

#[cold]
fn incomparable<K>(_key: &K) -> SortError {
    let key_type = any::type_name::<K>();
    debug!(key_type, "extracted keys have no order");

    SortError::IncomparableKeys { key_type }
}
