use tracing::debug;

use crate::{ByKey, Comparator, KeyExtractor, SortError};

sort_impl!("quick_sort", stable: false, copying);

/// Returns the elements of `v` sorted by `key`, leaving `v` untouched.
///
/// This sort is unstable (i.e., may reorder equal elements). It is *O*(*n* \* log(*n*)) on
/// average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// The input is cloned into a new `Vec`, which is then sorted in place with Lomuto partitioning
/// around the rightmost element of each subrange. There is no pivot sampling, so already sorted
/// and reverse sorted input hit the quadratic case. Pending subranges are kept on an explicit
/// stack, which keeps call depth constant even then.
///
/// # Errors
///
/// [`SortError::IncomparableKeys`] if two keys have no order.
///
/// # Examples
///
/// ```
/// use keyed_sorts::{quick_sort, Identity};
///
/// let v = [9, 8, 7, 6, 5, 4, 3, 2, 1];
/// let sorted = quick_sort::sort(&v, Identity).unwrap();
/// assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(v[0], 9);
/// ```
pub fn sort<T, X>(v: &[T], key: X) -> Result<Vec<T>, SortError>
where
    T: Clone,
    X: KeyExtractor<T>,
{
    let mut sorted = v.to_vec();

    if sorted.len() > 1 {
        let high = sorted.len() - 1;
        quicksort(&mut sorted, 0, high, &Comparator::new(key))?;
    }

    Ok(sorted)
}

/// Returns the elements of `v` sorted by the key `f` derives from each element.
pub fn sort_by_key<T, K, F>(v: &[T], f: F) -> Result<Vec<T>, SortError>
where
    T: Clone,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    sort(v, ByKey::new(f))
}

/// Sorts `v[low..=high]` in place.
///
/// Fails with [`SortError::InvalidRange`] if either bound is outside the slice. A range with
/// `low >= high` holds at most one element and is left alone.
fn quicksort<T, X>(
    v: &mut [T],
    low: usize,
    high: usize,
    cmp: &Comparator<X>,
) -> Result<(), SortError>
where
    X: KeyExtractor<T>,
{
    let len = v.len();
    if low >= len || high >= len {
        debug!(low, high, len, "quicksort range outside of slice");
        return Err(SortError::InvalidRange { low, high, len });
    }

    if low >= high {
        return Ok(());
    }

    // Inclusive subranges still to be partitioned, only ever holding ranges of two or more
    // elements. The left side is pushed last so it is sorted first.
    let mut pending = vec![(low, high)];

    while let Some((low, high)) = pending.pop() {
        let pivot = partition(v, low, high, cmp)?;

        if pivot + 1 < high {
            pending.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            pending.push((low, pivot - 1));
        }
    }

    Ok(())
}

/// Lomuto partition of `v[low..=high]` around `v[high]`.
///
/// Every element whose key is `<=` the pivot key ends up left of the pivot, every other element
/// right of it. Returns the final index of the pivot.
fn partition<T, X>(
    v: &mut [T],
    low: usize,
    high: usize,
    cmp: &Comparator<X>,
) -> Result<usize, SortError>
where
    X: KeyExtractor<T>,
{
    // One past the last element known to be `<=` the pivot.
    let mut boundary = low;

    for i in low..high {
        if cmp.le(&v[i], &v[high])? {
            v.swap(boundary, i);
            boundary += 1;
        }
    }

    v.swap(boundary, high);

    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identity;

    #[test]
    fn rejects_ranges_outside_the_slice() {
        let mut v = [3, 1, 2];
        let cmp = Comparator::new(Identity);

        assert_eq!(
            quicksort(&mut v, 0, 3, &cmp),
            Err(SortError::InvalidRange {
                low: 0,
                high: 3,
                len: 3
            })
        );
        assert_eq!(
            quicksort(&mut v, 3, 1, &cmp),
            Err(SortError::InvalidRange {
                low: 3,
                high: 1,
                len: 3
            })
        );
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    fn empty_or_single_ranges_are_left_alone() {
        let mut v = [3, 1, 2];
        let cmp = Comparator::new(Identity);

        assert_eq!(quicksort(&mut v, 2, 1, &cmp), Ok(()));
        assert_eq!(quicksort(&mut v, 1, 1, &cmp), Ok(()));
        assert_eq!(quicksort(&mut v, 2, 0, &cmp), Ok(()));
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    fn sorts_only_the_requested_range() {
        let mut v = [9, 5, 4, 3, 0];
        quicksort(&mut v, 1, 3, &Comparator::new(Identity)).unwrap();
        assert_eq!(v, [9, 3, 4, 5, 0]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut v = [5, 3, 8, 1, 9, 2];
        let pivot = partition(&mut v, 0, 5, &Comparator::new(Identity)).unwrap();

        assert_eq!(pivot, 1);
        assert_eq!(v[pivot], 2);
        assert!(v[..pivot].iter().all(|&x| x <= 2));
        assert!(v[pivot + 1..].iter().all(|&x| x > 2));
    }

    #[test]
    fn partition_keeps_equal_keys_left() {
        let mut v = [2, 7, 2, 2];
        let pivot = partition(&mut v, 0, 3, &Comparator::new(Identity)).unwrap();

        assert_eq!(pivot, 2);
        assert_eq!(v, [2, 2, 2, 7]);
    }
}
