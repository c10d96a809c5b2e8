use crate::{ByKey, Comparator, KeyExtractor, SortError};

sort_impl!("bubble_sort", stable: true, in_place);

/// Sorts the slice in place by `key` and returns it.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) worst-case. It
/// stops as soon as a pass over the unsorted prefix performs no swap, so already sorted input
/// takes a single pass of *n* - 1 comparisons.
///
/// # Errors
///
/// [`SortError::IncomparableKeys`] if two keys have no order. The slice then holds the input
/// elements in an unspecified order.
///
/// # Examples
///
/// ```
/// use keyed_sorts::{bubble_sort, Identity};
///
/// let mut v = [5, 3, 8, 1, 9, 2];
/// bubble_sort::sort(&mut v, Identity).unwrap();
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn sort<T, X>(v: &mut [T], key: X) -> Result<&mut [T], SortError>
where
    X: KeyExtractor<T>,
{
    bubble_sort(v, &Comparator::new(key))?;
    Ok(v)
}

/// Sorts the slice in place by the key `f` derives from each element.
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F) -> Result<&mut [T], SortError>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    sort(v, ByKey::new(f))
}

fn bubble_sort<T, X>(v: &mut [T], cmp: &Comparator<X>) -> Result<(), SortError>
where
    X: KeyExtractor<T>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    for pass in 0..len {
        let mut swapped = false;

        // The last `pass` elements already hold the largest keys.
        for i in 0..len - pass - 1 {
            if cmp.gt(&v[i], &v[i + 1])? {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    Ok(())
}
