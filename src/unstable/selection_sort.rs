use crate::{ByKey, Comparator, KeyExtractor, SortError};

sort_impl!("selection_sort", stable: false, in_place);

/// Sorts the slice in place by `key` and returns it.
///
/// This sort is unstable (i.e., may reorder equal elements). It always performs *n*(*n* - 1)/2
/// comparisons, but at most *n* - 1 swaps.
///
/// # Errors
///
/// [`SortError::IncomparableKeys`] if two keys have no order. The slice then holds the input
/// elements in an unspecified order.
pub fn sort<T, X>(v: &mut [T], key: X) -> Result<&mut [T], SortError>
where
    X: KeyExtractor<T>,
{
    selection_sort(v, &Comparator::new(key))?;
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

fn selection_sort<T, X>(v: &mut [T], cmp: &Comparator<X>) -> Result<(), SortError>
where
    X: KeyExtractor<T>,
{
    let len = v.len();

    for i in 0..len {
        // Only a strictly smaller key moves the minimum, so the first occurrence wins. Swapping
        // it forward can still jump it over an equal key, hence no stability.
        let mut min = i;
        for j in i + 1..len {
            if cmp.lt(&v[j], &v[min])? {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
        }
    }

    Ok(())
}
