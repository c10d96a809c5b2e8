use crate::{ByKey, Comparator, KeyExtractor, SortError};

sort_impl!("insertion_sort", stable: true, in_place);

/// Sorts the slice in place by `key` and returns it.
///
/// This sort is stable (i.e., does not reorder equal elements). It is *O*(*n*) on sorted input
/// and *O*(*n*^2) worst-case.
///
/// # Errors
///
/// [`SortError::IncomparableKeys`] if two keys have no order. The slice then holds the input
/// elements in an unspecified order.
pub fn sort<T, X>(v: &mut [T], key: X) -> Result<&mut [T], SortError>
where
    X: KeyExtractor<T>,
{
    insertion_sort(v, &Comparator::new(key))?;
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

fn insertion_sort<T, X>(v: &mut [T], cmp: &Comparator<X>) -> Result<(), SortError>
where
    X: KeyExtractor<T>,
{
    for tail in 1..v.len() {
        // Nothing moves until the gap is known. Equal keys stop the scan.
        let mut gap = tail;
        while gap > 0 && cmp.gt(&v[gap - 1], &v[tail])? {
            gap -= 1;
        }

        v[gap..=tail].rotate_right(1);
    }

    Ok(())
}
