use crate::{ByKey, Comparator, KeyExtractor, SortError};

sort_impl!("merge_sort", stable: true, copying);

/// Returns the elements of `v` sorted by `key`, leaving `v` untouched.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*))
/// regardless of the input. Each merge level allocates *O*(*n*) auxiliary memory.
///
/// # Current implementation
///
/// Top-down: split at `len / 2`, sort both halves independently, then merge them taking the left
/// element whenever the keys are equal.
///
/// # Errors
///
/// [`SortError::IncomparableKeys`] if two keys have no order.
///
/// # Examples
///
/// ```
/// use keyed_sorts::merge_sort;
///
/// let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let sorted = merge_sort::sort_by_key(&pairs, |p: &(i32, char)| p.0).unwrap();
/// assert_eq!(sorted, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn sort<T, X>(v: &[T], key: X) -> Result<Vec<T>, SortError>
where
    T: Clone,
    X: KeyExtractor<T>,
{
    merge_sort(v, &Comparator::new(key))
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

fn merge_sort<T, X>(v: &[T], cmp: &Comparator<X>) -> Result<Vec<T>, SortError>
where
    T: Clone,
    X: KeyExtractor<T>,
{
    if v.len() <= 1 {
        return Ok(v.to_vec());
    }

    let (left, right) = v.split_at(v.len() / 2);
    let left = merge_sort(left, cmp)?;
    let right = merge_sort(right, cmp)?;

    merge(left, right, cmp)
}

/// Merges two sorted runs. Ties are resolved in favor of `left`, which is what keeps the sort
/// stable.
fn merge<T, X>(left: Vec<T>, right: Vec<T>, cmp: &Comparator<X>) -> Result<Vec<T>, SortError>
where
    X: KeyExtractor<T>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp.le(l, r)?,
            _ => break,
        };

        merged.extend(if take_left { left.next() } else { right.next() });
    }

    // At most one of the two still has elements.
    merged.extend(left);
    merged.extend(right);

    Ok(merged)
}
