use crate::{ByKey, Comparator, KeyExtractor, SortError};

sort_impl!("heap_sort", stable: false, in_place);

/// Sorts the slice in place by `key` and returns it.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and *O*(*n* \* log(*n*))
/// worst-case.
///
/// # Errors
///
/// [`SortError::IncomparableKeys`] if two keys have no order. The slice then holds the input
/// elements in an unspecified order.
pub fn sort<T, X>(v: &mut [T], key: X) -> Result<&mut [T], SortError>
where
    X: KeyExtractor<T>,
{
    heapsort(v, &Comparator::new(key))?;
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

fn heapsort<T, X>(v: &mut [T], cmp: &Comparator<X>) -> Result<(), SortError>
where
    X: KeyExtractor<T>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    // Build the heap, starting from the last node that has a child.
    for node in (0..len / 2).rev() {
        sift_down(v, node, cmp)?;
    }

    // Move the maximum behind the shrinking heap, then restore the heap in front of it.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, cmp)?;
    }

    Ok(())
}

// This binary heap respects the invariant `parent >= child`.
//
// Only a strictly greater key is promoted, so on ties the parent wins over both children and the
// left child wins over the right one.
fn sift_down<T, X>(v: &mut [T], mut node: usize, cmp: &Comparator<X>) -> Result<(), SortError>
where
    X: KeyExtractor<T>,
{
    let len = v.len();

    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < len && cmp.gt(&v[left], &v[largest])? {
            largest = left;
        }
        if right < len && cmp.gt(&v[right], &v[largest])? {
            largest = right;
        }

        // Stop if the invariant holds at `node`.
        if largest == node {
            return Ok(());
        }

        v.swap(node, largest);
        node = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Identity;

    #[test]
    fn build_phase_yields_max_heap() {
        let mut v = [4, 10, 3, 5, 1, 8, 7];
        let cmp = Comparator::new(Identity);

        for node in (0..v.len() / 2).rev() {
            sift_down(&mut v, node, &cmp).unwrap();
        }

        assert_eq!(v[0], 10);
        for child in 1..v.len() {
            assert!(v[(child - 1) / 2] >= v[child], "heap violated in {v:?}");
        }
    }

    #[test]
    fn ties_keep_the_parent() {
        let mut v = [(1, 'p'), (1, 'l'), (1, 'r')];
        sift_down(&mut v, 0, &Comparator::new(ByKey::new(|e: &(i32, char)| e.0))).unwrap();
        assert_eq!(v, [(1, 'p'), (1, 'l'), (1, 'r')]);

        let mut v = [(0, 'p'), (1, 'l'), (1, 'r')];
        sift_down(&mut v, 0, &Comparator::new(ByKey::new(|e: &(i32, char)| e.0))).unwrap();
        assert_eq!(v, [(1, 'l'), (0, 'p'), (1, 'r')]);
    }
}
