use std::fmt;
use std::str::FromStr;

use crate::{ByKey, Comparator, KeyExtractor, SortError};

sort_impl!("shell_sort", stable: false, in_place);

/// Known-good prefix of Ciura's experimentally derived gaps.
const CIURA_GAPS: [usize; 9] = [1, 4, 10, 23, 57, 132, 301, 701, 1750];

/// The strides shell sort runs its gapped insertion passes with.
///
/// Every sequence is used largest gap first and always finishes with gap 1, the last pass being a
/// plain insertion sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GapSequence {
    /// Shell's original `len / 2, len / 4, ..., 1`. Roughly *O*(*n*^1.5) worst-case.
    #[default]
    Halving,
    /// Knuth's `1, 4, 13, 40, ...`, that is `(3^k - 1) / 2`, up to `len / 3`.
    Knuth,
    /// Ciura's `1, 4, 10, 23, 57, 132, 301, 701, 1750`, extended by a factor of 2.25.
    Ciura,
}

impl GapSequence {
    pub const ALL: [GapSequence; 3] = [
        GapSequence::Halving,
        GapSequence::Knuth,
        GapSequence::Ciura,
    ];

    /// Returns the gaps used to sort `len` elements, in the order they are applied. Empty if
    /// `len < 2`.
    pub fn gaps(self, len: usize) -> Vec<usize> {
        if len < 2 {
            return Vec::new();
        }

        match self {
            GapSequence::Halving => {
                let mut gaps = Vec::new();
                let mut gap = len / 2;
                while gap > 0 {
                    gaps.push(gap);
                    gap /= 2;
                }
                gaps
            }
            GapSequence::Knuth => {
                let mut gaps = vec![1];
                let mut next = Some(4);
                while let Some(gap) = next.filter(|&gap| gap <= len / 3) {
                    gaps.push(gap);
                    next = gap.checked_mul(3).and_then(|gap| gap.checked_add(1));
                }
                gaps.reverse();
                gaps
            }
            GapSequence::Ciura => {
                let mut gaps: Vec<usize> =
                    CIURA_GAPS.iter().copied().take_while(|&gap| gap < len).collect();

                if gaps.len() == CIURA_GAPS.len() {
                    let mut next = extend_ciura(CIURA_GAPS[CIURA_GAPS.len() - 1]);
                    while let Some(gap) = next.filter(|&gap| gap < len) {
                        gaps.push(gap);
                        next = extend_ciura(gap);
                    }
                }

                gaps.reverse();
                gaps
            }
        }
    }
}

/// The gap after `gap`, or `None` once it no longer fits in a `usize`.
fn extend_ciura(gap: usize) -> Option<usize> {
    gap.checked_mul(9).map(|gap| gap / 4)
}

impl fmt::Display for GapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GapSequence::Halving => "halving",
            GapSequence::Knuth => "knuth",
            GapSequence::Ciura => "ciura",
        })
    }
}

impl FromStr for GapSequence {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GapSequence::ALL
            .into_iter()
            .find(|gaps| gaps.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::UnknownGapSequence(s.to_owned()))
    }
}

/// Sorts the slice in place by `key` with the [`GapSequence::Halving`] gaps and returns it.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place. Its worst-case depends
/// on the gap sequence.
///
/// # Errors
///
/// [`SortError::IncomparableKeys`] if two keys have no order. The slice then holds the input
/// elements in an unspecified order.
pub fn sort<T, X>(v: &mut [T], key: X) -> Result<&mut [T], SortError>
where
    X: KeyExtractor<T>,
{
    sort_with_gaps(v, key, GapSequence::default())
}

/// Sorts the slice in place by the key `f` derives from each element.
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F) -> Result<&mut [T], SortError>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    sort(v, ByKey::new(f))
}

/// Like [`sort`], with an explicit gap sequence.
///
/// ```
/// use keyed_sorts::{shell_sort, GapSequence, Identity};
///
/// let mut v = [5, 3, 8, 1, 9, 2];
/// shell_sort::sort_with_gaps(&mut v, Identity, GapSequence::Ciura).unwrap();
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn sort_with_gaps<T, X>(
    v: &mut [T],
    key: X,
    gaps: GapSequence,
) -> Result<&mut [T], SortError>
where
    X: KeyExtractor<T>,
{
    let gaps = gaps.gaps(v.len());
    shell_sort(v, &gaps, &Comparator::new(key))?;
    Ok(v)
}

fn shell_sort<T, X>(v: &mut [T], gaps: &[usize], cmp: &Comparator<X>) -> Result<(), SortError>
where
    X: KeyExtractor<T>,
{
    for &gap in gaps {
        for tail in gap..v.len() {
            let mut i = tail;
            while i >= gap && cmp.gt(&v[i - gap], &v[i])? {
                v.swap(i - gap, i);
                i -= gap;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving_gaps() {
        assert_eq!(GapSequence::Halving.gaps(0), Vec::<usize>::new());
        assert_eq!(GapSequence::Halving.gaps(1), Vec::<usize>::new());
        assert_eq!(GapSequence::Halving.gaps(2), [1]);
        assert_eq!(GapSequence::Halving.gaps(9), [4, 2, 1]);
        assert_eq!(GapSequence::Halving.gaps(100), [50, 25, 12, 6, 3, 1]);
    }

    #[test]
    fn knuth_gaps() {
        assert_eq!(GapSequence::Knuth.gaps(2), [1]);
        assert_eq!(GapSequence::Knuth.gaps(12), [4, 1]);
        assert_eq!(GapSequence::Knuth.gaps(100), [13, 4, 1]);
    }

    #[test]
    fn ciura_gaps() {
        assert_eq!(GapSequence::Ciura.gaps(2), [1]);
        assert_eq!(GapSequence::Ciura.gaps(100), [57, 23, 10, 4, 1]);
        assert_eq!(
            GapSequence::Ciura.gaps(10_000),
            [8858, 3937, 1750, 701, 301, 132, 57, 23, 10, 4, 1]
        );
    }

    #[test]
    fn every_sequence_ends_in_one() {
        for gaps in GapSequence::ALL {
            for len in 2..300 {
                let seq = gaps.gaps(len);
                assert_eq!(seq.last(), Some(&1), "{gaps} for len {len}");
                assert!(seq.windows(2).all(|w| w[0] > w[1]), "{gaps} for len {len}: {seq:?}");
                assert!(seq.iter().all(|&gap| gap < len), "{gaps} for len {len}: {seq:?}");
            }
        }
    }

    #[test]
    fn gaps_for_huge_lengths() {
        for gaps in GapSequence::ALL {
            let seq = gaps.gaps(usize::MAX);
            assert_eq!(seq.last(), Some(&1), "{gaps}");
            assert!(seq.windows(2).all(|w| w[0] > w[1]), "{gaps}: {seq:?}");
        }
    }

    #[test]
    fn gap_sequence_names() {
        for gaps in GapSequence::ALL {
            assert_eq!(gaps.to_string().parse::<GapSequence>(), Ok(gaps));
        }
        assert_eq!(" Knuth ".parse::<GapSequence>(), Ok(GapSequence::Knuth));
        assert!("fibonacci".parse::<GapSequence>().is_err());
    }
}
