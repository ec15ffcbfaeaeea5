//! Binary search with the same three-way comparator contract as the sort.

use std::cmp::Ordering;

/// Searches the first `nel` elements of `width` bytes in `base`, which must be sorted
/// with respect to `compare(key, element)`. Returns one matching element, which one is
/// unspecified if several compare equal.
///
/// # Panics
///
/// Panics if `base` is shorter than `nel * width` bytes.
pub fn bsearch<'a, K, F>(
    key: &K,
    base: &'a [u8],
    nel: usize,
    width: usize,
    mut compare: F,
) -> Option<&'a [u8]>
where
    K: ?Sized,
    F: FnMut(&K, &[u8]) -> Ordering,
{
    assert!(
        nel.checked_mul(width).is_some_and(|size| size <= base.len()),
        "buffer of {} bytes cannot hold {nel} elements of {width} bytes",
        base.len()
    );

    let mut lo = 0;
    let mut nel = nel;
    while nel > 0 {
        let probe = lo + nel / 2;
        let element = &base[probe * width..(probe + 1) * width];
        match compare(key, element) {
            Ordering::Less => nel /= 2,
            Ordering::Greater => {
                lo = probe + 1;
                nel -= nel / 2 + 1;
            }
            Ordering::Equal => return Some(element),
        }
    }
    None
}

/// Typed [`bsearch`]. `f` orders the sought key relative to the element it is given,
/// e.g. `|x| key.cmp(x)`, and the index of a matching element is returned.
pub fn bsearch_by<T, F>(v: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut nel = v.len();
    while nel > 0 {
        let probe = lo + nel / 2;
        match f(&v[probe]) {
            Ordering::Less => nel /= 2,
            Ordering::Greater => {
                lo = probe + 1;
                nel -= nel / 2 + 1;
            }
            Ordering::Equal => return Some(probe),
        }
    }
    None
}
