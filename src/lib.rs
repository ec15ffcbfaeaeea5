use std::cmp::Ordering;
use std::mem;
use std::slice;

mod smooth;

pub mod arith;
pub mod cvt;
pub mod error;
pub mod floatscan;
pub mod intscan;
pub mod leonardo;
pub mod scan;
pub mod search;

pub use arith::{abs, div, imaxabs, imaxdiv, labs, ldiv, llabs, lldiv, DivResult};
pub use cvt::{ecvt, fcvt, gcvt, Digits};
pub use error::ScanError;
pub use floatscan::{atof, strtod, strtof};
pub use intscan::{atoi, atol, atoll, strtoimax, strtol, strtoll, strtoul, strtoull, strtoumax};
pub use scan::Scanned;
pub use search::{bsearch, bsearch_by};

/// Sorts the slice in ascending order without allocating. Equal elements may be
/// reordered.
#[inline(always)]
pub fn sort<T: Ord>(v: &mut [T]) {
    smoothsort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline(always)]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    smoothsort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

#[inline(always)]
pub fn sort_by_key<T, K: Ord, F: FnMut(&T) -> K>(v: &mut [T], mut f: F) {
    smoothsort(v, &mut |a: &T, b: &T| f(a).lt(&f(b)));
}

#[inline(always)]
fn smoothsort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    let width = mem::size_of::<T>();
    if v.len() < 2 || width == 0 {
        return;
    }

    // SAFETY: the slice covers exactly `len * size_of::<T>()` bytes, and every pointer the
    // core hands to the comparator is the start of one of its elements, so it is aligned and
    // points to an initialized `T`. Elements are only ever moved as a whole permutation, see
    // smooth::sort.
    unsafe {
        smooth::sort(
            v.as_mut_ptr().cast::<u8>(),
            v.len(),
            width,
            &mut |a: *const u8, b: *const u8| is_less(&*a.cast::<T>(), &*b.cast::<T>()),
        );
    }
}

/// Sorts the first `nel` elements of `width` bytes each in `base`, ordered by `compare`
/// which additionally receives `ctx`.
///
/// # Panics
///
/// Panics if `base` is shorter than `nel * width` bytes, unless there is nothing to sort.
pub fn qsort_r<C, F>(base: &mut [u8], nel: usize, width: usize, mut compare: F, ctx: &mut C)
where
    C: ?Sized,
    F: FnMut(&[u8], &[u8], &mut C) -> Ordering,
{
    if nel < 2 || width == 0 {
        return;
    }

    assert!(
        nel.checked_mul(width).is_some_and(|size| size <= base.len()),
        "buffer of {} bytes cannot hold {nel} elements of {width} bytes",
        base.len()
    );

    // SAFETY: we checked that `base` holds `nel * width` bytes. The core only hands out
    // pointers to the start of whole elements, which stay valid for `width` bytes.
    unsafe {
        smooth::sort(
            base.as_mut_ptr(),
            nel,
            width,
            &mut |a: *const u8, b: *const u8| {
                let a = slice::from_raw_parts(a, width);
                let b = slice::from_raw_parts(b, width);
                compare(a, b, &mut *ctx) == Ordering::Less
            },
        );
    }
}

/// Like [`qsort_r`], for comparators that need no context.
pub fn qsort<F>(base: &mut [u8], nel: usize, width: usize, mut compare: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    qsort_r(base, nel, width, |a, b, compare: &mut F| compare(a, b), &mut compare);
}
