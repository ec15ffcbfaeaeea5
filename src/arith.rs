//! Absolute value and combined quotient/remainder for the C integer types.
//!
//! `int` is `i32`, while `long`, `long long` and `intmax_t` are all `i64`.

/// Quotient and remainder of a truncating division.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DivResult<T> {
    pub quot: T,
    pub rem: T,
}

/// `|a|`, with `i32::MIN` saturating to `i32::MAX`.
#[inline]
pub fn abs(a: i32) -> i32 {
    a.saturating_abs()
}

#[inline]
pub fn labs(a: i64) -> i64 {
    a.saturating_abs()
}

#[inline]
pub fn llabs(a: i64) -> i64 {
    a.saturating_abs()
}

/// `|a|`, except that `i64::MIN` is returned unchanged.
#[inline]
pub fn imaxabs(a: i64) -> i64 {
    a.wrapping_abs()
}

macro_rules! div_impl {
    ($name:ident, $t:ty) => {
        /// Truncating division.
        ///
        /// # Panics
        ///
        /// Panics if `den` is zero, or on `MIN / -1`.
        #[inline]
        pub fn $name(num: $t, den: $t) -> DivResult<$t> {
            DivResult {
                quot: num / den,
                rem: num % den,
            }
        }
    };
}

div_impl!(div, i32);
div_impl!(ldiv, i64);
div_impl!(lldiv, i64);
div_impl!(imaxdiv, i64);
