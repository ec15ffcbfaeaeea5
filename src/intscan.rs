//! `atoi` and the `strtol` family.
//!
//! Strings are byte slices and need no terminator, scanning stops at the first byte that
//! cannot continue the number or at the end of the slice.

use crate::error::ScanError;
use crate::scan::{self, Scanned};

macro_rules! atox_impl {
    ($(#[$attr:meta])* $name:ident, $t:ty) => {
        $(#[$attr])*
        pub fn $name(s: &[u8]) -> $t {
            let (negative, mut i) = scan::sign(s, scan::skip_space(s, 0));

            // Accumulate negatively so that the minimum value does not overflow.
            let mut n: $t = 0;
            while let Some(&c) = s.get(i).filter(|c| c.is_ascii_digit()) {
                n = n.wrapping_mul(10).wrapping_sub((c - b'0') as $t);
                i += 1;
            }

            if negative {
                n
            } else {
                n.wrapping_neg()
            }
        }
    };
}

atox_impl!(
    /// Leading decimal integer of `s`, or 0. Out of range input wraps.
    atoi,
    i32
);
atox_impl!(atol, i64);
atox_impl!(atoll, i64);

/// Magnitude and sign of an integer literal, before it is fitted into a target type.
struct RawInt {
    magnitude: u64,
    negative: bool,
    overflow: bool,
    end: usize,
}

fn scan_int(s: &[u8], base: u32) -> Option<RawInt> {
    if base == 1 || base > 36 {
        return None;
    }

    let (negative, mut i) = scan::sign(s, scan::skip_space(s, 0));
    let hex_digit_at = |i: usize| {
        s.get(i)
            .and_then(|&c| scan::digit_value(c))
            .is_some_and(|d| d < 16)
    };

    let mut base = base;
    if (base == 0 || base == 16)
        && s.get(i) == Some(&b'0')
        && matches!(s.get(i + 1), Some(b'x' | b'X'))
    {
        if !hex_digit_at(i + 2) {
            // "0x" without hex digits is just the zero.
            return Some(RawInt {
                magnitude: 0,
                negative,
                overflow: false,
                end: i + 1,
            });
        }
        i += 2;
        base = 16;
    } else if base == 0 {
        base = if s.get(i) == Some(&b'0') { 8 } else { 10 };
    }

    let start = i;
    let mut magnitude: u64 = 0;
    let mut overflow = false;
    while let Some(d) = s
        .get(i)
        .and_then(|&c| scan::digit_value(c))
        .filter(|&d| d < base)
    {
        match magnitude
            .checked_mul(base as u64)
            .and_then(|m| m.checked_add(d as u64))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        i += 1;
    }

    if i == start {
        return Some(RawInt {
            magnitude: 0,
            negative: false,
            overflow: false,
            end: 0,
        });
    }

    Some(RawInt {
        magnitude,
        negative,
        overflow,
        end: i,
    })
}

/// Parses a signed integer in `base` (0 infers it from the prefix) from the start of `s`.
pub fn strtol(s: &[u8], base: u32) -> Result<Scanned<i64>, ScanError<i64>> {
    const LIMIT: u64 = 1 << 63;

    let raw = scan_int(s, base).ok_or(ScanError::InvalidBase(base))?;
    if raw.overflow || raw.magnitude > LIMIT || (raw.magnitude == LIMIT && !raw.negative) {
        let value = if raw.negative { i64::MIN } else { i64::MAX };
        return Err(ScanError::OutOfRange(Scanned::new(value, raw.end)));
    }

    // A magnitude of exactly 2^63 is only accepted negated and wraps onto i64::MIN.
    let value = if raw.negative {
        (raw.magnitude as i64).wrapping_neg()
    } else {
        raw.magnitude as i64
    };
    Ok(Scanned::new(value, raw.end))
}

#[inline]
pub fn strtoll(s: &[u8], base: u32) -> Result<Scanned<i64>, ScanError<i64>> {
    strtol(s, base)
}

#[inline]
pub fn strtoimax(s: &[u8], base: u32) -> Result<Scanned<i64>, ScanError<i64>> {
    strtoll(s, base)
}

/// Parses an unsigned integer. A leading minus negates the result modulo 2^64, values
/// that do not fit clamp to `u64::MAX` regardless of sign.
pub fn strtoul(s: &[u8], base: u32) -> Result<Scanned<u64>, ScanError<u64>> {
    let raw = scan_int(s, base).ok_or(ScanError::InvalidBase(base))?;
    if raw.overflow {
        return Err(ScanError::OutOfRange(Scanned::new(u64::MAX, raw.end)));
    }

    let value = if raw.negative {
        raw.magnitude.wrapping_neg()
    } else {
        raw.magnitude
    };
    Ok(Scanned::new(value, raw.end))
}

#[inline]
pub fn strtoull(s: &[u8], base: u32) -> Result<Scanned<u64>, ScanError<u64>> {
    strtoul(s, base)
}

#[inline]
pub fn strtoumax(s: &[u8], base: u32) -> Result<Scanned<u64>, ScanError<u64>> {
    strtoull(s, base)
}
