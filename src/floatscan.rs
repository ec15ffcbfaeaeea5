//! `strtod`, `strtof` and `atof`.
//!
//! Decimal literals are delimited here and rounded by the standard float parser.
//! Hexadecimal literals are assembled from their mantissa and binary exponent.

use std::str;

use crate::error::ScanError;
use crate::scan::{self, Scanned};

/// Hex mantissa digits beyond this many only affect the exponent.
const MAX_HEX_DIGITS: u32 = 16;

enum Literal {
    /// Start of a decimal literal, sign included. It ends where the scan ended.
    Decimal { start: usize },
    Hex {
        mantissa: u64,
        exp: i64,
    },
    Infinity,
    Nan,
    Zero,
}

struct RawFloat {
    literal: Literal,
    negative: bool,
    end: usize,
}

fn digits_at(s: &[u8], mut i: usize, radix: u32) -> usize {
    while s
        .get(i)
        .is_some_and(|&c| (c as char).to_digit(radix).is_some())
    {
        i += 1;
    }
    i
}

/// Consumes `[eEpP][+-]?digits` at `i` if the digits are present.
fn exponent_at(s: &[u8], i: usize, markers: &[u8]) -> Option<(i64, usize)> {
    if !s.get(i).is_some_and(|c| markers.contains(c)) {
        return None;
    }
    let (negative, start) = scan::sign(s, i + 1);
    let end = digits_at(s, start, 10);
    if end == start {
        return None;
    }

    let magnitude = s[start..end].iter().fold(0i64, |acc, &c| {
        acc.saturating_mul(10).saturating_add((c - b'0') as i64)
    });
    Some((if negative { -magnitude } else { magnitude }, end))
}

fn scan_hex(s: &[u8], zero: usize) -> (Literal, usize) {
    let mut i = zero + 2;
    let mut mantissa: u64 = 0;
    let mut exp: i64 = 0;
    let mut digits = 0;
    let mut seen_point = false;
    let mut any = false;

    loop {
        match s.get(i) {
            Some(b'.') if !seen_point => seen_point = true,
            Some(&c) => match (c as char).to_digit(16) {
                Some(d) => {
                    any = true;
                    if mantissa == 0 && d == 0 {
                        // Leading zeros carry no precision.
                        if seen_point {
                            exp -= 4;
                        }
                    } else if digits < MAX_HEX_DIGITS {
                        mantissa = (mantissa << 4) | d as u64;
                        digits += 1;
                        if seen_point {
                            exp -= 4;
                        }
                    } else if !seen_point {
                        exp += 4;
                    }
                }
                None => break,
            },
            None => break,
        }
        i += 1;
    }

    if !any {
        // Only the leading zero of "0x" converts.
        return (Literal::Zero, zero + 1);
    }

    match exponent_at(s, i, b"pP") {
        Some((e, end)) => (
            Literal::Hex {
                mantissa,
                exp: exp.saturating_add(e),
            },
            end,
        ),
        None => (Literal::Hex { mantissa, exp }, i),
    }
}

fn scan_float(s: &[u8]) -> Option<RawFloat> {
    let start = scan::skip_space(s, 0);
    let (negative, i) = scan::sign(s, start);

    if scan::starts_with_ignore_case(s, i, b"inf") {
        let end = if scan::starts_with_ignore_case(s, i, b"infinity") {
            i + 8
        } else {
            i + 3
        };
        return Some(RawFloat {
            literal: Literal::Infinity,
            negative,
            end,
        });
    }

    if scan::starts_with_ignore_case(s, i, b"nan") {
        let mut end = i + 3;
        if s.get(end) == Some(&b'(') {
            let close = end + 1 + s[end + 1..]
                .iter()
                .take_while(|&&c| c.is_ascii_alphanumeric() || c == b'_')
                .count();
            if s.get(close) == Some(&b')') {
                end = close + 1;
            }
        }
        return Some(RawFloat {
            literal: Literal::Nan,
            negative,
            end,
        });
    }

    if s.get(i) == Some(&b'0') && matches!(s.get(i + 1), Some(b'x' | b'X')) {
        let (literal, end) = scan_hex(s, i);
        return Some(RawFloat {
            literal,
            negative,
            end,
        });
    }

    let int_end = digits_at(s, i, 10);
    let mut end = int_end;
    let mut frac_digits = 0;
    if s.get(end) == Some(&b'.') {
        let frac_end = digits_at(s, end + 1, 10);
        frac_digits = frac_end - (end + 1);
        end = frac_end;
    }
    if int_end == i && frac_digits == 0 {
        return None;
    }
    if let Some((_, exp_end)) = exponent_at(s, end, b"eE") {
        end = exp_end;
    }

    // The sign is kept in the text handed to the float parser.
    Some(RawFloat {
        literal: Literal::Decimal { start },
        negative,
        end,
    })
}

/// Multiplies by 2^exp in steps that stay exact while the result is representable.
fn scale_by_pow2(mut x: f64, mut exp: i64) -> f64 {
    while exp > 1000 {
        x *= 2f64.powi(1000);
        exp -= 1000;
        if x.is_infinite() {
            return x;
        }
    }
    while exp < -1000 {
        x *= 2f64.powi(-1000);
        exp += 1000;
        if x == 0.0 {
            return x;
        }
    }
    x * 2f64.powi(exp as i32)
}

/// Float types the scanner can produce.
trait ScanFloat: Copy + PartialEq + std::fmt::Debug + str::FromStr {
    const INFINITY: Self;
    const NAN: Self;
    const ZERO: Self;

    fn from_f64(x: f64) -> Self;
    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
    fn neg(self) -> Self;
}

impl ScanFloat for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;
    const ZERO: Self = 0.0;

    fn from_f64(x: f64) -> Self {
        x
    }
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
    fn is_zero(self) -> bool {
        self == 0.0
    }
    fn neg(self) -> Self {
        -self
    }
}

impl ScanFloat for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;
    const ZERO: Self = 0.0;

    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
    fn is_zero(self) -> bool {
        self == 0.0
    }
    fn neg(self) -> Self {
        -self
    }
}

fn strtox<T: ScanFloat>(s: &[u8]) -> Result<Scanned<T>, ScanError<T>> {
    let Some(raw) = scan_float(s) else {
        return Ok(Scanned::new(T::ZERO, 0));
    };
    let negative = raw.negative;
    let signed = |x: T| if negative { x.neg() } else { x };

    let (value, nonzero) = match raw.literal {
        Literal::Infinity => return Ok(Scanned::new(signed(T::INFINITY), raw.end)),
        Literal::Nan => return Ok(Scanned::new(signed(T::NAN), raw.end)),
        Literal::Zero => return Ok(Scanned::new(signed(T::ZERO), raw.end)),
        Literal::Hex { mantissa, exp } => {
            let x = T::from_f64(scale_by_pow2(mantissa as f64, exp));
            (signed(x), mantissa != 0)
        }
        Literal::Decimal { start } => {
            let text = &s[start..raw.end];
            let nonzero = text
                .iter()
                .take_while(|&&c| c != b'e' && c != b'E')
                .any(|c| (b'1'..=b'9').contains(c));
            let value = str::from_utf8(text)
                .ok()
                .and_then(|text| text.parse::<T>().ok());
            match value {
                Some(value) => (value, nonzero),
                // The literal is pure ASCII and well formed, so this does not happen.
                None => return Ok(Scanned::new(T::ZERO, 0)),
            }
        }
    };

    let scanned = Scanned::new(value, raw.end);
    if value.is_infinite() || (nonzero && value.is_zero()) {
        return Err(ScanError::OutOfRange(scanned));
    }
    Ok(scanned)
}

/// Parses a double from the start of `s`. Overflow clamps to an infinity and underflow
/// to a zero, both reported as [`ScanError::OutOfRange`].
pub fn strtod(s: &[u8]) -> Result<Scanned<f64>, ScanError<f64>> {
    strtox(s)
}

pub fn strtof(s: &[u8]) -> Result<Scanned<f32>, ScanError<f32>> {
    strtox(s)
}

/// Leading floating point number of `s`, or 0.
pub fn atof(s: &[u8]) -> f64 {
    match strtod(s) {
        Ok(scanned) | Err(ScanError::OutOfRange(scanned)) => scanned.value,
        Err(ScanError::InvalidBase(_)) => 0.0,
    }
}
