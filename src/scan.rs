//! Lexing helpers shared by the integer and float scanners.

/// A successfully scanned number and the index one past its last byte.
///
/// An `end` of 0 means nothing could be converted, not even leading whitespace is
/// considered consumed in that case.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Scanned<T> {
    pub value: T,
    pub end: usize,
}

impl<T> Scanned<T> {
    #[inline]
    pub fn new(value: T, end: usize) -> Self {
        Self { value, end }
    }
}

/// The C locale's `isspace`, which unlike `u8::is_ascii_whitespace` includes `\v`.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Index of the first byte at or after `i` that is not whitespace.
#[inline]
pub(crate) fn skip_space(s: &[u8], mut i: usize) -> usize {
    while s.get(i).is_some_and(|&c| is_space(c)) {
        i += 1;
    }
    i
}

/// Consumes an optional sign at `i`, returning whether it was a minus and the index after
/// it.
#[inline]
pub(crate) fn sign(s: &[u8], i: usize) -> (bool, usize) {
    match s.get(i) {
        Some(b'-') => (true, i + 1),
        Some(b'+') => (false, i + 1),
        _ => (false, i),
    }
}

/// Value of `c` as a digit in any base up to 36.
#[inline]
pub(crate) fn digit_value(c: u8) -> Option<u32> {
    (c as char).to_digit(36)
}

/// True if `s[i..]` starts with `word`, ignoring ASCII case.
#[inline]
pub(crate) fn starts_with_ignore_case(s: &[u8], i: usize, word: &[u8]) -> bool {
    s.get(i..i + word.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(word))
}
