//! Errors reported by the number scanners.

use std::fmt;

use crate::scan::Scanned;

/// Why a `strto*` conversion did not produce an exact value.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ScanError<T> {
    /// The requested base is neither 0 nor in `2..=36`. Nothing was consumed.
    InvalidBase(u32),

    /// The digits denote a value the target type cannot represent. The scan still
    /// consumed the whole literal and produced the clamped value (the type's limit with
    /// the literal's sign, or a zero for float underflow).
    OutOfRange(Scanned<T>),
}

impl<T: Copy> ScanError<T> {
    /// The value a C caller would have received alongside `ERANGE`, if any.
    pub fn clamped(&self) -> Option<Scanned<T>> {
        match *self {
            ScanError::InvalidBase(_) => None,
            ScanError::OutOfRange(scanned) => Some(scanned),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ScanError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InvalidBase(base) => {
                write!(f, "invalid base {}: expected 0 or 2..=36", base)
            }
            ScanError::OutOfRange(scanned) => {
                write!(
                    f,
                    "value out of range: clamped to {:?} after {} bytes",
                    scanned.value, scanned.end
                )
            }
        }
    }
}

impl<T: fmt::Debug> std::error::Error for ScanError<T> {}
