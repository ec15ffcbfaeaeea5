//! The legacy `ecvt`, `fcvt` and `gcvt` formatters, built on the standard float
//! formatting which rounds exactly like C's `printf`.

/// Digits of a formatted number without sign or decimal point.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Digits {
    pub digits: String,
    /// Position of the decimal point relative to the start of `digits`, may be negative
    /// or past the end.
    pub decpt: i32,
    pub negative: bool,
}

fn non_finite(x: f64) -> Digits {
    let digits = if x.is_nan() { "nan" } else { "inf" };
    Digits {
        digits: digits.to_string(),
        decpt: 0,
        negative: x.is_sign_negative() && !x.is_nan(),
    }
}

/// Splits `d.ddde[-]x` into the digits without point and the decimal exponent.
fn split_exp(text: &str) -> (&str, i32) {
    match text.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (text, 0),
    }
}

/// Rounds `x` to `ndigit` significant digits. An `ndigit` of 0 or above 16 means 15.
pub fn ecvt(x: f64, ndigit: usize) -> Digits {
    if !x.is_finite() {
        return non_finite(x);
    }
    let ndigit = if ndigit == 0 || ndigit > 16 { 15 } else { ndigit };

    let text = format!("{:.*e}", ndigit - 1, x);
    let negative = text.starts_with('-');
    let (mantissa, exp) = split_exp(text.trim_start_matches('-'));

    Digits {
        digits: mantissa.chars().filter(|&c| c != '.').collect(),
        decpt: exp + 1,
        negative,
    }
}

/// Rounds `x` to `ndigit` digits after the decimal point, at most 1400.
///
/// If all requested digits are zeros a string of `min(ndigit, 14)` zeros is returned with
/// the decimal point after the first one.
pub fn fcvt(x: f64, ndigit: usize) -> Digits {
    if !x.is_finite() {
        return non_finite(x);
    }
    let ndigit = ndigit.min(1400);

    let text = format!("{:.*}", ndigit, x);
    let negative = text.starts_with('-');
    let body = text.trim_start_matches('-');

    // Leading zeros after the point if the integer part is zero, minus the number of
    // integer digits otherwise.
    let lz: i64 = if body.starts_with('0') {
        body.get(2..)
            .map_or(0, |frac| frac.bytes().take_while(|&c| c == b'0').count() as i64)
    } else {
        -(body.find('.').unwrap_or(body.len()) as i64)
    };

    if ndigit as i64 <= lz {
        return Digits {
            digits: "0".repeat(ndigit.min(14)),
            decpt: 1,
            negative,
        };
    }

    ecvt(x, (ndigit as i64 - lz) as usize)
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Formats `x` like `printf("%.*g", ndigit, x)`.
pub fn gcvt(x: f64, ndigit: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        let text = if x < 0.0 { "-inf" } else { "inf" };
        return text.to_string();
    }
    let precision = ndigit.max(1);

    let sci = format!("{:.*e}", precision - 1, x);
    let (mantissa, exp) = split_exp(&sci);

    if (exp as i64) < precision as i64 && exp >= -4 {
        let fixed = format!("{:.*}", (precision as i64 - 1 - exp as i64) as usize, x);
        strip_trailing_zeros(&fixed).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exp.unsigned_abs()
        )
    }
}
