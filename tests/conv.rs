use approx::assert_relative_eq;

use smoothsort::{
    abs, atof, atoi, atol, atoll, div, ecvt, fcvt, gcvt, imaxabs, imaxdiv, labs, ldiv, llabs,
    lldiv, strtod, strtof, strtol, strtoul, strtoull, DivResult, ScanError, Scanned,
};

#[test]
fn absolute_values() {
    assert_eq!(abs(-5), 5);
    assert_eq!(abs(5), 5);
    assert_eq!(abs(i32::MIN), i32::MAX);
    assert_eq!(labs(i64::MIN), i64::MAX);
    assert_eq!(llabs(-9), 9);
    assert_eq!(imaxabs(-9), 9);
    assert_eq!(imaxabs(i64::MIN), i64::MIN);
}

#[test]
fn division_truncates() {
    assert_eq!(div(7, -2), DivResult { quot: -3, rem: 1 });
    assert_eq!(div(-7, 2), DivResult { quot: -3, rem: -1 });
    assert_eq!(ldiv(i64::MAX, 10).rem, 7);
    assert_eq!(lldiv(100, 7), DivResult { quot: 14, rem: 2 });
    assert_eq!(imaxdiv(-100, 7), DivResult { quot: -14, rem: -2 });
}

#[test]
#[should_panic]
fn division_by_zero_panics() {
    let _ = div(1, 0);
}

#[test]
fn atoi_family() {
    assert_eq!(atoi(b"  -42abc"), -42);
    assert_eq!(atoi(b"+17"), 17);
    assert_eq!(atoi(b"\x0b\t\n 8"), 8);
    assert_eq!(atoi(b"-2147483648"), i32::MIN);
    assert_eq!(atoi(b"abc"), 0);
    assert_eq!(atoi(b"- 5"), 0);
    assert_eq!(atoi(b""), 0);
    assert_eq!(atol(b"9223372036854775807"), i64::MAX);
    assert_eq!(atoll(b"-9223372036854775808"), i64::MIN);
}

#[test]
fn strtol_bases() {
    assert_eq!(strtol(b"  0x1fz", 0), Ok(Scanned::new(31, 6)));
    assert_eq!(strtol(b"0777", 0), Ok(Scanned::new(511, 4)));
    assert_eq!(strtol(b"089", 0), Ok(Scanned::new(0, 1)));
    assert_eq!(strtol(b"-0x10", 0), Ok(Scanned::new(-16, 5)));
    assert_eq!(strtol(b"0X1F", 16), Ok(Scanned::new(31, 4)));
    assert_eq!(strtol(b"1010", 2), Ok(Scanned::new(10, 4)));
    assert_eq!(strtol(b"zz", 36), Ok(Scanned::new(1295, 2)));
    assert_eq!(strtol(b"123", 10), Ok(Scanned::new(123, 3)));
}

#[test]
fn strtol_partial_and_empty() {
    // "0x" without hex digits converts just the zero.
    assert_eq!(strtol(b"0x", 16), Ok(Scanned::new(0, 1)));
    assert_eq!(strtol(b"0xg", 0), Ok(Scanned::new(0, 1)));
    assert_eq!(strtol(b"   ", 10), Ok(Scanned::new(0, 0)));
    assert_eq!(strtol(b"-", 10), Ok(Scanned::new(0, 0)));
    assert_eq!(strtol(b"", 0), Ok(Scanned::new(0, 0)));
}

#[test]
fn strtol_invalid_base() {
    assert_eq!(strtol(b"12", 1), Err(ScanError::InvalidBase(1)));
    assert_eq!(strtoul(b"12", 37), Err(ScanError::InvalidBase(37)));
}

#[test]
fn strtol_range() {
    assert_eq!(
        strtol(b"9223372036854775807", 10),
        Ok(Scanned::new(i64::MAX, 19))
    );
    assert_eq!(
        strtol(b"9223372036854775808", 10),
        Err(ScanError::OutOfRange(Scanned::new(i64::MAX, 19)))
    );
    assert_eq!(
        strtol(b"-9223372036854775808", 10),
        Ok(Scanned::new(i64::MIN, 20))
    );
    assert_eq!(
        strtol(b"-9223372036854775809", 10),
        Err(ScanError::OutOfRange(Scanned::new(i64::MIN, 20)))
    );

    let err = strtol(b"99999999999999999999999", 10).unwrap_err();
    assert_eq!(err.clamped(), Some(Scanned::new(i64::MAX, 23)));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn strtoul_wraps_sign_and_clamps() {
    assert_eq!(strtoul(b"-1", 10), Ok(Scanned::new(u64::MAX, 2)));
    assert_eq!(
        strtoull(b"18446744073709551615", 10),
        Ok(Scanned::new(u64::MAX, 20))
    );
    assert_eq!(
        strtoull(b"18446744073709551616", 10),
        Err(ScanError::OutOfRange(Scanned::new(u64::MAX, 20)))
    );
    assert_eq!(
        strtoull(b"-18446744073709551616", 10),
        Err(ScanError::OutOfRange(Scanned::new(u64::MAX, 21)))
    );
}

#[test]
fn strtod_decimal() {
    assert_eq!(strtod(b"  3.25abc"), Ok(Scanned::new(3.25, 6)));
    assert_eq!(strtod(b"-1e3"), Ok(Scanned::new(-1000.0, 4)));
    assert_eq!(strtod(b".5"), Ok(Scanned::new(0.5, 2)));
    assert_eq!(strtod(b"7."), Ok(Scanned::new(7.0, 2)));
    // An exponent marker without digits is not part of the number.
    assert_eq!(strtod(b"1e"), Ok(Scanned::new(1.0, 1)));
    assert_eq!(strtod(b"1e+"), Ok(Scanned::new(1.0, 1)));
    assert_eq!(strtod(b"."), Ok(Scanned::new(0.0, 0)));
    assert_eq!(strtod(b"x1"), Ok(Scanned::new(0.0, 0)));

    let scanned = strtod(b"6.02214076e23 mol").unwrap();
    assert_eq!(scanned.end, 13);
    assert_relative_eq!(scanned.value, 6.02214076e23);
}

#[test]
fn strtod_special_values() {
    assert_eq!(strtod(b"inf"), Ok(Scanned::new(f64::INFINITY, 3)));
    assert_eq!(strtod(b"-Infinity"), Ok(Scanned::new(f64::NEG_INFINITY, 9)));
    assert_eq!(strtod(b"INFINIT"), Ok(Scanned::new(f64::INFINITY, 3)));

    let nan = strtod(b"nan(0x1f)").unwrap();
    assert!(nan.value.is_nan());
    assert_eq!(nan.end, 9);
    assert_eq!(strtod(b"NaN(").unwrap().end, 3);
}

#[test]
fn strtod_hex() {
    assert_eq!(strtod(b"0x1.8p1"), Ok(Scanned::new(3.0, 7)));
    assert_eq!(strtod(b"0x10"), Ok(Scanned::new(16.0, 4)));
    assert_eq!(strtod(b"-0x.8"), Ok(Scanned::new(-0.5, 5)));
    assert_eq!(strtod(b"0x1p-2z"), Ok(Scanned::new(0.25, 6)));
    assert_eq!(strtod(b"0x"), Ok(Scanned::new(0.0, 1)));
    assert_eq!(strtod(b"0x1p-1074"), Ok(Scanned::new(f64::from_bits(1), 9)));
}

#[test]
fn strtod_range() {
    assert_eq!(
        strtod(b"1e400"),
        Err(ScanError::OutOfRange(Scanned::new(f64::INFINITY, 5)))
    );
    assert_eq!(
        strtod(b"1e-400"),
        Err(ScanError::OutOfRange(Scanned::new(0.0, 6)))
    );
    assert_eq!(strtod(b"0e-400"), Ok(Scanned::new(0.0, 6)));
    assert_eq!(
        strtof(b"3.5e39"),
        Err(ScanError::OutOfRange(Scanned::new(f32::INFINITY, 6)))
    );
}

#[test]
fn strtof_rounds_to_single() {
    assert_eq!(strtof(b"0.1"), Ok(Scanned::new(0.1f32, 3)));
    assert_eq!(
        strtof(b"0x1.000002p0"),
        Ok(Scanned::new(1.0 + f32::EPSILON, 12))
    );
}

#[test]
fn atof_folds_errors() {
    assert_relative_eq!(atof(b" 2.5e-3xyz"), 0.0025);
    assert_eq!(atof(b"1e999"), f64::INFINITY);
    assert_eq!(atof(b"junk"), 0.0);
}

#[test]
fn ecvt_significant_digits() {
    let d = ecvt(3.14159, 3);
    assert_eq!((d.digits.as_str(), d.decpt, d.negative), ("314", 1, false));

    let d = ecvt(-1234.5678, 6);
    assert_eq!((d.digits.as_str(), d.decpt, d.negative), ("123457", 4, true));

    let d = ecvt(0.000123, 2);
    assert_eq!((d.digits.as_str(), d.decpt), ("12", -3));

    let d = ecvt(0.0, 3);
    assert_eq!((d.digits.as_str(), d.decpt), ("000", 1));

    // Zero or too many digits fall back to fifteen.
    assert_eq!(ecvt(1.0, 0).digits, "100000000000000");
    assert_eq!(ecvt(1.0, 40).digits.len(), 15);
    assert_eq!(ecvt(1.0, 16).digits.len(), 16);
}

#[test]
fn fcvt_fraction_digits() {
    let d = fcvt(3.14159, 2);
    assert_eq!((d.digits.as_str(), d.decpt), ("314", 1));

    let d = fcvt(0.001234, 5);
    assert_eq!((d.digits.as_str(), d.decpt), ("123", -2));

    let d = fcvt(1234.7, 0);
    assert_eq!((d.digits.as_str(), d.decpt), ("1235", 4));

    let d = fcvt(-0.0001, 2);
    assert_eq!((d.digits.as_str(), d.decpt, d.negative), ("00", 1, true));

    assert_eq!(fcvt(0.0, 30).digits, "00000000000000");
}

#[test]
fn gcvt_general_format() {
    assert_eq!(gcvt(1234.5678, 6), "1234.57");
    assert_eq!(gcvt(0.0001234, 3), "0.000123");
    assert_eq!(gcvt(123456789.0, 4), "1.235e+08");
    assert_eq!(gcvt(100.0, 6), "100");
    assert_eq!(gcvt(1e-5, 2), "1e-05");
    assert_eq!(gcvt(0.0, 3), "0");
    assert_eq!(gcvt(-42.0, 0), "-4e+01");
    assert_eq!(gcvt(f64::NEG_INFINITY, 3), "-inf");
    assert_eq!(gcvt(f64::NAN, 3), "nan");
}

#[test]
fn non_finite_digits() {
    let d = ecvt(f64::INFINITY, 5);
    assert_eq!((d.digits.as_str(), d.decpt, d.negative), ("inf", 0, false));
    assert_eq!(fcvt(f64::NAN, 5).digits, "nan");
}
