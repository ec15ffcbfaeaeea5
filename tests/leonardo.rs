use smoothsort::leonardo::{LeonardoTable, PositionCounter, MAX_ORDERS};

#[test]
fn table_unit_width() {
    let table = LeonardoTable::new(1, 100);
    assert_eq!(table.as_slice(), &[1, 1, 3, 5, 9, 15, 25, 41, 67, 109]);
}

#[test]
fn table_is_scaled_by_width() {
    let table = LeonardoTable::new(4, 4 * 10);
    assert_eq!(table.as_slice(), &[4, 4, 12, 20, 36, 60]);
    // The last entry is the first one to cover the whole buffer.
    let lp = table.as_slice();
    assert!(lp[lp.len() - 1] >= 40);
    assert!(lp[lp.len() - 2] < 40);
}

#[test]
fn table_for_tiny_buffers_still_has_three_entries() {
    let table = LeonardoTable::new(8, 8);
    assert_eq!(table.as_slice(), &[8, 8, 24]);
}

#[test]
fn table_never_overflows() {
    let table = LeonardoTable::new(1, usize::MAX);
    assert!(table.len() <= MAX_ORDERS);
    assert_eq!(table.as_slice()[table.len() - 1], usize::MAX);

    let table = LeonardoTable::new(usize::MAX / 2, usize::MAX);
    assert_eq!(table.len(), 3);
}

#[test]
fn trailing_zeros_low_word() {
    assert_eq!(PositionCounter::new(0b1).trailing_zeros(), 0);
    assert_eq!(PositionCounter::new(0b11).trailing_zeros(), 1);
    assert_eq!(PositionCounter::new(0b101).trailing_zeros(), 2);
    assert_eq!(PositionCounter::new(0b1_0000_0001).trailing_zeros(), 8);
}

#[test]
fn trailing_zeros_crosses_word_boundary() {
    // Low word exactly one, the next tree is recorded in the high word.
    let p = PositionCounter::new((1u128 << 64) | 1);
    assert_eq!(p.low(), 1);
    assert_eq!(p.high(), 1);
    assert_eq!(p.trailing_zeros(), 64);

    let p = PositionCounter::new((1u128 << 100) | 1);
    assert_eq!(p.trailing_zeros(), 100);

    // Bit 63 is still in the low word.
    let p = PositionCounter::new((1u128 << 63) | 1);
    assert_eq!(p.high(), 0);
    assert_eq!(p.trailing_zeros(), 63);
}

#[test]
fn shifts_cross_word_boundary() {
    let mut p = PositionCounter::new(0b101);
    p.shift_left(62);
    assert_eq!(p.low(), 1 << 62);
    assert_eq!(p.high(), 1);

    p.shift_right(62);
    assert_eq!(p.bits(), 0b101);

    let mut p = PositionCounter::new(u64::MAX as u128);
    p.shift_left(64);
    assert_eq!(p.low(), 0);
    assert_eq!(p.high(), u64::MAX);

    p.shift_right(127);
    assert_eq!(p.bits(), 1);
    assert!(p.is_one());
}

#[test]
fn teardown_split_bit_pattern() {
    // Splitting a lone tree exposes its two children as adjacent orders.
    let mut p = PositionCounter::ONE;
    p.shift_left(2);
    p.flip_low3();
    p.shift_right(1);
    assert!(p.is_one());
    p.shift_left(1);
    p.set_low_bit();
    assert_eq!(p.bits(), 0b11);
    assert!(p.low_pair_set());
    assert_eq!(p.trailing_zeros(), 1);
}
