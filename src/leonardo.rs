//! Leonardo numbers and the position counter that tracks the heap forest.
//!
//! A smoothsort heap is a forest of Leonardo trees with strictly decreasing orders
//! (except possibly the last two, which may be orders 1 and 0). The orders present are
//! recorded as set bits in a [`PositionCounter`], relative to the order of the rightmost
//! tree, which is kept alongside as `pshift`.

use core::mem;

/// Capacity of the Leonardo table. L(k) grows like phi^k, so 12 entries per byte of
/// `usize` is comfortably more than the largest order a `usize` sized buffer can hold.
pub const MAX_ORDERS: usize = 12 * mem::size_of::<usize>();

/// Leonardo numbers L(0) = L(1) = w, L(k) = L(k - 1) + L(k - 2) + w, scaled by the
/// element width `w` so they can be used directly as byte offsets.
pub struct LeonardoTable {
    lp: [usize; MAX_ORDERS],
    len: usize,
}

impl LeonardoTable {
    /// Precomputes the table for elements of `width` bytes, stopping at the first entry
    /// that is at least `size` bytes.
    pub fn new(width: usize, size: usize) -> Self {
        let mut lp = [0usize; MAX_ORDERS];
        lp[0] = width;
        lp[1] = width;

        let mut len = 2;
        while len < MAX_ORDERS {
            // Saturation guarantees the loop ends long before the table runs out.
            lp[len] = lp[len - 2].saturating_add(lp[len - 1]).saturating_add(width);
            len += 1;
            if lp[len - 1] >= size {
                break;
            }
        }

        Self { lp, len }
    }

    /// Number of computed entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        &self.lp[..self.len]
    }

    /// Byte length of a Leonardo tree of the given order.
    ///
    /// SAFETY: `order` must be below `len()`.
    #[inline(always)]
    pub(crate) unsafe fn get_unchecked(&self, order: u32) -> usize {
        debug_assert!((order as usize) < self.len);
        unsafe { *self.lp.get_unchecked(order as usize) }
    }
}

/// Bitmask of the Leonardo tree orders currently in the forest, relative to the order of
/// the rightmost tree. Bit 0 is that rightmost tree.
///
/// The counter is twice the width of a machine word on 64-bit targets, which is what
/// makes it possible to describe every forest over a `usize` sized buffer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PositionCounter(u128);

impl PositionCounter {
    /// A forest made of a single tree.
    pub const ONE: Self = Self(1);

    pub const BITS: u32 = u128::BITS;

    #[inline(always)]
    pub const fn new(bits: u128) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn bits(self) -> u128 {
        self.0
    }

    /// Low word of the counter.
    #[inline(always)]
    pub const fn low(self) -> u64 {
        self.0 as u64
    }

    /// High word of the counter.
    #[inline(always)]
    pub const fn high(self) -> u64 {
        (self.0 >> 64) as u64
    }

    #[inline(always)]
    pub const fn is_one(self) -> bool {
        self.0 == 1
    }

    #[inline(always)]
    pub fn shift_left(&mut self, n: u32) {
        debug_assert!(n < u128::BITS);
        self.0 <<= n;
    }

    #[inline(always)]
    pub fn shift_right(&mut self, n: u32) {
        debug_assert!(n < u128::BITS);
        self.0 >>= n;
    }

    #[inline(always)]
    pub fn set_low_bit(&mut self) {
        self.0 |= 1;
    }

    /// Flips the three lowest bits.
    #[inline(always)]
    pub fn flip_low3(&mut self) {
        self.0 ^= 0b111;
    }

    /// True if the two rightmost trees have consecutive orders and can be merged.
    #[inline(always)]
    pub const fn low_pair_set(self) -> bool {
        self.0 & 0b11 == 0b11
    }

    /// Distance from the rightmost tree to the next tree in the forest, i.e. the
    /// trailing zeros of `p - 1`. Returns 0 for a forest of a single tree.
    #[inline(always)]
    pub const fn trailing_zeros(self) -> u32 {
        if self.0 <= 1 {
            return 0;
        }
        (self.0 - 1).trailing_zeros()
    }
}
