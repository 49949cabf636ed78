//! Bit-level primitives shared by every engine.
//!
//! All arithmetic is carried out in `u64` and narrowed by the caller. Widths
//! are `u8` in `1..=64`; a width of 0 is accepted by [`mask`] and [`reflect`]
//! (yielding 0) so that validation code can call them before rejecting it.

/// The widest CRC register supported.
pub const MAX_BITS: u8 = 64;

/// Low `bits` bits set.
///
/// `(1 << 64) - 1` overflows a `u64`, so the full-width mask is spelled `!0`.
#[inline]
#[must_use]
pub const fn mask(bits: u8) -> u64 {
  if bits >= MAX_BITS {
    u64::MAX
  } else {
    (1u64 << bits) - 1
  }
}

/// The bit at position `bits - 1`, i.e. the register's top bit.
#[inline]
#[must_use]
pub const fn top_bit(bits: u8) -> u64 {
  if bits == 0 { 0 } else { 1u64 << (bits - 1) }
}

/// Returns `true` if `value` has no bits set at or above position `bits`.
#[inline]
#[must_use]
pub const fn fits(value: u64, bits: u8) -> bool {
  value & !mask(bits) == 0
}

/// Reverse the low `n` bits of `value`.
///
/// Bits at positions `>= n` are dropped, so
/// `reflect(reflect(x, n), n) == x & mask(n)`.
#[inline]
#[must_use]
pub const fn reflect(value: u64, n: u8) -> u64 {
  if n == 0 {
    return 0;
  }
  let n = if n > MAX_BITS { MAX_BITS } else { n };
  value.reverse_bits() >> (MAX_BITS - n)
}

/// Reverse the bit order of a single byte.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}
