//! Const-fn CRC lookup table generation for every width in `1..=64`.
//!
//! A table maps each byte value to the register contribution of feeding that
//! byte through eight steps of polynomial division. Two orientations exist:
//!
//! | Orientation | Register | Polynomial | Byte update |
//! |-------------|----------|------------|-------------|
//! | normal, width >= 8 | MSB-first | as given | `(r << 8) ^ T[(r >> (w - 8)) ^ b]` |
//! | normal, width < 8 | MSB-first | as given | `T[(r << (8 - w)) ^ b]` |
//! | reflected | LSB-first | reflected | `(r >> 8) ^ T[r ^ b]` |
//!
//! Entries are returned widened to `u64` and masked to the CRC width; the
//! compile-time engine narrows them to its register type.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::bits::{mask, reflect, top_bit};

/// One 256-entry table, widened to `u64`.
pub type Table = [u64; 256];

// ─────────────────────────────────────────────────────────────────────────────
// Single Entries
// ─────────────────────────────────────────────────────────────────────────────

/// Table entry for `index` in MSB-first orientation.
///
/// For widths of at least eight bits the byte is placed in the top byte of the
/// register. Narrower registers are widened to eight bits for the duration of
/// the division (polynomial shifted up by `8 - bits`) and shifted back down.
#[must_use]
pub const fn normal_entry(bits: u8, poly: u64, index: u8) -> u64 {
  if bits >= 8 {
    let m = mask(bits);
    let top = top_bit(bits);
    let mut crc = (index as u64) << (bits - 8);
    let mut i = 0;
    while i < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= m;
      i += 1;
    }
    crc
  } else {
    let shift = 8 - bits;
    let poly8 = (poly & mask(bits)) << shift;
    let mut crc = index as u64;
    let mut i = 0;
    while i < 8 {
      crc = if crc & 0x80 != 0 { (crc << 1) ^ poly8 } else { crc << 1 };
      crc &= 0xFF;
      i += 1;
    }
    crc >> shift
  }
}

/// Table entry for `index` in LSB-first orientation.
///
/// `poly` is the ordinary (unreflected) truncated polynomial; it is reflected
/// over `bits` here.
#[must_use]
pub const fn reflected_entry(bits: u8, poly: u64, index: u8) -> u64 {
  let rpoly = reflect(poly, bits);
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ rpoly } else { crc >> 1 };
    i += 1;
  }
  crc & mask(bits)
}

// ─────────────────────────────────────────────────────────────────────────────
// Full Tables
// ─────────────────────────────────────────────────────────────────────────────

/// Build the 256-entry table for a parameter set.
///
/// `reflect_input` selects the orientation: the compile-time engine keeps a
/// reflected register when input is reflected, so it needs the reflected table.
#[must_use]
pub const fn generate(bits: u8, poly: u64, reflect_input: bool) -> Table {
  let mut table = [0u64; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = if reflect_input {
      reflected_entry(bits, poly, i as u8)
    } else {
      normal_entry(bits, poly, i as u8)
    };
    i += 1;
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
