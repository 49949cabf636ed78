//! Bitwise reference implementation for all CRC widths.
//!
//! This module is the "source of truth" for CRC computation. It processes one
//! bit at a time with the register held MSB-first, mirroring the polynomial
//! division definition directly:
//!
//! - **Obviously correct**: one shift and one conditional XOR per input bit
//! - **Width-agnostic**: every width in `1..=64` goes through the same code
//! - **Const-evaluable**: check values are verified at compile time below
//!
//! The runtime engine ([`CrcBasic`](crate::CrcBasic)) is built on these
//! functions; the table-driven engine must produce identical results.
//!
//! # CRC Model
//!
//! These implementations follow the Rocksoft model (CRC RevEng catalogue):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `bits`    | CRC width in bits (1..=64) |
//! | `poly`    | Truncated generator polynomial, never reflected |
//! | `init`    | Initial register value, MSB-first |
//! | `refin`   | Feed each input byte LSB-first |
//! | `refout`  | Reflect the register before the final XOR |
//! | `xorout`  | Final XOR value |
//!
//! Because the register is never reflected, the output reflection here is
//! exactly `refout`. Engines that keep a reflected register instead (the
//! table-driven one does when `refin` is set) reflect iff `refin != refout`.

// SAFETY: All slice indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

use super::bits::{mask, reflect, top_bit};

/// Advance an MSB-first register by one input bit.
///
/// The bit is XORed into the top of the register; if the top bit is then set
/// the register is shifted and reduced by the polynomial.
#[inline]
#[must_use]
pub const fn step_bit(bits: u8, poly: u64, register: u64, bit: bool) -> u64 {
  let top = top_bit(bits);
  let mut crc = register;
  if bit {
    crc ^= top;
  }
  crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
  crc & mask(bits)
}

/// Feed the low `count` bits of `value` (`count <= 8`, checked by callers).
///
/// Bits go MSB-first (bit `count - 1` down to bit 0) unless `lsb_first` is set,
/// in which case bit 0 goes first.
#[inline]
#[must_use]
pub const fn step_bits(bits: u8, poly: u64, register: u64, value: u8, count: u8, lsb_first: bool) -> u64 {
  let mut crc = register;
  let mut i = 0u8;
  while i < count {
    let pos = if lsb_first { i } else { count - 1 - i };
    crc = step_bit(bits, poly, crc, (value >> pos) & 1 != 0);
    i += 1;
  }
  crc
}

/// Feed a whole byte: LSB-first when input is reflected, otherwise MSB-first.
#[inline]
#[must_use]
pub const fn step_byte(bits: u8, poly: u64, register: u64, byte: u8, reflect_input: bool) -> u64 {
  step_bits(bits, poly, register, byte, 8, reflect_input)
}

/// Feed every byte of `data` in order.
#[must_use]
pub const fn step_bytes(bits: u8, poly: u64, register: u64, data: &[u8], reflect_input: bool) -> u64 {
  let mut crc = register;
  let mut i = 0usize;
  while i < data.len() {
    crc = step_byte(bits, poly, crc, data[i], reflect_input);
    i += 1;
  }
  crc
}

/// Turn a register into the published checksum.
///
/// The register is reflected over `bits` iff `reflect`, then XORed with
/// `xor_out` and masked.
#[inline]
#[must_use]
pub const fn finish(bits: u8, register: u64, xor_out: u64, reflect_register: bool) -> u64 {
  let crc = if reflect_register { reflect(register, bits) } else { register };
  (crc ^ xor_out) & mask(bits)
}

/// One-shot bitwise CRC.
#[must_use]
pub const fn crc_bitwise(
  bits: u8,
  poly: u64,
  init: u64,
  xor_out: u64,
  refin: bool,
  refout: bool,
  data: &[u8],
) -> u64 {
  let crc = step_bytes(bits, poly, init & mask(bits), data, refin);
  finish(bits, crc, xor_out, refout)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions verify the reference implementation against known
// check values at compile time. If these fail, the build fails.

/// Standard test input for CRC check values.
pub const CHECK_INPUT: &[u8] = b"123456789";

// CRC-12/UMTS: input unreflected, output reflected.
const _: () = assert!(crc_bitwise(12, 0x80F, 0, 0, false, true, CHECK_INPUT) == 0xDAF);

// CRC-16/MAXIM-DOW: init and xorout differ.
const _: () = assert!(crc_bitwise(16, 0x8005, 0, 0xFFFF, true, true, CHECK_INPUT) == 0x44C2);

// CRC-16/CCITT-FALSE
const _: () = assert!(crc_bitwise(16, 0x1021, 0xFFFF, 0, false, false, CHECK_INPUT) == 0x29B1);

// CRC-32/ISO-HDLC
const _: () = assert!(crc_bitwise(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true, CHECK_INPUT) == 0xCBF4_3926);

// CRC-64/XZ
const _: () = assert!(crc_bitwise(64, 0x42F0_E1EB_A9EA_3693, !0, !0, true, true, CHECK_INPUT) == 0x995D_C9BB_DF19_39FA);

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
