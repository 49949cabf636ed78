//! Compile-time-parameterised, table-driven CRC engine.
//!
//! [`CrcOptimal`] carries every CRC parameter in its type. The 256-entry lookup
//! table is an associated constant computed by `const fn`, so it is built once
//! per parameter set at compile time and shared by every instance. All
//! operations are `const fn`: a CRC over constant input can be evaluated
//! entirely at compile time.
//!
//! # Register Orientation
//!
//! | `REFIN` | Register | Byte update |
//! |---------|----------|-------------|
//! | `false`, width >= 8 | MSB-first | `(r << 8) ^ T[(r >> (w - 8)) ^ b]` |
//! | `false`, width < 8 | MSB-first | `T[(r << (8 - w)) ^ b]` |
//! | `true` | LSB-first (reflected) | `(r >> 8) ^ T[(r ^ b) & 0xFF]` |
//!
//! With a reflected register the final reflection is applied iff
//! `REFIN != REFOUT`.
//!
//! # Example
//!
//! ```
//! use crc::CrcOptimal;
//!
//! type Crc12Umts = CrcOptimal<u16, 12, 0x80F, 0x000, 0x000, false, true>;
//!
//! const CHECK: u16 = Crc12Umts::checksum_of(b"123456789");
//! assert_eq!(CHECK, 0xDAF);
//!
//! let mut crc = Crc12Umts::new();
//! crc.process_bytes(b"1234");
//! crc.process_bytes(b"56789");
//! assert_eq!(crc.checksum(), CHECK);
//! ```

// SAFETY: Table indices are masked to 0..=0xFF before indexing a 256-entry array.
#![allow(clippy::indexing_slicing)]

use crate::common::{bits, reference, tables};
use crate::{basic::MAX_BITS_PER_CALL, error::CrcError};

/// Table-driven CRC engine whose parameters are part of its type.
///
/// - `W`: register type (`u8`, `u16`, `u32` or `u64`), at least `BITS` wide
/// - `BITS`: CRC width in `1..=64`
/// - `POLY`: truncated polynomial
/// - `INIT`: default initial remainder (unreflected)
/// - `XOR`: final XOR value
/// - `REFIN` / `REFOUT`: input and remainder reflection
///
/// Out-of-range parameters are rejected when the type is first used, as a
/// compile error. Use [`crc_optimal!`](crate::crc_optimal) to derive the type
/// from a [`CrcParams`](crate::CrcParams) constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcOptimal<
  W,
  const BITS: u8,
  const POLY: u64,
  const INIT: u64,
  const XOR: u64,
  const REFIN: bool,
  const REFOUT: bool,
> {
  /// Reflected (LSB-first) when `REFIN`, otherwise MSB-first. Always masked.
  remainder: W,
}

/// Name the [`CrcOptimal`] type for a [`CrcParams`](crate::CrcParams) constant.
///
/// The register type is chosen with [`Word`](crate::Word).
///
/// ```
/// use crc::{catalog::CRC_16_XMODEM, crc_optimal};
///
/// type Xmodem = crc_optimal!(CRC_16_XMODEM);
/// let crc: u16 = Xmodem::checksum_of(b"123456789");
/// assert_eq!(crc, 0x31C3);
/// ```
#[macro_export]
macro_rules! crc_optimal {
  ($params:path) => {
    $crate::CrcOptimal<
      $crate::Word<{ $params.bit_count() }>,
      { $params.bit_count() },
      { $params.truncated_polynomial() },
      { $params.initial_remainder() },
      { $params.final_xor_value() },
      { $params.reflect_input() },
      { $params.reflect_remainder() },
    >
  };
}

macro_rules! define_optimal {
  ($($w:ty),* $(,)?) => {
    $(
      impl<const BITS: u8, const POLY: u64, const INIT: u64, const XOR: u64, const REFIN: bool, const REFOUT: bool>
        CrcOptimal<$w, BITS, POLY, INIT, XOR, REFIN, REFOUT>
      {
        /// Parameters as associated constants, narrowed to the register type.
        pub const BIT_COUNT: u8 = BITS;
        pub const TRUNCATED_POLYNOMIAL: $w = POLY as $w;
        pub const INITIAL_REMAINDER: $w = INIT as $w;
        pub const FINAL_XOR_VALUE: $w = XOR as $w;
        pub const REFLECT_INPUT: bool = REFIN;
        pub const REFLECT_REMAINDER: bool = REFOUT;

        const MASK: u64 = bits::mask(BITS);
        const REFLECTED_POLY: u64 = bits::reflect(POLY, BITS);

        const VALID: () = {
          assert!(BITS >= 1, "CRC width must be at least 1");
          assert!(BITS <= <$w>::BITS as u8, "CRC width exceeds the register type");
          assert!(bits::fits(POLY, BITS), "truncated polynomial does not fit in the CRC width");
          assert!(bits::fits(INIT, BITS), "initial remainder does not fit in the CRC width");
          assert!(bits::fits(XOR, BITS), "final xor value does not fit in the CRC width");
        };

        /// The lookup table for this parameter set, in register orientation.
        pub const TABLE: [$w; 256] = {
          let wide = tables::generate(BITS, POLY, REFIN);
          let mut table = [0 as $w; 256];
          let mut i = 0;
          while i < 256 {
            table[i] = wide[i] as $w;
            i += 1;
          }
          table
        };

        /// Create an engine loaded with the default initial remainder.
        #[inline]
        #[must_use]
        pub const fn new() -> Self {
          Self::with_initial(INIT as $w)
        }

        /// Create an engine loaded with `initial` instead of the default.
        ///
        /// Bits above `BITS` are discarded.
        #[inline]
        #[must_use]
        pub const fn with_initial(initial: $w) -> Self {
          let () = Self::VALID;
          Self {
            remainder: Self::load(initial as u64),
          }
        }

        #[inline]
        const fn load(initial: u64) -> $w {
          let init = initial & Self::MASK;
          (if REFIN { bits::reflect(init, BITS) } else { init }) as $w
        }

        /// CRC width in bits.
        #[inline]
        #[must_use]
        pub const fn bit_count(&self) -> u8 {
          BITS
        }

        /// Generator polynomial without the `x^bit_count` term.
        #[inline]
        #[must_use]
        pub const fn truncated_polynomial(&self) -> $w {
          Self::TRUNCATED_POLYNOMIAL
        }

        /// Register value loaded before any input.
        #[inline]
        #[must_use]
        pub const fn initial_remainder(&self) -> $w {
          Self::INITIAL_REMAINDER
        }

        /// Value XORed into the final remainder.
        #[inline]
        #[must_use]
        pub const fn final_xor_value(&self) -> $w {
          Self::FINAL_XOR_VALUE
        }

        /// Whether input bytes are fed LSB-first.
        #[inline]
        #[must_use]
        pub const fn reflect_input(&self) -> bool {
          REFIN
        }

        /// Whether the remainder is reflected before the final XOR.
        #[inline]
        #[must_use]
        pub const fn reflect_remainder(&self) -> bool {
          REFOUT
        }

        /// The current register in unreflected (MSB-first) orientation.
        #[inline]
        #[must_use]
        pub const fn interim_remainder(&self) -> $w {
          let r = self.remainder as u64;
          (if REFIN { bits::reflect(r, BITS) } else { r }) as $w
        }

        /// Restore the default initial remainder.
        #[inline]
        pub const fn reset(&mut self) {
          self.remainder = Self::load(INIT);
        }

        /// Load `initial` into the register. Bits above `BITS` are discarded.
        #[inline]
        pub const fn reset_with(&mut self, initial: $w) {
          self.remainder = Self::load(initial as u64);
        }

        /// Feed a single bit.
        #[inline]
        pub const fn process_bit(&mut self, bit: bool) {
          let r = self.remainder as u64;
          let r = if REFIN {
            let r = r ^ (bit as u64);
            if r & 1 != 0 { (r >> 1) ^ Self::REFLECTED_POLY } else { r >> 1 }
          } else {
            reference::step_bit(BITS, POLY, r, bit)
          };
          self.remainder = r as $w;
        }

        /// Feed the low `count` bits of `value`: MSB-first, or LSB-first when
        /// input is reflected.
        ///
        /// # Errors
        ///
        /// [`CrcError::BitCountOutOfRange`] if `count > 8`; the register is
        /// untouched.
        pub const fn process_bits(&mut self, value: u8, count: u8) -> Result<(), CrcError> {
          if count > MAX_BITS_PER_CALL {
            return Err(CrcError::BitCountOutOfRange {
              requested: count,
              max: MAX_BITS_PER_CALL,
            });
          }
          let mut i = 0u8;
          while i < count {
            let pos = if REFIN { i } else { count - 1 - i };
            self.process_bit((value >> pos) & 1 != 0);
            i += 1;
          }
          Ok(())
        }

        /// Feed one byte: one table lookup, one XOR, one shift.
        #[inline]
        pub const fn process_byte(&mut self, byte: u8) {
          #[cfg(not(feature = "no-tables"))]
          {
            self.remainder = Self::table_step(self.remainder, byte);
          }

          #[cfg(feature = "no-tables")]
          {
            let mut i = 0u8;
            while i < 8 {
              let pos = if REFIN { i } else { 7 - i };
              self.process_bit((byte >> pos) & 1 != 0);
              i += 1;
            }
          }
        }

        #[inline]
        #[cfg_attr(feature = "no-tables", allow(dead_code))]
        const fn table_step(remainder: $w, byte: u8) -> $w {
          let r = remainder as u64;
          let b = byte as u64;
          let r = if REFIN {
            (r >> 8) ^ Self::TABLE[((r ^ b) & 0xFF) as usize] as u64
          } else if BITS >= 8 {
            let idx = ((r >> BITS.saturating_sub(8)) ^ b) & 0xFF;
            ((r << 8) ^ Self::TABLE[idx as usize] as u64) & Self::MASK
          } else {
            let idx = ((r << 8u8.saturating_sub(BITS)) ^ b) & 0xFF;
            Self::TABLE[idx as usize] as u64
          };
          r as $w
        }

        /// Feed every byte of `data` in order.
        #[inline]
        pub const fn process_bytes(&mut self, data: &[u8]) {
          let mut i = 0usize;
          while i < data.len() {
            self.process_byte(data[i]);
            i += 1;
          }
        }

        /// The CRC of everything fed so far. Does not modify the engine.
        #[inline]
        #[must_use]
        pub const fn checksum(&self) -> $w {
          reference::finish(BITS, self.remainder as u64, XOR, REFIN != REFOUT) as $w
        }

        /// One-shot CRC of `data` from the default initial remainder.
        #[inline]
        #[must_use]
        pub const fn checksum_of(data: &[u8]) -> $w {
          let mut crc = Self::new();
          crc.process_bytes(data);
          crc.checksum()
        }

        /// Name of the computation path, for diagnostics.
        #[inline]
        #[must_use]
        pub const fn backend_name() -> &'static str {
          #[cfg(feature = "no-tables")]
          return "portable/bitwise";

          #[cfg(not(feature = "no-tables"))]
          "portable/table"
        }
      }

      impl<const BITS: u8, const POLY: u64, const INIT: u64, const XOR: u64, const REFIN: bool, const REFOUT: bool>
        Default for CrcOptimal<$w, BITS, POLY, INIT, XOR, REFIN, REFOUT>
      {
        #[inline]
        fn default() -> Self {
          Self::new()
        }
      }

      impl<const BITS: u8, const POLY: u64, const INIT: u64, const XOR: u64, const REFIN: bool, const REFOUT: bool>
        traits::Checksum for CrcOptimal<$w, BITS, POLY, INIT, XOR, REFIN, REFOUT>
      {
        const OUTPUT_SIZE: usize = core::mem::size_of::<$w>();
        type Output = $w;

        #[inline]
        fn new() -> Self {
          Self::new()
        }

        #[inline]
        fn with_initial(initial: $w) -> Self {
          Self::with_initial(initial)
        }

        #[inline]
        fn update(&mut self, data: &[u8]) {
          self.process_bytes(data);
        }

        #[inline]
        fn finalize(&self) -> $w {
          Self::checksum(self)
        }

        #[inline]
        fn reset(&mut self) {
          Self::reset(self);
        }

        #[inline]
        fn checksum(data: &[u8]) -> $w {
          Self::checksum_of(data)
        }
      }

      #[cfg(feature = "std")]
      impl<const BITS: u8, const POLY: u64, const INIT: u64, const XOR: u64, const REFIN: bool, const REFOUT: bool>
        std::io::Write for CrcOptimal<$w, BITS, POLY, INIT, XOR, REFIN, REFOUT>
      {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
          self.process_bytes(buf);
          Ok(buf.len())
        }

        #[inline]
        fn flush(&mut self) -> std::io::Result<()> {
          Ok(())
        }
      }
    )*
  };
}

define_optimal!(u8, u16, u32, u64);

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const _: () = {
  let mut crc = CrcOptimal::<u16, 12, 0x80F, 0x000, 0x000, false, true>::new();
  crc.process_bytes(reference::CHECK_INPUT);
  assert!(crc.checksum() == 0xDAF);
};

const _: () = {
  type Crc32 = CrcOptimal<u32, 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true>;
  assert!(Crc32::checksum_of(reference::CHECK_INPUT) == 0xCBF4_3926);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
