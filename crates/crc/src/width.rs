//! Register types and the width selector.
//!
//! A CRC of `N` bits lives in the smallest unsigned integer that can hold it.
//! [`Word<N>`] names that type at the type level; [`word_bits`] answers the same
//! question for a runtime width.
//!
//! ```
//! use crc::Word;
//!
//! let _: Word<12> = 0x80Fu16;
//! let _: Word<33> = 0u64;
//! assert_eq!(crc::width::word_bits(24), Some(32));
//! ```

use core::fmt::{Debug, LowerHex, UpperHex};

mod private {
  pub trait Sealed {}
}

/// An unsigned integer usable as a CRC register.
///
/// Sealed: implemented for `u8`, `u16`, `u32` and `u64` only.
pub trait Width: private::Sealed + Copy + Eq + Debug + Default + LowerHex + UpperHex + Send + Sync + 'static {
  /// Number of bits in the type.
  const BITS: u8;

  /// Truncate a `u64` to this type.
  fn from_u64(value: u64) -> Self;

  /// Widen to `u64`.
  fn to_u64(self) -> u64;
}

macro_rules! impl_width {
  ($($ty:ty),* $(,)?) => {
    $(
      impl private::Sealed for $ty {}

      impl Width for $ty {
        const BITS: u8 = <$ty>::BITS as u8;

        #[inline]
        fn from_u64(value: u64) -> Self {
          value as $ty
        }

        #[inline]
        fn to_u64(self) -> u64 {
          self as u64
        }
      }
    )*
  };
}

impl_width!(u8, u16, u32, u64);

/// Type-level CRC width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bits<const N: u8>;

/// Maps a [`Bits<N>`] to the smallest register type that holds `N` bits.
pub trait SelectWord {
  /// The selected register type.
  type Word: Width;
}

macro_rules! select_word {
  ($ty:ty => $($n:literal)*) => {
    $(
      impl SelectWord for Bits<$n> {
        type Word = $ty;
      }
    )*
  };
}

select_word!(u8 => 1 2 3 4 5 6 7 8);
select_word!(u16 => 9 10 11 12 13 14 15 16);
select_word!(u32 => 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
select_word!(u64 =>
  33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
  49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
);

/// The smallest unsigned integer holding `N` bits (`1 <= N <= 64`).
pub type Word<const N: u8> = <Bits<N> as SelectWord>::Word;

/// Bit size of the smallest register type for a runtime width, or `None` when
/// `bits` is 0 or wider than 64.
#[must_use]
pub const fn word_bits(bits: u8) -> Option<u8> {
  match bits {
    1..=8 => Some(8),
    9..=16 => Some(16),
    17..=32 => Some(32),
    33..=64 => Some(64),
    _ => None,
  }
}
