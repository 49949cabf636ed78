//! CRC algorithm parameters.
//!
//! This module defines the parameter bundle shared by both engines, following
//! the conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//! Ready-made bundles live in [`catalog`](crate::catalog).

use core::fmt;

use crate::{
  common::{
    bits::{MAX_BITS, fits, mask, reflect},
    reference::{CHECK_INPUT, crc_bitwise},
  },
  error::{CrcError, Parameter},
};

/// CRC algorithm parameters.
///
/// A value type grouping the seven parameters that fully describe a CRC,
/// plus an optional catalogue name. Immutable once constructed: every field
/// is validated against `bit_count` by [`new`](Self::new).
///
/// # Parameters
///
/// - `bit_count`: Number of bits in the CRC (1..=64)
/// - `truncated_polynomial`: The generator polynomial without the implicit `x^bit_count` term
/// - `initial_remainder`: Initial value for the CRC register (unreflected)
/// - `final_xor_value`: Value to XOR with the final CRC
/// - `reflect_input`: If true, each input byte is processed LSB-first
/// - `reflect_remainder`: If true, the final remainder is reflected before the XOR
/// - `check_value`: The CRC of the ASCII string `"123456789"`
///
/// # Example
///
/// ```
/// use crc::CrcParams;
///
/// let umts = CrcParams::new(12, 0x80F, 0x000, 0x000, false, true, 0xDAF)?;
/// assert_eq!(umts.checksum(b"123456789"), 0xDAF);
/// umts.verify()?;
/// # Ok::<(), crc::CrcError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  name: Option<&'static str>,
  bit_count: u8,
  truncated_polynomial: u64,
  initial_remainder: u64,
  final_xor_value: u64,
  reflect_input: bool,
  reflect_remainder: bool,
  check_value: u64,
}

impl CrcParams {
  /// Validate and bundle the seven CRC parameters.
  ///
  /// # Errors
  ///
  /// [`CrcError::ParameterOutOfRange`] if `bit_count` is outside `1..=64` or
  /// any value does not fit in `bit_count` bits.
  #[allow(clippy::too_many_arguments)]
  pub const fn new(
    bit_count: u8,
    truncated_polynomial: u64,
    initial_remainder: u64,
    final_xor_value: u64,
    reflect_input: bool,
    reflect_remainder: bool,
    check_value: u64,
  ) -> Result<Self, CrcError> {
    if let Err(e) = validate(
      bit_count,
      MAX_BITS,
      truncated_polynomial,
      initial_remainder,
      final_xor_value,
    ) {
      return Err(e);
    }
    if !fits(check_value, bit_count) {
      return Err(CrcError::out_of_range(Parameter::CheckValue, bit_count));
    }
    Ok(Self {
      name: None,
      bit_count,
      truncated_polynomial,
      initial_remainder,
      final_xor_value,
      reflect_input,
      reflect_remainder,
      check_value,
    })
  }

  /// Attach a catalogue name.
  #[must_use]
  pub const fn named(mut self, name: &'static str) -> Self {
    self.name = Some(name);
    self
  }

  /// The catalogue name, if any.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> Option<&'static str> {
    self.name
  }

  /// CRC width in bits.
  #[inline]
  #[must_use]
  pub const fn bit_count(&self) -> u8 {
    self.bit_count
  }

  /// Generator polynomial without the `x^bit_count` term.
  #[inline]
  #[must_use]
  pub const fn truncated_polynomial(&self) -> u64 {
    self.truncated_polynomial
  }

  /// Register value loaded before any input.
  #[inline]
  #[must_use]
  pub const fn initial_remainder(&self) -> u64 {
    self.initial_remainder
  }

  /// Value XORed into the final remainder.
  #[inline]
  #[must_use]
  pub const fn final_xor_value(&self) -> u64 {
    self.final_xor_value
  }

  /// Whether input bytes are fed LSB-first.
  #[inline]
  #[must_use]
  pub const fn reflect_input(&self) -> bool {
    self.reflect_input
  }

  /// Whether the remainder is reflected before the final XOR.
  #[inline]
  #[must_use]
  pub const fn reflect_remainder(&self) -> bool {
    self.reflect_remainder
  }

  /// Expected CRC of `b"123456789"`.
  #[inline]
  #[must_use]
  pub const fn check_value(&self) -> u64 {
    self.check_value
  }

  /// Mask with the low `bit_count` bits set.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    mask(self.bit_count)
  }

  /// Returns the reflected polynomial (bit-reversed over `bit_count`).
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect(self.truncated_polynomial, self.bit_count)
  }

  /// Compute the CRC of `data` bit-at-a-time.
  ///
  /// This is the reference path: slow, width-agnostic and usable in const
  /// context.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u64 {
    crc_bitwise(
      self.bit_count,
      self.truncated_polynomial,
      self.initial_remainder,
      self.final_xor_value,
      self.reflect_input,
      self.reflect_remainder,
      data,
    )
  }

  /// Self-test: the CRC of `"123456789"` must equal `check_value`.
  ///
  /// # Errors
  ///
  /// [`CrcError::CheckValueMismatch`] carrying both values.
  pub const fn verify(&self) -> Result<(), CrcError> {
    let computed = self.checksum(CHECK_INPUT);
    if computed == self.check_value {
      Ok(())
    } else {
      Err(CrcError::CheckValueMismatch {
        expected: self.check_value,
        computed,
      })
    }
  }
}

impl fmt::Display for CrcParams {
  /// Formats the bundle the way the CRC Catalogue writes it.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = usize::from(self.bit_count.div_ceil(4));
    write!(
      f,
      "width={} poly={:#0w$x} init={:#0w$x} refin={} refout={} xorout={:#0w$x} check={:#0w$x}",
      self.bit_count,
      self.truncated_polynomial,
      self.initial_remainder,
      self.reflect_input,
      self.reflect_remainder,
      self.final_xor_value,
      self.check_value,
      w = digits + 2,
    )?;
    if let Some(name) = self.name {
      write!(f, " name=\"{name}\"")?;
    }
    Ok(())
  }
}

/// Shared parameter validation for bundles and engines.
///
/// `max_bits` is the register type's width; bundles pass [`MAX_BITS`].
pub(crate) const fn validate(
  bit_count: u8,
  max_bits: u8,
  truncated_polynomial: u64,
  initial_remainder: u64,
  final_xor_value: u64,
) -> Result<(), CrcError> {
  if bit_count == 0 || bit_count > max_bits || bit_count > MAX_BITS {
    return Err(CrcError::out_of_range(Parameter::BitCount, bit_count));
  }
  if !fits(truncated_polynomial, bit_count) {
    return Err(CrcError::out_of_range(Parameter::TruncatedPolynomial, bit_count));
  }
  if !fits(initial_remainder, bit_count) {
    return Err(CrcError::out_of_range(Parameter::InitialRemainder, bit_count));
  }
  if !fits(final_xor_value, bit_count) {
    return Err(CrcError::out_of_range(Parameter::FinalXorValue, bit_count));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::string::ToString;

  use super::*;

  #[test]
  fn accepts_crc12_umts() {
    let p = CrcParams::new(12, 0x80F, 0, 0, false, true, 0xDAF).unwrap();
    assert_eq!(p.bit_count(), 12);
    assert_eq!(p.truncated_polynomial(), 0x80F);
    assert_eq!(p.initial_remainder(), 0);
    assert_eq!(p.final_xor_value(), 0);
    assert!(!p.reflect_input());
    assert!(p.reflect_remainder());
    assert_eq!(p.check_value(), 0xDAF);
    assert_eq!(p.name(), None);
    assert!(p.verify().is_ok());
  }

  #[test]
  fn rejects_bad_bit_counts() {
    for bits in [0u8, 65, 200] {
      assert_eq!(
        CrcParams::new(bits, 0, 0, 0, false, false, 0),
        Err(CrcError::out_of_range(Parameter::BitCount, bits))
      );
    }
  }

  #[test]
  fn rejects_values_wider_than_bit_count() {
    assert_eq!(
      CrcParams::new(12, 0x180F, 0, 0, false, true, 0),
      Err(CrcError::out_of_range(Parameter::TruncatedPolynomial, 12))
    );
    assert_eq!(
      CrcParams::new(12, 0x80F, 0x1000, 0, false, true, 0),
      Err(CrcError::out_of_range(Parameter::InitialRemainder, 12))
    );
    assert_eq!(
      CrcParams::new(12, 0x80F, 0, 0xF000, false, true, 0),
      Err(CrcError::out_of_range(Parameter::FinalXorValue, 12))
    );
    assert_eq!(
      CrcParams::new(12, 0x80F, 0, 0, false, true, 0x1DAF),
      Err(CrcError::out_of_range(Parameter::CheckValue, 12))
    );
  }

  #[test]
  fn full_width_values_are_accepted() {
    assert!(CrcParams::new(64, u64::MAX, u64::MAX, u64::MAX, true, true, 0).is_ok());
  }

  #[test]
  fn verify_reports_mismatch() {
    let wrong = CrcParams::new(12, 0x80F, 0, 0, false, false, 0xDAF).unwrap();
    assert_eq!(
      wrong.verify(),
      Err(CrcError::CheckValueMismatch {
        expected: 0xDAF,
        computed: 0xF5B
      })
    );
  }

  #[test]
  fn polynomial_reflected() {
    let crc32 = CrcParams::new(32, 0x04C1_1DB7, !0 >> 32, !0 >> 32, true, true, 0xCBF4_3926).unwrap();
    assert_eq!(crc32.polynomial_reflected(), 0xEDB8_8320);
  }

  #[test]
  fn display_uses_catalogue_format() {
    let p = CrcParams::new(12, 0x80F, 0, 0, false, true, 0xDAF)
      .unwrap()
      .named("CRC-12/UMTS");
    assert_eq!(
      p.to_string(),
      "width=12 poly=0x80f init=0x000 refin=false refout=true xorout=0x000 check=0xdaf name=\"CRC-12/UMTS\""
    );
  }
}
