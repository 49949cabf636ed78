//! Error types for CRC parameter validation.
//!
//! Parameter errors surface at construction; a constructed engine never fails
//! except for [`CrcError::BitCountOutOfRange`] on an oversized `process_bits`.

use core::fmt;

/// Identifies a CRC parameter in [`CrcError::ParameterOutOfRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
  /// The CRC width itself.
  BitCount,
  /// The truncated generator polynomial.
  TruncatedPolynomial,
  /// The initial register value.
  InitialRemainder,
  /// The final XOR value.
  FinalXorValue,
  /// The expected check value.
  CheckValue,
}

impl Parameter {
  /// Human-readable parameter name, as used in error messages.
  ///
  /// ```
  /// use crc::Parameter;
  ///
  /// assert_eq!(Parameter::FinalXorValue.as_str(), "final xor value");
  /// ```
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::BitCount => "bit count",
      Self::TruncatedPolynomial => "truncated polynomial",
      Self::InitialRemainder => "initial remainder",
      Self::FinalXorValue => "final xor value",
      Self::CheckValue => "check value",
    }
  }
}

impl fmt::Display for Parameter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// CRC parameter or input error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// A parameter does not fit in `bit_count` bits, or `bit_count` itself is 0
  /// or wider than the register type.
  ParameterOutOfRange {
    /// The offending parameter.
    parameter: Parameter,
    /// The width the parameter was checked against.
    bit_count: u8,
  },
  /// `process_bits` was asked to feed more bits than one call allows.
  BitCountOutOfRange {
    /// Bits requested.
    requested: u8,
    /// Largest count accepted.
    max: u8,
  },
  /// A parameter bundle's self-test produced the wrong check value.
  CheckValueMismatch {
    /// The bundle's declared check value.
    expected: u64,
    /// The CRC actually computed over `"123456789"`.
    computed: u64,
  },
}

impl CrcError {
  #[inline]
  #[must_use]
  pub(crate) const fn out_of_range(parameter: Parameter, bit_count: u8) -> Self {
    Self::ParameterOutOfRange { parameter, bit_count }
  }
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::ParameterOutOfRange {
        parameter: Parameter::BitCount,
        bit_count,
      } => write!(f, "bit count {bit_count} is out of range"),
      Self::ParameterOutOfRange { parameter, bit_count } => {
        write!(f, "{parameter} does not fit in {bit_count} bits")
      }
      Self::BitCountOutOfRange { requested, max } => {
        write!(f, "cannot process {requested} bits at once (max {max})")
      }
      Self::CheckValueMismatch { expected, computed } => {
        write!(f, "check value mismatch: expected {expected:#x}, computed {computed:#x}")
      }
    }
  }
}

impl core::error::Error for CrcError {}
