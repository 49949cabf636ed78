//! Non-cryptographic checksum traits.
//!
//! - **Zero-cost**: implementors are plain value types, inline-friendly
//! - **Streaming**: incremental updates for data that arrives in pieces
//! - **Idempotent finalisation**: reading the result never disturbs the state

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use crc::{catalog::Crc32, Checksum};
///
/// // One-shot (qualified: the engine's inherent `checksum` reads the register)
/// let crc = <Crc32 as Checksum>::checksum(b"123456789");
///
/// // Streaming
/// let mut hasher = Crc32::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to the state `new()` produces
pub trait Checksum: Clone + Default {
  /// Output size in bytes (the size of [`Output`](Self::Output)).
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// The smallest unsigned integer holding the checksum width: `u16` for a
  /// 12-bit CRC, `u64` for a 40-bit CRC.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the algorithm's initial register value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial register value.
  ///
  /// The value is interpreted the same way as the algorithm's own initial
  /// value, so `with_initial(init)` with the default `init` equals `new()`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte-sum toy checksum used to exercise the provided methods.
  #[derive(Clone, Default)]
  struct Sum {
    state: u32,
    initial: u32,
  }

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 4;
    type Output = u32;

    fn new() -> Self {
      Self::default()
    }

    fn with_initial(initial: u32) -> Self {
      Self { state: initial, initial }
    }

    fn update(&mut self, data: &[u8]) {
      self.state = data.iter().fold(self.state, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> u32 {
      self.state
    }

    fn reset(&mut self) {
      self.state = self.initial;
    }
  }

  #[test]
  fn one_shot_matches_streaming() {
    let mut h = Sum::new();
    h.update(b"ab");
    h.update(b"c");
    assert_eq!(h.finalize(), Sum::checksum(b"abc"));
  }

  #[test]
  fn vectored_matches_contiguous() {
    assert_eq!(Sum::checksum_vectored(&[b"a", b"", b"bc"]), Sum::checksum(b"abc"));
  }

  #[test]
  fn reset_restores_custom_initial() {
    let mut h = Sum::with_initial(7);
    h.update(b"xyz");
    h.reset();
    assert_eq!(h.finalize(), 7);
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut h = Sum::new();
    h.update(b"hello");
    assert_eq!(h.finalize(), h.finalize());
  }
}
