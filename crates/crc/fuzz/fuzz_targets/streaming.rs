//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary sequences of update calls, including sub-byte
//! `process_bits` runs, produce the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use crc::{
  CrcBasic,
  catalog::{CRC_12_UMTS, Crc12Umts, Crc16Usb, Crc32C, Crc64Nvme},
};
use libfuzzer_sys::fuzz_target;
use traits::Checksum;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Where to split each byte when feeding bits
  bit_split: u8,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  test_streaming::<Crc12Umts>(data, &input.chunk_sizes);
  test_streaming::<Crc16Usb>(data, &input.chunk_sizes);
  test_streaming::<Crc32C>(data, &input.chunk_sizes);
  test_streaming::<Crc64Nvme>(data, &input.chunk_sizes);
  test_split_bits(data, input.bit_split % 9);
});

fn test_streaming<C: Checksum>(data: &[u8], chunk_sizes: &[usize]) {
  let expected = C::checksum(data);

  let mut hasher = C::new();
  let mut rest = data;
  let mut chunk_idx = 0;

  while !rest.is_empty() {
    let chunk_size = match chunk_sizes.get(chunk_idx % chunk_sizes.len().max(1)) {
      Some(&size) => (size % 256).max(1),
      None => 1,
    };
    let (chunk, tail) = rest.split_at(chunk_size.min(rest.len()));
    hasher.update(chunk);
    rest = tail;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch, len={}", data.len());
}

/// CRC-12/UMTS consumes bits MSB-first: feed each byte as two runs.
fn test_split_bits(data: &[u8], cut: u8) {
  let Ok(mut crc) = CrcBasic::<u16>::from_params(&CRC_12_UMTS) else {
    panic!("catalogue parameters rejected");
  };
  let mut optimal = Crc12Umts::new();
  let low = 8 - cut;

  for &byte in data {
    let high_bits = byte.checked_shr(u32::from(low)).unwrap_or(0);
    let low_bits = byte & 0xFFu8.checked_shr(u32::from(cut)).unwrap_or(0);
    assert!(crc.process_bits(high_bits, cut).is_ok());
    assert!(crc.process_bits(low_bits, low).is_ok());
    assert!(optimal.process_bits(high_bits, cut).is_ok());
    assert!(optimal.process_bits(low_bits, low).is_ok());
  }

  assert_eq!(crc.checksum(), Crc12Umts::checksum_of(data));
  assert_eq!(optimal.checksum(), crc.checksum());
}
