//! Differential fuzzing of the engines against the bitwise reference.
//!
//! Arbitrary parameter sets drive the runtime engine; the catalogue engines
//! are checked against their own parameter bundles.

#![no_main]

use arbitrary::Arbitrary;
use crc::{CrcBasic, bits::mask, catalog, reference::crc_bitwise};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  bits: u8,
  poly: u64,
  init: u64,
  xor: u64,
  refin: bool,
  refout: bool,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  test_basic_differential(&input);
  test_catalog_differential(&input.data);
});

fn test_basic_differential(input: &Input) {
  let bits = input.bits % 64 + 1;
  let m = mask(bits);
  let (poly, init, xor) = (input.poly & m, input.init & m, input.xor & m);

  let reference = crc_bitwise(bits, poly, init, xor, input.refin, input.refout, &input.data);

  let Ok(mut crc) = CrcBasic::<u64>::new(bits, poly, init, xor, input.refin, input.refout) else {
    panic!("valid parameters rejected: bits={bits} poly={poly:#x} init={init:#x} xor={xor:#x}");
  };
  crc.process_bytes(&input.data);
  assert_eq!(
    crc.checksum(),
    reference,
    "runtime engine mismatch: bits={bits} poly={poly:#x} init={init:#x} xor={xor:#x} refin={} refout={} len={}",
    input.refin,
    input.refout,
    input.data.len()
  );

  // Out-of-range values must be rejected, never truncated.
  if bits < 64 && input.poly > m {
    assert!(CrcBasic::<u64>::new(bits, input.poly, init, xor, input.refin, input.refout).is_err());
  }
}

fn test_catalog_differential(data: &[u8]) {
  macro_rules! check {
    ($($alias:ident => $params:ident),* $(,)?) => {
      $(
        let ours = u64::from(catalog::$alias::checksum_of(data));
        let reference = catalog::$params.checksum(data);
        assert_eq!(
          ours, reference,
          "{} differential mismatch: ours={:#x}, reference={:#x}, len={}",
          stringify!($alias), ours, reference, data.len()
        );
      )*
    };
  }

  check!(
    Crc8 => CRC_8_SMBUS,
    Crc12Umts => CRC_12_UMTS,
    Crc16MaximDow => CRC_16_MAXIM_DOW,
    Crc16CcittFalse => CRC_16_IBM_3740,
    Crc24OpenPgp => CRC_24_OPENPGP,
    Crc32 => CRC_32_ISO_HDLC,
    Crc40Gsm => CRC_40_GSM,
    Crc64Ecma => CRC_64_ECMA_182,
    Crc64Xz => CRC_64_XZ,
  );
}
