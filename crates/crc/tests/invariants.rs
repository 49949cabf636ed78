use crc::{
  CrcBasic, CrcOptimal, CrcParams, Word,
  bits::{mask, reflect},
  catalog::*,
  crc_optimal,
};

const CHECK_INPUT: &[u8] = b"123456789";

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Bits of `byte` in the order the engine consumes them.
fn bits_of(byte: u8, reflect_input: bool) -> impl Iterator<Item = bool> {
  (0..8u8).map(move |i| {
    let pos = if reflect_input { i } else { 7 - i };
    (byte >> pos) & 1 != 0
  })
}

/// Checksum of the empty message: the initial remainder with the output rules applied.
fn empty_checksum(p: &CrcParams) -> u64 {
  let init = p.initial_remainder();
  let r = if p.reflect_remainder() {
    reflect(init, p.bit_count())
  } else {
    init
  };
  (r ^ p.final_xor_value()) & p.mask()
}

const LENGTHS: [usize; 14] = [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 63, 64, 255, 1024];
const SEEDS: [u64; 3] = [1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

/// Run the same battery against the compile-time and runtime engines for each
/// parameter constant.
macro_rules! engines_agree {
  ($($params:ident),* $(,)?) => {
    $({
      type Optimal = crc_optimal!($params);
      let p = $params;
      let name = p.name().unwrap_or("unnamed");
      let basic = || CrcBasic::<Word<{ $params.bit_count() }>>::from_params(&p).unwrap();
      let wide = || CrcBasic::<u64>::from_params(&p).unwrap();

      // Check value on every engine.
      assert_eq!(u64::from(Optimal::checksum_of(CHECK_INPUT)), p.check_value(), "{name} optimal");
      let mut b = basic();
      b.process_bytes(CHECK_INPUT);
      assert_eq!(u64::from(b.checksum()), p.check_value(), "{name} basic");
      let mut w = wide();
      w.process_bytes(CHECK_INPUT);
      assert_eq!(w.checksum(), p.check_value(), "{name} basic/u64");

      // Empty input.
      assert_eq!(u64::from(Optimal::new().checksum()), empty_checksum(&p), "{name} empty optimal");
      assert_eq!(u64::from(basic().checksum()), empty_checksum(&p), "{name} empty basic");

      for &len in &LENGTHS {
        for &seed in &SEEDS {
          let data = gen_bytes(len, seed ^ len as u64);
          let expected = p.checksum(&data);

          let mut o = Optimal::new();
          let mut b = basic();
          for chunk in data.chunks(7) {
            o.process_bytes(chunk);
            b.process_bytes(chunk);
            assert_eq!(
              u64::from(o.interim_remainder()),
              u64::from(b.interim_remainder()),
              "{name} interim len={len}"
            );
          }
          assert_eq!(u64::from(o.checksum()), expected, "{name} optimal len={len}");
          assert_eq!(u64::from(b.checksum()), expected, "{name} basic len={len}");
        }
      }
    })*
  };
}

#[test]
fn catalog_engines_agree() {
  engines_agree!(
    CRC_3_GSM,
    CRC_3_ROHC,
    CRC_4_G_704,
    CRC_4_INTERLAKEN,
    CRC_5_USB,
    CRC_5_EPC_C1G2,
    CRC_6_G_704,
    CRC_7_MMC,
    CRC_8_SMBUS,
    CRC_8_MAXIM_DOW,
    CRC_8_AUTOSAR,
    CRC_8_ROHC,
    CRC_10_ATM,
    CRC_11_FLEXRAY,
    CRC_12_UMTS,
    CRC_12_DECT,
    CRC_15_CAN,
    CRC_16_ARC,
    CRC_16_MAXIM_DOW,
    CRC_16_USB,
    CRC_16_MODBUS,
    CRC_16_IBM_3740,
    CRC_16_XMODEM,
    CRC_16_KERMIT,
    CRC_16_IBM_SDLC,
    CRC_16_GENIBUS,
    CRC_16_DNP,
    CRC_16_TMS37157,
    CRC_17_CAN_FD,
    CRC_21_CAN_FD,
    CRC_24_OPENPGP,
    CRC_24_BLE,
    CRC_31_PHILIPS,
    CRC_32_ISO_HDLC,
    CRC_32_BZIP2,
    CRC_32_ISCSI,
    CRC_32_MPEG_2,
    CRC_32_CKSUM,
    CRC_40_GSM,
    CRC_64_ECMA_182,
    CRC_64_XZ,
    CRC_64_GO_ISO,
    CRC_64_WE,
    CRC_64_NVME,
  );
}

// Parameter sets outside the catalogue: extreme widths and asymmetric
// reflection in both directions.
const fn params(bits: u8, poly: u64, init: u64, xor: u64, refin: bool, refout: bool, check: u64) -> CrcParams {
  match CrcParams::new(bits, poly, init, xor, refin, refout, check) {
    Ok(p) => p,
    Err(_) => panic!("invalid test parameters"),
  }
}

const WIDTH_1_PARITY: CrcParams = params(1, 0x1, 0x0, 0x0, false, false, 0x1);
const WIDTH_2_MIXED: CrcParams = params(2, 0x3, 0x1, 0x2, true, false, 0x2);
const WIDTH_9_MIXED: CrcParams = params(9, 0x119, 0x1AB, 0x0FF, true, false, 0x143);
const WIDTH_63_MIXED: CrcParams = params(
  63,
  0x0000_0000_0000_0003,
  0x7FFF_FFFF_FFFF_FFFF,
  0x1234_5678_9ABC_DEF0,
  false,
  true,
  0x50ED_1B55_E7A1_8BC5,
);

#[test]
fn uncatalogued_engines_agree() {
  for p in [WIDTH_1_PARITY, WIDTH_2_MIXED, WIDTH_9_MIXED, WIDTH_63_MIXED] {
    assert_eq!(p.verify(), Ok(()), "{p}");
  }
  engines_agree!(WIDTH_1_PARITY, WIDTH_2_MIXED, WIDTH_9_MIXED, WIDTH_63_MIXED);
}

#[test]
fn width_one_is_parity() {
  type Parity = crc_optimal!(WIDTH_1_PARITY);
  for data in [&b""[..], b"\x01", b"\x03", b"\xFF\x01", CHECK_INPUT] {
    let ones: u32 = data.iter().map(|b| b.count_ones()).sum();
    assert_eq!(u32::from(Parity::checksum_of(data)), ones % 2);
  }
}

#[test]
fn bit_at_a_time_equals_byte_at_a_time() {
  for p in CATALOG {
    let data = gen_bytes(40, u64::from(p.bit_count()));
    let mut by_bytes = CrcBasic::<u64>::from_params(p).unwrap();
    let mut by_bits = CrcBasic::<u64>::from_params(p).unwrap();
    for &byte in &data {
      by_bytes.process_byte(byte);
      for bit in bits_of(byte, p.reflect_input()) {
        by_bits.process_bit(bit);
      }
      assert_eq!(by_bits.interim_remainder(), by_bytes.interim_remainder(), "{p}");
    }
    assert_eq!(by_bits.checksum(), by_bytes.checksum(), "{p}");
  }
}

#[test]
fn optimal_bit_at_a_time_equals_byte_at_a_time() {
  let data = gen_bytes(64, 99);

  let mut umts = Crc12Umts::new();
  let mut crc32 = Crc32::new();
  let mut gsm = <crc_optimal!(CRC_3_GSM)>::new();
  for &byte in &data {
    bits_of(byte, false).for_each(|bit| umts.process_bit(bit));
    bits_of(byte, true).for_each(|bit| crc32.process_bit(bit));
    bits_of(byte, false).for_each(|bit| gsm.process_bit(bit));
  }
  assert_eq!(umts.checksum(), Crc12Umts::checksum_of(&data));
  assert_eq!(crc32.checksum(), Crc32::checksum_of(&data));
  assert_eq!(gsm.checksum(), <crc_optimal!(CRC_3_GSM)>::checksum_of(&data));
}

#[test]
fn umts_fed_one_bit_at_a_time() {
  let mut by_bits = CrcBasic::<u16>::from_params(&CRC_12_UMTS).unwrap();
  let mut by_bytes = CrcBasic::<u16>::from_params(&CRC_12_UMTS).unwrap();
  for &byte in CHECK_INPUT {
    for i in (0..8).rev() {
      by_bits.process_bits((byte >> i) & 1, 1).unwrap();
    }
    by_bytes.process_byte(byte);
  }
  assert_eq!(by_bits.checksum(), 0xDAF);
  assert_eq!(by_bytes.checksum(), 0xDAF);
}

#[test]
fn concatenation() {
  for p in CATALOG {
    let data = gen_bytes(100, 3);
    for split in [0usize, 1, 50, 99, 100] {
      let (x, y) = data.split_at(split);
      let mut crc = CrcBasic::<u64>::from_params(p).unwrap();
      crc.process_bytes(x);
      crc.process_bytes(y);
      assert_eq!(crc.checksum(), p.checksum(&data), "{p} split={split}");
    }
  }

  let data = gen_bytes(1000, 11);
  for split in [0usize, 1, 333, 999, 1000] {
    let (x, y) = data.split_at(split);
    let mut crc = Crc64Nvme::new();
    crc.process_bytes(x);
    crc.process_bytes(y);
    assert_eq!(crc.checksum(), Crc64Nvme::checksum_of(&data));
  }
}

#[test]
fn reset_is_indistinguishable_from_fresh() {
  let data = gen_bytes(77, 5);
  for p in CATALOG {
    let mut crc = CrcBasic::<u64>::from_params(p).unwrap();
    crc.process_bytes(b"noise before reset");
    crc.reset();
    assert_eq!(crc, CrcBasic::<u64>::from_params(p).unwrap(), "{p}");
    crc.process_bytes(&data);
    assert_eq!(crc.checksum(), p.checksum(&data), "{p}");
  }

  let mut crc = Crc16Usb::new();
  crc.process_bytes(b"noise");
  crc.reset();
  assert_eq!(crc, Crc16Usb::default());
}

#[test]
fn checksum_is_idempotent() {
  let mut basic = CrcBasic::<u32>::from_params(&CRC_32_ISCSI).unwrap();
  let mut optimal = Crc32C::new();
  basic.process_bytes(b"12345");
  optimal.process_bytes(b"12345");
  assert_eq!(basic.checksum(), basic.checksum());
  assert_eq!(optimal.checksum(), optimal.checksum());
  basic.process_bytes(b"6789");
  optimal.process_bytes(b"6789");
  assert_eq!(basic.checksum(), 0xE306_9283);
  assert_eq!(optimal.checksum(), 0xE306_9283);
}

#[test]
fn reset_with_agrees_between_engines() {
  let mut basic = CrcBasic::<u16>::from_params(&CRC_16_KERMIT).unwrap();
  let mut optimal = Crc16Kermit::new();
  for init in [0x0000u16, 0x1234, 0xFFFF] {
    basic.reset_with(init);
    optimal.reset_with(init);
    assert_eq!(basic.interim_remainder(), optimal.interim_remainder());
    basic.process_bytes(CHECK_INPUT);
    optimal.process_bytes(CHECK_INPUT);
    assert_eq!(basic.checksum(), optimal.checksum(), "init={init:#x}");
  }
}

#[test]
fn tables_start_at_zero_and_differ_by_orientation() {
  assert_eq!(Crc32::TABLE[0], 0);
  assert_eq!(Crc32Bzip2::TABLE[0], 0);
  assert_ne!(Crc32::TABLE[1], Crc32Bzip2::TABLE[1]);
  assert_eq!(Crc32Bzip2::TABLE[1], 0x04C1_1DB7);
  assert_eq!(Crc32::TABLE[128], reflect(0x04C1_1DB7, 32) as u32);
  for &entry in &<crc_optimal!(CRC_5_USB)>::TABLE {
    assert_eq!(u64::from(entry) & !mask(5), 0);
  }
}

#[test]
fn explicit_generic_parameters() {
  type Ccitt = CrcOptimal<u16, 16, 0x1021, 0xFFFF, 0x0000, false, false>;
  assert_eq!(Ccitt::checksum_of(CHECK_INPUT), 0x29B1);
  assert_eq!(Ccitt::checksum_of(CHECK_INPUT), Crc16CcittFalse::checksum_of(CHECK_INPUT));
}
