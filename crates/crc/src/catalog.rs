//! Well-known CRC parameter bundles.
//!
//! Names and check values follow the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/all.htm).
//! Every entry is self-tested at compile time: a wrong polynomial or check
//! value fails the build.
//!
//! # Lookup
//!
//! ```
//! use crc::catalog;
//!
//! let crc32 = catalog::find("crc-32").unwrap();
//! assert_eq!(crc32.name(), Some("CRC-32/ISO-HDLC"));
//! assert_eq!(crc32.checksum(b"123456789"), 0xCBF4_3926);
//! ```
//!
//! # Engine Aliases
//!
//! | Alias | Parameters | Register |
//! |-------|------------|----------|
//! | [`Crc8`] | CRC-8/SMBUS | `u8` |
//! | [`Crc12Umts`] | CRC-12/UMTS | `u16` |
//! | [`Crc16Arc`] | CRC-16/ARC | `u16` |
//! | [`Crc16CcittFalse`] | CRC-16/IBM-3740 | `u16` |
//! | [`Crc16MaximDow`] | CRC-16/MAXIM-DOW | `u16` |
//! | [`Crc16Usb`] | CRC-16/USB | `u16` |
//! | [`Crc16Xmodem`] | CRC-16/XMODEM | `u16` |
//! | [`Crc24OpenPgp`] | CRC-24/OPENPGP | `u32` |
//! | [`Crc32`] | CRC-32/ISO-HDLC | `u32` |
//! | [`Crc32C`] | CRC-32/ISCSI | `u32` |
//! | [`Crc64Ecma`] | CRC-64/ECMA-182 | `u64` |
//! | [`Crc64Xz`] | CRC-64/XZ | `u64` |
//! | [`Crc64Nvme`] | CRC-64/NVME | `u64` |

use crate::params::CrcParams;

/// Build a catalogue constant; an invalid entry is a compile error.
#[allow(clippy::too_many_arguments)]
const fn entry(
  name: &'static str,
  width: u8,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
  check: u64,
) -> CrcParams {
  match CrcParams::new(width, poly, init, xorout, refin, refout, check) {
    Ok(params) => params.named(name),
    Err(_) => panic!("invalid catalogue entry"),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widths 3..=15
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_3_GSM: CrcParams = entry("CRC-3/GSM", 3, 0x3, 0x0, false, false, 0x7, 0x4);
pub const CRC_3_ROHC: CrcParams = entry("CRC-3/ROHC", 3, 0x3, 0x7, true, true, 0x0, 0x6);
pub const CRC_4_G_704: CrcParams = entry("CRC-4/G-704", 4, 0x3, 0x0, true, true, 0x0, 0x7);
pub const CRC_4_INTERLAKEN: CrcParams = entry("CRC-4/INTERLAKEN", 4, 0x3, 0xF, false, false, 0xF, 0xB);
pub const CRC_5_USB: CrcParams = entry("CRC-5/USB", 5, 0x05, 0x1F, true, true, 0x1F, 0x19);
pub const CRC_5_EPC_C1G2: CrcParams = entry("CRC-5/EPC-C1G2", 5, 0x09, 0x09, false, false, 0x00, 0x00);
pub const CRC_6_G_704: CrcParams = entry("CRC-6/G-704", 6, 0x03, 0x00, true, true, 0x00, 0x06);
pub const CRC_7_MMC: CrcParams = entry("CRC-7/MMC", 7, 0x09, 0x00, false, false, 0x00, 0x75);

pub const CRC_8_SMBUS: CrcParams = entry("CRC-8/SMBUS", 8, 0x07, 0x00, false, false, 0x00, 0xF4);
pub const CRC_8_MAXIM_DOW: CrcParams = entry("CRC-8/MAXIM-DOW", 8, 0x31, 0x00, true, true, 0x00, 0xA1);
pub const CRC_8_AUTOSAR: CrcParams = entry("CRC-8/AUTOSAR", 8, 0x2F, 0xFF, false, false, 0xFF, 0xDF);
pub const CRC_8_ROHC: CrcParams = entry("CRC-8/ROHC", 8, 0x07, 0xFF, true, true, 0x00, 0xD0);

pub const CRC_10_ATM: CrcParams = entry("CRC-10/ATM", 10, 0x233, 0x000, false, false, 0x000, 0x199);
pub const CRC_11_FLEXRAY: CrcParams = entry("CRC-11/FLEXRAY", 11, 0x385, 0x01A, false, false, 0x000, 0x5A3);
/// Unreflected input with a reflected remainder.
pub const CRC_12_UMTS: CrcParams = entry("CRC-12/UMTS", 12, 0x80F, 0x000, false, true, 0x000, 0xDAF);
pub const CRC_12_DECT: CrcParams = entry("CRC-12/DECT", 12, 0x80F, 0x000, false, false, 0x000, 0xF5B);
pub const CRC_15_CAN: CrcParams = entry("CRC-15/CAN", 15, 0x4599, 0x0000, false, false, 0x0000, 0x059E);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_16_ARC: CrcParams = entry("CRC-16/ARC", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D);
pub const CRC_16_MAXIM_DOW: CrcParams = entry("CRC-16/MAXIM-DOW", 16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2);
pub const CRC_16_USB: CrcParams = entry("CRC-16/USB", 16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8);
pub const CRC_16_MODBUS: CrcParams = entry("CRC-16/MODBUS", 16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37);
/// Commonly called CRC-16/CCITT-FALSE.
pub const CRC_16_IBM_3740: CrcParams = entry("CRC-16/IBM-3740", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1);
pub const CRC_16_XMODEM: CrcParams = entry("CRC-16/XMODEM", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3);
pub const CRC_16_KERMIT: CrcParams = entry("CRC-16/KERMIT", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189);
/// Also known as X-25 and CRC-16/IBM-SDLC.
pub const CRC_16_IBM_SDLC: CrcParams = entry("CRC-16/IBM-SDLC", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E);
pub const CRC_16_GENIBUS: CrcParams = entry("CRC-16/GENIBUS", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E);
pub const CRC_16_DNP: CrcParams = entry("CRC-16/DNP", 16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82);
pub const CRC_16_TMS37157: CrcParams = entry("CRC-16/TMS37157", 16, 0x1021, 0x89EC, true, true, 0x0000, 0x26B1);

// ─────────────────────────────────────────────────────────────────────────────
// Widths 17..=31
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_17_CAN_FD: CrcParams = entry("CRC-17/CAN-FD", 17, 0x1_685B, 0x0, false, false, 0x0, 0x0_4F03);
pub const CRC_21_CAN_FD: CrcParams = entry("CRC-21/CAN-FD", 21, 0x10_2899, 0x0, false, false, 0x0, 0x0E_D841);
pub const CRC_24_OPENPGP: CrcParams = entry("CRC-24/OPENPGP", 24, 0x86_4CFB, 0xB7_04CE, false, false, 0x0, 0x21_CF02);
pub const CRC_24_BLE: CrcParams = entry("CRC-24/BLE", 24, 0x00_065B, 0x55_5555, true, true, 0x0, 0xC2_5A56);
pub const CRC_31_PHILIPS: CrcParams = entry(
  "CRC-31/PHILIPS",
  31,
  0x04C1_1DB7,
  0x7FFF_FFFF,
  false,
  false,
  0x7FFF_FFFF,
  0x0CE9_E46C,
);

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

/// The Ethernet / zlib / PNG CRC, commonly just "CRC-32".
pub const CRC_32_ISO_HDLC: CrcParams = entry(
  "CRC-32/ISO-HDLC",
  32,
  0x04C1_1DB7,
  0xFFFF_FFFF,
  true,
  true,
  0xFFFF_FFFF,
  0xCBF4_3926,
);
pub const CRC_32_BZIP2: CrcParams = entry(
  "CRC-32/BZIP2",
  32,
  0x04C1_1DB7,
  0xFFFF_FFFF,
  false,
  false,
  0xFFFF_FFFF,
  0xFC89_1918,
);
/// Castagnoli, commonly "CRC-32C".
pub const CRC_32_ISCSI: CrcParams = entry(
  "CRC-32/ISCSI",
  32,
  0x1EDC_6F41,
  0xFFFF_FFFF,
  true,
  true,
  0xFFFF_FFFF,
  0xE306_9283,
);
pub const CRC_32_MPEG_2: CrcParams = entry(
  "CRC-32/MPEG-2",
  32,
  0x04C1_1DB7,
  0xFFFF_FFFF,
  false,
  false,
  0x0000_0000,
  0x0376_E6E7,
);
pub const CRC_32_CKSUM: CrcParams = entry(
  "CRC-32/CKSUM",
  32,
  0x04C1_1DB7,
  0x0000_0000,
  false,
  false,
  0xFFFF_FFFF,
  0x765E_7680,
);

// ─────────────────────────────────────────────────────────────────────────────
// Widths 33..=64
// ─────────────────────────────────────────────────────────────────────────────

pub const CRC_40_GSM: CrcParams = entry(
  "CRC-40/GSM",
  40,
  0x00_0482_0009,
  0x00_0000_0000,
  false,
  false,
  0xFF_FFFF_FFFF,
  0xD4_164F_C646,
);
pub const CRC_64_ECMA_182: CrcParams = entry(
  "CRC-64/ECMA-182",
  64,
  0x42F0_E1EB_A9EA_3693,
  0x0000_0000_0000_0000,
  false,
  false,
  0x0000_0000_0000_0000,
  0x6C40_DF5F_0B49_7347,
);
pub const CRC_64_XZ: CrcParams = entry(
  "CRC-64/XZ",
  64,
  0x42F0_E1EB_A9EA_3693,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
  true,
  0xFFFF_FFFF_FFFF_FFFF,
  0x995D_C9BB_DF19_39FA,
);
pub const CRC_64_GO_ISO: CrcParams = entry(
  "CRC-64/GO-ISO",
  64,
  0x0000_0000_0000_001B,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
  true,
  0xFFFF_FFFF_FFFF_FFFF,
  0xB909_56C7_75A4_1001,
);
pub const CRC_64_WE: CrcParams = entry(
  "CRC-64/WE",
  64,
  0x42F0_E1EB_A9EA_3693,
  0xFFFF_FFFF_FFFF_FFFF,
  false,
  false,
  0xFFFF_FFFF_FFFF_FFFF,
  0x62EC_59E3_F1A4_F00A,
);
pub const CRC_64_NVME: CrcParams = entry(
  "CRC-64/NVME",
  64,
  0xAD93_D235_94C9_3659,
  0xFFFF_FFFF_FFFF_FFFF,
  true,
  true,
  0xFFFF_FFFF_FFFF_FFFF,
  0xAE8B_1486_0A79_9888,
);

/// Every catalogue entry, ordered by width.
pub const CATALOG: &[CrcParams] = &[
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
];

/// Common names that differ from the catalogue's canonical ones.
pub const ALIASES: &[(&str, CrcParams)] = &[
  ("CRC-8", CRC_8_SMBUS),
  ("CRC-8/MAXIM", CRC_8_MAXIM_DOW),
  ("DOW-CRC", CRC_8_MAXIM_DOW),
  ("CRC-16", CRC_16_ARC),
  ("ARC", CRC_16_ARC),
  ("CRC-16/IBM", CRC_16_ARC),
  ("CRC-16/LHA", CRC_16_ARC),
  ("CRC-16/MAXIM", CRC_16_MAXIM_DOW),
  ("CRC-16/CCITT-FALSE", CRC_16_IBM_3740),
  ("CRC-16/AUTOSAR", CRC_16_IBM_3740),
  ("CRC-16/ACORN", CRC_16_XMODEM),
  ("CRC-16/LTE", CRC_16_XMODEM),
  ("XMODEM", CRC_16_XMODEM),
  ("ZMODEM", CRC_16_XMODEM),
  ("CRC-16/CCITT", CRC_16_KERMIT),
  ("CRC-16/CCITT-TRUE", CRC_16_KERMIT),
  ("KERMIT", CRC_16_KERMIT),
  ("CRC-16/X-25", CRC_16_IBM_SDLC),
  ("CRC-16/ISO-HDLC", CRC_16_IBM_SDLC),
  ("X-25", CRC_16_IBM_SDLC),
  ("MODBUS", CRC_16_MODBUS),
  ("CRC-24", CRC_24_OPENPGP),
  ("CRC-32", CRC_32_ISO_HDLC),
  ("CRC-32/ADCCP", CRC_32_ISO_HDLC),
  ("CRC-32/V-42", CRC_32_ISO_HDLC),
  ("PKZIP", CRC_32_ISO_HDLC),
  ("CRC-32/AAL5", CRC_32_BZIP2),
  ("CRC-32C", CRC_32_ISCSI),
  ("CRC-32/CASTAGNOLI", CRC_32_ISCSI),
  ("CRC-32/POSIX", CRC_32_CKSUM),
  ("CKSUM", CRC_32_CKSUM),
  ("CRC-64", CRC_64_ECMA_182),
  ("CRC-64/ECMA", CRC_64_ECMA_182),
  ("CRC-64/GO-ECMA", CRC_64_XZ),
];

/// Look up a bundle by canonical name or common alias, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static CrcParams> {
  CATALOG
    .iter()
    .find(|p| p.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
    .or_else(|| {
      ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, params)| params)
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const _: () = {
  let mut rest = CATALOG;
  while let [params, tail @ ..] = rest {
    assert!(params.verify().is_ok(), "catalogue check value mismatch");
    rest = tail;
  }
};

// ─────────────────────────────────────────────────────────────────────────────
// Engine Aliases
// ─────────────────────────────────────────────────────────────────────────────

pub type Crc8 = crate::crc_optimal!(CRC_8_SMBUS);
pub type Crc8Maxim = crate::crc_optimal!(CRC_8_MAXIM_DOW);
pub type Crc12Umts = crate::crc_optimal!(CRC_12_UMTS);
pub type Crc16Arc = crate::crc_optimal!(CRC_16_ARC);
pub type Crc16CcittFalse = crate::crc_optimal!(CRC_16_IBM_3740);
pub type Crc16Kermit = crate::crc_optimal!(CRC_16_KERMIT);
pub type Crc16MaximDow = crate::crc_optimal!(CRC_16_MAXIM_DOW);
pub type Crc16Modbus = crate::crc_optimal!(CRC_16_MODBUS);
pub type Crc16Usb = crate::crc_optimal!(CRC_16_USB);
pub type Crc16Xmodem = crate::crc_optimal!(CRC_16_XMODEM);
pub type Crc16IbmSdlc = crate::crc_optimal!(CRC_16_IBM_SDLC);
pub type Crc24OpenPgp = crate::crc_optimal!(CRC_24_OPENPGP);
pub type Crc32 = crate::crc_optimal!(CRC_32_ISO_HDLC);
pub type Crc32Bzip2 = crate::crc_optimal!(CRC_32_BZIP2);
pub type Crc32C = crate::crc_optimal!(CRC_32_ISCSI);
pub type Crc40Gsm = crate::crc_optimal!(CRC_40_GSM);
pub type Crc64Ecma = crate::crc_optimal!(CRC_64_ECMA_182);
pub type Crc64Xz = crate::crc_optimal!(CRC_64_XZ);
pub type Crc64Nvme = crate::crc_optimal!(CRC_64_NVME);
