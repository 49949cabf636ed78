//! Parameterised CRC computation for every width from 1 to 64 bits.
//!
//! A CRC is described by six computational parameters (the Rocksoft model):
//! width, truncated polynomial, initial remainder, final XOR value, input
//! reflection and remainder reflection. This crate provides two engines over
//! the same model:
//!
//! | Engine | Parameters | Algorithm | Const-evaluable |
//! |--------|------------|-----------|-----------------|
//! | [`CrcBasic`] | runtime values | bit-at-a-time | no |
//! | [`CrcOptimal`] | const generics | 256-entry table, byte-at-a-time | yes |
//!
//! For identical parameters and input the two always produce identical
//! results. Well-known parameter sets live in [`catalog`].
//!
//! # Example
//!
//! ```rust
//! use crc::{CrcBasic, catalog::{self, Crc32}};
//!
//! // Compile-time engine: parameters in the type, table built by the compiler.
//! const CHECK: u32 = Crc32::checksum_of(b"123456789");
//! assert_eq!(CHECK, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut crc = Crc32::new();
//! crc.process_bytes(b"1234");
//! crc.process_bytes(b"56789");
//! assert_eq!(crc.checksum(), CHECK);
//!
//! // Runtime engine: parameters chosen while running.
//! let params = catalog::find("CRC-12/UMTS").ok_or("unknown CRC")?;
//! let mut basic = CrcBasic::<u16>::from_params(params)?;
//! basic.process_bytes(b"123456789");
//! assert_eq!(u64::from(basic.checksum()), params.check_value());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `std` | yes | `std::io::Write` for both engines |
//! | `no-tables` | no | [`CrcOptimal`] processes bytes bitwise instead of through its table |
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crc = { package = "crc-engine", version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;

pub mod basic;
pub mod catalog;
pub mod error;
pub mod optimal;
pub mod params;
pub mod width;

pub use basic::CrcBasic;
pub use common::{bits, reference, tables};
pub use error::{CrcError, Parameter};
pub use optimal::CrcOptimal;
pub use params::CrcParams;
// Re-export traits for convenience
pub use traits::Checksum;
pub use width::{Bits, SelectWord, Width, Word};
