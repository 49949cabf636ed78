//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Bit masking and reflection primitives
//! - Const-fn lookup table generation for all CRC widths
//! - The bit-at-a-time reference both engines are checked against

pub mod bits;
pub mod reference;
pub mod tables;
