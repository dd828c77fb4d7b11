//! Coinamon core - binary codec primitives for Bitcoin-style wire data.
//!
//! This crate converts between raw byte buffers and the numeric/textual
//! representations used throughout the Bitcoin protocol:
//! - Base58 and Base58Check text encoding with checksum verification
//! - Hash function shortcuts (SHA-256, double SHA-256, RIPEMD-160, Hash160)
//! - A sequential binary reader for little-endian integers, CompactSize
//!   values, and reversed-byte-order hash fields

pub mod hash;
pub mod base58;
pub mod reader;

mod error;
pub use error::CoreError;
