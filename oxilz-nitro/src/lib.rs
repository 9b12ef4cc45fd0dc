//! # OxiLZ Nintendo codec
//!
//! Decoder for the Nintendo LZ10/LZ11 container format used in embedded
//! game binary assets, plus an LZ10 encoder.
//!
//! The container is byte-oriented: a 4-byte header (`[u8 type][u24 LE
//! decompressed_size]`) followed by groups of one flag byte and up to 8
//! slots. Each flag bit, MSB-first, marks its slot as a literal byte or a
//! match record; LZ10 records are always 2 bytes, LZ11 records are 2, 3,
//! or 4 bytes depending on an indicator nibble. Back-reference distance
//! is the stored offset plus one.
//!
//! Capability is deliberately asymmetric: LZ11 streams can only be
//! decoded. Do not assume an LZ11 encoder exists.
//!
//! ## Example
//!
//! ```
//! let input = b"hello hello world";
//! let compressed = oxilz_nitro::compress(input).unwrap();
//! let restored = oxilz_nitro::decompress(&compressed).unwrap();
//! assert_eq!(restored, input);
//! ```

pub mod decode;
pub mod encode;
pub mod header;

pub use decode::decompress;
pub use encode::compress;
pub use header::{LZ10_TYPE, LZ11_TYPE, NitroHeader, NitroVariant};
