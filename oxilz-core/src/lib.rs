//! # OxiLZ Core
//!
//! Core components for the OxiLZ compression library.
//!
//! This crate provides the building blocks shared by every OxiLZ codec:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for packed headers and tokens
//! - [`error`]: the central error type and `Result` alias
//!
//! ## Architecture
//!
//! OxiLZ is a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI (oxilz-cli)                                         │
//! │     argument parsing, file I/O, timing                  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Format (oxilz-format)                                   │
//! │     detection, dispatch, diagnostic inspection          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codecs (oxilz-lz77, oxilz-nitro)                        │
//! │     match engines, token/record framing                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     BitReader/BitWriter, errors                         │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{OxiLzError, Result};

/// Upper bound for any compression input or declared decompressed size.
///
/// Both directions fully materialize their buffers in memory, so every
/// entry point checks sizes against this guard before allocating.
pub const MAX_BUFFER_SIZE: usize = 100 * 1024 * 1024;
