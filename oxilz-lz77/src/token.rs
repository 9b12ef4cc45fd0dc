//! Container header and token framing for the classic format.
//!
//! Both records are fixed-width and bit-packed MSB-first:
//!
//! ```text
//! header: [u16 window_size][u8 lookahead_size][u32 original_size]
//! token:  [u16 offset][u8 length][u8 next]
//! ```
//!
//! An `offset` of 0 means "no match, literal only"; the final token of a
//! stream may carry `length == 0`.

use oxilz_core::bitstream::{BitReader, BitWriter};
use oxilz_core::error::{OxiLzError, Result};
use oxilz_core::MAX_BUFFER_SIZE;

/// Classic container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzHeader {
    /// Search buffer (sliding window) size in bytes, 1-65535.
    pub window_size: u16,
    /// Lookahead buffer size in bytes, 1-255.
    pub lookahead_size: u8,
    /// Uncompressed byte count.
    pub original_size: u32,
}

impl LzHeader {
    /// Number of bits a packed header occupies.
    pub const BITS: usize = 56;

    /// Write the header, MSB-first.
    pub fn write(&self, writer: &mut BitWriter) {
        writer.write_u16(self.window_size);
        writer.write_u8(self.lookahead_size);
        writer.write_u32(self.original_size);
    }

    /// Read raw header fields without validating them.
    ///
    /// Use [`LzHeader::validate`] before trusting the result; the split
    /// lets the inspector dump malformed headers instead of aborting.
    pub fn read(reader: &mut BitReader<'_>) -> Result<Self> {
        Ok(Self {
            window_size: reader.read_u16()?,
            lookahead_size: reader.read_u8()?,
            original_size: reader.read_u32()?,
        })
    }

    /// Check the header field ranges.
    ///
    /// Zero in either buffer-size field marks a malformed or non-classic
    /// file. `original_size` of zero is legal (the empty stream); it is
    /// only bounded by the whole-buffer guard.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(OxiLzError::invalid_header("zero search buffer size"));
        }
        if self.lookahead_size == 0 {
            return Err(OxiLzError::invalid_header("zero lookahead size"));
        }
        if self.original_size as usize > MAX_BUFFER_SIZE {
            return Err(OxiLzError::buffer_too_large(
                self.original_size as usize,
                MAX_BUFFER_SIZE,
            ));
        }
        Ok(())
    }
}

/// One unit of classic-format output: a back-reference plus one trailing
/// literal byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzToken {
    /// Back-reference distance into the already-decoded output; 0 means
    /// the token carries only the literal.
    pub offset: u16,
    /// Number of bytes to copy from `offset` positions back.
    pub length: u8,
    /// Literal byte appended after the copy.
    pub next: u8,
}

impl LzToken {
    /// Number of bits a packed token occupies.
    pub const BITS: usize = 32;

    /// Token carrying a single literal byte.
    pub fn literal(next: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            next,
        }
    }

    /// Write the token, MSB-first.
    pub fn write(&self, writer: &mut BitWriter) {
        writer.write_u16(self.offset);
        writer.write_u8(self.length);
        writer.write_u8(self.next);
    }

    /// Read one token.
    pub fn read(reader: &mut BitReader<'_>) -> Result<Self> {
        Ok(Self {
            offset: reader.read_u16()?,
            length: reader.read_u8()?,
            next: reader.read_u8()?,
        })
    }
}
