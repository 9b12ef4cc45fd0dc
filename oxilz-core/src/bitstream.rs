//! MSB-first bit stream codec.
//!
//! This module provides `BitReader` and `BitWriter` for packing and
//! unpacking arbitrary-width fields (up to 32 bits) against a byte-oriented
//! backing store. Both formats handled by OxiLZ pack fields MSB-first
//! (Most Significant Bit first): the first bit written lands in the high
//! bit of the first output byte.
//!
//! # Example
//!
//! ```
//! use oxilz_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b1100, 4);
//! let data = writer.into_vec();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{OxiLzError, Result};

/// MSB-first bit reader over an in-memory byte slice.
///
/// The reader maintains a small accumulator so fields can cross byte
/// boundaries. End-of-input before the first bit of a `read_bits` call is
/// indistinguishable, at this layer, from end-of-input mid-field — both
/// return [`OxiLzError::UnexpectedEof`]. Callers that need to stop cleanly
/// at the end of a stream check [`BitReader::has_remaining`] before
/// starting a field.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Next byte to pull into the accumulator.
    byte_pos: usize,
    /// Bit accumulator (MSB-first).
    buffer: u64,
    /// Number of valid bits in the accumulator.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Create a new `BitReader` over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Number of bits still available, counting accumulator contents.
    pub fn remaining_bits(&self) -> usize {
        (self.data.len() - self.byte_pos) * 8 + self.bits_in_buffer as usize
    }

    /// Check whether any bits remain.
    pub fn has_remaining(&self) -> bool {
        self.bits_in_buffer > 0 || self.byte_pos < self.data.len()
    }

    /// Ensure at least `count` bits are available in the accumulator.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;

            // Append on the LSB side; valid bits stay left-justified
            // relative to bits_in_buffer.
            self.buffer = (self.buffer << 8) | (byte as u64);
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            let missing_bits = (count - self.bits_in_buffer) as usize;
            return Err(OxiLzError::unexpected_eof(missing_bits.div_ceil(8)));
        }

        Ok(())
    }

    /// Read up to 32 bits from the stream (MSB-first).
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (0-32)
    ///
    /// # Returns
    ///
    /// The bits read as a u32, first bit read in the most significant
    /// position of the `count`-bit field.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        if count == 0 {
            return Ok(0);
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u64 << count).wrapping_sub(1);
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Read a 16-bit field, MSB-first.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.read_bits(16)? as u16)
    }

    /// Read a 32-bit field, MSB-first.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_bits(32)
    }
}

/// MSB-first bit writer backed by a `Vec<u8>`.
///
/// Bits accumulate most-significant-first; a byte is emitted the moment 8
/// bits are pending, so the accumulator never holds more than 7 bits
/// between calls. Call [`BitWriter::flush`] (or [`BitWriter::into_vec`],
/// which flushes) exactly once after the last write or trailing bits are
/// lost.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit accumulator (MSB-first).
    buffer: u64,
    /// Number of pending bits in the accumulator.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl BitWriter {
    /// Create a new empty `BitWriter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `BitWriter` with pre-allocated output capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Number of bits pending in the accumulator (always 0-7 between calls).
    pub fn pending_bits(&self) -> u8 {
        self.bits_in_buffer
    }

    /// Write the low `count` bits of `value`, most significant bit first.
    ///
    /// `count` may be 0-32; extra high bits of `value` are masked off.
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        if count == 0 {
            return;
        }

        let mask = (1u64 << count).wrapping_sub(1);
        self.buffer = (self.buffer << count) | (value as u64 & mask);
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        // Drain completed bytes from the MSB side.
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.write_bits(value as u32, 8);
    }

    /// Write a 16-bit field, MSB-first.
    pub fn write_u16(&mut self, value: u16) {
        self.write_bits(value as u32, 16);
    }

    /// Write a 32-bit field, MSB-first.
    pub fn write_u32(&mut self, value: u32) {
        self.write_bits(value, 32);
    }

    /// Zero-fill the remainder of the current byte and emit it.
    ///
    /// Emits nothing when no bits are pending, so calling twice is safe.
    pub fn flush(&mut self) {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            let byte = (self.buffer << padding) as u8;
            self.output.push(byte);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Flush and return the packed bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}
