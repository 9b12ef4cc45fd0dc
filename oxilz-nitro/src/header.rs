//! Nintendo container header: `[u8 type][u24 LE decompressed_size]`.

use oxilz_core::error::{OxiLzError, Result};
use oxilz_core::MAX_BUFFER_SIZE;

/// Type tag for the LZ10 variant.
pub const LZ10_TYPE: u8 = 0x10;

/// Type tag for the LZ11 variant.
pub const LZ11_TYPE: u8 = 0x11;

/// Which Nintendo variant a stream uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NitroVariant {
    /// LZ10: 2-byte match records, lengths 3-18.
    Lz10,
    /// LZ11: 2/3/4-byte match records selected by an indicator nibble.
    Lz11,
}

impl NitroVariant {
    /// The header type byte for this variant.
    pub fn type_byte(&self) -> u8 {
        match self {
            Self::Lz10 => LZ10_TYPE,
            Self::Lz11 => LZ11_TYPE,
        }
    }
}

impl std::fmt::Display for NitroVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lz10 => write!(f, "LZ10"),
            Self::Lz11 => write!(f, "LZ11"),
        }
    }
}

/// Parsed Nintendo container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NitroHeader {
    /// Detected variant.
    pub variant: NitroVariant,
    /// Declared decompressed size (24-bit little-endian on the wire).
    pub decompressed_size: u32,
}

impl NitroHeader {
    /// Byte length of a packed header.
    pub const LEN: usize = 4;

    /// Parse and validate the 4-byte header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::LEN {
            return Err(OxiLzError::unexpected_eof(Self::LEN - data.len()));
        }

        let variant = match data[0] {
            LZ10_TYPE => NitroVariant::Lz10,
            LZ11_TYPE => NitroVariant::Lz11,
            other => {
                return Err(OxiLzError::invalid_header(format!(
                    "unknown type byte {other:#04x}"
                )));
            }
        };

        let size = u32::from_le_bytes([data[1], data[2], data[3], 0]);
        if size == 0 {
            return Err(OxiLzError::invalid_header("zero decompressed size"));
        }
        if size as usize >= MAX_BUFFER_SIZE {
            return Err(OxiLzError::buffer_too_large(size as usize, MAX_BUFFER_SIZE));
        }

        Ok(Self {
            variant,
            decompressed_size: size,
        })
    }

    /// Append the packed header to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.push(self.variant.type_byte());
        let size = self.decompressed_size.to_le_bytes();
        out.extend_from_slice(&size[..3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lz10() {
        let header = NitroHeader::parse(&[0x10, 0x34, 0x12, 0x00]).unwrap();
        assert_eq!(header.variant, NitroVariant::Lz10);
        assert_eq!(header.decompressed_size, 0x1234);
    }

    #[test]
    fn test_parse_lz11() {
        let header = NitroHeader::parse(&[0x11, 0x01, 0x00, 0x01]).unwrap();
        assert_eq!(header.variant, NitroVariant::Lz11);
        assert_eq!(header.decompressed_size, 0x0100_01);
    }

    #[test]
    fn test_write_roundtrip() {
        let header = NitroHeader {
            variant: NitroVariant::Lz10,
            decompressed_size: 0xAB_CDEF,
        };
        let mut out = Vec::new();
        header.write(&mut out);
        assert_eq!(out, vec![0x10, 0xEF, 0xCD, 0xAB]);
        assert_eq!(NitroHeader::parse(&out).unwrap(), header);
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(matches!(
            NitroHeader::parse(&[0x12, 0x01, 0x00, 0x00]),
            Err(OxiLzError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(matches!(
            NitroHeader::parse(&[0x10, 0x00, 0x00, 0x00]),
            Err(OxiLzError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_rejects_short_header() {
        assert!(matches!(
            NitroHeader::parse(&[0x10, 0x01]),
            Err(OxiLzError::UnexpectedEof { expected: 2 })
        ));
    }
}
