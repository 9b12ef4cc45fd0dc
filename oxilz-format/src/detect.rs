//! Compression format auto-detection.

use oxilz_core::bitstream::BitReader;
use oxilz_core::MAX_BUFFER_SIZE;
use oxilz_lz77::LzHeader;
use oxilz_nitro::{LZ10_TYPE, LZ11_TYPE};

/// Known compressed-stream formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzFormat {
    /// Nintendo LZ10/LZ11 container.
    Nintendo,
    /// Classic bit-packed LZ77 container.
    Standard,
    /// Neither header validates.
    Unknown,
}

impl LzFormat {
    /// Detect the format from the leading bytes of a stream.
    ///
    /// The Nintendo type-byte check runs *before* any classic-header
    /// attempt: a stream starting with 0x10 or 0x11 is always classified
    /// Nintendo, even when its remaining bytes would also pass the
    /// classic range checks. That precedence is part of the format
    /// contract, not an implementation detail.
    pub fn detect(data: &[u8]) -> Self {
        if !data.is_empty() && (data[0] == LZ10_TYPE || data[0] == LZ11_TYPE) {
            return Self::Nintendo;
        }

        let mut reader = BitReader::new(data);
        if let Ok(header) = LzHeader::read(&mut reader) {
            if header.window_size > 0
                && header.lookahead_size > 0
                && header.original_size > 0
                && header.original_size as usize <= MAX_BUFFER_SIZE
            {
                return Self::Standard;
            }
        }

        Self::Unknown
    }

    /// Typical file extension for streams of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Nintendo => "bin",
            Self::Standard => "lz",
            Self::Unknown => "",
        }
    }
}

impl std::fmt::Display for LzFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nintendo => write!(f, "nintendo"),
            Self::Standard => write!(f, "standard"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
