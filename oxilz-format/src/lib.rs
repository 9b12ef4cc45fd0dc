//! # OxiLZ format layer
//!
//! Binds the classic and Nintendo codecs behind one decompression entry
//! point: [`LzFormat::detect`] sniffs the container from its leading
//! bytes, [`decompress`] dispatches once to the matching decoder, and
//! [`inspect`] renders a read-only diagnostic report.

pub mod detect;
pub mod inspect;

pub use detect::LzFormat;
pub use inspect::inspect;

use oxilz_core::error::{OxiLzError, Result};

/// Decompress a stream of either supported format.
///
/// Dispatches on [`LzFormat::detect`]; an unrecognized header is
/// [`OxiLzError::UnknownFormat`]. Note that a Nintendo stream may decode
/// short of its declared size (tolerated by that codec); callers that
/// care compare the result length against the header.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    match LzFormat::detect(data) {
        LzFormat::Nintendo => oxilz_nitro::decompress(data),
        LzFormat::Standard => oxilz_lz77::decompress(data),
        LzFormat::Unknown => Err(OxiLzError::UnknownFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_classic() {
        let input = b"the same words, the same words";
        let compressed = oxilz_lz77::compress(input, 4096, 32).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_dispatch_nintendo() {
        let input = b"the same words, the same words";
        let compressed = oxilz_nitro::compress(input).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_unknown_format_is_fault() {
        assert!(matches!(
            decompress(&[0xFF; 16]),
            Err(OxiLzError::UnknownFormat)
        ));
    }
}
