//! Classic-format compressor.

use oxilz_core::bitstream::BitWriter;
use oxilz_core::error::{OxiLzError, Result};
use oxilz_core::MAX_BUFFER_SIZE;

use crate::matcher::MatchFinder;
use crate::token::{LzHeader, LzToken};

/// Compress `input` into the classic container format.
///
/// `window_size` bounds how far back a match may reach (1-65535) and
/// `lookahead_size` bounds match length (1-255). The whole input is
/// processed in memory; anything over [`MAX_BUFFER_SIZE`] is rejected.
pub fn compress(input: &[u8], window_size: u16, lookahead_size: u8) -> Result<Vec<u8>> {
    if window_size == 0 {
        return Err(OxiLzError::invalid_header("zero search buffer size"));
    }
    if lookahead_size == 0 {
        return Err(OxiLzError::invalid_header("zero lookahead size"));
    }
    if input.len() > MAX_BUFFER_SIZE {
        return Err(OxiLzError::buffer_too_large(input.len(), MAX_BUFFER_SIZE));
    }

    let header = LzHeader {
        window_size,
        lookahead_size,
        original_size: input.len() as u32,
    };

    let mut writer = BitWriter::with_capacity(input.len() / 2 + 16);
    header.write(&mut writer);

    let finder = MatchFinder::new(window_size as usize, lookahead_size as usize);

    let mut pos = 0;
    while pos < input.len() {
        let m = finder.find(input, pos);

        if m.is_some() {
            // Fold the literal following the match into the same token;
            // 0 when the match ends exactly at end of input.
            let next = if pos + m.length < input.len() {
                input[pos + m.length]
            } else {
                0
            };
            LzToken {
                offset: m.offset as u16,
                length: m.length as u8,
                next,
            }
            .write(&mut writer);
            pos += m.length + 1;
        } else {
            LzToken::literal(input[pos]).write(&mut writer);
            pos += 1;
        }
    }

    Ok(writer.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilz_core::bitstream::BitReader;

    fn tokens_of(compressed: &[u8]) -> Vec<LzToken> {
        let mut reader = BitReader::new(compressed);
        LzHeader::read(&mut reader).unwrap();
        let mut tokens = Vec::new();
        while reader.remaining_bits() >= LzToken::BITS {
            tokens.push(LzToken::read(&mut reader).unwrap());
        }
        tokens
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"", 4096, 32).unwrap();
        // Header only.
        assert_eq!(compressed.len(), LzHeader::BITS / 8);
    }

    #[test]
    fn test_rejects_zero_parameters() {
        assert!(compress(b"abc", 0, 32).is_err());
        assert!(compress(b"abc", 4096, 0).is_err());
    }

    #[test]
    fn test_all_literals_for_unique_bytes() {
        let compressed = compress(b"abcd", 4096, 32).unwrap();
        let tokens = tokens_of(&compressed);
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|t| t.offset == 0 && t.length == 0));
    }

    #[test]
    fn test_match_folds_following_literal() {
        // "abcabcx": literal a, b, c then a match of "abc" carrying 'x'.
        let compressed = compress(b"abcabcx", 4096, 32).unwrap();
        let tokens = tokens_of(&compressed);
        assert_eq!(tokens.len(), 4);
        assert_eq!(
            tokens[3],
            LzToken {
                offset: 3,
                length: 3,
                next: b'x',
            }
        );
    }

    #[test]
    fn test_match_at_end_of_input_carries_zero() {
        let compressed = compress(b"abcabc", 4096, 32).unwrap();
        let tokens = tokens_of(&compressed);
        let last = tokens.last().unwrap();
        assert_eq!(last.length, 3);
        assert_eq!(last.next, 0);
    }

    #[test]
    fn test_compressed_no_larger_than_naive() {
        // Sanity bound from the format itself: one token per input byte is
        // the worst case, so repetitive data must do at least as well.
        let input = b"hello hello world world world! compression test data with repeating patterns.";
        let compressed = compress(input, 4096, 32).unwrap();
        let naive = LzHeader::BITS / 8 + input.len() * (LzToken::BITS / 8);
        assert!(compressed.len() <= naive);
    }
}
