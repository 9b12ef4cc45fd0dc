//! LZ10 encoder.
//!
//! Only the LZ10 variant has an encoder; LZ11 is decode-only by design.

use oxilz_core::error::{OxiLzError, Result};
use oxilz_core::MAX_BUFFER_SIZE;

use crate::header::{NitroHeader, NitroVariant};

/// Shortest run worth encoding as a match.
pub const MIN_MATCH: usize = 3;

/// Longest run an LZ10 record can express (4-bit length nibble + 3).
pub const MAX_MATCH: usize = 18;

/// Trailing window an LZ10 record can reach back into (12-bit offset + 1).
pub const WINDOW_SIZE: usize = 4096;

/// Greedy longest-match scan over the LZ10 window.
///
/// Returns `(distance, length)`; length 0 when nothing of at least
/// [`MIN_MATCH`] bytes was found.
fn find_match(data: &[u8], pos: usize) -> (usize, usize) {
    let max_len = MAX_MATCH.min(data.len() - pos);
    if max_len < MIN_MATCH {
        return (0, 0);
    }

    let window_start = pos.saturating_sub(WINDOW_SIZE);
    let mut best_dist = 0;
    let mut best_len = 0;

    for start in window_start..pos {
        let mut len = 0;
        while len < max_len && data[start + len] == data[pos + len] {
            len += 1;
        }
        if len > best_len {
            best_dist = pos - start;
            best_len = len;
            if len == max_len {
                break;
            }
        }
    }

    if best_len >= MIN_MATCH {
        (best_dist, best_len)
    } else {
        (0, 0)
    }
}

/// Compress `input` into an LZ10 container.
///
/// Empty input cannot be represented (the header's decompressed size must
/// be nonzero) and is rejected, as is anything at or over the
/// whole-buffer guard.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(OxiLzError::invalid_header(
            "empty input cannot be represented in an LZ10 container",
        ));
    }
    if input.len() >= MAX_BUFFER_SIZE {
        return Err(OxiLzError::buffer_too_large(input.len(), MAX_BUFFER_SIZE));
    }

    let mut output = Vec::with_capacity(input.len() / 2 + NitroHeader::LEN);
    NitroHeader {
        variant: NitroVariant::Lz10,
        decompressed_size: input.len() as u32,
    }
    .write(&mut output);

    let mut pos = 0;
    while pos < input.len() {
        let flag_index = output.len();
        output.push(0);
        let mut flags = 0u8;

        for slot in 0..8 {
            if pos >= input.len() {
                break;
            }

            let (dist, len) = find_match(input, pos);
            if len >= MIN_MATCH {
                flags |= 0x80 >> slot;
                let offset = dist - 1;
                output.push((((len - MIN_MATCH) as u8) << 4) | ((offset >> 8) as u8));
                output.push((offset & 0xFF) as u8);
                pos += len;
            } else {
                output.push(input[pos]);
                pos += 1;
            }
        }

        output[flag_index] = flags;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decompress;

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            compress(b""),
            Err(OxiLzError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn test_header_fields() {
        let compressed = compress(b"abc").unwrap();
        assert_eq!(compressed[0], 0x10);
        assert_eq!(&compressed[1..4], &[3, 0, 0]);
    }

    #[test]
    fn test_short_input_is_all_literals() {
        // Below MIN_MATCH nothing can match.
        let compressed = compress(b"ab").unwrap();
        assert_eq!(&compressed[4..], &[0x00, b'a', b'b']);
    }

    #[test]
    fn test_repetitive_input_emits_matches() {
        let input = vec![b'z'; 64];
        let compressed = compress(&input).unwrap();
        // 'z' literal + a few 18-byte matches beat raw storage easily.
        assert!(compressed.len() < input.len());
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_text() {
        let input = b"hello hello world world world! compression test data with repeating patterns.";
        let compressed = compress(input).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_incompressible() {
        let mut seed = 0xDEAD_BEEF_CAFE_F00Du64;
        let input: Vec<u8> = (0..2048)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 32) as u8
            })
            .collect();
        let compressed = compress(&input).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_window_spanning() {
        // Repeats separated by more than WINDOW_SIZE still decode right;
        // the second occurrence simply cannot reference the first.
        let mut input = vec![0u8; 0];
        input.extend_from_slice(b"needle");
        input.extend(std::iter::repeat_n(0xAB, WINDOW_SIZE + 10));
        input.extend_from_slice(b"needle");
        let compressed = compress(&input).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_match_length_capped_at_max() {
        let input = vec![b'q'; 1000];
        let compressed = compress(&input).unwrap();
        // Every match record's length nibble is at most 15 (= MAX_MATCH).
        let mut pos = 4;
        let data = &compressed[..];
        while pos < data.len() {
            let flags = data[pos];
            pos += 1;
            for bit in (0..8).rev() {
                if pos >= data.len() {
                    break;
                }
                if (flags >> bit) & 1 == 1 {
                    let len = (data[pos] >> 4) as usize + MIN_MATCH;
                    assert!(len <= MAX_MATCH);
                    pos += 2;
                } else {
                    pos += 1;
                }
            }
        }
    }
}
