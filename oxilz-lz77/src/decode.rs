//! Classic-format decompressor.

use oxilz_core::bitstream::BitReader;
use oxilz_core::error::{OxiLzError, Result};

use crate::token::{LzHeader, LzToken};

/// Decompress a classic container back into the original bytes.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(input);
    let header = LzHeader::read(&mut reader)?;
    header.validate()?;

    let original_size = header.original_size as usize;
    let mut output: Vec<u8> = Vec::with_capacity(original_size);

    while output.len() < original_size {
        if !reader.has_remaining() {
            // Clean end of the token stream; the size check below decides
            // whether the stream was actually complete.
            break;
        }

        let token = LzToken::read(&mut reader)?;

        if token.length > 0 {
            let offset = token.offset as usize;
            if offset == 0 || offset > output.len() {
                return Err(OxiLzError::invalid_offset(offset, output.len()));
            }
            // Byte-by-byte so overlapping references replicate correctly.
            for _ in 0..token.length {
                let byte = output[output.len() - offset];
                output.push(byte);
            }
        }

        if output.len() < original_size {
            output.push(token.next);
        }
    }

    if output.len() != original_size {
        return Err(OxiLzError::incomplete_decode(original_size, output.len()));
    }

    Ok(output)
}
