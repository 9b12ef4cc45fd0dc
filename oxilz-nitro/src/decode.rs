//! Flag-byte block decoder for LZ10 and LZ11 streams.

use oxilz_core::error::{OxiLzError, Result};

use crate::header::{NitroHeader, NitroVariant};

/// One decoded match record: copy length, raw offset, bytes consumed.
struct MatchRecord {
    length: usize,
    offset: usize,
    consumed: usize,
}

/// Decode the match record starting at `data[pos]`.
///
/// `byte0` is the first control byte after any literals already consumed
/// in this flag group. For LZ11 the high nibble of `byte0` is an indicator
/// selecting one of three record layouts.
fn read_record(variant: NitroVariant, data: &[u8], pos: usize) -> Result<MatchRecord> {
    let need = |n: usize| -> Result<()> {
        if pos + n > data.len() {
            Err(OxiLzError::unexpected_eof(pos + n - data.len()))
        } else {
            Ok(())
        }
    };

    match variant {
        NitroVariant::Lz10 => {
            need(2)?;
            let b0 = data[pos] as usize;
            let b1 = data[pos + 1] as usize;
            Ok(MatchRecord {
                length: (b0 >> 4) + 3,
                offset: ((b0 & 0xF) << 8) | b1,
                consumed: 2,
            })
        }
        NitroVariant::Lz11 => {
            need(2)?;
            let b0 = data[pos] as usize;
            match b0 >> 4 {
                0 => {
                    need(3)?;
                    let b1 = data[pos + 1] as usize;
                    let b2 = data[pos + 2] as usize;
                    Ok(MatchRecord {
                        length: (((b0 & 0xF) << 4) | (b1 >> 4)) + 0x11,
                        offset: ((b1 & 0xF) << 8) | b2,
                        consumed: 3,
                    })
                }
                1 => {
                    need(4)?;
                    let b1 = data[pos + 1] as usize;
                    let b2 = data[pos + 2] as usize;
                    let b3 = data[pos + 3] as usize;
                    Ok(MatchRecord {
                        length: (((b0 & 0xF) << 12) | (b1 << 4) | (b2 >> 4)) + 0x111,
                        offset: ((b2 & 0xF) << 8) | b3,
                        consumed: 4,
                    })
                }
                _ => {
                    let b1 = data[pos + 1] as usize;
                    Ok(MatchRecord {
                        length: (b0 >> 4) + 1,
                        offset: ((b0 & 0xF) << 8) | b1,
                        consumed: 2,
                    })
                }
            }
        }
    }
}

/// Decompress an LZ10 or LZ11 container.
///
/// The output may be shorter than the header's declared size when the
/// input runs out at a slot boundary; that is tolerated here and left to
/// the caller to warn about (compare against
/// [`NitroHeader::decompressed_size`]). Truncation inside a match record
/// is still a hard fault.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let header = NitroHeader::parse(input)?;
    let data = &input[NitroHeader::LEN..];
    let size = header.decompressed_size as usize;

    let mut output: Vec<u8> = Vec::with_capacity(size);
    let mut pos = 0;

    'groups: while output.len() < size && pos < data.len() {
        let flags = data[pos];
        pos += 1;

        // Bit 7 gates the first slot of the group.
        for bit in (0..8).rev() {
            if output.len() >= size || pos >= data.len() {
                continue 'groups;
            }

            if (flags >> bit) & 1 == 0 {
                output.push(data[pos]);
                pos += 1;
            } else {
                let record = read_record(header.variant, data, pos)?;
                pos += record.consumed;

                // Back-reference distance is offset + 1, unlike the
                // classic format.
                let distance = record.offset + 1;
                if distance > output.len() {
                    return Err(OxiLzError::invalid_offset(record.offset, output.len()));
                }

                for _ in 0..record.length {
                    if output.len() >= size {
                        break;
                    }
                    let byte = output[output.len() - distance];
                    output.push(byte);
                }
            }
        }
    }

    Ok(output)
}
