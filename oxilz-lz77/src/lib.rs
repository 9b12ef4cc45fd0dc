//! # OxiLZ classic codec
//!
//! A direct, intentionally simple LZ77 sliding-window codec with its own
//! bit-packed container format:
//!
//! ```text
//! [u16 window_size][u8 lookahead_size][u32 original_size]
//! followed by tokens of [u16 offset][u8 length][u8 next]
//! ```
//!
//! Everything is packed MSB-first and zero-padded to a byte boundary at
//! end of stream. The match engine is a brute-force scan; there is no
//! hash acceleration and no streaming path.
//!
//! ## Example
//!
//! ```
//! let input = b"hello hello world";
//! let compressed = oxilz_lz77::compress(input, 4096, 32).unwrap();
//! let restored = oxilz_lz77::decompress(&compressed).unwrap();
//! assert_eq!(restored, input);
//! ```

pub mod decode;
pub mod encode;
pub mod matcher;
pub mod token;

pub use decode::decompress;
pub use encode::compress;
pub use matcher::{Match, MatchFinder};
pub use token::{LzHeader, LzToken};

/// Default sliding-window size used by the CLI.
pub const DEFAULT_WINDOW_SIZE: u16 = 4096;

/// Default lookahead size used by the CLI.
pub const DEFAULT_LOOKAHEAD_SIZE: u8 = 32;
