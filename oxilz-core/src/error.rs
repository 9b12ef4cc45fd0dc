//! Error types for OxiLZ operations.
//!
//! One central error enum covers every fault a compress, decompress, or
//! inspect call can terminate with. All faults are terminal to the current
//! call; nothing retries internally or returns a partial result.

use thiserror::Error;

/// The main error type for OxiLZ operations.
#[derive(Debug, Error)]
pub enum OxiLzError {
    /// Invalid or out-of-range header fields.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Input ended in the middle of a token, match record, or bit field.
    #[error("Unexpected end of stream: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Back-reference offset is zero or reaches before the start of the
    /// decoded output.
    #[error("Invalid back-reference offset: {offset} with {decoded} bytes decoded")]
    InvalidOffset {
        /// The offending offset value.
        offset: usize,
        /// Number of bytes decoded when the offset was encountered.
        decoded: usize,
    },

    /// Decode finished with an output length different from the declared
    /// original size.
    #[error("Incomplete decode: expected {expected} bytes, produced {actual}")]
    IncompleteDecode {
        /// Declared original size.
        expected: usize,
        /// Actual decoded length.
        actual: usize,
    },

    /// Neither a classic nor a Nintendo header validates.
    #[error("Unknown compression format")]
    UnknownFormat,

    /// Buffer exceeds the whole-buffer processing guard.
    #[error("Buffer too large: {size} bytes exceeds limit of {limit}")]
    BufferTooLarge {
        /// Offending buffer size.
        size: usize,
        /// Maximum allowed size.
        limit: usize,
    },
}

/// Result type alias for OxiLZ operations.
pub type Result<T> = std::result::Result<T, OxiLzError>;

impl OxiLzError {
    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid offset error.
    pub fn invalid_offset(offset: usize, decoded: usize) -> Self {
        Self::InvalidOffset { offset, decoded }
    }

    /// Create an incomplete decode error.
    pub fn incomplete_decode(expected: usize, actual: usize) -> Self {
        Self::IncompleteDecode { expected, actual }
    }

    /// Create a buffer too large error.
    pub fn buffer_too_large(size: usize, limit: usize) -> Self {
        Self::BufferTooLarge { size, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiLzError::invalid_header("zero search buffer size");
        assert!(err.to_string().contains("Invalid header"));

        let err = OxiLzError::invalid_offset(0, 17);
        assert!(err.to_string().contains("17 bytes decoded"));

        let err = OxiLzError::incomplete_decode(100, 42);
        assert!(err.to_string().contains("expected 100"));
    }
}
