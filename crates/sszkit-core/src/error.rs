//! Error types for SSZ encoding and decoding.

use thiserror::Error;

/// Errors raised by classification, encoding, and decoding.
///
/// Every decode failure names the field path where the violation was found
/// (e.g. `$.attestation.targets[2]`). Decoding never returns partial output:
/// a buffer either decodes fully or yields one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A shape outside the supported set (unsupported integer width,
    /// zero-length vector, empty record).
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),

    /// A value paired with a shape it does not conform to.
    #[error("shape mismatch at {path}: expected {expected}, got {got}")]
    ShapeMismatch {
        path: String,
        expected: String,
        got: String,
    },

    /// Decode input has fewer bytes than a fixed-size shape requires.
    #[error("buffer too short at {path}: need {needed} bytes, have {have}")]
    BufferTooShort {
        path: String,
        needed: usize,
        have: usize,
    },

    /// A boolean byte outside {0x00, 0x01}.
    #[error("invalid boolean byte {byte:#04x} at {path}")]
    InvalidBoolean { path: String, byte: u8 },

    /// A buffer length inconsistent with the shape (not a multiple of the
    /// element width, trailing bytes past a fixed-size encoding, or a
    /// misaligned offset table).
    #[error("invalid length at {path}: {len} bytes, {reason}")]
    InvalidLength {
        path: String,
        len: usize,
        reason: String,
    },

    /// An offset in a variable-size container's offset table precedes its
    /// predecessor.
    #[error("offset {offset} precedes previous offset {prev} at {path}")]
    OffsetNotMonotonic { path: String, prev: u32, offset: u32 },

    /// An offset pointing outside the buffer, or a first offset that does
    /// not land exactly at the end of the fixed section.
    #[error("offset {offset} out of bounds at {path}: {reason}")]
    OffsetOutOfBounds {
        path: String,
        offset: u32,
        reason: String,
    },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
