//! The 32-byte chunk, atomic leaf unit of Merkleization.

use std::fmt;

/// Size of a Merkle leaf in bytes.
pub const BYTES_PER_CHUNK: usize = 32;

/// An exactly-32-byte opaque string: a packed leaf or an interior digest.
///
/// Chunks are produced by the packer or the hasher, never assembled from
/// value fragments directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chunk(pub [u8; BYTES_PER_CHUNK]);

impl Chunk {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; BYTES_PER_CHUNK]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; BYTES_PER_CHUNK] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The all-zero chunk, used as Merkle padding.
    pub const ZERO: Self = Self([0u8; BYTES_PER_CHUNK]);

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; BYTES_PER_CHUNK]
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BYTES_PER_CHUNK]> for Chunk {
    fn from(bytes: [u8; BYTES_PER_CHUNK]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Chunk {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; BYTES_PER_CHUNK] = slice.try_into()?;
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_chunk() {
        assert!(Chunk::ZERO.is_zero());
        assert!(!Chunk::from_bytes([1; 32]).is_zero());
    }

    #[test]
    fn test_debug_truncated() {
        let chunk = Chunk::from_bytes([0xab; 32]);
        assert_eq!(format!("{chunk:?}"), "Chunk(abababababababab...)");
    }

    #[test]
    fn test_try_from_slice() {
        assert!(Chunk::try_from(&[0u8; 32][..]).is_ok());
        assert!(Chunk::try_from(&[0u8; 31][..]).is_err());
    }
}
