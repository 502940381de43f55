//! The hash primitive boundary.
//!
//! The Merkleizer consumes a single deterministic bytes-in, 32-bytes-out
//! function. It is injected as a capability parameter rather than bound to
//! a global, which keeps the tree code testable against stub hashes.

use sha2::{Digest, Sha256};

use crate::chunk::{Chunk, BYTES_PER_CHUNK};

/// A deterministic, collision-resistant 32-byte-output hash function.
pub trait Hasher {
    /// Hash arbitrary bytes into a chunk-sized digest.
    fn hash(&self, data: &[u8]) -> Chunk;

    /// Hash the concatenation of two chunks: the Merkle parent rule.
    fn hash_pair(&self, left: &Chunk, right: &Chunk) -> Chunk {
        let mut buf = [0u8; 2 * BYTES_PER_CHUNK];
        buf[..BYTES_PER_CHUNK].copy_from_slice(left.as_bytes());
        buf[BYTES_PER_CHUNK..].copy_from_slice(right.as_bytes());
        self.hash(&buf)
    }
}

/// SHA-256, the reference hash of the consensus domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> Chunk {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Chunk(hasher.finalize().into())
    }
}

/// Blake3, for callers outside the SHA-256 domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl Hasher for Blake3Hasher {
    fn hash(&self, data: &[u8]) -> Chunk {
        Chunk(*blake3::hash(data).as_bytes())
    }
}
