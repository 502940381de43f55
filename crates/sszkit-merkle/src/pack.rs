//! The chunk packer.
//!
//! Splits a byte stream into 32-byte leaves. Callers may hand the stream
//! over pre-split (e.g. as already-encoded field blobs); the blobs are
//! treated as one logical contiguous stream, so chunk boundaries do not
//! align with blob boundaries.

use crate::chunk::{Chunk, BYTES_PER_CHUNK};

/// Pack a sequence of byte blobs into 32-byte chunks.
///
/// The final chunk is zero-padded; an empty input yields exactly one
/// all-zero chunk so Merkleization always has at least one leaf. Total
/// function, no failure modes.
pub fn pack<B: AsRef<[u8]>>(blobs: &[B]) -> Vec<Chunk> {
    let total: usize = blobs.iter().map(|b| b.as_ref().len()).sum();
    if total == 0 {
        return vec![Chunk::ZERO];
    }

    let mut chunks = Vec::with_capacity(total.div_ceil(BYTES_PER_CHUNK));
    let mut current = [0u8; BYTES_PER_CHUNK];
    let mut filled = 0usize;

    for blob in blobs {
        let mut rest = blob.as_ref();
        while !rest.is_empty() {
            let take = rest.len().min(BYTES_PER_CHUNK - filled);
            current[filled..filled + take].copy_from_slice(&rest[..take]);
            filled += take;
            rest = &rest[take..];
            if filled == BYTES_PER_CHUNK {
                chunks.push(Chunk(current));
                current = [0u8; BYTES_PER_CHUNK];
                filled = 0;
            }
        }
    }
    if filled > 0 {
        // Tail window, already zero past `filled`.
        chunks.push(Chunk(current));
    }
    chunks
}
