//! Hash tree roots: the commitment path.
//!
//! value -> encode -> pack into 32-byte leaves -> merkleize -> 32-byte root.

use tracing::trace;

use sszkit_core::{encode, Result, Shape, Value};
use sszkit_merkle::{merkleize, pack, Chunk, Hasher};

/// Compute the hash tree root of `value` against `shape`.
///
/// The root commits to the canonical serialization: two values with the
/// same encoding have the same root, independent of how the caller's type
/// happens to be laid out in memory.
pub fn hash_tree_root<H: Hasher>(value: &Value, shape: &Shape, hasher: &H) -> Result<Chunk> {
    let encoded = encode(value, shape)?;
    let root = serialized_root(&encoded, hasher);
    trace!(
        shape = %shape,
        encoded_len = encoded.len(),
        root = %root.to_hex(),
        "computed hash tree root"
    );
    Ok(root)
}

/// Merkleize an already-serialized byte stream.
pub fn serialized_root<H: Hasher>(bytes: &[u8], hasher: &H) -> Chunk {
    let chunks = pack(&[bytes]);
    merkleize(&chunks, hasher)
}
