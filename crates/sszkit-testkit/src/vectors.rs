//! Golden vectors as portable data.
//!
//! [`all_vectors`] materializes the fixture suite into hex-encoded records
//! that can be serialized to JSON and replayed against another
//! implementation. Roots are computed with SHA-256.

use serde::{Deserialize, Serialize};

use sszkit::{encode, hash_tree_root, Sha256Hasher};
use sszkit_core::{decode, Shape, Value};
use sszkit_merkle::Chunk;

use crate::fixtures;

/// A single golden vector: a shape, its encoding, and its root, all as
/// printable strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,
    pub shape: String,
    pub encoded_hex: String,
    pub root_hex: String,
}

fn make_vector(name: &str, shape: &Shape, value: &Value) -> GoldenVector {
    let encoded = encode(value, shape).expect("fixture values conform to their shapes");
    let root = hash_tree_root(value, shape, &Sha256Hasher)
        .expect("fixture values conform to their shapes");
    GoldenVector {
        name: name.to_string(),
        description: format!("{value:?} as {shape}"),
        shape: shape.to_string(),
        encoded_hex: hex::encode(&encoded),
        root_hex: root.to_hex(),
    }
}

fn cases() -> Vec<(&'static str, Shape, Value)> {
    let mut cases = fixtures::basic_suite();
    for (name, (shape, value)) in [
        ("u64_list", fixtures::u64_list(&[1, 2, 3])),
        ("u64_list_empty", fixtures::u64_list(&[])),
        (
            "u64_list_of_lists",
            fixtures::u64_list_of_lists(&[&[4, 3, 2], &[1], &[0]]),
        ),
        ("byte_vector", fixtures::byte_vector(&[1, 2, 3, 4, 5, 6, 7, 8])),
        ("byte_list", fixtures::byte_list(&[9, 8, 9, 8])),
        ("fork_record", fixtures::fork_record()),
        ("mixed_record", fixtures::mixed_record()),
    ] {
        cases.push((name, shape, value));
    }
    cases
}

/// Every golden vector in the suite.
pub fn all_vectors() -> Vec<GoldenVector> {
    cases()
        .iter()
        .map(|(name, shape, value)| make_vector(name, shape, value))
        .collect()
}

/// Replay a vector against the codec: decode the bytes, re-encode them,
/// and recompute the root. Returns an error message on the first mismatch.
pub fn verify_vector(vector: &GoldenVector, shape: &Shape) -> Result<(), String> {
    let encoded =
        hex::decode(&vector.encoded_hex).map_err(|e| format!("{}: bad hex: {e}", vector.name))?;
    let value = decode(&encoded, shape).map_err(|e| format!("{}: decode: {e}", vector.name))?;
    let reencoded = encode(&value, shape).map_err(|e| format!("{}: encode: {e}", vector.name))?;
    if reencoded != encoded {
        return Err(format!("{}: re-encoding differs", vector.name));
    }
    let root = hash_tree_root(&value, shape, &Sha256Hasher)
        .map_err(|e| format!("{}: root: {e}", vector.name))?;
    if root.to_hex() != vector.root_hex {
        return Err(format!(
            "{}: root mismatch: got {}, want {}",
            vector.name,
            root.to_hex(),
            vector.root_hex
        ));
    }
    Ok(())
}

/// Replay the whole suite.
pub fn verify_all_vectors() -> Result<(), String> {
    let vectors = all_vectors();
    for ((_, shape, _), vector) in cases().iter().zip(&vectors) {
        verify_vector(vector, shape)?;
    }
    Ok(())
}
