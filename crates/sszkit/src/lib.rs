//! # sszkit
//!
//! The unified API for Simple Serialize (SSZ): a type-driven binary codec
//! paired with content-addressing tree hashing.
//!
//! ## Overview
//!
//! - **Shapes**: closed descriptors of encodable types - booleans,
//!   fixed-width unsigned integers, vectors, lists, records.
//! - **Codec**: canonical byte-exact encoding and strictly-validated
//!   decoding, including the offset-table mechanism for variable-size
//!   fields.
//! - **Merkleization**: packing serialized bytes into 32-byte leaves and
//!   folding them into a deterministic hash tree root.
//!
//! ## Usage
//!
//! ```rust
//! use sszkit::{decode, encode, hash_tree_root, Field, Shape, Sha256Hasher, Value};
//!
//! let shape = Shape::record(vec![
//!     Field::new("epoch", Shape::uint(64).unwrap()),
//!     Field::new("data", Shape::list(Shape::uint(8).unwrap())),
//! ]);
//! let value = Value::Record(vec![Value::U64(7), Value::byte_list(b"hi")]);
//!
//! let bytes = encode(&value, &shape).unwrap();
//! assert_eq!(decode(&bytes, &shape).unwrap(), value);
//!
//! let root = hash_tree_root(&value, &shape, &Sha256Hasher).unwrap();
//! assert_eq!(root.as_bytes().len(), 32);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - [`core`] - shapes, values, encoder, decoder
//! - [`merkle`] - chunks, packing, merkleization, hashers

pub use sszkit_core as core;
pub use sszkit_merkle as merkle;

mod tree_root;

pub use sszkit_core::{
    decode, encode, CodecError, Field, Kind, Result, Shape, UintWidth, Value, BYTES_PER_OFFSET,
    U256,
};
pub use sszkit_merkle::{
    is_power_of_two, merkleize, next_power_of_two, pack, Blake3Hasher, Chunk, Hasher,
    Sha256Hasher, BYTES_PER_CHUNK,
};
pub use tree_root::{hash_tree_root, serialized_root};
