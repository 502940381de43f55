//! # sszkit-merkle
//!
//! Merkleization for SSZ: packing serialized bytes into 32-byte leaves and
//! folding leaves into a single content-commitment root.
//!
//! ## Key Types
//!
//! - [`Chunk`] - The exactly-32-byte leaf/digest unit
//! - [`Hasher`] - Injected hash capability ([`Sha256Hasher`] is the
//!   reference implementation, [`Blake3Hasher`] an alternative)
//! - [`pack`] - Byte stream -> zero-padded chunk sequence
//! - [`merkleize`] - Chunk sequence -> 32-byte root
//!
//! All operations are pure and synchronous; nothing here caches or mutates
//! shared state, so concurrent calls over disjoint inputs cannot interfere.

pub mod chunk;
pub mod hasher;
pub mod merkleize;
pub mod pack;

pub use chunk::{Chunk, BYTES_PER_CHUNK};
pub use hasher::{Blake3Hasher, Hasher, Sha256Hasher};
pub use merkleize::{is_power_of_two, merkleize, next_power_of_two};
pub use pack::pack;
