//! # sszkit-core
//!
//! Pure primitives for Simple Serialize (SSZ): shape descriptors, the type
//! classifier, and the type-driven encoder/decoder pair.
//!
//! This crate contains no I/O and no hashing. It is pure computation over
//! byte buffers; Merkleization lives in `sszkit-merkle`.
//!
//! ## Key Types
//!
//! - [`Shape`] - Closed, recursive descriptor of an encodable type
//! - [`Value`] - Runtime value mirroring the shape set
//! - [`Kind`] - A shape's encoding category and static length
//! - [`CodecError`] - The full error taxonomy, with field paths
//!
//! ## Layout rules
//!
//! Fixed-size shapes concatenate; variable-size containers carry a 4-byte
//! little-endian offset per variable constituent in their fixed section.
//! See [`encode`] and [`decode`] for the exact rules and validation.

pub mod decode;
pub mod encode;
pub mod error;
pub mod shape;
pub mod value;

pub use decode::decode;
pub use encode::{encode, BYTES_PER_OFFSET};
pub use error::{CodecError, Result};
pub use shape::{Field, Kind, Shape, UintWidth};
pub use value::{Value, U256};
