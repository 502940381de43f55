//! # sszkit Testkit
//!
//! Testing utilities for sszkit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known (shape, encoding, root) triples for cross-implementation verification
//! - **Generators**: Proptest strategies producing shapes and conforming values
//! - **Fixtures**: Terse builders for common (shape, value) pairs
//!
//! ## Golden Vectors
//!
//! Golden vectors pin down the encoding and the SHA-256 root for a fixed
//! suite of values:
//!
//! ```rust
//! use sszkit_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     println!("{}: {}", vector.name, vector.root_hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use sszkit_testkit::generators::arb_shape_and_value;
//! use sszkit_core::{decode, encode};
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip((shape, value) in arb_shape_and_value()) {
//!         let bytes = encode(&value, &shape).unwrap();
//!         prop_assert_eq!(decode(&bytes, &shape).unwrap(), value);
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! Quickly build common values:
//!
//! ```rust
//! use sszkit_testkit::fixtures::u64_list;
//!
//! let (shape, value) = u64_list(&[1, 2, 3]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use generators::{arb_shape, arb_shape_and_value, value_for};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
