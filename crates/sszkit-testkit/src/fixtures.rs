//! Test fixtures and helpers.
//!
//! Terse builders for (shape, value) pairs used across the test suites.

use sszkit_core::{Field, Shape, Value};

fn u64_shape() -> Shape {
    Shape::uint(64).expect("64 is a supported width")
}

fn u8_shape() -> Shape {
    Shape::uint(8).expect("8 is a supported width")
}

/// A list of u64s, e.g. `[1, 2, 3]`.
pub fn u64_list(items: &[u64]) -> (Shape, Value) {
    (Shape::list(u64_shape()), Value::u64_list(items))
}

/// A two-level list of u64s, e.g. `[[4,3,2],[1],[0]]`.
pub fn u64_list_of_lists(rows: &[&[u64]]) -> (Shape, Value) {
    let value = Value::List(rows.iter().map(|row| Value::u64_list(row)).collect());
    (Shape::list(Shape::list(u64_shape())), value)
}

/// A three-level list of u64s, e.g. `[[[1,2],[3]],[[4,5]],[[0]]]`.
pub fn u64_list_three_deep(groups: &[&[&[u64]]]) -> (Shape, Value) {
    let value = Value::List(
        groups
            .iter()
            .map(|group| Value::List(group.iter().map(|row| Value::u64_list(row)).collect()))
            .collect(),
    );
    (
        Shape::list(Shape::list(Shape::list(u64_shape()))),
        value,
    )
}

/// A fixed byte vector of the given contents.
pub fn byte_vector(bytes: &[u8]) -> (Shape, Value) {
    (
        Shape::vector(u8_shape(), bytes.len()),
        Value::byte_vector(bytes),
    )
}

/// A byte list of the given contents.
pub fn byte_list(bytes: &[u8]) -> (Shape, Value) {
    (Shape::list(u8_shape()), Value::byte_list(bytes))
}

/// An all-fixed record: two 4-byte version vectors and an epoch.
pub fn fork_record() -> (Shape, Value) {
    let shape = Shape::record(vec![
        Field::new("previous_version", Shape::vector(u8_shape(), 4)),
        Field::new("current_version", Shape::vector(u8_shape(), 4)),
        Field::new("epoch", u64_shape()),
    ]);
    let value = Value::Record(vec![
        Value::byte_vector(&[2, 3, 4, 1]),
        Value::byte_vector(&[0, 0, 0, 0]),
        Value::U64(10_923_910_294),
    ]);
    (shape, value)
}

/// A variable-size record mixing fixed and variable fields around the
/// offset table.
pub fn mixed_record() -> (Shape, Value) {
    let shape = Shape::record(vec![
        Field::new("slot", u64_shape()),
        Field::new("payload", Shape::list(u8_shape())),
        Field::new("finalized", Shape::Bool),
        Field::new("indices", Shape::list(u64_shape())),
    ]);
    let value = Value::Record(vec![
        Value::U64(42),
        Value::byte_list(b"hello world"),
        Value::Bool(true),
        Value::u64_list(&[3, 1, 4, 1, 5]),
    ]);
    (shape, value)
}

/// The basic-scalar suite: every supported width plus both booleans.
pub fn basic_suite() -> Vec<(&'static str, Shape, Value)> {
    use sszkit_core::U256;
    vec![
        ("bool_true", Shape::Bool, Value::Bool(true)),
        ("bool_false", Shape::Bool, Value::Bool(false)),
        ("uint8", Shape::uint(8).unwrap(), Value::U8(1)),
        ("uint16", Shape::uint(16).unwrap(), Value::U16(232)),
        ("uint32", Shape::uint(32).unwrap(), Value::U32(1_029_391)),
        ("uint64", Shape::uint(64).unwrap(), Value::U64(23_929_309)),
        ("uint128", Shape::uint(128).unwrap(), Value::U128(u128::MAX)),
        (
            "uint256",
            Shape::uint(256).unwrap(),
            Value::U256(U256::from_u64(u64::MAX)),
        ),
    ]
}
