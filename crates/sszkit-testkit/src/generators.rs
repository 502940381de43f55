//! Proptest generators for property-based testing.
//!
//! Shapes are generated first; values are then generated to conform to the
//! shape, so every (shape, value) pair the strategies emit is encodable.

use proptest::prelude::*;

use sszkit_core::{Field, Shape, UintWidth, Value, U256};

/// Generate a random integer width.
pub fn arb_uint_width() -> impl Strategy<Value = UintWidth> {
    prop_oneof![
        Just(UintWidth::U8),
        Just(UintWidth::U16),
        Just(UintWidth::U32),
        Just(UintWidth::U64),
        Just(UintWidth::U128),
        Just(UintWidth::U256),
    ]
}

/// Generate a random basic shape.
pub fn arb_basic_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![Just(Shape::Bool), arb_uint_width().prop_map(Shape::Uint)]
}

/// Generate a random shape, nesting vectors, lists, and records up to
/// three levels deep. Never emits degenerate shapes (zero-length vectors,
/// empty records).
pub fn arb_shape() -> impl Strategy<Value = Shape> {
    arb_basic_shape().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (inner.clone(), 1usize..=4).prop_map(|(elem, len)| Shape::vector(elem, len)),
            inner.clone().prop_map(Shape::list),
            prop::collection::vec(inner, 1..=4).prop_map(|shapes| {
                let fields = shapes
                    .into_iter()
                    .enumerate()
                    .map(|(i, shape)| Field::new(format!("f{i}"), shape))
                    .collect();
                Shape::record(fields)
            }),
        ]
    })
}

/// Generate a value conforming to `shape`.
pub fn value_for(shape: &Shape) -> BoxedStrategy<Value> {
    match shape {
        Shape::Bool => any::<bool>().prop_map(Value::Bool).boxed(),
        Shape::Uint(UintWidth::U8) => any::<u8>().prop_map(Value::U8).boxed(),
        Shape::Uint(UintWidth::U16) => any::<u16>().prop_map(Value::U16).boxed(),
        Shape::Uint(UintWidth::U32) => any::<u32>().prop_map(Value::U32).boxed(),
        Shape::Uint(UintWidth::U64) => any::<u64>().prop_map(Value::U64).boxed(),
        Shape::Uint(UintWidth::U128) => any::<u128>().prop_map(Value::U128).boxed(),
        Shape::Uint(UintWidth::U256) => any::<[u8; 32]>()
            .prop_map(|bytes| Value::U256(U256::from_le_bytes(bytes)))
            .boxed(),
        Shape::Vector { elem, len } => prop::collection::vec(value_for(elem), *len)
            .prop_map(Value::Vector)
            .boxed(),
        Shape::List { elem } => prop::collection::vec(value_for(elem), 0..=3)
            .prop_map(Value::List)
            .boxed(),
        Shape::Record { fields } => {
            let mut acc: BoxedStrategy<Vec<Value>> = Just(Vec::new()).boxed();
            for field in fields {
                let field_values = value_for(&field.shape);
                acc = (acc, field_values)
                    .prop_map(|(mut values, value)| {
                        values.push(value);
                        values
                    })
                    .boxed();
            }
            acc.prop_map(Value::Record).boxed()
        }
    }
}

/// Generate a (shape, conforming value) pair.
pub fn arb_shape_and_value() -> impl Strategy<Value = (Shape, Value)> {
    arb_shape().prop_flat_map(|shape| {
        let values = value_for(&shape);
        values.prop_map(move |value| (shape.clone(), value))
    })
}
