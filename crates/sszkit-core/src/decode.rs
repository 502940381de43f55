//! The decoder.
//!
//! Exact inverse of the encoder. Every structural invariant the encoder
//! guarantees is validated here: fixed-size encodings must match their
//! static length exactly, boolean bytes must be 0x00 or 0x01, fixed-element
//! list lengths must divide evenly, and offset tables must start exactly at
//! the end of the fixed section, never decrease, and never point past the
//! buffer. Malformed input yields a typed [`CodecError`] naming the field
//! path; there is no partial output and no best-effort recovery.

use crate::encode::BYTES_PER_OFFSET;
use crate::error::{CodecError, Result};
use crate::shape::{Field, Kind, Shape, UintWidth};
use crate::value::{Value, U256};

/// Reconstruct a value of `shape` from `bytes`.
pub fn decode(bytes: &[u8], shape: &Shape) -> Result<Value> {
    shape.classify()?;
    decode_any(bytes, shape, "$")
}

fn decode_any(bytes: &[u8], shape: &Shape, path: &str) -> Result<Value> {
    match shape {
        Shape::Bool => {
            check_exact(bytes, 1, path)?;
            match bytes[0] {
                0x00 => Ok(Value::Bool(false)),
                0x01 => Ok(Value::Bool(true)),
                byte => Err(CodecError::InvalidBoolean {
                    path: path.to_string(),
                    byte,
                }),
            }
        }
        Shape::Uint(width) => decode_uint(bytes, *width, path),
        Shape::Vector { elem, len } => match elem.classify()? {
            Kind::Basic(elem_len) | Kind::FixedComposite(elem_len) => {
                check_exact(bytes, elem_len * len, path)?;
                let items = decode_fixed_run(bytes, elem, elem_len, *len, path)?;
                Ok(Value::Vector(items))
            }
            Kind::VariableComposite => {
                let items = decode_offset_run(bytes, elem, Some(*len), path)?;
                Ok(Value::Vector(items))
            }
        },
        Shape::List { elem } => match elem.classify()? {
            Kind::Basic(elem_len) | Kind::FixedComposite(elem_len) => {
                if bytes.len() % elem_len != 0 {
                    return Err(CodecError::InvalidLength {
                        path: path.to_string(),
                        len: bytes.len(),
                        reason: format!("not a multiple of element size {elem_len}"),
                    });
                }
                let count = bytes.len() / elem_len;
                let items = decode_fixed_run(bytes, elem, elem_len, count, path)?;
                Ok(Value::List(items))
            }
            Kind::VariableComposite => {
                let items = decode_offset_run(bytes, elem, None, path)?;
                Ok(Value::List(items))
            }
        },
        Shape::Record { fields } => decode_record(bytes, fields, shape, path),
    }
}

fn decode_uint(bytes: &[u8], width: UintWidth, path: &str) -> Result<Value> {
    check_exact(bytes, width.byte_len(), path)?;
    // Slice lengths are verified above, so try_into cannot fail.
    Ok(match width {
        UintWidth::U8 => Value::U8(bytes[0]),
        UintWidth::U16 => Value::U16(u16::from_le_bytes(bytes.try_into().unwrap())),
        UintWidth::U32 => Value::U32(u32::from_le_bytes(bytes.try_into().unwrap())),
        UintWidth::U64 => Value::U64(u64::from_le_bytes(bytes.try_into().unwrap())),
        UintWidth::U128 => Value::U128(u128::from_le_bytes(bytes.try_into().unwrap())),
        UintWidth::U256 => {
            let mut le = [0u8; 32];
            le.copy_from_slice(bytes);
            Value::U256(U256::from_le_bytes(le))
        }
    })
}

/// Decode `count` fixed-size elements by simple slicing.
fn decode_fixed_run(
    bytes: &[u8],
    elem: &Shape,
    elem_len: usize,
    count: usize,
    path: &str,
) -> Result<Vec<Value>> {
    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        let slice = &bytes[i * elem_len..(i + 1) * elem_len];
        items.push(decode_any(slice, elem, &format!("{path}[{i}]"))?);
    }
    Ok(items)
}

/// Decode a homogeneous run of variable-size elements via its offset table.
///
/// With `expected_count` (vectors) the count comes from the shape; without
/// it (lists) the count is derived as `first_offset / 4`. Either way the
/// first offset must land exactly at the end of the offset table.
fn decode_offset_run(
    bytes: &[u8],
    elem: &Shape,
    expected_count: Option<usize>,
    path: &str,
) -> Result<Vec<Value>> {
    if bytes.is_empty() {
        return match expected_count {
            None => Ok(Vec::new()),
            Some(count) => Err(CodecError::BufferTooShort {
                path: path.to_string(),
                needed: count * BYTES_PER_OFFSET,
                have: 0,
            }),
        };
    }

    let first = read_offset(bytes, 0, path)? as usize;
    let count = match expected_count {
        Some(count) => count,
        None => {
            if first == 0 || first % BYTES_PER_OFFSET != 0 {
                return Err(CodecError::InvalidLength {
                    path: path.to_string(),
                    len: bytes.len(),
                    reason: format!(
                        "first offset {first} does not describe a valid offset table"
                    ),
                });
            }
            first / BYTES_PER_OFFSET
        }
    };

    let fixed_len = count * BYTES_PER_OFFSET;
    if first != fixed_len {
        return Err(CodecError::OffsetOutOfBounds {
            path: path.to_string(),
            offset: first as u32,
            reason: format!("first offset must equal fixed section length {fixed_len}"),
        });
    }
    if bytes.len() < fixed_len {
        return Err(CodecError::BufferTooShort {
            path: path.to_string(),
            needed: fixed_len,
            have: bytes.len(),
        });
    }

    let mut offsets = Vec::with_capacity(count);
    for i in 0..count {
        let offset = read_offset(bytes, i * BYTES_PER_OFFSET, path)?;
        validate_offset(offset, offsets.last().copied(), bytes.len(), path)?;
        offsets.push(offset);
    }

    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        let start = offsets[i] as usize;
        let end = offsets.get(i + 1).map_or(bytes.len(), |&o| o as usize);
        items.push(decode_any(&bytes[start..end], elem, &format!("{path}[{i}]"))?);
    }
    Ok(items)
}

fn decode_record(bytes: &[u8], fields: &[Field], shape: &Shape, path: &str) -> Result<Value> {
    // Fixed-section width: each fixed field contributes its length, each
    // variable field a 4-byte offset.
    let mut kinds = Vec::with_capacity(fields.len());
    let mut fixed_len = 0usize;
    for field in fields {
        let kind = field.shape.classify()?;
        fixed_len += kind.fixed_len().unwrap_or(BYTES_PER_OFFSET);
        kinds.push(kind);
    }

    let all_fixed = matches!(shape.classify()?, Kind::FixedComposite(_));
    if all_fixed {
        check_exact(bytes, fixed_len, path)?;
    } else if bytes.len() < fixed_len {
        return Err(CodecError::BufferTooShort {
            path: path.to_string(),
            needed: fixed_len,
            have: bytes.len(),
        });
    }

    // Walk the fixed section: remember each fixed field's slice and each
    // variable field's offset.
    enum Part {
        Fixed(std::ops::Range<usize>),
        Variable(u32),
    }
    let mut parts = Vec::with_capacity(fields.len());
    let mut cursor = 0usize;
    let mut prev_offset = None;
    for (field, kind) in fields.iter().zip(&kinds) {
        match kind.fixed_len() {
            Some(n) => {
                parts.push(Part::Fixed(cursor..cursor + n));
                cursor += n;
            }
            None => {
                let offset = read_offset(bytes, cursor, path)?;
                let field_path = format!("{path}.{}", field.name);
                if prev_offset.is_none() && offset as usize != fixed_len {
                    return Err(CodecError::OffsetOutOfBounds {
                        path: field_path,
                        offset,
                        reason: format!("first offset must equal fixed section length {fixed_len}"),
                    });
                }
                validate_offset(offset, prev_offset, bytes.len(), &field_path)?;
                prev_offset = Some(offset);
                parts.push(Part::Variable(offset));
                cursor += BYTES_PER_OFFSET;
            }
        }
    }

    // Ends of variable slices: the next variable offset, or the buffer end
    // for the final variable field.
    let offsets: Vec<u32> = parts
        .iter()
        .filter_map(|p| match p {
            Part::Variable(o) => Some(*o),
            Part::Fixed(_) => None,
        })
        .collect();

    let mut values = Vec::with_capacity(fields.len());
    let mut variable_index = 0usize;
    for (field, part) in fields.iter().zip(&parts) {
        let field_path = format!("{path}.{}", field.name);
        let slice = match part {
            Part::Fixed(range) => &bytes[range.clone()],
            Part::Variable(offset) => {
                let start = *offset as usize;
                let end = offsets
                    .get(variable_index + 1)
                    .map_or(bytes.len(), |&o| o as usize);
                variable_index += 1;
                &bytes[start..end]
            }
        };
        values.push(decode_any(slice, &field.shape, &field_path)?);
    }
    Ok(Value::Record(values))
}

/// Read a 4-byte little-endian offset at `pos`.
fn read_offset(bytes: &[u8], pos: usize, path: &str) -> Result<u32> {
    let end = pos + BYTES_PER_OFFSET;
    if bytes.len() < end {
        return Err(CodecError::BufferTooShort {
            path: path.to_string(),
            needed: end,
            have: bytes.len(),
        });
    }
    // The slice is exactly 4 bytes.
    Ok(u32::from_le_bytes(bytes[pos..end].try_into().unwrap()))
}

/// An offset must not precede its predecessor and must stay inside the
/// buffer.
fn validate_offset(offset: u32, prev: Option<u32>, buffer_len: usize, path: &str) -> Result<()> {
    if let Some(prev) = prev {
        if offset < prev {
            return Err(CodecError::OffsetNotMonotonic {
                path: path.to_string(),
                prev,
                offset,
            });
        }
    }
    if offset as usize > buffer_len {
        return Err(CodecError::OffsetOutOfBounds {
            path: path.to_string(),
            offset,
            reason: format!("past end of {buffer_len}-byte buffer"),
        });
    }
    Ok(())
}

/// A fixed-size encoding must match its static length exactly: shorter is
/// `BufferTooShort`, longer is `InvalidLength` (canonical encodings carry
/// no trailing bytes).
fn check_exact(bytes: &[u8], needed: usize, path: &str) -> Result<()> {
    if bytes.len() < needed {
        return Err(CodecError::BufferTooShort {
            path: path.to_string(),
            needed,
            have: bytes.len(),
        });
    }
    if bytes.len() > needed {
        return Err(CodecError::InvalidLength {
            path: path.to_string(),
            len: bytes.len(),
            reason: format!("trailing bytes past fixed-size encoding of {needed}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use crate::shape::Field;

    fn u(bits: usize) -> Shape {
        Shape::uint(bits).unwrap()
    }

    fn roundtrip(value: Value, shape: Shape) {
        let encoded = encode(&value, &shape).unwrap();
        let decoded = decode(&encoded, &shape).unwrap();
        assert_eq!(decoded, value, "round trip failed for {shape}");
    }

    #[test]
    fn test_roundtrip_basics() {
        roundtrip(Value::Bool(true), Shape::Bool);
        roundtrip(Value::Bool(false), Shape::Bool);
        roundtrip(Value::U8(1), u(8));
        roundtrip(Value::U8(0), u(8));
        roundtrip(Value::U16(100), u(16));
        roundtrip(Value::U16(232), u(16));
        roundtrip(Value::U32(1), u(32));
        roundtrip(Value::U32(1_029_391), u(32));
        roundtrip(Value::U64(5), u(64));
        roundtrip(Value::U64(23_929_309), u(64));
        roundtrip(Value::U128(u128::MAX), u(128));
        roundtrip(Value::U256(U256::from_u64(u64::MAX)), u(256));
    }

    #[test]
    fn test_roundtrip_fixed_vectors() {
        roundtrip(
            Value::byte_vector(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Shape::vector(u(8), 8),
        );
        roundtrip(
            Value::Vector((1..=12).map(Value::U64).collect()),
            Shape::vector(u(64), 12),
        );
        // Sparse bool vector: true, false, true, true, then 96 falses.
        let mut bools = vec![true, false, true, true];
        bools.resize(100, false);
        roundtrip(
            Value::Vector(bools.into_iter().map(Value::Bool).collect()),
            Shape::vector(Shape::Bool, 100),
        );
        let mut shorts = vec![3u16, 4, 5];
        shorts.resize(20, 0);
        roundtrip(
            Value::Vector(shorts.into_iter().map(Value::U16).collect()),
            Shape::vector(u(16), 20),
        );
    }

    #[test]
    fn test_roundtrip_lists_of_basics() {
        roundtrip(Value::u64_list(&[1, 2, 3]), Shape::list(u(64)));
        roundtrip(Value::u64_list(&[]), Shape::list(u(64)));
        roundtrip(
            Value::List(
                [true, false, true, true, true]
                    .into_iter()
                    .map(Value::Bool)
                    .collect(),
            ),
            Shape::list(Shape::Bool),
        );
        roundtrip(
            Value::List([92_939u32, 232, 222].into_iter().map(Value::U32).collect()),
            Shape::list(u(32)),
        );
    }

    #[test]
    fn test_roundtrip_nested_lists() {
        // [[4,3,2],[1],[0]]
        roundtrip(
            Value::List(vec![
                Value::u64_list(&[4, 3, 2]),
                Value::u64_list(&[1]),
                Value::u64_list(&[0]),
            ]),
            Shape::list(Shape::list(u(64))),
        );
        // [[[1,2],[3]],[[4,5]],[[0]]]
        roundtrip(
            Value::List(vec![
                Value::List(vec![Value::u64_list(&[1, 2]), Value::u64_list(&[3])]),
                Value::List(vec![Value::u64_list(&[4, 5])]),
                Value::List(vec![Value::u64_list(&[0])]),
            ]),
            Shape::list(Shape::list(Shape::list(u(64)))),
        );
        // Inner empties survive.
        roundtrip(
            Value::List(vec![Value::u64_list(&[]), Value::u64_list(&[7])]),
            Shape::list(Shape::list(u(64))),
        );
    }

    fn fork_shape() -> Shape {
        Shape::record(vec![
            Field::new("previous_version", Shape::vector(u(8), 4)),
            Field::new("current_version", Shape::vector(u(8), 4)),
            Field::new("epoch", u(64)),
        ])
    }

    fn fork_value() -> Value {
        Value::Record(vec![
            Value::byte_vector(&[2, 3, 4, 1]),
            Value::byte_vector(&[0, 0, 0, 0]),
            Value::U64(10_923_910_294),
        ])
    }

    #[test]
    fn test_roundtrip_fixed_record() {
        roundtrip(fork_value(), fork_shape());
    }

    #[test]
    fn test_roundtrip_variable_record() {
        let shape = Shape::record(vec![
            Field::new("a", u(16)),
            Field::new("b", Shape::list(u(8))),
            Field::new("c", Shape::Bool),
            Field::new("d", Shape::list(u(64))),
        ]);
        roundtrip(
            Value::Record(vec![
                Value::U16(9),
                Value::byte_list(&[1, 2, 3]),
                Value::Bool(true),
                Value::u64_list(&[7, 8]),
            ]),
            shape.clone(),
        );
        // Empty variable fields.
        roundtrip(
            Value::Record(vec![
                Value::U16(0),
                Value::byte_list(&[]),
                Value::Bool(false),
                Value::u64_list(&[]),
            ]),
            shape,
        );
    }

    #[test]
    fn test_roundtrip_record_of_records() {
        let shape = Shape::record(vec![
            Field::new("fork", fork_shape()),
            Field::new("history", Shape::list(fork_shape())),
        ]);
        roundtrip(
            Value::Record(vec![
                fork_value(),
                Value::List(vec![fork_value(), fork_value()]),
            ]),
            shape,
        );
    }

    #[test]
    fn test_roundtrip_vector_of_records() {
        roundtrip(
            Value::Vector(vec![fork_value(), fork_value(), fork_value(), fork_value()]),
            Shape::vector(fork_shape(), 4),
        );
    }

    #[test]
    fn test_roundtrip_list_of_variable_records() {
        let rec = Shape::record(vec![
            Field::new("n", u(32)),
            Field::new("data", Shape::list(u(8))),
        ]);
        roundtrip(
            Value::List(vec![
                Value::Record(vec![Value::U32(1), Value::byte_list(&[1])]),
                Value::Record(vec![Value::U32(2), Value::byte_list(&[])]),
                Value::Record(vec![Value::U32(3), Value::byte_list(&[3, 3, 3])]),
            ]),
            Shape::list(rec),
        );
    }

    #[test]
    fn test_roundtrip_vector_of_variable_elements() {
        roundtrip(
            Value::Vector(vec![
                Value::byte_list(&[1]),
                Value::byte_list(&[]),
                Value::byte_list(&[2, 3]),
            ]),
            Shape::vector(Shape::list(u(8)), 3),
        );
    }

    #[test]
    fn test_reject_invalid_boolean() {
        let err = decode(&[2], &Shape::Bool).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidBoolean {
                path: "$".to_string(),
                byte: 2
            }
        );
    }

    #[test]
    fn test_reject_short_buffer() {
        let err = decode(&[1, 2], &u(32)).unwrap_err();
        assert_eq!(
            err,
            CodecError::BufferTooShort {
                path: "$".to_string(),
                needed: 4,
                have: 2
            }
        );
    }

    #[test]
    fn test_reject_trailing_bytes_on_fixed_shape() {
        let err = decode(&[1, 2, 3, 4, 5], &u(32)).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { .. }));
    }

    #[test]
    fn test_reject_misaligned_fixed_list() {
        // 10 bytes cannot hold uint64 elements.
        let err = decode(&[0; 10], &Shape::list(u(64))).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { .. }));
    }

    #[test]
    fn test_reject_decreasing_list_offsets() {
        // Two elements: offsets 8 then 6.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&8u32.to_le_bytes());
        bytes.extend_from_slice(&6u32.to_le_bytes());
        bytes.extend_from_slice(&[0, 0]);
        let err = decode(&bytes, &Shape::list(Shape::list(u(8)))).unwrap_err();
        assert!(matches!(err, CodecError::OffsetNotMonotonic { .. }));
    }

    #[test]
    fn test_reject_bad_first_list_offset() {
        // First offset 16 implies four elements, but the table is then
        // 16 bytes and the second offset cannot decrease below it.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&12u32.to_le_bytes());
        bytes.extend_from_slice(&20u32.to_le_bytes());
        // Claims 3 elements (12 / 4) but only two offsets were written, so
        // the third offset reads into data bytes.
        bytes.extend_from_slice(&[0xff; 8]);
        let err = decode(&bytes, &Shape::list(Shape::list(u(8)))).unwrap_err();
        assert!(matches!(
            err,
            CodecError::OffsetOutOfBounds { .. } | CodecError::OffsetNotMonotonic { .. }
        ));
    }

    #[test]
    fn test_reject_zero_first_offset_on_nonempty_buffer() {
        // An empty list encodes to zero bytes; a zero first offset in a
        // non-empty buffer claims zero elements with data behind them.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3]);
        let err = decode(&bytes, &Shape::list(Shape::list(u(8)))).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { .. }));
    }

    #[test]
    fn test_reject_misaligned_first_offset() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&6u32.to_le_bytes());
        bytes.extend_from_slice(&[0, 0]);
        let err = decode(&bytes, &Shape::list(Shape::list(u(8)))).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLength { .. }));
    }

    #[test]
    fn test_reject_offset_past_buffer_end() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&4u32.to_le_bytes());
        // One element whose offset is fine, but buffer claims nothing more;
        // now craft a second case where the offset exceeds the buffer.
        let shape = Shape::list(Shape::list(u(8)));
        assert!(decode(&bytes, &shape).is_ok());

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&8u32.to_le_bytes());
        bytes.extend_from_slice(&99u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2]);
        let err = decode(&bytes, &shape).unwrap_err();
        assert!(matches!(err, CodecError::OffsetOutOfBounds { .. }));
    }

    #[test]
    fn test_reject_record_decreasing_offsets() {
        let shape = Shape::record(vec![
            Field::new("x", Shape::list(u(8))),
            Field::new("y", Shape::list(u(8))),
        ]);
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&8u32.to_le_bytes());
        bytes.extend_from_slice(&6u32.to_le_bytes());
        bytes.extend_from_slice(&[0, 0]);
        let err = decode(&bytes, &shape).unwrap_err();
        match err {
            CodecError::OffsetNotMonotonic { path, prev, offset } => {
                assert_eq!(path, "$.y");
                assert_eq!(prev, 8);
                assert_eq!(offset, 6);
            }
            other => panic!("expected OffsetNotMonotonic, got {other:?}"),
        }
    }

    #[test]
    fn test_reject_record_first_offset_not_at_fixed_end() {
        let shape = Shape::record(vec![
            Field::new("a", u(16)),
            Field::new("b", Shape::list(u(8))),
        ]);
        // Fixed section is 6 bytes; claim the data starts at 7.
        let mut bytes = vec![0x34, 0x12];
        bytes.extend_from_slice(&7u32.to_le_bytes());
        bytes.push(0xaa);
        let err = decode(&bytes, &shape).unwrap_err();
        match err {
            CodecError::OffsetOutOfBounds { path, offset, .. } => {
                assert_eq!(path, "$.b");
                assert_eq!(offset, 7);
            }
            other => panic!("expected OffsetOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_reject_record_fixed_section_truncated() {
        let shape = Shape::record(vec![
            Field::new("a", u(64)),
            Field::new("b", Shape::list(u(8))),
        ]);
        let err = decode(&[0; 5], &shape).unwrap_err();
        assert_eq!(
            err,
            CodecError::BufferTooShort {
                path: "$".to_string(),
                needed: 12,
                have: 5
            }
        );
    }

    #[test]
    fn test_error_path_points_into_nested_field() {
        // Inner boolean byte is 7: the error path should descend into the
        // record's list field.
        let shape = Shape::record(vec![
            Field::new("flag", Shape::Bool),
            Field::new("bits", Shape::list(Shape::Bool)),
        ]);
        let mut bytes = vec![0x01];
        bytes.extend_from_slice(&5u32.to_le_bytes());
        bytes.extend_from_slice(&[0x01, 0x07]);
        let err = decode(&bytes, &shape).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidBoolean {
                path: "$.bits[1]".to_string(),
                byte: 7
            }
        );
    }

    #[test]
    fn test_decode_empty_buffer_for_variable_list_is_empty() {
        assert_eq!(
            decode(&[], &Shape::list(Shape::list(u(64)))).unwrap(),
            Value::List(vec![])
        );
        assert_eq!(
            decode(&[], &Shape::list(u(64))).unwrap(),
            Value::List(vec![])
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_u64_list_roundtrips(items in proptest::collection::vec(any::<u64>(), 0..64)) {
                let shape = Shape::list(u(64));
                let value = Value::u64_list(&items);
                let encoded = encode(&value, &shape).unwrap();
                prop_assert_eq!(encoded.len(), items.len() * 8);
                prop_assert_eq!(decode(&encoded, &shape).unwrap(), value);
            }

            #[test]
            fn prop_nested_list_roundtrips(
                rows in proptest::collection::vec(
                    proptest::collection::vec(any::<u64>(), 0..8),
                    0..8,
                )
            ) {
                let shape = Shape::list(Shape::list(u(64)));
                let value = Value::List(rows.iter().map(|r| Value::u64_list(r)).collect());
                let encoded = encode(&value, &shape).unwrap();
                prop_assert_eq!(decode(&encoded, &shape).unwrap(), value);
            }

            #[test]
            fn prop_decode_arbitrary_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
                // Malformed input must fail cleanly, never crash.
                let _ = decode(&bytes, &Shape::list(Shape::list(u(64))));
                let _ = decode(&bytes, &Shape::list(u(8)));
                let _ = decode(
                    &bytes,
                    &Shape::record(vec![
                        Field::new("a", u(32)),
                        Field::new("b", Shape::list(u(8))),
                    ]),
                );
            }
        }
    }
}
