//! The encoder.
//!
//! Serializes a [`Value`] against its [`Shape`] into the canonical byte
//! layout:
//!
//! 1. Basic scalars: one byte for booleans, little-endian at fixed width
//!    for unsigned integers.
//! 2. All-fixed vectors and records: plain concatenation. No length prefix,
//!    no offsets; the decoder recovers the layout from the shape alone.
//! 3. Variable-size containers: a fixed section (fixed constituents
//!    verbatim, a 4-byte little-endian offset per variable constituent)
//!    followed by the variable constituents' encodings in order. Offsets
//!    are relative to the start of the container's own encoding; the last
//!    constituent runs to the end of the buffer.
//!
//! Encoding is a pure function: fresh buffer per call, no state.

use crate::error::{CodecError, Result};
use crate::shape::{Field, Shape, UintWidth};
use crate::value::Value;

/// Width of an offset in a variable-size container's fixed section.
pub const BYTES_PER_OFFSET: usize = 4;

/// Serialize `value` against `shape`.
pub fn encode(value: &Value, shape: &Shape) -> Result<Vec<u8>> {
    shape.classify()?;
    let mut out = Vec::new();
    encode_into(value, shape, "$", &mut out)?;
    Ok(out)
}

fn mismatch(path: &str, shape: &Shape, got: String) -> CodecError {
    CodecError::ShapeMismatch {
        path: path.to_string(),
        expected: shape.to_string(),
        got,
    }
}

fn encode_into(value: &Value, shape: &Shape, path: &str, out: &mut Vec<u8>) -> Result<()> {
    match shape {
        Shape::Bool => match value {
            Value::Bool(b) => {
                out.push(u8::from(*b));
                Ok(())
            }
            other => Err(mismatch(path, shape, other.kind_name().to_string())),
        },
        Shape::Uint(width) => encode_uint(value, *width, shape, path, out),
        Shape::Vector { elem, len } => match value {
            Value::Vector(items) => {
                if items.len() != *len {
                    return Err(mismatch(
                        path,
                        shape,
                        format!("vector of {} elements", items.len()),
                    ));
                }
                encode_elements(items, elem, path, out)
            }
            other => Err(mismatch(path, shape, other.kind_name().to_string())),
        },
        Shape::List { elem } => match value {
            Value::List(items) => encode_elements(items, elem, path, out),
            other => Err(mismatch(path, shape, other.kind_name().to_string())),
        },
        Shape::Record { fields } => match value {
            Value::Record(values) => {
                if values.len() != fields.len() {
                    return Err(mismatch(
                        path,
                        shape,
                        format!("record of {} fields", values.len()),
                    ));
                }
                encode_record(values, fields, path, out)
            }
            other => Err(mismatch(path, shape, other.kind_name().to_string())),
        },
    }
}

fn encode_uint(
    value: &Value,
    width: UintWidth,
    shape: &Shape,
    path: &str,
    out: &mut Vec<u8>,
) -> Result<()> {
    match (width, value) {
        (UintWidth::U8, Value::U8(n)) => out.push(*n),
        (UintWidth::U16, Value::U16(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (UintWidth::U32, Value::U32(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (UintWidth::U64, Value::U64(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (UintWidth::U128, Value::U128(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (UintWidth::U256, Value::U256(n)) => out.extend_from_slice(n.as_le_bytes()),
        (_, other) => return Err(mismatch(path, shape, other.kind_name().to_string())),
    }
    Ok(())
}

/// Encode a homogeneous run of elements (vector or list body).
///
/// Fixed-size elements concatenate; variable-size elements get an offset
/// table, treating the run as a container of anonymous fields.
fn encode_elements(items: &[Value], elem: &Shape, path: &str, out: &mut Vec<u8>) -> Result<()> {
    if elem.classify()?.fixed_len().is_some() {
        for (i, item) in items.iter().enumerate() {
            encode_into(item, elem, &format!("{path}[{i}]"), out)?;
        }
        return Ok(());
    }

    let mut tails = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let mut buf = Vec::new();
        encode_into(item, elem, &format!("{path}[{i}]"), &mut buf)?;
        tails.push(buf);
    }

    let mut offset = items.len() * BYTES_PER_OFFSET;
    for tail in &tails {
        out.extend_from_slice(&offset_bytes(offset, path)?);
        offset += tail.len();
    }
    for tail in &tails {
        out.extend_from_slice(tail);
    }
    Ok(())
}

/// Encode a record: fixed section first (fixed fields verbatim, offset
/// placeholders for variable fields), then the variable section in field
/// declaration order.
fn encode_record(values: &[Value], fields: &[Field], path: &str, out: &mut Vec<u8>) -> Result<()> {
    let mut fixed_len = 0usize;
    for field in fields {
        fixed_len += field
            .shape
            .classify()?
            .fixed_len()
            .unwrap_or(BYTES_PER_OFFSET);
    }

    let mut tails = Vec::new();
    for (field, value) in fields.iter().zip(values) {
        if field.shape.is_fixed() {
            continue;
        }
        let mut buf = Vec::new();
        encode_into(value, &field.shape, &format!("{path}.{}", field.name), &mut buf)?;
        tails.push(buf);
    }

    let mut offset = fixed_len;
    let mut next_tail = tails.iter();
    for (field, value) in fields.iter().zip(values) {
        if field.shape.is_fixed() {
            encode_into(value, &field.shape, &format!("{path}.{}", field.name), out)?;
        } else {
            out.extend_from_slice(&offset_bytes(offset, path)?);
            // tails were collected in the same field order
            offset += next_tail.next().map(Vec::len).unwrap_or(0);
        }
    }
    for tail in &tails {
        out.extend_from_slice(tail);
    }
    Ok(())
}

fn offset_bytes(offset: usize, path: &str) -> Result<[u8; BYTES_PER_OFFSET]> {
    let offset = u32::try_from(offset).map_err(|_| CodecError::InvalidLength {
        path: path.to_string(),
        len: offset,
        reason: "encoding exceeds the 4-byte offset range".to_string(),
    })?;
    Ok(offset.to_le_bytes())
}
