//! Runtime values.
//!
//! A [`Value`] is plain immutable data mirroring the [`Shape`] enum. Values
//! carry no schema; conformance to a shape is checked during encoding.

use std::fmt;

/// A 256-bit unsigned integer, stored as 32 little-endian bytes.
///
/// The codec never does arithmetic on these; it only moves the bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct U256(pub [u8; 32]);

impl U256 {
    /// Create from raw little-endian bytes.
    pub const fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Widen a u64.
    pub fn from_u64(n: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&n.to_le_bytes());
        Self(bytes)
    }

    /// Get the raw little-endian bytes.
    pub const fn as_le_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string (little-endian byte order).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Zero.
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({}...)", &self.to_hex()[..16])
    }
}

impl From<[u8; 32]> for U256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<u64> for U256 {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

/// A runtime value, paired with a [`Shape`] at the codec boundary.
///
/// Composite variants hold their constituents in declaration order; a
/// `Record` value is positional, field names live in the shape.
///
/// [`Shape`]: crate::Shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    U256(U256),
    Vector(Vec<Value>),
    List(Vec<Value>),
    Record(Vec<Value>),
}

impl Value {
    /// Short label used in shape-mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::U8(_) => "uint8",
            Value::U16(_) => "uint16",
            Value::U32(_) => "uint32",
            Value::U64(_) => "uint64",
            Value::U128(_) => "uint128",
            Value::U256(_) => "uint256",
            Value::Vector(_) => "vector",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }

    /// A list of u64s, the workhorse of the test suites.
    pub fn u64_list(items: &[u64]) -> Self {
        Value::List(items.iter().copied().map(Value::U64).collect())
    }

    /// A vector of bytes.
    pub fn byte_vector(bytes: &[u8]) -> Self {
        Value::Vector(bytes.iter().copied().map(Value::U8).collect())
    }

    /// A list of bytes.
    pub fn byte_list(bytes: &[u8]) -> Self {
        Value::List(bytes.iter().copied().map(Value::U8).collect())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<u128> for Value {
    fn from(v: u128) -> Self {
        Value::U128(v)
    }
}

impl From<U256> for Value {
    fn from(v: U256) -> Self {
        Value::U256(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_from_u64() {
        let v = U256::from_u64(0x0102_0304);
        assert_eq!(v.as_le_bytes()[0], 0x04);
        assert_eq!(v.as_le_bytes()[1], 0x03);
        assert_eq!(v.as_le_bytes()[2], 0x02);
        assert_eq!(v.as_le_bytes()[3], 0x01);
        assert!(v.as_le_bytes()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_u256_debug_truncated() {
        let v = U256::from_u64(1);
        let debug = format!("{v:?}");
        assert!(debug.starts_with("U256(01000000"));
    }

    #[test]
    fn test_byte_helpers() {
        assert_eq!(
            Value::byte_list(&[9, 8]),
            Value::List(vec![Value::U8(9), Value::U8(8)])
        );
        assert_eq!(
            Value::u64_list(&[1]),
            Value::List(vec![Value::U64(1)])
        );
    }
}
