//! Shape descriptors and the type classifier.
//!
//! A [`Shape`] is a closed, recursive description of an encodable type:
//! basic scalars, fixed-size vectors, variable-size lists, and records.
//! Shapes are built once per concrete type and dispatched on by tag; there
//! is no runtime introspection. Classification ([`Shape::classify`]) decides
//! the encoding category and, for fixed categories, the exact encoded byte
//! length.

use std::fmt;

use crate::error::{CodecError, Result};

/// Supported unsigned integer widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UintWidth {
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
}

impl UintWidth {
    /// Encoded byte length of this width.
    pub const fn byte_len(self) -> usize {
        match self {
            UintWidth::U8 => 1,
            UintWidth::U16 => 2,
            UintWidth::U32 => 4,
            UintWidth::U64 => 8,
            UintWidth::U128 => 16,
            UintWidth::U256 => 32,
        }
    }

    /// Bit width.
    pub const fn bits(self) -> usize {
        self.byte_len() * 8
    }

    /// Look up a width by bit count.
    ///
    /// This is the doorway where foreign integer widths surface as
    /// [`CodecError::UnsupportedShape`].
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            8 => Ok(UintWidth::U8),
            16 => Ok(UintWidth::U16),
            32 => Ok(UintWidth::U32),
            64 => Ok(UintWidth::U64),
            128 => Ok(UintWidth::U128),
            256 => Ok(UintWidth::U256),
            other => Err(CodecError::UnsupportedShape(format!(
                "uint{other} is not a supported integer width"
            ))),
        }
    }
}

impl fmt::Display for UintWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uint{}", self.bits())
    }
}

/// A named record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub shape: Shape,
}

impl Field {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// A shape descriptor.
///
/// Signed integers, floats, maps, and unions are unrepresentable: the enum
/// is closed over exactly the supported set. Bitvectors, bitlists, and
/// unions are extension points, not variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Single byte, 0x00 or 0x01.
    Bool,
    /// Little-endian unsigned integer of fixed width.
    Uint(UintWidth),
    /// Exactly `len` elements of one shape.
    Vector { elem: Box<Shape>, len: usize },
    /// 0..n elements of one shape; the count lives in the value.
    List { elem: Box<Shape> },
    /// Ordered, named, heterogeneous fields. Declaration order is
    /// significant to both encoding and Merkleization.
    Record { fields: Vec<Field> },
}

/// The encoding category of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Basic scalar with a fixed byte width.
    Basic(usize),
    /// Composite whose encoded length is determined by the shape alone.
    FixedComposite(usize),
    /// Composite whose encoded length depends on runtime content.
    VariableComposite,
}

impl Kind {
    /// The statically known encoded length, if there is one.
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            Kind::Basic(n) | Kind::FixedComposite(n) => Some(n),
            Kind::VariableComposite => None,
        }
    }
}

impl Shape {
    /// Shorthand for a uint shape by bit width.
    pub fn uint(bits: usize) -> Result<Self> {
        Ok(Shape::Uint(UintWidth::from_bits(bits)?))
    }

    /// A vector of `len` elements.
    pub fn vector(elem: Shape, len: usize) -> Self {
        Shape::Vector {
            elem: Box::new(elem),
            len,
        }
    }

    /// A list of elements of one shape.
    pub fn list(elem: Shape) -> Self {
        Shape::List {
            elem: Box::new(elem),
        }
    }

    /// A record with the given fields, in declaration order.
    pub fn record(fields: Vec<Field>) -> Self {
        Shape::Record { fields }
    }

    /// Classify this shape: basic, fixed composite (with its exact encoded
    /// length), or variable composite.
    ///
    /// Fails with [`CodecError::UnsupportedShape`] for degenerate shapes:
    /// zero-length vectors and empty records, whose encodings would be
    /// zero-length and ambiguous.
    pub fn classify(&self) -> Result<Kind> {
        match self {
            Shape::Bool => Ok(Kind::Basic(1)),
            Shape::Uint(w) => Ok(Kind::Basic(w.byte_len())),
            Shape::Vector { elem, len } => {
                if *len == 0 {
                    return Err(CodecError::UnsupportedShape(
                        "zero-length vector".to_string(),
                    ));
                }
                match elem.classify()? {
                    Kind::Basic(n) | Kind::FixedComposite(n) => Ok(Kind::FixedComposite(len * n)),
                    Kind::VariableComposite => Ok(Kind::VariableComposite),
                }
            }
            Shape::List { elem } => {
                // Element shape must itself be well formed.
                elem.classify()?;
                Ok(Kind::VariableComposite)
            }
            Shape::Record { fields } => {
                if fields.is_empty() {
                    return Err(CodecError::UnsupportedShape("empty record".to_string()));
                }
                let mut total = 0usize;
                let mut fixed = true;
                for field in fields {
                    match field.shape.classify()? {
                        Kind::Basic(n) | Kind::FixedComposite(n) => total += n,
                        Kind::VariableComposite => fixed = false,
                    }
                }
                if fixed {
                    Ok(Kind::FixedComposite(total))
                } else {
                    Ok(Kind::VariableComposite)
                }
            }
        }
    }

    /// The statically known encoded length, if the shape is fixed-size.
    pub fn fixed_len(&self) -> Option<usize> {
        self.classify().ok().and_then(Kind::fixed_len)
    }

    /// Whether the encoded length is determined by the shape alone.
    pub fn is_fixed(&self) -> bool {
        !matches!(self.classify(), Ok(Kind::VariableComposite) | Err(_))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bool => write!(f, "bool"),
            Shape::Uint(w) => write!(f, "{w}"),
            Shape::Vector { elem, len } => write!(f, "vector[{elem}, {len}]"),
            Shape::List { elem } => write!(f, "list[{elem}]"),
            Shape::Record { fields } => {
                write!(f, "record{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.shape)?;
                }
                write!(f, "}}")
            }
        }
    }
}
