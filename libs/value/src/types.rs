//! Type tags and the value sum type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Declared type of a stored property.
///
/// The discriminants are persisted as the `type` column of the property
/// table and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// UTF-8 text.
    String = 0,
    /// 32-bit signed integer.
    Int32 = 1,
    /// 64-bit signed integer.
    Int64 = 2,
    /// 64-bit float.
    Double = 3,
    /// Boolean.
    Bool = 4,
    /// Raw bytes.
    Blob = 5,
}

impl TypeTag {
    /// Every tag, in ordinal order.
    pub const ALL: [TypeTag; 6] = [
        TypeTag::String,
        TypeTag::Int32,
        TypeTag::Int64,
        TypeTag::Double,
        TypeTag::Bool,
        TypeTag::Blob,
    ];

    /// Returns the persisted ordinal.
    #[must_use]
    pub const fn ordinal(self) -> i64 {
        self as i64
    }

    /// Maps a persisted ordinal back to a tag.
    #[must_use]
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.ordinal() == ordinal)
    }

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Blob => "blob",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == name)
            .ok_or_else(|| CodecError::UnknownType {
                name: s.to_string(),
            })
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Bool(bool),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the tag this value is stored under.
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::String(_) => TypeTag::String,
            Value::Int32(_) => TypeTag::Int32,
            Value::Int64(_) => TypeTag::Int64,
            Value::Double(_) => TypeTag::Double,
            Value::Bool(_) => TypeTag::Bool,
            Value::Blob(_) => TypeTag::Blob,
        }
    }

    /// Parses user-supplied text as a value of the given type.
    ///
    /// Accepts exactly the storage text form, so blobs are given as base64.
    pub fn parse(tag: TypeTag, text: &str) -> Result<Self, CodecError> {
        crate::decode(text, tag)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => f.write_str(&crate::encode(other)),
        }
    }
}

/// Rust types that map one-to-one onto a [`TypeTag`].
pub trait PropertyType: Sized {
    /// The tag values of this type are stored under.
    const TAG: TypeTag;

    /// Wraps `self` in a [`Value`].
    fn into_value(self) -> Value;

    /// Unwraps a [`Value`], returning `None` if it holds another type.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! property_type {
    ($ty:ty, $variant:ident) => {
        impl PropertyType for $ty {
            const TAG: TypeTag = TypeTag::$variant;

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(v)
            }
        }
    };
}

property_type!(String, String);
property_type!(i32, Int32);
property_type!(i64, Int64);
property_type!(f64, Double);
property_type!(bool, Bool);
property_type!(Vec<u8>, Blob);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}
