//! Error types for value decoding.

use thiserror::Error;

use crate::TypeTag;

/// Errors that can occur when decoding stored text or parsing type names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The text does not parse under the requested type.
    #[error("cannot parse {tag} value: {reason}")]
    Parse { tag: TypeTag, reason: String },

    /// The type name is not one of the supported tags.
    #[error("unknown type '{name}' (expected string, int32, int64, double, bool or blob)")]
    UnknownType { name: String },
}

impl CodecError {
    pub(crate) fn parse(tag: TypeTag, reason: impl ToString) -> Self {
        Self::Parse {
            tag,
            reason: reason.to_string(),
        }
    }

    /// Returns the type the text was being decoded as, if any.
    pub fn tag(&self) -> Option<TypeTag> {
        match self {
            CodecError::Parse { tag, .. } => Some(*tag),
            CodecError::UnknownType { .. } => None,
        }
    }
}
