//! Error types for property store operations.

use std::fmt;

use propstore_value::{CodecError, TypeTag};
use thiserror::Error;

/// Errors from property store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No property is stored under the key.
    #[error("property not found: {0}")]
    NotFound(String),

    /// A property already exists and overwrite was not requested.
    #[error("property already exists: {0}")]
    AlreadyExists(String),

    /// The requested type disagrees with the stored type.
    #[error("property '{key}' is stored as {actual}, not {expected}")]
    InvalidType {
        key: String,
        expected: TypeTag,
        actual: TypeTag,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The stored text does not decode under the row's own type.
    #[error("stored value for '{key}' is unreadable: {source}")]
    Decode {
        key: String,
        #[source]
        source: CodecError,
    },

    /// The row itself is malformed (unknown type ordinal, missing value).
    #[error("corrupt property row '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

impl StoreError {
    pub(crate) fn corrupt(key: &str, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Collapses the error into the coarse status taxonomy.
    pub fn status(&self) -> Status {
        match self {
            StoreError::NotFound(_) => Status::NotFound,
            StoreError::AlreadyExists(_) => Status::AlreadyExists,
            StoreError::InvalidType { .. } => Status::InvalidType,
            StoreError::Sqlite(_) | StoreError::Decode { .. } | StoreError::Corrupt { .. } => {
                Status::UnknownError
            }
        }
    }

    /// Returns true if the key was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Outcome of a store operation, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    NotFound,
    AlreadyExists,
    InvalidType,
    UnknownError,
}

impl Status {
    /// Returns the status of an operation result.
    pub fn of<T>(result: &Result<T, StoreError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::NotFound => "not_found",
            Status::AlreadyExists => "already_exists",
            Status::InvalidType => "invalid_type",
            Status::UnknownError => "unknown_error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            StoreError::NotFound("k".into()).status(),
            Status::NotFound
        );
        assert_eq!(
            StoreError::AlreadyExists("k".into()).status(),
            Status::AlreadyExists
        );
        assert_eq!(
            StoreError::InvalidType {
                key: "k".into(),
                expected: TypeTag::String,
                actual: TypeTag::Int32,
            }
            .status(),
            Status::InvalidType
        );
        assert_eq!(
            StoreError::Sqlite(rusqlite::Error::InvalidQuery).status(),
            Status::UnknownError
        );
        assert_eq!(
            StoreError::corrupt("k", "bad").status(),
            Status::UnknownError
        );
    }

    #[test]
    fn test_status_of_result() {
        let ok: Result<(), StoreError> = Ok(());
        assert_eq!(Status::of(&ok), Status::Ok);
        assert!(Status::of(&ok).is_ok());

        let missing: Result<(), StoreError> = Err(StoreError::NotFound("k".into()));
        assert_eq!(Status::of(&missing), Status::NotFound);
        assert_eq!(Status::of(&missing).to_string(), "not_found");
    }

    #[test]
    fn test_invalid_type_message() {
        let err = StoreError::InvalidType {
            key: "cnt".into(),
            expected: TypeTag::String,
            actual: TypeTag::Int32,
        };
        assert_eq!(err.to_string(), "property 'cnt' is stored as int32, not string");
    }
}
