//! Error types for cp-store.

use std::path::PathBuf;

use cp_core::errors::CoreError;
use thiserror::Error;

/// Errors from reading or writing the persisted document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document is not valid JSON or lacks a required collection.
    #[error("Storage corrupt at {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// A record parsed as JSON but holds an unusable value.
    #[error("Invalid {collection} record {id}: {reason}")]
    InvalidRecord {
        collection: &'static str,
        id: String,
        reason: String,
    },

    /// An update targeted a record that is not in its collection.
    #[error("No {collection} record with id {id}")]
    RecordNotFound { collection: &'static str, id: String },

    /// Filesystem failure.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The temporary file could not be renamed over the target.
    #[error("Failed to replace document: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// How a caller should surface an error (e.g. as an HTTP status or exit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A referenced entity does not exist.
    NotFound,
    /// The input broke a business rule.
    BadInput,
    /// Storage or environment failure; not recoverable by the caller.
    Fatal,
}

/// Errors returned by `TutoringService`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Domain(CoreError::NotFound { .. })
            | Self::Store(StoreError::RecordNotFound { .. }) => ErrorClass::NotFound,
            Self::Domain(CoreError::Validation(_)) => ErrorClass::BadInput,
            Self::Domain(CoreError::Other(_)) | Self::Store(_) => ErrorClass::Fatal,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class(), ErrorClass::NotFound)
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.class(), ErrorClass::BadInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_classify() {
        let missing = ServiceError::from(CoreError::not_found("tutor", "tut-x"));
        assert_eq!(missing.class(), ErrorClass::NotFound);

        let invalid = ServiceError::from(CoreError::validation("hourly_rate must be greater than 0"));
        assert_eq!(invalid.class(), ErrorClass::BadInput);
    }

    #[test]
    fn repository_not_found_is_not_found_class() {
        let err = ServiceError::from(StoreError::RecordNotFound {
            collection: "lessons",
            id: "les-x".into(),
        });
        assert!(err.is_not_found());
    }

    #[test]
    fn corruption_is_fatal() {
        let err = ServiceError::from(StoreError::Corrupt {
            path: PathBuf::from("data/classpilot.json"),
            reason: "missing field `lessons`".into(),
        });
        assert_eq!(err.class(), ErrorClass::Fatal);
        assert!(err.to_string().contains("data/classpilot.json"));
    }
}
