//! Cross-cutting error types for ClassPilot.
//!
//! Storage errors (`StoreError`) and the service-level union are defined in
//! `cp-store`. Only the domain kinds live here.

use thiserror::Error;

/// Business-rule errors raised by the domain and service layers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Well-typed input violated a business rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors (e.g. the OS random source failing).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a `NotFound` error.
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Shorthand for a `Validation` error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
