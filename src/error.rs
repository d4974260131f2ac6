use thiserror::Error;

use crate::store::ValidationErrors;

/// Failures of a [`ListResourceStore`](crate::store::ListResourceStore) operation.
///
/// None of these leave the collection modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// One or more required fields were blank or out of bounds.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// No record with this id is held by the store.
    #[error("no {kind} with id `{id}`")]
    NotFound { kind: &'static str, id: String },

    /// Injected initial data reused an id.
    #[error("duplicate {kind} id `{id}` in initial data")]
    DuplicateId { kind: &'static str, id: String },

    /// Injected initial data held a record that `create` would have refused.
    #[error("invalid {kind} `{id}` in initial data: {errors}")]
    InvalidSeed {
        kind: &'static str,
        id: String,
        errors: ValidationErrors,
    },
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Validation(errors)
    }
}

/// Failures while loading a JSON seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
