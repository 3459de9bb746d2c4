//! Error type for schema construction and payload conversion

use thiserror::Error;

use scm_shared_types::ValidationError;

/// Errors surfaced by the schema layer.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("payload is not an object (found {0})")]
    Payload(&'static str),
}
