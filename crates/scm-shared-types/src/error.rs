//! Validation error type shared by all schemas

use thiserror::Error;

pub type SharedResult<T> = Result<T, ValidationError>;

/// The single error kind raised by field-level and record-level validation.
///
/// Every variant carries the offending field path (nested sub-record paths
/// use `parent[index].child` notation), the parameters of the violated rule
/// and the rejected value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: value {value:?} does not match pattern {pattern}")]
    Pattern {
        field: String,
        pattern: &'static str,
        value: String,
    },

    #[error("{field}: value {value:?} exceeds maximum length {max}")]
    Length {
        field: String,
        max: usize,
        value: String,
    },

    #[error("{field}: value {value} outside allowed range {min}..={max}")]
    Range {
        field: String,
        min: u64,
        max: u64,
        value: u64,
    },

    #[error("{field}: missing required field")]
    Missing { field: String },

    #[error("{field}: unsupported value {value:?}")]
    Unsupported { field: String, value: String },

    #[error("{resource}: exactly one of folder, snippet or device must be set ({count} set)")]
    ContainerScope {
        resource: &'static str,
        count: usize,
    },

    #[error("{resource}: static ip entries and dhcp-client configuration are mutually exclusive")]
    AddressMode { resource: &'static str },
}
