//! Codec error types.

use thiserror::Error;

/// Structural problems found in an externally supplied document.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Node at index {index} has an empty id")]
    EmptyNodeId { index: usize },

    #[error("Node id '{id}' appears more than once")]
    DuplicateNodeId { id: String },

    #[error("Node '{id}' has a non-finite coordinate")]
    NonFiniteCoordinate { id: String },
}

/// Errors that can occur when turning a link token or stored blob back into a
/// document. The caller's current document is never touched on failure.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Token does not decode to UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Payload is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Payload is missing the '{field}' field")]
    MissingField { field: &'static str },

    #[error("Payload does not match the document shape: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("Document failed validation: {}", format_violations(.0))]
    Invalid(Vec<ValidationError>),
}

/// Errors that can occur when serializing a document.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Document cannot be encoded: {}", format_violations(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
