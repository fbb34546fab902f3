//! Error types for field encoding and whole-object codec calls.

use crate::orchestrator::UnsetField;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors a single field slot can raise while encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A required slot had no value to write.
    #[error("required field `{key}` has no value")]
    RequiredUnset { key: String },

    /// The container rejected the write.
    #[error(transparent)]
    Container(#[from] serialized_types::Error),
}

/// Errors surfaced at the object boundary.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The payload could not be read as a keyed container at all.
    #[error("container error: {0}")]
    Container(#[from] serialized_types::Error),

    /// A field of `type_name` failed to encode.
    #[error("failed to encode `{type_name}`: {source}")]
    Encode {
        type_name: &'static str,
        #[source]
        source: EncodeError,
    },

    /// Decode finished with required fields still unset.
    #[error("missing required fields: {}", format_unset(.fields))]
    MissingRequired { fields: Vec<UnsetField> },

    /// A checked accessor was called on an unset required slot.
    #[error("required field `{key}` is unset")]
    RequiredUnset { key: String },

    /// A codec configuration document could not be parsed.
    #[error("invalid codec config: {0}")]
    Config(#[source] serde_json::Error),
}

fn format_unset(fields: &[UnsetField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
