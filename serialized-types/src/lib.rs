//! Wire-level value types for the serialized field codec.
//!
//! This crate defines the leaf types every field slot talks to:
//! - [`WireKey`]: the key a field is read from or written to
//! - [`KeyedContainer`]: the keyed view of one JSON object, with tolerant
//!   typed reads and typed writes
//!
//! Byte-level parsing and printing is left to `serde_json`; nothing here
//! knows about field slots or transforms.

mod container;
mod key;

pub use container::KeyedContainer;
pub use key::WireKey;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the keyed container.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The payload parsed, but its root is not a keyed object.
    #[error("expected a keyed object, found {found}")]
    NotKeyed { found: &'static str },

    /// The value stored under `key` does not have the requested shape.
    #[error("value at key `{key}` does not match the requested type: {source}")]
    Mismatch {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for per-key shape errors, which callers may treat as a miss.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Error::Mismatch { .. })
    }
}
