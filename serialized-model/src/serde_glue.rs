//! Bridges serializable types into serde so they nest inside other values.
//!
//! A slot holding a serializable type (or a `Vec` of them) is decoded by
//! serde's own recursive descent, which lands back here and runs the
//! orchestrator on the nested object. Nested decoding is lenient: unset
//! required fields of the inner object are logged at `debug` level and left
//! for its checked accessors to report.
//!
//! The [`serializable!`](crate::serializable) macro wires these up; types
//! with hand-written tables can do the same:
//!
//! ```ignore
//! impl serde::Serialize for Address {
//!     fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
//!         serialized_model::serde_glue::serialize(self, s)
//!     }
//! }
//! ```

use crate::serializable::{SerializableDecode, SerializableEncode};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use serialized_types::KeyedContainer;
use tracing::debug;

/// Serializes `value` as the keyed object its slots encode to.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: SerializableEncode,
    S: Serializer,
{
    let container = value.encode_container().map_err(S::Error::custom)?;
    container.serialize(serializer)
}

/// Deserializes a keyed object and decodes it into a default `T`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: SerializableDecode,
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let container = KeyedContainer::from_value(raw).map_err(D::Error::custom)?;
    let decoded = T::decode_container(&container);
    if !decoded.is_complete() {
        debug!(
            "nested {} left required field(s) unset: {}",
            std::any::type_name::<T>(),
            decoded
                .report
                .unset_required()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(decoded.into_inner())
}
