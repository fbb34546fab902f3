//! Field slots: the per-field unit of decode/encode behavior.
//!
//! Every slot owns its current value plus a key configuration. Decoding a
//! slot never fails: a missing key and a value of the wrong shape are the
//! same outcome, and resolution cascades primary key → alternate key →
//! leave the value as it was.
//!
//! Which facets a slot exposes depends on its value type: a slot over `T`
//! implements [`DecodeField`] only when `T` is deserializable and
//! [`EncodeField`] only when `T` is serializable.

mod optional;
mod required;
mod strict;
mod transform;

pub use optional::OptionalSlot;
pub use required::RequiredSlot;
pub use strict::StrictTransformSlot;
pub use transform::TransformSlot;

use crate::error::EncodeError;
use serde::de::DeserializeOwned;
use serialized_types::{KeyedContainer, WireKey};
use tracing::trace;

/// Decode facet of a field slot.
pub trait DecodeField {
    /// Resolves this slot's value from `container`.
    ///
    /// `field_name` is the declared name, used when no key override is set.
    fn decode_field(&mut self, container: &KeyedContainer, field_name: &str);

    /// Whether an unset value is a contract violation for this slot.
    fn is_required(&self) -> bool {
        false
    }

    /// Whether the slot currently holds no value.
    fn is_unset(&self) -> bool;
}

/// Encode facet of a field slot.
pub trait EncodeField {
    /// Writes this slot's value into `container`. Never touches the alternate key.
    fn encode_field(&self, container: &mut KeyedContainer, field_name: &str)
    -> Result<(), EncodeError>;
}

/// Key configuration shared by every slot variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotKeys {
    key: Option<String>,
    alternate_key: Option<String>,
    field: Option<String>,
}

impl SlotKeys {
    pub fn new(key: Option<String>, alternate_key: Option<String>) -> Self {
        Self {
            key,
            alternate_key,
            field: None,
        }
    }

    /// The explicit primary key override, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn alternate_key(&self) -> Option<&str> {
        self.alternate_key.as_deref()
    }

    /// The key used for reads and writes of `field_name`.
    pub fn primary(&self, field_name: &str) -> WireKey {
        WireKey::resolve(self.key(), field_name)
    }

    pub fn alternate(&self) -> Option<WireKey> {
        self.alternate_key().map(WireKey::new)
    }

    /// Best available name for messages raised outside a decode/encode call.
    ///
    /// The primary key once the declared field name is known, else the
    /// alternate key.
    pub(crate) fn label(&self) -> String {
        self.key()
            .or(self.field.as_deref())
            .or(self.alternate_key())
            .unwrap_or("unkeyed")
            .to_string()
    }

    /// Records the declared field name a decode pass used for this slot.
    pub(crate) fn remember_field(&mut self, field_name: &str) {
        if self.field.as_deref() != Some(field_name) {
            self.field = Some(field_name.to_string());
        }
    }

    pub(crate) fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    pub(crate) fn set_alternate_key(&mut self, key: impl Into<String>) {
        self.alternate_key = Some(key.into());
    }

    /// Runs the primary → alternate lookup for one decode pass.
    pub fn resolve<T: DeserializeOwned>(
        &self,
        container: &KeyedContainer,
        field_name: &str,
    ) -> Resolution<T> {
        let primary = self.primary(field_name);
        if let Some(value) = lookup(container, &primary) {
            return Resolution::Primary(value);
        }
        match self.alternate() {
            Some(alternate) => {
                trace!("field `{field_name}`: `{primary}` missed, trying `{alternate}`");
                match lookup(container, &alternate) {
                    Some(value) => Resolution::Alternate(value),
                    None => Resolution::Unresolved,
                }
            }
            None => Resolution::Unresolved,
        }
    }
}

/// Outcome of resolving one slot against a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Primary(T),
    Alternate(T),
    Unresolved,
}

impl<T> Resolution<T> {
    /// The resolved value, regardless of which key produced it.
    pub fn into_value(self) -> Option<T> {
        match self {
            Resolution::Primary(value) | Resolution::Alternate(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

/// Tolerant single-key read: absence, `null` and shape mismatches are all `None`.
fn lookup<T: DeserializeOwned>(container: &KeyedContainer, key: &WireKey) -> Option<T> {
    match container.get_optional(key) {
        Ok(value) => value,
        Err(err) => {
            trace!("ignoring value at `{key}`: {err}");
            None
        }
    }
}
