use super::{DecodeField, EncodeField, SlotKeys};
use crate::error::{EncodeError, ModelError, ModelResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serialized_types::KeyedContainer;

/// A field that must hold a value once decoding is done.
///
/// Decoding resolves exactly like [`OptionalSlot`](super::OptionalSlot);
/// the difference is the contract afterwards. An unset required slot is
/// listed in the decode report, [`get`](RequiredSlot::get) returns an
/// error instead of a value, and encoding it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredSlot<T> {
    keys: SlotKeys,
    value: Option<T>,
}

impl<T> RequiredSlot<T> {
    pub fn new() -> Self {
        Self {
            keys: SlotKeys::default(),
            value: None,
        }
    }

    pub fn keyed(key: impl Into<String>) -> Self {
        Self::new().key(key)
    }

    pub fn with_default(value: T) -> Self {
        Self::new().default_value(value)
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.set_key(key);
        self
    }

    #[must_use]
    pub fn alternate_key(mut self, key: impl Into<String>) -> Self {
        self.keys.set_alternate_key(key);
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Checked access to the value.
    pub fn get(&self) -> ModelResult<&T> {
        self.value.as_ref().ok_or_else(|| ModelError::RequiredUnset {
            key: self.describe_key(),
        })
    }

    pub fn get_mut(&mut self) -> ModelResult<&mut T> {
        let key = self.describe_key();
        self.value
            .as_mut()
            .ok_or(ModelError::RequiredUnset { key })
    }

    /// The value, or `None` when the contract is currently violated.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.keys.key()
    }

    pub fn alternate_key_name(&self) -> Option<&str> {
        self.keys.alternate_key()
    }

    fn describe_key(&self) -> String {
        self.keys.label()
    }
}

impl<T> Default for RequiredSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> DecodeField for RequiredSlot<T> {
    fn decode_field(&mut self, container: &KeyedContainer, field_name: &str) {
        self.keys.remember_field(field_name);
        if let Some(value) = self.keys.resolve(container, field_name).into_value() {
            self.value = Some(value);
        }
    }

    fn is_required(&self) -> bool {
        true
    }

    fn is_unset(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: Serialize> EncodeField for RequiredSlot<T> {
    fn encode_field(
        &self,
        container: &mut KeyedContainer,
        field_name: &str,
    ) -> Result<(), EncodeError> {
        let key = self.keys.primary(field_name);
        match &self.value {
            Some(value) => container.set_required(key, value)?,
            None => {
                return Err(EncodeError::RequiredUnset {
                    key: key.into_string(),
                });
            }
        }
        Ok(())
    }
}
