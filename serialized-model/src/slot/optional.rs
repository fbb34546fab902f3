use super::{DecodeField, EncodeField, SlotKeys};
use crate::error::EncodeError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serialized_types::KeyedContainer;

/// A field whose absence is never an error.
///
/// Decoding keeps the current value (usually the caller's default) when
/// neither key resolves; encoding writes nothing when the slot is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalSlot<T> {
    keys: SlotKeys,
    value: Option<T>,
}

impl<T> OptionalSlot<T> {
    /// An empty slot keyed by its field name.
    pub fn new() -> Self {
        Self {
            keys: SlotKeys::default(),
            value: None,
        }
    }

    /// An empty slot read from and written to `key`.
    pub fn keyed(key: impl Into<String>) -> Self {
        Self::new().key(key)
    }

    /// A slot pre-loaded with `value`.
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

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn take(&mut self) -> Option<T> {
        self.value.take()
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
}

impl<T> Default for OptionalSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> DecodeField for OptionalSlot<T> {
    fn decode_field(&mut self, container: &KeyedContainer, field_name: &str) {
        if let Some(value) = self.keys.resolve(container, field_name).into_value() {
            self.value = Some(value);
        }
    }

    fn is_unset(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: Serialize> EncodeField for OptionalSlot<T> {
    fn encode_field(
        &self,
        container: &mut KeyedContainer,
        field_name: &str,
    ) -> Result<(), EncodeError> {
        container.set_optional(self.keys.primary(field_name), self.value.as_ref())?;
        Ok(())
    }
}
