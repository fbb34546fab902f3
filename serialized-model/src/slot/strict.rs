use super::{DecodeField, EncodeField, SlotKeys};
use crate::error::{EncodeError, ModelError, ModelResult};
use crate::transform::StrictTransformable;
use serialized_types::KeyedContainer;
use std::fmt;
use std::marker::PhantomData;

/// A required field converted through a [`StrictTransformable`].
///
/// After a decode pass the slot always holds a value: the converted wire
/// input when one resolved, else the caller's default, else
/// `X::from_missing()`.
pub struct StrictTransformSlot<X: StrictTransformable> {
    keys: SlotKeys,
    value: Option<X::To>,
    _transform: PhantomData<fn() -> X>,
}

impl<X: StrictTransformable> StrictTransformSlot<X> {
    pub fn new() -> Self {
        Self {
            keys: SlotKeys::default(),
            value: None,
            _transform: PhantomData,
        }
    }

    pub fn keyed(key: impl Into<String>) -> Self {
        Self::new().key(key)
    }

    pub fn with_default(value: X::To) -> Self {
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
    pub fn default_value(mut self, value: X::To) -> Self {
        self.value = Some(value);
        self
    }

    /// Checked access to the value.
    pub fn get(&self) -> ModelResult<&X::To> {
        self.value.as_ref().ok_or_else(|| ModelError::RequiredUnset {
            key: self.keys.label(),
        })
    }

    pub fn value(&self) -> Option<&X::To> {
        self.value.as_ref()
    }

    pub fn set(&mut self, value: X::To) {
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
}

impl<X: StrictTransformable> Default for StrictTransformSlot<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: StrictTransformable> Clone for StrictTransformSlot<X>
where
    X::To: Clone,
{
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            value: self.value.clone(),
            _transform: PhantomData,
        }
    }
}

impl<X: StrictTransformable> fmt::Debug for StrictTransformSlot<X>
where
    X::To: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrictTransformSlot")
            .field("keys", &self.keys)
            .field("value", &self.value)
            .finish()
    }
}

impl<X: StrictTransformable> DecodeField for StrictTransformSlot<X> {
    fn decode_field(&mut self, container: &KeyedContainer, field_name: &str) {
        self.keys.remember_field(field_name);
        match self.keys.resolve::<X::From>(container, field_name).into_value() {
            Some(raw) => self.value = Some(X::from_wire(raw)),
            None if self.value.is_none() => self.value = Some(X::from_missing()),
            None => {}
        }
    }

    fn is_required(&self) -> bool {
        true
    }

    fn is_unset(&self) -> bool {
        self.value.is_none()
    }
}

impl<X: StrictTransformable> EncodeField for StrictTransformSlot<X> {
    fn encode_field(
        &self,
        container: &mut KeyedContainer,
        field_name: &str,
    ) -> Result<(), EncodeError> {
        let key = self.keys.primary(field_name);
        let Some(value) = &self.value else {
            return Err(EncodeError::RequiredUnset {
                key: key.into_string(),
            });
        };
        container.set_required(key, &X::to_wire(value))?;
        Ok(())
    }
}
