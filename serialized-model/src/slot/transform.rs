use super::{DecodeField, EncodeField, SlotKeys};
use crate::error::EncodeError;
use crate::transform::Transformable;
use serialized_types::KeyedContainer;
use std::fmt;
use std::marker::PhantomData;

/// An optional field converted through a [`Transformable`] on both directions.
///
/// A value found at either key goes through `X::from_wire(Some(v))` and the
/// result is stored even when it is `None` (the input was there but did not
/// convert). When neither key resolves the transform is still asked, with
/// `None`, and only a `Some` answer replaces the current value.
pub struct TransformSlot<X: Transformable> {
    keys: SlotKeys,
    value: Option<X::To>,
    _transform: PhantomData<fn() -> X>,
}

impl<X: Transformable> TransformSlot<X> {
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

    pub fn get(&self) -> Option<&X::To> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut X::To> {
        self.value.as_mut()
    }

    pub fn set(&mut self, value: Option<X::To>) {
        self.value = value;
    }

    pub fn take(&mut self) -> Option<X::To> {
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

impl<X: Transformable> Default for TransformSlot<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: Transformable> Clone for TransformSlot<X>
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

impl<X: Transformable> fmt::Debug for TransformSlot<X>
where
    X::To: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformSlot")
            .field("keys", &self.keys)
            .field("value", &self.value)
            .finish()
    }
}

impl<X: Transformable> DecodeField for TransformSlot<X> {
    fn decode_field(&mut self, container: &KeyedContainer, field_name: &str) {
        match self.keys.resolve::<X::From>(container, field_name).into_value() {
            Some(raw) => self.value = X::from_wire(Some(raw)),
            None => {
                if let Some(value) = X::from_wire(None) {
                    self.value = Some(value);
                }
            }
        }
    }

    fn is_unset(&self) -> bool {
        self.value.is_none()
    }
}

impl<X: Transformable> EncodeField for TransformSlot<X> {
    fn encode_field(
        &self,
        container: &mut KeyedContainer,
        field_name: &str,
    ) -> Result<(), EncodeError> {
        let wire = X::to_wire(self.value.as_ref());
        container.set_optional(self.keys.primary(field_name), wire.as_ref())?;
        Ok(())
    }
}
