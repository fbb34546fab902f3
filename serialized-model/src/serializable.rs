//! Opt-in traits that give a type orchestrated decode and encode.

use crate::descriptor::{DecodeFields, EncodeFields};
use crate::error::ModelResult;
use crate::orchestrator::{self, DecodeReport};
use serde_json::Value;
use serialized_types::KeyedContainer;

/// A decoded value together with the report of the pass that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub report: DecodeReport,
}

impl<T> Decoded<T> {
    /// The value, whether or not required fields were left unset.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The value, or [`ModelError::MissingRequired`](crate::ModelError::MissingRequired)
    /// listing every required field left unset.
    pub fn into_checked(self) -> ModelResult<T> {
        self.report.into_result()?;
        Ok(self.value)
    }

    pub fn is_complete(&self) -> bool {
        self.report.is_complete()
    }
}

/// A type built by decoding its slots into a default instance.
///
/// `Default` plays the role of the blank constructor: it creates every slot
/// with its keys and default values before decoding overwrites them.
pub trait SerializableDecode: DecodeFields + Default {
    /// Decodes from an already keyed container. Never fails.
    fn decode_container(container: &KeyedContainer) -> Decoded<Self> {
        let mut value = Self::default();
        let report = orchestrator::decode_fields(&mut value, container);
        Decoded { value, report }
    }

    /// Fails only when `value` is not a JSON object.
    fn from_json_value(value: Value) -> ModelResult<Decoded<Self>> {
        let container = KeyedContainer::from_value(value)?;
        Ok(Self::decode_container(&container))
    }

    fn from_json_str(json: &str) -> ModelResult<Decoded<Self>> {
        let container = KeyedContainer::parse(json)?;
        Ok(Self::decode_container(&container))
    }

    fn from_json_slice(bytes: &[u8]) -> ModelResult<Decoded<Self>> {
        let container = KeyedContainer::from_slice(bytes)?;
        Ok(Self::decode_container(&container))
    }
}

/// A type encoded by writing each of its slots into one container.
pub trait SerializableEncode: EncodeFields + Sized {
    fn encode_container(&self) -> ModelResult<KeyedContainer> {
        orchestrator::encode_fields(self)
    }

    fn to_json_value(&self) -> ModelResult<Value> {
        Ok(self.encode_container()?.into_value())
    }

    fn to_json_string(&self) -> ModelResult<String> {
        Ok(self.encode_container()?.to_json_string()?)
    }
}

/// Types that decode and encode.
pub trait Serializable: SerializableDecode + SerializableEncode {}

impl<T: SerializableDecode + SerializableEncode> Serializable for T {}
