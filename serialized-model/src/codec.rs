//! Configured entry points from bytes to serializable types and back.

use crate::error::{ModelError, ModelResult};
use crate::serializable::{Decoded, SerializableDecode, SerializableEncode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serialized_types::KeyedContainer;
use tracing::debug;

/// What a top-level decode does with required fields left unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredPolicy {
    #[default]
    /// Fail the decode with [`ModelError::MissingRequired`].
    Reject,
    /// Succeed and leave the unset fields in the decode report.
    Report,
}

/// Codec configuration, loadable from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub required: RequiredPolicy,
    /// Pretty-print encoded JSON.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            required: RequiredPolicy::Reject,
            pretty: false,
        }
    }
}

impl CodecConfig {
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json).map_err(ModelError::Config)
    }
}

/// Decodes and encodes serializable types under a [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn decode_str<T: SerializableDecode>(&self, json: &str) -> ModelResult<Decoded<T>> {
        self.finish(T::decode_container(&KeyedContainer::parse(json)?))
    }

    pub fn decode_slice<T: SerializableDecode>(&self, bytes: &[u8]) -> ModelResult<Decoded<T>> {
        self.finish(T::decode_container(&KeyedContainer::from_slice(bytes)?))
    }

    pub fn decode_value<T: SerializableDecode>(&self, value: Value) -> ModelResult<Decoded<T>> {
        self.finish(T::decode_container(&KeyedContainer::from_value(value)?))
    }

    pub fn encode_string<T: SerializableEncode>(&self, value: &T) -> ModelResult<String> {
        let container = value.encode_container()?;
        let text = if self.config.pretty {
            container.to_json_string_pretty()?
        } else {
            container.to_json_string()?
        };
        Ok(text)
    }

    pub fn encode_vec<T: SerializableEncode>(&self, value: &T) -> ModelResult<Vec<u8>> {
        Ok(self.encode_string(value)?.into_bytes())
    }

    fn finish<T>(&self, decoded: Decoded<T>) -> ModelResult<Decoded<T>> {
        match self.config.required {
            RequiredPolicy::Reject if !decoded.is_complete() => {
                debug!(
                    "rejecting decode with {} unset required field(s)",
                    decoded.report.unset_required().len()
                );
                Err(ModelError::MissingRequired {
                    fields: decoded.report.unset_required().to_vec(),
                })
            }
            _ => Ok(decoded),
        }
    }
}
