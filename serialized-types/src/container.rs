//! Keyed view over one JSON object.
//!
//! Reads are typed and tolerant of absence: a missing key and an explicit
//! `null` are both "no value". Writes keep insertion order, so the order in
//! which fields are encoded is the order they appear on the wire.

use crate::{Error, Result, WireKey};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;

/// The keyed container a field slot decodes from and encodes into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedContainer {
    entries: Map<String, Value>,
}

impl KeyedContainer {
    /// Creates an empty container, ready to be encoded into.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already parsed JSON value. Only objects are keyed.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(Error::NotKeyed {
                found: kind_of(&other),
            }),
        }
    }

    /// Parses a JSON document whose root must be an object.
    pub fn parse(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parses a JSON document from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Reads the value under `key` as `T`.
    ///
    /// Returns `Ok(None)` when the key is missing or holds `null`, and
    /// [`Error::Mismatch`] when the stored value has a different shape.
    pub fn get_optional<T: DeserializeOwned>(&self, key: &WireKey) -> Result<Option<T>> {
        match self.entries.get(key.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => T::deserialize(raw).map(Some).map_err(|source| Error::Mismatch {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Writes `value` under `key` when present; `None` writes nothing.
    pub fn set_optional<T: Serialize + ?Sized>(
        &mut self,
        key: WireKey,
        value: Option<&T>,
    ) -> Result<()> {
        match value {
            Some(value) => self.set_required(key, value),
            None => Ok(()),
        }
    }

    /// Writes `value` under `key`, replacing any previous entry.
    pub fn set_required<T: Serialize + ?Sized>(&mut self, key: WireKey, value: &T) -> Result<()> {
        let raw = serde_json::to_value(value).map_err(|source| Error::Mismatch {
            key: key.to_string(),
            source,
        })?;
        self.entries.insert(key.into_string(), raw);
        Ok(())
    }

    /// Returns the untyped value under `key`, if any.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Unwraps into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.entries)?)
    }
}

impl FromStr for KeyedContainer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Value> for KeyedContainer {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<KeyedContainer> for Value {
    fn from(container: KeyedContainer) -> Self {
        container.into_value()
    }
}

impl Serialize for KeyedContainer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
