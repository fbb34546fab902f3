//! Dynamic keys into a keyed container.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A key into a [`KeyedContainer`](crate::KeyedContainer).
///
/// Built per access from a declared key override or a field name. Identity
/// is the string name alone: an index key compares equal to the named key
/// spelled with the same digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireKey {
    name: String,
    #[serde(skip)]
    index: Option<usize>,
}

impl WireKey {
    /// Creates a named key. The name must not be empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "wire key names must not be empty");
        Self { name, index: None }
    }

    /// Creates an index key whose name is the decimal form of `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self {
            name: index.to_string(),
            index: Some(index),
        }
    }

    /// Picks the explicit override when present, else the declaring field's name.
    #[must_use]
    pub fn resolve(explicit: Option<&str>, field_name: &str) -> Self {
        Self::new(explicit.unwrap_or(field_name))
    }

    /// Returns the string form of the key.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns the integer form, if the key was built from an index.
    pub fn as_index(&self) -> Option<usize> {
        self.index
    }

    pub fn into_string(self) -> String {
        self.name
    }
}

impl PartialEq for WireKey {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for WireKey {}

impl Hash for WireKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Borrow<str> for WireKey {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for WireKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for WireKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for WireKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
