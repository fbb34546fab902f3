//! Drives field slots across a type's whole descriptor chain.
//!
//! Fields are visited most-derived type first, then each ancestor toward
//! the root, in declaration order within a type. Decode order does not
//! affect the result since every slot resolves its own keys; encode order
//! is the order keys appear in the output.

use crate::descriptor::{DecodeFields, DecodeTable, EncodeFields};
use crate::error::{ModelError, ModelResult};
use serialized_types::KeyedContainer;
use std::fmt;
use tracing::{debug, warn};

/// A required slot that was still empty at the end of a decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsetField {
    pub type_name: &'static str,
    pub field: &'static str,
}

impl fmt::Display for UnsetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field)
    }
}

/// What a decode pass did, beyond the values it stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    visited: usize,
    unset: Vec<UnsetField>,
}

impl DecodeReport {
    /// Number of slots the pass visited across the chain.
    pub fn fields_visited(&self) -> usize {
        self.visited
    }

    /// Required slots left empty, in visit order.
    pub fn unset_required(&self) -> &[UnsetField] {
        &self.unset
    }

    /// True when every required slot holds a value.
    pub fn is_complete(&self) -> bool {
        self.unset.is_empty()
    }

    /// Turns unset required slots into [`ModelError::MissingRequired`].
    pub fn into_result(self) -> ModelResult<()> {
        if self.unset.is_empty() {
            Ok(())
        } else {
            Err(ModelError::MissingRequired { fields: self.unset })
        }
    }
}

/// Decodes every slot of `instance` from `container`.
///
/// Never fails: slots that do not resolve keep their current value, and
/// required slots left empty are listed in the returned report.
pub fn decode_fields(instance: &mut dyn DecodeFields, container: &KeyedContainer) -> DecodeReport {
    let mut report = DecodeReport::default();
    decode_level(instance.decode_table(), container, &mut report);

    if !report.is_complete() {
        warn!(
            "decode finished with {} unset required field(s): {}",
            report.unset.len(),
            report
                .unset
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    report
}

fn decode_level(table: DecodeTable<'_>, container: &KeyedContainer, report: &mut DecodeReport) {
    let (type_name, fields, ancestor) = table.into_parts();
    debug!("decoding {} field(s) of {}", fields.len(), type_name);

    for (field, slot) in fields {
        slot.decode_field(container, field);
        report.visited += 1;
        if slot.is_required() && slot.is_unset() {
            report.unset.push(UnsetField { type_name, field });
        }
    }

    if let Some(ancestor) = ancestor {
        decode_level(ancestor.decode_table(), container, report);
    }
}

/// Encodes every slot of `instance` into a fresh container.
pub fn encode_fields(instance: &dyn EncodeFields) -> ModelResult<KeyedContainer> {
    let mut container = KeyedContainer::new();
    encode_into(instance, &mut container)?;
    Ok(container)
}

/// Encodes every slot of `instance` into `container`.
///
/// Stops at the first slot that fails, typically a required slot with no
/// value.
pub fn encode_into(instance: &dyn EncodeFields, container: &mut KeyedContainer) -> ModelResult<()> {
    let mut level = Some(instance);
    while let Some(current) = level {
        let table = current.encode_table();
        debug!("encoding {} field(s) of {}", table.len(), table.type_name());

        for (field, slot) in table.fields() {
            slot.encode_field(container, field)
                .map_err(|source| ModelError::Encode {
                    type_name: table.type_name(),
                    source,
                })?;
        }
        level = table.ancestor_fields();
    }
    Ok(())
}
