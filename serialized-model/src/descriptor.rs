//! Field descriptor tables.
//!
//! A serializable type lists its own slots, in declaration order, and links
//! to the table of the type it extends. Extension is plain composition: the
//! derived struct owns its base as a field and hands it out as the ancestor.
//! The orchestrator walks the tables from the most-derived type to the root.

use crate::slot::{DecodeField, EncodeField};

/// One level of a type's decodable fields.
pub struct DecodeTable<'a> {
    type_name: &'static str,
    fields: Vec<(&'static str, &'a mut dyn DecodeField)>,
    ancestor: Option<&'a mut dyn DecodeFields>,
}

impl<'a> DecodeTable<'a> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
            ancestor: None,
        }
    }

    /// Appends a slot declared as `name`.
    #[must_use]
    pub fn field(mut self, name: &'static str, slot: &'a mut dyn DecodeField) -> Self {
        self.fields.push((name, slot));
        self
    }

    /// Links the table of the extended type.
    #[must_use]
    pub fn ancestor(mut self, ancestor: &'a mut dyn DecodeFields) -> Self {
        self.ancestor = Some(ancestor);
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        &'static str,
        Vec<(&'static str, &'a mut dyn DecodeField)>,
        Option<&'a mut dyn DecodeFields>,
    ) {
        (self.type_name, self.fields, self.ancestor)
    }
}

/// One level of a type's encodable fields.
pub struct EncodeTable<'a> {
    type_name: &'static str,
    fields: Vec<(&'static str, &'a dyn EncodeField)>,
    ancestor: Option<&'a dyn EncodeFields>,
}

impl<'a> EncodeTable<'a> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
            ancestor: None,
        }
    }

    #[must_use]
    pub fn field(mut self, name: &'static str, slot: &'a dyn EncodeField) -> Self {
        self.fields.push((name, slot));
        self
    }

    #[must_use]
    pub fn ancestor(mut self, ancestor: &'a dyn EncodeFields) -> Self {
        self.ancestor = Some(ancestor);
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub(crate) fn fields(&self) -> &[(&'static str, &'a dyn EncodeField)] {
        &self.fields
    }

    pub(crate) fn ancestor_fields(&self) -> Option<&'a dyn EncodeFields> {
        self.ancestor
    }
}

/// A type whose slots can be decoded by the orchestrator.
pub trait DecodeFields {
    fn decode_table(&mut self) -> DecodeTable<'_>;
}

/// A type whose slots can be encoded by the orchestrator.
pub trait EncodeFields {
    fn encode_table(&self) -> EncodeTable<'_>;
}

/// Declared field names across the whole chain, most-derived type first.
pub fn field_names(instance: &dyn EncodeFields) -> Vec<&'static str> {
    let mut names = Vec::new();
    let mut level = Some(instance);
    while let Some(current) = level {
        let table = current.encode_table();
        names.extend(table.field_names());
        level = table.ancestor_fields();
    }
    names
}
