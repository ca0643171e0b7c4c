//! Groups of fields extracted from one document

use super::engine::Engine;
use super::field::Field;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Delimiter used by the `fields` engine when none is given
pub const DEFAULT_DELIMITER: &str = "\t";

/// A named set of fields plus how to split raw records into them.
///
/// Groups are built through [`Group::new`] and [`Group::add_field`] (or
/// [`Group::push_field`]), which keep names and indices unique. Groups read back from a
/// resource document are checked with [`Group::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    #[serde(rename = "Delim", default, skip_serializing_if = "String::is_empty")]
    delimiter: String,
    #[serde(default, skip_serializing_if = "Engine::is_default")]
    engine: Engine,
    name: String,
    #[serde(rename = "Subs", default)]
    fields: Vec<Field>,
}

impl Group {
    /// Create an empty group.
    ///
    /// The engine defaults to `fields`. A `fields` group without a delimiter gets a tab; the
    /// delimiter of other engines is left as given.
    pub fn new(
        name: impl Into<String>,
        engine: Option<Engine>,
        delimiter: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        let engine = engine.unwrap_or_default();
        let delimiter = match delimiter {
            Some(delimiter) if !delimiter.is_empty() => delimiter.to_string(),
            _ if engine.uses_delimiter() => DEFAULT_DELIMITER.to_string(),
            _ => String::new(),
        };
        Ok(Group {
            delimiter,
            engine,
            name,
            fields: Vec::new(),
        })
    }

    /// Add a name to index mapping.
    ///
    /// The type tag is stored but not checked against anything.
    pub fn add_field(
        &mut self,
        name: &str,
        data_type: &str,
        index: i64,
    ) -> Result<(), ValidationError> {
        let index = usize::try_from(index).map_err(|_| ValidationError::NegativeIndex(index))?;
        self.push_field(Field::new(name, data_type, index))
    }

    /// Add an already built field, applying the same checks as [`Group::add_field`]
    pub fn push_field(&mut self, field: Field) -> Result<(), ValidationError> {
        if field.name.is_empty() {
            return Err(ValidationError::EmptyFieldName);
        }
        if self.fields.iter().any(|f| f.name == field.name) {
            return Err(ValidationError::DuplicateField(field.name));
        }
        if self.fields.iter().any(|f| f.index == field.index) {
            return Err(ValidationError::DuplicateIndex {
                name: field.name,
                index: field.index,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Check every group invariant: a name, at least one field, unique field names and indices
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        if self.fields.is_empty() {
            return Err(ValidationError::EmptyGroup(self.name.clone()));
        }
        let mut names = HashSet::new();
        let mut indices = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(ValidationError::EmptyFieldName);
            }
            if !names.insert(field.name.as_str()) {
                return Err(ValidationError::DuplicateField(field.name.clone()));
            }
            if !indices.insert(field.index) {
                return Err(ValidationError::DuplicateIndex {
                    name: field.name.clone(),
                    index: field.index,
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
