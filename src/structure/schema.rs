// Thu Oct 15 2026 - Alex

use crate::structure::{FieldSpec, FieldType, StructureError, StructureResult};
use std::collections::HashSet;
use std::fmt;

/// Backend-independent declaration of a shared struct: names, types, order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl StructSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Schemas referenced directly by this one, looking through arrays.
    pub fn nested_schemas(&self) -> impl Iterator<Item = &StructSchema> {
        self.fields.iter().filter_map(|f| match f.field_type().element() {
            FieldType::Struct(schema) => Some(schema.as_ref()),
            _ => None,
        })
    }

    /// Checks everything about the schema that does not need a registry.
    pub fn validate(&self) -> StructureResult<()> {
        if self.name.trim().is_empty() {
            return Err(StructureError::invalid_schema(&self.name, "struct name is empty"));
        }
        if self.fields.is_empty() {
            return Err(StructureError::invalid_schema(&self.name, "struct has no fields"));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name().trim().is_empty() {
                return Err(StructureError::invalid_schema(&self.name, "field name is empty"));
            }
            if !seen.insert(field.name()) {
                return Err(StructureError::invalid_schema(
                    &self.name,
                    format!("duplicate field {}", field.name()),
                ));
            }
            if field.repeat() == Some(0) {
                return Err(StructureError::invalid_schema(
                    &self.name,
                    format!("field {} has a repeat count of 0", field.name()),
                ));
            }
            check_array_lengths(&self.name, field.name(), field.field_type())?;
        }
        Ok(())
    }
}

fn check_array_lengths(schema: &str, field: &str, ty: &FieldType) -> StructureResult<()> {
    match ty {
        FieldType::Array(_, 0) => Err(StructureError::invalid_schema(
            schema,
            format!("field {} is an array of length 0", field),
        )),
        FieldType::Array(element, _) => check_array_lengths(schema, field, element),
        _ => Ok(()),
    }
}

impl fmt::Display for StructSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "struct {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "    {};", field)?;
        }
        write!(f, "}}")
    }
}
