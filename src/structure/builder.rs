// Thu Oct 15 2026 - Alex

use crate::structure::{FieldSpec, FieldType, StructSchema};

pub struct StructureBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl StructureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn add_field(mut self, name: &str, ty: FieldType) -> Self {
        self.fields.push(FieldSpec::new(name, ty));
        self
    }

    pub fn add_array(mut self, name: &str, ty: FieldType, count: u32) -> Self {
        self.fields.push(FieldSpec::repeated(name, ty, count));
        self
    }

    /// Adds one field of type `ty` per name, in order.
    pub fn add_fields(mut self, names: &[&str], ty: FieldType) -> Self {
        for name in names {
            self.fields.push(FieldSpec::new(*name, ty.clone()));
        }
        self
    }

    pub fn build(self) -> StructSchema {
        StructSchema::new(self.name, self.fields)
    }
}
