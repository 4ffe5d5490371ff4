// Thu Oct 15 2026 - Alex

use crate::structure::{StructSchema, StructureError, StructureResult};
use indexmap::IndexMap;
use std::sync::Arc;

/// Owns every shared struct schema. Filled once at startup, read-only after.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, Arc<StructSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores `schema`, returning the shared handle used to nest
    /// it in later schemas. Nested schemas must be registered first.
    pub fn register(&mut self, schema: StructSchema) -> StructureResult<Arc<StructSchema>> {
        if self.schemas.contains_key(schema.name()) {
            return Err(StructureError::DuplicateSchema(schema.name().to_string()));
        }
        schema.validate()?;

        for nested in schema.nested_schemas() {
            match self.schemas.get(nested.name()) {
                Some(registered) if registered.as_ref() == nested => {}
                _ => {
                    return Err(StructureError::invalid_schema(
                        schema.name(),
                        format!("nested struct {} is not registered", nested.name()),
                    ))
                }
            }
        }

        log::debug!("Registered schema {} ({} fields)", schema.name(), schema.fields().len());
        let schema = Arc::new(schema);
        self.schemas.insert(schema.name().to_string(), Arc::clone(&schema));
        Ok(schema)
    }

    pub fn get(&self, name: &str) -> StructureResult<&Arc<StructSchema>> {
        self.schemas
            .get(name)
            .ok_or_else(|| StructureError::UnknownSchema(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Schemas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StructSchema> {
        self.schemas.values().map(|s| s.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{FieldType, StructureBuilder};

    fn light() -> StructSchema {
        StructureBuilder::new("Light")
            .add_field("color", FieldType::Vector3)
            .build()
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = SchemaRegistry::new();
        registry.register(light()).unwrap();
        let err = registry.register(light()).unwrap_err();
        assert!(matches!(err, StructureError::DuplicateSchema(ref name) if name == "Light"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_lookup_fails() {
        let registry = SchemaRegistry::new();
        let err = registry.get("Missing").unwrap_err();
        assert!(matches!(err, StructureError::UnknownSchema(ref name) if name == "Missing"));
    }

    #[test]
    fn test_invalid_schema_is_not_stored() {
        let mut registry = SchemaRegistry::new();
        let broken = StructureBuilder::new("Broken")
            .add_array("values", FieldType::Float, 0)
            .build();
        assert!(matches!(
            registry.register(broken),
            Err(StructureError::InvalidSchema { .. })
        ));
        assert!(!registry.contains("Broken"));
    }

    #[test]
    fn test_nested_schema_must_be_registered() {
        let mut registry = SchemaRegistry::new();
        let orphan = Arc::new(light());
        let scene = StructureBuilder::new("Scene")
            .add_field("light", FieldType::nested(&orphan))
            .build();
        assert!(matches!(
            registry.register(scene),
            Err(StructureError::InvalidSchema { .. })
        ));

        let light = registry.register(light()).unwrap();
        let scene = StructureBuilder::new("Scene")
            .add_array("lights", FieldType::nested(&light), 4)
            .build();
        registry.register(scene).unwrap();
        assert_eq!(registry.names(), vec!["Light", "Scene"]);
    }
}
