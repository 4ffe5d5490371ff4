// Thu Oct 15 2026 - Alex

use crate::structure::{compute_layout, PackingPolicy, StructSchema, StructureLayout};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Memoizes layouts per (schema, policy). Keyed on the whole schema, so two
/// schemas sharing a name never share a layout.
pub struct StructureCache {
    cache: RwLock<HashMap<StructSchema, HashMap<PackingPolicy, Arc<StructureLayout>>>>,
}

impl StructureCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, schema: &StructSchema, policy: PackingPolicy) -> Option<Arc<StructureLayout>> {
        self.cache
            .read()
            .get(schema)
            .and_then(|layouts| layouts.get(&policy))
            .cloned()
    }

    pub fn get_or_compute(&self, schema: &StructSchema, policy: PackingPolicy) -> Arc<StructureLayout> {
        if let Some(layout) = self.get(schema, policy) {
            return layout;
        }
        let layout = Arc::new(compute_layout(schema, policy));
        self.cache
            .write()
            .entry(schema.clone())
            .or_default()
            .entry(policy)
            .or_insert(layout)
            .clone()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    /// Number of cached layouts across all schemas and policies.
    pub fn size(&self) -> usize {
        self.cache.read().values().map(HashMap::len).sum()
    }
}

impl Default for StructureCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{FieldType, StructureBuilder};

    #[test]
    fn test_cache_reuses_layouts() {
        let cache = StructureCache::new();
        let schema = StructureBuilder::new("Light")
            .add_field("color", FieldType::Vector3)
            .build();

        let first = cache.get_or_compute(&schema, PackingPolicy::DeviceVector);
        let second = cache.get_or_compute(&schema, PackingPolicy::DeviceVector);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.size(), 1);

        cache.get_or_compute(&schema, PackingPolicy::Natural);
        assert_eq!(cache.size(), 2);

        cache.clear();
        assert!(cache.get(&schema, PackingPolicy::Natural).is_none());
    }

    #[test]
    fn test_same_name_different_fields_are_cached_apart() {
        let cache = StructureCache::new();
        let small = StructureBuilder::new("Light")
            .add_field("scale", FieldType::Float)
            .build();
        let large = StructureBuilder::new("Light")
            .add_field("scale", FieldType::Float)
            .add_field("color", FieldType::Vector3)
            .build();

        assert_eq!(cache.get_or_compute(&small, PackingPolicy::DeviceVector).size(), 4);
        assert!(cache.get(&large, PackingPolicy::DeviceVector).is_none());
        assert_eq!(cache.get_or_compute(&large, PackingPolicy::DeviceVector).size(), 32);
        assert_eq!(cache.size(), 2);
    }
}
