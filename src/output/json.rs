// Fri Oct 16 2026 - Alex

use crate::structure::{SerializableComparison, StructureComparison};
use serde_json::{json, to_string, to_string_pretty};

pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize(&self, comparisons: &[StructureComparison]) -> Result<String, serde_json::Error> {
        let structs: Vec<SerializableComparison> =
            comparisons.iter().map(SerializableComparison::from).collect();
        let divergent = structs.iter().filter(|s| !s.equivalent).count();

        let value = json!({
            "equivalent": divergent == 0,
            "divergent_structs": divergent,
            "structs": structs,
        });

        if self.pretty_print {
            to_string_pretty(&value)
        } else {
            to_string(&value)
        }
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{PackingPolicy, SchemaRegistry, StructureComparator};

    #[test]
    fn test_serialize_summary() {
        let registry = SchemaRegistry::builtin().unwrap();
        let comparisons = StructureComparator::new(PackingPolicy::Natural, PackingPolicy::DeviceVector)
            .compare_all(&registry);

        let text = JsonSerializer::new().with_pretty_print(false).serialize(&comparisons).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["equivalent"], false);
        assert_eq!(value["divergent_structs"], 4);
        assert_eq!(value["structs"].as_array().unwrap().len(), 5);
    }
}
