// Fri Oct 16 2026 - Alex

use crate::structure::{Divergence, StructureComparison, StructureLayout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableLayout {
    name: String,
    policy: String,
    fields: Vec<SerializableField>,
    data_size: u64,
    size: u64,
    alignment: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableField {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    offset: u64,
    size: u64,
    alignment: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    nested: Option<SerializableLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableDivergence {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    field: Option<String>,
    host_offset: u64,
    device_offset: u64,
    host_size: u64,
    device_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableComparison {
    pub name: String,
    pub equivalent: bool,
    pub host: SerializableLayout,
    pub device: SerializableLayout,
    pub divergences: Vec<SerializableDivergence>,
}

impl From<&StructureLayout> for SerializableLayout {
    fn from(layout: &StructureLayout) -> Self {
        Self {
            name: layout.name().to_string(),
            policy: layout.policy().name().to_string(),
            fields: layout.fields().iter().map(|f| SerializableField {
                name: f.name().to_string(),
                ty: f.field_type().to_string(),
                offset: f.offset(),
                size: f.size(),
                alignment: f.alignment().as_u64(),
                nested: f.nested().map(SerializableLayout::from),
            }).collect(),
            data_size: layout.data_size(),
            size: layout.size(),
            alignment: layout.alignment().as_u64(),
        }
    }
}

impl From<&Divergence> for SerializableDivergence {
    fn from(divergence: &Divergence) -> Self {
        Self {
            field: divergence.field_name().map(str::to_string),
            host_offset: divergence.host_offset,
            device_offset: divergence.device_offset,
            host_size: divergence.host_size,
            device_size: divergence.device_size,
        }
    }
}

impl From<&StructureComparison> for SerializableComparison {
    fn from(comparison: &StructureComparison) -> Self {
        Self {
            name: comparison.name.clone(),
            equivalent: comparison.is_equivalent(),
            host: SerializableLayout::from(comparison.host.as_ref()),
            device: SerializableLayout::from(comparison.device.as_ref()),
            divergences: comparison.divergences.iter().map(SerializableDivergence::from).collect(),
        }
    }
}
