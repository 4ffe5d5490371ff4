// Fri Oct 16 2026 - Alex

use crate::structure::{
    PackingPolicy, SchemaRegistry, StructSchema, StructureCache, StructureLayout,
};
use std::fmt;
use std::sync::Arc;

/// What a divergence refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivergenceScope {
    /// A field, named by its path (`camera.right` for nested fields).
    Field(String),
    /// The struct's total size.
    Struct,
}

/// Host and device disagree on where a field lives or how big it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub struct_name: String,
    pub scope: DivergenceScope,
    pub host_offset: u64,
    pub device_offset: u64,
    pub host_size: u64,
    pub device_size: u64,
}

impl Divergence {
    pub fn field_name(&self) -> Option<&str> {
        match &self.scope {
            DivergenceScope::Field(name) => Some(name.as_str()),
            DivergenceScope::Struct => None,
        }
    }

    pub fn is_struct_level(&self) -> bool {
        self.scope == DivergenceScope::Struct
    }

    pub fn offset_delta(&self) -> i64 {
        self.device_offset as i64 - self.host_offset as i64
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            DivergenceScope::Field(field) => write!(
                f,
                "{}.{}: host @ {} ({} bytes), device @ {} ({} bytes)",
                self.struct_name, field, self.host_offset, self.host_size, self.device_offset, self.device_size
            ),
            DivergenceScope::Struct => write!(
                f,
                "{}: size {} bytes on host, {} bytes on device",
                self.struct_name, self.host_size, self.device_size
            ),
        }
    }
}

/// Both layouts of one schema and how they differ. This is what reporters consume.
#[derive(Debug, Clone)]
pub struct StructureComparison {
    pub name: String,
    pub host: Arc<StructureLayout>,
    pub device: Arc<StructureLayout>,
    pub divergences: Vec<Divergence>,
}

impl StructureComparison {
    pub fn is_equivalent(&self) -> bool {
        self.divergences.is_empty()
    }

    pub fn field_divergences(&self) -> impl Iterator<Item = &Divergence> {
        self.divergences.iter().filter(|d| !d.is_struct_level())
    }
}

impl fmt::Display for StructureComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} vs {}",
            self.name,
            self.host.policy(),
            self.device.policy()
        )?;
        if self.divergences.is_empty() {
            return writeln!(f, "  layouts match ({} bytes)", self.host.size());
        }
        for divergence in &self.divergences {
            writeln!(f, "  {}", divergence)?;
        }
        Ok(())
    }
}

/// Lays each schema out under a host and a device policy and diffs the results.
pub struct StructureComparator {
    host: PackingPolicy,
    device: PackingPolicy,
    /// Also compare the fields of nested structs.
    nested: bool,
    cache: StructureCache,
}

impl StructureComparator {
    pub fn new(host: PackingPolicy, device: PackingPolicy) -> Self {
        Self {
            host,
            device,
            nested: false,
            cache: StructureCache::new(),
        }
    }

    pub fn with_nested(mut self, enabled: bool) -> Self {
        self.nested = enabled;
        self
    }

    pub fn host_policy(&self) -> PackingPolicy {
        self.host
    }

    pub fn device_policy(&self) -> PackingPolicy {
        self.device
    }

    pub fn compare(&self, schema: &StructSchema) -> StructureComparison {
        let host = self.cache.get_or_compute(schema, self.host);
        let device = self.cache.get_or_compute(schema, self.device);

        let mut divergences = Vec::new();
        diff_fields(schema.name(), "", 0, 0, &host, &device, self.nested, &mut divergences);

        if host.size() != device.size() {
            divergences.push(Divergence {
                struct_name: schema.name().to_string(),
                scope: DivergenceScope::Struct,
                host_offset: 0,
                device_offset: 0,
                host_size: host.size(),
                device_size: device.size(),
            });
        }

        for divergence in &divergences {
            log::warn!("{}", divergence);
        }
        log::info!(
            "{}: {} divergence(s) between {} and {}",
            schema.name(),
            divergences.len(),
            self.host,
            self.device
        );

        StructureComparison {
            name: schema.name().to_string(),
            host,
            device,
            divergences,
        }
    }

    /// Compares every registered schema, in registration order.
    pub fn compare_all(&self, registry: &SchemaRegistry) -> Vec<StructureComparison> {
        registry.iter().map(|schema| self.compare(schema)).collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn diff_fields(
    struct_name: &str,
    prefix: &str,
    host_base: u64,
    device_base: u64,
    host: &StructureLayout,
    device: &StructureLayout,
    nested: bool,
    out: &mut Vec<Divergence>,
) {
    for host_field in host.fields() {
        let Some(device_field) = device.get_field(host_field.name()) else {
            continue;
        };
        let path = format!("{}{}", prefix, host_field.name());
        let host_offset = host_base + host_field.offset();
        let device_offset = device_base + device_field.offset();

        if host_offset != device_offset || host_field.size() != device_field.size() {
            out.push(Divergence {
                struct_name: struct_name.to_string(),
                scope: DivergenceScope::Field(path.clone()),
                host_offset,
                device_offset,
                host_size: host_field.size(),
                device_size: device_field.size(),
            });
        }

        if !nested {
            continue;
        }
        let (Some(inner_host), Some(inner_device)) = (host_field.nested(), device_field.nested()) else {
            continue;
        };
        let ty = host_field.field_type();
        // Struct sizes are already multiples of their alignment, so size is the stride.
        for index in 0..ty.element_count() {
            let inner_prefix = if ty.is_array() {
                format!("{}[{}].", path, index)
            } else {
                format!("{}.", path)
            };
            diff_fields(
                struct_name,
                &inner_prefix,
                host_offset + index * inner_host.size(),
                device_offset + index * inner_device.size(),
                inner_host,
                inner_device,
                nested,
                out,
            );
        }
    }
}

/// Diffs `schema` under two policies without keeping a comparator around.
pub fn compare(schema: &StructSchema, host: PackingPolicy, device: PackingPolicy) -> Vec<Divergence> {
    StructureComparator::new(host, device).compare(schema).divergences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{FieldType, StructureBuilder};

    fn plain_sphere() -> StructSchema {
        StructureBuilder::new("Sphere")
            .add_field("origin", FieldType::Vector3)
            .add_field("radiusSquared", FieldType::Float)
            .add_field("color", FieldType::Vector3)
            .add_field("radius", FieldType::Float)
            .build()
    }

    fn light_array_scene() -> StructSchema {
        let light = Arc::new(
            StructureBuilder::new("Light")
                .add_field("color", FieldType::Vector3)
                .add_field("intensity", FieldType::Float)
                .build(),
        );
        StructureBuilder::new("Scene")
            .add_field("count", FieldType::Uint)
            .add_array("lights", FieldType::nested(&light), 2)
            .build()
    }

    fn flat_camera() -> StructSchema {
        StructureBuilder::new("Camera")
            .add_fields(&["width", "height", "frameIndex", "lightCount"], FieldType::Uint)
            .add_fields(&["position", "right", "up", "forward"], FieldType::Vector3)
            .build()
    }

    #[test]
    fn test_same_policy_never_diverges() {
        let registry = SchemaRegistry::builtin().unwrap();
        for policy in PackingPolicy::ALL {
            for schema in registry.iter() {
                assert!(compare(schema, policy, policy).is_empty());
            }
            assert!(compare(&flat_camera(), policy, policy).is_empty());
        }
    }

    #[test]
    fn test_interleaved_sphere_matches() {
        let divergences = compare(&plain_sphere(), PackingPolicy::Natural, PackingPolicy::DeviceVector);
        assert!(divergences.is_empty());
    }

    #[test]
    fn test_sphere_diverges_under_simd_vectors() {
        let divergences = compare(&plain_sphere(), PackingPolicy::Natural, PackingPolicy::SimdVector);
        assert!(!divergences.is_empty());
        assert_eq!(divergences.last().unwrap().device_size, 64);
    }

    #[test]
    fn test_camera_divergence() {
        let divergences = compare(&flat_camera(), PackingPolicy::Natural, PackingPolicy::DeviceVector);

        let fields: Vec<_> = divergences.iter().filter_map(|d| d.field_name()).collect();
        assert_eq!(fields, vec!["right", "up", "forward"]);

        let forward = &divergences[2];
        assert_eq!((forward.host_offset, forward.device_offset), (52, 64));
        assert_eq!(forward.offset_delta(), 12);

        let size = divergences.last().unwrap();
        assert!(size.is_struct_level());
        assert_eq!((size.host_size, size.device_size), (64, 80));
        assert_eq!(divergences.len(), 4);
    }

    #[test]
    fn test_trailing_padding_alone_is_reported() {
        let schema = StructureBuilder::new("Tail")
            .add_field("scale", FieldType::Float)
            .add_field("pad", FieldType::Float)
            .add_field("pad2", FieldType::Float)
            .add_field("pad3", FieldType::Float)
            .add_field("tint", FieldType::Vector3)
            .build();

        let divergences = compare(&schema, PackingPolicy::Natural, PackingPolicy::DeviceVector);
        assert_eq!(divergences.len(), 1);
        assert!(divergences[0].is_struct_level());
        assert_eq!((divergences[0].host_size, divergences[0].device_size), (28, 32));
    }

    #[test]
    fn test_builtin_catalogue_verdicts() {
        let registry = SchemaRegistry::builtin().unwrap();
        let comparator = StructureComparator::new(PackingPolicy::Natural, PackingPolicy::DeviceVector);
        let verdicts: Vec<_> = comparator
            .compare_all(&registry)
            .iter()
            .map(|c| (c.name.clone(), c.is_equivalent()))
            .collect();

        assert_eq!(
            verdicts,
            vec![
                ("Camera".to_string(), false),
                ("AreaLight".to_string(), false),
                ("Uniforms".to_string(), false),
                ("Sphere".to_string(), true),
                ("Triangle".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_nested_fields() {
        let registry = SchemaRegistry::builtin().unwrap();
        let uniforms = registry.get("Uniforms").unwrap();

        let shallow = StructureComparator::new(PackingPolicy::Natural, PackingPolicy::DeviceVector)
            .compare(uniforms);
        let names: Vec<_> = shallow.divergences.iter().filter_map(|d| d.field_name()).collect();
        assert_eq!(names, vec!["camera"]);
        assert_eq!(shallow.field_divergences().count(), 1);

        let deep = StructureComparator::new(PackingPolicy::Natural, PackingPolicy::DeviceVector)
            .with_nested(true)
            .compare(uniforms);
        let right = deep
            .divergences
            .iter()
            .find(|d| d.field_name() == Some("camera.right"))
            .unwrap();
        assert_eq!((right.host_offset, right.device_offset), (28, 32));
        assert!(deep.divergences.iter().all(|d| d.field_name() != Some("camera.position")));
    }

    #[test]
    fn test_nested_array_elements() {
        let comparison = StructureComparator::new(PackingPolicy::Natural, PackingPolicy::DeviceVector)
            .with_nested(true)
            .compare(&light_array_scene());

        let second = comparison
            .divergences
            .iter()
            .find(|d| d.field_name() == Some("lights[1].color"))
            .unwrap();
        assert_eq!((second.host_offset, second.device_offset), (20, 32));

        let intensity = comparison
            .divergences
            .iter()
            .find(|d| d.field_name() == Some("lights[0].intensity"))
            .unwrap();
        assert_eq!((intensity.host_offset, intensity.device_offset), (16, 28));
        assert_eq!(comparison.field_divergences().count(), 5);
    }

    #[test]
    fn test_reused_comparator_sees_changed_schema() {
        let comparator = StructureComparator::new(PackingPolicy::Natural, PackingPolicy::DeviceVector);
        let small = StructureBuilder::new("Light")
            .add_field("scale", FieldType::Float)
            .build();
        let large = StructureBuilder::new("Light")
            .add_field("scale", FieldType::Float)
            .add_field("color", FieldType::Vector3)
            .build();

        assert!(comparator.compare(&small).is_equivalent());

        let reused = comparator.compare(&large);
        assert_eq!(reused.divergences, compare(&large, PackingPolicy::Natural, PackingPolicy::DeviceVector));
        let color = &reused.divergences[0];
        assert_eq!(color.field_name(), Some("color"));
        assert_eq!((color.host_offset, color.device_offset), (4, 16));
        let size = &reused.divergences[1];
        assert!(size.is_struct_level());
        assert_eq!((size.host_size, size.device_size), (16, 32));
    }
}
