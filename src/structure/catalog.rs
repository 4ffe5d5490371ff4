// Fri Oct 16 2026 - Alex

//! Structs shared between the ray tracer's host code and its shaders.

use crate::structure::{FieldType, SchemaRegistry, StructSchema, StructureBuilder, StructureResult};
use std::sync::Arc;

pub fn camera() -> StructSchema {
    StructureBuilder::new("Camera")
        .add_fields(&["position", "right", "up", "forward"], FieldType::Vector3)
        .build()
}

pub fn area_light() -> StructSchema {
    StructureBuilder::new("AreaLight")
        .add_fields(&["position", "forward", "right", "up", "color"], FieldType::Vector3)
        .build()
}

pub fn uniforms(camera: &Arc<StructSchema>) -> StructSchema {
    StructureBuilder::new("Uniforms")
        .add_fields(&["width", "height", "frameIndex", "lightCount"], FieldType::Uint)
        .add_field("camera", FieldType::nested(camera))
        .build()
}

// Packed vectors with interleaved scalars keep host and device in step.
pub fn sphere() -> StructSchema {
    StructureBuilder::new("Sphere")
        .add_field("origin", FieldType::PackedVector3)
        .add_field("radiusSquared", FieldType::Float)
        .add_field("color", FieldType::PackedVector3)
        .add_field("radius", FieldType::Float)
        .build()
}

pub fn triangle() -> StructSchema {
    StructureBuilder::new("Triangle")
        .add_array("normals", FieldType::Vector3, 3)
        .add_array("colors", FieldType::Vector3, 3)
        .build()
}

impl SchemaRegistry {
    /// Registry holding the built-in catalogue, in declaration order.
    pub fn builtin() -> StructureResult<Self> {
        let mut registry = Self::new();
        let camera = registry.register(camera())?;
        registry.register(area_light())?;
        registry.register(uniforms(&camera))?;
        registry.register(sphere())?;
        registry.register(triangle())?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogue() {
        let registry = SchemaRegistry::builtin().unwrap();
        assert_eq!(
            registry.names(),
            vec!["Camera", "AreaLight", "Uniforms", "Sphere", "Triangle"]
        );
        let camera = registry.get("Uniforms").unwrap().get_field("camera").unwrap();
        assert!(matches!(camera.field_type(), FieldType::Struct(schema) if schema.name() == "Camera"));
    }
}
