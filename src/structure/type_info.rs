// Thu Oct 15 2026 - Alex

use crate::structure::{compute_layout, Alignment, PackingPolicy, StructSchema, StructureError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Size in bytes of one f32/u32 lane.
pub const LANE_SIZE: u64 = 4;

/// Closed set of field types that can appear in a shared struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Float,
    Uint,
    Vector3,
    Vector4,
    /// Tightly packed three-lane vector (`packed_float3`, `MTLPackedFloat3`).
    PackedVector3,
    Struct(Arc<StructSchema>),
    Array(Box<FieldType>, u32),
}

impl FieldType {
    pub fn array(element: FieldType, count: u32) -> Self {
        Self::Array(Box::new(element), count)
    }

    pub fn nested(schema: &Arc<StructSchema>) -> Self {
        Self::Struct(Arc::clone(schema))
    }

    /// Number of contiguous f32 lanes for vector types.
    pub fn lanes(&self) -> Option<u64> {
        match self {
            Self::Vector3 | Self::PackedVector3 => Some(3),
            Self::Vector4 => Some(4),
            _ => None,
        }
    }

    pub fn natural_size(&self) -> u64 {
        match self {
            Self::Float | Self::Uint => LANE_SIZE,
            Self::Vector3 | Self::PackedVector3 => 3 * LANE_SIZE,
            Self::Vector4 => 4 * LANE_SIZE,
            Self::Struct(schema) => compute_layout(schema, PackingPolicy::Natural).size(),
            Self::Array(element, count) => {
                element.natural_alignment().align(element.natural_size()) * u64::from(*count)
            }
        }
    }

    pub fn natural_alignment(&self) -> Alignment {
        match self {
            Self::Float | Self::Uint | Self::Vector3 | Self::Vector4 | Self::PackedVector3 => {
                Alignment::SCALAR
            }
            Self::Struct(schema) => compute_layout(schema, PackingPolicy::Natural).alignment(),
            Self::Array(element, _) => element.natural_alignment(),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_, _))
    }

    /// Innermost element type, looking through arrays.
    pub fn element(&self) -> &FieldType {
        match self {
            Self::Array(element, _) => element.element(),
            other => other,
        }
    }

    /// Number of innermost elements; 1 for anything that is not an array.
    pub fn element_count(&self) -> u64 {
        match self {
            Self::Array(element, count) => u64::from(*count) * element.element_count(),
            _ => 1,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float => write!(f, "float"),
            Self::Uint => write!(f, "uint"),
            Self::Vector3 => write!(f, "float3"),
            Self::Vector4 => write!(f, "float4"),
            Self::PackedVector3 => write!(f, "packed_float3"),
            Self::Struct(schema) => write!(f, "{}", schema.name()),
            Self::Array(element, count) => write!(f, "{}[{}]", element, count),
        }
    }
}

impl FromStr for FieldType {
    type Err = StructureError;

    /// Parses a scalar or vector type name. Struct and array types are built
    /// in code, never parsed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "float" | "f32" | "Float" => Ok(Self::Float),
            "uint" | "u32" | "uint32" | "UInt32" | "unsigned int" => Ok(Self::Uint),
            "float3" | "vector_float3" | "simd_float3" => Ok(Self::Vector3),
            "float4" | "vector_float4" | "simd_float4" => Ok(Self::Vector4),
            "packed_float3" | "MTLPackedFloat3" => Ok(Self::PackedVector3),
            other => Err(StructureError::UnknownType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_sizes() {
        assert_eq!(FieldType::Float.natural_size(), 4);
        assert_eq!(FieldType::Uint.natural_size(), 4);
        assert_eq!(FieldType::Vector3.natural_size(), 12);
        assert_eq!(FieldType::Vector4.natural_size(), 16);
        assert_eq!(FieldType::PackedVector3.natural_size(), 12);
        assert_eq!(FieldType::array(FieldType::Vector3, 3).natural_size(), 36);
    }

    #[test]
    fn test_natural_alignment_is_lane_sized() {
        for ty in [FieldType::Float, FieldType::Vector3, FieldType::Vector4] {
            assert_eq!(ty.natural_alignment(), Alignment::SCALAR);
        }
    }

    #[test]
    fn test_parse_type_names() {
        assert_eq!("float3".parse::<FieldType>().unwrap(), FieldType::Vector3);
        assert_eq!("MTLPackedFloat3".parse::<FieldType>().unwrap(), FieldType::PackedVector3);
        assert_eq!("u32".parse::<FieldType>().unwrap(), FieldType::Uint);

        let err = "float5".parse::<FieldType>().unwrap_err();
        assert!(matches!(err, StructureError::UnknownType(ref name) if name == "float5"));
    }

    #[test]
    fn test_element_count_looks_through_arrays() {
        let grid = FieldType::array(FieldType::array(FieldType::Float, 4), 3);
        assert_eq!(grid.element_count(), 12);
        assert_eq!(grid.element(), &FieldType::Float);
        assert_eq!(FieldType::Vector3.element_count(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldType::array(FieldType::Vector3, 3).to_string(), "float3[3]");
        assert_eq!(FieldType::PackedVector3.to_string(), "packed_float3");
    }
}
