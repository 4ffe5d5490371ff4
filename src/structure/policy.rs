// Thu Oct 15 2026 - Alex

use crate::structure::{compute_layout, Alignment, FieldType, StructureError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size and alignment rules a compilation environment applies to each type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PackingPolicy {
    /// Host compilers: every type aligned to its 4-byte lane.
    Natural,
    /// GPU vector registers: float3 stays 12 bytes but aligns to 16.
    DeviceVector,
    /// simd / Metal `float3`: a full 16-byte slot, aligned to 16.
    SimdVector,
}

impl PackingPolicy {
    pub const ALL: [PackingPolicy; 3] = [Self::Natural, Self::DeviceVector, Self::SimdVector];

    /// Returns `(size, alignment)` of `ty` under this policy.
    pub fn layout_of(&self, ty: &FieldType) -> (u64, Alignment) {
        match (self, ty) {
            (_, FieldType::Float | FieldType::Uint | FieldType::PackedVector3) => {
                (ty.natural_size(), ty.natural_alignment())
            }
            (Self::Natural, FieldType::Vector3 | FieldType::Vector4) => {
                (ty.natural_size(), ty.natural_alignment())
            }
            (Self::DeviceVector, FieldType::Vector3 | FieldType::Vector4) => {
                (ty.natural_size(), Alignment::VECTOR)
            }
            (Self::SimdVector, FieldType::Vector3 | FieldType::Vector4) => {
                (Alignment::VECTOR.as_u64(), Alignment::VECTOR)
            }
            (_, FieldType::Struct(schema)) => {
                let layout = compute_layout(schema, *self);
                (layout.size(), layout.alignment())
            }
            (_, FieldType::Array(element, count)) => self.repeated_layout_of(element, *count),
        }
    }

    /// Layout of `count` consecutive elements; each element starts on its own
    /// alignment, so the stride is the element size rounded up.
    pub fn repeated_layout_of(&self, element: &FieldType, count: u32) -> (u64, Alignment) {
        let (size, alignment) = self.layout_of(element);
        (alignment.align(size) * u64::from(count), alignment)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::DeviceVector => "device-vector",
            Self::SimdVector => "simd-vector",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Natural => "tight host packing, float3 = 12 bytes aligned to 4",
            Self::DeviceVector => "GPU vector alignment, float3 = 12 bytes aligned to 16",
            Self::SimdVector => "simd vectors, float3 = 16 bytes aligned to 16",
        }
    }
}

impl Default for PackingPolicy {
    fn default() -> Self {
        Self::Natural
    }
}

impl fmt::Display for PackingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PackingPolicy {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StructureError::ParseError(format!("unknown packing policy: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_policy() {
        let policy = PackingPolicy::Natural;
        assert_eq!(policy.layout_of(&FieldType::Vector3), (12, Alignment::SCALAR));
        assert_eq!(policy.layout_of(&FieldType::Vector4), (16, Alignment::SCALAR));
        assert_eq!(policy.layout_of(&FieldType::Float), (4, Alignment::SCALAR));
    }

    #[test]
    fn test_device_vector_changes_alignment_only() {
        let policy = PackingPolicy::DeviceVector;
        assert_eq!(policy.layout_of(&FieldType::Vector3), (12, Alignment::VECTOR));
        assert_eq!(policy.layout_of(&FieldType::Vector4), (16, Alignment::VECTOR));
        assert_eq!(policy.layout_of(&FieldType::Uint), (4, Alignment::SCALAR));
        assert_eq!(policy.layout_of(&FieldType::PackedVector3), (12, Alignment::SCALAR));
    }

    #[test]
    fn test_simd_vector_pads_float3() {
        let policy = PackingPolicy::SimdVector;
        assert_eq!(policy.layout_of(&FieldType::Vector3), (16, Alignment::VECTOR));
        assert_eq!(policy.layout_of(&FieldType::PackedVector3), (12, Alignment::SCALAR));
    }

    #[test]
    fn test_array_stride() {
        let array = FieldType::array(FieldType::Vector3, 3);
        assert_eq!(PackingPolicy::Natural.layout_of(&array), (36, Alignment::SCALAR));
        assert_eq!(PackingPolicy::DeviceVector.layout_of(&array), (48, Alignment::VECTOR));
    }

    #[test]
    fn test_policy_names_round_trip() {
        for policy in PackingPolicy::ALL {
            assert_eq!(policy.name().parse::<PackingPolicy>().unwrap(), policy);
        }
        assert!(matches!(
            "std140".parse::<PackingPolicy>(),
            Err(StructureError::ParseError(_))
        ));
    }
}
