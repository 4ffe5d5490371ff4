// Thu Oct 15 2026 - Alex

use crate::structure::{Alignment, FieldType, PackingPolicy};
use std::fmt;

/// One named member of a [`StructSchema`](crate::structure::StructSchema).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    name: String,
    ty: FieldType,
    repeat: Option<u32>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            repeat: None,
        }
    }

    /// A fixed-size array member, `ty name[count]`.
    pub fn repeated(name: impl Into<String>, ty: FieldType, count: u32) -> Self {
        Self {
            name: name.into(),
            ty,
            repeat: Some(count),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.ty
    }

    pub fn repeat(&self) -> Option<u32> {
        self.repeat
    }

    /// Size and alignment of the whole member, repeat count included.
    pub fn layout_under(&self, policy: PackingPolicy) -> (u64, Alignment) {
        match self.repeat {
            Some(count) => policy.repeated_layout_of(&self.ty, count),
            None => policy.layout_of(&self.ty),
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repeat {
            Some(count) => write!(f, "{} {}[{}]", self.ty, self.name, count),
            None => write!(f, "{} {}", self.ty, self.name),
        }
    }
}
