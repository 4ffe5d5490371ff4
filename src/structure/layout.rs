// Thu Oct 15 2026 - Alex

use crate::structure::{Alignment, FieldType, PackingPolicy, StructSchema};
use std::collections::HashMap;
use std::fmt;

/// Placement of one field inside a computed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    name: String,
    ty: FieldType,
    offset: u64,
    size: u64,
    alignment: Alignment,
    nested: Option<Box<StructureLayout>>,
}

impl FieldLayout {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &FieldType {
        &self.ty
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Total size including tail padding, i.e. the array stride.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn end(&self) -> u64 {
        self.offset + self.size
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Layout of the nested struct, or of one element for arrays of structs.
    pub fn nested(&self) -> Option<&StructureLayout> {
        self.nested.as_deref()
    }
}

/// A gap the layout rules inserted between fields or at the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub offset: u64,
    pub bytes: u64,
}

/// Size, alignment and field offsets of one schema under one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureLayout {
    name: String,
    policy: PackingPolicy,
    fields: Vec<FieldLayout>,
    field_map: HashMap<String, usize>,
    data_size: u64,
    size: u64,
    alignment: Alignment,
}

impl StructureLayout {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> PackingPolicy {
        self.policy
    }

    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldLayout> {
        self.field_map.get(name).and_then(|&idx| self.fields.get(idx))
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// End of the last field, before tail padding.
    pub fn data_size(&self) -> u64 {
        self.data_size
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn padding(&self) -> Vec<Padding> {
        let mut holes = Vec::new();
        let mut cursor = 0u64;
        for field in &self.fields {
            if field.offset > cursor {
                holes.push(Padding { offset: cursor, bytes: field.offset - cursor });
            }
            cursor = field.end();
        }
        if self.size > cursor {
            holes.push(Padding { offset: cursor, bytes: self.size - cursor });
        }
        holes
    }

    pub fn padding_bytes(&self) -> u64 {
        self.padding().iter().map(|p| p.bytes).sum()
    }
}

impl fmt::Display for StructureLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}): size {}, data {}, align {}",
            self.name, self.policy, self.size, self.data_size, self.alignment
        )?;
        for field in &self.fields {
            writeln!(f, "  {:>4} {} {} ({} bytes)", field.offset, field.ty, field.name, field.size)?;
        }
        Ok(())
    }
}

/// Sequential pad-then-place layout of `schema` under `policy`.
///
/// Each field goes to the next multiple of its own alignment after the
/// previous field's end. The struct aligns to its most aligned field and its
/// size is rounded up to that alignment.
pub fn compute_layout(schema: &StructSchema, policy: PackingPolicy) -> StructureLayout {
    let mut fields = Vec::with_capacity(schema.fields().len());
    let mut field_map = HashMap::with_capacity(schema.fields().len());
    let mut cursor = 0u64;
    let mut max_align = Alignment::SCALAR;

    for spec in schema.fields() {
        let (size, alignment) = spec.layout_under(policy);
        cursor = alignment.align(cursor);

        let ty = match spec.repeat() {
            Some(count) => FieldType::array(spec.field_type().clone(), count),
            None => spec.field_type().clone(),
        };
        let nested = match ty.element() {
            FieldType::Struct(inner) => Some(Box::new(compute_layout(inner, policy))),
            _ => None,
        };

        field_map.insert(spec.name().to_string(), fields.len());
        fields.push(FieldLayout {
            name: spec.name().to_string(),
            ty,
            offset: cursor,
            size,
            alignment,
            nested,
        });

        cursor += size;
        max_align = max_align.max(alignment);
    }

    let size = max_align.align(cursor);
    log::debug!("{} under {}: size {}, align {}", schema.name(), policy, size, max_align);

    StructureLayout {
        name: schema.name().to_string(),
        policy,
        fields,
        field_map,
        data_size: cursor,
        size,
        alignment: max_align,
    }
}
