// Thu Oct 15 2026 - Alex

use crate::structure::{StructureError, StructureLayout};

/// Re-checks the placement rules on a computed layout. A failure here means
/// the layout engine is wrong, not the schema.
pub struct StructureValidator;

impl StructureValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, layout: &StructureLayout) -> Result<(), StructureError> {
        let mut previous_end = 0u64;
        for field in layout.fields() {
            if !field.alignment().is_aligned(field.offset()) {
                return Err(StructureError::ValidationFailed(format!(
                    "{}.{} at {} is not {}-byte aligned",
                    layout.name(),
                    field.name(),
                    field.offset(),
                    field.alignment()
                )));
            }
            if field.offset() < previous_end {
                return Err(StructureError::ValidationFailed(format!(
                    "{}.{} at {} overlaps the previous field ending at {}",
                    layout.name(),
                    field.name(),
                    field.offset(),
                    previous_end
                )));
            }
            if field.alignment() > layout.alignment() {
                return Err(StructureError::ValidationFailed(format!(
                    "{}.{} is more aligned than its struct",
                    layout.name(),
                    field.name()
                )));
            }
            previous_end = field.end();
        }

        if layout.size() < previous_end {
            return Err(StructureError::ValidationFailed(format!(
                "{} size {} is smaller than its last field end {}",
                layout.name(),
                layout.size(),
                previous_end
            )));
        }
        if !layout.alignment().is_aligned(layout.size()) {
            return Err(StructureError::ValidationFailed(format!(
                "{} size {} is not a multiple of its alignment {}",
                layout.name(),
                layout.size(),
                layout.alignment()
            )));
        }

        for field in layout.fields() {
            if let Some(nested) = field.nested() {
                self.validate(nested)?;
            }
        }
        Ok(())
    }
}

impl Default for StructureValidator {
    fn default() -> Self {
        Self::new()
    }
}
