use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Width of every Simple_CPU v1 instruction word.
pub const INSTRUCTION_WIDTH: u8 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatField {
    pub label: String,
    pub bits: u8,
}

impl FormatField {
    /// Cell caption, e.g. `Class Opcode (5)`.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.label, self.bits)
    }

    /// Share of the instruction word this field covers, in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        f32::from(self.bits) / f32::from(INSTRUCTION_WIDTH)
    }
}

/// Bit layout of one instruction class, drawn above the ISA table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionFormat {
    pub title: String,
    pub fields: Vec<FormatField>,
}

impl InstructionFormat {
    pub fn width(&self) -> u32 {
        self.fields.iter().map(|f| u32::from(f.bits)).sum()
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |message: String| CatalogError::InvalidFormat {
            title: self.title.clone(),
            message,
        };

        if self.fields.is_empty() {
            return Err(invalid("no fields".to_string()));
        }

        if let Some(field) = self.fields.iter().find(|f| f.bits == 0) {
            return Err(invalid(format!("field {:?} is zero bits wide", field.label)));
        }

        let width = self.width();
        if width != u32::from(INSTRUCTION_WIDTH) {
            return Err(invalid(format!(
                "fields span {width} bits, expected {INSTRUCTION_WIDTH}"
            )));
        }

        Ok(())
    }
}
