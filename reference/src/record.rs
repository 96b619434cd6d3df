use serde::{Deserialize, Serialize};

/// One row of the ISA table.
///
/// Only `instruction` and `description` carry a contract (non-empty); the
/// encoding columns are opaque display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionRecord {
    pub instruction: String,
    pub description: String,
    pub class_binary: String,
    pub class_spec_opcode: String,
    pub operands: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl InstructionRecord {
    pub fn new(instruction: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            description: description.into(),
            class_binary: String::new(),
            class_spec_opcode: String::new(),
            operands: String::new(),
            example: None,
        }
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Text shown in the example column, empty when the record has none.
    pub fn example_text(&self) -> &str {
        self.example.as_deref().unwrap_or_default()
    }
}
