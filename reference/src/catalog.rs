use std::collections::HashSet;

use crate::{error::CatalogError, record::InstructionRecord};

/// Immutable, ordered collection of instruction records.
///
/// Built once through [`InstructionCatalog::new`], which is the only place
/// the record contract is checked. After that, [`InstructionCatalog::all`]
/// returns the same sequence for the lifetime of the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionCatalog {
    records: Vec<InstructionRecord>,
}

impl InstructionCatalog {
    /// Validates and wraps `records`, keeping their order.
    ///
    /// # Errors
    /// Fails on an empty mnemonic or description, or on two records sharing
    /// a mnemonic (compared case-insensitively).
    pub fn new(records: Vec<InstructionRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.instruction.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "instruction",
                });
            }

            if record.description.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "description",
                });
            }

            if !seen.insert(record.instruction.to_lowercase()) {
                return Err(CatalogError::DuplicateInstruction {
                    mnemonic: record.instruction.clone(),
                });
            }
        }

        Ok(Self { records })
    }

    pub fn all(&self) -> &[InstructionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

}
