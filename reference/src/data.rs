//! # Reference data
//!
//! The whole document content (instruction catalog, encoding formats, ALU
//! modules, branch-prediction notes and page text) travels as one JSON
//! bundle. The Simple_CPU v1 bundle is embedded in the binary; a file on
//! disk can replace it at launch.
//!
//! ```text
//! JSON ──► RawReferenceData (serde) ──► validate ──► ReferenceData
//!                                          │
//!                                          └─► CatalogError (fatal)
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{
    catalog::InstructionCatalog,
    error::CatalogError,
    format::InstructionFormat,
    module::{ArchitectureDiagram, ExternalLink, ModuleDescriptor},
    record::InstructionRecord,
};

/// The bundle shipped with the binary.
pub const BUNDLED_JSON: &str = include_str!("../data/simple_cpu_v1.json");

#[derive(Deserialize)]
struct RawReferenceData {
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    links: Vec<ExternalLink>,
    architecture: ArchitectureDiagram,
    #[serde(default)]
    formats: Vec<InstructionFormat>,
    instructions: Vec<InstructionRecord>,
    #[serde(default)]
    alu_modules: Vec<ModuleDescriptor>,
    #[serde(default)]
    branch_prediction: Vec<ModuleDescriptor>,
}

/// Validated, read-only document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    title: String,
    summary: String,
    author: String,
    links: Vec<ExternalLink>,
    architecture: ArchitectureDiagram,
    formats: Vec<InstructionFormat>,
    catalog: InstructionCatalog,
    alu_modules: Vec<ModuleDescriptor>,
    branch_prediction: Vec<ModuleDescriptor>,
}

impl ReferenceData {
    /// Loads the embedded Simple_CPU v1 bundle.
    ///
    /// # Errors
    /// Only if the embedded bundle itself is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_JSON)
    }

    /// # Errors
    /// Returns [`CatalogError::Io`] if the file can't be read, otherwise see
    /// [`ReferenceData::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Parses and validates a bundle.
    ///
    /// # Errors
    /// Fails on malformed JSON, an invalid instruction record, an untitled
    /// module or an instruction format that doesn't span the word.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawReferenceData = serde_json::from_str(json)?;

        for format in &raw.formats {
            format.validate()?;
        }
        check_titles("alu_modules", &raw.alu_modules)?;
        check_titles("branch_prediction", &raw.branch_prediction)?;

        let catalog = InstructionCatalog::new(raw.instructions)?;

        Ok(Self {
            title: raw.title,
            summary: raw.summary,
            author: raw.author,
            links: raw.links,
            architecture: raw.architecture,
            formats: raw.formats,
            catalog,
            alu_modules: raw.alu_modules,
            branch_prediction: raw.branch_prediction,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn links(&self) -> &[ExternalLink] {
        &self.links
    }

    pub const fn architecture(&self) -> &ArchitectureDiagram {
        &self.architecture
    }

    pub fn formats(&self) -> &[InstructionFormat] {
        &self.formats
    }

    pub const fn catalog(&self) -> &InstructionCatalog {
        &self.catalog
    }

    pub fn alu_modules(&self) -> &[ModuleDescriptor] {
        &self.alu_modules
    }

    pub fn branch_prediction(&self) -> &[ModuleDescriptor] {
        &self.branch_prediction
    }
}

fn check_titles(section: &'static str, modules: &[ModuleDescriptor]) -> Result<(), CatalogError> {
    match modules.iter().position(|m| m.title.trim().is_empty()) {
        Some(index) => Err(CatalogError::EmptyModuleTitle { section, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ReferenceData;
    use crate::{error::CatalogError, module::DiagramRef};

    const MINIMAL: &str = r#"{
        "title": "Test CPU",
        "architecture": { "title": "Overview" },
        "instructions": [
            { "instruction": "ADD", "description": "integer add",
              "classBinary": "01", "classSpecOpcode": "00000", "operands": "RZ, RX, RY" }
        ]
    }"#;

    #[test]
    fn bundled_data_is_valid() {
        let data = ReferenceData::bundled().unwrap();

        assert_eq!(data.title(), "Simple_CPU_v1 Documentation");
        assert_eq!(data.formats().len(), 5);
        assert_eq!(data.alu_modules().len(), 9);
        assert_eq!(data.branch_prediction().len(), 4);
        assert!(data.catalog().len() > 30);
        assert!(data.catalog().all().iter().any(|r| r.instruction == "FMUL"));
        assert!(data.architecture().diagram.is_some());
    }

    #[test]
    fn bundled_alu_modules_carry_links() {
        let data = ReferenceData::bundled().unwrap();

        for module in data.alu_modules() {
            let labels: Vec<&str> = module
                .external_links
                .iter()
                .map(|l| l.label.as_str())
                .collect();
            assert_eq!(labels, vec!["Testbench", "Verilog"], "{}", module.title);
        }
    }

    #[test]
    fn bundled_alu_assets_and_links() {
        let data = ReferenceData::bundled().unwrap();

        let diagrams: Vec<(&str, Option<&str>)> = data
            .alu_modules()
            .iter()
            .map(|m| (m.title.as_str(), m.diagram_ref.as_ref().map(DiagramRef::as_str)))
            .collect();
        assert_eq!(
            diagrams,
            vec![
                ("Signed Adder", Some("SIGNED_ADDER.drawio.svg")),
                ("Multiplier Unit", Some("FP_MULTIPLIER.drawio.svg")),
                ("Shifter", Some("FP_SHIFTER.drawio.svg")),
                ("Floating-Point Adder", Some("FP_ADDER.drawio.svg")),
                ("Floating-Point Multiplier", Some("FP_MULTIPLIER.drawio.svg")),
                ("Floating-Point To Integer Converter", Some("FLOAT_TO_INT.drawio.svg")),
                ("Integer To Floating Point Converter", Some("INT_TO_FLOAT.drawio.svg")),
                ("Comparator", None),
                ("Floating Point Comparator", None),
            ]
        );

        let comparator = &data.alu_modules()[7];
        let urls: Vec<&str> = comparator
            .external_links
            .iter()
            .map(|l| l.url.as_str())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/Toniodujinrin/simple_alu/blob/main/testbench/floating_point_modules_test/fp_comparator_test.sv",
                "https://github.com/Toniodujinrin/simple_alu/blob/main/floating_point_modules/fp_comparator.v",
            ]
        );
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let data = ReferenceData::from_json(MINIMAL).unwrap();

        assert_eq!(data.summary(), "");
        assert!(data.links().is_empty());
        assert!(data.formats().is_empty());
        assert!(data.alu_modules().is_empty());
        assert_eq!(data.architecture().diagram, None);
        assert_eq!(data.catalog().all()[0].example, None);
    }

    #[test]
    fn syntax_error_is_a_parse_error() {
        let err = ReferenceData::from_json("{ \"title\": ").unwrap_err();

        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn missing_instructions_is_a_parse_error() {
        let err = ReferenceData::from_json(r#"{ "title": "x", "architecture": { "title": "y" } }"#)
            .unwrap_err();

        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn untitled_module_is_rejected() {
        let json = MINIMAL.replacen(
            "\"instructions\"",
            r#""alu_modules": [ { "title": "Shifter", "summary": [] }, { "title": " ", "summary": [] } ],
               "instructions""#,
            1,
        );

        let err = ReferenceData::from_json(&json).unwrap_err();
        assert_eq!(err.to_string(), "alu_modules entry #1 has an empty title");
    }

    #[test]
    fn bad_format_is_rejected() {
        let json = MINIMAL.replacen(
            "\"instructions\"",
            r#""formats": [ { "title": "Short", "fields": [ { "label": "Class", "bits": 2 } ] } ],
               "instructions""#,
            1,
        );

        assert!(matches!(
            ReferenceData::from_json(&json),
            Err(CatalogError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ReferenceData::from_path("/nonexistent/isadoc/catalog.json").unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
