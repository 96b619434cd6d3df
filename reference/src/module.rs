use serde::{Deserialize, Serialize};

/// Opaque handle of a diagram image, resolved by the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramRef(String);

impl DiagramRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A labelled URL, passed through to the host environment untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

/// An ALU module card or a branch-prediction note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub title: String,
    pub summary: Vec<String>,
    #[serde(default, rename = "diagram")]
    pub diagram_ref: Option<DiagramRef>,
    #[serde(default, rename = "links")]
    pub external_links: Vec<ExternalLink>,
}

/// The always-visible architecture overview card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureDiagram {
    pub title: String,
    #[serde(default)]
    pub diagram: Option<DiagramRef>,
}
