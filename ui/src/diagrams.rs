//! Maps diagram handles to image URIs.
//!
//! Fetching, decoding and caching are left to the `egui_extras` image
//! loaders, so a diagram hidden by collapsing a card is drawn again from
//! the cache when the card reopens. A handle that does not resolve just
//! renders the loader's error placeholder.

use std::path::{Path, PathBuf};

use reference::DiagramRef;

/// Directory searched for diagrams when none is configured.
pub const DEFAULT_ASSETS_DIR: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramResolver {
    root: PathBuf,
}

impl DiagramResolver {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn uri(&self, diagram: &DiagramRef) -> String {
        format!("file://{}", self.root.join(diagram.as_str()).display())
    }

    pub fn image(&self, diagram: &DiagramRef) -> egui::Image<'static> {
        egui::Image::new(self.uri(diagram)).show_loading_spinner(true)
    }
}

impl Default for DiagramResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS_DIR)
    }
}
