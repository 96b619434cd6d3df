use std::path::PathBuf;

/// Reasons a reference bundle is rejected at load time.
///
/// Any of these is fatal: the browser is never built from a partially
/// valid bundle.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read reference data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference data: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("instruction #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("duplicate instruction mnemonic: {mnemonic}")]
    DuplicateInstruction { mnemonic: String },

    #[error("{section} entry #{index} has an empty title")]
    EmptyModuleTitle { section: &'static str, index: usize },

    #[error("invalid instruction format {title:?}: {message}")]
    InvalidFormat { title: String, message: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
