//! Launch settings, read from the command line.
//!
//! ```text
//! isadoc [--log-file] [--assets <dir>] [--catalog <file.json>]
//! ```

use std::path::PathBuf;

use logger::LogKind;
use ui::diagrams::DEFAULT_ASSETS_DIR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_kind: LogKind,
    /// Directory the diagram handles are resolved against.
    pub assets_dir: PathBuf,
    /// Reference bundle replacing the embedded one.
    pub catalog: Option<PathBuf>,
    /// Arguments that were not understood, reported once logging is up.
    pub ignored: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_kind: LogKind::Stdout,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            catalog: None,
            ignored: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut settings = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log-file" => settings.log_kind = LogKind::File,
                "--assets" => match args.next() {
                    Some(dir) => settings.assets_dir = PathBuf::from(dir),
                    None => settings.ignored.push(arg),
                },
                "--catalog" => match args.next() {
                    Some(file) => settings.catalog = Some(PathBuf::from(file)),
                    None => settings.ignored.push(arg),
                },
                _ => settings.ignored.push(arg),
            }
        }

        settings
    }
}
