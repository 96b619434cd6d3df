use std::path::Path;

use chrono::Utc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// `LogKind` represents the kind of logging: `stdout` or `logfile`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LogKind {
    /// It logs to console, the default choice.
    #[default]
    Stdout,

    /// It logs on a file in <tmp>/isadoc-<timestamp>.log
    File,
}

/// Name of the log file for a session started now.
pub fn log_file_name() -> String {
    format!("isadoc-{}.log", Utc::now().timestamp())
}

/// Installs the global `tracing` subscriber.
///
/// For [`LogKind::File`] the returned guard owns the background writer:
/// keep it alive until exit or the tail of the log is lost.
pub fn init_logger(kind: LogKind) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match kind {
        LogKind::Stdout => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
        LogKind::File => {
            let dir = std::env::temp_dir();
            let name = log_file_name();
            println!("Logging to file: {:?}", dir.join(&name));

            let (writer, guard) = file_writer(&dir, &name);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
    }
}

fn file_writer(
    dir: &Path,
    name: &str,
) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name))
}
