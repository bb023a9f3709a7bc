use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_NAME: &str = "mcu-graph.log";

/// Install the global subscriber: compact lines on stderr, plus a daily
/// rolling JSON file when `log_file` is given.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    let registry = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr);

    let result = match log_file.map(|path| rolling_appender(&path)) {
        Some(appender) => registry
            .with(fmt::layer().with_writer(appender).with_ansi(false).json())
            .try_init(),
        None => registry.try_init(),
    };

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

/// `RUST_LOG` wins; otherwise our own crate at info, or debug when verbose.
fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mcu_graph={level}")))
}

fn rolling_appender(path: &Path) -> RollingFileAppender {
    let (dir, prefix) = split_log_path(path);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot create log directory {}: {e}", dir.display());
    }
    rolling::daily(dir, prefix)
}

/// Directory and file-name prefix for the appender. The appender adds the
/// date suffix itself.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let prefix = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_NAME));
    (dir, prefix)
}
