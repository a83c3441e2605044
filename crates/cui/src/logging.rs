use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "CARDTABLE_LOG";
pub const DEFAULT_LOG_FILE: &str = "cardtable.log";

/// Keeps the background writer alive; dropping it flushes the log.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub path: PathBuf,
}

/// The terminal owns stdout, so logs only ever go to a file. Nothing is
/// installed unless a path was given or the filter variable is set.
pub fn init_logging(path: Option<&Path>) -> Result<Option<LoggingGuard>> {
    let env_filter = std::env::var(LOG_ENV).ok();
    let path = match (path, env_filter.is_some()) {
        (Some(path), _) => path.to_path_buf(),
        (None, true) => PathBuf::from(DEFAULT_LOG_FILE),
        (None, false) => return Ok(None),
    };

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory at {}", parent.display()))?;
    }
    let file =
        File::create(&path).with_context(|| format!("creating log file at {}", path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let filter = env_filter
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish();

    // A subscriber may already be installed when embedded in tests; events
    // then keep flowing to that one.
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        tracing::debug!("log file not installed: {err}");
    }

    Ok(Some(LoggingGuard {
        _guard: guard,
        path,
    }))
}
