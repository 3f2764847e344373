//! File-backed tracing setup. The TUI owns stdout, so logs never go there.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::QuizError;

const DEFAULT_FILTER: &str = "info";

/// Install a `tracing` subscriber writing to `path`. Without a path no
/// subscriber is installed and events are discarded.
pub fn init(path: Option<&Path>) -> Result<(), QuizError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(QuizError::Logging)?;

    tracing::info!(log = %path.display(), "logging started");
    Ok(())
}
