//! Log setup
//!
//! The TUI owns stdout and stderr, so events go to a file. The filter is read
//! from `ALGOTTY_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use crate::config::LOG_ENV;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to `path`
pub fn init(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
