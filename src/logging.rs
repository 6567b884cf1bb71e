//! Per-run log file setup.
//!
//! Every run writes a timestamped `futures-cli-YYYYMMDD_HHMMSS.log` next to
//! the binary, alongside an env-filtered console layer. `RUST_LOG` controls
//! verbosity; the file layer always records at debug.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::{Error, Result};

/// Initialize tracing with a console layer and a per-run log file.
///
/// Returns the path of the created log file.
pub fn init() -> Result<PathBuf> {
    let path = PathBuf::from(format!(
        "futures-cli-{}.log",
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    let file = File::create(&path)
        .map_err(|e| Error::Config(format!("cannot create log file {}: {}", path.display(), e)))?;

    let console_layer = fmt::layer()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {}", e)))?;

    Ok(path)
}
