//! Tracing setup
//!
//! The log destination lives in the TOML config, so the process subscriber
//! can only be installed once the file is read. Config loading runs under a
//! scoped bootstrap subscriber so discovery messages are not lost.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wkmp_common::config::LoggingConfig;

use crate::error::{Result, TagsError};

/// Build the level filter for the wkmp crates
///
/// `RUST_LOG` takes precedence over `level`.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("wkmp_tags={0},wkmp_common={0}", level)))
        .map_err(|e| config_error(format!("Invalid log level '{}': {}", level, e)))
}

/// Subscriber used while the configuration itself is being loaded
///
/// Meant for `tracing::subscriber::with_default`; nothing is installed
/// globally.
pub fn bootstrap_subscriber<W>(level: &str, writer: W) -> Result<impl Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    Ok(tracing_subscriber::registry().with(env_filter(level)?).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer),
    ))
}

/// Install the process-wide subscriber from the logging config
///
/// Writes to `logging.file` when set (appending), stderr otherwise.
pub fn init_logging(logging: &LoggingConfig, level_override: Option<&str>) -> Result<()> {
    let filter = env_filter(level_override.unwrap_or(&logging.level))?;

    let installed = match &logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| config_error(format!("Failed to open log file {}: {}", path.display(), e)))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .try_init(),
    };

    installed.map_err(|e| config_error(format!("Failed to install logger: {}", e)))
}

fn config_error(message: String) -> TagsError {
    TagsError::Common(wkmp_common::Error::Config(message))
}
