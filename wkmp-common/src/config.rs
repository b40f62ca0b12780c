//! Configuration file discovery and loading
//!
//! Config file resolution follows this priority order:
//! 1. Explicit path (command-line argument or module-specific environment variable)
//! 2. `$WKMP_CONFIG_DIR/<module>.toml`
//! 3. `<user config dir>/wkmp/<module>.toml`
//! 4. `/etc/wkmp/<module>.toml` (Linux only)
//!
//! A missing config file is never fatal: the caller gets built-in defaults and
//! a warning. A config file that exists but cannot be parsed is an error.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the directory searched for config files
pub const CONFIG_DIR_ENV: &str = "WKMP_CONFIG_DIR";

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Candidate config file locations for a module, highest priority first
pub fn config_search_paths(module_name: &str) -> Vec<PathBuf> {
    let file_name = format!("{}.toml", module_name);
    let mut paths = Vec::new();

    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            paths.push(PathBuf::from(dir).join(&file_name));
        }
    }

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("wkmp").join(&file_name));
    }

    if cfg!(target_os = "linux") {
        paths.push(PathBuf::from("/etc/wkmp").join(&file_name));
    }

    paths
}

/// First existing config file for a module, if any
pub fn find_config_file(module_name: &str) -> Option<PathBuf> {
    config_search_paths(module_name)
        .into_iter()
        .find(|path| path.is_file())
}

/// Read and parse a TOML config file
pub fn parse_toml_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse TOML {}: {}", path.display(), e))
    })
}

/// Load a module's TOML config
///
/// An explicit path must exist and parse. Without one, the search paths are
/// tried in order; if none exists the built-in defaults are returned.
pub fn load_toml_config<T>(module_name: &str, explicit: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config = parse_toml_config(path)?;
        info!("Loaded configuration from {}", path.display());
        return Ok(config);
    }

    match find_config_file(module_name) {
        Some(path) => {
            let config = parse_toml_config(&path)?;
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        None => {
            warn!(
                "No config file found for {}, using built-in defaults",
                module_name
            );
            Ok(T::default())
        }
    }
}
