//! Configuration for wkmp-tags
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (--policy, --parallel, --threads, --log-level)
//! 2. Environment variables (WKMP_TAGS_CONFIG, WKMP_TAGS_FAILURE_POLICY)
//! 3. TOML configuration file (`wkmp-tags.toml`, see `wkmp_common::config`)
//! 4. Built-in defaults
//!
//! A missing TOML file is not an error; the built-in defaults apply.

use crate::error::Result;
use crate::services::FailurePolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::info;
use wkmp_common::config::{load_toml_config, LoggingConfig};

/// Module name used to locate `wkmp-tags.toml`
pub const MODULE_NAME: &str = "wkmp-tags";

/// Configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TagsConfig {
    /// Handling of files that fail for reasons other than permissions
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Read files on a rayon pool instead of one at a time
    #[serde(default)]
    pub parallel: bool,

    /// Worker count for parallel mode (0 = rayon global pool)
    ///
    /// A non-zero count implies `parallel`, from the file or `--threads`.
    #[serde(default)]
    pub threads: usize,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TagsConfig {
    /// Load the TOML config, from `explicit` when given or the standard locations
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Ok(load_toml_config(MODULE_NAME, explicit)?)
    }

    /// Apply command-line overrides on top of the file settings
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(policy) = overrides.failure_policy {
            self.failure_policy = policy;
        }
        if overrides.parallel {
            self.parallel = true;
        }
        if let Some(threads) = overrides.threads {
            self.threads = threads;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        // A worker count implies parallel mode
        self.parallel = self.parallel || self.threads > 0;

        info!(
            policy = ?self.failure_policy,
            parallel = self.parallel,
            threads = self.threads,
            "Resolved tag parser configuration"
        );
        self
    }
}

/// Command-line configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub failure_policy: Option<FailurePolicy>,
    pub parallel: bool,
    pub threads: Option<usize>,
    pub log_level: Option<String>,
}
