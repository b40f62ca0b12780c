//! # WKMP Common Library
//!
//! Shared code for the WKMP tools:
//! - Error type shared across crates
//! - TOML configuration discovery and loading
//! - Logging configuration

pub mod config;
pub mod error;

pub use error::{Error, Result};
