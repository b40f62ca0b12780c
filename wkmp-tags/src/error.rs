//! Error types for wkmp-tags
//!
//! - [`ReadError`]: a single file's tag read failed; classified by [`ErrorClass`]
//! - [`TagsError`]: configuration or report output failed

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a tag read failure
///
/// Only [`ErrorClass::NoPermission`] excludes a file from a batch by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// File exists but access rights prevent reading it
    NoPermission,
    /// File is readable but no audio properties could be extracted
    NoAudioProperties,
    /// Format unrecognized or file corrupt
    CannotParse,
    /// Any other failure (missing file, unexpected I/O error)
    Unclassified,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorClass::NoPermission => "no_permission",
            ErrorClass::NoAudioProperties => "no_audio_properties",
            ErrorClass::CannotParse => "cannot_parse",
            ErrorClass::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

/// Tag reader errors
#[derive(Debug, Error)]
pub enum ReadError {
    /// Insufficient permission to read file
    #[error("Insufficient permission to read file")]
    NoPermission,

    /// Audio properties unavailable
    #[error("Cannot get audio properties")]
    NoAudioProperties,

    /// File could not be parsed
    #[error("Cannot parse file: {0}")]
    CannotParse(String),

    /// I/O error other than a permission failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else the reader could not classify
    #[error("{0}")]
    Other(String),
}

impl ReadError {
    /// Error class used by the batch exclusion policy
    pub fn class(&self) -> ErrorClass {
        match self {
            ReadError::NoPermission => ErrorClass::NoPermission,
            ReadError::NoAudioProperties => ErrorClass::NoAudioProperties,
            ReadError::CannotParse(_) => ErrorClass::CannotParse,
            ReadError::Io(_) | ReadError::Other(_) => ErrorClass::Unclassified,
        }
    }
}

/// Errors outside the per-file read path
#[derive(Debug, Error)]
pub enum TagsError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Common(#[from] wkmp_common::Error),

    /// Report serialization error
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error writing output or reading a path list
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wkmp-tags operations
pub type Result<T> = std::result::Result<T, TagsError>;
