//! Result of one batch parse

use crate::error::ErrorClass;
use crate::models::TagMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// A file whose tag read failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    /// Path as supplied by the caller
    pub path: String,
    /// Failure classification
    pub class: ErrorClass,
    /// Reader error message
    pub message: String,
}

/// Canonical tags keyed by file path, plus every per-path failure
///
/// Entries are only ever added or overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    pub files: BTreeMap<String, TagMap>,
    pub failures: Vec<FileFailure>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical tags for `path`
    pub fn get(&self, path: &str) -> Option<&TagMap> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of paths in the result set
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Failures of a given class
    pub fn failures_of(&self, class: ErrorClass) -> impl Iterator<Item = &FileFailure> {
        self.failures.iter().filter(move |f| f.class == class)
    }

    /// Drop the failure list, keeping only the path mapping
    pub fn into_files(self) -> BTreeMap<String, TagMap> {
        self.files
    }
}
