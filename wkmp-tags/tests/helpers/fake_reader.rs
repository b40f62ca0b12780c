//! In-memory tag reader
//!
//! Answers from a table of raw tag maps and scripted failures, and counts
//! calls per path so tests can check the one-read-per-path contract.

use std::collections::HashMap;
use std::sync::Mutex;
use wkmp_tags::services::TagReader;
use wkmp_tags::{ErrorClass, ReadError, TagMap};

#[derive(Default)]
pub struct FakeReader {
    files: HashMap<String, TagMap>,
    failures: HashMap<String, ErrorClass>,
    failures_after: HashMap<String, (usize, ErrorClass)>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakeReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a readable file with its raw tags
    pub fn with_file(mut self, path: &str, tags: &[(&str, &[&str])]) -> Self {
        let raw: TagMap = tags.iter().copied().collect();
        self.files.insert(path.to_string(), raw);
        self
    }

    /// Register a file whose read fails with `class`
    pub fn with_failure(mut self, path: &str, class: ErrorClass) -> Self {
        self.failures.insert(path.to_string(), class);
        self
    }

    /// Let the first `reads` reads of `path` succeed, then fail with `class`
    pub fn with_failure_after(mut self, path: &str, reads: usize, class: ErrorClass) -> Self {
        self.failures_after.insert(path.to_string(), (reads, class));
        self
    }

    /// Number of reads issued for `path`
    pub fn calls(&self, path: &str) -> usize {
        self.calls.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

impl TagReader for FakeReader {
    fn read(&self, path: &str) -> Result<TagMap, ReadError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let count = calls.entry(path.to_string()).or_insert(0);
            *count += 1;
            *count
        };

        if let Some(class) = self.failures.get(path) {
            return Err(error_for(*class));
        }
        if let Some((reads, class)) = self.failures_after.get(path) {
            if call > *reads {
                return Err(error_for(*class));
            }
        }

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ReadError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)))
    }
}

fn error_for(class: ErrorClass) -> ReadError {
    match class {
        ErrorClass::NoPermission => ReadError::NoPermission,
        ErrorClass::NoAudioProperties => ReadError::NoAudioProperties,
        ErrorClass::CannotParse => ReadError::CannotParse("corrupt frame".to_string()),
        ErrorClass::Unclassified => ReadError::Other("device not ready".to_string()),
    }
}
