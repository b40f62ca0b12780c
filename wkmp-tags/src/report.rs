//! JSON output of a batch
//!
//! Default output is the bare `path -> tags` object. The full report adds a
//! timestamp and the per-path failure list.

use crate::error::Result;
use crate::models::{BatchResult, FileFailure, TagMap};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Full batch report
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub files: &'a BTreeMap<String, TagMap>,
    pub failures: &'a [FileFailure],
}

impl<'a> Report<'a> {
    pub fn new(result: &'a BatchResult) -> Self {
        Self {
            generated_at: Utc::now(),
            files: &result.files,
            failures: &result.failures,
        }
    }
}

/// Write a batch as JSON followed by a newline
pub fn write_json<W: Write>(
    mut writer: W,
    result: &BatchResult,
    with_failures: bool,
    pretty: bool,
) -> Result<()> {
    if with_failures {
        serialize(&mut writer, &Report::new(result), pretty)?;
    } else {
        serialize(&mut writer, &result.files, pretty)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn serialize<W: Write, T: Serialize>(writer: W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

/// Read newline-separated paths, skipping blank lines and `#` comments
pub fn read_path_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
