//! Batch tag parsing
//!
//! Reads every path once through a [`TagReader`], normalizes the raw tags and
//! collects the canonical maps keyed by path. The batch itself never fails:
//! - `NoPermission` failures are left out of the result set
//! - other failures keep the path with an empty tag map, or are left out as
//!   well under [`FailurePolicy::Exclude`]
//!
//! Every failure is also recorded in [`BatchResult::failures`].
//!
//! In parallel mode reads run on a rayon pool; results are still folded in
//! input order, so a duplicated path resolves to its last occurrence in both
//! modes.

use crate::error::{ErrorClass, ReadError};
use crate::models::{BatchResult, FileFailure, TagMap};
use crate::services::tag_normalizer::normalize;
use crate::services::tag_reader::TagReader;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// What happens to a path whose read failed for a reason other than permissions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Keep the path with an empty tag map
    #[default]
    KeepEmpty,
    /// Leave the path out, same as a permission failure
    Exclude,
}

impl FailurePolicy {
    /// Whether a failure of `class` removes the path from the result set
    pub fn excludes(self, class: ErrorClass) -> bool {
        match self {
            FailurePolicy::KeepEmpty => class == ErrorClass::NoPermission,
            FailurePolicy::Exclude => true,
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = wkmp_common::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "keep_empty" => Ok(FailurePolicy::KeepEmpty),
            "exclude" => Ok(FailurePolicy::Exclude),
            other => Err(wkmp_common::Error::InvalidInput(format!(
                "Unknown failure policy '{}' (expected keep-empty or exclude)",
                other
            ))),
        }
    }
}

/// Parses tags for batches of files
pub struct BatchParser<R> {
    reader: R,
    policy: FailurePolicy,
    parallel: bool,
    threads: usize,
}

impl<R: TagReader> BatchParser<R> {
    /// Sequential parser with the default failure policy
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            policy: FailurePolicy::default(),
            parallel: false,
            threads: 0,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable parallel reads
    ///
    /// `threads == 0` uses the global rayon pool.
    pub fn with_parallelism(mut self, parallel: bool, threads: usize) -> Self {
        self.parallel = parallel;
        self.threads = threads;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Read and normalize tags for every path
    pub fn parse<S: AsRef<str> + Sync>(&self, paths: &[S]) -> BatchResult {
        let outcomes = if self.parallel {
            self.read_parallel(paths)
        } else {
            paths
                .iter()
                .map(|path| self.read_one(path.as_ref()))
                .collect()
        };

        let mut result = BatchResult::new();
        for (path, outcome) in paths.iter().zip(outcomes) {
            self.record(&mut result, path.as_ref(), outcome);
        }

        info!(
            processed = paths.len(),
            included = result.len(),
            failed = result.failures.len(),
            "Tag batch complete"
        );

        result
    }

    fn read_parallel<S: AsRef<str> + Sync>(&self, paths: &[S]) -> Vec<Result<TagMap, ReadError>> {
        let run = || -> Vec<Result<TagMap, ReadError>> {
            paths
                .par_iter()
                .map(|path| self.read_one(path.as_ref()))
                .collect()
        };

        if self.threads == 0 {
            return run();
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
        {
            Ok(pool) => pool.install(run),
            Err(e) => {
                warn!(
                    threads = self.threads,
                    "Failed to build tag reader pool, using global pool: {}", e
                );
                run()
            }
        }
    }

    fn read_one(&self, path: &str) -> Result<TagMap, ReadError> {
        self.reader.read(path).map(normalize)
    }

    fn record(&self, result: &mut BatchResult, path: &str, outcome: Result<TagMap, ReadError>) {
        let err = match outcome {
            Ok(tags) => {
                result.files.insert(path.to_string(), tags);
                return;
            }
            Err(err) => err,
        };

        let class = err.class();
        if class == ErrorClass::NoPermission {
            debug!(file = %path, "No permission to read file, excluding from batch");
        } else {
            warn!(
                file = %path,
                class = %class,
                "Error reading metadata from file. Skipping: {}", err
            );
        }

        if !self.policy.excludes(class) {
            result.files.insert(path.to_string(), TagMap::new());
        }

        result.failures.push(FileFailure {
            path: path.to_string(),
            class,
            message: err.to_string(),
        });
    }
}
