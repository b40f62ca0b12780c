//! wkmp-tags library interface
//!
//! Reads audio file tags in batches and normalizes them into canonical
//! multi-valued tag maps keyed by file path.
//!
//! ```rust,ignore
//! use wkmp_tags::services::{BatchParser, LoftyTagReader};
//!
//! let parser = BatchParser::new(LoftyTagReader::new());
//! let result = parser.parse(&["/music/a.mp3", "/music/b.flac"]);
//! for (path, tags) in &result.files {
//!     println!("{}: {:?}", path, tags.get("duration"));
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;

pub use crate::error::{ErrorClass, ReadError, Result, TagsError};
pub use crate::models::{BatchResult, FileFailure, TagMap};
