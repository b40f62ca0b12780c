//! Data models for wkmp-tags

pub mod batch_result;
pub mod tag_map;

pub use batch_result::{BatchResult, FileFailure};
pub use tag_map::{TagMap, TagValue};
