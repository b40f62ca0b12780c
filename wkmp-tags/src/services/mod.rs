//! Tag reading, normalization and batch parsing services

pub mod batch_parser;
pub mod tag_normalizer;
pub mod tag_reader;

pub use batch_parser::{BatchParser, FailurePolicy};
pub use tag_normalizer::normalize;
pub use tag_reader::{LoftyTagReader, TagReader};
