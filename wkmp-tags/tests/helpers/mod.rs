//! Test Helper Utilities
//!
//! Shared utilities for testing wkmp-tags

#![allow(dead_code)]

pub mod audio_generator;
pub mod fake_reader;
pub mod log_capture;

pub use audio_generator::{generate_test_wav, AudioConfig};
pub use fake_reader::FakeReader;
pub use log_capture::LogCapture;
