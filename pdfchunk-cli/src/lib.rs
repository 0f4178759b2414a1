//! pdfchunk CLI library
//!
//! This library provides the command-line interface for chunking PDF text
//! with `pdfchunk-core`.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
