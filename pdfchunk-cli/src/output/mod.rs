//! Output formatting module

use anyhow::{Context, Result};
use pdfchunk_core::ChunkStats;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Chunks produced for one input document
#[derive(Debug, Clone)]
pub struct DocumentChunks {
    /// Path of the source document, as given on the command line
    pub path: String,
    /// Chunks in reading order
    pub chunks: Vec<String>,
    /// Run statistics
    pub stats: ChunkStats,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the chunks of one document
    fn format_document(&mut self, document: &DocumentChunks) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chunk count, first/last lengths and previews
    Summary,
    /// One chunk per line
    Text,
    /// JSON array of documents with their chunks and statistics
    Json,
}

pub mod json;
pub mod summary;
pub mod text;

pub use json::JsonFormatter;
pub use summary::SummaryFormatter;
pub use text::TextFormatter;

/// Create a formatter writing to `output`, or stdout when unset
pub fn create_formatter(
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<Box<dyn OutputFormatter>> {
    let writer: Box<dyn io::Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Summary => Box::new(SummaryFormatter::new(writer)),
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    })
}
