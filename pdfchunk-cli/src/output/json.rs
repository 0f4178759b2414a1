//! JSON output formatter

use super::{DocumentChunks, OutputFormatter};
use anyhow::Result;
use pdfchunk_core::ChunkStats;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// One document in the JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Source document path
    pub path: String,
    /// Chunks in reading order
    pub chunks: Vec<ChunkData>,
    /// Run statistics
    pub stats: ChunkStats,
}

/// One chunk in the JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Position of the chunk in the document's chunk sequence
    pub index: usize,
    /// The chunk text
    pub text: String,
    /// Length of the chunk in characters
    pub chars: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &DocumentChunks) -> Result<()> {
        let chunks = document
            .chunks
            .iter()
            .enumerate()
            .map(|(index, text)| ChunkData {
                index,
                text: text.clone(),
                chars: text.chars().count(),
            })
            .collect();

        self.documents.push(DocumentData {
            path: document.path.clone(),
            chunks,
            stats: document.stats.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
