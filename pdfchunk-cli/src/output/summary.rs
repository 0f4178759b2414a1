//! Human-readable run summary

use super::{DocumentChunks, OutputFormatter};
use anyhow::Result;
use pdfchunk_core::truncate_chars;
use std::io::Write;

/// Characters shown in each chunk preview
pub const PREVIEW_CHARS: usize = 500;

/// Summary formatter - chunk count, lengths and previews of the first and
/// last chunk of every document
pub struct SummaryFormatter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryFormatter<W> {
    /// Create a new summary formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn preview(&mut self, label: &str, chunk: &str) -> Result<()> {
        writeln!(
            self.writer,
            "\n--- {label} chunk preview (first {PREVIEW_CHARS} chars) ---\n"
        )?;
        writeln!(self.writer, "{}", truncate_chars(chunk, PREVIEW_CHARS))?;
        Ok(())
    }
}

impl<W: Write> OutputFormatter for SummaryFormatter<W> {
    fn format_document(&mut self, document: &DocumentChunks) -> Result<()> {
        let stats = &document.stats;
        writeln!(self.writer, "File: {}", document.path)?;
        writeln!(
            self.writer,
            "Pages read: {} (skipped: {}), characters processed: {}",
            stats.pages_read, stats.pages_skipped, stats.chars_processed
        )?;
        writeln!(self.writer, "Chunks: {}", document.chunks.len())?;

        if let (Some(first), Some(last)) = (document.chunks.first(), document.chunks.last()) {
            writeln!(self.writer, "First chunk length: {}", first.chars().count())?;
            writeln!(self.writer, "Last chunk length: {}", last.chars().count())?;
            self.preview("First", first)?;
            self.preview("Last", last)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
