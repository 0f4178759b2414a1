//! Plain text output formatter

use super::{DocumentChunks, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one chunk per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &DocumentChunks) -> Result<()> {
        // Chunks are whitespace-normalized, so each fits on one line
        for chunk in &document.chunks {
            writeln!(self.writer, "{chunk}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::document;

    #[test]
    fn test_one_chunk_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_document(&document("a.pdf", &["First chunk.", "Second chunk."]))
                .unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "First chunk.\nSecond chunk.\n");
    }

    #[test]
    fn test_empty_document_writes_nothing() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_document(&document("a.pdf", &[])).unwrap();
            formatter.finish().unwrap();
        }
        assert!(buffer.is_empty());
    }
}
