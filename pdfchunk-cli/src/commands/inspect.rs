//! Inspect command implementation

use crate::input::open_document;
use anyhow::Result;
use clap::Args;
use pdfchunk_core::{char_len, normalize, ChunkConfig, DocumentSource};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Input PDF file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Inspect at most this many pages
    #[arg(long, env = "PDFCHUNK_MAX_PAGES", default_value_t = ChunkConfig::cli_default().max_pages)]
    pub max_pages: usize,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(0, false);

        let mut source = open_document(&self.input)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report(&mut source, self.max_pages, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Write the page count and the normalized length of each visited page
fn report<S: DocumentSource, W: Write>(
    source: &mut S,
    max_pages: usize,
    out: &mut W,
) -> Result<()> {
    let count = source.page_count();
    writeln!(out, "Pages: {count}")?;

    for index in 0..count.min(max_pages) {
        match source.extract_page(index) {
            Ok(raw) => writeln!(out, "page {}: {} chars", index + 1, char_len(&normalize(&raw)))?,
            Err(err) => writeln!(out, "page {}: {err}", index + 1)?,
        }
    }
    if count > max_pages {
        writeln!(out, "({} more pages not inspected)", count - max_pages)?;
    }
    Ok(())
}
