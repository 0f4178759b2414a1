//! Chunk command implementation

use crate::{
    error::CliError,
    input::{open_document, resolve_patterns},
    output::{create_formatter, DocumentChunks, OutputFormat},
    progress::ProgressReporter,
};
use anyhow::Result;
use clap::Args;
use pdfchunk_core::{
    config::{DEFAULT_CHUNK_SIZE_CHARS, DEFAULT_OVERLAP_SENTENCES, DEFAULT_PER_PAGE_CHAR_CAP},
    ChunkBuilder, ChunkConfig, DocumentSource,
};
use std::path::PathBuf;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input PDF files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub limits: LimitArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Chunk size, overlap and safety caps
#[derive(Debug, Clone, Args)]
pub struct LimitArgs {
    /// Soft upper bound on chunk length, in characters
    #[arg(long, env = "PDFCHUNK_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE_CHARS)]
    pub chunk_size: usize,

    /// Sentences repeated between consecutive chunks and pages
    #[arg(long, env = "PDFCHUNK_OVERLAP", default_value_t = DEFAULT_OVERLAP_SENTENCES)]
    pub overlap: usize,

    /// Read at most this many pages per document
    #[arg(long, env = "PDFCHUNK_MAX_PAGES", default_value_t = ChunkConfig::cli_default().max_pages)]
    pub max_pages: usize,

    /// Stop after this many characters per document
    #[arg(
        long,
        env = "PDFCHUNK_MAX_TOTAL_CHARS",
        default_value_t = ChunkConfig::cli_default().max_total_chars
    )]
    pub max_total_chars: usize,

    /// Take at most this many characters from a single page
    #[arg(long, env = "PDFCHUNK_PAGE_CHAR_CAP", default_value_t = DEFAULT_PER_PAGE_CHAR_CAP)]
    pub page_char_cap: usize,

    /// Do not cap characters per page; wins over `--page-char-cap`
    #[arg(long)]
    pub no_page_cap: bool,
}

impl Default for LimitArgs {
    fn default() -> Self {
        let config = ChunkConfig::cli_default();
        Self {
            chunk_size: config.chunk_size_chars,
            overlap: config.overlap_sentences,
            max_pages: config.max_pages,
            max_total_chars: config.max_total_chars,
            page_char_cap: config.per_page_char_cap.unwrap_or(DEFAULT_PER_PAGE_CHAR_CAP),
            no_page_cap: false,
        }
    }
}

impl LimitArgs {
    /// Map the arguments onto a validated chunk configuration
    pub fn to_config(&self) -> Result<ChunkConfig> {
        ChunkConfig::builder()
            .chunk_size_chars(self.chunk_size)
            .overlap_sentences(self.overlap)
            .max_pages(self.max_pages)
            .max_total_chars(self.max_total_chars)
            .per_page_char_cap((!self.no_page_cap).then_some(self.page_char_cap))
            .build()
            .map_err(|e| CliError::InvalidLimits(e.to_string()).into())
    }
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting PDF chunking");
        log::debug!("Arguments: {:?}", self);

        let config = self.limits.to_config()?;
        let builder = ChunkBuilder::new(config)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut formatter = create_formatter(self.format, self.output.as_deref())?;
        let mut reporter = ProgressReporter::new(self.quiet);

        for path in &files {
            let source = open_document(path)?;
            let pages_to_visit = source.page_count().min(builder.config().max_pages);

            let name = path.display().to_string();
            reporter.start_document(&name, pages_to_visit as u64);
            let output = builder.build(source, &mut reporter);
            reporter.finish_document(output.chunks.len());

            log::info!(
                "{}: {} chunks from {} pages ({} chars)",
                name,
                output.chunks.len(),
                output.stats.pages_read,
                output.stats.chars_processed
            );

            formatter.format_document(&DocumentChunks {
                path: name,
                chunks: output.chunks,
                stats: output.stats,
            })?;
        }

        formatter.finish()
    }
}
