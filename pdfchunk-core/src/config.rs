//! Configuration types for the chunk builder

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Default soft upper bound on chunk length, in characters
pub const DEFAULT_CHUNK_SIZE_CHARS: usize = 1200;
/// Default number of sentences repeated across chunk and page boundaries
pub const DEFAULT_OVERLAP_SENTENCES: usize = 2;
/// Default page limit for library callers
pub const DEFAULT_MAX_PAGES: usize = 5;
/// Default cumulative character budget for library callers
pub const DEFAULT_MAX_TOTAL_CHARS: usize = 200_000;
/// Default per-page character cap
pub const DEFAULT_PER_PAGE_CHAR_CAP: usize = 50_000;

/// Chunking parameters and safety caps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Soft upper bound on chunk length in characters (must be > 0)
    pub chunk_size_chars: usize,
    /// Trailing sentences carried into the next chunk and the next page
    pub overlap_sentences: usize,
    /// Hard cap on the number of pages read
    pub max_pages: usize,
    /// Hard cap on characters consumed across all pages
    pub max_total_chars: usize,
    /// Hard cap on characters taken from a single page (None = unlimited)
    pub per_page_char_cap: Option<usize>,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size_chars: DEFAULT_CHUNK_SIZE_CHARS,
            overlap_sentences: DEFAULT_OVERLAP_SENTENCES,
            max_pages: DEFAULT_MAX_PAGES,
            max_total_chars: DEFAULT_MAX_TOTAL_CHARS,
            per_page_char_cap: Some(DEFAULT_PER_PAGE_CHAR_CAP),
        }
    }
}

impl ChunkConfig {
    /// Defaults for embedding the chunker in an ingestion step
    pub fn library_default() -> Self {
        Self::default()
    }

    /// Defaults used by the command-line entry point
    pub fn cli_default() -> Self {
        Self {
            max_pages: 15,
            max_total_chars: 300_000,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ChunkConfigBuilder {
        ChunkConfigBuilder::default()
    }

    /// Check the configuration for values the builder cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size_chars == 0 {
            return Err(CoreError::InvalidConfig(
                "chunk_size_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ChunkConfigBuilder {
    config: ChunkConfig,
}

impl ChunkConfigBuilder {
    /// Start from an existing configuration instead of the defaults
    pub fn from_config(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// Set the soft chunk length bound
    pub fn chunk_size_chars(mut self, size: usize) -> Self {
        self.config.chunk_size_chars = size;
        self
    }

    /// Set the number of overlap sentences
    pub fn overlap_sentences(mut self, count: usize) -> Self {
        self.config.overlap_sentences = count;
        self
    }

    /// Set the page limit
    pub fn max_pages(mut self, pages: usize) -> Self {
        self.config.max_pages = pages;
        self
    }

    /// Set the cumulative character budget
    pub fn max_total_chars(mut self, chars: usize) -> Self {
        self.config.max_total_chars = chars;
        self
    }

    /// Set or clear the per-page character cap
    pub fn per_page_char_cap(mut self, cap: Option<usize>) -> Self {
        self.config.per_page_char_cap = cap;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ChunkConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
