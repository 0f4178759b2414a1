//! Layered error types
//!
//! Document-level failures are fatal and surface as [`CoreError`] before any
//! chunking starts. Page-level failures are [`SourceError`]s: the chunk
//! builder reports them and moves on to the next page.

use thiserror::Error;

/// Errors raised while configuring the chunker or opening a document
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The PDF could not be parsed
    #[cfg(feature = "pdf")]
    #[error("failed to load PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The PDF is encrypted and its text cannot be read
    #[error("document is encrypted")]
    Encrypted,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-page failure reported by a document source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Text extraction failed for a single page
    #[error("text extraction failed on page {page}: {reason}")]
    Extraction {
        /// Zero-based page index
        page: usize,
        /// Underlying cause, as reported by the extractor
        reason: String,
    },

    /// The page index is past the end of the document
    #[error("page {page} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Zero-based page index that was requested
        page: usize,
        /// Number of pages in the document
        count: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
