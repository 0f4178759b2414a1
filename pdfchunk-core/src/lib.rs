//! Sentence-aware chunking of extracted PDF text
//!
//! Pages are normalized, split on sentence-ending punctuation and packed
//! greedily into chunks bounded by a character budget. Consecutive chunks
//! and consecutive pages share a configurable number of overlap sentences,
//! and hard caps on pages, per-page characters and total characters bound
//! the work done on oversized documents.
//!
//! # Example
//!
//! ```rust
//! use pdfchunk_core::{ChunkBuilder, ChunkConfig, MemorySource};
//!
//! let config = ChunkConfig::builder()
//!     .chunk_size_chars(40)
//!     .overlap_sentences(1)
//!     .build()
//!     .unwrap();
//! let builder = ChunkBuilder::new(config).unwrap();
//!
//! let pages = MemorySource::new([
//!     "The first page opens here.\nIt goes on a little.",
//!     "The second page closes it.",
//! ]);
//! let output = builder.build_quiet(pages);
//!
//! assert!(output.chunks.iter().all(|c| c.chars().count() <= 40));
//! assert_eq!(output.stats.pages_read, 2);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod normalize;
pub mod observer;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod segment;
pub mod source;

// Re-export key types
pub use builder::{build_sentence_chunks, ChunkBuilder, ChunkOutput, ChunkStats};
pub use config::{ChunkConfig, ChunkConfigBuilder};
pub use error::{CoreError, Result, SourceError};
pub use normalize::{char_len, normalize, truncate_chars};
pub use observer::{
    LogObserver, NoopObserver, PageProgress, ProgressObserver, SkipReason, StopReason,
};
#[cfg(feature = "pdf")]
pub use pdf::PdfSource;
pub use segment::{split_sentences, Sentences};
pub use source::{DocumentSource, MemorySource};
