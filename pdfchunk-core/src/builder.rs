//! Greedy sentence chunking with overlap
//!
//! Pages are pulled from a [`DocumentSource`] in order, normalized, capped
//! against the per-page and cumulative budgets, split into sentences and
//! packed left to right into chunks of at most `chunk_size_chars`
//! characters. When a chunk is flushed its last `overlap_sentences`
//! sentences seed the next one, and the tail of every page is carried into
//! the sentence stream of the next page.

use crate::{
    config::ChunkConfig,
    error::Result,
    normalize::{char_len, normalize, truncate_chars},
    observer::{NoopObserver, PageProgress, ProgressObserver, SkipReason, StopReason},
    segment::split_sentences,
    source::{DocumentSource, MemorySource},
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Sentences held over from one page to the next
type Carry = SmallVec<[String; 4]>;

/// Counters describing one chunking run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Pages admitted to the character budget
    pub pages_read: usize,
    /// Pages skipped because extraction failed or they held no text
    pub pages_skipped: usize,
    /// Characters consumed across all admitted pages
    pub chars_processed: usize,
    /// Number of chunks in the output
    pub chunks_emitted: usize,
    /// Sentences longer than the chunk size that were cut down
    pub truncated_sentences: usize,
    /// Why page iteration ended
    pub stop_reason: StopReason,
}

/// Chunks in reading order plus run statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkOutput {
    /// Emitted chunks; never empty strings
    pub chunks: Vec<String>,
    /// Run statistics
    pub stats: ChunkStats,
}

/// Unflushed sentences and their joined length
#[derive(Debug, Default)]
struct Accumulator {
    sentences: Vec<String>,
    len: usize,
}

impl Accumulator {
    fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Length `sentence` would add, counting the joining space
    fn increment_for(&self, sentence_len: usize) -> usize {
        sentence_len + usize::from(!self.is_empty())
    }

    fn push(&mut self, sentence: String, increment: usize) {
        self.sentences.push(sentence);
        self.len += increment;
    }

    fn reset_to(&mut self, sentences: Vec<String>) {
        self.len = joined_len(&sentences);
        self.sentences = sentences;
    }
}

/// Length of `sentences` joined by single spaces
fn joined_len(sentences: &[String]) -> usize {
    let chars: usize = sentences.iter().map(|s| char_len(s)).sum();
    chars + sentences.len().saturating_sub(1)
}

/// Mutable state of one chunking run
struct ChunkState<'c> {
    config: &'c ChunkConfig,
    acc: Accumulator,
    page_carry: Carry,
    chunks: Vec<String>,
    stats: ChunkStats,
}

impl<'c> ChunkState<'c> {
    fn new(config: &'c ChunkConfig) -> Self {
        Self {
            config,
            acc: Accumulator::default(),
            page_carry: Carry::new(),
            chunks: Vec::new(),
            stats: ChunkStats::default(),
        }
    }

    /// Chunk the sentences of one capped page, carry prefix first
    fn process_page(&mut self, text: &str) {
        let overlap = self.config.overlap_sentences;

        let mut sentences: Vec<String> = std::mem::take(&mut self.page_carry).into_vec();
        sentences.extend(split_sentences(text).map(str::to_owned));

        if overlap > 0 {
            let start = sentences.len().saturating_sub(overlap);
            self.page_carry = sentences[start..].iter().cloned().collect();
        }

        for sentence in sentences {
            self.push_sentence(sentence);
        }
    }

    /// Place one sentence, flushing as many times as needed
    fn push_sentence(&mut self, sentence: String) {
        let size = self.config.chunk_size_chars;
        let sentence_len = char_len(&sentence);

        loop {
            if self.acc.is_empty() && sentence_len > size {
                self.chunks.push(truncate_chars(&sentence, size).to_string());
                self.stats.truncated_sentences += 1;
                return;
            }

            let increment = self.acc.increment_for(sentence_len);
            if self.acc.len + increment <= size {
                self.acc.push(sentence, increment);
                return;
            }

            self.flush_with_overlap(sentence_len);
        }
    }

    /// Emit the accumulator and reseed it with its overlap tail
    ///
    /// Overlap sentences that would not leave room for the pending sentence
    /// are dropped from the front, so the pending sentence is always placed
    /// on the next pass.
    fn flush_with_overlap(&mut self, pending_len: usize) {
        let flushed = std::mem::take(&mut self.acc.sentences);
        self.acc.len = 0;
        self.emit(&flushed);

        let overlap = self.config.overlap_sentences;
        if overlap == 0 {
            return;
        }

        let size = self.config.chunk_size_chars;
        let mut start = flushed.len().saturating_sub(overlap);
        while start < flushed.len() && joined_len(&flushed[start..]) + 1 + pending_len > size {
            start += 1;
        }
        self.acc.reset_to(flushed[start..].to_vec());
    }

    fn emit(&mut self, sentences: &[String]) {
        let text = sentences.join(" ");
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        log::debug!(
            "chunk {}: {} sentences, {} chars",
            self.chunks.len(),
            sentences.len(),
            char_len(text)
        );
        self.chunks.push(text.to_string());
    }

    fn finish(mut self, stop_reason: StopReason) -> ChunkOutput {
        let remaining = std::mem::take(&mut self.acc.sentences);
        self.emit(&remaining);

        self.stats.stop_reason = stop_reason;
        self.stats.chunks_emitted = self.chunks.len();
        ChunkOutput {
            chunks: self.chunks,
            stats: self.stats,
        }
    }
}

/// Sentence chunker over a paged document
///
/// # Example
///
/// ```
/// use pdfchunk_core::{ChunkBuilder, ChunkConfig};
///
/// let config = ChunkConfig::builder()
///     .chunk_size_chars(5)
///     .overlap_sentences(1)
///     .build()
///     .unwrap();
/// let builder = ChunkBuilder::new(config).unwrap();
///
/// let chunks = builder.chunk_pages(["A. B. C. D."]);
/// assert_eq!(chunks, vec!["A. B.", "B. C.", "C. D."]);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkBuilder {
    config: ChunkConfig,
}

impl Default for ChunkBuilder {
    fn default() -> Self {
        Self {
            config: ChunkConfig::default(),
        }
    }
}

impl ChunkBuilder {
    /// Create a builder, rejecting invalid configurations
    pub fn new(config: ChunkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Chunk a document, reporting progress to `observer`
    pub fn build<S, O>(&self, mut source: S, mut observer: O) -> ChunkOutput
    where
        S: DocumentSource,
        O: ProgressObserver,
    {
        let config = &self.config;
        let mut state = ChunkState::new(config);
        let mut stop_reason = StopReason::Exhausted;

        for page_index in 0..source.page_count() {
            if page_index >= config.max_pages {
                stop_reason = StopReason::MaxPages;
                break;
            }

            let raw = match source.extract_page(page_index) {
                Ok(raw) => raw,
                Err(err) => {
                    log::warn!(
                        "Skipping page {} due to extraction error: {err}",
                        page_index + 1
                    );
                    state.stats.pages_skipped += 1;
                    observer.page_skipped(page_index, &SkipReason::ExtractionFailed(err));
                    continue;
                }
            };

            let cleaned = normalize(&raw);
            if cleaned.is_empty() {
                state.stats.pages_skipped += 1;
                observer.page_skipped(page_index, &SkipReason::Empty);
                continue;
            }

            let mut text = cleaned.as_str();
            if let Some(cap) = config.per_page_char_cap {
                text = truncate_chars(text, cap);
            }

            let remaining = config
                .max_total_chars
                .saturating_sub(state.stats.chars_processed);
            if remaining == 0 {
                stop_reason = StopReason::MaxTotalChars;
                break;
            }
            let text = truncate_chars(text, remaining);
            let page_chars = char_len(text);
            state.stats.chars_processed += page_chars;
            state.stats.pages_read += 1;

            observer.page_processed(&PageProgress {
                page_index,
                page_chars,
                total_chars: state.stats.chars_processed,
            });

            state.process_page(text);
        }

        if stop_reason != StopReason::Exhausted {
            observer.budget_exhausted(stop_reason);
        }
        state.finish(stop_reason)
    }

    /// Chunk a document without progress reporting
    pub fn build_quiet<S: DocumentSource>(&self, source: S) -> ChunkOutput {
        self.build(source, NoopObserver)
    }

    /// Chunk pages that are already text
    pub fn chunk_pages<I, T>(&self, pages: I) -> Vec<String>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.build_quiet(MemorySource::new(pages)).chunks
    }
}

/// Chunk `source` with `config` and return only the chunk texts
pub fn build_sentence_chunks<S: DocumentSource>(
    source: S,
    config: &ChunkConfig,
) -> Result<Vec<String>> {
    let builder = ChunkBuilder::new(config.clone())?;
    Ok(builder.build_quiet(source).chunks)
}
