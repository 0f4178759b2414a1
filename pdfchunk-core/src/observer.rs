//! Progress side channel for the chunk builder

use crate::error::SourceError;

/// Progress signal emitted after a page has been admitted to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    /// Zero-based page index
    pub page_index: usize,
    /// Characters taken from this page after capping
    pub page_chars: usize,
    /// Characters consumed so far, this page included
    pub total_chars: usize,
}

/// Why a page contributed nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The document source failed to extract the page
    ExtractionFailed(SourceError),
    /// The page held no text after normalization
    Empty,
}

/// Why page iteration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every page of the document was visited
    #[default]
    Exhausted,
    /// `max_pages` pages were consumed
    MaxPages,
    /// The cumulative character budget ran out
    MaxTotalChars,
}

/// Receives progress events while a document is chunked
///
/// All methods default to doing nothing.
pub trait ProgressObserver {
    /// A page was admitted and its sentences are about to be chunked
    fn page_processed(&mut self, _progress: &PageProgress) {}

    /// A page was skipped
    fn page_skipped(&mut self, _page_index: usize, _reason: &SkipReason) {}

    /// Iteration stopped on a cap before the document was exhausted
    fn budget_exhausted(&mut self, _reason: StopReason) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Observer that forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn page_processed(&mut self, progress: &PageProgress) {
        log::info!(
            "page={} chars_processed={}",
            progress.page_index + 1,
            progress.total_chars
        );
    }

    // Extraction failures are already logged at warn level by the builder.
    fn page_skipped(&mut self, page_index: usize, reason: &SkipReason) {
        match reason {
            SkipReason::ExtractionFailed(_) => log::debug!("page={} skipped", page_index + 1),
            SkipReason::Empty => log::debug!("page={} skipped: no text", page_index + 1),
        }
    }

    fn budget_exhausted(&mut self, reason: StopReason) {
        log::info!("Stopped reading pages: {reason:?}");
    }
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &mut O {
    fn page_processed(&mut self, progress: &PageProgress) {
        (**self).page_processed(progress)
    }

    fn page_skipped(&mut self, page_index: usize, reason: &SkipReason) {
        (**self).page_skipped(page_index, reason)
    }

    fn budget_exhausted(&mut self, reason: StopReason) {
        (**self).budget_exhausted(reason)
    }
}
