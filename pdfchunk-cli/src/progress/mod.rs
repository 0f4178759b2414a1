//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use pdfchunk_core::{LogObserver, PageProgress, ProgressObserver, SkipReason, StopReason};
use std::time::Duration;

/// Page progress bar for the document being chunked
///
/// Events are also forwarded to [`LogObserver`], so `-v` shows per-page
/// lines even when the bar is hidden.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    log: LogObserver,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            log: LogObserver,
        }
    }

    /// Start a bar for a document with `total_pages` pages to visit
    pub fn start_document(&mut self, name: &str, total_pages: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_pages);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {prefix} {bar:40.cyan/blue} {pos}/{len} pages {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        pb.set_prefix(name.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Finish the current document's bar
    pub fn finish_document(&mut self, chunks: usize) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message(format!("{chunks} chunks"));
        }
    }
}

impl ProgressObserver for ProgressReporter {
    fn page_processed(&mut self, progress: &PageProgress) {
        self.log.page_processed(progress);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(progress.page_index as u64 + 1);
            pb.set_message(format!("{} chars", progress.total_chars));
        }
    }

    fn page_skipped(&mut self, page_index: usize, reason: &SkipReason) {
        self.log.page_skipped(page_index, reason);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(page_index as u64 + 1);
        }
    }

    fn budget_exhausted(&mut self, reason: StopReason) {
        self.log.budget_exhausted(reason);
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("stopped early ({reason:?})"));
        }
    }
}
