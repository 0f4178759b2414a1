//! Document sources supplying raw per-page text

use crate::error::SourceError;

/// Supplier of raw page text, in reading order
///
/// The chunk builder asks for pages `0..page_count()` one at a time and
/// stops early when a cap is hit, so implementations should extract lazily.
/// A failed page is reported through [`SourceError`] and never ends the
/// document; the end is given by [`page_count`](DocumentSource::page_count).
pub trait DocumentSource {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Extract the raw text of page `index` (zero-based)
    fn extract_page(&mut self, index: usize) -> Result<String, SourceError>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &mut S {
    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn extract_page(&mut self, index: usize) -> Result<String, SourceError> {
        (**self).extract_page(index)
    }
}

/// In-memory document whose pages are already text
///
/// Pages can be marked as failing to model extraction errors.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<Result<String, String>>,
    extracted: Vec<usize>,
}

impl MemorySource {
    /// Create a source from page texts
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(|p| Ok(p.into())).collect(),
            extracted: Vec::new(),
        }
    }

    /// Append a page with text
    pub fn push_page(&mut self, text: impl Into<String>) -> &mut Self {
        self.pages.push(Ok(text.into()));
        self
    }

    /// Append a page whose extraction fails with `reason`
    pub fn push_failure(&mut self, reason: impl Into<String>) -> &mut Self {
        self.pages.push(Err(reason.into()));
        self
    }

    /// Indices of the pages extracted so far, in request order
    pub fn extracted_pages(&self) -> &[usize] {
        &self.extracted
    }
}

impl DocumentSource for MemorySource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_page(&mut self, index: usize) -> Result<String, SourceError> {
        let count = self.pages.len();
        let page = self
            .pages
            .get(index)
            .ok_or(SourceError::PageOutOfRange { page: index, count })?;
        self.extracted.push(index);

        page.clone().map_err(|reason| SourceError::Extraction {
            page: index,
            reason,
        })
    }
}
