//! PDF document source backed by `lopdf`

use crate::{
    error::{CoreError, Result, SourceError},
    source::DocumentSource,
};
use lopdf::Document;
use std::path::Path;

/// Pages of a loaded PDF, extracted one at a time
pub struct PdfSource {
    document: Document,
    /// Page numbers in reading order
    page_numbers: Vec<u32>,
}

impl std::fmt::Debug for PdfSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfSource")
            .field("pages", &self.page_numbers.len())
            .finish()
    }
}

impl PdfSource {
    /// Load a PDF from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )));
        }
        Self::from_document(Document::load(path)?)
    }

    /// Load a PDF held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_document(Document::load_mem(bytes)?)
    }

    /// Wrap an already parsed document
    ///
    /// Documents that open with an empty user password are decrypted by
    /// lopdf while loading. Any other encrypted document keeps its
    /// `Encrypt` trailer entry but none of its objects, and is rejected.
    pub fn from_document(document: Document) -> Result<Self> {
        if document.trailer.get(b"Encrypt").is_ok() {
            return Err(CoreError::Encrypted);
        }
        // get_pages is keyed by page number, so keys come out in reading order
        let page_numbers = document.get_pages().into_keys().collect();
        Ok(Self {
            document,
            page_numbers,
        })
    }
}

impl DocumentSource for PdfSource {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn extract_page(&mut self, index: usize) -> std::result::Result<String, SourceError> {
        let number = *self
            .page_numbers
            .get(index)
            .ok_or(SourceError::PageOutOfRange {
                page: index,
                count: self.page_numbers.len(),
            })?;

        self.document
            .extract_text(&[number])
            .map_err(|e| SourceError::Extraction {
                page: index,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_fast() {
        let result = PdfSource::from_bytes(b"definitely not a pdf");
        assert!(matches!(result, Err(CoreError::Pdf(_))));
    }

    #[test]
    fn test_unresolved_encrypt_entry_is_rejected() {
        // Shape of a document whose password check failed during loading
        let mut document = Document::with_version("1.5");
        document
            .trailer
            .set("Encrypt", lopdf::Object::Reference((42, 0)));

        let result = PdfSource::from_document(document);
        assert!(matches!(result, Err(CoreError::Encrypted)));
    }

    #[test]
    fn test_missing_file() {
        let result = PdfSource::open("/nonexistent/document.pdf");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
