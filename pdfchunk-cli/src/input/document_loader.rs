//! Opening documents for chunking

use crate::error::CliError;
use anyhow::Result;
use pdfchunk_core::{CoreError, PdfSource};
use std::path::Path;

/// Open a PDF, failing fast with a descriptive error
pub fn open_document(path: &Path) -> Result<PdfSource> {
    log::debug!("Opening {}", path.display());

    PdfSource::open(path).map_err(|err| {
        let error = match err {
            CoreError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.display().to_string())
            }
            CoreError::Encrypted => CliError::PasswordProtected(path.to_path_buf()),
            other => CliError::UnreadablePdf {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        };
        error.into()
    })
}
