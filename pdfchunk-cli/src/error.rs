//! Errors reported by the pdfchunk CLI

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the CLI before a document is chunked
#[derive(Error, Debug)]
pub enum CliError {
    /// A plain input path that does not name a file
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A glob pattern that could not be parsed
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Every pattern was valid but none matched a file
    #[error("No files found matching: {}", .0.join(", "))]
    NoMatches(Vec<String>),

    /// Chunk size, overlap or caps rejected by the chunker
    #[error("Configuration error: {0}")]
    InvalidLimits(String),

    /// The file exists but is not a readable PDF
    #[error("Processing error: {}: {reason}", .path.display())]
    UnreadablePdf { path: PathBuf, reason: String },

    /// The PDF needs a password to open
    #[error("Processing error: {} is password protected", .0.display())]
    PasswordProtected(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let error = CliError::FileNotFound("report.pdf".to_string());
        assert_eq!(error.to_string(), "File not found: report.pdf");
    }

    #[test]
    fn test_no_matches_lists_patterns() {
        let error = CliError::NoMatches(vec!["*.pdf".to_string(), "docs/*.pdf".to_string()]);
        assert_eq!(
            error.to_string(),
            "No files found matching: *.pdf, docs/*.pdf"
        );
    }

    #[test]
    fn test_invalid_limits_display() {
        let error = CliError::InvalidLimits("chunk_size_chars must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: chunk_size_chars must be positive"
        );
    }

    #[test]
    fn test_pdf_errors_name_the_file() {
        let unreadable = CliError::UnreadablePdf {
            path: PathBuf::from("scans/broken.pdf"),
            reason: "invalid file header".to_string(),
        };
        assert_eq!(
            unreadable.to_string(),
            "Processing error: scans/broken.pdf: invalid file header"
        );

        let locked = CliError::PasswordProtected(PathBuf::from("locked.pdf"));
        assert_eq!(
            locked.to_string(),
            "Processing error: locked.pdf is password protected"
        );
    }

    #[test]
    fn test_downcasts_through_anyhow() {
        let err: anyhow::Error = CliError::InvalidPattern("[".to_string()).into();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_non_ascii_paths() {
        let error = CliError::FileNotFound("ファイル/報告書 2024.pdf".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/報告書 2024.pdf");
    }
}
