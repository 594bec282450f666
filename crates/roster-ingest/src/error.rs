//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File Type Errors ===
    /// Extension is not one of `.csv`, `.xls`, `.xlsx`.
    #[error("unsupported file type: {path} (use CSV or Excel)")]
    UnsupportedFileType { path: PathBuf },

    // === File System Errors ===
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    #[error("failed to parse spreadsheet {path}: {message}")]
    SpreadsheetParse { path: PathBuf, message: String },

    /// No header row could be read.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
