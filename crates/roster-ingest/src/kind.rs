use std::path::Path;

use crate::error::{IngestError, Result};

/// Source file format, decided by extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    /// `.xls` or `.xlsx`.
    Spreadsheet,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "xls" | "xlsx" => Ok(Self::Spreadsheet),
            _ => Err(IngestError::UnsupportedFileType {
                path: path.to_path_buf(),
            }),
        }
    }
}
