//! Excel reading (`.xls` / `.xlsx`) through calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use roster_model::{RawRow, RawTable};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::missing::text_value;

/// Reads the first worksheet; its first row is the header row.
pub fn read_spreadsheet_table(path: &Path) -> Result<RawTable> {
    std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(path, &e))?;
    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    debug!(sheet = %sheet_name, sheets = sheet_names.len(), "reading first worksheet");

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| spreadsheet_error(path, &e))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let headers = header_row
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();

    let mut table = RawTable::new(headers);
    for data_row in rows {
        let cells: Vec<Option<String>> = data_row.iter().map(cell_text).collect();
        // Blank spreadsheet rows are dropped, like blank CSV lines.
        if cells.iter().all(Option::is_none) {
            continue;
        }
        table.push_row(RawRow::new(cells));
    }

    Ok(table)
}

/// Renders a cell as text. Empty cells and NA spellings are `None`.
///
/// Whole floats lose their fractional part so a phone number stored as a
/// number reads back as `5551234`, not `5551234.0`.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) => text_value(value),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            Some(format!("{}", *value as i64))
        }
        other => Some(other.to_string()),
    }
}

fn spreadsheet_error(path: &Path, err: &impl std::fmt::Display) -> IngestError {
    IngestError::SpreadsheetParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cell_text_keeps_strings() {
        assert_eq!(cell_text(&Data::String("+44".to_string())), Some("+44".to_string()));
        assert_eq!(cell_text(&Data::String(String::new())), None);
        assert_eq!(cell_text(&Data::Empty), None);
    }

    #[test]
    fn test_cell_text_whole_float_has_no_fraction() {
        assert_eq!(cell_text(&Data::Float(5551234.0)), Some("5551234".to_string()));
        assert_eq!(cell_text(&Data::Int(44)), Some("44".to_string()));
        assert_eq!(cell_text(&Data::Float(1.5)), Some("1.5".to_string()));
    }

    #[test]
    fn test_missing_workbook() {
        let result = read_spreadsheet_table(Path::new("does/not/exist.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_corrupt_workbook() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        write!(file, "this is not a zip archive").unwrap();

        let result = read_spreadsheet_table(file.path());
        assert!(matches!(result, Err(IngestError::SpreadsheetParse { .. })));
    }
}
