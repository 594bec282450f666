//! CSV reading with every column kept as text.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use roster_model::{RawRow, RawTable};

use crate::error::{IngestError, Result};
use crate::missing::text_value;

/// Reads a CSV file with a single header row.
///
/// Empty cells and NA spellings such as `N/A` become `None`. Rows shorter
/// or longer than the header are padded or truncated to the header width.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            if idx == 0 {
                header.strip_prefix('\u{feff}').unwrap_or(header).to_string()
            } else {
                header.to_string()
            }
        })
        .collect();

    if headers.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let mut table = RawTable::new(headers);
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, &e))?;
        let cells = record.iter().map(text_value).collect();
        table.push_row(RawRow::new(cells));
    }

    Ok(table)
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
