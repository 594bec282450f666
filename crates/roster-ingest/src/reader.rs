use std::path::Path;

use roster_model::RawTable;
use tracing::{debug, info_span};

use crate::delimited::read_csv_table;
use crate::error::Result;
use crate::kind::FileKind;
use crate::spreadsheet::read_spreadsheet_table;

/// Reads a source file into memory, dispatching on its extension.
///
/// The extension is checked before the file is opened, so an unsupported
/// type is reported even when the path does not exist.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let kind = FileKind::from_path(path)?;
    let span = info_span!("read", path = %path.display(), kind = ?kind);
    let _guard = span.enter();
    let table = match kind {
        FileKind::Csv => read_csv_table(path)?,
        FileKind::Spreadsheet => read_spreadsheet_table(path)?,
    };
    debug!(
        columns = table.headers.len(),
        rows = table.height(),
        "loaded source table"
    );
    Ok(table)
}
