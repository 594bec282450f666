//! Contact roster ingestion.
//!
//! Reads a CSV or spreadsheet file into a [`RawTable`], keeping every value
//! as text so phone numbers, country codes and ids are never coerced to
//! numbers.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::read_table;
//!
//! let table = read_table(Path::new("contacts.xlsx"))?;
//! println!("{} rows", table.height());
//! ```
//!
//! [`RawTable`]: roster_model::RawTable

mod delimited;
mod error;
mod kind;
mod missing;
mod reader;
mod spreadsheet;

pub use error::{IngestError, Result};
pub use kind::FileKind;
pub use missing::{MISSING_TOKENS, is_missing_token};
pub use reader::read_table;

pub use delimited::read_csv_table;
pub use spreadsheet::{cell_text, read_spreadsheet_table};
