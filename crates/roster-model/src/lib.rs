//! Data model for the contact roster normalizer.
//!
//! Holds the fixed canonical schema, the static synonym table used to
//! reconcile source headers, and the table/record types that flow between
//! ingestion, mapping and row processing.

pub mod error;
pub mod field;
pub mod redact;
pub mod synonyms;
pub mod table;

pub use error::{Result, RosterError};
pub use field::{CanonicalField, DEFAULT_REQUIRED, RESULT_REQUIRED};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
pub use synonyms::{SynonymTable, normalize_header};
pub use table::{CanonicalRow, NormalizedRecord, NormalizedTable, RawRow, RawTable};
