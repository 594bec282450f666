//! Row processing for contact rosters.
//!
//! Turns canonical-named rows into [`NormalizedRecord`]s: derives first and
//! last names, validates phone number and country code, and drops rows that
//! fail validation with a warning.
//!
//! The [`pipeline`] module chains schema normalization and row processing
//! for a whole [`RawTable`].
//!
//! [`NormalizedRecord`]: roster_model::NormalizedRecord
//! [`RawTable`]: roster_model::RawTable

pub mod names;
pub mod pipeline;
pub mod processor;
pub mod validate;

pub use names::{DerivedNames, derive_names, split_display_name};
pub use pipeline::{NormalizeResult, normalize_table};
pub use processor::{ProcessOutcome, RowRejection, process_row, process_rows};
pub use validate::{RowIssue, is_valid_country_code, is_valid_phone_number};
