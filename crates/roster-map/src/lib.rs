//! Schema normalization: reconciles source headers with the canonical schema.
//!
//! Headers are matched against a [`SynonymTable`] with trimmed,
//! case-insensitive comparison. Unmatched headers are reported but never
//! fatal; required fields that end up absent are.
//!
//! [`SynonymTable`]: roster_model::SynonymTable

#![deny(unsafe_code)]

mod mapping;
mod normalizer;

pub use mapping::{ColumnAssignment, ColumnMapping};
pub use normalizer::{apply_mapping, ensure_required, missing_fields, normalize_columns};
