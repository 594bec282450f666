use thiserror::Error;

use crate::field::CanonicalField;

#[derive(Debug, Error)]
pub enum RosterError {
    /// One or more required canonical fields are absent. Always lists the
    /// full deficit, in the order the fields were requested.
    #[error("missing columns: {}", join_fields(.fields))]
    MissingColumns { fields: Vec<CanonicalField> },

    #[error(
        "unknown field '{}' (expected one of: {})",
        .0,
        join_fields(CanonicalField::ALL)
    )]
    UnknownField(String),
}

fn join_fields(fields: &[CanonicalField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, RosterError>;
