//! The fixed set of canonical output columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// A recognized output column.
///
/// Variants are declared in synonym-table order, which is also the
/// tie-break order when a header could match more than one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    CountryCode,
    DisplayName,
}

/// Fields a source file must provide when the caller names none.
pub const DEFAULT_REQUIRED: [CanonicalField; 6] = CanonicalField::ALL_ARRAY;

/// Fields every processed result set must carry.
pub const RESULT_REQUIRED: [CanonicalField; 4] = [
    CanonicalField::FirstName,
    CanonicalField::LastName,
    CanonicalField::PhoneNumber,
    CanonicalField::CountryCode,
];

impl CanonicalField {
    const ALL_ARRAY: [CanonicalField; 6] = [
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::PhoneNumber,
        Self::CountryCode,
        Self::DisplayName,
    ];

    /// All fields in declaration order.
    pub const ALL: &'static [CanonicalField] = &Self::ALL_ARRAY;

    /// Column order of the normalized output.
    pub const OUTPUT_ORDER: &'static [CanonicalField] = &[
        Self::Id,
        Self::FirstName,
        Self::LastName,
        Self::DisplayName,
        Self::PhoneNumber,
        Self::CountryCode,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
            Self::CountryCode => "countryCode",
            Self::DisplayName => "displayName",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = RosterError;

    /// Parses the exact canonical spelling. Source-header spellings go
    /// through the synonym table instead.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| RosterError::UnknownField(value.to_string()))
    }
}
