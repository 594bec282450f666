//! Per-row transform and validation gate.

use std::fmt;

use roster_model::{
    CanonicalField, CanonicalRow, NormalizedRecord, NormalizedTable, RESULT_REQUIRED, RosterError,
    redact_value,
};
use tracing::{info, warn};

use crate::names::derive_names;
use crate::validate::{RowIssue, check_contact};

/// A dropped row and every check it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    /// 1-based data row number (the header row is not counted).
    pub row: usize,
    pub issues: Vec<RowIssue>,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: ", self.row)?;
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Accepted records plus the rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutcome {
    pub table: NormalizedTable,
    pub rejected: Vec<RowRejection>,
}

/// Normalizes one row, or explains why it was rejected.
pub fn process_row(row_number: usize, row: &CanonicalRow) -> Result<NormalizedRecord, RowRejection> {
    let names = derive_names(row);
    let phone_number = row
        .get(CanonicalField::PhoneNumber)
        .unwrap_or_default()
        .to_string();
    let country_code = row
        .get(CanonicalField::CountryCode)
        .unwrap_or_default()
        .trim()
        .to_string();
    let display_name = match row.get(CanonicalField::DisplayName) {
        Some(value) => value.to_string(),
        None => format!("{} {}", names.first_name, names.last_name),
    };
    let id = row.get(CanonicalField::Id).unwrap_or_default().to_string();

    let issues = check_contact(&phone_number, &country_code);
    if !issues.is_empty() {
        return Err(RowRejection {
            row: row_number,
            issues,
        });
    }

    Ok(NormalizedRecord {
        id,
        first_name: names.first_name,
        last_name: names.last_name,
        display_name,
        phone_number,
        country_code,
    })
}

/// Processes every row in order, dropping invalid rows with a warning.
///
/// Fails with `MissingColumns` when the accepted set ends up with none of
/// the result fields, which happens when no row survives validation.
pub fn process_rows(rows: &[CanonicalRow]) -> Result<ProcessOutcome, RosterError> {
    let mut accepted = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        match process_row(idx + 1, row) {
            Ok(record) => accepted.push(record),
            Err(rejection) => {
                for issue in &rejection.issues {
                    warn!(
                        row = rejection.row,
                        value = %redact_value(issue.value()),
                        "{issue}, dropping row"
                    );
                }
                rejected.push(rejection);
            }
        }
    }

    let table = NormalizedTable::new(accepted);
    let columns = table.columns();
    let missing: Vec<CanonicalField> = RESULT_REQUIRED
        .iter()
        .copied()
        .filter(|field| !columns.contains(field))
        .collect();
    if !missing.is_empty() {
        return Err(RosterError::MissingColumns { fields: missing });
    }

    info!(
        accepted = table.len(),
        rejected = rejected.len(),
        "row processing complete"
    );
    Ok(ProcessOutcome { table, rejected })
}
