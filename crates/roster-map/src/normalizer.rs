//! Header reconciliation against the synonym table.

use roster_model::{CanonicalField, CanonicalRow, RawTable, RosterError, SynonymTable};
use tracing::{debug, warn};

use crate::mapping::{ColumnAssignment, ColumnMapping};

/// Maps each raw header to a canonical field.
///
/// Headers that match nothing are excluded and logged as unrecognized. When
/// two headers resolve to the same field, the first one in file order
/// supplies the values and the later one is recorded as a duplicate.
pub fn normalize_columns<S: AsRef<str>>(headers: &[S], synonyms: &SynonymTable) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();
    for (index, header) in headers.iter().enumerate() {
        let header = header.as_ref();
        let Some(field) = synonyms.field_for(header) else {
            warn!(column = %header, "unrecognized column");
            mapping.unrecognized.push(header.to_string());
            continue;
        };
        let assignment = ColumnAssignment {
            index,
            source_column: header.to_string(),
            field,
        };
        if let Some(existing) = mapping.source_for(field) {
            warn!(
                column = %header,
                field = %field,
                kept = %existing,
                "duplicate column for canonical field, ignoring"
            );
            mapping.duplicates.push(assignment);
        } else {
            debug!(column = %header, field = %field, "mapped column");
            mapping.assignments.push(assignment);
        }
    }
    mapping
}

/// Required fields absent from the mapping, in the order requested.
pub fn missing_fields(mapping: &ColumnMapping, required: &[CanonicalField]) -> Vec<CanonicalField> {
    let mut missing = Vec::new();
    for field in required {
        if !mapping.contains(*field) && !missing.contains(field) {
            missing.push(*field);
        }
    }
    missing
}

/// Fails with every absent required field in a single report.
pub fn ensure_required(
    mapping: &ColumnMapping,
    required: &[CanonicalField],
) -> Result<(), RosterError> {
    let missing = missing_fields(mapping, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RosterError::MissingColumns { fields: missing })
    }
}

/// Renames every row to canonical fields, dropping unmapped columns.
///
/// Null cells are left out of the row, so the row processor sees them as absent.
pub fn apply_mapping(table: &RawTable, mapping: &ColumnMapping) -> Vec<CanonicalRow> {
    table
        .rows
        .iter()
        .map(|raw| {
            let mut row = CanonicalRow::new();
            for assignment in mapping.assignments() {
                if let Some(value) = raw.get(assignment.index) {
                    row.insert(assignment.field, value);
                }
            }
            row
        })
        .collect()
}
