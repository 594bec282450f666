//! Result of matching raw headers to canonical fields.

use roster_model::CanonicalField;

/// One source column renamed to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// Position of the column in the source header row.
    pub index: usize,
    /// Header exactly as it appeared in the file.
    pub source_column: String,
    pub field: CanonicalField,
}

/// Header rename mapping, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub(crate) assignments: Vec<ColumnAssignment>,
    pub(crate) unrecognized: Vec<String>,
    pub(crate) duplicates: Vec<ColumnAssignment>,
}

impl ColumnMapping {
    /// Columns that supply values, at most one per canonical field.
    pub fn assignments(&self) -> &[ColumnAssignment] {
        &self.assignments
    }

    /// Headers that matched no synonym.
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    /// Columns that matched a field already supplied by an earlier column.
    pub fn duplicates(&self) -> &[ColumnAssignment] {
        &self.duplicates
    }

    pub fn source_for(&self, field: CanonicalField) -> Option<&str> {
        self.assignment_for(field)
            .map(|assignment| assignment.source_column.as_str())
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.assignment_for(field).is_some()
    }

    /// Canonical fields present after renaming, in source column order.
    pub fn canonical_fields(&self) -> impl Iterator<Item = CanonicalField> {
        self.assignments.iter().map(|assignment| assignment.field)
    }

    /// True when every source header is already its own canonical name.
    pub fn is_identity(&self) -> bool {
        self.unrecognized.is_empty()
            && self.duplicates.is_empty()
            && self
                .assignments
                .iter()
                .all(|assignment| assignment.source_column == assignment.field.as_str())
    }

    fn assignment_for(&self, field: CanonicalField) -> Option<&ColumnAssignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.field == field)
    }
}
