//! Tabular data as it moves through the pipeline.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::CanonicalField;

/// One source row, positionally aligned with [`RawTable::headers`].
///
/// `None` marks an absent or null cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }
}

/// A source dataset with its original headers, read entirely into memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: RawRow) {
        row.cells.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    /// Looks up a cell by original header name (first column with that name).
    pub fn value(&self, row: usize, header: &str) -> Option<&str> {
        let index = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(index)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// A row renamed to canonical fields. Absent fields are simply not present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalRow {
    values: BTreeMap<CanonicalField, String>,
}

impl CanonicalRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: CanonicalField, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: CanonicalField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = CanonicalField> {
        self.values.keys().copied()
    }
}

/// A fully validated output row.
///
/// `phone_number` always matches `^\d{7,11}$` and `country_code` always
/// matches `^\d{1,3}$`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub phone_number: String,
    pub country_code: String,
}

impl NormalizedRecord {
    pub fn get(&self, field: CanonicalField) -> &str {
        match field {
            CanonicalField::Id => &self.id,
            CanonicalField::FirstName => &self.first_name,
            CanonicalField::LastName => &self.last_name,
            CanonicalField::DisplayName => &self.display_name,
            CanonicalField::PhoneNumber => &self.phone_number,
            CanonicalField::CountryCode => &self.country_code,
        }
    }
}

/// Accepted records in original row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedTable {
    pub records: Vec<NormalizedRecord>,
}

impl NormalizedTable {
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    /// Output columns. An empty table carries no columns at all.
    pub fn columns(&self) -> &'static [CanonicalField] {
        if self.records.is_empty() {
            &[]
        } else {
            CanonicalField::OUTPUT_ORDER
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.records.iter()
    }
}
