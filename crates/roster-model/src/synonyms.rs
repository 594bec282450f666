//! Static synonym table mapping canonical fields to accepted header spellings.

use std::sync::LazyLock;

use crate::field::CanonicalField;

static STANDARD: LazyLock<SynonymTable> = LazyLock::new(|| {
    SynonymTable::new([
        (CanonicalField::Id, vec!["id", "user_id", "userid"]),
        (
            CanonicalField::FirstName,
            vec!["firstname", "first_name", "first name"],
        ),
        (
            CanonicalField::LastName,
            vec!["lastname", "last_name", "last name"],
        ),
        (
            CanonicalField::PhoneNumber,
            vec!["phonenumber", "phone_number", "phone number", "contact_number"],
        ),
        (
            CanonicalField::CountryCode,
            vec!["countrycode", "country_code", "country code", "country"],
        ),
        (
            CanonicalField::DisplayName,
            vec!["displayname", "display_name", "display name", "name"],
        ),
    ])
});

/// Normalizes a header for synonym comparison: trimmed and lowercased.
///
/// Inner whitespace is kept, so `"First  Name"` does not match `"first name"`.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Immutable lookup from header spelling to canonical field.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: Vec<(CanonicalField, Vec<String>)>,
}

impl SynonymTable {
    /// Builds a table from `(field, spellings)` pairs. Declaration order is
    /// the match priority.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CanonicalField, Vec<S>)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(field, spellings)| {
                let normalized = spellings
                    .iter()
                    .map(|spelling| normalize_header(spelling.as_ref()))
                    .collect();
                (field, normalized)
            })
            .collect();
        Self { entries }
    }

    /// The built-in table, initialized once per process.
    pub fn standard() -> &'static SynonymTable {
        &STANDARD
    }

    /// Returns the canonical field for a raw header, first match wins.
    pub fn field_for(&self, header: &str) -> Option<CanonicalField> {
        let key = normalize_header(header);
        self.entries
            .iter()
            .find(|(_, spellings)| spellings.iter().any(|spelling| *spelling == key))
            .map(|(field, _)| *field)
    }

    /// Accepted spellings for a field, already normalized.
    pub fn spellings(&self, field: CanonicalField) -> &[String] {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, spellings)| spellings.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &[String])> {
        self.entries
            .iter()
            .map(|(field, spellings)| (*field, spellings.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_resolves_variants() {
        let table = SynonymTable::standard();
        assert_eq!(table.field_for("user_id"), Some(CanonicalField::Id));
        assert_eq!(table.field_for("  First Name "), Some(CanonicalField::FirstName));
        assert_eq!(table.field_for("CONTACT_NUMBER"), Some(CanonicalField::PhoneNumber));
        assert_eq!(table.field_for("Country"), Some(CanonicalField::CountryCode));
        assert_eq!(table.field_for("name"), Some(CanonicalField::DisplayName));
        assert_eq!(table.field_for("email"), None);
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        let table = SynonymTable::standard();
        for field in CanonicalField::ALL {
            assert_eq!(table.field_for(field.as_str()), Some(*field));
        }
    }

    #[test]
    fn earlier_entry_wins_on_overlap() {
        let table = SynonymTable::new([
            (CanonicalField::FirstName, vec!["name"]),
            (CanonicalField::DisplayName, vec!["Name"]),
        ]);
        assert_eq!(table.field_for("NAME"), Some(CanonicalField::FirstName));
    }

    #[test]
    fn spellings_are_stored_normalized() {
        let table = SynonymTable::new([(CanonicalField::Id, vec!["  User ID "])]);
        assert_eq!(table.spellings(CanonicalField::Id), ["user id".to_string()]);
        assert!(table.spellings(CanonicalField::LastName).is_empty());
    }
}
