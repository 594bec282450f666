//! First/last name derivation.

use roster_model::{CanonicalField, CanonicalRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub first_name: String,
    pub last_name: String,
}

/// Splits a display name on whitespace.
///
/// A single token becomes the first name with an empty last name. With more
/// than one token the first name is the first token and the last name is the
/// whole original string, first token included. Existing exports depend on
/// that shape; do not trim the first token off the last name.
pub fn split_display_name(display_name: &str) -> DerivedNames {
    let mut tokens = display_name.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (None, _) => DerivedNames {
            first_name: String::new(),
            last_name: String::new(),
        },
        (Some(only), None) => DerivedNames {
            first_name: only.to_string(),
            last_name: String::new(),
        },
        (Some(first), Some(_)) => DerivedNames {
            first_name: first.to_string(),
            last_name: display_name.to_string(),
        },
    }
}

/// Names for a row: from `displayName` when present, else the row's own
/// `firstName`/`lastName` with empty defaults.
pub fn derive_names(row: &CanonicalRow) -> DerivedNames {
    match row.get(CanonicalField::DisplayName) {
        Some(display_name) => split_display_name(display_name),
        None => DerivedNames {
            first_name: row
                .get(CanonicalField::FirstName)
                .unwrap_or_default()
                .to_string(),
            last_name: row
                .get(CanonicalField::LastName)
                .unwrap_or_default()
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token() {
        let names = split_display_name("Cher");
        assert_eq!(names.first_name, "Cher");
        assert_eq!(names.last_name, "");
    }

    #[test]
    fn multi_token_keeps_whole_string_as_last_name() {
        let names = split_display_name("Jane Doe");
        assert_eq!(names.first_name, "Jane");
        assert_eq!(names.last_name, "Jane Doe");

        let names = split_display_name("Mary  Ann Smith ");
        assert_eq!(names.first_name, "Mary");
        assert_eq!(names.last_name, "Mary  Ann Smith ");
    }

    #[test]
    fn padded_single_token() {
        let names = split_display_name("  Prince ");
        assert_eq!(names.first_name, "Prince");
        assert_eq!(names.last_name, "");
    }

    #[test]
    fn blank_display_name() {
        let names = split_display_name("   ");
        assert_eq!(names.first_name, "");
        assert_eq!(names.last_name, "");
    }

    #[test]
    fn display_name_takes_precedence() {
        let row = CanonicalRow::new()
            .with(CanonicalField::DisplayName, "Ada Lovelace")
            .with(CanonicalField::FirstName, "Augusta")
            .with(CanonicalField::LastName, "King");
        let names = derive_names(&row);
        assert_eq!(names.first_name, "Ada");
        assert_eq!(names.last_name, "Ada Lovelace");
    }

    #[test]
    fn falls_back_to_row_names() {
        let row = CanonicalRow::new().with(CanonicalField::FirstName, "Grace");
        let names = derive_names(&row);
        assert_eq!(names.first_name, "Grace");
        assert_eq!(names.last_name, "");
    }
}
