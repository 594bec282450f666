//! Integration tests for running the normalizer on files.

use std::io::Write;

use roster_cli::commands::{failure_message, run_file};
use roster_cli::output::render_table;
use roster_model::{CanonicalField, DEFAULT_REQUIRED, RosterError};

fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn normalizes_csv_end_to_end() {
    let file = temp_file(
        ".csv",
        "UserID,First_Name,Last_Name,Phone Number,Country,Name,Email\n\
         1,Ada,Lovelace,5551234,44,,ada@example.com\n\
         2,,,123,44,Bad Row,\n\
         3,,,0871234567, 353 ,Cher,\n",
    );
    let result = run_file(file.path(), &DEFAULT_REQUIRED).unwrap();
    let records = &result.outcome.table.records;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].display_name, "Ada Lovelace");
    assert_eq!(records[1].id, "3");
    assert_eq!(records[1].first_name, "Cher");
    assert_eq!(records[1].last_name, "");
    assert_eq!(records[1].country_code, "353");
    assert_eq!(result.outcome.rejected[0].row, 2);
    assert_eq!(result.mapping.unrecognized(), ["Email".to_string()]);
}

#[test]
fn missing_required_column_aborts() {
    let file = temp_file(".csv", "id,firstName,lastName,phoneNumber,displayName\n1,A,B,5551234,\n");
    let err = run_file(file.path(), &DEFAULT_REQUIRED).unwrap_err();

    let roster = err.downcast_ref::<RosterError>().expect("roster error");
    assert!(matches!(
        roster,
        RosterError::MissingColumns { fields } if fields == &vec![CanonicalField::CountryCode]
    ));
    assert_eq!(
        format!("{err:#}"),
        "normalize contacts: missing columns: countryCode"
    );
}

#[test]
fn unsupported_file_type_aborts() {
    let file = temp_file(".json", "{}");
    let err = run_file(file.path(), &DEFAULT_REQUIRED).unwrap_err();
    assert!(format!("{err:#}").contains("unsupported file type"));
}

#[test]
fn rendered_table_uses_output_column_order() {
    let file = temp_file(
        ".csv",
        "phoneNumber,countryCode,displayName\n5551234,1,Jane Doe\n",
    );
    let result = run_file(
        file.path(),
        &[CanonicalField::PhoneNumber, CanonicalField::CountryCode],
    )
    .unwrap();
    let rendered = render_table(&result.outcome.table).to_string();

    let positions: Vec<usize> = CanonicalField::OUTPUT_ORDER
        .iter()
        .map(|field| rendered.find(field.as_str()).expect("header present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(rendered.contains("Jane Doe"));
    assert!(rendered.contains("5551234"));
}

#[test]
fn failure_message_is_a_single_line() {
    let file = temp_file(".csv", "firstName,lastName,phoneNumber\nAda,Lovelace,5551234\n");
    let err = run_file(file.path(), &DEFAULT_REQUIRED).unwrap_err();
    let message = failure_message(&err);

    assert_eq!(
        message,
        "error: normalize contacts: missing columns: id, countryCode, displayName"
    );
    assert!(!message.contains('\n'));
}

#[test]
fn na_display_name_falls_back_to_name_columns() {
    let file = temp_file(
        ".csv",
        "id,firstName,lastName,displayName,phoneNumber,countryCode\n\
         1,Grace,Hopper,N/A,5551234,1\n",
    );
    let result = run_file(file.path(), &DEFAULT_REQUIRED).unwrap();
    let record = &result.outcome.table.records[0];

    assert_eq!(record.first_name, "Grace");
    assert_eq!(record.last_name, "Hopper");
    assert_eq!(record.display_name, "Grace Hopper");
}
