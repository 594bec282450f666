//! Integration tests for file-type dispatch and reading.

use std::io::Write;
use std::path::Path;

use roster_ingest::{IngestError, read_table};
use rust_xlsxwriter::Workbook;

fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn reads_csv_by_extension() {
    let file = temp_file(
        ".csv",
        "user_id,First Name,Last Name,Phone Number,Country Code\n1,Ada,Lovelace,5551234,44\n",
    );
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.headers.len(), 5);
    assert_eq!(table.height(), 1);
    assert_eq!(table.value(0, "Country Code"), Some("44"));
}

#[test]
fn unsupported_extension_fails_before_reading() {
    let result = read_table(Path::new("missing/contacts.json"));
    assert!(matches!(result, Err(IngestError::UnsupportedFileType { .. })));
}

#[test]
fn unsupported_extension_on_existing_file() {
    let file = temp_file(".txt", "id\n1\n");
    let err = read_table(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("unsupported file type"));
}

#[test]
fn missing_csv_is_reported() {
    let result = read_table(Path::new("missing/contacts.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn leading_zeros_survive() {
    let file = temp_file(".csv", "id,phoneNumber,countryCode\n0001,0712345678,001\n");
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.value(0, "id"), Some("0001"));
    assert_eq!(table.value(0, "phoneNumber"), Some("0712345678"));
    assert_eq!(table.value(0, "countryCode"), Some("001"));
}

fn temp_workbook() -> tempfile::NamedTempFile {
    let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in ["ID", "Display Name", "Phone Number", "Country"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_number(1, 0, 7.0).unwrap();
    sheet.write_string(1, 1, "Jane Doe").unwrap();
    sheet.write_number(1, 2, 5551234.0).unwrap();
    sheet.write_string(1, 3, "044").unwrap();
    // Row 2 is left blank.
    sheet.write_number(3, 0, 8.0).unwrap();
    sheet.write_string(3, 1, "N/A").unwrap();
    sheet.write_string(3, 2, "0871234567").unwrap();
    sheet.write_number(3, 3, 353.0).unwrap();
    workbook.save(file.path()).unwrap();
    file
}

#[test]
fn reads_xlsx_as_text() {
    let file = temp_workbook();
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.headers, vec!["ID", "Display Name", "Phone Number", "Country"]);
    assert_eq!(table.height(), 2);
    assert_eq!(
        table.rows[0].cells,
        vec![
            Some("7".to_string()),
            Some("Jane Doe".to_string()),
            Some("5551234".to_string()),
            Some("044".to_string()),
        ]
    );
}

#[test]
fn xlsx_blank_rows_are_skipped_and_na_is_missing() {
    let file = temp_workbook();
    let table = read_table(file.path()).unwrap();

    assert_eq!(table.value(1, "ID"), Some("8"));
    assert_eq!(table.value(1, "Display Name"), None);
    assert_eq!(table.value(1, "Phone Number"), Some("0871234567"));
    assert_eq!(table.value(1, "Country"), Some("353"));
}
