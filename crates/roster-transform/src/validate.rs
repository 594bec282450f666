//! Format checks for phone numbers and country codes.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// 7 to 11 ASCII digits, nothing else.
static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,11}$").expect("Invalid phone number regex"));

/// 1 to 3 ASCII digits, nothing else.
static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid country code regex"));

/// Why a row was dropped. The offending value is kept for reporting but left
/// out of the message so it never lands in logs unredacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowIssue {
    #[error("invalid phone number")]
    InvalidPhoneNumber { value: String },

    #[error("invalid country code")]
    InvalidCountryCode { value: String },
}

impl RowIssue {
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidPhoneNumber { value } | Self::InvalidCountryCode { value } => value,
        }
    }
}

pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(value)
}

pub fn is_valid_country_code(value: &str) -> bool {
    COUNTRY_CODE_REGEX.is_match(value)
}

/// Runs every check and returns all failures, phone number first.
pub fn check_contact(phone_number: &str, country_code: &str) -> Vec<RowIssue> {
    let mut issues = Vec::new();
    if !is_valid_phone_number(phone_number) {
        issues.push(RowIssue::InvalidPhoneNumber {
            value: phone_number.to_string(),
        });
    }
    if !is_valid_country_code(country_code) {
        issues.push(RowIssue::InvalidCountryCode {
            value: country_code.to_string(),
        });
    }
    issues
}
