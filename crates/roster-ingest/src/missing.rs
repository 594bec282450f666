//! Cell text that counts as a missing value.

/// Spellings read as a missing value, matched exactly (case and padding
/// included). These are the tokens pandas treats as NA by default, which
/// existing rosters were exported against.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns `true` when `value` is one of [`MISSING_TOKENS`].
pub fn is_missing_token(value: &str) -> bool {
    MISSING_TOKENS.contains(&value)
}

/// Converts raw cell text to an optional value.
pub(crate) fn text_value(value: &str) -> Option<String> {
    if is_missing_token(value) {
        None
    } else {
        Some(value.to_string())
    }
}
