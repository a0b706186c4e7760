//! Field validation
//!
//! Pure predicates over raw field text, plus the field-level checks that the
//! create and update paths run before anything is persisted. Character
//! classes are ASCII: a letter is `A-Z` / `a-z`, a digit is `0-9`.

use crate::types::{RecordError, NATIONAL_ID_LEN, PHONE_LEN};

/// True iff `s` is non-empty and every character is a decimal digit
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// True iff `s` is non-empty and every character is a letter or a space
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// True iff `s` is numeric and exactly `len` characters long
pub fn is_numeric_of_len(s: &str, len: usize) -> bool {
    is_numeric(s) && s.len() == len
}

/// True iff `s` can be written to a line without corrupting it
///
/// The line codec does not escape, so the delimiter and line breaks are
/// never allowed inside a field.
pub fn is_storable(s: &str) -> bool {
    !s.contains(['|', '\n', '\r'])
}

/// Require letters and spaces only
pub fn check_alphabetic(field: &str, value: &str) -> Result<(), RecordError> {
    if value.is_empty() {
        return Err(RecordError::validation_failed(field, "cannot be empty"));
    }
    if !is_alphabetic(value) {
        return Err(RecordError::validation_failed(
            field,
            "must contain only letters and spaces",
        ));
    }
    Ok(())
}

/// Require digits only
pub fn check_numeric(field: &str, value: &str) -> Result<(), RecordError> {
    if value.is_empty() {
        return Err(RecordError::validation_failed(field, "cannot be empty"));
    }
    if !is_numeric(value) {
        return Err(RecordError::validation_failed(
            field,
            "must contain only digits",
        ));
    }
    Ok(())
}

/// Require exactly 12 digits
pub fn check_national_id(value: &str) -> Result<(), RecordError> {
    if !is_numeric_of_len(value, NATIONAL_ID_LEN) {
        return Err(RecordError::validation_failed(
            "aadhaar",
            "must be exactly 12 digits",
        ));
    }
    Ok(())
}

/// Require exactly 10 digits
pub fn check_phone(value: &str) -> Result<(), RecordError> {
    if !is_numeric_of_len(value, PHONE_LEN) {
        return Err(RecordError::validation_failed(
            "phone",
            "must be exactly 10 digits",
        ));
    }
    Ok(())
}

/// Require non-empty free text that fits on one line
pub fn check_address(value: &str) -> Result<(), RecordError> {
    if value.is_empty() {
        return Err(RecordError::validation_failed("address", "cannot be empty"));
    }
    if !is_storable(value) {
        return Err(RecordError::validation_failed(
            "address",
            "cannot contain '|' or line breaks",
        ));
    }
    Ok(())
}
