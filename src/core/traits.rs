//! Core trait for records kept in a delimited flat file
//!
//! `FlatRecord` is what lets one `FlatFileStore` implementation serve both
//! the employee and the customer file.

use serde::Serialize;

/// A record that occupies exactly one line of a flat file
///
/// Encoding goes through `Serialize`, so the struct's field order is the
/// on-disk column order. Decoding is lenient: `from_fields` never fails.
pub trait FlatRecord: Serialize + Sized {
    /// Display name of the record kind, used in messages and logs
    const KIND: &'static str;

    /// Number of delimited fields on a line
    const FIELD_COUNT: usize;

    /// The unique key (`id` / `account`)
    fn key(&self) -> u32;

    /// Build a record from exactly `FIELD_COUNT` raw fields
    ///
    /// Numeric fields use the permissive parse (unparsable text becomes 0).
    fn from_fields(fields: &[&str]) -> Self;
}
