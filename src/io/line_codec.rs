//! Pipe-delimited line format
//!
//! One record per line, fields joined by `|`, terminated by `\n`, no header
//! and no escaping. This module centralizes the format concerns:
//! - csv reader/writer configuration for the format
//! - lenient decoding of raw fields into records
//! - the `FlatRecord` implementations for `Employee` and `Customer`
//!
//! # Lenient decode
//!
//! Loading a partially corrupt file must not fail, so decoding follows a
//! discard-or-default policy:
//! - a line with fewer fields than the record needs is discarded
//! - extra delimiters belong to the last field (splitting stops once the
//!   field count is reached)
//! - numeric fields that cannot be parsed decode as `0`
//!
//! A field value containing `|` or a line break corrupts the line it is
//! written to. Validation keeps such values out of the create and update
//! paths; the codec itself does not guard against them.

use crate::core::traits::FlatRecord;
use crate::types::{Customer, Employee, RecordError};
use csv::{ByteRecord, QuoteStyle, ReaderBuilder, Terminator, Trim, WriterBuilder};
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;

/// Field separator
pub const DELIMITER: u8 = b'|';

/// Reader configuration for the line format
///
/// Quoting is off so `"` is ordinary text, and field counts may vary so
/// short lines reach the decoder instead of aborting the read. Only `\n`
/// ends a line; a `\r` before it is stripped by [`decode_record`] and a `\r`
/// anywhere else is field content.
pub fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::None);
    builder
}

/// Writer configuration for the line format
pub fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'));
    builder
}

/// Permissive integer parse
///
/// Skips leading whitespace, accepts an optional sign followed by the
/// leading run of digits and ignores anything after it. Text with no usable
/// number (or a value out of range for `T`) yields `T::default()`.
pub fn lenient_int<T>(text: &str) -> T
where
    T: FromStr + Default,
{
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    text[..sign_len + digits].parse().unwrap_or_default()
}

/// Decode one parsed line into a record
///
/// Returns `None` when the line holds fewer than `R::FIELD_COUNT` fields.
/// A trailing `\r` is dropped from the last field. Bytes that are not valid
/// UTF-8 are replaced rather than failing the line.
pub fn decode_record<R: FlatRecord>(record: &ByteRecord) -> Option<R> {
    if record.len() < R::FIELD_COUNT {
        return None;
    }

    let last = R::FIELD_COUNT - 1;
    let tail = record.iter().skip(last).collect::<Vec<_>>().join(&DELIMITER);
    let tail = tail.strip_suffix(b"\r").unwrap_or(&tail[..]);

    let mut owned: Vec<Cow<'_, str>> = record
        .iter()
        .take(last)
        .map(String::from_utf8_lossy)
        .collect();
    owned.push(String::from_utf8_lossy(tail));
    let fields: Vec<&str> = owned.iter().map(|field| field.as_ref()).collect();

    Some(R::from_fields(&fields))
}

/// Decode a single line of text (without its terminator)
pub fn decode_line<R: FlatRecord>(line: &str) -> Option<R> {
    let mut reader = reader_builder().from_reader(line.as_bytes());
    let mut record = ByteRecord::new();
    match reader.read_byte_record(&mut record) {
        Ok(true) => decode_record(&record),
        _ => None,
    }
}

/// Encode a record as one line, including the trailing `\n`
pub fn encode_line<R: Serialize>(record: &R) -> Result<String, RecordError> {
    let mut writer = writer_builder().from_writer(Vec::new());
    writer.serialize(record)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| RecordError::from(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| RecordError::Io {
        message: e.to_string(),
    })
}

impl FlatRecord for Employee {
    const KIND: &'static str = "Employee";
    const FIELD_COUNT: usize = 4;

    fn key(&self) -> u32 {
        self.id
    }

    fn from_fields(fields: &[&str]) -> Self {
        Employee {
            id: lenient_int(fields[0]),
            name: fields[1].to_string(),
            salary: fields[2].to_string(),
            designation: fields[3].to_string(),
        }
    }
}

impl FlatRecord for Customer {
    const KIND: &'static str = "Customer";
    const FIELD_COUNT: usize = 6;

    fn key(&self) -> u32 {
        self.account
    }

    fn from_fields(fields: &[&str]) -> Self {
        Customer {
            account: lenient_int(fields[0]),
            name: fields[1].to_string(),
            national_id: fields[2].to_string(),
            phone: fields[3].to_string(),
            balance: lenient_int(fields[4]),
            address: fields[5].to_string(),
        }
    }
}
