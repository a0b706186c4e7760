//! Flat-file record store
//!
//! This module provides `FlatFileStore`, which owns the path of one backing
//! file and performs the three file operations every record operation is
//! built from:
//!
//! - `load` - read the whole file into an ordered `Vec`, dropping lines that
//!   cannot be decoded
//! - `save_all` - rewrite the whole file from a collection
//! - `append` - add a single new record at the end of the file
//!
//! There is no partial update: a caller that changes one record loads the
//! collection, mutates it in memory and saves all of it.
//!
//! The backing file is created empty on first access. Access is single
//! process, single writer; no locking is performed.

use crate::core::traits::FlatRecord;
use crate::io::line_codec::{decode_record, reader_builder, writer_builder};
use crate::types::RecordError;
use std::fs::{File, OpenOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Store over one pipe-delimited file of `R` records
#[derive(Debug, Clone)]
pub struct FlatFileStore<R> {
    path: PathBuf,
    _record: PhantomData<R>,
}

impl<R: FlatRecord> FlatFileStore<R> {
    /// Create a store for the file at `path`
    ///
    /// Nothing is touched on disk until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFileStore {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file (zero bytes) if it does not exist yet
    pub fn ensure_exists(&self) -> Result<(), RecordError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| RecordError::file_unavailable(&self.path, &e))?;
        Ok(())
    }

    /// Load every decodable record in file order
    ///
    /// Lines with too few fields are skipped with a warning. Invalid UTF-8
    /// is replaced with U+FFFD and the record is kept. An empty or newly
    /// created file yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `FileUnavailable` if the file cannot be created or opened,
    /// and `Io` if reading fails part way.
    pub fn load(&self) -> Result<Vec<R>, RecordError> {
        self.ensure_exists()?;
        let file =
            File::open(&self.path).map_err(|e| RecordError::file_unavailable(&self.path, &e))?;

        let mut reader = reader_builder().from_reader(file);
        let mut records = Vec::new();
        let mut discarded = 0usize;

        for result in reader.byte_records() {
            match result {
                Ok(line) => match decode_record::<R>(&line) {
                    Some(record) => records.push(record),
                    None => {
                        discarded += 1;
                        warn!(
                            kind = R::KIND,
                            line = line.position().map(|p| p.line()),
                            fields = line.len(),
                            "Discarding line with too few fields"
                        );
                    }
                },
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    discarded += 1;
                    warn!(kind = R::KIND, error = %e, "Discarding unreadable line");
                }
            }
        }

        debug!(
            kind = R::KIND,
            path = %self.path.display(),
            count = records.len(),
            discarded,
            "Loaded records"
        );
        Ok(records)
    }

    /// Load, treating an unavailable file as an empty store
    ///
    /// Used by the interactive paths, which keep the session alive when the
    /// file cannot be read.
    pub fn load_or_empty(&self) -> Vec<R> {
        self.load().unwrap_or_else(|e| {
            warn!(kind = R::KIND, error = %e, "Store unavailable, treating as empty");
            Vec::new()
        })
    }

    /// Overwrite the file with one line per record, in the given order
    pub fn save_all(&self, records: &[R]) -> Result<(), RecordError> {
        let file =
            File::create(&self.path).map_err(|e| RecordError::file_unavailable(&self.path, &e))?;

        let mut writer = writer_builder().from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!(
            kind = R::KIND,
            path = %self.path.display(),
            count = records.len(),
            "Saved records"
        );
        Ok(())
    }

    /// Write one new record at the end of the file
    pub fn append(&self, record: &R) -> Result<(), RecordError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| RecordError::file_unavailable(&self.path, &e))?;

        let mut writer = writer_builder().from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(kind = R::KIND, key = record.key(), "Appended record");
        Ok(())
    }
}

/// Key for the next created record
///
/// The last record in file order plus one, or 1 for an empty collection.
/// This is the last record's key, not the maximum key: if the file is not in
/// insertion order the result can repeat an existing key.
pub fn next_key<R: FlatRecord>(records: &[R]) -> Result<u32, RecordError> {
    match records.last() {
        None => Ok(1),
        Some(last) => last
            .key()
            .checked_add(1)
            .ok_or_else(|| RecordError::arithmetic_overflow("next_key", last.key())),
    }
}
