//! Record operations shared by both record kinds
//!
//! Every operation here loads the full collection, works on it in memory and,
//! when it mutates, rewrites the whole file. A store that cannot be read is
//! treated as empty, and an empty store is never rewritten.

use crate::core::store::FlatFileStore;
use crate::core::traits::FlatRecord;
use crate::types::{Confirmation, DeleteOutcome, RecordError, ViewOrder};
use tracing::{debug, info};

/// Arrange a loaded collection for display
pub fn ordered<R>(mut records: Vec<R>, order: ViewOrder) -> Vec<R> {
    if order == ViewOrder::Descending {
        records.reverse();
    }
    records
}

/// Apply `apply` to the record with `key` and persist the collection
///
/// If `apply` fails nothing is written. If no record has `key` the unchanged
/// collection is still written back before `RecordNotFound` is returned.
///
/// # Errors
///
/// - `StoreEmpty` if nothing could be loaded
/// - `RecordNotFound` if no record has `key`
/// - any error returned by `apply`, or by the save
pub fn update_by_key<R, F>(store: &FlatFileStore<R>, key: u32, apply: F) -> Result<R, RecordError>
where
    R: FlatRecord + Clone,
    F: FnOnce(&mut R) -> Result<(), RecordError>,
{
    let mut records = store.load_or_empty();
    if records.is_empty() {
        return Err(RecordError::store_empty(R::KIND));
    }

    let Some(index) = records.iter().position(|r| r.key() == key) else {
        store.save_all(&records)?;
        debug!(kind = R::KIND, key, "Update target not found");
        return Err(RecordError::not_found(R::KIND, key));
    };

    apply(&mut records[index])?;
    store.save_all(&records)?;

    info!(kind = R::KIND, key, "Updated record");
    Ok(records[index].clone())
}

/// Remove records from the store
///
/// With `delete_all` every record is removed, but only after `confirm`
/// (given the number of records) affirms; otherwise the file is left
/// untouched. Without it, records matching `predicate` are removed, the
/// survivors keep their relative order, and the collection is rewritten
/// even when nothing matched.
pub fn delete_where<R, P, F>(
    store: &FlatFileStore<R>,
    delete_all: bool,
    predicate: P,
    confirm: F,
) -> Result<DeleteOutcome, RecordError>
where
    R: FlatRecord,
    P: Fn(&R) -> bool,
    F: FnOnce(usize) -> Confirmation,
{
    let records = store.load_or_empty();
    if records.is_empty() {
        return Ok(DeleteOutcome::StoreEmpty);
    }

    if delete_all {
        let count = records.len();
        if !confirm(count).is_affirmed() {
            debug!(kind = R::KIND, "Delete all cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        store.save_all(&[])?;
        info!(kind = R::KIND, count, "Deleted all records");
        return Ok(DeleteOutcome::Removed(count));
    }

    let before = records.len();
    let kept: Vec<R> = records.into_iter().filter(|r| !predicate(r)).collect();
    let removed = before - kept.len();
    store.save_all(&kept)?;

    info!(kind = R::KIND, removed, "Deleted matching records");
    Ok(if removed == 0 {
        DeleteOutcome::NoMatches
    } else {
        DeleteOutcome::Removed(removed)
    })
}
