//! Export reports
//!
//! Human readable, write-only projections of already loaded records. Reports
//! are never read back by the store.

use crate::types::{Customer, Employee, RecordError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extension appended to the export file stem
pub const REPORT_EXTENSION: &str = "txt";

/// Write one report line per employee
pub fn write_employee_report(
    employees: &[Employee],
    output: &mut dyn Write,
) -> Result<(), RecordError> {
    for employee in employees {
        writeln!(
            output,
            "EMPLOYEE ID : {}  EMPLOYEE NAME : {}  EMPLOYEE DESIGNATION : {}",
            employee.id, employee.name, employee.designation
        )?;
    }
    Ok(())
}

/// Write one report line per customer
pub fn write_customer_report(
    customers: &[Customer],
    output: &mut dyn Write,
) -> Result<(), RecordError> {
    for customer in customers {
        writeln!(
            output,
            "ACCOUNT NUMBER : {}  CUSTOMER NAME : {}  BANK ACCOUNT BALANCE : {}",
            customer.account, customer.name, customer.balance
        )?;
    }
    Ok(())
}

/// Path of the report for `stem` inside `dir`
///
/// # Errors
///
/// Returns `ValidationFailed` for an empty stem.
pub fn report_path(dir: &Path, stem: &str) -> Result<PathBuf, RecordError> {
    if stem.trim().is_empty() {
        return Err(RecordError::validation_failed(
            "file name",
            "cannot be empty",
        ));
    }
    Ok(dir.join(format!("{}.{}", stem, REPORT_EXTENSION)))
}

/// Create (or truncate) `path` and fill it with `render`
pub fn export_to_file<F>(path: &Path, render: F) -> Result<(), RecordError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), RecordError>,
{
    let file = File::create(path).map_err(|e| RecordError::file_unavailable(path, &e))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer)?;
    writer.flush()?;
    Ok(())
}
