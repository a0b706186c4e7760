//! `employee` subcommands

use super::render::{employee_table, EMPTY_STORE_MESSAGE};
use super::Console;
use crate::cli::EmployeeCommand;
use crate::config::StoreConfig;
use crate::core::EmployeeRegistry;
use crate::io::{export_to_file, report_path, write_employee_report};
use crate::types::{DeleteOutcome, EmployeeChanges, NewEmployee, RecordError, ViewOrder};

pub fn execute(
    action: EmployeeCommand,
    config: &StoreConfig,
    console: &mut Console<'_>,
) -> Result<(), RecordError> {
    let registry = EmployeeRegistry::open(config.employee_path());

    match action {
        EmployeeCommand::Add {
            name,
            salary,
            designation,
        } => {
            let employee = registry.create(NewEmployee {
                name,
                salary,
                designation,
            })?;
            writeln!(console.output(), "Employee saved with ID {}", employee.id)?;
        }
        EmployeeCommand::List { order } => {
            let employees = registry.list(order.into());
            if employees.is_empty() {
                writeln!(console.output(), "{}", EMPTY_STORE_MESSAGE)?;
            } else {
                employee_table(&employees, console.output())?;
            }
        }
        EmployeeCommand::Search(key) => {
            let found = registry.search(&key.into_query()?);
            if found.is_empty() {
                writeln!(console.output(), "No matching employee found")?;
            } else {
                employee_table(&found, console.output())?;
            }
        }
        EmployeeCommand::Update {
            id,
            name,
            salary,
            designation,
        } => {
            let updated = registry.update(
                id,
                EmployeeChanges {
                    name,
                    salary,
                    designation,
                },
            )?;
            writeln!(console.output(), "Employee {} updated", updated.id)?;
            employee_table(&[updated], console.output())?;
        }
        EmployeeCommand::Delete { target, yes } => {
            let filter = target.into_filter()?;
            let outcome = registry.delete(&filter, |count| {
                console.confirm(&format!("Delete all {} employee records?", count), yes)
            })?;
            report_delete(outcome, console)?;
        }
        EmployeeCommand::Export { stem } => {
            let path = report_path(config.data_dir(), &stem)?;
            let employees = registry.list(ViewOrder::Ascending);
            if employees.is_empty() {
                return Err(RecordError::store_empty("Employee"));
            }
            export_to_file(&path, |out| write_employee_report(&employees, out))?;
            writeln!(
                console.output(),
                "Exported {} employees to {}",
                employees.len(),
                path.display()
            )?;
        }
    }

    Ok(())
}

/// Print the result of a delete request
pub(super) fn report_delete(
    outcome: DeleteOutcome,
    console: &mut Console<'_>,
) -> Result<(), RecordError> {
    let output = console.output();
    match outcome {
        DeleteOutcome::StoreEmpty => writeln!(output, "{}", EMPTY_STORE_MESSAGE)?,
        DeleteOutcome::NoMatches => {
            writeln!(output, "No matching records found")?;
            writeln!(output, "Deleted 0 records.")?;
        }
        DeleteOutcome::Removed(count) => writeln!(output, "Deleted {} records.", count)?,
        DeleteOutcome::Cancelled => writeln!(output, "Delete cancelled")?,
    }
    Ok(())
}
