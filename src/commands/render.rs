//! Terminal tables for record listings

use crate::types::{BalancePreview, Customer, Employee, RecordError};
use std::io::Write;

/// Printed in place of a table when there is nothing to show
pub const EMPTY_STORE_MESSAGE: &str = "Data file was empty";

pub fn employee_table(employees: &[Employee], output: &mut dyn Write) -> Result<(), RecordError> {
    writeln!(
        output,
        "{:<6} | {:<20} | {:<10} | {}",
        "ID", "Name", "Salary", "Designation"
    )?;
    for employee in employees {
        writeln!(
            output,
            "{:<6} | {:<20} | {:<10} | {}",
            employee.id, employee.name, employee.salary, employee.designation
        )?;
    }
    Ok(())
}

pub fn customer_table(customers: &[Customer], output: &mut dyn Write) -> Result<(), RecordError> {
    writeln!(
        output,
        "{:<6} | {:<20} | {:<12} | {:<10} | {:<10} | {}",
        "Acc", "Name", "aadhaar", "Phone", "Balance", "Address"
    )?;
    for customer in customers {
        writeln!(
            output,
            "{:<6} | {:<20} | {:<12} | {:<10} | {:<10} | {}",
            customer.account,
            customer.name,
            customer.national_id,
            customer.phone,
            customer.balance,
            customer.address
        )?;
    }
    Ok(())
}

/// Summary shown before a deposit or withdrawal is confirmed
pub fn balance_preview(
    preview: &BalancePreview,
    verb: &str,
    output: &mut dyn Write,
) -> Result<(), RecordError> {
    writeln!(output, "Account : {}  Name : {}", preview.account, preview.name)?;
    writeln!(output, "Available balance : {}", preview.balance)?;
    writeln!(
        output,
        "Amount to {} : {}  Balance after : {}",
        verb, preview.amount, preview.resulting
    )?;
    Ok(())
}
