//! `customer` subcommands

use super::employee::report_delete;
use super::render::{balance_preview, customer_table, EMPTY_STORE_MESSAGE};
use super::Console;
use crate::cli::CustomerCommand;
use crate::config::StoreConfig;
use crate::core::CustomerLedger;
use crate::io::{export_to_file, report_path, write_customer_report};
use crate::types::{
    BalanceOutcome, BalancePreview, Confirmation, CustomerChanges, NewCustomer, RecordError,
    ViewOrder,
};

pub fn execute(
    action: CustomerCommand,
    config: &StoreConfig,
    console: &mut Console<'_>,
) -> Result<(), RecordError> {
    let ledger = CustomerLedger::open(config.customer_path());

    match action {
        CustomerCommand::Add {
            name,
            national_id,
            phone,
            deposit,
            address,
        } => {
            let customer = ledger.create(NewCustomer {
                name,
                national_id,
                phone,
                initial_deposit: deposit,
                address,
            })?;
            writeln!(
                console.output(),
                "Customer saved with account number {} and balance {}",
                customer.account, customer.balance
            )?;
        }
        CustomerCommand::List { order } => {
            let customers = ledger.list(order.into());
            if customers.is_empty() {
                writeln!(console.output(), "{}", EMPTY_STORE_MESSAGE)?;
            } else {
                customer_table(&customers, console.output())?;
            }
        }
        CustomerCommand::Search(key) => match ledger.search(&key.into_query()?) {
            Some(customer) => customer_table(&[customer], console.output())?,
            None => writeln!(console.output(), "No matching customer found")?,
        },
        CustomerCommand::Update {
            account,
            name,
            national_id,
            phone,
            address,
            balance,
        } => {
            let updated = ledger.update(
                account,
                CustomerChanges {
                    name,
                    national_id,
                    phone,
                    address,
                    balance,
                },
            )?;
            writeln!(console.output(), "Customer {} updated", updated.account)?;
            customer_table(&[updated], console.output())?;
        }
        CustomerCommand::Delete { target, yes } => {
            let filter = target.into_filter()?;
            let outcome = ledger.delete(&filter, |count| {
                console.confirm(&format!("Delete all {} customer records?", count), yes)
            })?;
            report_delete(outcome, console)?;
        }
        CustomerCommand::Export { stem } => {
            let path = report_path(config.data_dir(), &stem)?;
            let customers = ledger.list(ViewOrder::Ascending);
            if customers.is_empty() {
                return Err(RecordError::store_empty("Customer"));
            }
            export_to_file(&path, |out| write_customer_report(&customers, out))?;
            writeln!(
                console.output(),
                "Exported {} customers to {}",
                customers.len(),
                path.display()
            )?;
        }
        CustomerCommand::Deposit {
            account,
            amount,
            yes,
        } => {
            let outcome = ledger.deposit(account, &amount, |preview| {
                confirm_change(console, preview, "deposit", yes)
            })?;
            report_balance(outcome, "Deposited", console)?;
        }
        CustomerCommand::Withdraw {
            account,
            amount,
            yes,
        } => {
            let outcome = ledger.withdraw(account, &amount, |preview| {
                confirm_change(console, preview, "withdraw", yes)
            })?;
            report_balance(outcome, "Withdrew", console)?;
        }
    }

    Ok(())
}

fn confirm_change(
    console: &mut Console<'_>,
    preview: &BalancePreview,
    verb: &str,
    yes: bool,
) -> Confirmation {
    if balance_preview(preview, verb, console.output()).is_err() {
        return Confirmation::Declined;
    }
    console.confirm(&format!("Confirm {} of {}?", verb, preview.amount), yes)
}

fn report_balance(
    outcome: BalanceOutcome,
    done: &str,
    console: &mut Console<'_>,
) -> Result<(), RecordError> {
    match outcome {
        BalanceOutcome::Applied {
            account,
            previous,
            balance,
        } => writeln!(
            console.output(),
            "{} {} on account {}. New balance: {}",
            done,
            (balance - previous).abs(),
            account,
            balance
        )?,
        BalanceOutcome::Cancelled => writeln!(console.output(), "Transaction cancelled")?,
    }
    Ok(())
}
