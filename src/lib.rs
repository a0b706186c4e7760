//! Bank Records Library
//! # Overview
//!
//! This library keeps employee and customer records in two pipe-delimited
//! text files, one record per line, and offers create, search, update,
//! delete, view and export operations on both, plus deposit and withdrawal
//! on customer balances.
//!
//! # Architecture
//!
//! - [`types`] - Record types, operation inputs and results, errors
//! - [`core`] - Business logic components:
//!   - [`core::store`] - Whole-file load, save and append
//!   - [`core::employees`] - Employee registry
//!   - [`core::customers`] - Customer ledger with balance rules
//!   - [`core::validator`] - Field validation
//! - [`io`] - Line codec and export reports
//! - [`config`] - Data file locations
//! - [`cli`] - CLI arguments parsing
//! - [`commands`] - Runs parsed commands and renders results
//!
//! # File Formats
//!
//! ```text
//! employees: id|name|salary|designation
//! customers: account|name|national id|phone|balance|address
//! ```
//!
//! Lines with too few fields are skipped on load. Extra delimiters are
//! folded into the last field. Every mutation other than create rewrites
//! the whole file.
//!
//! # Balance Rules
//!
//! - Opening deposit and each deposit: 1000 to 50000
//! - Withdrawals must leave at least 1000 in the account
//! - Deposits, withdrawals and delete-all require confirmation

// Module declarations
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use config::StoreConfig;
pub use core::{CustomerLedger, EmployeeRegistry, FlatFileStore};
pub use types::{
    AccountNumber, Balance, Confirmation, Customer, Employee, EmployeeId, RecordError,
};
