//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `employee`: Employee record and its operation inputs
//! - `customer`: Customer record, balance limits and operation inputs
//! - `outcome`: Confirmation, view ordering and operation results
//! - `error`: Error types for record operations

pub mod customer;
pub mod employee;
pub mod error;
pub mod outcome;

pub use customer::{
    AccountNumber, Balance, Customer, CustomerChanges, CustomerFilter, CustomerQuery,
    NewCustomer, MAX_DEPOSIT, MIN_BALANCE, MIN_DEPOSIT, NATIONAL_ID_LEN, PHONE_LEN,
};
pub use employee::{
    Employee, EmployeeChanges, EmployeeFilter, EmployeeId, EmployeeQuery, NewEmployee,
};
pub use error::RecordError;
pub use outcome::{BalanceOutcome, BalancePreview, Confirmation, DeleteOutcome, ViewOrder};
