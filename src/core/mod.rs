//! Core business logic module
//!
//! This module contains the record store and the operations built on it:
//! - `validator` - Pure field validation predicates
//! - `traits` - The `FlatRecord` abstraction shared by both record kinds
//! - `store` - Whole-file load, save and append over one backing file
//! - `operations` - Generic update-by-key, filtered delete and view ordering
//! - `employees` - Employee operations
//! - `customers` - Customer operations, including deposit and withdrawal

pub mod customers;
pub mod employees;
pub mod operations;
pub mod store;
pub mod traits;
pub mod validator;

pub use customers::CustomerLedger;
pub use employees::EmployeeRegistry;
pub use store::{next_key, FlatFileStore};
pub use traits::FlatRecord;
