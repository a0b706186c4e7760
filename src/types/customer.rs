//! Customer-related types
//!
//! This module defines the persisted `Customer` record, the balance limits
//! enforced by deposit and withdrawal, and the inputs accepted by the
//! customer operations.

use serde::Serialize;

/// Customer account number
///
/// Assigned by the store as last account + 1, starting at 1.
pub type AccountNumber = u32;

/// Account balance in whole currency units
pub type Balance = i64;

/// Balance may never drop below this amount through a withdrawal
pub const MIN_BALANCE: Balance = 1000;

/// Smallest accepted deposit (and initial deposit)
pub const MIN_DEPOSIT: Balance = 1000;

/// Largest accepted deposit (and initial deposit) per transaction
pub const MAX_DEPOSIT: Balance = 50000;

/// Length of the national identifier
pub const NATIONAL_ID_LEN: usize = 12;

/// Length of the phone number
pub const PHONE_LEN: usize = 10;

/// A persisted customer record
///
/// Field order matches the on-disk line
/// `account|name|nationalId|phone|balance|address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Unique account number
    pub account: AccountNumber,

    /// Letters and spaces only
    pub name: String,

    /// Exactly 12 digits
    pub national_id: String,

    /// Exactly 10 digits
    pub phone: String,

    /// Current balance
    ///
    /// Starts between `MIN_DEPOSIT` and `MAX_DEPOSIT`; afterwards only
    /// deposits, withdrawals and explicit balance updates change it.
    pub balance: Balance,

    /// Free text, non-empty
    pub address: String,
}

/// Field values for a new customer, before an account number is assigned
///
/// `initial_deposit` is the raw operand; it is checked for digits and range
/// by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub initial_deposit: String,
    pub address: String,
}

/// Replacement values for an existing customer
///
/// Applied in the order name, national id, phone, address, balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Raw balance; digits only, no range check
    pub balance: Option<String>,
}

impl CustomerChanges {
    /// True when no field is being replaced
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.national_id.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.balance.is_none()
    }
}

/// Search key for customer lookups; every variant returns the first hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerQuery {
    Account(AccountNumber),
    NationalId(String),
    Phone(String),
}

impl CustomerQuery {
    /// Whether `customer` satisfies this query
    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerQuery::Account(account) => customer.account == *account,
            CustomerQuery::NationalId(national_id) => customer.national_id == *national_id,
            CustomerQuery::Phone(phone) => customer.phone == *phone,
        }
    }
}

/// Selects which customers a delete removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerFilter {
    Account(AccountNumber),
    /// Case-insensitive
    Name(String),
    NationalId(String),
    Phone(String),
    /// Every record; gated behind a confirmation
    All,
}

impl CustomerFilter {
    /// Whether `customer` is removed by this filter
    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerFilter::Account(account) => customer.account == *account,
            CustomerFilter::Name(name) => customer.name.eq_ignore_ascii_case(name),
            CustomerFilter::NationalId(national_id) => customer.national_id == *national_id,
            CustomerFilter::Phone(phone) => customer.phone == *phone,
            CustomerFilter::All => true,
        }
    }
}
