//! Employee-related types
//!
//! Defines the persisted `Employee` record together with the inputs accepted
//! by the employee operations (draft, changes, queries and delete filters).

use serde::Serialize;

/// Employee identifier
///
/// Assigned by the store as last id + 1, starting at 1.
pub type EmployeeId = u32;

/// A persisted employee record
///
/// Field order matches the on-disk line `id|name|salary|designation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    /// Unique employee id
    pub id: EmployeeId,

    /// Letters and spaces only
    pub name: String,

    /// Digits only, kept as text (no arithmetic is performed on it)
    pub salary: String,

    /// Letters and spaces only
    pub designation: String,
}

/// Field values for a new employee, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub salary: String,
    pub designation: String,
}

/// Replacement values for an existing employee
///
/// Every supplied field is validated before any is applied. Fields are
/// applied in the order name, salary, designation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub salary: Option<String>,
    pub designation: Option<String>,
}

impl EmployeeChanges {
    /// True when no field is being replaced
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.salary.is_none() && self.designation.is_none()
    }
}

/// Search key for employee lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeQuery {
    /// Exact id match, first hit only
    Id(EmployeeId),
    /// Case-insensitive name match, all hits
    Name(String),
    /// Case-insensitive designation match, all hits
    Designation(String),
}

/// Selects which employees a delete removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeFilter {
    Id(EmployeeId),
    Name(String),
    Designation(String),
    /// Every record; gated behind a confirmation
    All,
}

impl EmployeeFilter {
    /// Whether `employee` is removed by this filter
    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            EmployeeFilter::Id(id) => employee.id == *id,
            EmployeeFilter::Name(name) => employee.name.eq_ignore_ascii_case(name),
            EmployeeFilter::Designation(designation) => {
                employee.designation.eq_ignore_ascii_case(designation)
            }
            EmployeeFilter::All => true,
        }
    }
}
