//! Employee record operations
//!
//! `EmployeeRegistry` wraps the employee file and exposes create, view,
//! search, update and delete. Field values from the caller are validated
//! again here before anything reaches the file.

use crate::core::operations::{delete_where, ordered, update_by_key};
use crate::core::store::{next_key, FlatFileStore};
use crate::core::validator::{check_alphabetic, check_numeric};
use crate::types::{
    Confirmation, DeleteOutcome, Employee, EmployeeChanges, EmployeeFilter, EmployeeId,
    EmployeeQuery, NewEmployee, RecordError, ViewOrder,
};
use std::path::PathBuf;
use tracing::info;

/// Operations over the employee file
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    store: FlatFileStore<Employee>,
}

impl EmployeeRegistry {
    pub fn new(store: FlatFileStore<Employee>) -> Self {
        EmployeeRegistry { store }
    }

    /// Registry over the file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FlatFileStore::new(path))
    }

    pub fn store(&self) -> &FlatFileStore<Employee> {
        &self.store
    }

    /// Validate and append a new employee
    ///
    /// The id is the last record's id + 1 (1 for an empty file).
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name or designation are not letters/spaces,
    ///   or salary is not digits
    /// - `FileUnavailable` / `Io` if the append fails
    pub fn create(&self, draft: NewEmployee) -> Result<Employee, RecordError> {
        check_alphabetic("name", &draft.name)?;
        check_numeric("salary", &draft.salary)?;
        check_alphabetic("designation", &draft.designation)?;

        let records = self.store.load_or_empty();
        let employee = Employee {
            id: next_key(&records)?,
            name: draft.name,
            salary: draft.salary,
            designation: draft.designation,
        };
        self.store.append(&employee)?;

        info!(id = employee.id, "Created employee");
        Ok(employee)
    }

    /// All employees in file order or reverse file order
    pub fn list(&self, order: ViewOrder) -> Vec<Employee> {
        ordered(self.store.load_or_empty(), order)
    }

    /// Find employees matching `query`
    ///
    /// Id lookups stop at the first hit; name and designation lookups are
    /// case-insensitive and return every hit in file order.
    pub fn search(&self, query: &EmployeeQuery) -> Vec<Employee> {
        let records = self.store.load_or_empty();
        match query {
            EmployeeQuery::Id(id) => records
                .into_iter()
                .find(|e| e.id == *id)
                .into_iter()
                .collect(),
            EmployeeQuery::Name(name) => records
                .into_iter()
                .filter(|e| e.name.eq_ignore_ascii_case(name))
                .collect(),
            EmployeeQuery::Designation(designation) => records
                .into_iter()
                .filter(|e| e.designation.eq_ignore_ascii_case(designation))
                .collect(),
        }
    }

    /// Replace fields of the employee with `id`
    ///
    /// All supplied fields are validated before the file is read, then
    /// applied in the order name, salary, designation. An unknown id still
    /// rewrites the unchanged collection.
    pub fn update(
        &self,
        id: EmployeeId,
        changes: EmployeeChanges,
    ) -> Result<Employee, RecordError> {
        if changes.is_empty() {
            return Err(RecordError::validation_failed(
                "update",
                "no fields to update",
            ));
        }
        if let Some(name) = &changes.name {
            check_alphabetic("name", name)?;
        }
        if let Some(salary) = &changes.salary {
            check_numeric("salary", salary)?;
        }
        if let Some(designation) = &changes.designation {
            check_alphabetic("designation", designation)?;
        }

        update_by_key(&self.store, id, |employee| {
            if let Some(name) = changes.name {
                employee.name = name;
            }
            if let Some(salary) = changes.salary {
                employee.salary = salary;
            }
            if let Some(designation) = changes.designation {
                employee.designation = designation;
            }
            Ok(())
        })
    }

    /// Remove employees selected by `filter`
    ///
    /// `confirm` is consulted only for `EmployeeFilter::All`, after the store
    /// is known to be non-empty; it receives the number of records.
    pub fn delete<F>(
        &self,
        filter: &EmployeeFilter,
        confirm: F,
    ) -> Result<DeleteOutcome, RecordError>
    where
        F: FnOnce(usize) -> Confirmation,
    {
        delete_where(
            &self.store,
            matches!(filter, EmployeeFilter::All),
            |employee| filter.matches(employee),
            confirm,
        )
    }
}
