//! In-memory employee store.
//!
//! Holds employee records in insertion order together with the identifier
//! counter. Every operation validates before it mutates, so a failed call
//! leaves both the records and the counter untouched.

use crate::models::{Employee, EmployeeId, SalaryPolicy};
use crate::{Error, Result};
use rust_decimal::Decimal;
use tracing::instrument;

/// Ordered collection of employee records.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use staffroll::{EmployeeId, EmployeeStore, SalaryPolicy};
///
/// let mut store = EmployeeStore::new();
/// store.add("Alice", Decimal::new(1000, 0), SalaryPolicy::Permanent)?;
/// store.remove(EmployeeId::new(1))?;
///
/// // Identifiers are never reused.
/// let bob = store.add("Bob", Decimal::new(500, 0), SalaryPolicy::Contract)?;
/// assert_eq!(bob.id(), EmployeeId::new(2));
/// # Ok::<(), staffroll::Error>(())
/// ```
#[derive(Debug)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    next_id: EmployeeId,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// Creates an empty store whose first record will get ID 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
            next_id: EmployeeId::FIRST,
        }
    }

    /// Adds an employee and returns the new record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `base_salary` is not positive, or
    /// [`Error::UnpriceableSalary`] if it cannot be priced exactly.
    #[instrument(skip_all, fields(policy = %policy))]
    pub fn add(
        &mut self,
        name: impl Into<String>,
        base_salary: Decimal,
        policy: SalaryPolicy,
    ) -> Result<&Employee> {
        validate_base_salary(base_salary)?;

        let id = self.next_id;
        self.next_id = id.next();
        let index = self.employees.len();
        self.employees
            .push(Employee::new(id, name, base_salary, policy));

        tracing::info!(employee_id = %id, "Added employee");
        Ok(&self.employees[index])
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the ID the next [`add`](Self::add) will assign.
    #[must_use]
    pub const fn next_id(&self) -> EmployeeId {
        self.next_id
    }

    /// Finds an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has this ID.
    pub fn find_by_id(&self, id: EmployeeId) -> Result<&Employee> {
        self.position(id).map(|index| &self.employees[index])
    }

    /// Replaces an employee's policy and base salary.
    ///
    /// The calculated salary is recomputed; ID and name are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has this ID,
    /// [`Error::InvalidInput`] if `base_salary` is not positive, or
    /// [`Error::UnpriceableSalary`] if it cannot be priced exactly.
    #[instrument(skip_all, fields(employee_id = %id, policy = %policy))]
    pub fn update_policy_and_base(
        &mut self,
        id: EmployeeId,
        policy: SalaryPolicy,
        base_salary: Decimal,
    ) -> Result<&Employee> {
        let index = self.position(id)?;
        validate_base_salary(base_salary)?;

        self.employees[index].reprice(policy, base_salary);

        tracing::info!("Updated employee salary");
        Ok(&self.employees[index])
    }

    /// Removes an employee and returns the removed record.
    ///
    /// Remaining IDs are untouched and the counter is not rewound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has this ID.
    #[instrument(skip_all, fields(employee_id = %id))]
    pub fn remove(&mut self, id: EmployeeId) -> Result<Employee> {
        let index = self.position(id)?;
        let removed = self.employees.remove(index);

        tracing::info!(remaining = self.employees.len(), "Removed employee");
        Ok(removed)
    }

    fn position(&self, id: EmployeeId) -> Result<usize> {
        self.employees
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| {
                tracing::debug!(employee_id = %id, "Employee lookup missed");
                Error::NotFound(id)
            })
    }
}

fn validate_base_salary(base_salary: Decimal) -> Result<()> {
    if base_salary <= Decimal::ZERO {
        return Err(Error::InvalidInput(format!(
            "base salary must be greater than zero, got {base_salary}"
        )));
    }
    if !SalaryPolicy::is_priceable(base_salary) {
        tracing::debug!(base_salary = %base_salary, "Rejected unpriceable base salary");
        return Err(Error::UnpriceableSalary(base_salary));
    }
    Ok(())
}
