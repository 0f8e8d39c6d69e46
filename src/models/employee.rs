//! Employee records and identifiers.

use super::SalaryPolicy;
use rust_decimal::Decimal;
use std::fmt;

/// Unique identifier for an employee.
///
/// Assigned by the store from a counter starting at 1 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(u64);

impl EmployeeId {
    /// The first identifier handed out by a fresh store.
    pub const FIRST: Self = Self(1);

    /// Creates an employee ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An employee record.
///
/// The calculated salary is derived eagerly from the base salary and policy,
/// so the record can only be built or repriced through methods that keep the
/// three in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    base_salary: Decimal,
    policy: SalaryPolicy,
    calculated_salary: Decimal,
}

impl Employee {
    /// Builds a record, computing the calculated salary from `policy`.
    ///
    /// Callers are responsible for checking `base_salary > 0` first.
    pub(crate) fn new(
        id: EmployeeId,
        name: impl Into<String>,
        base_salary: Decimal,
        policy: SalaryPolicy,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            base_salary,
            policy,
            calculated_salary: policy.compute(base_salary),
        }
    }

    /// Replaces policy and base salary, recomputing the calculated salary.
    pub(crate) fn reprice(&mut self, policy: SalaryPolicy, base_salary: Decimal) {
        self.policy = policy;
        self.base_salary = base_salary;
        self.calculated_salary = policy.compute(base_salary);
    }

    /// Returns the employee ID.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the employee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base salary.
    #[must_use]
    pub const fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Returns the active salary policy.
    #[must_use]
    pub const fn policy(&self) -> SalaryPolicy {
        self.policy
    }

    /// Returns the salary after the policy has been applied.
    #[must_use]
    pub const fn calculated_salary(&self) -> Decimal {
        self.calculated_salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_salary() {
        let employee = Employee::new(
            EmployeeId::FIRST,
            "Alice",
            Decimal::new(1000, 0),
            SalaryPolicy::Permanent,
        );
        assert_eq!(employee.id(), EmployeeId::new(1));
        assert_eq!(employee.name(), "Alice");
        assert_eq!(employee.calculated_salary(), Decimal::new(1200, 0));
    }

    #[test]
    fn test_reprice_keeps_identity() {
        let mut employee = Employee::new(
            EmployeeId::new(7),
            "Bob",
            Decimal::new(500, 0),
            SalaryPolicy::Contract,
        );
        employee.reprice(SalaryPolicy::Permanent, Decimal::new(600, 0));

        assert_eq!(employee.id(), EmployeeId::new(7));
        assert_eq!(employee.name(), "Bob");
        assert_eq!(employee.policy(), SalaryPolicy::Permanent);
        assert_eq!(employee.base_salary(), Decimal::new(600, 0));
        assert_eq!(employee.calculated_salary(), Decimal::new(720, 0));
    }

    #[test]
    fn test_id_sequence() {
        assert_eq!(EmployeeId::FIRST.next(), EmployeeId::new(2));
        assert_eq!(EmployeeId::from(42).to_string(), "42");
        assert_eq!(EmployeeId::new(9).get(), 9);
    }
}
