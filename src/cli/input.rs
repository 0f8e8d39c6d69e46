//! Parsing and validation of console input lines.
//!
//! Each parser trims surrounding whitespace, then distinguishes malformed
//! input ([`Error::Parse`]) from well-formed numbers outside the allowed
//! bounds ([`Error::OutOfRange`]).

use crate::models::{EmployeeId, SalaryPolicy};
use crate::{Error, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The console field a line of input was read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Main menu selection (1-5).
    MenuChoice,
    /// Base salary (positive decimal).
    BaseSalary,
    /// Salary type selection (1 or 2).
    SalaryType,
    /// Employee identifier (positive integer).
    EmployeeId,
}

impl InputField {
    /// Returns the field name as shown in log and error text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MenuChoice => "menu choice",
            Self::BaseSalary => "base salary",
            Self::SalaryType => "salary type",
            Self::EmployeeId => "employee ID",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a whole number for `field`.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the trimmed line is not an integer.
pub fn parse_integer(field: InputField, line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed.parse::<i64>().map_err(|_| Error::Parse {
        field,
        input: trimmed.to_string(),
    })
}

/// Parses a base salary, which must be a decimal greater than zero that
/// every policy can price exactly.
///
/// # Errors
///
/// Returns [`Error::Parse`] for non-numeric input, [`Error::OutOfRange`]
/// for zero or negative amounts, and [`Error::UnpriceableSalary`] for
/// amounts too large or too precise to price.
pub fn parse_base_salary(line: &str) -> Result<Decimal> {
    let trimmed = line.trim();
    let amount = Decimal::from_str(trimmed).map_err(|_| Error::Parse {
        field: InputField::BaseSalary,
        input: trimmed.to_string(),
    })?;

    if amount <= Decimal::ZERO {
        return Err(Error::OutOfRange {
            field: InputField::BaseSalary,
            input: trimmed.to_string(),
        });
    }
    if !SalaryPolicy::is_priceable(amount) {
        return Err(Error::UnpriceableSalary(amount));
    }
    Ok(amount)
}

/// Parses a salary type selection: `1` for permanent, `2` for contract.
///
/// # Errors
///
/// Returns [`Error::Parse`] for non-numeric input and [`Error::OutOfRange`]
/// for any number other than 1 or 2.
pub fn parse_salary_type(line: &str) -> Result<SalaryPolicy> {
    let choice = parse_integer(InputField::SalaryType, line)?;
    SalaryPolicy::from_choice(choice).ok_or_else(|| Error::OutOfRange {
        field: InputField::SalaryType,
        input: line.trim().to_string(),
    })
}

/// Parses an employee ID, which must be a positive integer.
///
/// Whether the ID exists is checked by the store, not here.
///
/// # Errors
///
/// Returns [`Error::Parse`] for non-numeric input and [`Error::OutOfRange`]
/// for zero or negative numbers.
pub fn parse_employee_id(line: &str) -> Result<EmployeeId> {
    let raw = parse_integer(InputField::EmployeeId, line)?;
    u64::try_from(raw)
        .ok()
        .filter(|id| *id > 0)
        .map(EmployeeId::new)
        .ok_or_else(|| Error::OutOfRange {
            field: InputField::EmployeeId,
            input: line.trim().to_string(),
        })
}
