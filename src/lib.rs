//! # Staffroll
//!
//! An interactive console manager for employee records.
//!
//! Each employee carries a name, a base salary, and a salary policy. Permanent
//! staff receive a 20% bonus on the base salary; contract staff receive the
//! base salary unchanged. Records live in memory for the duration of one run.
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use staffroll::{EmployeeStore, SalaryPolicy};
//!
//! let mut store = EmployeeStore::new();
//! let alice = store.add("Alice", Decimal::new(1000, 0), SalaryPolicy::Permanent)?;
//! assert_eq!(alice.calculated_salary(), Decimal::new(1200, 0));
//! # Ok::<(), staffroll::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use rust_decimal::Decimal;
use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod models;
pub mod observability;
pub mod storage;

// Re-exports for convenience
pub use cli::{InputField, MenuChoice, Session};
pub use config::StaffrollConfig;
pub use models::{Employee, EmployeeId, SalaryPolicy};
pub use storage::EmployeeStore;

/// Error type for staffroll operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `Parse` | Console input is not a well-formed number |
/// | `OutOfRange` | A number is outside its allowed bounds (menu choice, salary, type, id) |
/// | `NotFound` | An employee ID does not match any record |
/// | `InvalidInput` | The store is asked to hold a non-positive salary |
/// | `UnpriceableSalary` | A base salary is too large or too precise to price exactly |
/// | `InputClosed` | The console input reached end of stream |
/// | `OperationFailed` | I/O, configuration, or logging setup fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Console input could not be parsed as a number.
    #[error("could not parse {field} from '{input}'")]
    Parse {
        /// The field being read.
        field: InputField,
        /// The raw input line.
        input: String,
    },

    /// A parsed number is outside the allowed bounds.
    #[error("{field} out of range: {input}")]
    OutOfRange {
        /// The field being read.
        field: InputField,
        /// The raw input line.
        input: String,
    },

    /// No employee has the given ID.
    #[error("employee {0} not found")]
    NotFound(EmployeeId),

    /// Invalid input was provided to the store.
    ///
    /// Raised when a base salary is zero or negative.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The calculated salary for this base would not fit in a `Decimal`.
    ///
    /// Raised by both the console parser and the store, before any state
    /// changes.
    #[error("base salary {0} cannot be priced exactly")]
    UnpriceableSalary(Decimal),

    /// The input source is exhausted.
    #[error("input closed")]
    InputClosed,

    /// An operation failed.
    ///
    /// Raised when:
    /// - Reading from or writing to the console fails
    /// - A configuration file cannot be read or parsed
    /// - Logging cannot be initialized
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Returns true if the error should abort only the current console flow.
    ///
    /// Recoverable errors are reported to the user and the session returns
    /// to the main menu with state unchanged.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::OutOfRange { .. }
                | Self::NotFound(_)
                | Self::InvalidInput(_)
                | Self::UnpriceableSalary(_)
        )
    }
}

/// Result type alias for staffroll operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");

        let err = Error::NotFound(EmployeeId::new(3));
        assert_eq!(err.to_string(), "employee 3 not found");

        let err = Error::Parse {
            field: InputField::BaseSalary,
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "could not parse base salary from 'abc'");

        let err = Error::UnpriceableSalary(Decimal::MAX);
        assert_eq!(
            err.to_string(),
            "base salary 79228162514264337593543950335 cannot be priced exactly"
        );
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::NotFound(EmployeeId::new(1)).is_recoverable());
        assert!(Error::InvalidInput(String::new()).is_recoverable());
        assert!(Error::UnpriceableSalary(Decimal::MAX).is_recoverable());
        assert!(
            Error::OutOfRange {
                field: InputField::MenuChoice,
                input: "9".to_string(),
            }
            .is_recoverable()
        );
        assert!(!Error::InputClosed.is_recoverable());
        assert!(
            !Error::OperationFailed {
                operation: "read_line".to_string(),
                cause: "broken pipe".to_string(),
            }
            .is_recoverable()
        );
    }
}
