//! Data models for staffroll.
//!
//! Employee records and the salary policies applied to them.

mod employee;
mod policy;

pub use employee::{Employee, EmployeeId};
pub use policy::SalaryPolicy;
