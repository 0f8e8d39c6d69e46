//! Record storage.
//!
//! Staffroll keeps everything in memory for the lifetime of one run. The
//! [`EmployeeStore`] owns every employee record and the identifier counter;
//! nothing else holds references to records across calls.

mod employee;

pub use employee::EmployeeStore;
