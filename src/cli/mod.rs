//! Console interface.
//!
//! Staffroll is driven by a numbered menu read from a line-oriented input:
//!
//! | Choice | Command |
//! |--------|---------|
//! | `1` | Add Employee |
//! | `2` | View Employees |
//! | `3` | Update Employee Salary Type and Base Salary |
//! | `4` | Delete Employee |
//! | `5` | Exit |
//!
//! # Example Session
//!
//! ```text
//! Employee Management System
//! 1. Add Employee
//! ...
//! Enter your choice: 1
//! Enter employee name: Alice
//! Enter base salary: 1000
//! Select salary type (1. Permanent, 2. Contract): 1
//! Employee added successfully with ID 1.
//! ```

mod input;
mod menu;
mod session;

pub use input::{
    InputField, parse_base_salary, parse_employee_id, parse_integer, parse_salary_type,
};
pub use menu::{MENU_PROMPT, MENU_TITLE, MenuChoice, write_menu};
pub use session::{Flow, Session, user_message};
