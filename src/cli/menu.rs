//! Main menu options.

use super::input::{InputField, parse_integer};
use crate::{Error, Result};
use std::io::Write;

/// Title printed above the menu.
pub const MENU_TITLE: &str = "Employee Management System";

/// Prompt printed after the menu options.
pub const MENU_PROMPT: &str = "Enter your choice: ";

/// A selectable main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// Add a new employee.
    Add,
    /// List all employees.
    View,
    /// Change an employee's salary type and base salary.
    Update,
    /// Remove an employee.
    Delete,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Returns all entries in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Add, Self::View, Self::Update, Self::Delete, Self::Exit]
    }

    /// Returns the number the user types to select this entry.
    #[must_use]
    pub const fn number(self) -> i64 {
        match self {
            Self::Add => 1,
            Self::View => 2,
            Self::Update => 3,
            Self::Delete => 4,
            Self::Exit => 5,
        }
    }

    /// Returns the menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Employee",
            Self::View => "View Employees",
            Self::Update => "Update Employee Salary Type and Base Salary",
            Self::Delete => "Delete Employee",
            Self::Exit => "Exit",
        }
    }

    /// Maps a menu number to its entry.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.number() == number)
    }

    /// Parses a line of input as a menu selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for non-numeric input and
    /// [`Error::OutOfRange`] for numbers outside 1-5.
    pub fn parse(line: &str) -> Result<Self> {
        let number = parse_integer(InputField::MenuChoice, line)?;
        Self::from_number(number).ok_or_else(|| Error::OutOfRange {
            field: InputField::MenuChoice,
            input: line.trim().to_string(),
        })
    }
}

/// Writes the full menu, ending with the choice prompt.
///
/// # Errors
///
/// Returns an I/O error if the output cannot be written.
pub fn write_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    for choice in MenuChoice::all() {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    write!(out, "{MENU_PROMPT}")?;
    out.flush()
}
