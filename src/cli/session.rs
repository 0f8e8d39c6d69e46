//! Interactive console session.
//!
//! A [`Session`] repeats a prompt, read, validate, act, respond cycle over a
//! line-oriented input and output pair until the user chooses Exit or the
//! input runs dry. Every input is validated before the store is touched, so a
//! rejected value aborts only the current flow and leaves all records as they
//! were.

use super::input::{InputField, parse_base_salary, parse_employee_id, parse_salary_type};
use super::menu::{MenuChoice, write_menu};
use crate::storage::EmployeeStore;
use crate::{Error, Result};
use std::io::{BufRead, Write};

const NAME_PROMPT: &str = "Enter employee name: ";
const SALARY_PROMPT: &str = "Enter base salary: ";
const SALARY_TYPE_PROMPT: &str = "Select salary type (1. Permanent, 2. Contract): ";
const ID_PROMPT: &str = "Enter employee ID: ";

const NO_EMPLOYEES: &str = "No employees found.";
const NOTHING_TO_UPDATE: &str = "No employees available to update.";
const NOTHING_TO_DELETE: &str = "No employees available to delete.";
const EXIT_MESSAGE: &str = "Exiting Employee Management System. Goodbye!";

/// What the session does after a menu command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// End the session.
    Exit,
}

/// Console session driving an [`EmployeeStore`].
///
/// # Example
///
/// ```rust
/// use staffroll::{EmployeeStore, Session};
/// use std::io::Cursor;
///
/// let mut store = EmployeeStore::new();
/// let mut output = Vec::new();
/// let input = Cursor::new("1\nAlice\n1000\n1\n5\n");
///
/// Session::new(&mut store, input, &mut output).run()?;
/// assert_eq!(store.len(), 1);
/// # Ok::<(), staffroll::Error>(())
/// ```
pub struct Session<'a, R, W> {
    store: &'a mut EmployeeStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session over the given store, input, and output.
    pub fn new(store: &'a mut EmployeeStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs menu iterations until Exit is chosen or the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] if the console cannot be read or
    /// written. User input mistakes are never returned as errors.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Session started");
        loop {
            match self.step() {
                Ok(Flow::Continue) => {},
                Ok(Flow::Exit) => {
                    tracing::debug!(employees = self.store.len(), "Session exited");
                    return Ok(());
                },
                Err(Error::InputClosed) => {
                    tracing::warn!("Input closed before Exit was chosen; ending session");
                    return Ok(());
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Shows the menu once and carries out the selected command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input and
    /// [`Error::OperationFailed`] on console I/O failure.
    pub fn step(&mut self) -> Result<Flow> {
        write_menu(&mut self.output).map_err(|e| io_failure("write_menu", &e))?;
        let line = self.read_line()?;

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(e) => {
                self.recover(e)?;
                return Ok(Flow::Continue);
            },
        };
        tracing::debug!(choice = ?choice, "Menu selection");

        let result = match choice {
            MenuChoice::Add => self.add_employee(),
            MenuChoice::View => self.view_employees(),
            MenuChoice::Update => self.update_employee(),
            MenuChoice::Delete => self.delete_employee(),
            MenuChoice::Exit => {
                self.say(EXIT_MESSAGE)?;
                return Ok(Flow::Exit);
            },
        };

        if let Err(e) = result {
            self.recover(e)?;
        }
        Ok(Flow::Continue)
    }

    fn add_employee(&mut self) -> Result<()> {
        let name = self.prompt(NAME_PROMPT)?;
        let base_salary = parse_base_salary(&self.prompt(SALARY_PROMPT)?)?;
        let policy = parse_salary_type(&self.prompt(SALARY_TYPE_PROMPT)?)?;

        let id = self.store.add(name, base_salary, policy)?.id();
        self.say(&format!("Employee added successfully with ID {id}."))
    }

    fn view_employees(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.say(NO_EMPLOYEES);
        }

        // Listing shows the base salary, not the calculated one.
        let rows: Vec<String> = self
            .store
            .list()
            .iter()
            .map(|e| {
                format!(
                    "ID: {}, Name: {}, Base Salary: {:.2}",
                    e.id(),
                    e.name(),
                    e.base_salary()
                )
            })
            .collect();
        for row in &rows {
            self.say(row)?;
        }
        Ok(())
    }

    fn update_employee(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.say(NOTHING_TO_UPDATE);
        }

        let id = parse_employee_id(&self.prompt(ID_PROMPT)?)?;
        self.store.find_by_id(id)?;
        let base_salary = parse_base_salary(&self.prompt(SALARY_PROMPT)?)?;
        let policy = parse_salary_type(&self.prompt(SALARY_TYPE_PROMPT)?)?;

        let name = self
            .store
            .update_policy_and_base(id, policy, base_salary)?
            .name()
            .to_string();
        self.say(&format!("Employee {name} updated successfully."))
    }

    fn delete_employee(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.say(NOTHING_TO_DELETE);
        }

        let id = parse_employee_id(&self.prompt(ID_PROMPT)?)?;
        let removed = self.store.remove(id)?;
        self.say(&format!(
            "Employee {} with ID {} deleted successfully.",
            removed.name(),
            removed.id()
        ))
    }

    /// Reports a recoverable error to the user; propagates anything else.
    fn recover(&mut self, error: Error) -> Result<()> {
        if !error.is_recoverable() {
            return Err(error);
        }
        tracing::debug!(error = %error, "Command aborted");
        self.say(&user_message(&error))
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}").map_err(|e| io_failure("write_prompt", &e))?;
        self.output
            .flush()
            .map_err(|e| io_failure("flush_output", &e))?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| io_failure("read_line", &e))?;
        if read == 0 {
            return Err(Error::InputClosed);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| io_failure("write_output", &e))
    }
}

/// Returns the console text shown for a recoverable error.
#[must_use]
pub fn user_message(error: &Error) -> String {
    match error {
        Error::Parse {
            field: InputField::MenuChoice,
            ..
        }
        | Error::OutOfRange {
            field: InputField::MenuChoice,
            ..
        } => "Invalid choice. Please enter a number between 1 and 5.".to_string(),
        Error::Parse {
            field: InputField::BaseSalary,
            ..
        } => "Invalid base salary. Please enter a numeric value.".to_string(),
        Error::OutOfRange {
            field: InputField::BaseSalary,
            ..
        }
        | Error::InvalidInput(_) => {
            "Invalid base salary. Salary must be greater than zero.".to_string()
        },
        Error::UnpriceableSalary(_) => {
            "Invalid base salary. Amount is too large or too precise.".to_string()
        },
        Error::Parse {
            field: InputField::SalaryType,
            ..
        }
        | Error::OutOfRange {
            field: InputField::SalaryType,
            ..
        } => "Invalid salary type. Please enter 1 or 2.".to_string(),
        Error::Parse {
            field: InputField::EmployeeId,
            ..
        }
        | Error::OutOfRange {
            field: InputField::EmployeeId,
            ..
        } => "Invalid employee ID. Please enter a positive whole number.".to_string(),
        Error::NotFound(id) => format!("Employee with ID {id} not found."),
        other => other.to_string(),
    }
}

fn io_failure(operation: &str, error: &std::io::Error) -> Error {
    Error::OperationFailed {
        operation: operation.to_string(),
        cause: error.to_string(),
    }
}
