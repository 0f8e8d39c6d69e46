//! Integration tests for staffroll.
//!
//! Drives full console sessions through in-memory input and output and checks
//! both the printed transcript and the resulting store.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use rust_decimal::Decimal;
use staffroll::{EmployeeId, EmployeeStore, Error, InputField, SalaryPolicy, Session};
use std::io::Cursor;

/// Runs a scripted session and returns the transcript.
fn run_session(store: &mut EmployeeStore, lines: &[&str]) -> String {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut output = Vec::new();
    Session::new(store, Cursor::new(script), &mut output)
        .run()
        .expect("session should end cleanly");
    String::from_utf8(output).expect("transcript is UTF-8")
}

fn dec(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

#[test]
fn test_error_types() {
    let err = Error::Parse {
        field: InputField::BaseSalary,
        input: "ten".to_string(),
    };
    let display = format!("{err}");
    assert!(display.contains("base salary"));
    assert!(display.contains("ten"));

    let err = Error::OutOfRange {
        field: InputField::MenuChoice,
        input: "8".to_string(),
    };
    let display = format!("{err}");
    assert!(display.contains("menu choice"));
    assert!(display.contains("out of range"));

    let err = Error::NotFound(EmployeeId::new(4));
    assert!(format!("{err}").contains("not found"));
}

#[test]
fn test_store_end_to_end_scenario() {
    let mut store = EmployeeStore::new();

    let alice = store.add("Alice", dec(1000), SalaryPolicy::Permanent).unwrap();
    assert_eq!(alice.id(), EmployeeId::new(1));
    assert_eq!(alice.calculated_salary(), dec(1200));

    let bob = store.add("Bob", dec(500), SalaryPolicy::Contract).unwrap();
    assert_eq!(bob.id(), EmployeeId::new(2));
    assert_eq!(bob.calculated_salary(), dec(500));

    store.remove(EmployeeId::new(1)).unwrap();

    let carol = store.add("Carol", dec(800), SalaryPolicy::Permanent).unwrap();
    assert_eq!(carol.id(), EmployeeId::new(3));

    let remaining: Vec<(u64, &str)> = store
        .list()
        .iter()
        .map(|e| (e.id().get(), e.name()))
        .collect();
    assert_eq!(remaining, vec![(2, "Bob"), (3, "Carol")]);
}

#[test]
fn test_console_end_to_end_scenario() {
    let mut store = EmployeeStore::new();
    let transcript = run_session(
        &mut store,
        &[
            "1", "Alice", "1000", "1", // add Alice, permanent
            "1", "Bob", "500", "2", // add Bob, contract
            "4", "1", // delete Alice
            "1", "Carol", "800", "1", // add Carol, permanent
            "2", // view
            "5",
        ],
    );

    assert!(transcript.contains("Employee added successfully with ID 1."));
    assert!(transcript.contains("Employee added successfully with ID 2."));
    assert!(transcript.contains("Employee Alice with ID 1 deleted successfully."));
    assert!(transcript.contains("Employee added successfully with ID 3."));
    assert!(transcript.contains("ID: 2, Name: Bob, Base Salary: 500.00\n"));
    assert!(transcript.contains("ID: 3, Name: Carol, Base Salary: 800.00\n"));
    assert!(!transcript.contains("Name: Alice, Base Salary"));
    assert!(transcript.ends_with("Exiting Employee Management System. Goodbye!\n"));

    assert_eq!(store.len(), 2);
    assert_eq!(
        store.find_by_id(EmployeeId::new(3)).unwrap().calculated_salary(),
        dec(960)
    );
}

#[test]
fn test_menu_is_printed_every_iteration() {
    let mut store = EmployeeStore::new();
    let transcript = run_session(&mut store, &["2", "7", "5"]);

    assert_eq!(transcript.matches("Employee Management System\n").count(), 3);
    for label in [
        "1. Add Employee",
        "2. View Employees",
        "3. Update Employee Salary Type and Base Salary",
        "4. Delete Employee",
        "5. Exit",
    ] {
        assert_eq!(transcript.matches(label).count(), 3, "label {label}");
    }
}

#[test]
fn test_listing_shows_base_not_calculated_salary() {
    let mut store = EmployeeStore::new();
    let transcript = run_session(&mut store, &["1", "Dana", "1000", "1", "2", "5"]);

    assert!(transcript.contains("ID: 1, Name: Dana, Base Salary: 1000.00"));
    assert!(!transcript.contains("1200"));
}

#[test]
fn test_update_flow_changes_policy_and_base() {
    let mut store = EmployeeStore::new();
    let transcript = run_session(
        &mut store,
        &["1", "Erin", "400", "2", "3", "1", "450.25", "1", "5"],
    );

    assert!(transcript.contains("Employee Erin updated successfully."));
    let erin = store.find_by_id(EmployeeId::new(1)).unwrap();
    assert_eq!(erin.policy(), SalaryPolicy::Permanent);
    assert_eq!(erin.base_salary(), Decimal::new(45025, 2));
    assert_eq!(erin.calculated_salary(), Decimal::new(5403, 1));
}

#[test]
fn test_failed_inputs_never_mutate() {
    let mut store = EmployeeStore::new();
    let transcript = run_session(
        &mut store,
        &[
            "1", "Finn", "700", "2", // valid add
            "3", "abc", // update: malformed id
            "3", "9", // update: unknown id
            "3", "1", "0", // update: zero salary
            "3", "1", "800", "5", // update: bad type
            "4", "-2", // delete: negative id
            "4", "9", // delete: unknown id
            "1", "Gus", "", // add: empty salary
            "5",
        ],
    );

    assert_eq!(
        transcript
            .matches("Invalid employee ID. Please enter a positive whole number.")
            .count(),
        2
    );
    assert_eq!(transcript.matches("Employee with ID 9 not found.").count(), 2);
    assert!(transcript.contains("Invalid base salary. Salary must be greater than zero."));
    assert!(transcript.contains("Invalid salary type. Please enter 1 or 2."));
    assert!(transcript.contains("Invalid base salary. Please enter a numeric value."));

    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), EmployeeId::new(2));
    let finn = store.find_by_id(EmployeeId::new(1)).unwrap();
    assert_eq!(finn.base_salary(), dec(700));
    assert_eq!(finn.policy(), SalaryPolicy::Contract);
}

#[test]
fn test_session_ends_cleanly_without_exit() {
    let mut store = EmployeeStore::new();
    let mut output = Vec::new();
    let result = Session::new(&mut store, Cursor::new("1\nHal\n100\n1\n"), &mut output).run();

    assert!(result.is_ok());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_salary_beyond_decimal_range_is_not_fatal() {
    let mut store = EmployeeStore::new();
    let transcript = run_session(
        &mut store,
        &["1", "Big", "79228162514264337593543950335", "1", "Ivy", "10", "2", "5"],
    );

    assert!(transcript.contains("Invalid base salary. Amount is too large or too precise."));
    assert!(transcript.contains("Employee added successfully with ID 1."));
    assert!(transcript.ends_with("Exiting Employee Management System. Goodbye!\n"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id(EmployeeId::new(1)).unwrap().name(), "Ivy");
}
