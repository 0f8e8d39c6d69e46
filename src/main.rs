//! Binary entry point for staffroll.
//!
//! Runs the interactive employee manager on stdin/stdout.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use staffroll::config::StaffrollConfig;
use staffroll::observability::{self, InitOptions};
use staffroll::{EmployeeStore, Session};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Staffroll - an interactive employee record manager.
#[derive(Parser)]
#[command(name = "staffroll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, env = "STAFFROLL_CONFIG_PATH")]
    config: Option<PathBuf>,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match StaffrollConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_config(
        &config.logging,
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    let mut store = EmployeeStore::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Session::new(&mut store, stdin.lock(), stdout.lock()).run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Session failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
