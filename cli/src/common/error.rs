//! Error handling utilities for the CLI.

use std::io::{self, IsTerminal};

use miette::Diagnostic;
use monkey::{RenderConfig, render_error_to};
use thiserror::Error;

use super::account::AccountError;

/// Result type for launcher operations.
pub type CliResult<T> = Result<T, LaunchError>;

/// Errors that stop the launcher.
///
/// Only a missing account is fatal. A script path that cannot be opened
/// ends the process quietly, and session errors stay with the session.
#[derive(Debug, Error, Diagnostic)]
pub enum LaunchError {
    #[error("could not determine the current user")]
    #[diagnostic(
        code(monkey::account),
        help("the launcher needs an account entry for the invoking user before it can start")
    )]
    Account(#[from] AccountError),
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: LaunchError) -> ! {
    let mut stderr = io::stderr();
    let config = RenderConfig {
        color: stderr.is_terminal(),
        ..Default::default()
    };
    render_error_to(&error, &mut stderr, &config).ok();
    std::process::exit(1);
}
