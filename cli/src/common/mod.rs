//! Common utilities shared across the launcher.

pub mod account;
pub mod error;
pub mod logging;

pub use error::{CliResult, LaunchError};
