//! Monkey CLI library.
//!
//! This crate provides the `monkey` launcher: it greets the user and starts
//! an interactive session, or runs the script named by its only argument.
//! The public modules are primarily exposed for testing purposes.

pub mod common;
pub mod launcher;
