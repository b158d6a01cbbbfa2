//! Interpreter session contract for the Monkey programming language.
//!
//! The launcher never evaluates Monkey code itself. It hands the process's
//! streams to a [`Session`], which owns the read/evaluate/print behaviour and
//! script execution. [`EchoSession`] is the built-in stand-in used until a
//! full interpreter is plugged in.

pub mod echo;
pub mod session;

pub use echo::{EchoSession, PROMPT};
pub use session::Session;
