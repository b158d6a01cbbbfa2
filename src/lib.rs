//! Monkey - the launcher facade for the Monkey programming language.
//!
//! # Overview
//!
//! This crate gathers the pieces a host needs to start a Monkey process:
//!
//! - the [`Session`] contract a language implementation fulfils,
//! - [`EchoSession`], a stand-in session without language semantics,
//! - diagnostic rendering for user-facing errors.
//!
//! # Quick Start
//!
//! ```
//! use monkey::{EchoSession, Session};
//!
//! let mut source: &[u8] = b"let x = 5;\n";
//! let mut output = Vec::new();
//! EchoSession.run_script(&mut source, &mut output).unwrap();
//! assert_eq!(output, b"let x = 5;\n");
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error_to};

// Re-export the session contract from monkey_core
pub use monkey_core::{EchoSession, PROMPT, Session};
