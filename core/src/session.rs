//! The interpreter-session collaborator.

use std::io::{self, BufRead, Write};

/// An interpreter session the launcher delegates to.
///
/// Both operations block until the session is finished with its streams.
/// Errors are the session's own; callers pass them through without
/// inspecting them.
pub trait Session {
    /// Run a read/evaluate/print loop over `input` until it reports
    /// end-of-input or the session decides to stop.
    fn interactive_session(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<()>;

    /// Consume all of `source` as a program, execute it once and write the
    /// results to `output`.
    fn run_script(&mut self, source: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()>;
}

impl<S: Session + ?Sized> Session for &mut S {
    fn interactive_session(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<()> {
        (**self).interactive_session(input, output)
    }

    fn run_script(&mut self, source: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        (**self).run_script(source, output)
    }
}
