//! Startup dispatch: pick interactive or script mode and hand off to the
//! interpreter session.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use monkey::Session;

use crate::common::account::{Account, AccountResolver};
use crate::common::CliResult;

/// Execution mode chosen for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Read commands from stdin until end-of-input.
    Interactive,
    /// Execute the named file once.
    Script(PathBuf),
}

impl Mode {
    /// Select the mode from the invocation arguments (program name excluded).
    ///
    /// Exactly one argument is a script path. Any other count, including
    /// two or more, falls back to interactive mode without complaint.
    pub fn select<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        match (args.next(), args.next()) {
            (Some(path), None) => Mode::Script(PathBuf::from(path)),
            _ => Mode::Interactive,
        }
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The interactive session ran and returned.
    Interactive,
    /// The script was handed to the session and it returned.
    Script,
    /// The script path could not be opened; nothing ran.
    ScriptUnavailable,
}

/// Write the two-line interactive greeting.
pub fn write_greeting(output: &mut dyn Write, account: &Account) -> io::Result<()> {
    writeln!(
        output,
        "Hello {}! This is the Monkey programming language!",
        account.username()
    )?;
    writeln!(output, "Feel free to type in commands")?;
    output.flush()
}

/// Open a script for reading. Directories count as unopenable.
fn open_script(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            "script path is a directory",
        ));
    }
    Ok(file)
}

/// The process entry point, with its environment injected.
pub struct Launcher<A, S> {
    accounts: A,
    session: S,
}

impl<A: AccountResolver, S: Session> Launcher<A, S> {
    pub fn new(accounts: A, session: S) -> Self {
        Self { accounts, session }
    }

    /// Resolve the account, select the mode and delegate to the session.
    ///
    /// Account resolution happens first and is the only error returned,
    /// whatever the arguments are. A script that cannot be opened yields
    /// [`Outcome::ScriptUnavailable`] with nothing written to `output`.
    /// Errors raised by the session belong to the session and are only
    /// logged.
    pub fn run<I>(
        &mut self,
        args: I,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> CliResult<Outcome>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let account = self.accounts.resolve()?;

        let mode = Mode::select(args);
        tracing::debug!(?mode, "selected launch mode");

        match mode {
            Mode::Script(path) => {
                let file = match open_script(&path) {
                    Ok(file) => file,
                    Err(error) => {
                        tracing::debug!(path = %path.display(), %error, "script unavailable");
                        return Ok(Outcome::ScriptUnavailable);
                    }
                };

                tracing::debug!(path = %path.display(), "running script");
                let mut source = BufReader::new(file);
                if let Err(error) = self.session.run_script(&mut source, output) {
                    tracing::debug!(%error, "script session ended with an error");
                }
                Ok(Outcome::Script)
            }
            Mode::Interactive => {
                if let Err(error) = write_greeting(output, &account) {
                    tracing::debug!(%error, "could not write greeting");
                }
                drop(account);

                tracing::debug!("starting interactive session");
                if let Err(error) = self.session.interactive_session(input, output) {
                    tracing::debug!(%error, "interactive session ended with an error");
                }
                Ok(Outcome::Interactive)
            }
        }
    }
}
