//! Monkey - command-line entry point for the Monkey programming language.

use std::io;
use std::process::ExitCode;

use monkey::EchoSession;
use monkey_cli::common::{account::OsAccount, error::render_and_exit, logging};
use monkey_cli::launcher::Launcher;

fn main() -> ExitCode {
    logging::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let mut launcher = Launcher::new(OsAccount, EchoSession);
    match launcher.run(std::env::args_os().skip(1), &mut input, &mut output) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "launcher finished");
            ExitCode::SUCCESS
        }
        Err(e) => render_and_exit(e),
    }
}
