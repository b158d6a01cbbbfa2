//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;
use predicates::prelude::*;
use std::io::Write;

/// Create a new command for the monkey binary with logging left at its default.
pub fn monkey() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_monkey"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a temporary script file with the given content.
pub fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".mk")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// The username the binary will greet, if the OS can resolve one.
pub fn current_user() -> Option<String> {
    whoami::fallible::username().ok()
}

/// The two greeting lines printed before an interactive session.
pub fn greeting(user: &str) -> String {
    format!("Hello {user}! This is the Monkey programming language!\nFeel free to type in commands\n")
}

/// Run the binary and check stdout on success.
///
/// Environments without a resolvable account must instead fail with the
/// account diagnostic and print nothing to stdout.
pub fn check_launch(args: &[&str], stdin: Option<&str>, expected: impl FnOnce(&str) -> String) {
    let mut cmd = monkey();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }

    let assert = cmd.assert();
    match current_user() {
        Some(user) => {
            assert.success().stdout(expected(&user)).stderr("");
        }
        None => {
            assert
                .failure()
                .stdout("")
                .stderr(predicate::str::contains("monkey::account"));
        }
    }
}

/// Like [`check_launch`], for output that does not depend on the username.
pub fn check_stdout(args: &[&str], stdin: Option<&str>, expected: Expect) {
    let mut cmd = monkey();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }

    let output = cmd.output().expect("failed to execute command");
    if current_user().is_some() {
        assert!(output.status.success(), "{output:?}");
        expected.assert_eq(&String::from_utf8_lossy(&output.stdout));
    } else {
        assert!(!output.status.success(), "{output:?}");
        assert!(output.stdout.is_empty(), "{output:?}");
    }
}
