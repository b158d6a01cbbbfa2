//! A stand-in session that echoes its input.
//!
//! It has no Monkey semantics at all: every line entered interactively is
//! written back verbatim, and a script is copied to the output unchanged.

use std::io::{self, BufRead, Write};

use crate::session::Session;

/// Prompt written before each interactive read.
pub const PROMPT: &str = ">> ";

/// Line-echo implementation of [`Session`].
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoSession;

impl Session for EchoSession {
    fn interactive_session(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<()> {
        let mut line = Vec::new();
        let mut count = 0usize;

        loop {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.last() != Some(&b'\n') {
                line.push(b'\n');
            }

            output.write_all(&line)?;
            output.flush()?;
            count += 1;
        }

        // Leave the terminal on a fresh line after end-of-input.
        writeln!(output)?;
        output.flush()?;

        tracing::trace!(lines = count, "interactive session reached end of input");
        Ok(())
    }

    fn run_script(&mut self, source: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        let bytes = io::copy(source, output)?;
        output.flush()?;

        tracing::trace!(bytes, "script finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{BufReader, Read};

    fn interactive(input: &[u8]) -> String {
        let mut input = input;
        let mut output = Vec::new();
        EchoSession
            .interactive_session(&mut input, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    #[test]
    fn echoes_each_line_after_a_prompt() {
        assert_eq!(
            interactive(b"let x = 5;\nx + 1\n"),
            ">> let x = 5;\n>> x + 1\n>> \n"
        );
    }

    #[test]
    fn empty_input_ends_immediately() {
        assert_eq!(interactive(b""), ">> \n");
    }

    #[test]
    fn final_line_without_newline_is_terminated() {
        assert_eq!(interactive(b"puts(1)"), ">> puts(1)\n>> \n");
    }

    #[test]
    fn non_utf8_lines_pass_through() {
        let mut input: &[u8] = b"\xff\xfe\n";
        let mut output = Vec::new();
        EchoSession
            .interactive_session(&mut input, &mut output)
            .unwrap();
        assert_eq!(output, b">> \xff\xfe\n>> \n");
    }

    #[test]
    fn script_is_copied_verbatim() {
        let source = "let add = fn(a, b) { a + b };\nadd(1, 2)";
        let mut input = source.as_bytes();
        let mut output = Vec::new();
        EchoSession.run_script(&mut input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), source);
    }

    #[test]
    fn read_errors_are_returned() {
        let mut input = BufReader::new(BrokenPipe);
        let mut output = Vec::new();

        let err = EchoSession.run_script(&mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = EchoSession
            .interactive_session(&mut input, &mut output)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn works_through_a_mutable_reference() {
        fn script<S: Session>(mut session: S, mut source: &[u8]) -> Vec<u8> {
            let mut output = Vec::new();
            session.run_script(&mut source, &mut output).unwrap();
            output
        }

        let mut session = EchoSession;
        assert_eq!(script(&mut session, b"1\n"), b"1\n");
    }
}
