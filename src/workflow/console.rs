//! Operator-facing terminal I/O.
//!
//! Every prompt in the workflow is a single blocking line read. Keeping the
//! reader and writer behind [`Console`] lets tests script the operator's
//! answers with an in-memory buffer.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use super::error::SessionError;

/// Line-oriented prompt and progress output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Wraps an input source and an output sink.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a full line.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the output cannot be written.
    pub fn line(&mut self, message: impl Display) -> Result<(), SessionError> {
        writeln!(self.output, "{message}").map_err(|error| SessionError::io(&error))
    }

    /// Writes an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the output cannot be written.
    pub fn blank(&mut self) -> Result<(), SessionError> {
        writeln!(self.output).map_err(|error| SessionError::io(&error))
    }

    /// Writes text without a newline and flushes, so a status such as `ok`
    /// can follow on the same line.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] when the output cannot be written.
    pub fn fragment(&mut self, message: impl Display) -> Result<(), SessionError> {
        write!(self.output, "{message}")
            .and_then(|()| self.output.flush())
            .map_err(|error| SessionError::io(&error))
    }

    /// Shows `prompt` and reads one line.
    ///
    /// The trailing `\n` (or `\r\n`) is removed; no other whitespace is
    /// touched. Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when writing the prompt or reading
    /// the answer fails.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        if answer.ends_with('\n') {
            answer.pop();
            if answer.ends_with('\r') {
                answer.pop();
            }
        }
        Ok(Some(answer))
    }

    /// Returns the reader and writer, mainly so tests can inspect output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
