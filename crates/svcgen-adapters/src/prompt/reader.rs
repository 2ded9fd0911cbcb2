//! Line prompter over any reader/writer pair.

use std::io::{BufRead, Write};

use svcgen_core::{
    application::{ApplicationError, ports::Prompter},
    error::SvcgenResult,
};

/// Prompter that writes questions to `W` and reads answers from `R`.
///
/// In production this wraps locked stdin/stdout; tests use a `Cursor` and a
/// `Vec<u8>`. Prompts are written without a trailing newline and flushed so
/// the cursor stays on the question line.
#[derive(Debug)]
pub struct ReaderPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> SvcgenResult<Option<String>> {
        self.writer
            .write_all(prompt.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(prompt_failed)?;

        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(prompt_failed)?;
        if read == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Invalid UTF-8 becomes U+FFFD instead of failing the prompt.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn warn(&mut self, message: &str) -> SvcgenResult<()> {
        writeln!(self.writer, "{message}").map_err(prompt_failed)?;
        Ok(())
    }
}

fn prompt_failed(e: std::io::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
}
