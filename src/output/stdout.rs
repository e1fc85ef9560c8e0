use crate::error::Result;
use crate::output::OutputSink;
use std::io::{self, Write};

/// Writes outputs as `key=value` lines
pub struct StdoutOutput<W: Write = io::Stdout> {
    writer: W,
}

impl StdoutOutput {
    pub fn stdout() -> Self {
        StdoutOutput {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> StdoutOutput<W> {
    pub fn new(writer: W) -> Self {
        StdoutOutput { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for StdoutOutput<W> {
    fn set_output(&mut self, key: &str, value: &str) -> Result<()> {
        writeln!(self.writer, "{}={}", key, value)?;
        self.writer.flush()?;
        Ok(())
    }

    fn uses_stdout(&self) -> bool {
        true
    }
}
