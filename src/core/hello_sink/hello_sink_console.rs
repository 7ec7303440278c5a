// src/core/hello_sink/hello_sink_console.rs

use std::io::{self, Stdout, Write};

use super::LogSink;
use crate::core::error::HelloError;

/// Schreibt jede Zeile in einen `Write` (Standard: stdout) und flusht sofort.
pub struct ConsoleSink<W: Write = Stdout> {
    out: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        ConsoleSink { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LogSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), HelloError> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}
