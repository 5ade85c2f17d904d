//! Diagnostic output sinks
//!
//! Rendered packets are written to a `DiagnosticSink` so callers decide where
//! diagnostics end up: standard output, the `log` facade, or a buffer.

use std::io::{self, Write};

use log::{debug, Level};

/// Destination for rendered diagnostic lines
pub trait DiagnosticSink {
    /// Write one line; the sink adds any line terminator
    fn emit(&mut self, line: &str);
}

/// Writes each line to standard output
///
/// Write failures, such as a closed pipe, are logged and dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        write_line(&mut io::stdout().lock(), line);
    }
}

/// Writes each line to any `io::Write`, dropping failed writes
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        WriteSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for WriteSink<W> {
    fn emit(&mut self, line: &str) {
        write_line(&mut self.writer, line);
    }
}

/// Write `line` and a newline, returning whether it succeeded
pub(crate) fn write_line<W: Write + ?Sized>(writer: &mut W, line: &str) -> bool {
    match writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
        Ok(()) => true,
        Err(e) => {
            debug!("Dropping diagnostic line: {}", e);
            false
        }
    }
}

/// Forwards each line to the `log` facade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSink {
    pub level: Level,
}

impl LogSink {
    pub fn new(level: Level) -> Self {
        LogSink { level }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        LogSink::new(Level::Debug)
    }
}

impl DiagnosticSink for LogSink {
    fn emit(&mut self, line: &str) {
        log::log!(target: "hcipacket::dump", self.level, "{}", line);
    }
}

/// Collects lines in memory
impl DiagnosticSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
