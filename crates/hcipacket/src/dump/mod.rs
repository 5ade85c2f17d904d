//! Diagnostic rendering for HCI packets
//!
//! This module provides the hex dump formatter and the sinks rendered
//! packets are written to.

pub mod hexdump;
pub mod sink;

#[cfg(test)]
mod tests;

pub use hexdump::{hex_dump, hex_dump_with, HexDumpConfig};
pub use sink::{DiagnosticSink, LogSink, StdoutSink, WriteSink};
