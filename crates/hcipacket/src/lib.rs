//! hcipacket - framed Bluetooth HCI packets
//!
//! This library provides the packet value type exchanged over a Bluetooth HCI
//! (Host Controller Interface) transport: a packet-type tag, a logical channel
//! and an owned payload, along with hex-dump rendering for diagnostics.
//! Transport I/O and payload decoding belong to the surrounding stack.

pub mod dump;
pub mod error;
pub mod hci;

// Re-export common types for convenience
pub use dump::{
    hex_dump, hex_dump_with, DiagnosticSink, HexDumpConfig, LogSink, StdoutSink,
    WriteSink,
};
pub use error::{PacketError, Result};
pub use hci::{Packet, PacketType};
