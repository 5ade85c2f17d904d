//! HCI packet structure
//!
//! A `Packet` tags a payload with its HCI packet type and the logical channel
//! it belongs to. It is built once by the transport layer and never modified.

use std::fmt;

use log::{debug, trace};

use crate::dump::{hex_dump_with, DiagnosticSink, HexDumpConfig, StdoutSink};
use crate::error::{PacketError, Result};
use crate::hci::constants::H4_INDICATOR_LEN;
use crate::hci::packet_type::PacketType;

/// A framed HCI packet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Packet {
    packet_type: PacketType,
    channel: u16,
    payload: Vec<u8>,
}

impl Packet {
    /// Creates a new packet
    ///
    /// # Arguments
    ///
    /// * `packet_type` - The packet indicator; unknown values are kept as is
    /// * `channel` - The logical channel the payload belongs to
    /// * `buffer` - Buffer whose first `payload_length` bytes are the payload
    /// * `payload_length` - Number of meaningful bytes in `buffer`
    ///
    /// # Returns
    ///
    /// A packet holding its own copy of the payload, or
    /// `PacketError::InvalidArgument` if `payload_length` exceeds the buffer
    pub fn new(
        packet_type: impl Into<PacketType>,
        channel: u16,
        buffer: impl AsRef<[u8]>,
        payload_length: usize,
    ) -> Result<Self> {
        let packet_type = packet_type.into().normalized();
        let buffer = buffer.as_ref();

        if payload_length > buffer.len() {
            debug!(
                "Rejecting packet type {} on channel {}: length {} > buffer {}",
                packet_type,
                channel,
                payload_length,
                buffer.len()
            );
            return Err(PacketError::InvalidArgument {
                length: payload_length,
                capacity: buffer.len(),
            });
        }

        Ok(Packet {
            packet_type,
            channel,
            payload: buffer[..payload_length].to_vec(),
        })
    }

    /// Creates a packet carrying the whole of `payload`
    pub fn from_payload(packet_type: impl Into<PacketType>, channel: u16, payload: &[u8]) -> Self {
        Packet {
            packet_type: packet_type.into().normalized(),
            channel,
            payload: payload.to_vec(),
        }
    }

    /// Parses an H4 frame: one packet indicator octet followed by the payload
    pub fn from_h4(channel: u16, frame: &[u8]) -> Result<Self> {
        let (indicator, payload) = frame.split_first().ok_or(PacketError::EmptyFrame)?;
        let packet_type = PacketType::from_value(*indicator);

        if !packet_type.is_known() {
            debug!("Unknown HCI packet indicator 0x{:02X} on channel {}", indicator, channel);
        }
        trace!("H4 frame: type {}, channel {}, len {}", packet_type, channel, payload.len());

        Ok(Packet::from_payload(packet_type, channel, payload))
    }

    pub fn packet_type(&self) -> PacketType {
        self.packet_type
    }

    /// The payload, exactly `payload_length()` bytes long
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn payload_length(&self) -> usize {
        self.payload.len()
    }

    pub fn channel(&self) -> u16 {
        self.channel
    }

    /// Convert the packet to its H4 wire form
    pub fn to_h4_bytes(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(H4_INDICATOR_LEN + self.payload.len());
        frame.push(self.packet_type.value());
        frame.extend_from_slice(&self.payload);
        frame
    }

    /// Render the packet using a custom hex dump format
    pub fn render(&self, config: &HexDumpConfig) -> String {
        format!(
            "Packet {}, channel {}, len {}: {}",
            self.packet_type,
            self.channel,
            self.payload.len(),
            hex_dump_with(&self.payload, self.payload.len(), config)
        )
    }

    /// Write the rendered packet to standard output
    pub fn dump(&self) {
        self.dump_to(&mut StdoutSink);
    }

    /// Write the rendered packet to `sink`
    pub fn dump_to<S: DiagnosticSink + ?Sized>(&self, sink: &mut S) {
        sink.emit(&self.to_string());
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&HexDumpConfig::default()))
    }
}
