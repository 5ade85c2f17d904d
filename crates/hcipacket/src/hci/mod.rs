//! Bluetooth HCI (Host Controller Interface) packets
//!
//! This module provides the framed packet type passed between an HCI
//! transport and the protocol layers above it.

pub mod constants;
pub mod packet;
pub mod packet_type;


pub use packet::Packet;
pub use packet_type::PacketType;
