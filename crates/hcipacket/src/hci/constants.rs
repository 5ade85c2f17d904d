//! HCI protocol constants
//!
//! This module contains the packet indicators used on an HCI transport.

// HCI packet types
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_ACL_PKT: u8 = 0x02;
pub const HCI_SCO_PKT: u8 = 0x03;
pub const HCI_EVENT_PKT: u8 = 0x04;
pub const HCI_ISO_PKT: u8 = 0x05;

// Size of the packet indicator prepended by H4 (UART) framing
pub const H4_INDICATOR_LEN: usize = 1;
