//! HCI packet type indicators
//!
//! The set of packet types is open: controllers may send indicators this
//! library has no name for, and those are carried through untouched.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hci::constants::*;

/// HCI packet indicator.
///
/// See Bluetooth Core Specification Vol 4, Part A, Section 2.
///
/// Equality and hashing follow the numeric indicator, so `Other(4)` and
/// `Event` are the same packet type. `from_value` always yields the named
/// variant.
#[derive(Debug, Clone, Copy)]
pub enum PacketType {
    /// HCI command, host to controller
    Command,
    /// ACL data
    Acl,
    /// Synchronous (SCO) data
    Sco,
    /// HCI event, controller to host
    Event,
    /// Isochronous data
    Iso,
    /// Any other indicator, kept verbatim
    Other(u8),
}

impl PacketType {
    /// Get the packet indicator as u8
    pub fn value(&self) -> u8 {
        match self {
            PacketType::Command => HCI_COMMAND_PKT,
            PacketType::Acl => HCI_ACL_PKT,
            PacketType::Sco => HCI_SCO_PKT,
            PacketType::Event => HCI_EVENT_PKT,
            PacketType::Iso => HCI_ISO_PKT,
            PacketType::Other(value) => *value,
        }
    }

    /// Create a packet type from a u8 indicator. Never fails.
    pub fn from_value(value: u8) -> Self {
        match value {
            HCI_COMMAND_PKT => PacketType::Command,
            HCI_ACL_PKT => PacketType::Acl,
            HCI_SCO_PKT => PacketType::Sco,
            HCI_EVENT_PKT => PacketType::Event,
            HCI_ISO_PKT => PacketType::Iso,
            other => PacketType::Other(other),
        }
    }

    /// Short name of the packet type, if it has one
    pub fn name(&self) -> Option<&'static str> {
        match self.normalized() {
            PacketType::Command => Some("command"),
            PacketType::Acl => Some("ACL data"),
            PacketType::Sco => Some("SCO data"),
            PacketType::Event => Some("event"),
            PacketType::Iso => Some("ISO data"),
            PacketType::Other(_) => None,
        }
    }

    pub fn is_command(&self) -> bool {
        self.value() == HCI_COMMAND_PKT
    }

    pub fn is_event(&self) -> bool {
        self.value() == HCI_EVENT_PKT
    }

    /// True for ACL, SCO and ISO data packets
    pub fn is_data(&self) -> bool {
        matches!(self.value(), HCI_ACL_PKT | HCI_SCO_PKT | HCI_ISO_PKT)
    }

    /// True unless the indicator is one this library does not name
    pub fn is_known(&self) -> bool {
        self.name().is_some()
    }

    /// The canonical form: named variant for known indicators
    pub fn normalized(self) -> Self {
        PacketType::from_value(self.value())
    }
}

impl PartialEq for PacketType {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for PacketType {}

impl Hash for PacketType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl From<u8> for PacketType {
    fn from(value: u8) -> Self {
        PacketType::from_value(value)
    }
}

impl From<PacketType> for u8 {
    fn from(packet_type: PacketType) -> Self {
        packet_type.value()
    }
}

// Renders the numeric indicator, matching what goes on the wire.
impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
