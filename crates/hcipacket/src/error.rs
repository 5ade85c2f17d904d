//! Error types for the hcipacket library
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Errors that can occur when building HCI packets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    #[error("Invalid payload length: {length} exceeds buffer of {capacity} bytes")]
    InvalidArgument { length: usize, capacity: usize },

    #[error("Empty H4 frame, missing packet indicator")]
    EmptyFrame,
}

/// Result alias for packet operations
pub type Result<T> = std::result::Result<T, PacketError>;
