//! Example: Dumping HCI packets
//!
//! This example demonstrates how to build HCI packets and render them for
//! diagnostics using the hcipacket library.

use hcipacket::hci::constants::HCI_COMMAND_PKT;
use hcipacket::{LogSink, Packet, PacketType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // HCI Reset command: opcode 0x0C03, no parameters
    let reset = Packet::new(HCI_COMMAND_PKT, 0, [0x03, 0x0C, 0x00], 3)?;
    reset.dump();

    // Command Complete event for the reset, received as an H4 frame
    let frame = [0x04, 0x0E, 0x04, 0x01, 0x03, 0x0C, 0x00];
    let event = Packet::from_h4(0, &frame)?;
    println!("Decoded {} packet", event.packet_type().name().unwrap_or("unknown"));
    event.dump();

    // Unknown indicators are carried through untouched
    let vendor = Packet::from_payload(PacketType::Other(0xFF), 1, &[0xDE, 0xAD]);
    vendor.dump_to(&mut LogSink::default());
    println!("{}", vendor);

    // A length past the end of the buffer is rejected
    match Packet::new(HCI_COMMAND_PKT, 0, [0x01, 0x02], 5) {
        Ok(_) => println!("Unexpectedly accepted"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
