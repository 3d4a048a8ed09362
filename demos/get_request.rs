//! Example demonstrating how to build PTP management request frames.
//!
//! Builds a GET PRIORITY1 request and a SET PRIORITY1 request and
//! prints both as hex dumps, the way they would go out on a management
//! socket.

use ptpmgmt::mgmt::Priority1Tlv;
use ptpmgmt::{ActionField, Message, MngId, MngTlv};

fn hex_dump(buf: &[u8]) {
    for (i, chunk) in buf.chunks(16).enumerate() {
        print!("  {:04x}: ", i * 16);
        for b in chunk {
            print!("{:02x} ", b);
        }
        println!();
    }
}

fn main() {
    let mut msg = Message::new();
    let mut buf = [0u8; 1500];

    // A GET request addressed to all clocks (the default target).
    msg.set_action(ActionField::Get, MngId::Priority1)
        .expect("GET is allowed for PRIORITY1");
    let len = msg.build(&mut buf, 1).expect("buffer is large enough");
    println!(
        "{} {} request, {} bytes:",
        msg.send_action(),
        msg.tlv_id(),
        len
    );
    hex_dump(&buf[..len]);

    // A SET request carrying a payload.
    msg.set_action_with(
        ActionField::Set,
        MngId::Priority1,
        MngTlv::Priority1(Priority1Tlv { priority1: 137 }),
    )
    .expect("SET is allowed for PRIORITY1");
    let len = msg.build(&mut buf, 2).expect("buffer is large enough");
    println!(
        "\n{} {} request, {} bytes:",
        msg.send_action(),
        msg.tlv_id(),
        len
    );
    hex_dump(&buf[..len]);
}
