//! Example demonstrating how to parse a PTP management response.
//!
//! Feeds a canned PORT_DATA_SET response frame through the framer and
//! prints every field of the typed record, which is useful for
//! debugging or detailed analysis.

use ptpmgmt::{ActionField, Message, MngId, MngTlv, ParseStatus};

fn main() {
    // A RESPONSE to GET PORT_DATA_SET, as captured from a daemon.
    let mut frame = vec![0u8; 80];
    frame[0] = 0x0d; // Management
    frame[1] = 0x02; // PTP version 2
    frame[2..4].copy_from_slice(&80u16.to_be_bytes());
    frame[30..32].copy_from_slice(&[0, 3]); // sequenceId
    frame[32] = 0x04;
    frame[33] = 0x7f;
    frame[46] = 0x02; // RESPONSE
    frame[48..50].copy_from_slice(&[0x00, 0x01]); // MANAGEMENT TLV
    frame[50..52].copy_from_slice(&[0x00, 28]);
    frame[52..54].copy_from_slice(&[0x20, 0x04]); // PORT_DATA_SET
    frame[54..62].copy_from_slice(&[0x00, 0x1b, 0x21, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e]);
    frame[62..64].copy_from_slice(&[0, 1]); // portNumber
    frame[64] = 9; // SLAVE
    frame[65] = 0xfd; // logMinDelayReqInterval = -3
    frame[66..74].copy_from_slice(&[0, 0, 0, 0, 0, 1, 0, 0]);
    frame[74] = 1; // logAnnounceInterval
    frame[75] = 3; // announceReceiptTimeout
    frame[76] = 0; // logSyncInterval
    frame[77] = 2; // delayMechanism = P2P
    frame[78] = 0; // logMinPdelayReqInterval
    frame[79] = 2; // versionNumber

    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::PortDataSet)
        .expect("GET is allowed for PORT_DATA_SET");

    match msg.parse(&frame) {
        Ok(ParseStatus::Ok) => {
            println!("=== {} {} ===", msg.reply_action(), msg.tlv_id());
            println!("  peer:     {}", msg.peer());
            println!("  sequence: {}", msg.sequence());
            if let Some(MngTlv::PortDataSet(p)) = msg.data() {
                println!("  portIdentity:            {}", p.port_identity);
                println!("  portState:               {}", p.port_state);
                println!("  logMinDelayReqInterval:  {}", p.log_min_delay_req_interval);
                println!(
                    "  peerMeanPathDelay:       {:.3} ns",
                    p.peer_mean_path_delay.interval()
                );
                println!("  logAnnounceInterval:     {}", p.log_announce_interval);
                println!("  announceReceiptTimeout:  {}", p.announce_receipt_timeout);
                println!("  logSyncInterval:         {}", p.log_sync_interval);
                println!("  delayMechanism:          {}", p.delay_mechanism);
                println!(
                    "  logMinPdelayReqInterval: {}",
                    p.log_min_pdelay_req_interval
                );
                println!("  versionNumber:           {}", p.version_number);
            }
        }
        Ok(ParseStatus::ErrorStatus) => {
            eprintln!(
                "management error: {} ({})",
                ptpmgmt::protocol::err_id_str(msg.err_id_raw()),
                msg.err_display()
            );
        }
        Ok(ParseStatus::Signaling) => {
            println!("signaling frame with {} TLVs", msg.sig_tlv_count());
        }
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(1);
        }
    }
}
