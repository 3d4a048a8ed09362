//! End-to-end build and parse scenarios against literal byte streams.

use ptpmgmt::mgmt::{PortDataSetTlv, Priority1Tlv};
use ptpmgmt::protocol::{
    ClockIdentity, ManagementErrorId, PortIdentity, PortState, TimeInterval,
    DELAY_MECHANISM_P2P,
};
use ptpmgmt::{ActionField, Message, MngError, MngId, MngTlv, MsgParams, ParseStatus};

#[test]
fn get_priority1_request_bytes() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    assert_eq!(msg.planned_len().unwrap(), 54);

    let mut buf = [0u8; 128];
    let len = msg.build(&mut buf, 1).unwrap();
    assert_eq!(len, 54);
    assert_eq!(msg.msg_len(), 54);

    // Common header.
    assert_eq!(&buf[0..2], &[0x0d, 0x02]);
    assert_eq!(&buf[2..4], &[0x00, 0x36]); // messageLength = 54
    assert_eq!(buf[4], 0); // domainNumber
    assert_eq!(&buf[6..8], &[0, 0]); // flagField, unicast clear
    assert_eq!(&buf[8..16], &[0; 8]); // correctionField
    assert_eq!(&buf[20..30], &[0; 10]); // sourcePortIdentity
    assert_eq!(&buf[30..32], &[0, 1]); // sequenceId
    assert_eq!(buf[32], 0x04); // controlField
    assert_eq!(buf[33], 0x7f); // logMessageInterval

    // Management body: wildcard target, one boundary hop, GET.
    assert_eq!(&buf[34..44], &[0xff; 10]);
    assert_eq!(buf[44], 1);
    assert_eq!(buf[45], 1);
    assert_eq!(buf[46], 0);
    assert_eq!(buf[47], 0);

    // TLV envelope.
    assert_eq!(&buf[48..50], &[0x00, 0x01]); // MANAGEMENT
    assert_eq!(&buf[50..52], &[0x00, 0x02]); // length = managementId only
    assert_eq!(&buf[52..54], &[0x20, 0x05]); // PRIORITY1
}

#[test]
fn set_priority1_request_bytes() {
    let mut msg = Message::new();
    msg.set_action_with(
        ActionField::Set,
        MngId::Priority1,
        MngTlv::Priority1(Priority1Tlv { priority1: 137 }),
    )
    .unwrap();

    let mut buf = [0u8; 128];
    let len = msg.build(&mut buf, 2).unwrap();
    assert_eq!(len, 56);
    assert_eq!(&buf[2..4], &[0x00, 0x38]);
    assert_eq!(buf[46], 1); // SET
    assert_eq!(&buf[50..52], &[0x00, 0x04]);
    assert_eq!(&buf[52..54], &[0x20, 0x05]);
    assert_eq!(buf[54], 0x89);
    assert_eq!(buf[55], 0x00); // pad to even
}

#[test]
fn command_on_get_only_id_is_rejected() {
    let mut msg = Message::new();
    assert_eq!(
        msg.set_action(ActionField::Command, MngId::ClockDescription),
        Err(MngError::Action)
    );
    // The framer stays armed with its previous state.
    assert_eq!(msg.tlv_id(), MngId::NullPtpManagement);
}

#[test]
fn set_on_empty_id_is_rejected() {
    let mut msg = Message::new();
    assert_eq!(
        msg.set_action(ActionField::Set, MngId::NullPtpManagement),
        Err(MngError::Action)
    );
    // GET and COMMAND on the empty ID still build 54-byte frames.
    msg.set_action(ActionField::Command, MngId::NullPtpManagement)
        .unwrap();
    let mut buf = [0u8; 64];
    assert_eq!(msg.build(&mut buf, 1).unwrap(), 54);
    assert_eq!(buf[46], 3); // COMMAND
    assert_eq!(&buf[52..54], &[0x00, 0x00]);
}

#[test]
fn command_enable_port_bytes() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Command, MngId::EnablePort)
        .unwrap();
    let mut buf = [0u8; 64];
    let len = msg.build(&mut buf, 9).unwrap();
    assert_eq!(len, 54);
    assert_eq!(&buf[52..54], &[0x20, 0x0d]);
}

#[test]
fn parse_management_error_status() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();

    // RESPONSE frame carrying MANAGEMENT_ERROR_STATUS: WRONG_VALUE on
    // PRIORITY1 with display text "out of range".
    let mut frame = vec![0u8; 74];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&74u16.to_be_bytes());
    frame[30..32].copy_from_slice(&[0, 1]);
    frame[32] = 0x04;
    frame[33] = 0x7f;
    frame[44] = 1;
    frame[45] = 1;
    frame[46] = 0x02; // RESPONSE
    frame[48..50].copy_from_slice(&[0x00, 0x02]); // MANAGEMENT_ERROR_STATUS
    frame[50..52].copy_from_slice(&[0x00, 22]);
    frame[52..54].copy_from_slice(&[0x00, 0x04]); // WRONG_VALUE
    frame[54..56].copy_from_slice(&[0x20, 0x05]); // PRIORITY1
    frame[60] = 12;
    frame[61..73].copy_from_slice(b"out of range");

    let status = msg.parse(&frame).unwrap();
    assert_eq!(status, ParseStatus::ErrorStatus);
    assert_eq!(msg.err_id(), Some(ManagementErrorId::WrongValue));
    assert_eq!(msg.err_id_raw(), 0x0004);
    assert_eq!(msg.err_display(), "out of range");
    assert_eq!(msg.tlv_id(), MngId::Priority1);
    assert_eq!(msg.reply_action(), ActionField::Response);
}

#[test]
fn parse_port_data_set_response() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::PortDataSet).unwrap();

    let mut frame = vec![0u8; 80];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&80u16.to_be_bytes());
    frame[30..32].copy_from_slice(&[0, 5]);
    frame[32] = 0x04;
    frame[33] = 0x7f;
    frame[46] = 0x02; // RESPONSE
    frame[48..50].copy_from_slice(&[0x00, 0x01]);
    frame[50..52].copy_from_slice(&[0x00, 28]);
    frame[52..54].copy_from_slice(&[0x20, 0x04]); // PORT_DATA_SET
    // dataField: portIdentity, SLAVE, logMinDelayReqInterval -3, delays
    // and intervals, delayMechanism P2P, versionNumber 2.
    frame[54..62].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    frame[62..64].copy_from_slice(&[0, 1]);
    frame[64] = 9; // SLAVE
    frame[65] = 0xfd; // -3
    // peerMeanPathDelay: 0x0000000000010000 scaled ns (1 ns).
    frame[66..74].copy_from_slice(&[0, 0, 0, 0, 0, 1, 0, 0]);
    frame[74] = 1; // logAnnounceInterval
    frame[75] = 3; // announceReceiptTimeout
    frame[76] = 0; // logSyncInterval
    frame[77] = 2; // delayMechanism P2P
    frame[78] = 0; // logMinPdelayReqInterval
    frame[79] = 2; // versionNumber

    let status = msg.parse(&frame).unwrap();
    assert_eq!(status, ParseStatus::Ok);
    assert_eq!(msg.sequence(), 5);
    assert_eq!(msg.tlv_id(), MngId::PortDataSet);

    let expected = PortDataSetTlv {
        port_identity: PortIdentity {
            clock_identity: ClockIdentity([1, 2, 3, 4, 5, 6, 7, 8]),
            port_number: 1,
        },
        port_state: PortState::Slave,
        log_min_delay_req_interval: -3,
        peer_mean_path_delay: TimeInterval {
            scaled_nanoseconds: 0x10000,
        },
        log_announce_interval: 1,
        announce_receipt_timeout: 3,
        log_sync_interval: 0,
        delay_mechanism: DELAY_MECHANISM_P2P,
        log_min_pdelay_req_interval: 0,
        version_number: 2,
    };
    assert_eq!(msg.data(), Some(&MngTlv::PortDataSet(expected)));
}

#[test]
fn parse_wrong_message_type_is_advisory() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();

    // A Sync event frame: messageType nibble 0.
    let mut frame = vec![0u8; 44];
    frame[0] = 0x00;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&44u16.to_be_bytes());
    frame[30..32].copy_from_slice(&[0x12, 0x34]);

    assert_eq!(msg.parse(&frame), Err(MngError::Header));
    // Cached state untouched.
    assert_eq!(msg.sequence(), 0);
    assert!(msg.data().is_none());
}

#[test]
fn parse_reply_action_mismatch() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();

    // An ACKNOWLEDGE while waiting for a RESPONSE.
    let mut frame = vec![0u8; 54];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&54u16.to_be_bytes());
    frame[46] = 0x04; // ACKNOWLEDGE
    frame[48..50].copy_from_slice(&[0x00, 0x01]);
    frame[50..52].copy_from_slice(&[0x00, 0x02]);
    frame[52..54].copy_from_slice(&[0x20, 0x05]);
    assert_eq!(msg.parse(&frame), Err(MngError::Action));

    // A GET request seen on the wire is not a reply at all.
    frame[46] = 0x00;
    assert_eq!(msg.parse(&frame), Err(MngError::Header));
}

fn signaling_frame() -> Vec<u8> {
    // Signaling message with a PATH_TRACE of two clock identities and
    // an unknown TLV type 0x7000.
    let mut frame = vec![0u8; 72];
    frame[0] = 0x0c;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&72u16.to_be_bytes());
    frame[32] = 0x05;
    frame[33] = 0x7f;
    // TLV 1: PATH_TRACE, two ClockIdentity records.
    frame[44..46].copy_from_slice(&[0x00, 0x08]);
    frame[46..48].copy_from_slice(&[0x00, 16]);
    frame[48..56].copy_from_slice(&[1; 8]);
    frame[56..64].copy_from_slice(&[2; 8]);
    // TLV 2: unknown type 0x7000.
    frame[64..66].copy_from_slice(&[0x70, 0x00]);
    frame[66..68].copy_from_slice(&[0x00, 4]);
    frame[68..72].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    frame
}

#[test]
fn parse_signaling_with_unknown_tlv() {
    let mut prms = MsgParams::new();
    prms.rcv_signaling = true;
    let mut msg = Message::with_params(prms).unwrap();

    let status = msg.parse(&signaling_frame()).unwrap();
    assert_eq!(status, ParseStatus::Signaling);
    assert!(msg.is_last_sig());
    assert_eq!(msg.sig_tlv_count(), 2);
    assert_eq!(msg.sig_tlv_type(0), Some(0x0008));
    assert_eq!(msg.sig_tlv_type(1), Some(0x7000));

    match msg.sig_tlv(0) {
        Some(ptpmgmt::SigTlv::PathTrace(pt)) => {
            assert_eq!(
                pt.path_sequence,
                vec![ClockIdentity([1; 8]), ClockIdentity([2; 8])]
            );
        }
        other => panic!("unexpected TLV: {:?}", other),
    }
    match msg.sig_tlv(1) {
        Some(ptpmgmt::SigTlv::Other(raw)) => {
            assert_eq!(raw.as_slice(), &[0xde, 0xad, 0xbe, 0xef]);
        }
        other => panic!("unexpected TLV: {:?}", other),
    }
    assert!(msg.sig_mng_tlv(0).is_none());
}

#[test]
fn signaling_filter_keeps_allowed_types_only() {
    let mut prms = MsgParams::new();
    prms.rcv_signaling = true;
    prms.filter_signaling = true;
    prms.allow_sig_tlv(0x0008);
    let mut msg = Message::with_params(prms).unwrap();

    let status = msg.parse(&signaling_frame()).unwrap();
    assert_eq!(status, ParseStatus::Signaling);
    assert_eq!(msg.sig_tlv_count(), 1);
    assert_eq!(msg.sig_tlv_type(0), Some(0x0008));
}

#[test]
fn signaling_rejected_without_rcv_signaling() {
    let mut msg = Message::new();
    assert_eq!(msg.parse(&signaling_frame()), Err(MngError::Header));
}

#[test]
fn unicast_flag_and_parameters_round_through_header() {
    let mut prms = MsgParams::new();
    prms.is_unicast = true;
    prms.domain_number = 5;
    prms.transport_specific = 0x1;
    prms.boundary_hops = 3;
    prms.self_id = PortIdentity {
        clock_identity: ClockIdentity([9; 8]),
        port_number: 2,
    };
    let mut msg = Message::with_params(prms).unwrap();
    msg.set_action(ActionField::Get, MngId::CurrentDataSet)
        .unwrap();

    let mut buf = [0u8; 64];
    msg.build(&mut buf, 0x0102).unwrap();
    assert_eq!(buf[0], 0x1d); // transportSpecific nibble | Management
    assert_eq!(buf[4], 5);
    assert_eq!(buf[6], 0x04); // unicast flag
    assert_eq!(&buf[20..28], &[9; 8]);
    assert_eq!(&buf[28..30], &[0, 2]);
    assert_eq!(&buf[30..32], &[0x01, 0x02]);
    assert_eq!(buf[44], 3);
    assert_eq!(buf[45], 3);
}

#[test]
fn build_rejects_small_buffer() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    let mut buf = [0u8; 40];
    assert_eq!(
        msg.build(&mut buf, 1),
        Err(MngError::TooSmall {
            needed: 54,
            available: 40
        })
    );
}

#[test]
fn all_clocks_wildcard_helpers() {
    let mut msg = Message::new();
    assert!(msg.is_all_clocks());
    let mut prms = msg.params().clone();
    prms.target = PortIdentity {
        clock_identity: ClockIdentity([1; 8]),
        port_number: 1,
    };
    msg.update_params(prms).unwrap();
    assert!(!msg.is_all_clocks());
    msg.set_all_clocks();
    assert!(msg.is_all_clocks());
}

#[test]
fn update_params_validates_ranges() {
    let mut msg = Message::new();
    let mut prms = msg.params().clone();
    prms.domain_number = 128;
    assert_eq!(
        msg.update_params(prms),
        Err(MngError::Val {
            field: "domainNumber"
        })
    );
    let mut prms = msg.params().clone();
    prms.transport_specific = 0x10;
    assert_eq!(
        msg.update_params(prms),
        Err(MngError::Val {
            field: "transportSpecific"
        })
    );
}
