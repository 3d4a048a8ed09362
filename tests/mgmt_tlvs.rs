//! Per-variant round-trips through the public build and parse surface,
//! and registry action policy checks.
//!
//! A SET frame is built, its action byte patched to RESPONSE, and the
//! frame parsed back; the typed record must survive unchanged.

use ptpmgmt::mgmt::{
    AcceptableMasterTableTlv, AlternateTimeOffsetNameTlv, AlternateTimeOffsetPropertiesTlv,
    DomainTlv, ExtPortConfigPortDataSetTlv, GrandmasterClusterTableTlv, GrandmasterSettingsNpTlv,
    PortDataSetNpTlv, Priority1Tlv, SubscribeEventsNpTlv, SynchronizationUncertainNpTlv, TimeTlv,
    TimescalePropertiesTlv, UnicastMasterTableTlv, UserDescriptionTlv, UtcPropertiesTlv,
    NOTIFY_PORT_STATE, NOTIFY_TIME_SYNC, SYNC_UNCERTAIN_TRUE,
};
use ptpmgmt::octets::Octets;
use ptpmgmt::protocol::{
    AcceptableMaster, ClockIdentity, ClockQuality, NetworkProtocol, PortAddress, PortIdentity,
    PortState, PtpText, TimeSource, Timestamp, F_PTP, F_UTCV,
};
use ptpmgmt::{
    ActionField, Dialect, Message, MngError, MngId, MngTlv, MsgParams, ParseStatus,
};

/// Build a SET frame, patch the action byte to RESPONSE, parse it back
/// and return the record the framer now owns.
fn set_roundtrip(dialect: Dialect, id: MngId, data: MngTlv) -> (usize, MngTlv) {
    let mut prms = MsgParams::new();
    prms.implement_specific = dialect;
    let mut msg = Message::with_params(prms).unwrap();
    msg.set_action_with(ActionField::Set, id, data).unwrap();

    let mut buf = vec![0u8; 1500];
    let len = msg.build(&mut buf, 7).unwrap();
    assert_eq!(len, msg.planned_len().unwrap());
    assert_eq!(len % 2, 0, "frames are always even-sized");

    buf[46] = 0x02; // RESPONSE
    let status = msg.parse(&buf[..len]).unwrap();
    assert_eq!(status, ParseStatus::Ok);
    assert_eq!(msg.tlv_id(), id);
    assert_eq!(msg.sequence(), 7);
    (len, msg.data().unwrap().clone())
}

#[test]
fn roundtrip_priority1() {
    let data = MngTlv::Priority1(Priority1Tlv { priority1: 200 });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::Priority1, data.clone());
    assert_eq!(len, 56);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_domain() {
    let data = MngTlv::Domain(DomainTlv { domain_number: 44 });
    let (_, back) = set_roundtrip(Dialect::Default, MngId::Domain, data.clone());
    assert_eq!(back, data);
}

#[test]
fn roundtrip_user_description_odd_and_even() {
    // "host" is 4 text bytes: 5 on the wire, padded to 6.
    let data = MngTlv::UserDescription(UserDescriptionTlv {
        user_description: PtpText::from("host"),
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::UserDescription, data.clone());
    assert_eq!(len, 60);
    assert_eq!(back, data);

    // "host7" is 5 text bytes: 6 on the wire, no pad.
    let data = MngTlv::UserDescription(UserDescriptionTlv {
        user_description: PtpText::from("host7"),
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::UserDescription, data.clone());
    assert_eq!(len, 60);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_time() {
    let data = MngTlv::Time(TimeTlv {
        current_time: Timestamp {
            seconds: 1_700_000_000,
            nanoseconds: 123_456_789,
        },
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::Time, data.clone());
    assert_eq!(len, 64);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_utc_properties() {
    let data = MngTlv::UtcProperties(UtcPropertiesTlv {
        current_utc_offset: 37,
        flags: F_UTCV,
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::UtcProperties, data.clone());
    assert_eq!(len, 58);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_timescale_properties() {
    let data = MngTlv::TimescaleProperties(TimescalePropertiesTlv {
        flags: F_PTP,
        time_source: TimeSource::Gnss,
    });
    let (_, back) = set_roundtrip(Dialect::Default, MngId::TimescaleProperties, data.clone());
    assert_eq!(back, data);
}

#[test]
fn roundtrip_ext_port_config_port_data_set() {
    let data = MngTlv::ExtPortConfigPortDataSet(ExtPortConfigPortDataSetTlv {
        flags: 1,
        desired_state: PortState::Passive,
    });
    let (_, back) = set_roundtrip(Dialect::Default, MngId::ExtPortConfigPortDataSet, data.clone());
    assert_eq!(back, data);
}

#[test]
fn roundtrip_alternate_time_offset_properties() {
    let data = MngTlv::AlternateTimeOffsetProperties(AlternateTimeOffsetPropertiesTlv {
        key_field: 1,
        current_offset: -37,
        jump_seconds: 1,
        time_of_next_jump: 0x0000_7fff_ffff,
    });
    let (len, back) = set_roundtrip(
        Dialect::Default,
        MngId::AlternateTimeOffsetProperties,
        data.clone(),
    );
    // Natural dataField size 15, padded to the declared 16.
    assert_eq!(len, 70);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_alternate_time_offset_name() {
    let data = MngTlv::AlternateTimeOffsetName(AlternateTimeOffsetNameTlv {
        key_field: 2,
        display_name: PtpText::from("UTC"),
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::AlternateTimeOffsetName, data.clone());
    // 1 + (1 + 3) = 5 dataField bytes, padded to 6.
    assert_eq!(len, 60);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_grandmaster_cluster_table() {
    let data = MngTlv::GrandmasterClusterTable(GrandmasterClusterTableTlv {
        log_query_interval: 1,
        port_addresses: vec![
            PortAddress {
                network_protocol: NetworkProtocol::UdpIpv4,
                address: Octets::from([10, 0, 0, 1]),
            },
            PortAddress {
                network_protocol: NetworkProtocol::Ieee802_3,
                address: Octets::from([0, 0x1b, 0x21, 1, 2, 3]),
            },
        ],
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::GrandmasterClusterTable, data.clone());
    // 2 + (4+4) + (4+6) = 20 dataField bytes.
    assert_eq!(len, 74);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_unicast_master_table() {
    let data = MngTlv::UnicastMasterTable(UnicastMasterTableTlv {
        log_query_interval: -2,
        port_addresses: vec![PortAddress {
            network_protocol: NetworkProtocol::UdpIpv6,
            address: Octets::from_ip("fe80::1").unwrap(),
        }],
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::UnicastMasterTable, data.clone());
    // 3 + (4+16) = 23 dataField bytes, padded to 24.
    assert_eq!(len, 78);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_acceptable_master_table() {
    let data = MngTlv::AcceptableMasterTable(AcceptableMasterTableTlv {
        list: vec![
            AcceptableMaster {
                acceptable_port_identity: PortIdentity {
                    clock_identity: ClockIdentity([3; 8]),
                    port_number: 1,
                },
                alternate_priority1: 5,
            },
            AcceptableMaster::default(),
        ],
    });
    let (len, back) = set_roundtrip(Dialect::Default, MngId::AcceptableMasterTable, data.clone());
    // 2 + 2*11 = 24 dataField bytes.
    assert_eq!(len, 78);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_grandmaster_settings_np() {
    let data = MngTlv::GrandmasterSettingsNp(GrandmasterSettingsNpTlv {
        clock_quality: ClockQuality {
            clock_class: 6,
            clock_accuracy: ptpmgmt::protocol::ClockAccuracy::Within100Ns,
            offset_scaled_log_variance: 0x4100,
        },
        current_utc_offset: 37,
        flags: F_UTCV | F_PTP,
        time_source: TimeSource::AtomicClock,
    });
    let (len, back) = set_roundtrip(Dialect::Linuxptp, MngId::GrandmasterSettingsNp, data.clone());
    assert_eq!(len, 62);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_port_data_set_np() {
    let data = MngTlv::PortDataSetNp(PortDataSetNpTlv {
        neighbor_prop_delay_thresh: 20_000_000,
        as_capable: 1,
    });
    let (_, back) = set_roundtrip(Dialect::Linuxptp, MngId::PortDataSetNp, data.clone());
    assert_eq!(back, data);
}

#[test]
fn roundtrip_subscribe_events_np() {
    let mut tlv = SubscribeEventsNpTlv {
        duration: 180,
        ..Default::default()
    };
    tlv.set_event(NOTIFY_PORT_STATE);
    tlv.set_event(NOTIFY_TIME_SYNC);
    let data = MngTlv::SubscribeEventsNp(tlv);
    let (len, back) = set_roundtrip(Dialect::Linuxptp, MngId::SubscribeEventsNp, data.clone());
    assert_eq!(len, 120);
    assert_eq!(back, data);
}

#[test]
fn roundtrip_synchronization_uncertain_np() {
    let data = MngTlv::SynchronizationUncertainNp(SynchronizationUncertainNpTlv {
        val: SYNC_UNCERTAIN_TRUE,
    });
    let (_, back) = set_roundtrip(
        Dialect::Linuxptp,
        MngId::SynchronizationUncertainNp,
        data.clone(),
    );
    assert_eq!(back, data);
}

#[test]
fn get_and_command_follow_the_registry_mask() {
    let mut msg = Message::new();
    for &id in MngId::all() {
        for action in [ActionField::Get, ActionField::Command] {
            let res = msg.set_action(action, id);
            assert_eq!(
                res.is_ok(),
                id.allows(action),
                "{} {}",
                action,
                id
            );
        }
    }
}

#[test]
fn set_requires_a_matching_payload() {
    let mut msg = Message::new();
    // SET without payload on a non-empty ID.
    assert_eq!(
        msg.set_action(ActionField::Set, MngId::Priority1),
        Err(MngError::InvalidId)
    );
    // SET with a payload of the wrong variant.
    assert_eq!(
        msg.set_action_with(
            ActionField::Set,
            MngId::Priority2,
            MngTlv::Priority1(Priority1Tlv { priority1: 1 })
        ),
        Err(MngError::InvalidId)
    );
    // SET on a GET-only ID.
    assert_eq!(
        msg.set_action(ActionField::Set, MngId::PortDataSet),
        Err(MngError::Action)
    );
}

#[test]
fn build_rejects_out_of_range_uint48() {
    let mut msg = Message::new();
    msg.set_action_with(
        ActionField::Set,
        MngId::AlternateTimeOffsetProperties,
        MngTlv::AlternateTimeOffsetProperties(AlternateTimeOffsetPropertiesTlv {
            time_of_next_jump: 1 << 48,
            ..Default::default()
        }),
    )
    .unwrap();
    let mut buf = [0u8; 128];
    assert_eq!(
        msg.build(&mut buf, 1),
        Err(MngError::Val { field: "uint48" })
    );
}

#[test]
fn parse_rejects_unknown_management_id() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();

    let mut frame = vec![0u8; 54];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&54u16.to_be_bytes());
    frame[46] = 0x02;
    frame[48..50].copy_from_slice(&[0x00, 0x01]);
    frame[50..52].copy_from_slice(&[0x00, 0x02]);
    frame[52..54].copy_from_slice(&[0x12, 0x34]); // no such code
    assert_eq!(msg.parse(&frame), Err(MngError::InvalidId));
}

#[test]
fn parse_honors_the_dialect() {
    // A TIME_STATUS_NP response: 50 zero bytes of dataField.
    let mut frame = vec![0u8; 104];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&104u16.to_be_bytes());
    frame[46] = 0x02;
    frame[48..50].copy_from_slice(&[0x00, 0x01]);
    frame[50..52].copy_from_slice(&[0x00, 52]);
    frame[52..54].copy_from_slice(&[0xc0, 0x00]);

    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    assert_eq!(msg.parse(&frame), Err(MngError::InvalidId));

    let mut prms = MsgParams::new();
    prms.implement_specific = Dialect::Linuxptp;
    let mut msg = Message::with_params(prms).unwrap();
    msg.set_action(ActionField::Get, MngId::TimeStatusNp).unwrap();
    assert_eq!(msg.parse(&frame).unwrap(), ParseStatus::Ok);
    assert_eq!(msg.tlv_id(), MngId::TimeStatusNp);
}

#[test]
fn parse_rejects_odd_tlv_length() {
    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();

    let mut frame = vec![0u8; 56];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&56u16.to_be_bytes());
    frame[46] = 0x02;
    frame[48..50].copy_from_slice(&[0x00, 0x01]);
    frame[50..52].copy_from_slice(&[0x00, 3]); // odd
    frame[52..54].copy_from_slice(&[0x20, 0x05]);
    assert_eq!(msg.parse(&frame), Err(MngError::Size { declared: 3 }));
}

#[test]
fn parse_discards_trailing_pad_inside_tlv() {
    // PRIORITY1 response whose dataField is the declared 2 bytes: the
    // value byte plus one pad byte the marshaller leaves unread.
    let mut frame = vec![0u8; 56];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&56u16.to_be_bytes());
    frame[46] = 0x02;
    frame[48..50].copy_from_slice(&[0x00, 0x01]);
    frame[50..52].copy_from_slice(&[0x00, 4]);
    frame[52..54].copy_from_slice(&[0x20, 0x05]);
    frame[54] = 42;
    frame[55] = 0;

    let mut msg = Message::new();
    msg.set_action(ActionField::Get, MngId::Priority1).unwrap();
    assert_eq!(msg.parse(&frame).unwrap(), ParseStatus::Ok);
    assert_eq!(
        msg.data(),
        Some(&MngTlv::Priority1(Priority1Tlv { priority1: 42 }))
    );
}

#[test]
fn empty_response_parses_to_empty_record() {
    // An acknowledge for a COMMAND carries the ID with no dataField.
    let mut frame = vec![0u8; 54];
    frame[0] = 0x0d;
    frame[1] = 0x02;
    frame[2..4].copy_from_slice(&54u16.to_be_bytes());
    frame[46] = 0x04; // ACKNOWLEDGE
    frame[48..50].copy_from_slice(&[0x00, 0x01]);
    frame[50..52].copy_from_slice(&[0x00, 0x02]);
    frame[52..54].copy_from_slice(&[0x20, 0x0d]); // ENABLE_PORT

    let mut msg = Message::new();
    msg.set_action(ActionField::Command, MngId::EnablePort)
        .unwrap();
    assert_eq!(msg.parse(&frame).unwrap(), ParseStatus::Ok);
    assert_eq!(msg.reply_action(), ActionField::Acknowledge);
    assert_eq!(msg.data(), Some(&MngTlv::Empty));
}
