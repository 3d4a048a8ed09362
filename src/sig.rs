// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Signaling TLV records and their marshallers.
//!
//! A signaling message carries an arbitrary ordered sequence of TLVs.
//! Each known type decodes into a typed record; anything else is kept
//! verbatim in [`SigTlv::Other`] so the caller can still inspect it.
//! The client timing-data TLVs carry countless record lists that fill
//! the TLV window.

use crate::cursor::{Cursor, Wire};
use crate::error::MngError;
use crate::ids::{Dialect, MngId};
use crate::mgmt::{self, MngTlv};
use crate::octets::Octets;
use crate::protocol::{
    ClockIdentity, MsgType, PortAddress, PortIdentity, PtpText, TimeInterval, Timestamp, TlvType,
};

/// Organization extension TLV, shared by the propagate, do-not-propagate
/// and plain variants.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrganizationExtensionTlv {
    /// IEEE OUI of the organization.
    pub organization_id: [u8; 3],
    /// Organization-defined subtype.
    pub organization_sub_type: [u8; 3],
    /// Organization-defined payload, kept verbatim.
    pub data_field: Octets,
}

impl Wire for OrganizationExtensionTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.bytes(&mut d.organization_id)?;
        cur.bytes(&mut d.organization_sub_type)?;
        cur.octets_rest(&mut d.data_field)
    }
}

/// Path trace TLV: the list of clocks the Announce traversed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PathTraceTlv {
    /// Clock identity per path, filling the TLV window.
    pub path_sequence: Vec<ClockIdentity>,
}

impl Wire for PathTraceTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        if cur.is_build() {
            for ci in &mut d.path_sequence {
                cur.field(ci)?;
            }
        } else {
            d.path_sequence.clear();
            while cur.left() >= ClockIdentity::WIRE_SIZE {
                let mut ci = ClockIdentity::default();
                cur.field(&mut ci)?;
                d.path_sequence.push(ci);
            }
        }
        Ok(())
    }
}

/// Alternate time offset indicator TLV.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetIndicatorTlv {
    /// Index into the alternate timescale offsets.
    pub key_field: u8,
    /// Current offset.
    pub current_offset: i32,
    /// Jump seconds.
    pub jump_seconds: i32,
    /// Time of the next jump, unsigned 48 bits of seconds.
    pub time_of_next_jump: u64,
    /// Name of the alternate timescale.
    pub display_name: PtpText,
}

impl Wire for AlternateTimeOffsetIndicatorTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.key_field)?;
        cur.i32(&mut d.current_offset)?;
        cur.i32(&mut d.jump_seconds)?;
        cur.u48(&mut d.time_of_next_jump)?;
        cur.text(&mut d.display_name)
    }
}

/// Enhanced accuracy metrics TLV.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnhancedAccuracyMetricsTlv {
    /// Boundary clock hop count.
    pub bc_hop_count: u8,
    /// Transparent clock hop count.
    pub tc_hop_count: u8,
    /// Maximum grandmaster inaccuracy.
    pub max_gm_inaccuracy: TimeInterval,
    /// Variance of the grandmaster inaccuracy.
    pub var_gm_inaccuracy: f64,
    /// Maximum transient inaccuracy.
    pub max_transient_inaccuracy: TimeInterval,
    /// Variance of the transient inaccuracy.
    pub var_transient_inaccuracy: f64,
    /// Maximum dynamic inaccuracy.
    pub max_dynamic_inaccuracy: TimeInterval,
    /// Variance of the dynamic inaccuracy.
    pub var_dynamic_inaccuracy: f64,
    /// Maximum static instance inaccuracy.
    pub max_static_instance_inaccuracy: TimeInterval,
    /// Variance of the static instance inaccuracy.
    pub var_static_instance_inaccuracy: f64,
    /// Maximum static medium inaccuracy.
    pub max_static_medium_inaccuracy: TimeInterval,
    /// Variance of the static medium inaccuracy.
    pub var_static_medium_inaccuracy: f64,
}

impl Wire for EnhancedAccuracyMetricsTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.bc_hop_count)?;
        cur.u8(&mut d.tc_hop_count)?;
        cur.reserved(2)?;
        cur.field(&mut d.max_gm_inaccuracy)?;
        cur.f64(&mut d.var_gm_inaccuracy)?;
        cur.field(&mut d.max_transient_inaccuracy)?;
        cur.f64(&mut d.var_transient_inaccuracy)?;
        cur.field(&mut d.max_dynamic_inaccuracy)?;
        cur.f64(&mut d.var_dynamic_inaccuracy)?;
        cur.field(&mut d.max_static_instance_inaccuracy)?;
        cur.f64(&mut d.var_static_instance_inaccuracy)?;
        cur.field(&mut d.max_static_medium_inaccuracy)?;
        cur.f64(&mut d.var_static_medium_inaccuracy)
    }
}

/// Layer 1 synchronization TLV.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct L1SyncTlv {
    /// Bit fields flag.
    /// - bit 0: TCR txCoherentIsRequired
    /// - bit 1: RCR rxCoherentIsRequired
    /// - bit 2: CR  congruentIsRequired
    /// - bit 3: OPE optParamsEnabled
    pub flags1: u8,
    /// Bit fields flag.
    /// - bit 0: ITC isTxCoherent
    /// - bit 1: IRC isRxCoherent
    /// - bit 2: IC  isCongruent
    pub flags2: u8,
}

impl Wire for L1SyncTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags1, 0x0f)?;
        cur.flags(&mut d.flags2, 0x07)
    }
}

/// Port communication availability TLV.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PortCommunicationAvailabilityTlv {
    /// Sync message availability bit fields.
    pub sync_message_availability: u8,
    /// Delay_Resp message availability bit fields.
    pub delay_resp_message_availability: u8,
}

impl Wire for PortCommunicationAvailabilityTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.sync_message_availability, 0x0f)?;
        cur.flags(&mut d.delay_resp_message_availability, 0x0f)
    }
}

/// Protocol address TLV.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProtocolAddressTlv {
    /// The port protocol address.
    pub port_protocol_address: PortAddress,
}

impl Wire for ProtocolAddressTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.port_protocol_address)
    }
}

/// One record of SLAVE_RX_SYNC_TIMING_DATA.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlaveRxSyncTimingRecord {
    /// Sequence ID of the Sync message.
    pub sequence_id: u16,
    /// Origin timestamp of the Sync message.
    pub sync_origin_timestamp: Timestamp,
    /// Total correction field.
    pub total_correction_field: TimeInterval,
    /// Scaled cumulative rate offset.
    pub scaled_cumulative_rate_offset: i32,
    /// Ingress timestamp of the Sync event.
    pub sync_event_ingress_timestamp: Timestamp,
}

impl SlaveRxSyncTimingRecord {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 34;
}

impl Wire for SlaveRxSyncTimingRecord {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.sequence_id)?;
        cur.field(&mut d.sync_origin_timestamp)?;
        cur.field(&mut d.total_correction_field)?;
        cur.i32(&mut d.scaled_cumulative_rate_offset)?;
        cur.field(&mut d.sync_event_ingress_timestamp)
    }
}

/// Client receive sync timing data TLV.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SlaveRxSyncTimingDataTlv {
    /// Port identity of the sync source.
    pub sync_source_port_identity: PortIdentity,
    /// Timing records, filling the TLV window.
    pub list: Vec<SlaveRxSyncTimingRecord>,
}

impl Wire for SlaveRxSyncTimingDataTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.sync_source_port_identity)?;
        countless(cur, &mut d.list, SlaveRxSyncTimingRecord::WIRE_SIZE)
    }
}

/// One record of SLAVE_RX_SYNC_COMPUTED_DATA.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlaveRxSyncComputedRecord {
    /// Sequence ID of the Sync message.
    pub sequence_id: u16,
    /// Offset from the source clock.
    pub offset_from_master: TimeInterval,
    /// Mean path delay.
    pub mean_path_delay: TimeInterval,
    /// Scaled neighbor rate ratio.
    pub scaled_neighbor_rate_ratio: i32,
}

impl SlaveRxSyncComputedRecord {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 22;
}

impl Wire for SlaveRxSyncComputedRecord {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.sequence_id)?;
        cur.field(&mut d.offset_from_master)?;
        cur.field(&mut d.mean_path_delay)?;
        cur.i32(&mut d.scaled_neighbor_rate_ratio)
    }
}

/// Client receive sync computed data TLV.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SlaveRxSyncComputedDataTlv {
    /// Port identity of the source.
    pub source_port_identity: PortIdentity,
    /// Bit fields flag.
    /// - bit 0: scaledNeighborRateRatio valid
    /// - bit 1: meanPathDelay valid
    /// - bit 2: offsetFromMaster valid
    pub computed_flags: u8,
    /// Computed records, filling the TLV window.
    pub list: Vec<SlaveRxSyncComputedRecord>,
}

impl Wire for SlaveRxSyncComputedDataTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.source_port_identity)?;
        cur.flags(&mut d.computed_flags, 0x07)?;
        cur.reserved(1)?;
        countless(cur, &mut d.list, SlaveRxSyncComputedRecord::WIRE_SIZE)
    }
}

/// One record of SLAVE_TX_EVENT_TIMESTAMPS.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlaveTxEventTimestampsRecord {
    /// Sequence ID of the event message.
    pub sequence_id: u16,
    /// Egress timestamp of the event message.
    pub event_egress_timestamp: Timestamp,
}

impl SlaveTxEventTimestampsRecord {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 12;
}

impl Wire for SlaveTxEventTimestampsRecord {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.sequence_id)?;
        cur.field(&mut d.event_egress_timestamp)
    }
}

/// Client transmit event timestamps TLV.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SlaveTxEventTimestampsTlv {
    /// Port identity of the source.
    pub source_port_identity: PortIdentity,
    /// PTP message type the timestamps belong to.
    pub event_message_type: MsgType,
    /// Timestamp records, filling the TLV window.
    pub list: Vec<SlaveTxEventTimestampsRecord>,
}

impl Wire for SlaveTxEventTimestampsTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.source_port_identity)?;
        cur.field(&mut d.event_message_type)?;
        cur.reserved(1)?;
        countless(cur, &mut d.list, SlaveTxEventTimestampsRecord::WIRE_SIZE)
    }
}

/// Cumulative rate ratio TLV.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CumulativeRateRatioTlv {
    /// The rate ratio, scaled: (ratio - 1) times 2^41.
    pub scaled_cumulative_rate_ratio: i32,
}

impl Wire for CumulativeRateRatioTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.i32(&mut d.scaled_cumulative_rate_ratio)
    }
}

/// One record of SLAVE_DELAY_TIMING_DATA_NP.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlaveDelayTimingRecord {
    /// Sequence ID of the Delay_Req message.
    pub sequence_id: u16,
    /// Origin timestamp of the Delay_Req message.
    pub delay_origin_timestamp: Timestamp,
    /// Total correction field.
    pub total_correction_field: TimeInterval,
    /// Timestamp of the Delay_Resp message.
    pub delay_response_timestamp: Timestamp,
}

impl SlaveDelayTimingRecord {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 30;
}

impl Wire for SlaveDelayTimingRecord {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.sequence_id)?;
        cur.field(&mut d.delay_origin_timestamp)?;
        cur.field(&mut d.total_correction_field)?;
        cur.field(&mut d.delay_response_timestamp)
    }
}

/// Client delay timing data TLV, linuxptp experimental.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SlaveDelayTimingDataNpTlv {
    /// Port identity of the source.
    pub source_port_identity: PortIdentity,
    /// Delay timing records, filling the TLV window.
    pub list: Vec<SlaveDelayTimingRecord>,
}

impl Wire for SlaveDelayTimingDataNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.source_port_identity)?;
        countless(cur, &mut d.list, SlaveDelayTimingRecord::WIRE_SIZE)
    }
}

// Countless list: build writes every record, parse reads records until
// the remaining window is smaller than one record.
fn countless<T: Wire + Default>(
    cur: &mut Cursor<'_>,
    list: &mut Vec<T>,
    rec_size: usize,
) -> Result<(), MngError> {
    if cur.is_build() {
        for rec in list.iter_mut() {
            cur.field(rec)?;
        }
    } else {
        list.clear();
        while cur.left() >= rec_size {
            let mut rec = T::default();
            cur.field(&mut rec)?;
            list.push(rec);
        }
    }
    Ok(())
}

/// One TLV of a signaling message.
#[derive(Clone, Debug, PartialEq)]
pub enum SigTlv {
    /// A management TLV carried in a signaling message.
    Management {
        /// The management ID.
        id: MngId,
        /// The typed payload.
        data: MngTlv,
    },
    /// A management error status TLV carried in a signaling message.
    ManagementErrorStatus {
        /// The management ID the error refers to.
        id: MngId,
        /// The raw management error code.
        error_id: u16,
        /// Optional display text.
        display_data: PtpText,
    },
    /// Organization extension (any of the three propagate variants).
    OrganizationExtension(OrganizationExtensionTlv),
    /// Path trace.
    PathTrace(PathTraceTlv),
    /// Alternate time offset indicator.
    AlternateTimeOffsetIndicator(AlternateTimeOffsetIndicatorTlv),
    /// Enhanced accuracy metrics.
    EnhancedAccuracyMetrics(EnhancedAccuracyMetricsTlv),
    /// Layer 1 synchronization.
    L1Sync(L1SyncTlv),
    /// Port communication availability.
    PortCommunicationAvailability(PortCommunicationAvailabilityTlv),
    /// Protocol address.
    ProtocolAddress(ProtocolAddressTlv),
    /// Client receive sync timing data.
    SlaveRxSyncTimingData(SlaveRxSyncTimingDataTlv),
    /// Client receive sync computed data.
    SlaveRxSyncComputedData(SlaveRxSyncComputedDataTlv),
    /// Client transmit event timestamps.
    SlaveTxEventTimestamps(SlaveTxEventTimestampsTlv),
    /// Cumulative rate ratio.
    CumulativeRateRatio(CumulativeRateRatioTlv),
    /// Client delay timing data, linuxptp experimental.
    SlaveDelayTimingDataNp(SlaveDelayTimingDataNpTlv),
    /// Any TLV type without a marshaller, kept verbatim.
    Other(Octets),
}

/// Decode one signaling TLV from its bounded window.
///
/// Unknown types, and linuxptp types under the default dialect, yield
/// [`SigTlv::Other`] with the raw value bytes.
pub(crate) fn parse_sig_tlv(
    tlv_type: u16,
    cur: &mut Cursor<'_>,
    dialect: Dialect,
) -> Result<SigTlv, MngError> {
    macro_rules! rec {
        ($variant:ident, $t:ty) => {{
            let mut d = <$t>::default();
            cur.field(&mut d)?;
            SigTlv::$variant(d)
        }};
    }
    let known = TlvType::try_from(tlv_type).ok();
    Ok(match known {
        Some(TlvType::Management) => {
            let mut code = 0u16;
            cur.u16(&mut code)?;
            let id = MngId::from_code(code, dialect).ok_or(MngError::InvalidId)?;
            let data = if id.is_empty() {
                MngTlv::Empty
            } else {
                mgmt::parse_tlv(id, cur)?
            };
            SigTlv::Management { id, data }
        }
        Some(TlvType::ManagementErrorStatus) => {
            let mut error_id = 0u16;
            cur.u16(&mut error_id)?;
            let mut code = 0u16;
            cur.u16(&mut code)?;
            let id = MngId::from_code(code, dialect).ok_or(MngError::InvalidId)?;
            cur.reserved(4)?;
            let mut display_data = PtpText::default();
            if cur.left() > 0 {
                cur.text(&mut display_data)?;
            }
            SigTlv::ManagementErrorStatus {
                id,
                error_id,
                display_data,
            }
        }
        Some(TlvType::OrganizationExtension)
        | Some(TlvType::OrganizationExtensionPropagate)
        | Some(TlvType::OrganizationExtensionDoNotPropagate) => {
            rec!(OrganizationExtension, OrganizationExtensionTlv)
        }
        Some(TlvType::PathTrace) => rec!(PathTrace, PathTraceTlv),
        Some(TlvType::AlternateTimeOffsetIndicator) => {
            rec!(AlternateTimeOffsetIndicator, AlternateTimeOffsetIndicatorTlv)
        }
        Some(TlvType::EnhancedAccuracyMetrics) => {
            rec!(EnhancedAccuracyMetrics, EnhancedAccuracyMetricsTlv)
        }
        Some(TlvType::L1Sync) => rec!(L1Sync, L1SyncTlv),
        Some(TlvType::PortCommunicationAvailability) => {
            rec!(PortCommunicationAvailability, PortCommunicationAvailabilityTlv)
        }
        Some(TlvType::ProtocolAddress) => rec!(ProtocolAddress, ProtocolAddressTlv),
        Some(TlvType::SlaveRxSyncTimingData) => {
            rec!(SlaveRxSyncTimingData, SlaveRxSyncTimingDataTlv)
        }
        Some(TlvType::SlaveRxSyncComputedData) => {
            rec!(SlaveRxSyncComputedData, SlaveRxSyncComputedDataTlv)
        }
        Some(TlvType::SlaveTxEventTimestamps) => {
            rec!(SlaveTxEventTimestamps, SlaveTxEventTimestampsTlv)
        }
        Some(TlvType::CumulativeRateRatio) => rec!(CumulativeRateRatio, CumulativeRateRatioTlv),
        Some(TlvType::SlaveDelayTimingDataNp) if dialect == Dialect::Linuxptp => {
            rec!(SlaveDelayTimingDataNp, SlaveDelayTimingDataNpTlv)
        }
        _ => {
            let mut raw = Octets::new();
            cur.octets_rest(&mut raw)?;
            SigTlv::Other(raw)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::NetworkProtocol;

    fn roundtrip<T: Wire + Default + PartialEq + core::fmt::Debug + Clone>(
        val: &T,
        expect_len: usize,
    ) {
        let mut buf = vec![0u8; 512];
        let written = {
            let mut c = Cursor::build(&mut buf);
            let mut v = val.clone();
            c.field(&mut v).unwrap();
            c.size()
        };
        assert_eq!(written, expect_len);
        buf.truncate(written);
        let mut back = T::default();
        Cursor::parse(&buf).field(&mut back).unwrap();
        assert_eq!(&back, val);
    }

    #[test]
    fn test_organization_extension_roundtrip() {
        let d = OrganizationExtensionTlv {
            organization_id: [0x00, 0x80, 0xc2],
            organization_sub_type: [0, 0, 1],
            data_field: Octets::from([1, 2, 3, 4]),
        };
        roundtrip(&d, 10);
    }

    #[test]
    fn test_slave_rx_sync_timing_data_roundtrip() {
        let d = SlaveRxSyncTimingDataTlv {
            sync_source_port_identity: PortIdentity {
                clock_identity: ClockIdentity([5; 8]),
                port_number: 1,
            },
            list: vec![
                SlaveRxSyncTimingRecord {
                    sequence_id: 7,
                    sync_origin_timestamp: Timestamp {
                        seconds: 100,
                        nanoseconds: 5,
                    },
                    total_correction_field: TimeInterval {
                        scaled_nanoseconds: 1 << 16,
                    },
                    scaled_cumulative_rate_offset: -2,
                    sync_event_ingress_timestamp: Timestamp {
                        seconds: 100,
                        nanoseconds: 9,
                    },
                },
                SlaveRxSyncTimingRecord::default(),
            ],
        };
        roundtrip(&d, 10 + 2 * 34);
    }

    #[test]
    fn test_slave_rx_sync_computed_data_roundtrip() {
        let d = SlaveRxSyncComputedDataTlv {
            source_port_identity: PortIdentity::default(),
            computed_flags: 0x05,
            list: vec![SlaveRxSyncComputedRecord {
                sequence_id: 1,
                offset_from_master: TimeInterval {
                    scaled_nanoseconds: 42,
                },
                mean_path_delay: TimeInterval {
                    scaled_nanoseconds: -42,
                },
                scaled_neighbor_rate_ratio: 9,
            }],
        };
        roundtrip(&d, 12 + 22);
    }

    #[test]
    fn test_slave_tx_event_timestamps_roundtrip() {
        let d = SlaveTxEventTimestampsTlv {
            source_port_identity: PortIdentity::default(),
            event_message_type: MsgType::DelayReq,
            list: vec![
                SlaveTxEventTimestampsRecord {
                    sequence_id: 1,
                    event_egress_timestamp: Timestamp {
                        seconds: 7,
                        nanoseconds: 8,
                    },
                },
                SlaveTxEventTimestampsRecord::default(),
                SlaveTxEventTimestampsRecord::default(),
            ],
        };
        roundtrip(&d, 12 + 3 * 12);
    }

    #[test]
    fn test_slave_delay_timing_data_np_roundtrip() {
        let d = SlaveDelayTimingDataNpTlv {
            source_port_identity: PortIdentity::default(),
            list: vec![SlaveDelayTimingRecord::default()],
        };
        roundtrip(&d, 10 + 30);
    }

    #[test]
    fn test_enhanced_accuracy_metrics_roundtrip() {
        let d = EnhancedAccuracyMetricsTlv {
            bc_hop_count: 2,
            tc_hop_count: 1,
            max_gm_inaccuracy: TimeInterval {
                scaled_nanoseconds: 1000,
            },
            var_gm_inaccuracy: 0.25,
            ..Default::default()
        };
        roundtrip(&d, 4 + 4 * 16);
    }

    #[test]
    fn test_parse_sig_tlv_unknown_is_opaque() {
        let raw = [0xde, 0xad, 0xbe, 0xef];
        let mut cur = Cursor::parse(&raw);
        let tlv = parse_sig_tlv(0x7000, &mut cur, Dialect::Default).unwrap();
        assert_eq!(tlv, SigTlv::Other(Octets::from(raw.as_slice())));
    }

    #[test]
    fn test_parse_sig_tlv_management() {
        // managementId PRIORITY1 + dataField {priority1 = 5, pad}.
        let raw = [0x20, 0x05, 5, 0];
        let mut cur = Cursor::parse(&raw);
        let tlv = parse_sig_tlv(0x0001, &mut cur, Dialect::Default).unwrap();
        match tlv {
            SigTlv::Management { id, data } => {
                assert_eq!(id, MngId::Priority1);
                assert_eq!(
                    data,
                    MngTlv::Priority1(crate::mgmt::Priority1Tlv { priority1: 5 })
                );
            }
            other => panic!("unexpected TLV: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sig_tlv_error_status() {
        // errorId NOT_SUPPORTED, managementId PRIORITY1, reserved,
        // display "no".
        let raw = [0x00, 0x06, 0x20, 0x05, 0, 0, 0, 0, 2, b'n', b'o'];
        let mut cur = Cursor::parse(&raw);
        let tlv = parse_sig_tlv(0x0002, &mut cur, Dialect::Default).unwrap();
        assert_eq!(
            tlv,
            SigTlv::ManagementErrorStatus {
                id: MngId::Priority1,
                error_id: 0x0006,
                display_data: PtpText::from("no"),
            }
        );
    }

    #[test]
    fn test_slave_delay_timing_gated_by_dialect() {
        let raw = [0u8; 40];
        let mut cur = Cursor::parse(&raw);
        let tlv = parse_sig_tlv(0x7f00, &mut cur, Dialect::Default).unwrap();
        assert!(matches!(tlv, SigTlv::Other(_)));
        let mut cur = Cursor::parse(&raw);
        let tlv = parse_sig_tlv(0x7f00, &mut cur, Dialect::Linuxptp).unwrap();
        assert!(matches!(tlv, SigTlv::SlaveDelayTimingDataNp(_)));
    }

    #[test]
    fn test_protocol_address_roundtrip() {
        let d = ProtocolAddressTlv {
            port_protocol_address: PortAddress {
                network_protocol: NetworkProtocol::UdpIpv4,
                address: Octets::from([10, 1, 2, 3]),
            },
        };
        roundtrip(&d, 8);
    }
}
