// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Management TLV payload records and their marshallers.
//!
//! One typed record per management ID, one [`Wire`] implementation per
//! record. The implementation lists the fields once, in wire order; the
//! cursor direction decides whether the record is serialized or filled
//! in. Fixed-size records marshal their natural size, which after the
//! framer's single odd-length pad equals the registry's declared size.
//!
//! [`MngTlv`] is the tagged union the framer hands out on parse and
//! accepts on build; its discriminant is the management ID.

use crate::cursor::{Cursor, Wire};
use crate::error::MngError;
use crate::ids::{MngId, MngSize};
use crate::octets::Octets;
use crate::protocol::{
    AcceptableMaster, ClockAccuracy, ClockIdentity, ClockQuality, FaultRecord, FaultSeverity,
    LinuxptpTimeStamp, PortAddress, PortIdentity, PortState, PtpText, TimeInterval, TimeSource,
    Timestamp,
};

/// Initialization key requesting the INITIALIZE event.
pub const INITIALIZE_EVENT: u16 = 0x0000;

/// Scale factor of `TIME_STATUS_NP.cumulative_scaled_rate_offset`.
pub const P41: f64 = (1u64 << 41) as f64;

/// Size in bytes of the SUBSCRIBE_EVENTS_NP event bitmask.
pub const EVENT_BITMASK_CNT: usize = 64;
/// Port state change event bit in the SUBSCRIBE_EVENTS_NP bitmask.
pub const NOTIFY_PORT_STATE: usize = 0;
/// Time synchronization event bit in the SUBSCRIBE_EVENTS_NP bitmask.
pub const NOTIFY_TIME_SYNC: usize = 1;

/// Number of message-type counters in PORT_STATS_NP.
pub const MAX_MESSAGE_TYPES: usize = 16;
/// Sync messages counter index in PORT_STATS_NP.
pub const STAT_SYNC: usize = 0;
/// Delay_Req messages counter index in PORT_STATS_NP.
pub const STAT_DELAY_REQ: usize = 1;
/// Pdelay_Req messages counter index in PORT_STATS_NP.
pub const STAT_PDELAY_REQ: usize = 2;
/// Pdelay_Resp messages counter index in PORT_STATS_NP.
pub const STAT_PDELAY_RESP: usize = 3;
/// Follow_Up messages counter index in PORT_STATS_NP.
pub const STAT_FOLLOW_UP: usize = 8;
/// Delay_Resp messages counter index in PORT_STATS_NP.
pub const STAT_DELAY_RESP: usize = 9;
/// Pdelay_Resp_Follow_Up messages counter index in PORT_STATS_NP.
pub const STAT_PDELAY_RESP_FOLLOW_UP: usize = 10;
/// Announce messages counter index in PORT_STATS_NP.
pub const STAT_ANNOUNCE: usize = 11;
/// Signaling messages counter index in PORT_STATS_NP.
pub const STAT_SIGNALING: usize = 12;
/// Management messages counter index in PORT_STATS_NP.
pub const STAT_MANAGEMENT: usize = 13;

/// SYNCHRONIZATION_UNCERTAIN_NP false state.
pub const SYNC_UNCERTAIN_FALSE: u8 = 0;
/// SYNCHRONIZATION_UNCERTAIN_NP true state.
pub const SYNC_UNCERTAIN_TRUE: u8 = 1;
/// SYNCHRONIZATION_UNCERTAIN_NP do-not-care state.
pub const SYNC_UNCERTAIN_DONTCARE: u8 = 0xff;

/// Clock description.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClockDescriptionTlv {
    /// Clock type bit mask, see the `CLOCK_TYPE_*` constants.
    pub clock_type: u16,
    /// Physical layer protocol.
    pub physical_layer_protocol: PtpText,
    /// Physical address. The wire length field is derived from this
    /// buffer.
    pub physical_address: Octets,
    /// Protocol address.
    pub protocol_address: PortAddress,
    /// IEEE OUI of the manufacturer.
    pub manufacturer_identity: [u8; 3],
    /// Product description.
    pub product_description: PtpText,
    /// Revision data.
    pub revision_data: PtpText,
    /// User description.
    pub user_description: PtpText,
    /// Profile identity.
    pub profile_identity: [u8; 6],
}

impl Wire for ClockDescriptionTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        if d.physical_address.len() > u16::MAX as usize {
            return Err(MngError::Val {
                field: "physicalAddressLength",
            });
        }
        cur.u16(&mut d.clock_type)?;
        cur.text(&mut d.physical_layer_protocol)?;
        let mut addr_len = d.physical_address.len() as u16;
        cur.u16(&mut addr_len)?;
        cur.octets(&mut d.physical_address, addr_len as usize)?;
        cur.field(&mut d.protocol_address)?;
        cur.bytes(&mut d.manufacturer_identity)?;
        cur.reserved(1)?;
        cur.text(&mut d.product_description)?;
        cur.text(&mut d.revision_data)?;
        cur.text(&mut d.user_description)?;
        cur.bytes(&mut d.profile_identity)
    }
}

impl ClockDescriptionTlv {
    fn data_size(&self) -> usize {
        2 + self.physical_layer_protocol.size()
            + 2
            + self.physical_address.len()
            + self.protocol_address.size()
            + 4
            + self.product_description.size()
            + self.revision_data.size()
            + self.user_description.size()
            + 6
    }
}

/// User description.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserDescriptionTlv {
    /// User description text.
    pub user_description: PtpText,
}

impl Wire for UserDescriptionTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.text(&mut d.user_description)
    }
}

/// Initialize.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InitializeTlv {
    /// Initialization key.
    pub initialization_key: u16,
}

impl Wire for InitializeTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.initialization_key)
    }
}

/// Fault logging table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FaultLogTlv {
    /// Fault records. The wire count field is derived from this list.
    pub fault_records: Vec<FaultRecord>,
}

impl Wire for FaultLogTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        if d.fault_records.len() > u16::MAX as usize {
            return Err(MngError::Val {
                field: "numberOfFaultRecords",
            });
        }
        let mut count = d.fault_records.len() as u16;
        cur.u16(&mut count)?;
        if cur.is_build() {
            for rec in &mut d.fault_records {
                cur.field(rec)?;
            }
        } else {
            d.fault_records.clear();
            d.fault_records
                .try_reserve(count as usize)
                .map_err(|_| MngError::Mem)?;
            for _ in 0..count {
                let mut rec = FaultRecord::default();
                cur.field(&mut rec)?;
                d.fault_records.push(rec);
            }
        }
        Ok(())
    }
}

/// Default data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultDataSetTlv {
    /// Bit fields flag.
    /// - bit 0: TSC defaultDS.twoStepFlag
    /// - bit 1: SO  defaultDS.slaveOnly
    pub flags: u8,
    /// Number of ports.
    pub number_ports: u16,
    /// Priority 1.
    pub priority1: u8,
    /// Clock quality.
    pub clock_quality: ClockQuality,
    /// Priority 2.
    pub priority2: u8,
    /// Clock identity.
    pub clock_identity: ClockIdentity,
    /// Domain number.
    pub domain_number: u8,
}

impl Wire for DefaultDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x03)?;
        cur.reserved(1)?;
        cur.u16(&mut d.number_ports)?;
        cur.u8(&mut d.priority1)?;
        cur.field(&mut d.clock_quality)?;
        cur.u8(&mut d.priority2)?;
        cur.field(&mut d.clock_identity)?;
        cur.u8(&mut d.domain_number)?;
        cur.reserved(1)
    }
}

/// Current data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CurrentDataSetTlv {
    /// Steps removed from the grandmaster.
    pub steps_removed: u16,
    /// Offset from the source clock.
    pub offset_from_master: TimeInterval,
    /// Mean path delay to the source clock.
    pub mean_path_delay: TimeInterval,
}

impl Wire for CurrentDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.steps_removed)?;
        cur.field(&mut d.offset_from_master)?;
        cur.field(&mut d.mean_path_delay)
    }
}

/// Parent data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParentDataSetTlv {
    /// Port identity of the parent.
    pub parent_port_identity: PortIdentity,
    /// Bit fields flag.
    /// - bit 0: PS parentDS.parentStats
    pub flags: u8,
    /// Variance of the parent clock's phase as measured by the local
    /// clock.
    pub observed_parent_offset_scaled_log_variance: u16,
    /// Estimate of the parent clock's phase change rate as measured by
    /// the local clock.
    pub observed_parent_clock_phase_change_rate: i32,
    /// Grandmaster priority 1.
    pub grandmaster_priority1: u8,
    /// Grandmaster clock quality.
    pub grandmaster_clock_quality: ClockQuality,
    /// Grandmaster priority 2.
    pub grandmaster_priority2: u8,
    /// Grandmaster clock identity.
    pub grandmaster_identity: ClockIdentity,
}

impl Wire for ParentDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.parent_port_identity)?;
        cur.flags(&mut d.flags, 0x01)?;
        cur.reserved(1)?;
        cur.u16(&mut d.observed_parent_offset_scaled_log_variance)?;
        cur.i32(&mut d.observed_parent_clock_phase_change_rate)?;
        cur.u8(&mut d.grandmaster_priority1)?;
        cur.field(&mut d.grandmaster_clock_quality)?;
        cur.u8(&mut d.grandmaster_priority2)?;
        cur.field(&mut d.grandmaster_identity)
    }
}

/// Time properties data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimePropertiesDataSetTlv {
    /// Current TAI to UTC offset, leap seconds.
    pub current_utc_offset: i16,
    /// Bit fields flag.
    /// - bit 0: LI-61 timePropertiesDS.leap61
    /// - bit 1: LI-59 timePropertiesDS.leap59
    /// - bit 2: UTCV  timePropertiesDS.currentUtcOffsetValid
    /// - bit 3: PTP   timePropertiesDS.ptpTimescale
    /// - bit 4: TTRA  timePropertiesDS.timeTraceable
    /// - bit 5: FTRA  timePropertiesDS.frequencyTraceable
    pub flags: u8,
    /// Source clock type.
    pub time_source: TimeSource,
}

impl Wire for TimePropertiesDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.i16(&mut d.current_utc_offset)?;
        cur.flags(&mut d.flags, 0x3f)?;
        cur.field(&mut d.time_source)
    }
}

/// Port data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PortDataSetTlv {
    /// Port identity.
    pub port_identity: PortIdentity,
    /// Port state.
    pub port_state: PortState,
    /// Minimum permitted mean interval between successive Delay_Req
    /// messages, log base 2 seconds.
    pub log_min_delay_req_interval: i8,
    /// Mean path delay to the peer.
    pub peer_mean_path_delay: TimeInterval,
    /// Mean interval between successive Announce messages.
    pub log_announce_interval: i8,
    /// Announce intervals to pass without receipt of an Announce.
    pub announce_receipt_timeout: u8,
    /// Mean interval between successive Sync messages.
    pub log_sync_interval: i8,
    /// Delay mechanism, see the `DELAY_MECHANISM_*` constants.
    pub delay_mechanism: u8,
    /// Minimum permitted mean interval between successive Pdelay_Req
    /// messages.
    pub log_min_pdelay_req_interval: i8,
    /// PTP version in use on the port, major version in the low nibble.
    pub version_number: u8,
}

impl Wire for PortDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.port_identity)?;
        cur.field(&mut d.port_state)?;
        cur.i8(&mut d.log_min_delay_req_interval)?;
        cur.field(&mut d.peer_mean_path_delay)?;
        cur.i8(&mut d.log_announce_interval)?;
        cur.u8(&mut d.announce_receipt_timeout)?;
        cur.i8(&mut d.log_sync_interval)?;
        cur.u8(&mut d.delay_mechanism)?;
        cur.i8(&mut d.log_min_pdelay_req_interval)?;
        cur.u8(&mut d.version_number)
    }
}

/// Priority 1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Priority1Tlv {
    /// Priority 1.
    pub priority1: u8,
}

impl Wire for Priority1Tlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.priority1)
    }
}

/// Priority 2.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Priority2Tlv {
    /// Priority 2.
    pub priority2: u8,
}

impl Wire for Priority2Tlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.priority2)
    }
}

/// Domain number.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DomainTlv {
    /// Domain number.
    pub domain_number: u8,
}

impl Wire for DomainTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.domain_number)
    }
}

/// Client-only flag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlaveOnlyTlv {
    /// Bit fields flag.
    /// - bit 0: SO defaultDS.slaveOnly
    pub flags: u8,
}

impl Wire for SlaveOnlyTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)
    }
}

/// Log announce interval.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogAnnounceIntervalTlv {
    /// Mean interval between successive Announce messages.
    pub log_announce_interval: i8,
}

impl Wire for LogAnnounceIntervalTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.i8(&mut d.log_announce_interval)
    }
}

/// Announce receipt timeout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AnnounceReceiptTimeoutTlv {
    /// Announce intervals to pass without receipt of an Announce.
    pub announce_receipt_timeout: u8,
}

impl Wire for AnnounceReceiptTimeoutTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.announce_receipt_timeout)
    }
}

/// Log synchronization interval.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogSyncIntervalTlv {
    /// Mean interval between successive Sync messages.
    pub log_sync_interval: i8,
}

impl Wire for LogSyncIntervalTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.i8(&mut d.log_sync_interval)
    }
}

/// Version number.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VersionNumberTlv {
    /// PTP version in use on the port, major version in the low nibble.
    pub version_number: u8,
}

impl Wire for VersionNumberTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.version_number)
    }
}

/// Current time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimeTlv {
    /// Current timestamp.
    pub current_time: Timestamp,
}

impl Wire for TimeTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.current_time)
    }
}

/// Clock accuracy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ClockAccuracyTlv {
    /// Clock accuracy.
    pub clock_accuracy: ClockAccuracy,
}

impl Wire for ClockAccuracyTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.clock_accuracy)
    }
}

/// UTC properties.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UtcPropertiesTlv {
    /// Current TAI to UTC offset, leap seconds.
    pub current_utc_offset: i16,
    /// Bit fields flag.
    /// - bit 0: LI-61 timePropertiesDS.leap61
    /// - bit 1: LI-59 timePropertiesDS.leap59
    /// - bit 2: UTCV  timePropertiesDS.currentUtcOffsetValid
    pub flags: u8,
}

impl Wire for UtcPropertiesTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.i16(&mut d.current_utc_offset)?;
        cur.flags(&mut d.flags, 0x07)
    }
}

/// Traceability properties.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TraceabilityPropertiesTlv {
    /// Bit fields flag.
    /// - bit 4: TTRA timePropertiesDS.timeTraceable
    /// - bit 5: FTRA timePropertiesDS.frequencyTraceable
    pub flags: u8,
}

impl Wire for TraceabilityPropertiesTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x30)
    }
}

/// Timescale properties.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimescalePropertiesTlv {
    /// Bit fields flag.
    /// - bit 3: PTP timePropertiesDS.ptpTimescale
    pub flags: u8,
    /// Source clock type.
    pub time_source: TimeSource,
}

impl Wire for TimescalePropertiesTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x08)?;
        cur.field(&mut d.time_source)
    }
}

/// Unicast negotiation enable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnicastNegotiationEnableTlv {
    /// Bit fields flag.
    /// - bit 0: EN unicastNegotiationPortDS.enable
    pub flags: u8,
}

impl Wire for UnicastNegotiationEnableTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)
    }
}

/// Path trace list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PathTraceListTlv {
    /// Clock identity per path. Parse fills the list until the TLV
    /// window ends.
    pub path_sequence: Vec<ClockIdentity>,
}

impl Wire for PathTraceListTlv {
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

/// Path trace enable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PathTraceEnableTlv {
    /// Bit fields flag.
    /// - bit 0: EN pathTraceDS.enable
    pub flags: u8,
}

impl Wire for PathTraceEnableTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)
    }
}

/// Grandmaster cluster table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GrandmasterClusterTableTlv {
    /// Mean interval between unicast Announce messages from the
    /// grandmaster, log base 2 seconds.
    pub log_query_interval: i8,
    /// Port addresses of the grandmaster cluster. The wire count field
    /// is derived from this list.
    pub port_addresses: Vec<PortAddress>,
}

impl Wire for GrandmasterClusterTableTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        if d.port_addresses.len() > u8::MAX as usize {
            return Err(MngError::Val {
                field: "actualTableSize",
            });
        }
        cur.i8(&mut d.log_query_interval)?;
        let mut count = d.port_addresses.len() as u8;
        cur.u8(&mut count)?;
        if cur.is_build() {
            for pa in &mut d.port_addresses {
                cur.field(pa)?;
            }
        } else {
            d.port_addresses.clear();
            d.port_addresses
                .try_reserve(count as usize)
                .map_err(|_| MngError::Mem)?;
            for _ in 0..count {
                let mut pa = PortAddress::default();
                cur.field(&mut pa)?;
                d.port_addresses.push(pa);
            }
        }
        Ok(())
    }
}

/// Unicast master table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnicastMasterTableTlv {
    /// Mean interval between unicast Announce messages from the master,
    /// log base 2 seconds.
    pub log_query_interval: i8,
    /// Port addresses of the unicast masters. The wire count field is
    /// derived from this list.
    pub port_addresses: Vec<PortAddress>,
}

impl Wire for UnicastMasterTableTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        if d.port_addresses.len() > u16::MAX as usize {
            return Err(MngError::Val {
                field: "actualTableSize",
            });
        }
        cur.i8(&mut d.log_query_interval)?;
        let mut count = d.port_addresses.len() as u16;
        cur.u16(&mut count)?;
        if cur.is_build() {
            for pa in &mut d.port_addresses {
                cur.field(pa)?;
            }
        } else {
            d.port_addresses.clear();
            d.port_addresses
                .try_reserve(count as usize)
                .map_err(|_| MngError::Mem)?;
            for _ in 0..count {
                let mut pa = PortAddress::default();
                cur.field(&mut pa)?;
                d.port_addresses.push(pa);
            }
        }
        Ok(())
    }
}

/// Unicast master maximum table size.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnicastMasterMaxTableSizeTlv {
    /// Maximum number of addresses in the unicast master table.
    pub max_table_size: u16,
}

impl Wire for UnicastMasterMaxTableSizeTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.max_table_size)
    }
}

/// Acceptable master table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AcceptableMasterTableTlv {
    /// Acceptable master records. The wire count field is derived from
    /// this list.
    pub list: Vec<AcceptableMaster>,
}

impl Wire for AcceptableMasterTableTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        if d.list.len() > u16::MAX as usize {
            return Err(MngError::Val {
                field: "actualTableSize",
            });
        }
        let mut count = d.list.len() as u16;
        cur.u16(&mut count)?;
        if cur.is_build() {
            for am in &mut d.list {
                cur.field(am)?;
            }
        } else {
            d.list.clear();
            d.list
                .try_reserve(count as usize)
                .map_err(|_| MngError::Mem)?;
            for _ in 0..count {
                let mut am = AcceptableMaster::default();
                cur.field(&mut am)?;
                d.list.push(am);
            }
        }
        Ok(())
    }
}

/// Acceptable master table enabled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AcceptableMasterTableEnabledTlv {
    /// Bit fields flag.
    /// - bit 0: EN acceptableMasterPortDS.enable
    pub flags: u8,
}

impl Wire for AcceptableMasterTableEnabledTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)
    }
}

/// Acceptable master maximum table size.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AcceptableMasterMaxTableSizeTlv {
    /// Maximum permitted number of addresses in the acceptable master
    /// table.
    pub max_table_size: u16,
}

impl Wire for AcceptableMasterMaxTableSizeTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.max_table_size)
    }
}

/// Alternate master.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateMasterTlv {
    /// Bit fields flag.
    /// - bit 0: S alternateMasterPortDS.transmitAlternateMulticastSync
    pub flags: u8,
    /// Mean period between alternate multicast Sync messages, log base 2
    /// seconds.
    pub log_alternate_multicast_sync_interval: i8,
    /// Number of alternate masters.
    pub number_of_alternate_masters: u8,
}

impl Wire for AlternateMasterTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)?;
        cur.i8(&mut d.log_alternate_multicast_sync_interval)?;
        cur.u8(&mut d.number_of_alternate_masters)
    }
}

/// Alternate time offset enable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetEnableTlv {
    /// Index into the alternate timescale offsets.
    pub key_field: u8,
    /// Bit fields flag.
    /// - bit 0: EN alternateTimescaleOffsetsDS.list[keyField].enable
    pub flags: u8,
}

impl Wire for AlternateTimeOffsetEnableTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.key_field)?;
        cur.flags(&mut d.flags, 0x01)
    }
}

/// Alternate time offset name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetNameTlv {
    /// Index into the alternate timescale offsets.
    pub key_field: u8,
    /// Name of the alternate timescale offset.
    pub display_name: PtpText,
}

impl Wire for AlternateTimeOffsetNameTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.key_field)?;
        cur.text(&mut d.display_name)
    }
}

/// Alternate time offset maximum key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetMaxKeyTlv {
    /// Number of alternate timescales maintained.
    pub max_key: u8,
}

impl Wire for AlternateTimeOffsetMaxKeyTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.max_key)
    }
}

/// Alternate time offset properties.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlternateTimeOffsetPropertiesTlv {
    /// Index into the alternate timescale offsets.
    pub key_field: u8,
    /// Current offset.
    pub current_offset: i32,
    /// Jump seconds.
    pub jump_seconds: i32,
    /// Time of the next jump, unsigned 48 bits of seconds.
    pub time_of_next_jump: u64,
}

impl Wire for AlternateTimeOffsetPropertiesTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.key_field)?;
        cur.i32(&mut d.current_offset)?;
        cur.i32(&mut d.jump_seconds)?;
        cur.u48(&mut d.time_of_next_jump)
    }
}

/// Transparent clock port data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransparentClockPortDataSetTlv {
    /// Port identity.
    pub port_identity: PortIdentity,
    /// Bit fields flag.
    /// - bit 0: FLT transparentClockPortDS.faultyFlag
    pub flags: u8,
    /// Minimum permitted mean interval between successive Pdelay_Req
    /// messages.
    pub log_min_pdelay_req_interval: i8,
    /// Mean path delay to the peer.
    pub peer_mean_path_delay: TimeInterval,
}

impl Wire for TransparentClockPortDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.port_identity)?;
        cur.flags(&mut d.flags, 0x01)?;
        cur.i8(&mut d.log_min_pdelay_req_interval)?;
        cur.field(&mut d.peer_mean_path_delay)
    }
}

/// Log minimum pdelay request interval.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogMinPdelayReqIntervalTlv {
    /// Minimum permitted mean interval between successive Pdelay_Req
    /// messages.
    pub log_min_pdelay_req_interval: i8,
}

impl Wire for LogMinPdelayReqIntervalTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.i8(&mut d.log_min_pdelay_req_interval)
    }
}

/// Transparent clock default data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransparentClockDefaultDataSetTlv {
    /// Clock identity.
    pub clock_identity: ClockIdentity,
    /// Number of ports.
    pub number_ports: u16,
    /// Delay mechanism, see the `DELAY_MECHANISM_*` constants.
    pub delay_mechanism: u8,
    /// Primary domain number.
    pub primary_domain: u8,
}

impl Wire for TransparentClockDefaultDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.clock_identity)?;
        cur.u16(&mut d.number_ports)?;
        cur.u8(&mut d.delay_mechanism)?;
        cur.u8(&mut d.primary_domain)
    }
}

/// Primary domain.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimaryDomainTlv {
    /// Primary domain number.
    pub primary_domain: u8,
}

impl Wire for PrimaryDomainTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.primary_domain)
    }
}

/// Delay mechanism.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DelayMechanismTlv {
    /// Delay mechanism, see the `DELAY_MECHANISM_*` constants.
    pub delay_mechanism: u8,
}

impl Wire for DelayMechanismTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.delay_mechanism)
    }
}

/// External port configuration enabled.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExternalPortConfigurationEnabledTlv {
    /// Bit fields flag.
    /// - bit 0: EPC defaultDS.externalPortConfigurationEnabled
    pub flags: u8,
}

impl Wire for ExternalPortConfigurationEnabledTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)
    }
}

/// Master-only flag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MasterOnlyTlv {
    /// Bit fields flag.
    /// - bit 0: MO portDS.masterOnly
    pub flags: u8,
}

impl Wire for MasterOnlyTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)
    }
}

/// Holdover upgrade enable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HoldoverUpgradeEnableTlv {
    /// Bit fields flag.
    /// - bit 0: EN holdoverUpgradeDS.enable
    pub flags: u8,
}

impl Wire for HoldoverUpgradeEnableTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)
    }
}

/// External port configuration port data set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExtPortConfigPortDataSetTlv {
    /// Bit fields flag.
    /// - bit 0: EN externalPortConfigurationPortDS.enable
    pub flags: u8,
    /// Desired port state.
    pub desired_state: PortState,
}

impl Wire for ExtPortConfigPortDataSetTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.flags(&mut d.flags, 0x01)?;
        cur.field(&mut d.desired_state)
    }
}

/// Time status, linuxptp specific.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimeStatusNpTlv {
    /// Offset from the source clock in nanoseconds.
    pub master_offset: i64,
    /// Ingress time in nanoseconds.
    pub ingress_time: i64,
    /// Cumulative scaled rate offset, scaled by [`P41`].
    pub cumulative_scaled_rate_offset: i32,
    /// Scaled last grandmaster phase change.
    pub scaled_last_gm_phase_change: i32,
    /// Grandmaster time base indicator.
    pub gm_time_base_indicator: u16,
    /// Last grandmaster phase change, MSB part of nanoseconds.
    pub nanoseconds_msb: u16,
    /// Last grandmaster phase change, LSB part of nanoseconds.
    pub nanoseconds_lsb: u64,
    /// Last grandmaster phase change, nanosecond fraction.
    pub fractional_nanoseconds: u16,
    /// Flag for grandmaster presence.
    pub gm_present: i32,
    /// Grandmaster clock identity.
    pub gm_identity: ClockIdentity,
}

impl Wire for TimeStatusNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.i64(&mut d.master_offset)?;
        cur.i64(&mut d.ingress_time)?;
        cur.i32(&mut d.cumulative_scaled_rate_offset)?;
        cur.i32(&mut d.scaled_last_gm_phase_change)?;
        cur.u16(&mut d.gm_time_base_indicator)?;
        cur.u16(&mut d.nanoseconds_msb)?;
        cur.u64(&mut d.nanoseconds_lsb)?;
        cur.u16(&mut d.fractional_nanoseconds)?;
        cur.i32(&mut d.gm_present)?;
        cur.field(&mut d.gm_identity)
    }
}

/// Grandmaster settings, linuxptp specific.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GrandmasterSettingsNpTlv {
    /// Clock quality.
    pub clock_quality: ClockQuality,
    /// Current TAI to UTC offset, leap seconds.
    pub current_utc_offset: i16,
    /// Bit fields flag, same bits as the time properties data set.
    pub flags: u8,
    /// Source clock type.
    pub time_source: TimeSource,
}

impl Wire for GrandmasterSettingsNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.clock_quality)?;
        cur.i16(&mut d.current_utc_offset)?;
        cur.flags(&mut d.flags, 0x3f)?;
        cur.field(&mut d.time_source)
    }
}

/// Port data set, linuxptp specific.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PortDataSetNpTlv {
    /// Neighbor proper delay threshold in nanoseconds.
    pub neighbor_prop_delay_thresh: u32,
    /// Flag for 802.1AS capability.
    pub as_capable: i32,
}

impl Wire for PortDataSetNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u32(&mut d.neighbor_prop_delay_thresh)?;
        cur.i32(&mut d.as_capable)
    }
}

/// Subscribe events, linuxptp specific.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubscribeEventsNpTlv {
    /// Subscription duration in seconds.
    pub duration: u16,
    /// Bitmask of event states.
    pub bitmask: [u8; EVENT_BITMASK_CNT],
}

impl SubscribeEventsNpTlv {
    /// Set an event bit in the bitmask.
    pub fn set_event(&mut self, event: usize) {
        self.bitmask[event / 8] |= 1 << (event % 8);
    }

    /// Clear an event bit in the bitmask.
    pub fn clear_event(&mut self, event: usize) {
        self.bitmask[event / 8] &= !(1 << (event % 8));
    }

    /// Read an event bit from the bitmask.
    pub fn event(&self, event: usize) -> bool {
        self.bitmask[event / 8] & (1 << (event % 8)) != 0
    }
}

impl Default for SubscribeEventsNpTlv {
    fn default() -> Self {
        SubscribeEventsNpTlv {
            duration: 0,
            bitmask: [0; EVENT_BITMASK_CNT],
        }
    }
}

impl Wire for SubscribeEventsNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u16(&mut d.duration)?;
        cur.bytes(&mut d.bitmask)
    }
}

/// Port properties, linuxptp specific.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PortPropertiesNpTlv {
    /// Port identity.
    pub port_identity: PortIdentity,
    /// Port state.
    pub port_state: PortState,
    /// Timestamping mode of the daemon.
    pub timestamping: LinuxptpTimeStamp,
    /// Linux interface name.
    pub interface: PtpText,
}

impl Wire for PortPropertiesNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.port_identity)?;
        cur.field(&mut d.port_state)?;
        cur.field(&mut d.timestamping)?;
        cur.text(&mut d.interface)
    }
}

/// Port statistics, linuxptp specific.
///
/// The counters are little-endian on the wire, a quirk of the reference
/// daemon kept for compatibility.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PortStatsNpTlv {
    /// Port identity.
    pub port_identity: PortIdentity,
    /// Received message counts per PTP message type, see the `STAT_*`
    /// indices.
    pub rx_msg_type: [u64; MAX_MESSAGE_TYPES],
    /// Transmitted message counts per PTP message type.
    pub tx_msg_type: [u64; MAX_MESSAGE_TYPES],
}

impl Wire for PortStatsNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.field(&mut d.port_identity)?;
        for v in &mut d.rx_msg_type {
            cur.u64_le(v)?;
        }
        for v in &mut d.tx_msg_type {
            cur.u64_le(v)?;
        }
        Ok(())
    }
}

/// Synchronization uncertain, linuxptp specific.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SynchronizationUncertainNpTlv {
    /// Synchronization uncertain state, see the `SYNC_UNCERTAIN_*`
    /// constants.
    pub val: u8,
}

impl Wire for SynchronizationUncertainNpTlv {
    fn wire(cur: &mut Cursor<'_>, d: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut d.val)
    }
}

/// A management TLV payload record.
///
/// The discriminant is the management ID. IDs without a dataField all
/// map to [`MngTlv::Empty`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MngTlv {
    /// No dataField.
    Empty,
    /// CLOCK_DESCRIPTION payload.
    ClockDescription(ClockDescriptionTlv),
    /// USER_DESCRIPTION payload.
    UserDescription(UserDescriptionTlv),
    /// INITIALIZE payload.
    Initialize(InitializeTlv),
    /// FAULT_LOG payload.
    FaultLog(FaultLogTlv),
    /// DEFAULT_DATA_SET payload.
    DefaultDataSet(DefaultDataSetTlv),
    /// CURRENT_DATA_SET payload.
    CurrentDataSet(CurrentDataSetTlv),
    /// PARENT_DATA_SET payload.
    ParentDataSet(ParentDataSetTlv),
    /// TIME_PROPERTIES_DATA_SET payload.
    TimePropertiesDataSet(TimePropertiesDataSetTlv),
    /// PORT_DATA_SET payload.
    PortDataSet(PortDataSetTlv),
    /// PRIORITY1 payload.
    Priority1(Priority1Tlv),
    /// PRIORITY2 payload.
    Priority2(Priority2Tlv),
    /// DOMAIN payload.
    Domain(DomainTlv),
    /// SLAVE_ONLY payload.
    SlaveOnly(SlaveOnlyTlv),
    /// LOG_ANNOUNCE_INTERVAL payload.
    LogAnnounceInterval(LogAnnounceIntervalTlv),
    /// ANNOUNCE_RECEIPT_TIMEOUT payload.
    AnnounceReceiptTimeout(AnnounceReceiptTimeoutTlv),
    /// LOG_SYNC_INTERVAL payload.
    LogSyncInterval(LogSyncIntervalTlv),
    /// VERSION_NUMBER payload.
    VersionNumber(VersionNumberTlv),
    /// TIME payload.
    Time(TimeTlv),
    /// CLOCK_ACCURACY payload.
    ClockAccuracy(ClockAccuracyTlv),
    /// UTC_PROPERTIES payload.
    UtcProperties(UtcPropertiesTlv),
    /// TRACEABILITY_PROPERTIES payload.
    TraceabilityProperties(TraceabilityPropertiesTlv),
    /// TIMESCALE_PROPERTIES payload.
    TimescaleProperties(TimescalePropertiesTlv),
    /// UNICAST_NEGOTIATION_ENABLE payload.
    UnicastNegotiationEnable(UnicastNegotiationEnableTlv),
    /// PATH_TRACE_LIST payload.
    PathTraceList(PathTraceListTlv),
    /// PATH_TRACE_ENABLE payload.
    PathTraceEnable(PathTraceEnableTlv),
    /// GRANDMASTER_CLUSTER_TABLE payload.
    GrandmasterClusterTable(GrandmasterClusterTableTlv),
    /// UNICAST_MASTER_TABLE payload.
    UnicastMasterTable(UnicastMasterTableTlv),
    /// UNICAST_MASTER_MAX_TABLE_SIZE payload.
    UnicastMasterMaxTableSize(UnicastMasterMaxTableSizeTlv),
    /// ACCEPTABLE_MASTER_TABLE payload.
    AcceptableMasterTable(AcceptableMasterTableTlv),
    /// ACCEPTABLE_MASTER_TABLE_ENABLED payload.
    AcceptableMasterTableEnabled(AcceptableMasterTableEnabledTlv),
    /// ACCEPTABLE_MASTER_MAX_TABLE_SIZE payload.
    AcceptableMasterMaxTableSize(AcceptableMasterMaxTableSizeTlv),
    /// ALTERNATE_MASTER payload.
    AlternateMaster(AlternateMasterTlv),
    /// ALTERNATE_TIME_OFFSET_ENABLE payload.
    AlternateTimeOffsetEnable(AlternateTimeOffsetEnableTlv),
    /// ALTERNATE_TIME_OFFSET_NAME payload.
    AlternateTimeOffsetName(AlternateTimeOffsetNameTlv),
    /// ALTERNATE_TIME_OFFSET_MAX_KEY payload.
    AlternateTimeOffsetMaxKey(AlternateTimeOffsetMaxKeyTlv),
    /// ALTERNATE_TIME_OFFSET_PROPERTIES payload.
    AlternateTimeOffsetProperties(AlternateTimeOffsetPropertiesTlv),
    /// TRANSPARENT_CLOCK_PORT_DATA_SET payload.
    TransparentClockPortDataSet(TransparentClockPortDataSetTlv),
    /// LOG_MIN_PDELAY_REQ_INTERVAL payload.
    LogMinPdelayReqInterval(LogMinPdelayReqIntervalTlv),
    /// TRANSPARENT_CLOCK_DEFAULT_DATA_SET payload.
    TransparentClockDefaultDataSet(TransparentClockDefaultDataSetTlv),
    /// PRIMARY_DOMAIN payload.
    PrimaryDomain(PrimaryDomainTlv),
    /// DELAY_MECHANISM payload.
    DelayMechanism(DelayMechanismTlv),
    /// EXTERNAL_PORT_CONFIGURATION_ENABLED payload.
    ExternalPortConfigurationEnabled(ExternalPortConfigurationEnabledTlv),
    /// MASTER_ONLY payload.
    MasterOnly(MasterOnlyTlv),
    /// HOLDOVER_UPGRADE_ENABLE payload.
    HoldoverUpgradeEnable(HoldoverUpgradeEnableTlv),
    /// EXT_PORT_CONFIG_PORT_DATA_SET payload.
    ExtPortConfigPortDataSet(ExtPortConfigPortDataSetTlv),
    /// TIME_STATUS_NP payload.
    TimeStatusNp(TimeStatusNpTlv),
    /// GRANDMASTER_SETTINGS_NP payload.
    GrandmasterSettingsNp(GrandmasterSettingsNpTlv),
    /// PORT_DATA_SET_NP payload.
    PortDataSetNp(PortDataSetNpTlv),
    /// SUBSCRIBE_EVENTS_NP payload.
    SubscribeEventsNp(SubscribeEventsNpTlv),
    /// PORT_PROPERTIES_NP payload.
    PortPropertiesNp(PortPropertiesNpTlv),
    /// PORT_STATS_NP payload.
    PortStatsNp(PortStatsNpTlv),
    /// SYNCHRONIZATION_UNCERTAIN_NP payload.
    SynchronizationUncertainNp(SynchronizationUncertainNpTlv),
}

impl MngTlv {
    /// The management ID this record belongs to, or `None` for
    /// [`MngTlv::Empty`].
    pub fn mng_id(&self) -> Option<MngId> {
        Some(match self {
            MngTlv::Empty => return None,
            MngTlv::ClockDescription(_) => MngId::ClockDescription,
            MngTlv::UserDescription(_) => MngId::UserDescription,
            MngTlv::Initialize(_) => MngId::Initialize,
            MngTlv::FaultLog(_) => MngId::FaultLog,
            MngTlv::DefaultDataSet(_) => MngId::DefaultDataSet,
            MngTlv::CurrentDataSet(_) => MngId::CurrentDataSet,
            MngTlv::ParentDataSet(_) => MngId::ParentDataSet,
            MngTlv::TimePropertiesDataSet(_) => MngId::TimePropertiesDataSet,
            MngTlv::PortDataSet(_) => MngId::PortDataSet,
            MngTlv::Priority1(_) => MngId::Priority1,
            MngTlv::Priority2(_) => MngId::Priority2,
            MngTlv::Domain(_) => MngId::Domain,
            MngTlv::SlaveOnly(_) => MngId::SlaveOnly,
            MngTlv::LogAnnounceInterval(_) => MngId::LogAnnounceInterval,
            MngTlv::AnnounceReceiptTimeout(_) => MngId::AnnounceReceiptTimeout,
            MngTlv::LogSyncInterval(_) => MngId::LogSyncInterval,
            MngTlv::VersionNumber(_) => MngId::VersionNumber,
            MngTlv::Time(_) => MngId::Time,
            MngTlv::ClockAccuracy(_) => MngId::ClockAccuracy,
            MngTlv::UtcProperties(_) => MngId::UtcProperties,
            MngTlv::TraceabilityProperties(_) => MngId::TraceabilityProperties,
            MngTlv::TimescaleProperties(_) => MngId::TimescaleProperties,
            MngTlv::UnicastNegotiationEnable(_) => MngId::UnicastNegotiationEnable,
            MngTlv::PathTraceList(_) => MngId::PathTraceList,
            MngTlv::PathTraceEnable(_) => MngId::PathTraceEnable,
            MngTlv::GrandmasterClusterTable(_) => MngId::GrandmasterClusterTable,
            MngTlv::UnicastMasterTable(_) => MngId::UnicastMasterTable,
            MngTlv::UnicastMasterMaxTableSize(_) => MngId::UnicastMasterMaxTableSize,
            MngTlv::AcceptableMasterTable(_) => MngId::AcceptableMasterTable,
            MngTlv::AcceptableMasterTableEnabled(_) => MngId::AcceptableMasterTableEnabled,
            MngTlv::AcceptableMasterMaxTableSize(_) => MngId::AcceptableMasterMaxTableSize,
            MngTlv::AlternateMaster(_) => MngId::AlternateMaster,
            MngTlv::AlternateTimeOffsetEnable(_) => MngId::AlternateTimeOffsetEnable,
            MngTlv::AlternateTimeOffsetName(_) => MngId::AlternateTimeOffsetName,
            MngTlv::AlternateTimeOffsetMaxKey(_) => MngId::AlternateTimeOffsetMaxKey,
            MngTlv::AlternateTimeOffsetProperties(_) => MngId::AlternateTimeOffsetProperties,
            MngTlv::TransparentClockPortDataSet(_) => MngId::TransparentClockPortDataSet,
            MngTlv::LogMinPdelayReqInterval(_) => MngId::LogMinPdelayReqInterval,
            MngTlv::TransparentClockDefaultDataSet(_) => MngId::TransparentClockDefaultDataSet,
            MngTlv::PrimaryDomain(_) => MngId::PrimaryDomain,
            MngTlv::DelayMechanism(_) => MngId::DelayMechanism,
            MngTlv::ExternalPortConfigurationEnabled(_) => MngId::ExternalPortConfigurationEnabled,
            MngTlv::MasterOnly(_) => MngId::MasterOnly,
            MngTlv::HoldoverUpgradeEnable(_) => MngId::HoldoverUpgradeEnable,
            MngTlv::ExtPortConfigPortDataSet(_) => MngId::ExtPortConfigPortDataSet,
            MngTlv::TimeStatusNp(_) => MngId::TimeStatusNp,
            MngTlv::GrandmasterSettingsNp(_) => MngId::GrandmasterSettingsNp,
            MngTlv::PortDataSetNp(_) => MngId::PortDataSetNp,
            MngTlv::SubscribeEventsNp(_) => MngId::SubscribeEventsNp,
            MngTlv::PortPropertiesNp(_) => MngId::PortPropertiesNp,
            MngTlv::PortStatsNp(_) => MngId::PortStatsNp,
            MngTlv::SynchronizationUncertainNp(_) => MngId::SynchronizationUncertainNp,
        })
    }
}

/// Parse the dataField of `id` from the cursor window into a typed
/// record. The window must be bounded to the TLV's declared length;
/// countless lists read until it ends.
pub(crate) fn parse_tlv(id: MngId, cur: &mut Cursor<'_>) -> Result<MngTlv, MngError> {
    macro_rules! rec {
        ($variant:ident, $t:ty) => {{
            let mut d = <$t>::default();
            cur.field(&mut d)?;
            MngTlv::$variant(d)
        }};
    }
    Ok(match id {
        MngId::NullPtpManagement
        | MngId::SaveInNonVolatileStorage
        | MngId::ResetNonVolatileStorage
        | MngId::FaultLogReset
        | MngId::EnablePort
        | MngId::DisablePort => MngTlv::Empty,
        MngId::ClockDescription => rec!(ClockDescription, ClockDescriptionTlv),
        MngId::UserDescription => rec!(UserDescription, UserDescriptionTlv),
        MngId::Initialize => rec!(Initialize, InitializeTlv),
        MngId::FaultLog => rec!(FaultLog, FaultLogTlv),
        MngId::DefaultDataSet => rec!(DefaultDataSet, DefaultDataSetTlv),
        MngId::CurrentDataSet => rec!(CurrentDataSet, CurrentDataSetTlv),
        MngId::ParentDataSet => rec!(ParentDataSet, ParentDataSetTlv),
        MngId::TimePropertiesDataSet => rec!(TimePropertiesDataSet, TimePropertiesDataSetTlv),
        MngId::PortDataSet => rec!(PortDataSet, PortDataSetTlv),
        MngId::Priority1 => rec!(Priority1, Priority1Tlv),
        MngId::Priority2 => rec!(Priority2, Priority2Tlv),
        MngId::Domain => rec!(Domain, DomainTlv),
        MngId::SlaveOnly => rec!(SlaveOnly, SlaveOnlyTlv),
        MngId::LogAnnounceInterval => rec!(LogAnnounceInterval, LogAnnounceIntervalTlv),
        MngId::AnnounceReceiptTimeout => rec!(AnnounceReceiptTimeout, AnnounceReceiptTimeoutTlv),
        MngId::LogSyncInterval => rec!(LogSyncInterval, LogSyncIntervalTlv),
        MngId::VersionNumber => rec!(VersionNumber, VersionNumberTlv),
        MngId::Time => rec!(Time, TimeTlv),
        MngId::ClockAccuracy => rec!(ClockAccuracy, ClockAccuracyTlv),
        MngId::UtcProperties => rec!(UtcProperties, UtcPropertiesTlv),
        MngId::TraceabilityProperties => rec!(TraceabilityProperties, TraceabilityPropertiesTlv),
        MngId::TimescaleProperties => rec!(TimescaleProperties, TimescalePropertiesTlv),
        MngId::UnicastNegotiationEnable => {
            rec!(UnicastNegotiationEnable, UnicastNegotiationEnableTlv)
        }
        MngId::PathTraceList => rec!(PathTraceList, PathTraceListTlv),
        MngId::PathTraceEnable => rec!(PathTraceEnable, PathTraceEnableTlv),
        MngId::GrandmasterClusterTable => {
            rec!(GrandmasterClusterTable, GrandmasterClusterTableTlv)
        }
        MngId::UnicastMasterTable => rec!(UnicastMasterTable, UnicastMasterTableTlv),
        MngId::UnicastMasterMaxTableSize => {
            rec!(UnicastMasterMaxTableSize, UnicastMasterMaxTableSizeTlv)
        }
        MngId::AcceptableMasterTable => rec!(AcceptableMasterTable, AcceptableMasterTableTlv),
        MngId::AcceptableMasterTableEnabled => {
            rec!(AcceptableMasterTableEnabled, AcceptableMasterTableEnabledTlv)
        }
        MngId::AcceptableMasterMaxTableSize => {
            rec!(AcceptableMasterMaxTableSize, AcceptableMasterMaxTableSizeTlv)
        }
        MngId::AlternateMaster => rec!(AlternateMaster, AlternateMasterTlv),
        MngId::AlternateTimeOffsetEnable => {
            rec!(AlternateTimeOffsetEnable, AlternateTimeOffsetEnableTlv)
        }
        MngId::AlternateTimeOffsetName => {
            rec!(AlternateTimeOffsetName, AlternateTimeOffsetNameTlv)
        }
        MngId::AlternateTimeOffsetMaxKey => {
            rec!(AlternateTimeOffsetMaxKey, AlternateTimeOffsetMaxKeyTlv)
        }
        MngId::AlternateTimeOffsetProperties => {
            rec!(AlternateTimeOffsetProperties, AlternateTimeOffsetPropertiesTlv)
        }
        MngId::TransparentClockPortDataSet => {
            rec!(TransparentClockPortDataSet, TransparentClockPortDataSetTlv)
        }
        MngId::LogMinPdelayReqInterval => {
            rec!(LogMinPdelayReqInterval, LogMinPdelayReqIntervalTlv)
        }
        MngId::TransparentClockDefaultDataSet => {
            rec!(TransparentClockDefaultDataSet, TransparentClockDefaultDataSetTlv)
        }
        MngId::PrimaryDomain => rec!(PrimaryDomain, PrimaryDomainTlv),
        MngId::DelayMechanism => rec!(DelayMechanism, DelayMechanismTlv),
        MngId::ExternalPortConfigurationEnabled => {
            rec!(ExternalPortConfigurationEnabled, ExternalPortConfigurationEnabledTlv)
        }
        MngId::MasterOnly => rec!(MasterOnly, MasterOnlyTlv),
        MngId::HoldoverUpgradeEnable => rec!(HoldoverUpgradeEnable, HoldoverUpgradeEnableTlv),
        MngId::ExtPortConfigPortDataSet => {
            rec!(ExtPortConfigPortDataSet, ExtPortConfigPortDataSetTlv)
        }
        MngId::TimeStatusNp => rec!(TimeStatusNp, TimeStatusNpTlv),
        MngId::GrandmasterSettingsNp => rec!(GrandmasterSettingsNp, GrandmasterSettingsNpTlv),
        MngId::PortDataSetNp => rec!(PortDataSetNp, PortDataSetNpTlv),
        MngId::SubscribeEventsNp => rec!(SubscribeEventsNp, SubscribeEventsNpTlv),
        MngId::PortPropertiesNp => rec!(PortPropertiesNp, PortPropertiesNpTlv),
        MngId::PortStatsNp => rec!(PortStatsNp, PortStatsNpTlv),
        MngId::SynchronizationUncertainNp => {
            rec!(SynchronizationUncertainNp, SynchronizationUncertainNpTlv)
        }
    })
}

/// Serialize a typed record into the cursor.
pub(crate) fn build_tlv(cur: &mut Cursor<'_>, data: &mut MngTlv) -> Result<(), MngError> {
    match data {
        MngTlv::Empty => Ok(()),
        MngTlv::ClockDescription(d) => cur.field(d),
        MngTlv::UserDescription(d) => cur.field(d),
        MngTlv::Initialize(d) => cur.field(d),
        MngTlv::FaultLog(d) => cur.field(d),
        MngTlv::DefaultDataSet(d) => cur.field(d),
        MngTlv::CurrentDataSet(d) => cur.field(d),
        MngTlv::ParentDataSet(d) => cur.field(d),
        MngTlv::TimePropertiesDataSet(d) => cur.field(d),
        MngTlv::PortDataSet(d) => cur.field(d),
        MngTlv::Priority1(d) => cur.field(d),
        MngTlv::Priority2(d) => cur.field(d),
        MngTlv::Domain(d) => cur.field(d),
        MngTlv::SlaveOnly(d) => cur.field(d),
        MngTlv::LogAnnounceInterval(d) => cur.field(d),
        MngTlv::AnnounceReceiptTimeout(d) => cur.field(d),
        MngTlv::LogSyncInterval(d) => cur.field(d),
        MngTlv::VersionNumber(d) => cur.field(d),
        MngTlv::Time(d) => cur.field(d),
        MngTlv::ClockAccuracy(d) => cur.field(d),
        MngTlv::UtcProperties(d) => cur.field(d),
        MngTlv::TraceabilityProperties(d) => cur.field(d),
        MngTlv::TimescaleProperties(d) => cur.field(d),
        MngTlv::UnicastNegotiationEnable(d) => cur.field(d),
        MngTlv::PathTraceList(d) => cur.field(d),
        MngTlv::PathTraceEnable(d) => cur.field(d),
        MngTlv::GrandmasterClusterTable(d) => cur.field(d),
        MngTlv::UnicastMasterTable(d) => cur.field(d),
        MngTlv::UnicastMasterMaxTableSize(d) => cur.field(d),
        MngTlv::AcceptableMasterTable(d) => cur.field(d),
        MngTlv::AcceptableMasterTableEnabled(d) => cur.field(d),
        MngTlv::AcceptableMasterMaxTableSize(d) => cur.field(d),
        MngTlv::AlternateMaster(d) => cur.field(d),
        MngTlv::AlternateTimeOffsetEnable(d) => cur.field(d),
        MngTlv::AlternateTimeOffsetName(d) => cur.field(d),
        MngTlv::AlternateTimeOffsetMaxKey(d) => cur.field(d),
        MngTlv::AlternateTimeOffsetProperties(d) => cur.field(d),
        MngTlv::TransparentClockPortDataSet(d) => cur.field(d),
        MngTlv::LogMinPdelayReqInterval(d) => cur.field(d),
        MngTlv::TransparentClockDefaultDataSet(d) => cur.field(d),
        MngTlv::PrimaryDomain(d) => cur.field(d),
        MngTlv::DelayMechanism(d) => cur.field(d),
        MngTlv::ExternalPortConfigurationEnabled(d) => cur.field(d),
        MngTlv::MasterOnly(d) => cur.field(d),
        MngTlv::HoldoverUpgradeEnable(d) => cur.field(d),
        MngTlv::ExtPortConfigPortDataSet(d) => cur.field(d),
        MngTlv::TimeStatusNp(d) => cur.field(d),
        MngTlv::GrandmasterSettingsNp(d) => cur.field(d),
        MngTlv::PortDataSetNp(d) => cur.field(d),
        MngTlv::SubscribeEventsNp(d) => cur.field(d),
        MngTlv::PortPropertiesNp(d) => cur.field(d),
        MngTlv::PortStatsNp(d) => cur.field(d),
        MngTlv::SynchronizationUncertainNp(d) => cur.field(d),
    }
}

/// The dataField size a SET build of `id` with `data` will produce,
/// before the framer's odd-length pad.
///
/// Fixed-size IDs use the registry value; variable-size IDs compute the
/// size from the record contents. A record that does not belong to `id`
/// is rejected.
pub(crate) fn data_field_size(id: MngId, data: &MngTlv) -> Result<usize, MngError> {
    if data.mng_id() != Some(id) {
        return Err(MngError::InvalidId);
    }
    match id.size() {
        MngSize::Empty => Ok(0),
        MngSize::Fixed(n) => Ok(n),
        MngSize::Variable => Ok(match data {
            MngTlv::ClockDescription(d) => d.data_size(),
            MngTlv::UserDescription(d) => d.user_description.size(),
            MngTlv::FaultLog(d) => {
                2 + d.fault_records.iter().map(FaultRecord::size).sum::<usize>()
            }
            MngTlv::PathTraceList(d) => d.path_sequence.len() * ClockIdentity::WIRE_SIZE,
            MngTlv::GrandmasterClusterTable(d) => {
                2 + d.port_addresses.iter().map(PortAddress::size).sum::<usize>()
            }
            MngTlv::UnicastMasterTable(d) => {
                3 + d.port_addresses.iter().map(PortAddress::size).sum::<usize>()
            }
            MngTlv::AcceptableMasterTable(d) => 2 + d.list.len() * AcceptableMaster::WIRE_SIZE,
            MngTlv::AlternateTimeOffsetName(d) => 1 + d.display_name.size(),
            MngTlv::PortPropertiesNp(d) => {
                PortIdentity::WIRE_SIZE + 2 + d.interface.size()
            }
            _ => return Err(MngError::Unsupported),
        }),
    }
}
