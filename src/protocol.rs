//! Types and constants that precisely match the PTP management wire
//! specification.
//!
//! Provides the primitive protocol aggregates (identities, timestamps,
//! intervals, texts, addresses) shared by the management and signaling
//! TLV payloads, the protocol enumerations with their stable textual
//! tokens, and the flag bit constants of the time-properties family.
//!
//! Documentation is largely derived from IEEE Std 1588-2008 with
//! selected updates from IEEE Std 1588-2019.

use core::fmt;

use crate::cursor::{Cursor, Wire};
use crate::error::MngError;
use crate::octets::Octets;

/// Minimum value of a signed 48-bit protocol integer.
pub const INT48_MIN: i64 = -0x8000_0000_0000;
/// Maximum value of a signed 48-bit protocol integer.
pub const INT48_MAX: i64 = 0x7fff_ffff_ffff;
/// Maximum value of an unsigned 48-bit protocol integer.
pub const UINT48_MAX: u64 = 0xffff_ffff_ffff;

// Clock time properties bit mask.

/// The last minute of the current UTC day contains 61 seconds.
pub const F_LI_61: u8 = 1 << 0;
/// The last minute of the current UTC day contains 59 seconds.
pub const F_LI_59: u8 = 1 << 1;
/// Current UTC offset is valid.
pub const F_UTCV: u8 = 1 << 2;
/// The timescale of the grandmaster PTP instance is PTP.
pub const F_PTP: u8 = 1 << 3;
/// Timescale is traceable to a primary reference.
pub const F_TTRA: u8 = 1 << 4;
/// The frequency determining the timescale is traceable to a primary
/// reference.
pub const F_FTRA: u8 = 1 << 5;

// PTP clock type bit mask. A PTP clock can act as more than one type.

/// Ordinary clock.
pub const CLOCK_TYPE_ORDINARY: u16 = 0x8000;
/// Boundary clock.
pub const CLOCK_TYPE_BOUNDARY: u16 = 0x4000;
/// Peer-to-peer transparent clock.
pub const CLOCK_TYPE_P2P_TRANSPARENT: u16 = 0x2000;
/// End-to-end transparent clock.
pub const CLOCK_TYPE_E2E_TRANSPARENT: u16 = 0x1000;
/// Management node (deprecated).
pub const CLOCK_TYPE_MANAGEMENT: u16 = 0x0800;

// Delay mechanism values carried as a raw octet.

/// End to end, delay request-response.
pub const DELAY_MECHANISM_E2E: u8 = 1;
/// Peer to peer, peer delay.
pub const DELAY_MECHANISM_P2P: u8 = 2;
/// Delay mechanism disabled.
pub const DELAY_MECHANISM_DISABLED: u8 = 0xfe;

/// PTP message types, carried in the low nibble of the first header
/// octet.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MsgType {
    /// Synchronization event message.
    #[default]
    Sync = 0,
    /// Delay request event message.
    DelayReq = 1,
    /// Peer delay request event message.
    PdelayReq = 2,
    /// Peer delay response event message.
    PdelayResp = 3,
    /// Follow up message.
    FollowUp = 0x8,
    /// Delay response message.
    DelayResp = 0x9,
    /// Peer delay response follow up message.
    PdelayRespFollowUp = 0xa,
    /// Announce message.
    Announce = 0xb,
    /// Signaling message.
    Signaling = 0xc,
    /// Management message.
    Management = 0xd,
}

impl TryFrom<u8> for MsgType {
    type Error = MngError;

    fn try_from(value: u8) -> Result<Self, MngError> {
        match value {
            0 => Ok(MsgType::Sync),
            1 => Ok(MsgType::DelayReq),
            2 => Ok(MsgType::PdelayReq),
            3 => Ok(MsgType::PdelayResp),
            0x8 => Ok(MsgType::FollowUp),
            0x9 => Ok(MsgType::DelayResp),
            0xa => Ok(MsgType::PdelayRespFollowUp),
            0xb => Ok(MsgType::Announce),
            0xc => Ok(MsgType::Signaling),
            0xd => Ok(MsgType::Management),
            _ => Err(MngError::Val {
                field: "messageType",
            }),
        }
    }
}

impl MsgType {
    /// Stable token for the message type.
    pub fn as_str(self) -> &'static str {
        match self {
            MsgType::Sync => "Sync",
            MsgType::DelayReq => "Delay_Req",
            MsgType::PdelayReq => "Pdelay_Req",
            MsgType::PdelayResp => "Pdelay_Resp",
            MsgType::FollowUp => "Follow_Up",
            MsgType::DelayResp => "Delay_Resp",
            MsgType::PdelayRespFollowUp => "Pdelay_Resp_Follow_Up",
            MsgType::Announce => "Announce",
            MsgType::Signaling => "Signaling",
            MsgType::Management => "Management",
        }
    }
}

/// PTP management action field.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ActionField {
    /// Send a get message.
    #[default]
    Get = 0,
    /// Send a set message.
    Set = 1,
    /// Receive a response to a get or a set message.
    Response = 2,
    /// Send a command message.
    Command = 3,
    /// Receive an acknowledge to a command.
    Acknowledge = 4,
}

impl TryFrom<u8> for ActionField {
    type Error = MngError;

    fn try_from(value: u8) -> Result<Self, MngError> {
        match value {
            0 => Ok(ActionField::Get),
            1 => Ok(ActionField::Set),
            2 => Ok(ActionField::Response),
            3 => Ok(ActionField::Command),
            4 => Ok(ActionField::Acknowledge),
            _ => Err(MngError::Val {
                field: "actionField",
            }),
        }
    }
}

impl ActionField {
    /// Stable token for the action.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionField::Get => "GET",
            ActionField::Set => "SET",
            ActionField::Response => "RESPONSE",
            ActionField::Command => "COMMAND",
            ActionField::Acknowledge => "ACKNOWLEDGE",
        }
    }
}

/// PTP message TLV types, with the signaling TLVs of IEEE Std 1588-2019.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TlvType {
    /// Management TLV.
    Management = 0x0001,
    /// Management error TLV.
    ManagementErrorStatus = 0x0002,
    /// Organization extension.
    OrganizationExtension = 0x0003,
    /// Request unicast transmission.
    RequestUnicastTransmission = 0x0004,
    /// Grant unicast transmission.
    GrantUnicastTransmission = 0x0005,
    /// Cancel unicast transmission.
    CancelUnicastTransmission = 0x0006,
    /// Acknowledge cancel unicast transmission.
    AcknowledgeCancelUnicastTransmission = 0x0007,
    /// Path trace.
    PathTrace = 0x0008,
    /// Alternate time offset indicator.
    AlternateTimeOffsetIndicator = 0x0009,
    /// Organization extension, propagated by boundary clocks.
    OrganizationExtensionPropagate = 0x4000,
    /// Enhanced accuracy metrics.
    EnhancedAccuracyMetrics = 0x4001,
    /// Organization extension, not propagated.
    OrganizationExtensionDoNotPropagate = 0x8000,
    /// Layer 1 synchronization.
    L1Sync = 0x8001,
    /// Port communication availability.
    PortCommunicationAvailability = 0x8002,
    /// Protocol address.
    ProtocolAddress = 0x8003,
    /// Client receive sync timing data.
    SlaveRxSyncTimingData = 0x8004,
    /// Client receive sync computed data.
    SlaveRxSyncComputedData = 0x8005,
    /// Client transmit event timestamps.
    SlaveTxEventTimestamps = 0x8006,
    /// Cumulative rate ratio.
    CumulativeRateRatio = 0x8007,
    /// Padding TLV, ignored.
    TlvPad = 0x8008,
    /// Authentication.
    Authentication = 0x8009,
    /// Client delay timing data, linuxptp experimental value.
    SlaveDelayTimingDataNp = 0x7f00,
}

impl TryFrom<u16> for TlvType {
    type Error = MngError;

    fn try_from(value: u16) -> Result<Self, MngError> {
        match value {
            0x0001 => Ok(TlvType::Management),
            0x0002 => Ok(TlvType::ManagementErrorStatus),
            0x0003 => Ok(TlvType::OrganizationExtension),
            0x0004 => Ok(TlvType::RequestUnicastTransmission),
            0x0005 => Ok(TlvType::GrantUnicastTransmission),
            0x0006 => Ok(TlvType::CancelUnicastTransmission),
            0x0007 => Ok(TlvType::AcknowledgeCancelUnicastTransmission),
            0x0008 => Ok(TlvType::PathTrace),
            0x0009 => Ok(TlvType::AlternateTimeOffsetIndicator),
            0x4000 => Ok(TlvType::OrganizationExtensionPropagate),
            0x4001 => Ok(TlvType::EnhancedAccuracyMetrics),
            0x8000 => Ok(TlvType::OrganizationExtensionDoNotPropagate),
            0x8001 => Ok(TlvType::L1Sync),
            0x8002 => Ok(TlvType::PortCommunicationAvailability),
            0x8003 => Ok(TlvType::ProtocolAddress),
            0x8004 => Ok(TlvType::SlaveRxSyncTimingData),
            0x8005 => Ok(TlvType::SlaveRxSyncComputedData),
            0x8006 => Ok(TlvType::SlaveTxEventTimestamps),
            0x8007 => Ok(TlvType::CumulativeRateRatio),
            0x8008 => Ok(TlvType::TlvPad),
            0x8009 => Ok(TlvType::Authentication),
            0x7f00 => Ok(TlvType::SlaveDelayTimingDataNp),
            _ => Err(MngError::Val { field: "tlvType" }),
        }
    }
}

impl TlvType {
    /// Stable token for the TLV type.
    pub fn as_str(self) -> &'static str {
        match self {
            TlvType::Management => "MANAGEMENT",
            TlvType::ManagementErrorStatus => "MANAGEMENT_ERROR_STATUS",
            TlvType::OrganizationExtension => "ORGANIZATION_EXTENSION",
            TlvType::RequestUnicastTransmission => "REQUEST_UNICAST_TRANSMISSION",
            TlvType::GrantUnicastTransmission => "GRANT_UNICAST_TRANSMISSION",
            TlvType::CancelUnicastTransmission => "CANCEL_UNICAST_TRANSMISSION",
            TlvType::AcknowledgeCancelUnicastTransmission => {
                "ACKNOWLEDGE_CANCEL_UNICAST_TRANSMISSION"
            }
            TlvType::PathTrace => "PATH_TRACE",
            TlvType::AlternateTimeOffsetIndicator => "ALTERNATE_TIME_OFFSET_INDICATOR",
            TlvType::OrganizationExtensionPropagate => "ORGANIZATION_EXTENSION_PROPAGATE",
            TlvType::EnhancedAccuracyMetrics => "ENHANCED_ACCURACY_METRICS",
            TlvType::OrganizationExtensionDoNotPropagate => {
                "ORGANIZATION_EXTENSION_DO_NOT_PROPAGATE"
            }
            TlvType::L1Sync => "L1_SYNC",
            TlvType::PortCommunicationAvailability => "PORT_COMMUNICATION_AVAILABILITY",
            TlvType::ProtocolAddress => "PROTOCOL_ADDRESS",
            TlvType::SlaveRxSyncTimingData => "SLAVE_RX_SYNC_TIMING_DATA",
            TlvType::SlaveRxSyncComputedData => "SLAVE_RX_SYNC_COMPUTED_DATA",
            TlvType::SlaveTxEventTimestamps => "SLAVE_TX_EVENT_TIMESTAMPS",
            TlvType::CumulativeRateRatio => "CUMULATIVE_RATE_RATIO",
            TlvType::TlvPad => "PAD",
            TlvType::Authentication => "AUTHENTICATION",
            TlvType::SlaveDelayTimingDataNp => "SLAVE_DELAY_TIMING_DATA_NP",
        }
    }
}

/// Token for a raw TLV type code; `"unknown"` for undefined codes.
pub fn tlv_type_str(code: u16) -> &'static str {
    match TlvType::try_from(code) {
        Ok(t) => t.as_str(),
        Err(_) => "unknown",
    }
}

/// PTP management error IDs carried in a MANAGEMENT_ERROR_STATUS TLV.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ManagementErrorId {
    /// Response is too big.
    ResponseTooBig = 0x0001,
    /// No such id.
    NoSuchId = 0x0002,
    /// Wrong length.
    WrongLength = 0x0003,
    /// Wrong value.
    WrongValue = 0x0004,
    /// Not setable.
    NotSetable = 0x0005,
    /// Not supported.
    NotSupported = 0x0006,
    /// General error.
    GeneralError = 0xfffe,
}

impl TryFrom<u16> for ManagementErrorId {
    type Error = MngError;

    fn try_from(value: u16) -> Result<Self, MngError> {
        match value {
            0x0001 => Ok(ManagementErrorId::ResponseTooBig),
            0x0002 => Ok(ManagementErrorId::NoSuchId),
            0x0003 => Ok(ManagementErrorId::WrongLength),
            0x0004 => Ok(ManagementErrorId::WrongValue),
            0x0005 => Ok(ManagementErrorId::NotSetable),
            0x0006 => Ok(ManagementErrorId::NotSupported),
            0xfffe => Ok(ManagementErrorId::GeneralError),
            _ => Err(MngError::Val {
                field: "managementErrorId",
            }),
        }
    }
}

impl ManagementErrorId {
    /// Stable token for the management error ID.
    pub fn as_str(self) -> &'static str {
        match self {
            ManagementErrorId::ResponseTooBig => "RESPONSE_TOO_BIG",
            ManagementErrorId::NoSuchId => "NO_SUCH_ID",
            ManagementErrorId::WrongLength => "WRONG_LENGTH",
            ManagementErrorId::WrongValue => "WRONG_VALUE",
            ManagementErrorId::NotSetable => "NOT_SETABLE",
            ManagementErrorId::NotSupported => "NOT_SUPPORTED",
            ManagementErrorId::GeneralError => "GENERAL_ERROR",
        }
    }
}

/// Token for a raw management error code; `"unknown"` for undefined
/// codes.
pub fn err_id_str(code: u16) -> &'static str {
    match ManagementErrorId::try_from(code) {
        Ok(e) => e.as_str(),
        Err(_) => "unknown",
    }
}

/// PTP network protocols used in a [`PortAddress`].
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum NetworkProtocol {
    /// UDP over IP version 4.
    #[default]
    UdpIpv4 = 1,
    /// UDP over IP version 6.
    UdpIpv6 = 2,
    /// Raw Ethernet using IEEE 802.3.
    Ieee802_3 = 3,
    /// DeviceNet.
    DeviceNet = 4,
    /// ControlNet.
    ControlNet = 5,
    /// PROFINET.
    Profinet = 6,
}

impl TryFrom<u16> for NetworkProtocol {
    type Error = MngError;

    fn try_from(value: u16) -> Result<Self, MngError> {
        match value {
            1 => Ok(NetworkProtocol::UdpIpv4),
            2 => Ok(NetworkProtocol::UdpIpv6),
            3 => Ok(NetworkProtocol::Ieee802_3),
            4 => Ok(NetworkProtocol::DeviceNet),
            5 => Ok(NetworkProtocol::ControlNet),
            6 => Ok(NetworkProtocol::Profinet),
            _ => Err(MngError::Val {
                field: "networkProtocol",
            }),
        }
    }
}

impl NetworkProtocol {
    /// Stable token for the network protocol.
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkProtocol::UdpIpv4 => "UDP_IPv4",
            NetworkProtocol::UdpIpv6 => "UDP_IPv6",
            NetworkProtocol::Ieee802_3 => "IEEE_802_3",
            NetworkProtocol::DeviceNet => "DeviceNet",
            NetworkProtocol::ControlNet => "ControlNet",
            NetworkProtocol::Profinet => "PROFINET",
        }
    }
}

/// PTP clock accuracy.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ClockAccuracy {
    /// Accurate within 1 picosecond.
    Within1Ps = 0x17,
    /// Accurate within 2.5 picoseconds.
    Within2p5Ps = 0x18,
    /// Accurate within 10 picoseconds.
    Within10Ps = 0x19,
    /// Accurate within 25 picoseconds.
    Within25Ps = 0x1a,
    /// Accurate within 100 picoseconds.
    Within100Ps = 0x1b,
    /// Accurate within 250 picoseconds.
    Within250Ps = 0x1c,
    /// Accurate within 1 nanosecond.
    Within1Ns = 0x1d,
    /// Accurate within 2.5 nanoseconds.
    Within2p5Ns = 0x1e,
    /// Accurate within 10 nanoseconds.
    Within10Ns = 0x1f,
    /// Accurate within 25 nanoseconds.
    Within25Ns = 0x20,
    /// Accurate within 100 nanoseconds.
    Within100Ns = 0x21,
    /// Accurate within 250 nanoseconds.
    Within250Ns = 0x22,
    /// Accurate within 1 microsecond.
    Within1Us = 0x23,
    /// Accurate within 2.5 microseconds.
    Within2p5Us = 0x24,
    /// Accurate within 10 microseconds.
    Within10Us = 0x25,
    /// Accurate within 25 microseconds.
    Within25Us = 0x26,
    /// Accurate within 100 microseconds.
    Within100Us = 0x27,
    /// Accurate within 250 microseconds.
    Within250Us = 0x28,
    /// Accurate within 1 millisecond.
    Within1Ms = 0x29,
    /// Accurate within 2.5 milliseconds.
    Within2p5Ms = 0x2a,
    /// Accurate within 10 milliseconds.
    Within10Ms = 0x2b,
    /// Accurate within 25 milliseconds.
    Within25Ms = 0x2c,
    /// Accurate within 100 milliseconds.
    Within100Ms = 0x2d,
    /// Accurate within 250 milliseconds.
    Within250Ms = 0x2e,
    /// Accurate within 1 second.
    Within1S = 0x2f,
    /// Accurate within 10 seconds.
    Within10S = 0x30,
    /// Accurate to worse than 10 seconds.
    MoreThan10S = 0x31,
    /// Accuracy unknown.
    #[default]
    Unknown = 0xef,
}

impl TryFrom<u8> for ClockAccuracy {
    type Error = MngError;

    fn try_from(value: u8) -> Result<Self, MngError> {
        match value {
            0x17 => Ok(ClockAccuracy::Within1Ps),
            0x18 => Ok(ClockAccuracy::Within2p5Ps),
            0x19 => Ok(ClockAccuracy::Within10Ps),
            0x1a => Ok(ClockAccuracy::Within25Ps),
            0x1b => Ok(ClockAccuracy::Within100Ps),
            0x1c => Ok(ClockAccuracy::Within250Ps),
            0x1d => Ok(ClockAccuracy::Within1Ns),
            0x1e => Ok(ClockAccuracy::Within2p5Ns),
            0x1f => Ok(ClockAccuracy::Within10Ns),
            0x20 => Ok(ClockAccuracy::Within25Ns),
            0x21 => Ok(ClockAccuracy::Within100Ns),
            0x22 => Ok(ClockAccuracy::Within250Ns),
            0x23 => Ok(ClockAccuracy::Within1Us),
            0x24 => Ok(ClockAccuracy::Within2p5Us),
            0x25 => Ok(ClockAccuracy::Within10Us),
            0x26 => Ok(ClockAccuracy::Within25Us),
            0x27 => Ok(ClockAccuracy::Within100Us),
            0x28 => Ok(ClockAccuracy::Within250Us),
            0x29 => Ok(ClockAccuracy::Within1Ms),
            0x2a => Ok(ClockAccuracy::Within2p5Ms),
            0x2b => Ok(ClockAccuracy::Within10Ms),
            0x2c => Ok(ClockAccuracy::Within25Ms),
            0x2d => Ok(ClockAccuracy::Within100Ms),
            0x2e => Ok(ClockAccuracy::Within250Ms),
            0x2f => Ok(ClockAccuracy::Within1S),
            0x30 => Ok(ClockAccuracy::Within10S),
            0x31 => Ok(ClockAccuracy::MoreThan10S),
            0xef => Ok(ClockAccuracy::Unknown),
            _ => Err(MngError::Val {
                field: "clockAccuracy",
            }),
        }
    }
}

impl ClockAccuracy {
    /// Stable token for the clock accuracy.
    pub fn as_str(self) -> &'static str {
        match self {
            ClockAccuracy::Within1Ps => "Accurate_within_1ps",
            ClockAccuracy::Within2p5Ps => "Accurate_within_2.5ps",
            ClockAccuracy::Within10Ps => "Accurate_within_10ps",
            ClockAccuracy::Within25Ps => "Accurate_within_25ps",
            ClockAccuracy::Within100Ps => "Accurate_within_100ps",
            ClockAccuracy::Within250Ps => "Accurate_within_250ps",
            ClockAccuracy::Within1Ns => "Accurate_within_1ns",
            ClockAccuracy::Within2p5Ns => "Accurate_within_2.5ns",
            ClockAccuracy::Within10Ns => "Accurate_within_10ns",
            ClockAccuracy::Within25Ns => "Accurate_within_25ns",
            ClockAccuracy::Within100Ns => "Accurate_within_100ns",
            ClockAccuracy::Within250Ns => "Accurate_within_250ns",
            ClockAccuracy::Within1Us => "Accurate_within_1us",
            ClockAccuracy::Within2p5Us => "Accurate_within_2.5us",
            ClockAccuracy::Within10Us => "Accurate_within_10us",
            ClockAccuracy::Within25Us => "Accurate_within_25us",
            ClockAccuracy::Within100Us => "Accurate_within_100us",
            ClockAccuracy::Within250Us => "Accurate_within_250us",
            ClockAccuracy::Within1Ms => "Accurate_within_1ms",
            ClockAccuracy::Within2p5Ms => "Accurate_within_2.5ms",
            ClockAccuracy::Within10Ms => "Accurate_within_10ms",
            ClockAccuracy::Within25Ms => "Accurate_within_25ms",
            ClockAccuracy::Within100Ms => "Accurate_within_100ms",
            ClockAccuracy::Within250Ms => "Accurate_within_250ms",
            ClockAccuracy::Within1S => "Accurate_within_1s",
            ClockAccuracy::Within10S => "Accurate_within_10s",
            ClockAccuracy::MoreThan10S => "Accurate_more_10s",
            ClockAccuracy::Unknown => "Accurate_Unknown",
        }
    }
}

/// Fault record severity code.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FaultSeverity {
    /// System is unusable.
    Emergency = 0,
    /// Immediate action needed.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational messages.
    #[default]
    Informational = 6,
    /// Debug-level messages.
    Debug = 7,
}

impl TryFrom<u8> for FaultSeverity {
    type Error = MngError;

    fn try_from(value: u8) -> Result<Self, MngError> {
        match value {
            0 => Ok(FaultSeverity::Emergency),
            1 => Ok(FaultSeverity::Alert),
            2 => Ok(FaultSeverity::Critical),
            3 => Ok(FaultSeverity::Error),
            4 => Ok(FaultSeverity::Warning),
            5 => Ok(FaultSeverity::Notice),
            6 => Ok(FaultSeverity::Informational),
            7 => Ok(FaultSeverity::Debug),
            _ => Err(MngError::Val {
                field: "severityCode",
            }),
        }
    }
}

impl FaultSeverity {
    /// Stable token for the severity code.
    pub fn as_str(self) -> &'static str {
        match self {
            FaultSeverity::Emergency => "Emergency",
            FaultSeverity::Alert => "Alert",
            FaultSeverity::Critical => "Critical",
            FaultSeverity::Error => "Error",
            FaultSeverity::Warning => "Warning",
            FaultSeverity::Notice => "Notice",
            FaultSeverity::Informational => "Informational",
            FaultSeverity::Debug => "Debug",
        }
    }
}

/// Time source type.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimeSource {
    /// Atomic clock.
    AtomicClock = 0x10,
    /// Satellite navigation.
    Gnss = 0x20,
    /// Terrestrial radio.
    TerrestrialRadio = 0x30,
    /// Serial time code.
    SerialTimeCode = 0x39,
    /// PTP of a different domain.
    Ptp = 0x40,
    /// IP network time protocol.
    Ntp = 0x50,
    /// Manually set.
    HandSet = 0x60,
    /// Other.
    Other = 0x90,
    /// Internal oscillator.
    #[default]
    InternalOscillator = 0xa0,
}

impl TryFrom<u8> for TimeSource {
    type Error = MngError;

    fn try_from(value: u8) -> Result<Self, MngError> {
        match value {
            0x10 => Ok(TimeSource::AtomicClock),
            0x20 => Ok(TimeSource::Gnss),
            0x30 => Ok(TimeSource::TerrestrialRadio),
            0x39 => Ok(TimeSource::SerialTimeCode),
            0x40 => Ok(TimeSource::Ptp),
            0x50 => Ok(TimeSource::Ntp),
            0x60 => Ok(TimeSource::HandSet),
            0x90 => Ok(TimeSource::Other),
            0xa0 => Ok(TimeSource::InternalOscillator),
            _ => Err(MngError::Val {
                field: "timeSource",
            }),
        }
    }
}

impl TimeSource {
    /// Stable token for the time source.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSource::AtomicClock => "ATOMIC_CLOCK",
            TimeSource::Gnss => "GNSS",
            TimeSource::TerrestrialRadio => "TERRESTRIAL_RADIO",
            TimeSource::SerialTimeCode => "SERIAL_TIME_CODE",
            TimeSource::Ptp => "PTP",
            TimeSource::Ntp => "NTP",
            TimeSource::HandSet => "HAND_SET",
            TimeSource::Other => "OTHER",
            TimeSource::InternalOscillator => "INTERNAL_OSCILLATOR",
        }
    }
}

/// Port state.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PortState {
    /// Initializing.
    #[default]
    Initializing = 1,
    /// Faulty.
    Faulty = 2,
    /// Disabled.
    Disabled = 3,
    /// Listening.
    Listening = 4,
    /// Pre master.
    PreMaster = 5,
    /// Master, the time source of the domain.
    Master = 6,
    /// Passive.
    Passive = 7,
    /// Uncalibrated.
    Uncalibrated = 8,
    /// Slave, synchronized to a master.
    Slave = 9,
}

impl TryFrom<u8> for PortState {
    type Error = MngError;

    fn try_from(value: u8) -> Result<Self, MngError> {
        match value {
            1 => Ok(PortState::Initializing),
            2 => Ok(PortState::Faulty),
            3 => Ok(PortState::Disabled),
            4 => Ok(PortState::Listening),
            5 => Ok(PortState::PreMaster),
            6 => Ok(PortState::Master),
            7 => Ok(PortState::Passive),
            8 => Ok(PortState::Uncalibrated),
            9 => Ok(PortState::Slave),
            _ => Err(MngError::Val {
                field: "portState",
            }),
        }
    }
}

impl PortState {
    /// Stable token for the port state.
    pub fn as_str(self) -> &'static str {
        match self {
            PortState::Initializing => "INITIALIZING",
            PortState::Faulty => "FAULTY",
            PortState::Disabled => "DISABLED",
            PortState::Listening => "LISTENING",
            PortState::PreMaster => "PRE_MASTER",
            PortState::Master => "MASTER",
            PortState::Passive => "PASSIVE",
            PortState::Uncalibrated => "UNCALIBRATED",
            PortState::Slave => "SLAVE",
        }
    }
}

/// The underlying Linux timestamping mode the daemon runs with,
/// reported in PORT_PROPERTIES_NP.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LinuxptpTimeStamp {
    /// System clock based, offset maintained by the driver.
    #[default]
    Software = 0,
    /// Network interface has a PTP hardware clock read by the driver.
    Hardware = 1,
    /// Old hardware.
    LegacyHw = 2,
    /// One step PTP, the driver writes the timestamp into the frame.
    OneStep = 3,
    /// One step PTP plus inserting time into Pdelay_Resp.
    P2p1Step = 4,
}

impl TryFrom<u8> for LinuxptpTimeStamp {
    type Error = MngError;

    fn try_from(value: u8) -> Result<Self, MngError> {
        match value {
            0 => Ok(LinuxptpTimeStamp::Software),
            1 => Ok(LinuxptpTimeStamp::Hardware),
            2 => Ok(LinuxptpTimeStamp::LegacyHw),
            3 => Ok(LinuxptpTimeStamp::OneStep),
            4 => Ok(LinuxptpTimeStamp::P2p1Step),
            _ => Err(MngError::Val {
                field: "timestamping",
            }),
        }
    }
}

impl LinuxptpTimeStamp {
    /// Stable token for the timestamping mode.
    pub fn as_str(self) -> &'static str {
        match self {
            LinuxptpTimeStamp::Software => "SOFTWARE",
            LinuxptpTimeStamp::Hardware => "HARDWARE",
            LinuxptpTimeStamp::LegacyHw => "LEGACY_HW",
            LinuxptpTimeStamp::OneStep => "ONESTEP",
            LinuxptpTimeStamp::P2p1Step => "P2P1STEP",
        }
    }
}

/// Token for a single clock-type mask bit; `"unknown"` for bits outside
/// the defined set.
pub fn clock_type_str(bit: u16) -> &'static str {
    match bit {
        CLOCK_TYPE_ORDINARY => "ordinaryClock",
        CLOCK_TYPE_BOUNDARY => "boundaryClock",
        CLOCK_TYPE_P2P_TRANSPARENT => "p2pTransparentClock",
        CLOCK_TYPE_E2E_TRANSPARENT => "e2eTransparentClock",
        CLOCK_TYPE_MANAGEMENT => "management",
        _ => "unknown",
    }
}

/// PTP clock identity: exactly 8 octets.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ClockIdentity(pub [u8; 8]);

impl ClockIdentity {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 8;

    /// The all-ones identity addressing every clock.
    pub const ALL_ONES: ClockIdentity = ClockIdentity([0xff; 8]);
}

impl fmt::Display for ClockIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}{:02x}",
            v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]
        )
    }
}

/// PTP port identity: a clock identity plus a port number.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PortIdentity {
    /// The clock identity.
    pub clock_identity: ClockIdentity,
    /// The port number.
    pub port_number: u16,
}

impl PortIdentity {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 10;

    /// The wildcard identity addressing all ports of all clocks.
    pub const WILDCARD: PortIdentity = PortIdentity {
        clock_identity: ClockIdentity::ALL_ONES,
        port_number: 0xffff,
    };
}

impl fmt::Display for PortIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.clock_identity, self.port_number)
    }
}

/// PTP timestamp: 48-bit seconds and 32-bit nanoseconds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Timestamp {
    /// Seconds, an unsigned 48-bit value.
    pub seconds: u64,
    /// Nanoseconds.
    pub nanoseconds: u32,
}

impl Timestamp {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 10;
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}

/// PTP time interval in scaled nanoseconds (nanoseconds times 2^16).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TimeInterval {
    /// Nanoseconds multiplied by 2^16.
    pub scaled_nanoseconds: i64,
}

impl TimeInterval {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 8;

    /// The interval in nanoseconds as a floating point value.
    pub fn interval(&self) -> f64 {
        self.scaled_nanoseconds as f64 / 0x1_0000 as f64
    }

    /// The interval in nanoseconds truncated toward negative infinity.
    pub fn interval_int(&self) -> i64 {
        self.scaled_nanoseconds >> 16
    }
}

/// PTP clock quality.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ClockQuality {
    /// Clock class.
    pub clock_class: u8,
    /// Clock accuracy.
    pub clock_accuracy: ClockAccuracy,
    /// Variance of the clock's phase, scaled and offset.
    pub offset_scaled_log_variance: u16,
}

impl ClockQuality {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 4;
}

/// PTP text value: a length octet followed by that many UTF-8 bytes.
///
/// The length octet counts text bytes only. Texts are never padded on
/// their own; the enclosing TLV dataField is padded to even length as a
/// whole.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PtpText {
    /// The textual value, at most 255 bytes of UTF-8.
    pub text: String,
}

impl PtpText {
    /// Wire size in bytes: the length octet plus the text bytes.
    pub fn size(&self) -> usize {
        1 + self.text.len()
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for PtpText {
    fn from(s: &str) -> Self {
        PtpText { text: s.to_owned() }
    }
}

impl fmt::Display for PtpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// PTP port address: a network protocol and a protocol-specific address.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct PortAddress {
    /// Network protocol of the address.
    pub network_protocol: NetworkProtocol,
    /// The address octets. The wire length field is derived from this
    /// buffer.
    pub address: Octets,
}

impl PortAddress {
    /// Wire size in bytes: protocol, length and address octets.
    pub fn size(&self) -> usize {
        4 + self.address.len()
    }
}

impl fmt::Display for PortAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address.to_ip() {
            Some(ip) => f.write_str(&ip),
            None => f.write_str(&self.address.to_id()),
        }
    }
}

/// PTP fault record.
///
/// The wire record length field is derived from the contents on build
/// and verified on parse.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FaultRecord {
    /// Timestamp of the fault.
    pub fault_time: Timestamp,
    /// Severity code.
    pub severity_code: FaultSeverity,
    /// Fault name.
    pub fault_name: PtpText,
    /// Fault value.
    pub fault_value: PtpText,
    /// Fault description.
    pub fault_description: PtpText,
}

impl FaultRecord {
    /// Wire size in bytes, including the leading record length field.
    pub fn size(&self) -> usize {
        3 + Timestamp::WIRE_SIZE
            + self.fault_name.size()
            + self.fault_value.size()
            + self.fault_description.size()
    }
}

/// PTP acceptable master table entry.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct AcceptableMaster {
    /// Port identity of the acceptable master.
    pub acceptable_port_identity: PortIdentity,
    /// Alternate priority 1.
    pub alternate_priority1: u8,
}

impl AcceptableMaster {
    /// Wire size in bytes.
    pub const WIRE_SIZE: usize = 11;
}

// Wire implementations for the composite types. Each marshals its
// fields in wire order through the bidirectional cursor, so build and
// parse cannot drift apart.

impl Wire for ClockIdentity {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        cur.bytes(&mut val.0)
    }
}

impl Wire for PortIdentity {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        cur.field(&mut val.clock_identity)?;
        cur.u16(&mut val.port_number)
    }
}

impl Wire for Timestamp {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        cur.u48(&mut val.seconds)?;
        cur.u32(&mut val.nanoseconds)
    }
}

impl Wire for TimeInterval {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        cur.i64(&mut val.scaled_nanoseconds)
    }
}

impl Wire for ClockQuality {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        cur.u8(&mut val.clock_class)?;
        cur.field(&mut val.clock_accuracy)?;
        cur.u16(&mut val.offset_scaled_log_variance)
    }
}

impl Wire for PtpText {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        cur.text(val)
    }
}

impl Wire for PortAddress {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        if val.address.len() > u16::MAX as usize {
            return Err(MngError::Val {
                field: "addressLength",
            });
        }
        cur.field(&mut val.network_protocol)?;
        let mut len = val.address.len() as u16;
        cur.u16(&mut len)?;
        cur.octets(&mut val.address, len as usize)
    }
}

impl Wire for FaultRecord {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        let mut len = val.size() as u16;
        cur.u16(&mut len)?;
        cur.field(&mut val.fault_time)?;
        cur.field(&mut val.severity_code)?;
        cur.text(&mut val.fault_name)?;
        cur.text(&mut val.fault_value)?;
        cur.text(&mut val.fault_description)?;
        if !cur.is_build() && len as usize != val.size() {
            return Err(MngError::Val {
                field: "faultRecordLength",
            });
        }
        Ok(())
    }
}

impl Wire for AcceptableMaster {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        cur.field(&mut val.acceptable_port_identity)?;
        cur.u8(&mut val.alternate_priority1)
    }
}

// Wire implementations for the octet-wide enumerations: the raw value
// travels as one byte, undefined values fail the frame.

macro_rules! wire_u8_enum {
    ($($t:ty),+ $(,)?) => {$(
        impl Wire for $t {
            fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
                let mut raw = *val as u8;
                cur.u8(&mut raw)?;
                if !cur.is_build() {
                    *val = <$t>::try_from(raw)?;
                }
                Ok(())
            }
        }
    )+};
}

wire_u8_enum!(
    MsgType,
    ClockAccuracy,
    FaultSeverity,
    TimeSource,
    PortState,
    LinuxptpTimeStamp,
);

impl Wire for NetworkProtocol {
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError> {
        let mut raw = *val as u16;
        cur.u16(&mut raw)?;
        if !cur.is_build() {
            *val = NetworkProtocol::try_from(raw)?;
        }
        Ok(())
    }
}

// Display implementations delegate to the stable tokens.

macro_rules! display_as_str {
    ($($t:ty),+ $(,)?) => {$(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )+};
}

display_as_str!(
    MsgType,
    ActionField,
    TlvType,
    ManagementErrorId,
    NetworkProtocol,
    ClockAccuracy,
    FaultSeverity,
    TimeSource,
    PortState,
    LinuxptpTimeStamp,
);
