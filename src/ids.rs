// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! The management ID registry.
//!
//! A single declarative table drives everything derived from an ID: its
//! numeric code, its scope, the actions it allows, and its dataField
//! size policy. The [`mng_ids!`] invocation below is the one place this
//! data lives; the enum, the lookup table and the token strings are all
//! generated from it.
//!
//! Size policy: a positive size is a fixed-length dataField, `0` means
//! no dataField at all, and `-2` means the length must be computed from
//! the record contents.

use core::fmt;

use crate::protocol::ActionField;

// Allowed-action bits, combined per row exactly as the ID table defines
// them.
const A_GET: u8 = 1 << 0;
const A_SET: u8 = 1 << 1;
const A_COMMAND: u8 = 1 << 2;
/// Implementation-specific bit: the ID resolves only under the linuxptp
/// dialect.
const A_LINUXPTP: u8 = 1 << 3;

const USE_GSC: u8 = A_GET | A_SET | A_COMMAND;
const USE_GS: u8 = A_GET | A_SET;
const USE_GL: u8 = A_GET | A_LINUXPTP;
const USE_GSL: u8 = A_GET | A_SET | A_LINUXPTP;

/// First code of the implementation-specific management ID range.
pub const IMPL_SPECIFIC_FIRST: u16 = 0xc000;
/// Last code of the implementation-specific management ID range.
pub const IMPL_SPECIFIC_LAST: u16 = 0xdfff;

/// Which implementation-specific TLV set the registry resolves.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Dialect {
    /// Base standard only: implementation-specific codes do not resolve.
    #[default]
    Default,
    /// Accept the linuxptp TLV set (codes 0xC000 to 0xDFFF).
    Linuxptp,
}

/// Whether a management ID applies to a port or to the whole clock.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scope {
    /// The ID addresses a single port.
    Port,
    /// The ID addresses the clock instance.
    Clock,
}

/// DataField size policy of a management ID.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MngSize {
    /// No dataField.
    Empty,
    /// Fixed dataField size in bytes.
    Fixed(usize),
    /// The size is a function of the record contents.
    Variable,
}

pub(crate) struct MngRow {
    pub code: u16,
    pub scope: Scope,
    pub allowed: u8,
    pub size: i16,
}

macro_rules! mng_ids {
    ($( $(#[$doc:meta])* $name:ident = $code:literal, $scope:ident, $allowed:expr, $size:literal, $token:literal; )+) => {
        /// Management TLV identifiers of IEEE Std 1588-2008/2019 plus
        /// the linuxptp implementation-specific set.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum MngId {
            $( $(#[$doc])* $name, )+
        }

        pub(crate) static MNG_TABLE: &[MngRow] = &[
            $( MngRow {
                code: $code,
                scope: Scope::$scope,
                allowed: $allowed,
                size: $size,
            }, )+
        ];

        static ALL_IDS: &[MngId] = &[ $( MngId::$name, )+ ];

        impl MngId {
            /// Stable token for the management ID.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( MngId::$name => $token, )+
                }
            }
        }
    };
}

mng_ids! {
    /// Null management, no payload in either direction.
    NullPtpManagement = 0x0000, Port, USE_GSC, 0, "NULL_PTP_MANAGEMENT";
    /// Clock description.
    ClockDescription = 0x0001, Port, A_GET, -2, "CLOCK_DESCRIPTION";
    /// User description.
    UserDescription = 0x0002, Clock, USE_GS, -2, "USER_DESCRIPTION";
    /// Save configuration in non-volatile storage.
    SaveInNonVolatileStorage = 0x0003, Clock, A_COMMAND, 0, "SAVE_IN_NON_VOLATILE_STORAGE";
    /// Reset non-volatile storage.
    ResetNonVolatileStorage = 0x0004, Clock, A_COMMAND, 0, "RESET_NON_VOLATILE_STORAGE";
    /// Initialize the instance.
    Initialize = 0x0005, Clock, A_COMMAND, 2, "INITIALIZE";
    /// Fault logging table.
    FaultLog = 0x0006, Clock, A_GET, -2, "FAULT_LOG";
    /// Reset the fault log.
    FaultLogReset = 0x0007, Clock, A_COMMAND, 0, "FAULT_LOG_RESET";
    /// Default data set.
    DefaultDataSet = 0x2000, Clock, A_GET, 20, "DEFAULT_DATA_SET";
    /// Current data set.
    CurrentDataSet = 0x2001, Clock, A_GET, 18, "CURRENT_DATA_SET";
    /// Parent data set.
    ParentDataSet = 0x2002, Clock, A_GET, 32, "PARENT_DATA_SET";
    /// Time properties data set.
    TimePropertiesDataSet = 0x2003, Clock, A_GET, 4, "TIME_PROPERTIES_DATA_SET";
    /// Port data set.
    PortDataSet = 0x2004, Port, A_GET, 26, "PORT_DATA_SET";
    /// Priority 1.
    Priority1 = 0x2005, Clock, USE_GS, 2, "PRIORITY1";
    /// Priority 2.
    Priority2 = 0x2006, Clock, USE_GS, 2, "PRIORITY2";
    /// Domain number.
    Domain = 0x2007, Clock, USE_GS, 2, "DOMAIN";
    /// Client-only flag.
    SlaveOnly = 0x2008, Clock, USE_GS, 2, "SLAVE_ONLY";
    /// Log announce interval.
    LogAnnounceInterval = 0x2009, Port, USE_GS, 2, "LOG_ANNOUNCE_INTERVAL";
    /// Announce receipt timeout.
    AnnounceReceiptTimeout = 0x200a, Port, USE_GS, 2, "ANNOUNCE_RECEIPT_TIMEOUT";
    /// Log synchronization interval.
    LogSyncInterval = 0x200b, Port, USE_GS, 2, "LOG_SYNC_INTERVAL";
    /// Version number.
    VersionNumber = 0x200c, Port, USE_GS, 2, "VERSION_NUMBER";
    /// Enable the port.
    EnablePort = 0x200d, Port, A_COMMAND, 0, "ENABLE_PORT";
    /// Disable the port.
    DisablePort = 0x200e, Port, A_COMMAND, 0, "DISABLE_PORT";
    /// Current time.
    Time = 0x200f, Clock, USE_GS, 10, "TIME";
    /// Clock accuracy.
    ClockAccuracy = 0x2010, Clock, USE_GS, 2, "CLOCK_ACCURACY";
    /// UTC properties.
    UtcProperties = 0x2011, Clock, USE_GS, 4, "UTC_PROPERTIES";
    /// Traceability properties.
    TraceabilityProperties = 0x2012, Clock, USE_GS, 2, "TRACEABILITY_PROPERTIES";
    /// Timescale properties.
    TimescaleProperties = 0x2013, Clock, USE_GS, 2, "TIMESCALE_PROPERTIES";
    /// Unicast negotiation enable.
    UnicastNegotiationEnable = 0x2014, Port, USE_GS, 2, "UNICAST_NEGOTIATION_ENABLE";
    /// Path trace list.
    PathTraceList = 0x2015, Clock, A_GET, -2, "PATH_TRACE_LIST";
    /// Path trace enable.
    PathTraceEnable = 0x2016, Clock, USE_GS, 2, "PATH_TRACE_ENABLE";
    /// Grandmaster cluster table.
    GrandmasterClusterTable = 0x2017, Clock, USE_GS, -2, "GRANDMASTER_CLUSTER_TABLE";
    /// Unicast master table.
    UnicastMasterTable = 0x2018, Port, USE_GS, -2, "UNICAST_MASTER_TABLE";
    /// Unicast master maximum table size.
    UnicastMasterMaxTableSize = 0x2019, Port, A_GET, 2, "UNICAST_MASTER_MAX_TABLE_SIZE";
    /// Acceptable master table.
    AcceptableMasterTable = 0x201a, Clock, USE_GS, -2, "ACCEPTABLE_MASTER_TABLE";
    /// Acceptable master table enabled.
    AcceptableMasterTableEnabled = 0x201b, Port, USE_GS, 2, "ACCEPTABLE_MASTER_TABLE_ENABLED";
    /// Acceptable master maximum table size.
    AcceptableMasterMaxTableSize = 0x201c, Clock, A_GET, 2, "ACCEPTABLE_MASTER_MAX_TABLE_SIZE";
    /// Alternate master.
    AlternateMaster = 0x201d, Port, USE_GS, 4, "ALTERNATE_MASTER";
    /// Alternate time offset enable.
    AlternateTimeOffsetEnable = 0x201e, Clock, USE_GS, 2, "ALTERNATE_TIME_OFFSET_ENABLE";
    /// Alternate time offset name.
    AlternateTimeOffsetName = 0x201f, Clock, USE_GS, -2, "ALTERNATE_TIME_OFFSET_NAME";
    /// Alternate time offset maximum key.
    AlternateTimeOffsetMaxKey = 0x2020, Clock, A_GET, 2, "ALTERNATE_TIME_OFFSET_MAX_KEY";
    /// Alternate time offset properties.
    AlternateTimeOffsetProperties = 0x2021, Clock, USE_GS, 16, "ALTERNATE_TIME_OFFSET_PROPERTIES";
    /// Transparent clock port data set.
    TransparentClockPortDataSet = 0x4001, Port, A_GET, 20, "TRANSPARENT_CLOCK_PORT_DATA_SET";
    /// Log minimum pdelay request interval.
    LogMinPdelayReqInterval = 0x6001, Port, USE_GS, 2, "LOG_MIN_PDELAY_REQ_INTERVAL";
    /// Transparent clock default data set. Deprecated in IEEE Std
    /// 1588-2019.
    TransparentClockDefaultDataSet = 0x4000, Clock, A_GET, 12, "TRANSPARENT_CLOCK_DEFAULT_DATA_SET";
    /// Primary domain. Deprecated in IEEE Std 1588-2019.
    PrimaryDomain = 0x4002, Clock, USE_GS, 2, "PRIMARY_DOMAIN";
    /// Delay mechanism. Deprecated in IEEE Std 1588-2019.
    DelayMechanism = 0x6000, Port, USE_GS, 2, "DELAY_MECHANISM";
    /// External port configuration enabled. From IEEE Std 1588-2019.
    ExternalPortConfigurationEnabled = 0x3000, Clock, USE_GS, 2, "EXTERNAL_PORT_CONFIGURATION_ENABLED";
    /// Master-only flag. From IEEE Std 1588-2019.
    MasterOnly = 0x3001, Port, USE_GS, 2, "MASTER_ONLY";
    /// Holdover upgrade enable. From IEEE Std 1588-2019.
    HoldoverUpgradeEnable = 0x3002, Clock, USE_GS, 2, "HOLDOVER_UPGRADE_ENABLE";
    /// External port configuration port data set. From IEEE Std
    /// 1588-2019.
    ExtPortConfigPortDataSet = 0x3003, Port, USE_GS, 2, "EXT_PORT_CONFIG_PORT_DATA_SET";
    /// Time status, linuxptp specific.
    TimeStatusNp = 0xc000, Clock, USE_GL, 50, "TIME_STATUS_NP";
    /// Grandmaster settings, linuxptp specific.
    GrandmasterSettingsNp = 0xc001, Clock, USE_GSL, 8, "GRANDMASTER_SETTINGS_NP";
    /// Port data set, linuxptp specific.
    PortDataSetNp = 0xc002, Port, USE_GSL, 8, "PORT_DATA_SET_NP";
    /// Subscribe events, linuxptp specific.
    SubscribeEventsNp = 0xc003, Clock, USE_GSL, 66, "SUBSCRIBE_EVENTS_NP";
    /// Port properties, linuxptp specific.
    PortPropertiesNp = 0xc004, Port, USE_GL, -2, "PORT_PROPERTIES_NP";
    /// Port statistics, linuxptp specific.
    PortStatsNp = 0xc005, Port, USE_GL, 266, "PORT_STATS_NP";
    /// Synchronization uncertain, linuxptp specific.
    SynchronizationUncertainNp = 0xc006, Clock, USE_GSL, 2, "SYNCHRONIZATION_UNCERTAIN_NP";
}

impl MngId {
    fn row(self) -> &'static MngRow {
        &MNG_TABLE[self as usize]
    }

    /// Every management ID, in registry order.
    pub fn all() -> &'static [MngId] {
        ALL_IDS
    }

    /// The numeric wire code of the ID.
    pub fn code(self) -> u16 {
        self.row().code
    }

    /// Whether the ID addresses a port or the whole clock.
    pub fn scope(self) -> Scope {
        self.row().scope
    }

    /// The dataField size policy.
    pub fn size(self) -> MngSize {
        match self.row().size {
            0 => MngSize::Empty,
            -2 => MngSize::Variable,
            n => MngSize::Fixed(n as usize),
        }
    }

    /// Whether the ID carries no dataField at all.
    pub fn is_empty(self) -> bool {
        self.row().size == 0
    }

    /// Whether the ID belongs to the linuxptp implementation-specific
    /// set.
    pub fn is_linuxptp(self) -> bool {
        self.row().allowed & A_LINUXPTP != 0
    }

    /// Whether `action` is in the allowed set of the ID.
    ///
    /// Only GET, SET and COMMAND are ever allowed; reply actions are
    /// received, never sent.
    pub fn allows(self, action: ActionField) -> bool {
        let bit = match action {
            ActionField::Get => A_GET,
            ActionField::Set => A_SET,
            ActionField::Command => A_COMMAND,
            _ => return false,
        };
        self.row().allowed & bit != 0
    }

    /// Resolve a wire code to an ID under the given dialect.
    ///
    /// Codes in the implementation-specific range resolve only when the
    /// dialect is linuxptp; everything else is dialect-independent.
    pub fn from_code(code: u16, dialect: Dialect) -> Option<MngId> {
        if dialect == Dialect::Default && (IMPL_SPECIFIC_FIRST..=IMPL_SPECIFIC_LAST).contains(&code)
        {
            return None;
        }
        MNG_TABLE
            .iter()
            .position(|row| row.code == code)
            .map(|i| ALL_IDS[i])
    }
}

impl Default for MngId {
    fn default() -> Self {
        MngId::NullPtpManagement
    }
}

impl fmt::Display for MngId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_total() {
        // Every ID resolves to exactly one row and its code round-trips
        // under the right dialect.
        for &id in MngId::all() {
            let dialect = if id.is_linuxptp() {
                Dialect::Linuxptp
            } else {
                Dialect::Default
            };
            assert_eq!(MngId::from_code(id.code(), dialect), Some(id), "{}", id);
        }
        assert_eq!(MngId::all().len(), MNG_TABLE.len());
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in MNG_TABLE.iter().enumerate() {
            for b in &MNG_TABLE[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_dialect_gates_linuxptp_range() {
        assert_eq!(MngId::from_code(0xc000, Dialect::Default), None);
        assert_eq!(
            MngId::from_code(0xc000, Dialect::Linuxptp),
            Some(MngId::TimeStatusNp)
        );
        // Unknown codes never resolve.
        assert_eq!(MngId::from_code(0x7fff, Dialect::Linuxptp), None);
        assert_eq!(MngId::from_code(0xcfff, Dialect::Linuxptp), None);
    }

    #[test]
    fn test_known_rows() {
        assert_eq!(MngId::Priority1.code(), 0x2005);
        assert_eq!(MngId::Priority1.size(), MngSize::Fixed(2));
        assert!(MngId::Priority1.allows(ActionField::Get));
        assert!(MngId::Priority1.allows(ActionField::Set));
        assert!(!MngId::Priority1.allows(ActionField::Command));

        assert_eq!(MngId::ClockDescription.size(), MngSize::Variable);
        assert!(!MngId::ClockDescription.allows(ActionField::Set));

        assert!(MngId::EnablePort.is_empty());
        assert!(MngId::EnablePort.allows(ActionField::Command));
        assert!(!MngId::EnablePort.allows(ActionField::Get));

        assert_eq!(MngId::PortStatsNp.size(), MngSize::Fixed(266));
        assert!(MngId::PortStatsNp.is_linuxptp());
        assert_eq!(MngId::SubscribeEventsNp.size(), MngSize::Fixed(66));

        assert!(!MngId::Priority1.allows(ActionField::Response));
    }

    #[test]
    fn test_tokens() {
        assert_eq!(MngId::Priority1.as_str(), "PRIORITY1");
        assert_eq!(MngId::TimeStatusNp.to_string(), "TIME_STATUS_NP");
        assert_eq!(
            MngId::NullPtpManagement.as_str(),
            "NULL_PTP_MANAGEMENT"
        );
    }
}
