// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Build and parse PTP management messages.
//!
//! [`Message`] is the framer: `set_action` arms it with an action and a
//! management ID, `build` serializes the frame into a caller buffer, and
//! `parse` classifies a received frame as a management response, a
//! management error status, or a signaling message, caching the typed
//! result for the accessors.
//!
//! A framer is not stateful across messages. Only the session
//! parameters and the last build or parse result are carried; any
//! operation is legal at any time.
//!
//! Created following IEEE Std 1588-2008, PTP version 2, with some
//! updates from IEEE Std 1588-2019.

use std::collections::HashMap;

use log::debug;

use crate::cursor::Cursor;
use crate::error::MngError;
use crate::ids::{Dialect, MngId};
use crate::mgmt::{self, MngTlv};
use crate::protocol::{ActionField, ManagementErrorId, MsgType, PortIdentity, PtpText, TlvType};
use crate::sig::{self, SigTlv};

/// Size in bytes of the PTP common header.
pub const HEADER_SIZE: usize = 34;
/// Size in bytes of the header plus the signaling target port identity.
pub const SIG_BASE_SIZE: usize = 44;
/// Fixed overhead of a management message: common header, management
/// body, TLV header and management ID.
pub const MNG_MSG_BASE_SIZE: usize = 54;

const PTP_VERSION: u8 = 2;
const UNICAST_FLAG: u8 = 0x04;
const CONTROL_MANAGEMENT: u8 = 0x04;
const LOG_MSG_INTERVAL_MANAGEMENT: u8 = 0x7f;

/// Per-instance session parameters consumed by the framer.
///
/// Copied by value on update; the framer owns its copy exclusively.
#[derive(Clone, Debug, PartialEq)]
pub struct MsgParams {
    /// Transport specific nibble, written to the majorSdoId field.
    pub transport_specific: u8,
    /// PTP domain number, 0 to 127.
    pub domain_number: u8,
    /// Boundary hops to request.
    pub boundary_hops: u8,
    /// Mark built messages as unicast.
    pub is_unicast: bool,
    /// Implementation-specific TLV set to resolve on parse.
    pub implement_specific: Dialect,
    /// Target port identity of built messages.
    pub target: PortIdentity,
    /// Our own port identity, written as the source.
    pub self_id: PortIdentity,
    /// Parse signaling messages instead of rejecting them.
    pub rcv_signaling: bool,
    /// Filter signaling TLVs through [`MsgParams::allow_sig_tlvs`].
    pub filter_signaling: bool,
    /// When filtering, keep only TLV types mapped to true.
    pub allow_sig_tlvs: HashMap<u16, bool>,
}

impl MsgParams {
    /// Parameters with the defaults of the protocol: wildcard target,
    /// zero self identity, domain 0, one boundary hop.
    pub fn new() -> Self {
        MsgParams {
            transport_specific: 0,
            domain_number: 0,
            boundary_hops: 1,
            is_unicast: false,
            implement_specific: Dialect::Default,
            target: PortIdentity::WILDCARD,
            self_id: PortIdentity::default(),
            rcv_signaling: false,
            filter_signaling: false,
            allow_sig_tlvs: HashMap::new(),
        }
    }

    /// Allow a signaling TLV type through the filter.
    pub fn allow_sig_tlv(&mut self, tlv_type: u16) {
        self.allow_sig_tlvs.insert(tlv_type, true);
    }
}

impl Default for MsgParams {
    fn default() -> Self {
        MsgParams::new()
    }
}

/// Successful outcomes of [`Message::parse`].
///
/// `ErrorStatus` and `Signaling` are successful parses, just not of a
/// management response payload; the caller reads the matching
/// accessors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseStatus {
    /// A management response or acknowledge; the typed record is
    /// available from [`Message::data`].
    Ok,
    /// The peer returned a MANAGEMENT_ERROR_STATUS TLV; details from
    /// [`Message::err_id`] and [`Message::err_display`].
    ErrorStatus,
    /// A signaling frame; inspect the TLV list accessors.
    Signaling,
}

/// PTP management message framer.
///
/// Handles building and parsing of management messages and parsing of
/// signaling messages, dispatching the TLV dataField to the typed
/// marshaller of its management ID.
#[derive(Debug, Default)]
pub struct Message {
    prms: MsgParams,

    // Build parameters, armed by set_action.
    send_action: ActionField,
    tlv_id: MngId,
    data_send: Option<MngTlv>,
    msg_len: usize,

    // Cached results of the last parse.
    msg_type: MsgType,
    reply_action: ActionField,
    sequence: u16,
    unicast_msg: bool,
    sdo_id: u32,
    domain_number: u8,
    peer: PortIdentity,
    target: PortIdentity,
    data_get: Option<MngTlv>,
    error_id: u16,
    error_display: PtpText,
    sig_tlvs: Vec<(u16, SigTlv)>,
}

impl Message {
    /// A framer with default session parameters.
    pub fn new() -> Self {
        Message::default()
    }

    /// A framer using the given session parameters.
    ///
    /// The parameters may come from a different message object.
    pub fn with_params(prms: MsgParams) -> Result<Self, MngError> {
        let mut msg = Message::new();
        msg.update_params(prms)?;
        Ok(msg)
    }

    /// The current session parameters.
    pub fn params(&self) -> &MsgParams {
        &self.prms
    }

    /// Replace the session parameters, validating them first.
    pub fn update_params(&mut self, prms: MsgParams) -> Result<(), MngError> {
        if prms.domain_number > 127 {
            return Err(MngError::Val {
                field: "domainNumber",
            });
        }
        if prms.transport_specific > 0x0f {
            return Err(MngError::Val {
                field: "transportSpecific",
            });
        }
        self.prms = prms;
        Ok(())
    }

    /// Set the target to the wildcard "all clocks" port identity.
    pub fn set_all_clocks(&mut self) {
        self.prms.target = PortIdentity::WILDCARD;
    }

    /// Whether the target is the wildcard "all clocks" port identity.
    pub fn is_all_clocks(&self) -> bool {
        self.prms.target == PortIdentity::WILDCARD
    }

    /// The management ID of the last set action or parsed reply.
    pub fn tlv_id(&self) -> MngId {
        self.tlv_id
    }

    /// Arm the framer with an action and ID carrying no dataField.
    ///
    /// Valid for GET on any ID and for COMMAND and SET on IDs whose
    /// dataField is empty; SET on a non-empty ID needs
    /// [`Message::set_action_with`].
    pub fn set_action(&mut self, action: ActionField, id: MngId) -> Result<(), MngError> {
        self.arm(action, id, None)
    }

    /// Arm the framer with an action, ID and payload for the dataField.
    ///
    /// The payload must be the record of `id`; GET and COMMAND drop it
    /// since they never carry a dataField.
    pub fn set_action_with(
        &mut self,
        action: ActionField,
        id: MngId,
        data: MngTlv,
    ) -> Result<(), MngError> {
        self.arm(action, id, Some(data))
    }

    fn arm(
        &mut self,
        action: ActionField,
        id: MngId,
        data: Option<MngTlv>,
    ) -> Result<(), MngError> {
        if !matches!(
            action,
            ActionField::Get | ActionField::Set | ActionField::Command
        ) {
            return Err(MngError::Action);
        }
        if !id.allows(action) {
            return Err(MngError::Action);
        }
        // Empty-dataField IDs are sent with GET or COMMAND only.
        if id.is_empty() && action == ActionField::Set {
            return Err(MngError::Action);
        }
        let data_send = if action == ActionField::Set {
            let data = data.ok_or(MngError::InvalidId)?;
            if data.mng_id() != Some(id) {
                return Err(MngError::InvalidId);
            }
            Some(data)
        } else {
            None
        };
        self.send_action = action;
        self.tlv_id = id;
        self.data_send = data_send;
        Ok(())
    }

    /// The dataField size of the armed build, padded to even length.
    fn padded_data_size(&self) -> Result<usize, MngError> {
        let size = match (&self.data_send, self.send_action) {
            (Some(data), ActionField::Set) => mgmt::data_field_size(self.tlv_id, data)?,
            _ => 0,
        };
        Ok(size + (size & 1))
    }

    /// The size the next [`Message::build`] will produce.
    ///
    /// Based on the armed management ID, action and payload; useful for
    /// allocating a send buffer.
    pub fn planned_len(&self) -> Result<usize, MngError> {
        Ok(MNG_MSG_BASE_SIZE + self.padded_data_size()?)
    }

    /// Build a raw management message from the last `set_action` call.
    ///
    /// Writes header, management body, TLV envelope and dataField into
    /// `buf` and returns the total length. The sequence number is
    /// caller-supplied; callers usually increase it per request so
    /// replies can be matched.
    pub fn build(&mut self, buf: &mut [u8], sequence: u16) -> Result<usize, MngError> {
        let padded = self.padded_data_size()?;
        let total = MNG_MSG_BASE_SIZE + padded;
        if buf.len() < total {
            return Err(MngError::TooSmall {
                needed: total,
                available: buf.len(),
            });
        }
        let cur = &mut Cursor::build(&mut buf[..total]);

        // Common header.
        let mut b0 = (self.prms.transport_specific << 4) | MsgType::Management as u8;
        cur.u8(&mut b0)?;
        let mut b1 = PTP_VERSION;
        cur.u8(&mut b1)?;
        let mut msg_len = total as u16;
        cur.u16(&mut msg_len)?;
        let mut domain = self.prms.domain_number;
        cur.u8(&mut domain)?;
        cur.reserved(1)?; // minorSdoId
        let mut flags0 = if self.prms.is_unicast { UNICAST_FLAG } else { 0 };
        cur.u8(&mut flags0)?;
        cur.reserved(1)?;
        cur.reserved(8)?; // correctionField
        cur.reserved(4)?; // messageTypeSpecific
        let mut self_id = self.prms.self_id;
        cur.field(&mut self_id)?;
        let mut seq = sequence;
        cur.u16(&mut seq)?;
        let mut control = CONTROL_MANAGEMENT;
        cur.u8(&mut control)?;
        let mut log_interval = LOG_MSG_INTERVAL_MANAGEMENT;
        cur.u8(&mut log_interval)?;

        // Management body.
        let mut target = self.prms.target;
        cur.field(&mut target)?;
        let mut starting_hops = self.prms.boundary_hops;
        cur.u8(&mut starting_hops)?;
        let mut hops = self.prms.boundary_hops;
        cur.u8(&mut hops)?;
        let mut action = self.send_action as u8;
        cur.u8(&mut action)?;
        cur.reserved(1)?;

        // TLV envelope.
        let mut tlv_type = TlvType::Management as u16;
        cur.u16(&mut tlv_type)?;
        let mut length = (2 + padded) as u16;
        cur.u16(&mut length)?;
        let mut code = self.tlv_id.code();
        cur.u16(&mut code)?;

        // DataField, padded to even length.
        if let Some(data) = &mut self.data_send {
            if self.send_action == ActionField::Set {
                let mark = cur.size();
                mgmt::build_tlv(cur, data)?;
                let written = cur.size() - mark;
                if written & 1 == 1 {
                    cur.reserved(1)?;
                }
                debug_assert_eq!(written + (written & 1), padded);
            }
        }

        self.msg_len = total;
        debug!(
            "built {} {} frame: {} bytes",
            self.send_action, self.tlv_id, total
        );
        Ok(total)
    }

    /// The last sent management action.
    pub fn send_action(&self) -> ActionField {
        self.send_action
    }

    /// The length of the last built message.
    pub fn msg_len(&self) -> usize {
        self.msg_len
    }

    /// Parse a received raw message of `buf.len()` bytes.
    ///
    /// On [`ParseStatus::Ok`] the typed record is cached; on
    /// [`ParseStatus::ErrorStatus`] the error fields are; on
    /// [`ParseStatus::Signaling`] the TLV list is. [`MngError::Header`]
    /// and [`MngError::Action`] leave all cached state untouched, so a
    /// polling caller can keep waiting for its reply.
    pub fn parse(&mut self, buf: &[u8]) -> Result<ParseStatus, MngError> {
        if buf.len() < HEADER_SIZE {
            return Err(MngError::TooSmall {
                needed: HEADER_SIZE,
                available: buf.len(),
            });
        }
        let declared = u16::from_be_bytes([buf[2], buf[3]]) as usize;
        if declared < HEADER_SIZE {
            return Err(MngError::Header);
        }
        if declared > buf.len() {
            return Err(MngError::TooSmall {
                needed: declared,
                available: buf.len(),
            });
        }
        let work = &buf[..declared];

        if work[1] & 0x0f != PTP_VERSION {
            return Err(MngError::Header);
        }
        let msg_type = match MsgType::try_from(work[0] & 0x0f) {
            Ok(t @ (MsgType::Management | MsgType::Signaling)) => t,
            _ => return Err(MngError::Header),
        };

        let major_sdo = (work[0] >> 4) as u32;
        let sdo_id = (major_sdo << 8) | work[5] as u32;
        let domain_number = work[4];
        let unicast_msg = work[6] & UNICAST_FLAG != 0;
        let mut peer = PortIdentity::default();
        Cursor::parse(&work[20..30]).field(&mut peer)?;
        let sequence = u16::from_be_bytes([work[30], work[31]]);

        match msg_type {
            MsgType::Management => {
                if declared < MNG_MSG_BASE_SIZE {
                    return Err(MngError::TooSmall {
                        needed: MNG_MSG_BASE_SIZE,
                        available: declared,
                    });
                }
                let mut target = PortIdentity::default();
                Cursor::parse(&work[34..44]).field(&mut target)?;

                // Reply action: RESPONSE answers GET and SET,
                // ACKNOWLEDGE answers COMMAND. A non-reply action means
                // the frame is someone else's request.
                let action_raw = work[46] & 0x0f;
                let reply_action = match ActionField::try_from(action_raw) {
                    Ok(a @ (ActionField::Response | ActionField::Acknowledge)) => a,
                    _ => return Err(MngError::Header),
                };
                let matches_sent = match reply_action {
                    ActionField::Response => {
                        matches!(self.send_action, ActionField::Get | ActionField::Set)
                    }
                    _ => self.send_action == ActionField::Command,
                };
                if !matches_sent {
                    return Err(MngError::Action);
                }

                let tlv_type = u16::from_be_bytes([work[48], work[49]]);
                let length = u16::from_be_bytes([work[50], work[51]]);
                if length & 1 == 1 {
                    return Err(MngError::Size { declared: length });
                }
                let window = length as usize;
                if 52 + window > declared {
                    return Err(MngError::TooSmall {
                        needed: 52 + window,
                        available: declared,
                    });
                }
                let value = &work[52..52 + window];

                if tlv_type == TlvType::ManagementErrorStatus as u16 {
                    let cur = &mut Cursor::parse(value);
                    let mut error_id = 0u16;
                    cur.u16(&mut error_id)?;
                    let mut code = 0u16;
                    cur.u16(&mut code)?;
                    let id = MngId::from_code(code, self.prms.implement_specific)
                        .ok_or(MngError::InvalidId)?;
                    cur.reserved(4)?;
                    let mut display = PtpText::default();
                    if cur.left() > 0 {
                        cur.text(&mut display)?;
                    }
                    debug!(
                        "management error status for {}: {} ({})",
                        id,
                        crate::protocol::err_id_str(error_id),
                        error_id
                    );
                    self.commit_header(msg_type, reply_action, sequence, unicast_msg, sdo_id,
                        domain_number, peer, target);
                    self.tlv_id = id;
                    self.error_id = error_id;
                    self.error_display = display;
                    self.data_get = None;
                    return Ok(ParseStatus::ErrorStatus);
                }
                if tlv_type != TlvType::Management as u16 {
                    return Err(MngError::InvalidTlv);
                }

                let cur = &mut Cursor::parse(value);
                let mut code = 0u16;
                cur.u16(&mut code)?;
                let id = MngId::from_code(code, self.prms.implement_specific)
                    .ok_or(MngError::InvalidId)?;
                let data = if id.is_empty() {
                    MngTlv::Empty
                } else {
                    // Trailing bytes inside the declared TLV length are
                    // pad and are discarded.
                    mgmt::parse_tlv(id, cur)?
                };
                debug!("parsed {} {} response, seq {}", reply_action, id, sequence);
                self.commit_header(msg_type, reply_action, sequence, unicast_msg, sdo_id,
                    domain_number, peer, target);
                self.tlv_id = id;
                self.data_get = Some(data);
                Ok(ParseStatus::Ok)
            }
            _ => {
                if !self.prms.rcv_signaling {
                    return Err(MngError::Header);
                }
                if declared < SIG_BASE_SIZE {
                    return Err(MngError::TooSmall {
                        needed: SIG_BASE_SIZE,
                        available: declared,
                    });
                }
                let mut target = PortIdentity::default();
                Cursor::parse(&work[34..44]).field(&mut target)?;

                let mut tlvs = Vec::new();
                let mut pos = SIG_BASE_SIZE;
                while pos + 4 <= declared {
                    let tlv_type = u16::from_be_bytes([work[pos], work[pos + 1]]);
                    let length = u16::from_be_bytes([work[pos + 2], work[pos + 3]]) as usize;
                    pos += 4;
                    if length & 1 == 1 {
                        return Err(MngError::Size {
                            declared: length as u16,
                        });
                    }
                    if pos + length > declared {
                        return Err(MngError::TooSmall {
                            needed: pos + length,
                            available: declared,
                        });
                    }
                    let value = &work[pos..pos + length];
                    pos += length;

                    if tlv_type == TlvType::TlvPad as u16 {
                        continue;
                    }
                    if self.prms.filter_signaling
                        && !self
                            .prms
                            .allow_sig_tlvs
                            .get(&tlv_type)
                            .copied()
                            .unwrap_or(false)
                    {
                        continue;
                    }
                    let cur = &mut Cursor::parse(value);
                    let tlv = sig::parse_sig_tlv(tlv_type, cur, self.prms.implement_specific)?;
                    tlvs.push((tlv_type, tlv));
                }
                debug!("parsed signaling frame with {} TLVs", tlvs.len());
                self.commit_header(msg_type, self.reply_action, sequence, unicast_msg, sdo_id,
                    domain_number, peer, target);
                self.data_get = None;
                self.sig_tlvs = tlvs;
                Ok(ParseStatus::Signaling)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn commit_header(
        &mut self,
        msg_type: MsgType,
        reply_action: ActionField,
        sequence: u16,
        unicast_msg: bool,
        sdo_id: u32,
        domain_number: u8,
        peer: PortIdentity,
        target: PortIdentity,
    ) {
        self.msg_type = msg_type;
        self.reply_action = reply_action;
        self.sequence = sequence;
        self.unicast_msg = unicast_msg;
        self.sdo_id = sdo_id;
        self.domain_number = domain_number;
        self.peer = peer;
        self.target = target;
    }

    /// The reply action of the last parsed message.
    pub fn reply_action(&self) -> ActionField {
        self.reply_action
    }

    /// Whether the last parsed message was unicast.
    pub fn is_unicast(&self) -> bool {
        self.unicast_msg
    }

    /// The sequence number of the last parsed message.
    pub fn sequence(&self) -> u16 {
        self.sequence
    }

    /// The source port identity of the last parsed message.
    pub fn peer(&self) -> &PortIdentity {
        &self.peer
    }

    /// The target port identity of the last parsed message.
    pub fn target(&self) -> &PortIdentity {
        &self.target
    }

    /// The sdoId of the last parsed message. The upper nibble was the
    /// transportSpecific field.
    pub fn sdo_id(&self) -> u32 {
        self.sdo_id
    }

    /// The domain number of the last parsed message.
    pub fn domain_number(&self) -> u8 {
        self.domain_number
    }

    /// The typed dataField record of the last parsed management
    /// response.
    pub fn data(&self) -> Option<&MngTlv> {
        self.data_get.as_ref()
    }

    /// The management error of the last parse that returned
    /// [`ParseStatus::ErrorStatus`], when it maps to a defined code.
    pub fn err_id(&self) -> Option<ManagementErrorId> {
        ManagementErrorId::try_from(self.error_id).ok()
    }

    /// The raw management error code of the last error status.
    pub fn err_id_raw(&self) -> u16 {
        self.error_id
    }

    /// The display text of the last error status.
    pub fn err_display(&self) -> &str {
        self.error_display.as_str()
    }

    /// Whether the last parsed message was a signaling message.
    pub fn is_last_sig(&self) -> bool {
        self.msg_type == MsgType::Signaling
    }

    /// Number of TLVs in the last parsed signaling message.
    pub fn sig_tlv_count(&self) -> usize {
        self.sig_tlvs.len()
    }

    /// A TLV of the last parsed signaling message, by position.
    pub fn sig_tlv(&self, position: usize) -> Option<&SigTlv> {
        self.sig_tlvs.get(position).map(|(_, tlv)| tlv)
    }

    /// The type of a TLV of the last parsed signaling message, by
    /// position.
    pub fn sig_tlv_type(&self, position: usize) -> Option<u16> {
        self.sig_tlvs.get(position).map(|(t, _)| *t)
    }

    /// The management record of a signaling TLV, when that TLV is a
    /// management TLV.
    pub fn sig_mng_tlv(&self, position: usize) -> Option<(MngId, &MngTlv)> {
        match self.sig_tlvs.get(position) {
            Some((_, SigTlv::Management { id, data })) => Some((*id, data)),
            _ => None,
        }
    }

    /// Whether the ID carries an empty dataField.
    pub fn is_empty(id: MngId) -> bool {
        id.is_empty()
    }
}
