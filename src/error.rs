// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Error types for PTP management message building and parsing.
//!
//! [`MngError`] is the closed taxonomy shared by every build and parse
//! path in the crate. [`MngError::Header`] and [`MngError::Action`] are
//! advisory: they mean the frame was not the reply the caller is waiting
//! for, and a polling caller should keep reading. Everything else is
//! terminal for that frame.

use core::fmt;

/// Errors that can occur while building or parsing a PTP management or
/// signaling message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MngError {
    /// The management ID is unknown, not resolvable under the active
    /// dialect, or inconsistent with the supplied payload.
    InvalidId,
    /// The TLV header is not one the message class accepts.
    InvalidTlv,
    /// A field does not fit in the remaining byte window.
    SizeMiss {
        /// Number of bytes the field needs.
        needed: usize,
        /// Number of bytes left in the window.
        left: usize,
    },
    /// The caller's buffer is too small for the whole message.
    TooSmall {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },
    /// The declared TLV length must be even and is not.
    Size {
        /// The offending length field value.
        declared: u16,
    },
    /// A field value is out of its declared range.
    Val {
        /// Name of the field that was invalid.
        field: &'static str,
    },
    /// A header field is not consistent with the expected message class.
    /// Advisory: keep reading.
    Header,
    /// The action is not allowed for the ID, or a reply action does not
    /// match the last sent action. Advisory on parse: keep reading.
    Action,
    /// The TLV type is known but no marshaller exists for its ID in the
    /// active dialect.
    Unsupported,
    /// Allocation of a parsed record list failed.
    Mem,
}

impl fmt::Display for MngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MngError::InvalidId => write!(f, "invalid management TLV id"),
            MngError::InvalidTlv => write!(f, "wrong TLV header"),
            MngError::SizeMiss { needed, left } => {
                write!(f, "field of {} bytes exceeds remaining {} bytes", needed, left)
            }
            MngError::TooSmall { needed, available } => {
                write!(f, "buffer too small: needed {} bytes, got {}", needed, available)
            }
            MngError::Size { declared } => {
                write!(f, "TLV length field must be even: {}", declared)
            }
            MngError::Val { field } => write!(f, "invalid {} value", field),
            MngError::Header => write!(f, "wrong value in header"),
            MngError::Action => write!(f, "wrong action value"),
            MngError::Unsupported => write!(f, "do not know how to parse the TLV data"),
            MngError::Mem => write!(f, "failed to allocate TLV data"),
        }
    }
}

impl From<MngError> for std::io::Error {
    fn from(err: MngError) -> std::io::Error {
        let kind = match &err {
            MngError::SizeMiss { .. } | MngError::TooSmall { .. } => {
                std::io::ErrorKind::UnexpectedEof
            }
            MngError::Header | MngError::Action => std::io::ErrorKind::WouldBlock,
            MngError::Mem => std::io::ErrorKind::OutOfMemory,
            _ => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, err)
    }
}

impl std::error::Error for MngError {}
