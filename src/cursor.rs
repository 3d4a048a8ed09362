// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Bounded, bidirectional big-endian cursor over a byte window.
//!
//! A [`Cursor`] carries either a mutable build window or an immutable
//! parse window plus a position and a cumulative byte count. Every
//! primitive checks the remaining window first and leaves the cursor
//! unchanged on failure, so a marshaller can propagate a size miss
//! without corrupting its state.
//!
//! The same marshaller function serves both directions: each primitive
//! takes a mutable reference and either writes the value into the window
//! (build) or overwrites the value from the window (parse). The wire
//! layout is therefore expressed exactly once per TLV variant.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::MngError;
use crate::octets::Octets;
use crate::protocol::{PtpText, INT48_MAX, INT48_MIN, UINT48_MAX};

/// Types that marshal themselves through a [`Cursor`] in wire order.
pub(crate) trait Wire {
    /// Build or parse `val` depending on the cursor direction.
    fn wire(cur: &mut Cursor<'_>, val: &mut Self) -> Result<(), MngError>;
}

enum Window<'a> {
    Build(&'a mut [u8]),
    Parse(&'a [u8]),
}

/// Bidirectional big-endian codec over a bounded byte window.
pub(crate) struct Cursor<'a> {
    win: Window<'a>,
    pos: usize,
    size: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor that writes into `buf`.
    pub fn build(buf: &'a mut [u8]) -> Self {
        Cursor {
            win: Window::Build(buf),
            pos: 0,
            size: 0,
        }
    }

    /// Cursor that reads from `buf`.
    pub fn parse(buf: &'a [u8]) -> Self {
        Cursor {
            win: Window::Parse(buf),
            pos: 0,
            size: 0,
        }
    }

    /// True when the cursor writes.
    pub fn is_build(&self) -> bool {
        matches!(self.win, Window::Build(_))
    }

    /// Bytes remaining in the window.
    pub fn left(&self) -> usize {
        let len = match &self.win {
            Window::Build(buf) => buf.len(),
            Window::Parse(buf) => buf.len(),
        };
        len - self.pos
    }

    /// Cumulative bytes written or read.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reserve `width` bytes, advancing the counters. Fails without
    /// moving when the window is short.
    fn take(&mut self, width: usize) -> Result<usize, MngError> {
        if self.left() < width {
            return Err(MngError::SizeMiss {
                needed: width,
                left: self.left(),
            });
        }
        let at = self.pos;
        self.pos += width;
        self.size += width;
        Ok(at)
    }

    /// Marshal any [`Wire`] composite.
    pub fn field<T: Wire>(&mut self, val: &mut T) -> Result<(), MngError> {
        T::wire(self, val)
    }

    /// One octet.
    pub fn u8(&mut self, val: &mut u8) -> Result<(), MngError> {
        let at = self.take(1)?;
        match &mut self.win {
            Window::Build(buf) => buf[at] = *val,
            Window::Parse(buf) => *val = buf[at],
        }
        Ok(())
    }

    /// One signed octet.
    pub fn i8(&mut self, val: &mut i8) -> Result<(), MngError> {
        let mut raw = *val as u8;
        self.u8(&mut raw)?;
        *val = raw as i8;
        Ok(())
    }

    /// Unsigned 16-bit integer.
    pub fn u16(&mut self, val: &mut u16) -> Result<(), MngError> {
        let at = self.take(2)?;
        match &mut self.win {
            Window::Build(buf) => BigEndian::write_u16(&mut buf[at..at + 2], *val),
            Window::Parse(buf) => *val = BigEndian::read_u16(&buf[at..at + 2]),
        }
        Ok(())
    }

    /// Signed 16-bit integer.
    pub fn i16(&mut self, val: &mut i16) -> Result<(), MngError> {
        let mut raw = *val as u16;
        self.u16(&mut raw)?;
        *val = raw as i16;
        Ok(())
    }

    /// Unsigned 32-bit integer.
    pub fn u32(&mut self, val: &mut u32) -> Result<(), MngError> {
        let at = self.take(4)?;
        match &mut self.win {
            Window::Build(buf) => BigEndian::write_u32(&mut buf[at..at + 4], *val),
            Window::Parse(buf) => *val = BigEndian::read_u32(&buf[at..at + 4]),
        }
        Ok(())
    }

    /// Signed 32-bit integer.
    pub fn i32(&mut self, val: &mut i32) -> Result<(), MngError> {
        let mut raw = *val as u32;
        self.u32(&mut raw)?;
        *val = raw as i32;
        Ok(())
    }

    /// Unsigned 64-bit integer.
    pub fn u64(&mut self, val: &mut u64) -> Result<(), MngError> {
        let at = self.take(8)?;
        match &mut self.win {
            Window::Build(buf) => BigEndian::write_u64(&mut buf[at..at + 8], *val),
            Window::Parse(buf) => *val = BigEndian::read_u64(&buf[at..at + 8]),
        }
        Ok(())
    }

    /// Signed 64-bit integer.
    pub fn i64(&mut self, val: &mut i64) -> Result<(), MngError> {
        let mut raw = *val as u64;
        self.u64(&mut raw)?;
        *val = raw as i64;
        Ok(())
    }

    /// Unsigned 48-bit integer packed into 6 octets. Values above
    /// 2^48 - 1 are rejected on build.
    pub fn u48(&mut self, val: &mut u64) -> Result<(), MngError> {
        if self.is_build() && *val > UINT48_MAX {
            return Err(MngError::Val { field: "uint48" });
        }
        let at = self.take(6)?;
        match &mut self.win {
            Window::Build(buf) => BigEndian::write_uint(&mut buf[at..at + 6], *val, 6),
            Window::Parse(buf) => *val = BigEndian::read_uint(&buf[at..at + 6], 6),
        }
        Ok(())
    }

    /// Signed 48-bit integer packed into 6 octets, sign-extended from
    /// bit 47 on parse. Values outside [-2^47, 2^47 - 1] are rejected on
    /// build.
    pub fn i48(&mut self, val: &mut i64) -> Result<(), MngError> {
        if self.is_build() && !(INT48_MIN..=INT48_MAX).contains(val) {
            return Err(MngError::Val { field: "int48" });
        }
        let at = self.take(6)?;
        match &mut self.win {
            Window::Build(buf) => BigEndian::write_int(&mut buf[at..at + 6], *val, 6),
            Window::Parse(buf) => *val = BigEndian::read_int(&buf[at..at + 6], 6),
        }
        Ok(())
    }

    /// IEEE 754 binary64 transmitted in network byte order of its bit
    /// pattern.
    pub fn f64(&mut self, val: &mut f64) -> Result<(), MngError> {
        let at = self.take(8)?;
        match &mut self.win {
            Window::Build(buf) => BigEndian::write_f64(&mut buf[at..at + 8], *val),
            Window::Parse(buf) => *val = BigEndian::read_f64(&buf[at..at + 8]),
        }
        Ok(())
    }

    /// Unsigned 64-bit integer in little-endian order. Only the linuxptp
    /// PORT_STATS_NP counters use this; the exception stays out of the
    /// default primitives.
    pub fn u64_le(&mut self, val: &mut u64) -> Result<(), MngError> {
        let at = self.take(8)?;
        match &mut self.win {
            Window::Build(buf) => LittleEndian::write_u64(&mut buf[at..at + 8], *val),
            Window::Parse(buf) => *val = LittleEndian::read_u64(&buf[at..at + 8]),
        }
        Ok(())
    }

    /// One flag octet constrained by `mask`. Out-of-mask bits are
    /// silently cleared in both directions; a single-bit mask normalizes
    /// any non-zero value to 1 on build.
    pub fn flags(&mut self, flags: &mut u8, mask: u8) -> Result<(), MngError> {
        if self.is_build() {
            if mask > 1 {
                *flags &= mask;
            } else if *flags > 0 {
                *flags = 1;
            }
        }
        self.u8(flags)?;
        if !self.is_build() {
            *flags &= mask;
        }
        Ok(())
    }

    /// `width` reserved octets: zero-filled on build, skipped on parse,
    /// counted either way.
    pub fn reserved(&mut self, width: usize) -> Result<(), MngError> {
        let at = self.take(width)?;
        if let Window::Build(buf) = &mut self.win {
            buf[at..at + width].fill(0);
        }
        Ok(())
    }

    /// A fixed-length octet run.
    pub fn bytes(&mut self, val: &mut [u8]) -> Result<(), MngError> {
        let at = self.take(val.len())?;
        match &mut self.win {
            Window::Build(buf) => buf[at..at + val.len()].copy_from_slice(val),
            Window::Parse(buf) => val.copy_from_slice(&buf[at..at + val.len()]),
        }
        Ok(())
    }

    /// An octet buffer of exactly `len` bytes. On build the buffer
    /// length must match `len`.
    pub fn octets(&mut self, val: &mut Octets, len: usize) -> Result<(), MngError> {
        if self.is_build() && val.len() != len {
            return Err(MngError::Val {
                field: "octet sequence length",
            });
        }
        let at = self.take(len)?;
        match &mut self.win {
            Window::Build(buf) => buf[at..at + len].copy_from_slice(val.as_slice()),
            Window::Parse(buf) => *val = Octets::from(&buf[at..at + len]),
        }
        Ok(())
    }

    /// An octet buffer spanning the rest of the window.
    pub fn octets_rest(&mut self, val: &mut Octets) -> Result<(), MngError> {
        let len = if self.is_build() {
            val.len()
        } else {
            self.left()
        };
        self.octets(val, len)
    }

    /// A PTPText: one length octet followed by that many UTF-8 bytes.
    pub fn text(&mut self, val: &mut PtpText) -> Result<(), MngError> {
        if self.is_build() {
            let len = val.text.len();
            if len > u8::MAX as usize {
                return Err(MngError::Val {
                    field: "PTPText length",
                });
            }
            let mut l = len as u8;
            self.u8(&mut l)?;
            let at = self.take(len)?;
            if let Window::Build(buf) = &mut self.win {
                buf[at..at + len].copy_from_slice(val.text.as_bytes());
            }
        } else {
            let mut l = 0u8;
            self.u8(&mut l)?;
            let len = l as usize;
            let at = self.take(len)?;
            if let Window::Parse(buf) = &self.win {
                match core::str::from_utf8(&buf[at..at + len]) {
                    Ok(s) => val.text = s.to_owned(),
                    Err(_) => {
                        return Err(MngError::Val { field: "PTPText" });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_roundtrip() {
        let mut buf = [0u8; 32];
        let mut c = Cursor::build(&mut buf);
        let mut a = 0x12u8;
        let mut b = -5i8;
        let mut d = 0xbeefu16;
        let mut e = -3i16;
        let mut g = 0xdead_beefu32;
        let mut h = 0x0102_0304_0506_0708u64;
        c.u8(&mut a).unwrap();
        c.i8(&mut b).unwrap();
        c.u16(&mut d).unwrap();
        c.i16(&mut e).unwrap();
        c.u32(&mut g).unwrap();
        c.u64(&mut h).unwrap();
        assert_eq!(c.size(), 18);

        let mut p = Cursor::parse(&buf);
        let (mut a2, mut b2, mut d2, mut e2, mut g2, mut h2) = (0u8, 0i8, 0u16, 0i16, 0u32, 0u64);
        p.u8(&mut a2).unwrap();
        p.i8(&mut b2).unwrap();
        p.u16(&mut d2).unwrap();
        p.i16(&mut e2).unwrap();
        p.u32(&mut g2).unwrap();
        p.u64(&mut h2).unwrap();
        assert_eq!((a2, b2, d2, e2, g2, h2), (0x12, -5, 0xbeef, -3, 0xdead_beef, h));
    }

    #[test]
    fn test_u48_range() {
        let mut buf = [0u8; 6];
        let mut v = UINT48_MAX;
        Cursor::build(&mut buf).u48(&mut v).unwrap();
        assert_eq!(buf, [0xff; 6]);
        let mut over = UINT48_MAX + 1;
        assert_eq!(
            Cursor::build(&mut buf).u48(&mut over),
            Err(MngError::Val { field: "uint48" })
        );
    }

    #[test]
    fn test_i48_sign_extension() {
        let mut buf = [0u8; 6];
        let mut v = -3i64;
        Cursor::build(&mut buf).i48(&mut v).unwrap();
        assert_eq!(buf, [0xff, 0xff, 0xff, 0xff, 0xff, 0xfd]);
        let mut back = 0i64;
        Cursor::parse(&buf).i48(&mut back).unwrap();
        assert_eq!(back, -3);

        for x in [INT48_MIN, -1, 0, 1, INT48_MAX] {
            let mut w = x;
            let mut b = [0u8; 6];
            Cursor::build(&mut b).i48(&mut w).unwrap();
            let mut r = 0i64;
            Cursor::parse(&b).i48(&mut r).unwrap();
            assert_eq!(r, x);
        }
        let mut low = INT48_MIN - 1;
        assert!(Cursor::build(&mut buf).i48(&mut low).is_err());
        let mut high = INT48_MAX + 1;
        assert!(Cursor::build(&mut buf).i48(&mut high).is_err());
    }

    #[test]
    fn test_size_miss_leaves_cursor() {
        let mut buf = [0u8; 3];
        let mut c = Cursor::build(&mut buf);
        let mut v = 1u16;
        c.u16(&mut v).unwrap();
        let mut w = 2u32;
        assert_eq!(
            c.u32(&mut w),
            Err(MngError::SizeMiss { needed: 4, left: 1 })
        );
        // Cursor unchanged: the remaining byte is still usable.
        let mut b = 7u8;
        c.u8(&mut b).unwrap();
        assert_eq!(c.left(), 0);
        assert_eq!(c.size(), 3);
    }

    #[test]
    fn test_flags_masking() {
        let mut buf = [0u8; 1];
        let mut f = 0xffu8;
        Cursor::build(&mut buf).flags(&mut f, 0x3f).unwrap();
        assert_eq!(buf[0], 0x3f);
        // Single-bit mask: any non-zero becomes 1.
        let mut g = 0x80u8;
        Cursor::build(&mut buf).flags(&mut g, 0x01).unwrap();
        assert_eq!(buf[0], 1);
        // Parse masks out-of-mask bits.
        let raw = [0xffu8];
        let mut h = 0u8;
        Cursor::parse(&raw).flags(&mut h, 0x07).unwrap();
        assert_eq!(h, 0x07);
    }

    #[test]
    fn test_f64_network_order() {
        let mut buf = [0u8; 8];
        let mut v = 1.5f64;
        Cursor::build(&mut buf).f64(&mut v).unwrap();
        assert_eq!(buf, 1.5f64.to_be_bytes());
        let mut r = 0f64;
        Cursor::parse(&buf).f64(&mut r).unwrap();
        assert_eq!(r, 1.5);
    }

    #[test]
    fn test_u64_le_exception() {
        let mut buf = [0u8; 8];
        let mut v = 0x0102_0304_0506_0708u64;
        Cursor::build(&mut buf).u64_le(&mut v).unwrap();
        assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_text_roundtrip() {
        let mut buf = [0u8; 16];
        let mut t = PtpText::from("abc");
        let written = {
            let mut c = Cursor::build(&mut buf);
            c.text(&mut t).unwrap();
            c.size()
        };
        assert_eq!(written, 4);
        assert_eq!(&buf[..4], &[3, b'a', b'b', b'c']);
        let mut back = PtpText::default();
        Cursor::parse(&buf[..4]).text(&mut back).unwrap();
        assert_eq!(back.as_str(), "abc");
    }

    #[test]
    fn test_text_invalid_utf8() {
        let raw = [2u8, 0xff, 0xfe];
        let mut t = PtpText::default();
        assert_eq!(
            Cursor::parse(&raw).text(&mut t),
            Err(MngError::Val { field: "PTPText" })
        );
    }

    #[test]
    fn test_reserved_zero_fill() {
        let mut buf = [0xaau8; 4];
        let mut c = Cursor::build(&mut buf);
        c.reserved(3).unwrap();
        assert_eq!(buf[..3], [0, 0, 0]);
        assert_eq!(buf[3], 0xaa);
    }

    #[test]
    fn test_octets_rest() {
        let raw = [1u8, 2, 3, 4, 5];
        let mut c = Cursor::parse(&raw);
        let mut first = 0u8;
        c.u8(&mut first).unwrap();
        let mut rest = Octets::new();
        c.octets_rest(&mut rest).unwrap();
        assert_eq!(rest.as_slice(), &[2, 3, 4, 5]);
        assert_eq!(c.left(), 0);
    }
}
