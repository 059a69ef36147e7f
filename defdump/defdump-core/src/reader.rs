//! Big-endian byte cursor over one archive entry.

use bytes::{Buf, Bytes};

use crate::error::ReadError;

/// Characters for bytes `0x80..=0x9F` in the CP-1252 code page.
///
/// `'\u{FFFD}'` marks the five bytes CP-1252 leaves undefined.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{FFFD}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{FFFD}', '\u{017D}', '\u{FFFD}',
    '\u{FFFD}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{FFFD}', '\u{017E}', '\u{0178}',
];

/// Cursor used by every opcode table.
///
/// All multi-byte reads are big-endian. Every read fails with [`ReadError`]
/// instead of panicking when the payload is exhausted.
pub struct Reader {
    buf: Bytes,
    initial_len: usize,
}

impl Reader {
    pub fn new(data: impl Into<Bytes>) -> Self {
        let buf = data.into();
        let initial_len = buf.len();
        Self { buf, initial_len }
    }

    /// Offset of the next unread byte from the start of the payload.
    pub fn position(&self) -> usize {
        self.initial_len - self.buf.remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn underrun(&self, needed: usize) -> ReadError {
        ReadError {
            offset: self.position(),
            needed,
            remaining: self.buf.remaining(),
        }
    }

    pub fn peek_u8(&self) -> Result<u8, ReadError> {
        self.buf.first().copied().ok_or_else(|| self.underrun(1))
    }

    pub fn u8(&mut self) -> Result<u8, ReadError> {
        self.buf.try_get_u8().map_err(|_| self.underrun(1))
    }

    pub fn i8(&mut self) -> Result<i8, ReadError> {
        self.buf.try_get_i8().map_err(|_| self.underrun(1))
    }

    pub fn u16(&mut self) -> Result<u16, ReadError> {
        self.buf.try_get_u16().map_err(|_| self.underrun(2))
    }

    pub fn i16(&mut self) -> Result<i16, ReadError> {
        self.buf.try_get_i16().map_err(|_| self.underrun(2))
    }

    /// Unsigned 24-bit integer.
    pub fn medium(&mut self) -> Result<u32, ReadError> {
        self.buf
            .try_get_uint(3)
            .map(|v| v as u32)
            .map_err(|_| self.underrun(3))
    }

    pub fn i32(&mut self) -> Result<i32, ReadError> {
        self.buf.try_get_i32().map_err(|_| self.underrun(4))
    }

    /// Unsigned short where `65535` is the "none" sentinel, returned as `-1`.
    pub fn u16_or_none(&mut self) -> Result<i32, ReadError> {
        let value = self.u16()?;
        Ok(if value == u16::MAX { -1 } else { i32::from(value) })
    }

    /// Variable width integer: a short when the high bit of the next byte is
    /// clear (`32767` meaning `-1`), otherwise an int masked to 31 bits.
    pub fn big_smart(&mut self) -> Result<i32, ReadError> {
        if self.peek_u8()? & 0x80 != 0 {
            return Ok(self.i32()? & i32::MAX);
        }
        let value = self.u16()?;
        Ok(if value == 32767 { -1 } else { i32::from(value) })
    }

    /// Null-terminated CP-1252 string.
    pub fn string(&mut self) -> Result<String, ReadError> {
        let Some(end) = self.buf.iter().position(|&b| b == 0) else {
            return Err(self.underrun(self.buf.remaining() + 1));
        };
        let raw = self.buf.split_to(end);
        self.buf.advance(1);
        Ok(raw.iter().map(|&b| cp1252_char(b)).collect())
    }
}

fn cp1252_char(byte: u8) -> char {
    match byte {
        0x80..=0x9F => CP1252_HIGH[usize::from(byte - 0x80)],
        other => char::from(other),
    }
}
