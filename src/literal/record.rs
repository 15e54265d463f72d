//! Literal record encoding: the variable-length header each record in
//! the recordset byte stream carries.
//!
//! Grounded on `spec.md` §3.5 and
//! `original_source/jerry-core/parser/js/byte-code/lit-storage.c`'s
//! `rcs_record_t` unit header (a one-byte kind tag plus a rounded-up
//! length recorded in `RECORD_UNIT` granules), re-expressed as a plain
//! Rust struct instead of bitfields over a raw `uint8_t *`.

use alloc::vec::Vec;

use crate::consts::RECORD_UNIT;

/// What kind of payload a literal record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Raw UTF-16 code units (a non-magic, non-numeric string literal).
    Charset,
    /// An IEEE-754 double stored as its 8-byte little-endian form.
    Number,
    /// Index into the base magic-string table.
    Magic,
    /// Index into the extended magic-string table.
    MagicEx,
    /// A hole in the recordset available for reuse.
    Free,
}

impl RecordKind {
    const fn tag(self) -> u8 {
        match self {
            Self::Charset => 0,
            Self::Number => 1,
            Self::Magic => 2,
            Self::MagicEx => 3,
            Self::Free => 4,
        }
    }

    const fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Self::Charset,
            1 => Self::Number,
            2 => Self::Magic,
            3 => Self::MagicEx,
            _ => Self::Free,
        }
    }
}

/// The header every record begins with: a kind tag, the record's total
/// size in bytes (including this header, rounded up to `RECORD_UNIT`),
/// and for `Free` records only, a back-pointer to the previous record's
/// offset enabling O(1) merge-on-free without a backward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub kind: RecordKind,
    pub size: u32,
    pub prev_offset: u32,
}

/// Byte length of an encoded header: 1 (tag) + 4 (size) + 4 (prev_offset).
pub const HEADER_LEN: usize = 9;

impl RecordHeader {
    pub fn encode(self, out: &mut Vec<u8>) {
        out.push(self.kind.tag());
        out.extend_from_slice(&self.size.to_le_bytes());
        out.extend_from_slice(&self.prev_offset.to_le_bytes());
    }

    pub fn decode(bytes: &[u8]) -> Self {
        let kind = RecordKind::from_tag(bytes[0]);
        let size = u32::from_le_bytes(bytes[1..5].try_into().unwrap());
        let prev_offset = u32::from_le_bytes(bytes[5..9].try_into().unwrap());
        Self {
            kind,
            size,
            prev_offset,
        }
    }
}

/// Round `len` up to the nearest `RECORD_UNIT` boundary.
pub const fn round_up(len: usize) -> usize {
    (len + RECORD_UNIT - 1) / RECORD_UNIT * RECORD_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips() {
        let header = RecordHeader {
            kind: RecordKind::Charset,
            size: 64,
            prev_offset: 12,
        };
        let mut buf = Vec::new();
        header.encode(&mut buf);
        assert_eq!(RecordHeader::decode(&buf), header);
    }

    #[test]
    fn round_up_respects_unit() {
        assert_eq!(round_up(0), 0);
        assert_eq!(round_up(1), RECORD_UNIT);
        assert_eq!(round_up(RECORD_UNIT), RECORD_UNIT);
        assert_eq!(round_up(RECORD_UNIT + 1), RECORD_UNIT * 2);
    }
}
