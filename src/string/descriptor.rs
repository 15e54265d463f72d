//! The string descriptor: a small header distinguishing which of
//! several containers backs a string's UTF-16 content.
//!
//! Grounded on `spec.md` §3.3 (LitTable / Uint32InDesc / HeapNumber /
//! HeapChunks / Concatenation / Magic / MagicEx) and on
//! `original_source/jerry-core/ecma/base/ecma-helpers-string.cpp`'s
//! `ecma_string_t` union, re-expressed as a Rust sum type instead of a
//! tagged union over raw bytes.

use alloc::{string::String, vec::Vec};
use core::cmp::Ordering;

use crate::{
    heap::Handle,
    string::{
        hash::{hash_ascii, hash_utf16},
        magic::{MagicString, MagicStringEx},
    },
};

/// Opaque handle to a string descriptor stored in the string arena.
pub type StringHandle = Handle<StringDescriptor>;

/// The container backing a string descriptor's UTF-16 content.
///
/// Construction always prefers the cheapest applicable container: a
/// literal-table reference if the text is a known literal, a packed
/// `u32` if the text is exactly that integer's canonical decimal form,
/// a magic-table id if it matches a baked-in string, and only then
/// falls back to owned heap storage.
#[derive(Debug, Clone)]
pub enum StringContainer {
    /// Reference into the compiled-code literal table (component B);
    /// `index` is an index into that unit's literal pool, not a heap
    /// handle, since literal pools are owned by compiled code.
    LitTable { index: u16 },
    /// An unsigned 32-bit integer whose canonical decimal string is this
    /// descriptor's content. Avoids heap storage for array indices.
    Uint32InDesc(u32),
    /// A double that does not fit the `Uint32InDesc` fast path, stored
    /// alongside its pre-rendered UTF-16 text.
    HeapNumber { value: f64, text: Vec<u16> },
    /// Directly owned UTF-16 code units.
    HeapChunks(Vec<u16>),
    /// A lazily-flattened concatenation of two other strings. Kept
    /// unresolved until something needs the flattened content, so
    /// building up a string via repeated `+` stays O(1) per step.
    Concatenation {
        left: StringHandle,
        right: StringHandle,
    },
    /// A base-table magic string.
    Magic(MagicString),
    /// An extended-table magic string.
    MagicEx(MagicStringEx),
}

/// A string descriptor: container plus cached metadata used to avoid
/// re-walking concatenation trees on every length/hash query.
#[derive(Debug, Clone)]
pub struct StringDescriptor {
    container: StringContainer,
    length_utf16: u32,
    hash: u8,
    refcount: u32,
}

impl StringDescriptor {
    /// Build a descriptor around an already-classified container,
    /// computing and caching its length and hash.
    pub fn new(container: StringContainer, resolve: impl FnOnce() -> Vec<u16>) -> Self {
        let (length_utf16, hash) = match &container {
            StringContainer::LitTable { .. } | StringContainer::Concatenation { .. } => {
                let units = resolve();
                (units.len() as u32, hash_utf16(&units))
            }
            StringContainer::Uint32InDesc(n) => {
                let text = uint32_to_utf16(*n);
                (text.len() as u32, hash_utf16(&text))
            }
            StringContainer::HeapNumber { text, .. } => (text.len() as u32, hash_utf16(text)),
            StringContainer::HeapChunks(units) => (units.len() as u32, hash_utf16(units)),
            StringContainer::Magic(m) => (m.len_utf16(), hash_ascii(m.as_str().as_bytes())),
            StringContainer::MagicEx(m) => (m.len_utf16(), hash_ascii(m.as_str().as_bytes())),
        };
        Self {
            container,
            length_utf16,
            hash,
            refcount: 1,
        }
    }

    pub const fn container(&self) -> &StringContainer {
        &self.container
    }

    pub const fn length_utf16(&self) -> u32 {
        self.length_utf16
    }

    pub const fn hash(&self) -> u8 {
        self.hash
    }

    pub const fn refcount(&self) -> u32 {
        self.refcount
    }

    pub fn ref_inc(&mut self) {
        self.refcount = self
            .refcount
            .checked_add(1)
            .expect("string refcount overflow");
    }

    /// Decrement the refcount, returning whether it reached zero.
    pub fn ref_dec(&mut self) -> bool {
        self.refcount -= 1;
        self.refcount == 0
    }

    pub const fn is_concatenation(&self) -> bool {
        matches!(self.container, StringContainer::Concatenation { .. })
    }
}

fn uint32_to_utf16(n: u32) -> Vec<u16> {
    let mut s = String::new();
    write_decimal(&mut s, n);
    s.encode_utf16().collect()
}

fn write_decimal(out: &mut String, n: u32) {
    use core::fmt::Write;
    let _ = write!(out, "{n}");
}

/// Whether `text` is the canonical (no leading zero, no overflow)
/// decimal rendering of some `u32`, and if so, which one. Mirrors the
/// original's `ecma_string_to_array_index`-style fast-path check used
/// when interning new strings.
pub fn canonical_uint32(text: &str) -> Option<u32> {
    if text.is_empty() || (text.len() > 1 && text.starts_with('0')) {
        return None;
    }
    let n: u32 = text.parse().ok()?;
    let mut buf = String::new();
    write_decimal(&mut buf, n);
    (buf == text).then_some(n)
}

/// Structural ordering comparator over two resolved UTF-16 slices,
/// matching the spec's codepoint-order `compare` operation.
pub fn compare_utf16(a: &[u16], b: &[u16]) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_uint32_rejects_leading_zero() {
        assert_eq!(canonical_uint32("0"), Some(0));
        assert_eq!(canonical_uint32("01"), None);
        assert_eq!(canonical_uint32("42"), Some(42));
        assert_eq!(canonical_uint32("4a"), None);
    }

    #[test]
    fn ref_dec_to_zero_signals_collection() {
        let mut desc = StringDescriptor::new(StringContainer::Uint32InDesc(7), Vec::new);
        desc.ref_inc();
        assert!(!desc.ref_dec());
        assert!(desc.ref_dec());
    }
}
