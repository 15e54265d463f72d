//! Component I: the compiled-code blob contract.
//!
//! The lexer/parser/compiler producing this blob and the VM dispatch
//! loop consuming it are both out of scope (`spec.md`'s Non-goals);
//! this module only fixes the shape of the blob itself, since snapshot
//! loading and refcounting both need to agree on it.
//!
//! Grounded on `spec.md` §3.6/§6.2 and
//! `original_source/jerry-core/jmem/jmem-heap.h` plus
//! `jerry-core/vm/vm-defines.h`'s `ecma_compiled_code_t` header: a
//! fixed header (size, literal pool bounds, flags, refcount), a literal
//! pool, and an opcode stream, with a self-reference flag avoiding
//! refcount cycles when a function literal closes over its own
//! compiled code.

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::literal::LiteralOffset;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CompiledCodeFlags: u16 {
        const STRICT_MODE   = 0b0000_0001;
        const ARROW_FUNCTION = 0b0000_0010;
        const GENERATOR      = 0b0000_0100;
        /// This unit's literal pool contains a literal referring back
        /// to this very compiled-code blob (a named function
        /// expression binding its own name, for instance). Dereferencing
        /// that literal must not itself bump the refcount, or the blob
        /// could never reach zero.
        const SELF_REFERENCING = 0b0000_1000;
    }
}

/// One entry in a compiled-code unit's literal pool: either a plain
/// literal-table reference, or the blob's own self-reference sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralPoolEntry {
    Literal(LiteralOffset),
    SelfReference,
}

/// The fixed header every compiled-code blob carries.
#[derive(Debug, Clone, Copy)]
pub struct CompiledCodeHeader {
    pub flags: CompiledCodeFlags,
    pub argument_count: u16,
    pub register_count: u16,
    pub stack_limit: u16,
}

/// A compiled-code unit: header, literal pool, and raw opcode bytes.
/// Refcounted so multiple closures created from the same function
/// literal can share one blob.
#[derive(Debug)]
pub struct CompiledCode {
    pub header: CompiledCodeHeader,
    pub literal_pool: Vec<LiteralPoolEntry>,
    pub opcodes: Vec<u8>,
    refcount: u32,
}

impl CompiledCode {
    pub fn new(
        header: CompiledCodeHeader,
        literal_pool: Vec<LiteralPoolEntry>,
        opcodes: Vec<u8>,
    ) -> Self {
        Self {
            header,
            literal_pool,
            opcodes,
            refcount: 1,
        }
    }

    pub const fn refcount(&self) -> u32 {
        self.refcount
    }

    pub fn ref_inc(&mut self) {
        self.refcount = self
            .refcount
            .checked_add(1)
            .expect("compiled code refcount overflow");
    }

    /// Decrement the refcount, returning whether it reached zero and
    /// the blob should be dropped.
    ///
    /// Self-referencing literal pool entries are never counted: a blob
    /// referencing itself must not keep itself alive, so dereferencing
    /// a `LiteralPoolEntry::SelfReference` skips the increment that
    /// would otherwise happen when a literal resolves to a nested
    /// function.
    pub fn ref_dec(&mut self) -> bool {
        self.refcount -= 1;
        self.refcount == 0
    }

    /// Resolve a literal pool entry, returning `None` for a
    /// self-reference (callers recover the owning blob from context
    /// rather than through the pool).
    pub fn resolve_literal(&self, index: usize) -> Option<LiteralOffset> {
        match self.literal_pool.get(index)? {
            LiteralPoolEntry::Literal(offset) => Some(*offset),
            LiteralPoolEntry::SelfReference => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompiledCode {
        CompiledCode::new(
            CompiledCodeHeader {
                flags: CompiledCodeFlags::SELF_REFERENCING,
                argument_count: 0,
                register_count: 2,
                stack_limit: 4,
            },
            alloc::vec![LiteralPoolEntry::Literal(0), LiteralPoolEntry::SelfReference],
            alloc::vec![0u8; 4],
        )
    }

    #[test]
    fn self_reference_does_not_resolve_to_an_offset() {
        let code = sample();
        assert_eq!(code.resolve_literal(0), Some(0));
        assert_eq!(code.resolve_literal(1), None);
    }

    #[test]
    fn refcount_reaches_zero_after_matching_dec() {
        let mut code = sample();
        code.ref_inc();
        assert!(!code.ref_dec());
        assert!(code.ref_dec());
    }
}
