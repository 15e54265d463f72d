//! Scenario: a function literal that closes over its own compiled code
//! (a named function expression binding its own name in its literal
//! pool) must not keep itself alive through that self-reference — only
//! external holders should be able to drop its refcount to zero.

use crate::compiled_code::{CompiledCode, CompiledCodeFlags, CompiledCodeHeader, LiteralPoolEntry};

fn self_referencing_unit() -> CompiledCode {
    CompiledCode::new(
        CompiledCodeHeader {
            flags: CompiledCodeFlags::SELF_REFERENCING | CompiledCodeFlags::STRICT_MODE,
            argument_count: 1,
            register_count: 3,
            stack_limit: 8,
        },
        alloc::vec![LiteralPoolEntry::Literal(0), LiteralPoolEntry::SelfReference],
        alloc::vec![0u8; 16],
    )
}

#[test]
fn self_reference_entry_never_resolves_to_a_literal_offset() {
    let unit = self_referencing_unit();
    assert_eq!(unit.resolve_literal(0), Some(0));
    assert_eq!(unit.resolve_literal(1), None);
}

#[test]
fn two_closures_sharing_one_blob_need_two_decrements_to_free() {
    let mut unit = self_referencing_unit();
    // Two closures created from the same function literal each hold a
    // strong reference to the blob.
    unit.ref_inc();
    assert_eq!(unit.refcount(), 2);

    assert!(!unit.ref_dec());
    assert_eq!(unit.refcount(), 1);
    assert!(unit.ref_dec());
}

#[test]
fn resolving_the_self_reference_does_not_require_a_refcount_bump() {
    let unit = self_referencing_unit();
    let before = unit.refcount();
    // Resolving every literal pool entry, including the self-reference,
    // must not mutate the refcount: only holding a new closure over the
    // blob does that, via an explicit `ref_inc` call.
    for i in 0..unit.literal_pool.len() {
        let _ = unit.resolve_literal(i);
    }
    assert_eq!(unit.refcount(), before);
}
