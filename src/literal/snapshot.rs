//! Snapshot contract for the literal recordset: a position-independent
//! serialization a host can embed and reload without re-parsing source.
//!
//! Grounded on `spec.md` §6.4 and
//! `original_source/jerry-core/jerry-snapshot.c`'s literal-table
//! section (a flat array of `{kind, bytes}` pairs, no back-pointers —
//! those are an in-memory allocator detail, not a wire concern).

use alloc::vec::Vec;

use crate::literal::{
    record::RecordKind,
    storage::LiteralStorage,
};

/// One literal entry as it appears in a snapshot: no offsets, no
/// free-list bookkeeping, just content in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLiteral {
    pub kind: RecordKind,
    pub payload: Vec<u8>,
}

/// Serialize every occupied record into snapshot order (the order
/// `LiteralStorage::iter` yields them, which is allocation order modulo
/// reused holes).
pub fn to_snapshot(storage: &LiteralStorage) -> Vec<SnapshotLiteral> {
    storage
        .iter()
        .map(|(_, kind, payload)| SnapshotLiteral {
            kind,
            payload: payload.to_vec(),
        })
        .collect()
}

/// Rebuild a fresh recordset from snapshot entries. The resulting
/// offsets are not guaranteed to match the original's; callers that
/// need stable indices should capture the offsets `rebuild` returns.
pub fn rebuild(entries: &[SnapshotLiteral], max_bytes: usize) -> (LiteralStorage, Vec<u32>) {
    let mut storage = LiteralStorage::new(max_bytes);
    let offsets = entries
        .iter()
        .map(|entry| {
            storage
                .alloc(entry.kind, &entry.payload)
                .expect("snapshot literal table exceeds configured recordset capacity")
        })
        .collect();
    (storage, offsets)
}
