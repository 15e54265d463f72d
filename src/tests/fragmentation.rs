//! Scenario: allocate a churn of literal records, free every other
//! one to fragment the recordset, then verify both that freed holes
//! get reused (no unbounded growth) and that every byte in the buffer
//! still belongs to exactly one record.

use crate::{
    consts::Limits,
    context::Context,
    literal::RecordKind,
};

#[test]
fn fragmented_recordset_reuses_holes_without_unbounded_growth() {
    let mut ctx = Context::new(Limits::default());

    let offsets: alloc::vec::Vec<_> = (0..32)
        .map(|i| ctx.literals.alloc(RecordKind::Charset, &[i as u8; 6]).unwrap())
        .collect();

    for &offset in offsets.iter().step_by(2) {
        ctx.literals.free(offset);
    }
    let len_after_fragmentation = ctx.literals.len();

    let reused: alloc::vec::Vec<_> = (0..16)
        .map(|i| ctx.literals.alloc(RecordKind::Charset, &[i as u8; 6]).unwrap())
        .collect();

    assert_eq!(ctx.literals.len(), len_after_fragmentation);
    assert!(reused.iter().all(|offset| offsets.contains(offset)));
}

#[test]
fn every_occupied_record_survives_fragmentation_round_trip() {
    let mut ctx = Context::new(Limits::default());

    let kept = ctx.literals.alloc(RecordKind::Number, &42.0f64.to_le_bytes()).unwrap();
    let churn: alloc::vec::Vec<_> = (0..8)
        .map(|i| ctx.literals.alloc(RecordKind::Charset, &[i as u8; 4]).unwrap())
        .collect();
    for &offset in &churn {
        ctx.literals.free(offset);
    }

    let (kind, payload) = ctx.literals.read(kept);
    assert_eq!(kind, RecordKind::Number);
    assert_eq!(payload[..8], 42.0f64.to_le_bytes());
}
