//! Scenario: an accessor property cycle (two objects whose getters
//! reference each other) with no path from any root must still be
//! collected — the point of tracing GC over a cycle that reference
//! counting alone could never reclaim.

use crate::{
    consts::Limits,
    context::Context,
    object::{ObjectKind, Property, PropertyFlags, PropertyName},
    value::Value,
};

#[test]
fn unreachable_accessor_cycle_is_collected() {
    let mut ctx = Context::new(Limits {
        max_objects: 16,
        max_strings: 16,
        max_literal_bytes: 1024,
    });

    let a = ctx.create_object(ObjectKind::Ordinary, None).unwrap();
    let b = ctx.create_object(ObjectKind::Ordinary, None).unwrap();

    ctx.objects
        .define_own(
            a,
            Property::accessor(PropertyName::ArrayIndex(0), Some(b), None, PropertyFlags::default()),
        )
        .unwrap();
    ctx.objects
        .define_own(
            b,
            Property::accessor(PropertyName::ArrayIndex(0), Some(a), None, PropertyFlags::default()),
        )
        .unwrap();

    let stats = ctx.collect_garbage(&[]).unwrap();
    assert_eq!(stats.objects_freed, 2);
    assert_eq!(ctx.objects.live_handles().count(), 0);
}

#[test]
fn reachable_accessor_cycle_survives_collection() {
    let mut ctx = Context::new(Limits {
        max_objects: 16,
        max_strings: 16,
        max_literal_bytes: 1024,
    });

    let root = ctx.create_object(ObjectKind::Ordinary, None).unwrap();
    let a = ctx.create_object(ObjectKind::Ordinary, None).unwrap();
    let b = ctx.create_object(ObjectKind::Ordinary, None).unwrap();

    ctx.objects
        .define_own(
            a,
            Property::accessor(PropertyName::ArrayIndex(0), Some(b), None, PropertyFlags::default()),
        )
        .unwrap();
    ctx.objects
        .define_own(
            b,
            Property::accessor(PropertyName::ArrayIndex(0), Some(a), None, PropertyFlags::default()),
        )
        .unwrap();
    ctx.objects
        .define_own(
            root,
            Property::data(PropertyName::ArrayIndex(0), Value::Object(a), PropertyFlags::default()),
        )
        .unwrap();

    let stats = ctx.collect_garbage(&[Value::Object(root)]).unwrap();
    assert_eq!(stats.objects_freed, 0);
    assert_eq!(ctx.objects.live_handles().count(), 3);
}
