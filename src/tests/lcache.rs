//! Scenario: a cached property lookup must be invalidated the moment
//! the object's shape changes, and a large object's hashmap must agree
//! with the LCache about where a property lives.

use crate::{
    consts::Limits,
    context::Context,
    object::{ObjectKind, Property, PropertyFlags, PropertyName},
    value::Value,
};

#[test]
fn cache_hit_then_invalidation_on_delete() {
    let mut ctx = Context::new(Limits::default());
    let obj = ctx.create_object(ObjectKind::Ordinary, None).unwrap();
    let name = PropertyName::ArrayIndex(0);

    ctx.objects
        .define_own(obj, Property::data(name, Value::Number(7.0), PropertyFlags::default()))
        .unwrap();
    let (_, prop) = ctx.objects.find_named_property(obj, name).unwrap();
    assert!(matches!(prop.kind, crate::object::PropertyKind::Data(Value::Number(n)) if n == 7.0));

    ctx.lcache.insert(obj, name, 0);
    assert_eq!(ctx.lcache.lookup(obj, name), Some(0));

    ctx.objects.delete_own(obj, name).unwrap();
    ctx.lcache.invalidate_object(obj);
    assert_eq!(ctx.lcache.lookup(obj, name), None);
    assert!(ctx.objects.find_own(obj, name).is_none());
}

#[test]
fn lcache_entry_agrees_with_hashmap_backed_object() {
    let mut ctx = Context::new(Limits::default());
    let obj = ctx.create_object(ObjectKind::Ordinary, None).unwrap();

    for i in 0..(crate::consts::HASHMAP_MIN_SIZE as u32 + 4) {
        ctx.objects
            .define_own(
                obj,
                Property::data(PropertyName::ArrayIndex(i), Value::Number(i as f64), PropertyFlags::default()),
            )
            .unwrap();
    }
    assert!(ctx.objects.get(obj).hashmap.is_some());

    let target = PropertyName::ArrayIndex(3);
    let index = ctx.objects.get(obj).find_own(target).unwrap();
    ctx.lcache.insert(obj, target, index as u32);

    assert_eq!(ctx.lcache.lookup(obj, target), Some(index as u32));
    let value = ctx.objects.get_value(obj, target).unwrap();
    assert!(matches!(value, Value::Number(n) if n == 3.0));
}
