//! Scenario: a lazily-built concatenation must hash and compare
//! identically to the equivalent flattened string, and chained
//! concatenations must flatten correctly regardless of nesting shape.

use crate::{consts::Limits, context::Context};

#[test]
fn concatenation_hash_matches_flattened_string() {
    let mut ctx = Context::new(Limits::default());

    let a = ctx.strings.new_from_utf8("hello, ").unwrap();
    let b = ctx.strings.new_from_utf8("world").unwrap();
    let cat = ctx.strings.concat(a, b).unwrap();
    let flat = ctx.strings.new_from_utf8("hello, world").unwrap();

    assert_eq!(ctx.strings.get(cat).hash(), ctx.strings.get(flat).hash());
    assert_eq!(ctx.strings.get(cat).length_utf16(), ctx.strings.get(flat).length_utf16());
    assert!(ctx.strings.equals(cat, flat));
}

#[test]
fn nested_concatenation_flattens_left_to_right() {
    let mut ctx = Context::new(Limits::default());

    let a = ctx.strings.new_from_utf8("a").unwrap();
    let b = ctx.strings.new_from_utf8("b").unwrap();
    let c = ctx.strings.new_from_utf8("c").unwrap();

    let ab = ctx.strings.concat(a, b).unwrap();
    let abc = ctx.strings.concat(ab, c).unwrap();

    let flat = ctx.strings.new_from_utf8("abc").unwrap();
    assert!(ctx.strings.equals(abc, flat));
}
