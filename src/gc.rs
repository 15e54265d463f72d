//! Component H: tri-color incremental mark-sweep over the object
//! graph.
//!
//! Grounded on `spec.md` §3/§4.H and
//! `original_source/jerry-core/ecma/base/ecma-gc.c`'s
//! `ecma_gc_mark`/`ecma_gc_sweep`. The original threads a white/black
//! bit through an intrusive linked list and flips which bit value means
//! "unmarked" each cycle to avoid an O(n) reset pass; this crate keeps
//! that polarity flip (`Gc::current_black`) but replaces the intrusive
//! list with an explicit gray worklist (`Vec<ObjectHandle>`), a
//! "side-table" in the arena-handle sense rather than bytes threaded
//! through the objects themselves.
//!
//! Strings are reference-counted, not traced: an object's sweep walks
//! its own string-valued properties and decrements their refcounts, so
//! only the object graph needs tri-color bookkeeping.

use alloc::vec::Vec;

use crate::{
    consts::{GC_LOOP_LIMIT, NEW_OBJECTS_SHARE_TO_START_GC},
    error::FatalReason,
    object::{ObjectArena, ObjectHandle},
    string::StringArena,
    value::Value,
};

/// An object's mark color. Only two states are stored on the object
/// itself; "gray" (visited but not yet fully scanned) is modeled by
/// membership in the collector's worklist rather than a third stored
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    const fn flip(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::White
    }
}

/// Outcome of one collection pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcStats {
    pub objects_freed: usize,
    pub objects_resurrected: usize,
}

/// A trait a host implements to react to an object being collected —
/// e.g. releasing a native resource attached to it. Mirrors the
/// spec's finalizer contract at the GC/host boundary.
pub trait Finalizer {
    /// Called once per object as it is swept. Returning `true` asks the
    /// collector to resurrect the object (keep it alive one more cycle)
    /// instead of freeing it, e.g. because finalization re-registered
    /// it with a live root.
    fn finalize(&mut self, object: ObjectHandle, objects: &ObjectArena) -> bool;
}

/// A finalizer that never resurrects anything, for contexts with no
/// host-side cleanup to run.
pub struct NoopFinalizer;

impl Finalizer for NoopFinalizer {
    fn finalize(&mut self, _object: ObjectHandle, _objects: &ObjectArena) -> bool {
        false
    }
}

/// The incremental mark-sweep collector's own state, carried across
/// collections so the polarity flip is meaningful.
pub struct Gc {
    current_black: Color,
    objects_since_last_gc: usize,
}

impl Gc {
    pub fn new() -> Self {
        Self {
            current_black: Color::Black,
            objects_since_last_gc: 0,
        }
    }

    /// Record that an object was allocated, for the low-severity GC
    /// trigger heuristic.
    pub fn note_allocation(&mut self) {
        self.objects_since_last_gc += 1;
    }

    /// Whether enough objects have been allocated since the last
    /// collection to justify a low-severity pass.
    pub fn should_run(&self, live_object_count: usize) -> bool {
        live_object_count > 0
            && self.objects_since_last_gc * NEW_OBJECTS_SHARE_TO_START_GC >= live_object_count
    }

    /// Run one full mark-sweep collection, repeating while finalizers
    /// resurrect objects (up to `GC_LOOP_LIMIT` rounds) before giving up
    /// fatally.
    pub fn collect(
        &mut self,
        objects: &mut ObjectArena,
        strings: &mut StringArena,
        roots: &[Value],
        finalizer: &mut impl Finalizer,
    ) -> Result<GcStats, FatalReason> {
        let mut stats = GcStats::default();
        for _ in 0..GC_LOOP_LIMIT {
            let round = self.mark_and_sweep(objects, strings, roots, finalizer);
            stats.objects_freed += round.objects_freed;
            stats.objects_resurrected += round.objects_resurrected;
            if round.objects_resurrected == 0 {
                self.objects_since_last_gc = 0;
                return Ok(stats);
            }
        }
        Err(FatalReason::UnterminatedGcLoops)
    }

    fn mark_and_sweep(
        &mut self,
        objects: &mut ObjectArena,
        strings: &mut StringArena,
        roots: &[Value],
        finalizer: &mut impl Finalizer,
    ) -> GcStats {
        self.current_black = self.current_black.flip();
        let black = self.current_black;

        let mut gray: Vec<ObjectHandle> = Vec::new();
        for root in roots {
            if let Some(handle) = root.as_object() {
                mark(objects, handle, black, &mut gray);
            }
        }
        while let Some(handle) = gray.pop() {
            let children = {
                let mut children = Vec::new();
                objects.get(handle).each_child_object(|child| children.push(child));
                children
            };
            for child in children {
                mark(objects, child, black, &mut gray);
            }
        }

        let mut stats = GcStats::default();
        let garbage: Vec<ObjectHandle> = objects
            .live_handles()
            .filter(|&h| objects.get(h).color() != black)
            .collect();

        for handle in garbage {
            if finalizer.finalize(handle, objects) {
                objects.get_mut(handle).set_color(black);
                stats.objects_resurrected += 1;
                continue;
            }
            let header = objects.free(handle);
            header.each_child_string(|s| strings.ref_dec(s));
            stats.objects_freed += 1;
        }
        stats
    }
}

impl Default for Gc {
    fn default() -> Self {
        Self::new()
    }
}

fn mark(objects: &mut ObjectArena, handle: ObjectHandle, black: Color, gray: &mut Vec<ObjectHandle>) {
    if objects.get(handle).color() == black {
        return;
    }
    objects.get_mut(handle).set_color(black);
    gray.push(handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ObjectKind, Property, PropertyFlags, PropertyName};

    #[test]
    fn unreachable_object_is_freed() {
        let mut objects = ObjectArena::new(16);
        let mut strings = StringArena::new(16);
        let mut gc = Gc::new();

        let root = objects.create(ObjectKind::Ordinary, None).unwrap();
        let _orphan = objects.create(ObjectKind::Ordinary, None).unwrap();

        let roots = [Value::Object(root)];
        let stats = gc
            .collect(&mut objects, &mut strings, &roots, &mut NoopFinalizer)
            .unwrap();
        assert_eq!(stats.objects_freed, 1);
        assert_eq!(objects.live_handles().count(), 1);
    }

    #[test]
    fn object_reachable_through_property_chain_survives() {
        let mut objects = ObjectArena::new(16);
        let mut strings = StringArena::new(16);
        let mut gc = Gc::new();

        let root = objects.create(ObjectKind::Ordinary, None).unwrap();
        let child = objects.create(ObjectKind::Ordinary, None).unwrap();
        objects
            .define_own(
                root,
                Property::data(
                    PropertyName::ArrayIndex(0),
                    Value::Object(child),
                    PropertyFlags::default(),
                ),
            )
            .unwrap();

        let roots = [Value::Object(root)];
        let stats = gc
            .collect(&mut objects, &mut strings, &roots, &mut NoopFinalizer)
            .unwrap();
        assert_eq!(stats.objects_freed, 0);
        assert_eq!(objects.live_handles().count(), 2);
    }

    #[test]
    fn string_valued_property_is_released_when_owner_dies() {
        let mut objects = ObjectArena::new(16);
        let mut strings = StringArena::new(16);
        let mut gc = Gc::new();

        let doomed = objects.create(ObjectKind::Ordinary, None).unwrap();
        let s = strings.new_from_utf8("held-by-doomed-object").unwrap();
        strings.ref_inc(s);
        objects
            .define_own(
                doomed,
                Property::data(PropertyName::ArrayIndex(0), Value::Str(s), PropertyFlags::default()),
            )
            .unwrap();

        let stats = gc
            .collect(&mut objects, &mut strings, &[], &mut NoopFinalizer)
            .unwrap();
        assert_eq!(stats.objects_freed, 1);
        // The owner's ref_inc plus the arena's own initial ref means one
        // decrement remains outstanding; drop it directly to observe
        // the descriptor reach zero without leaking in the test itself.
        strings.ref_dec(s);
    }
}
