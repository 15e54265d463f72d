//! The engine context: owns every arena and subsystem this crate
//! defines, grouping the global state a VM (out of scope) would
//! otherwise thread through free functions one handle at a time.
//!
//! Grounded on `spec.md` §9's redesign note adopting a single
//! `Context` struct in place of the original's scattered global
//! statics (`original_source/jerry-core/jcontext/jcontext.h`'s
//! `jerry_context_t`), and on the teacher's own pattern of a top-level
//! struct (`Interpreter`) owning every subsystem an operation needs.

use crate::{
    consts::Limits,
    error::FatalResult,
    gc::{Finalizer, Gc, GcStats, NoopFinalizer},
    lcache::LCache,
    literal::LiteralStorage,
    object::{ObjectArena, ObjectHandle, ObjectKind},
    string::StringArena,
    value::Value,
};

/// Owns the object arena, string arena, literal recordset, LCache, and
/// GC state for one running engine instance.
pub struct Context {
    pub objects: ObjectArena,
    pub strings: StringArena,
    pub literals: LiteralStorage,
    pub lcache: LCache,
    gc: Gc,
}

impl Context {
    pub fn new(limits: Limits) -> Self {
        Self {
            objects: ObjectArena::new(limits.max_objects),
            strings: StringArena::new(limits.max_strings),
            literals: LiteralStorage::new(limits.max_literal_bytes),
            lcache: LCache::new(),
            gc: Gc::new(),
        }
    }

    /// Create an object and notify the GC heuristic that a new
    /// allocation happened.
    pub fn create_object(
        &mut self,
        kind: ObjectKind,
        prototype: Option<ObjectHandle>,
    ) -> FatalResult<ObjectHandle> {
        let handle = self.objects.create(kind, prototype)?;
        self.gc.note_allocation();
        Ok(handle)
    }

    /// Whether enough allocation pressure has built up to justify a
    /// collection before the next operation that might need memory.
    pub fn gc_should_run(&self) -> bool {
        self.gc.should_run(self.objects.len())
    }

    /// Run a full GC cycle rooted at `roots`, using the no-op
    /// finalizer (no host-side cleanup registered).
    pub fn collect_garbage(&mut self, roots: &[Value]) -> FatalResult<GcStats> {
        self.collect_garbage_with(roots, &mut NoopFinalizer)
    }

    /// Run a full GC cycle with a caller-supplied finalizer, then
    /// invalidate the LCache wholesale since collected handles may be
    /// reused by future allocations.
    pub fn collect_garbage_with(
        &mut self,
        roots: &[Value],
        finalizer: &mut impl Finalizer,
    ) -> FatalResult<GcStats> {
        let stats = self
            .gc
            .collect(&mut self.objects, &mut self.strings, roots, finalizer)?;
        if stats.objects_freed > 0 {
            self.lcache.invalidate_all();
        }
        Ok(stats)
    }
}
