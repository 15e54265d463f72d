//! Component A: a generic slot arena standing in for the spec's raw byte
//! heap and compressed pointers.
//!
//! Per `spec.md` §9's own redesign note, this crate models a compressed
//! pointer as an arena [`Handle`] rather than a bit-shifted byte offset:
//! the handle *is* the compressed pointer, so `compress`/`decompress`
//! degenerate to the identity projection into the arena and the
//! round-trip invariant (`decompress(compress(p)) == p`) holds
//! structurally rather than by careful arithmetic.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::{
    consts::CP_NULL,
    error::FatalReason,
};

/// A compressed pointer to a `T` stored in some [`Heap<T>`].
///
/// `Handle` is intentionally `Copy` and carries no arena identity of its
/// own (as the original compressed pointers did not either) — using a
/// handle against the wrong arena is a logic error the type system does
/// not catch, matching the original's lack of type-checked arenas.
#[derive(educe::Debug)]
#[educe(Debug(bound = ""))]
pub struct Handle<T> {
    index: u16,
    #[educe(Debug(ignore))]
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Handle<T> {}
impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}
impl<T> Eq for Handle<T> {}
impl<T> core::hash::Hash for Handle<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> Handle<T> {
    /// The sentinel handle denoting `CP_NULL`.
    pub const NULL: Self = Self {
        index: CP_NULL,
        _marker: PhantomData,
    };

    fn new(index: u16) -> Self {
        debug_assert_ne!(index, CP_NULL, "index collides with the null sentinel");
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Whether this handle is the null sentinel.
    pub const fn is_null(&self) -> bool {
        self.index == CP_NULL
    }

    /// The raw 16-bit compressed-pointer value.
    pub const fn compress(&self) -> u16 {
        self.index
    }

    /// Reconstruct a handle from a raw compressed-pointer value.
    /// Returns `None` for `CP_NULL`.
    pub const fn decompress(cp: u16) -> Option<Self> {
        if cp == CP_NULL {
            None
        } else {
            Some(Self {
                index: cp,
                _marker: PhantomData,
            })
        }
    }
}

enum Slot<T> {
    Occupied(T),
    Free { next: Option<u16> },
}

/// A suggestion for where an allocation should land, preserved from the
/// spec's bidirectional-allocation hint even though this arena has no
/// short/long-term ends to place it at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermHint {
    /// Expected to be freed soon (e.g. scratch buffers).
    ShortTerm,
    /// Expected to live for the lifetime of the context.
    LongTerm,
}

/// A fixed-capacity slot arena of `T`, addressed by 16-bit [`Handle<T>`].
pub struct Heap<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u16>,
    capacity: usize,
    live: usize,
}

impl<T> Heap<T> {
    /// Create an arena that holds at most `capacity` live values.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(u16::MAX as usize - 1);
        Self {
            slots: Vec::new(),
            free_head: None,
            capacity,
            live: 0,
        }
    }

    /// Number of live values currently stored.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the arena holds no live values.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Recommend an allocation batch size for the given hint. Short-term
    /// allocations are not batched; long-term ones round up to reduce
    /// the frequency of future growth, mirroring the spec's
    /// `recommend_allocation_size`.
    pub fn recommend_allocation_size(&self, hint: TermHint) -> usize {
        match hint {
            TermHint::ShortTerm => 1,
            TermHint::LongTerm => 16,
        }
    }

    /// Allocate a slot for `value`, failing with [`FatalReason::OutOfMemory`]
    /// once `capacity` live values are already stored.
    pub fn alloc(&mut self, value: T) -> Result<Handle<T>, FatalReason> {
        if self.live >= self.capacity {
            return Err(FatalReason::OutOfMemory);
        }

        if let Some(index) = self.free_head.take() {
            let slot = &mut self.slots[index as usize];
            let next = match slot {
                Slot::Free { next } => *next,
                Slot::Occupied(_) => unreachable!("free list pointed at an occupied slot"),
            };
            self.free_head = next;
            *slot = Slot::Occupied(value);
            self.live += 1;
            return Ok(Handle::new(index));
        }

        let index = self.slots.len();
        if index >= u16::MAX as usize - 1 {
            return Err(FatalReason::OutOfMemory);
        }
        self.slots.push(Slot::Occupied(value));
        self.live += 1;
        Ok(Handle::new(index as u16))
    }

    /// Borrow the value behind `handle`.
    pub fn get(&self, handle: Handle<T>) -> &T {
        match self.slots.get(handle.index as usize) {
            Some(Slot::Occupied(value)) => value,
            _ => panic!("dangling or stale heap handle"),
        }
    }

    /// Mutably borrow the value behind `handle`.
    pub fn get_mut(&mut self, handle: Handle<T>) -> &mut T {
        match self.slots.get_mut(handle.index as usize) {
            Some(Slot::Occupied(value)) => value,
            _ => panic!("dangling or stale heap handle"),
        }
    }

    /// Free the slot behind `handle`, returning the stored value.
    pub fn free(&mut self, handle: Handle<T>) -> T {
        let index = handle.index;
        let slot = self
            .slots
            .get_mut(index as usize)
            .expect("dangling or stale heap handle");
        let value = match core::mem::replace(
            slot,
            Slot::Free {
                next: self.free_head,
            },
        ) {
            Slot::Occupied(value) => value,
            Slot::Free { .. } => panic!("double free of heap handle"),
        };
        self.free_head = Some(index);
        self.live -= 1;
        value
    }

    /// Iterate over all currently live handles, in arena order.
    pub fn live_handles(&self) -> impl Iterator<Item = Handle<T>> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Slot::Occupied(_) => Some(Handle::new(i as u16)),
                Slot::Free { .. } => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_compress_decompress() {
        let mut heap: Heap<u32> = Heap::new(16);
        let h = heap.alloc(42).unwrap();
        let cp = h.compress();
        let h2 = Handle::<u32>::decompress(cp).unwrap();
        assert_eq!(*heap.get(h2), 42);
    }

    #[test]
    fn null_compresses_to_cp_null() {
        assert_eq!(Handle::<u32>::NULL.compress(), CP_NULL);
        assert!(Handle::<u32>::decompress(CP_NULL).is_none());
    }

    #[test]
    fn free_slot_is_reused() {
        let mut heap: Heap<u32> = Heap::new(2);
        let a = heap.alloc(1).unwrap();
        heap.free(a);
        let b = heap.alloc(2).unwrap();
        assert_eq!(b.compress(), a.compress());
    }

    #[test]
    fn alloc_fails_past_capacity() {
        let mut heap: Heap<u32> = Heap::new(1);
        heap.alloc(1).unwrap();
        assert_eq!(heap.alloc(2), Err(FatalReason::OutOfMemory));
    }

    #[quickcheck_macros::quickcheck]
    fn round_trip_holds_for_any_sequence(values: Vec<u32>) -> bool {
        let mut heap: Heap<u32> = Heap::new(values.len().max(1) + 1);
        values.iter().all(|&v| {
            let h = match heap.alloc(v) {
                Ok(h) => h,
                Err(_) => return true,
            };
            let cp = h.compress();
            match Handle::<u32>::decompress(cp) {
                Some(h2) => *heap.get(h2) == v,
                None => false,
            }
        })
    }
}
