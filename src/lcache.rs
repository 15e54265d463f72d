//! Component G: the property lookup inline cache.
//!
//! Grounded on `spec.md` §4.G and
//! `original_source/jerry-core/ecma/base/ecma-lcache.c`'s
//! `ecma_lcache_insert`/`ecma_lcache_lookup` (a small fixed-size
//! direct-mapped table: the string's hash picks a row, a row holds a
//! handful of entries, insertion evicts the row's oldest entry by
//! shifting everything down one slot).

use alloc::vec::Vec;

use crate::{
    consts::{HASH_ROWS_COUNT, HASH_ROW_LENGTH},
    object::{ObjectHandle, PropertyName},
};

#[derive(Debug, Clone, Copy)]
struct Entry {
    object: ObjectHandle,
    name: PropertyName,
    /// Index into the owning object's property list at the time of
    /// caching. Invalidated in bulk on any structural change to that
    /// object (see [`LCache::invalidate_object`]) rather than tracked
    /// per property, matching the original's coarse invalidation.
    property_index: u32,
}

type Row = [Option<Entry>; HASH_ROW_LENGTH];

/// Direct-mapped cache from `(object, property name)` to the
/// property's last-known slot index.
pub struct LCache {
    rows: Vec<Row>,
}

fn row_for(object: ObjectHandle, name: PropertyName) -> usize {
    let object_bits = object.compress() as u32;
    let name_bits = match name {
        PropertyName::String(h) => h.compress() as u32,
        PropertyName::ArrayIndex(i) => i,
    };
    ((object_bits ^ name_bits) as usize) % HASH_ROWS_COUNT
}

fn find_in_row(row: &Row, object: ObjectHandle, name: PropertyName) -> Option<usize> {
    for (i, slot) in row.iter().enumerate() {
        if let Some(entry) = slot {
            if entry.object == object && entry.name == name {
                return Some(i);
            }
        }
    }
    None
}

impl LCache {
    pub fn new() -> Self {
        Self {
            rows: alloc::vec![[None; HASH_ROW_LENGTH]; HASH_ROWS_COUNT],
        }
    }

    /// Look up a cached property slot, if present.
    pub fn lookup(&self, object: ObjectHandle, name: PropertyName) -> Option<u32> {
        let row = &self.rows[row_for(object, name)];
        find_in_row(row, object, name).map(|i| row[i].unwrap().property_index)
    }

    /// Insert (or refresh) a cache entry. New entries enter at the
    /// front of their row; anything pushed out the back is evicted,
    /// approximating LRU without tracking real access recency.
    pub fn insert(&mut self, object: ObjectHandle, name: PropertyName, property_index: u32) {
        let row = &mut self.rows[row_for(object, name)];
        if let Some(i) = find_in_row(row, object, name) {
            row[i].as_mut().unwrap().property_index = property_index;
            return;
        }
        for i in (1..HASH_ROW_LENGTH).rev() {
            row[i] = row[i - 1];
        }
        row[0] = Some(Entry {
            object,
            name,
            property_index,
        });
    }

    /// Drop every entry referencing `object`, used whenever a property
    /// is added/removed/reordered on that object so stale indices are
    /// never served.
    pub fn invalidate_object(&mut self, object: ObjectHandle) {
        for row in &mut self.rows {
            for slot in row.iter_mut() {
                let matches = matches!(slot, Some(entry) if entry.object == object);
                if matches {
                    *slot = None;
                }
            }
        }
    }

    /// Drop every entry, used when a full GC cycle may have freed and
    /// reused object handles.
    pub fn invalidate_all(&mut self) {
        for row in &mut self.rows {
            *row = [None; HASH_ROW_LENGTH];
        }
    }
}

impl Default for LCache {
    fn default() -> Self {
        Self::new()
    }
}
