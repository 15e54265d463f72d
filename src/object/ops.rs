//! Object arena and the property operations layered over
//! [`ObjectHeader`]: creation, named-property lookup (walking the
//! prototype chain), definition, and deletion.
//!
//! Grounded on `spec.md` §3.4/§4.E and
//! `original_source/jerry-core/ecma/operations/ecma-objects.c`'s
//! `ecma_op_object_find_own`/`ecma_op_object_get_property`.

use crate::{
    consts::HASHMAP_MIN_SIZE,
    error::{FatalReason, PanicReason, SimpleResult},
    heap::Heap,
    object::{
        hashmap::PropertyHashMap,
        header::{ObjectHandle, ObjectHeader, ObjectKind},
        property::{Property, PropertyFlags, PropertyKind, PropertyName},
    },
    value::Value,
};

/// Arena owning every live object header.
pub struct ObjectArena {
    heap: Heap<ObjectHeader>,
}

impl ObjectArena {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: Heap::new(capacity),
        }
    }

    pub fn create(
        &mut self,
        kind: ObjectKind,
        prototype: Option<ObjectHandle>,
    ) -> Result<ObjectHandle, FatalReason> {
        self.heap.alloc(ObjectHeader::new(kind, prototype))
    }

    pub fn get(&self, handle: ObjectHandle) -> &ObjectHeader {
        self.heap.get(handle)
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> &mut ObjectHeader {
        self.heap.get_mut(handle)
    }

    pub fn live_handles(&self) -> impl Iterator<Item = ObjectHandle> + '_ {
        self.heap.live_handles()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn free(&mut self, handle: ObjectHandle) -> ObjectHeader {
        self.heap.free(handle)
    }

    /// Find an own property on `object`, without walking the prototype
    /// chain.
    pub fn find_own(&self, object: ObjectHandle, name: PropertyName) -> Option<&Property> {
        let header = self.heap.get(object);
        header.find_own(name).map(|i| &header.properties[i])
    }

    /// Find a named property by walking the prototype chain, returning
    /// both the owning object and the property itself — the shape an
    /// LCache entry needs to cache.
    pub fn find_named_property(
        &self,
        start: ObjectHandle,
        name: PropertyName,
    ) -> Option<(ObjectHandle, &Property)> {
        let mut current = start;
        loop {
            let header = self.heap.get(current);
            if let Some(i) = header.find_own(name) {
                return Some((current, &header.properties[i]));
            }
            current = header.prototype?;
        }
    }

    /// Define an own data property, failing if one already exists with
    /// `configurable == false` (redefinition of non-configurable
    /// properties is out of scope here; callers that need
    /// `[[DefineOwnProperty]]` semantics build on this primitive).
    pub fn define_own(
        &mut self,
        object: ObjectHandle,
        property: Property,
    ) -> SimpleResult<()> {
        let header = self.heap.get_mut(object);
        if let Some(i) = header.find_own(property.name) {
            if !header.properties[i].is_configurable() {
                return Err(PanicReason::PropertyAlreadyExists);
            }
            header.properties[i] = property;
            return Ok(());
        }
        if !header.extensible {
            return Err(PanicReason::NotExtensible);
        }

        let index = header.properties.len();
        header.properties.push(property);

        if let Some(map) = &mut header.hashmap {
            map.insert(property.name, index as u32);
        } else if PropertyHashMap::worth_attaching(header.properties.len()) {
            let map = PropertyHashMap::rebuild_from(
                header
                    .properties
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (i, p.name)),
            );
            header.hashmap = Some(map);
        }
        Ok(())
    }

    /// Remove an own property, failing if it is non-configurable.
    /// Swap-removes from the property list and repairs the hashmap
    /// (both the removed slot's mapping and the moved-in property's new
    /// index) rather than leaving a hole.
    pub fn delete_own(&mut self, object: ObjectHandle, name: PropertyName) -> SimpleResult<()> {
        let header = self.heap.get_mut(object);
        let Some(index) = header.find_own(name) else {
            return Err(PanicReason::NoSuchProperty);
        };
        if !header.properties[index].is_configurable() {
            return Err(PanicReason::PropertyAlreadyExists);
        }

        let last = header.properties.len() - 1;
        header.properties.swap_remove(index);
        if let Some(map) = &mut header.hashmap {
            map.remove(name);
            if index != last {
                let moved_name = header.properties[index].name;
                map.insert(moved_name, index as u32);
            }
        }
        Ok(())
    }

    pub fn get_value(&self, object: ObjectHandle, name: PropertyName) -> Option<Value> {
        self.find_named_property(object, name)
            .and_then(|(_, prop)| match prop.kind {
                PropertyKind::Data(value) => Some(value),
                PropertyKind::Accessor { .. } => None,
            })
    }
}
