//! Component E: the object header — type tag, prototype link,
//! extensibility, and the property list each object owns.
//!
//! Grounded on `spec.md` §3.4 and
//! `original_source/jerry-core/ecma/ecma-helpers.c`'s `ecma_object_t`
//! (a common header every object/function/array shares, with a
//! discriminated `object_type` deciding which extra fields apply).

use alloc::vec::Vec;

use crate::{
    gc::Color,
    heap::Handle,
    object::property::{Property, PropertyName},
};

/// Opaque handle to an object stored in the object arena.
pub type ObjectHandle = Handle<ObjectHeader>;

/// What kind of object this header describes. Functions and arrays
/// carry no extra payload here since their behavior (call, exotic
/// `length`/index handling) belongs to the VM/built-ins layer that is
/// out of scope for this crate; this tag exists so that layer can
/// dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Ordinary,
    Function,
    Array,
    Error,
}

/// An object: header metadata plus its own properties. Inherited
/// properties are reached by walking `prototype` in
/// [`crate::object::ops`].
#[derive(Debug)]
pub struct ObjectHeader {
    pub kind: ObjectKind,
    pub prototype: Option<ObjectHandle>,
    pub extensible: bool,
    pub properties: Vec<Property>,
    pub hashmap: Option<crate::object::hashmap::PropertyHashMap>,
    pub(crate) color: Color,
}

impl ObjectHeader {
    pub fn new(kind: ObjectKind, prototype: Option<ObjectHandle>) -> Self {
        Self {
            kind,
            prototype,
            extensible: true,
            properties: Vec::new(),
            hashmap: None,
            color: Color::White,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Linear-scan lookup of an own property by name, used directly on
    /// small objects and as the hashmap's fallback/verification path.
    pub fn find_own(&self, name: PropertyName) -> Option<usize> {
        if let Some(map) = &self.hashmap {
            return map.get(name).map(|i| i as usize);
        }
        self.properties.iter().position(|p| p.name == name)
    }

    /// Every handle this object directly references: its prototype and
    /// every object/string reachable from its own properties. Consumed
    /// by the GC's mark phase.
    pub fn each_child_object(&self, mut visit: impl FnMut(ObjectHandle)) {
        if let Some(proto) = self.prototype {
            visit(proto);
        }
        for prop in &self.properties {
            match prop.kind {
                crate::object::property::PropertyKind::Data(value) => {
                    if let Some(h) = value.as_object() {
                        visit(h);
                    }
                }
                crate::object::property::PropertyKind::Accessor { getter, setter } => {
                    if let Some(h) = getter {
                        visit(h);
                    }
                    if let Some(h) = setter {
                        visit(h);
                    }
                }
            }
        }
    }

    pub fn each_child_string(&self, mut visit: impl FnMut(crate::string::StringHandle)) {
        for prop in &self.properties {
            if let PropertyName::String(h) = prop.name {
                visit(h);
            }
            if let crate::object::property::PropertyKind::Data(value) = prop.kind {
                if let Some(h) = value.as_string() {
                    visit(h);
                }
            }
        }
    }
}
