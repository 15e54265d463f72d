//! Component E: the property pair representation.
//!
//! Grounded on `spec.md` §3.4 and
//! `original_source/jerry-core/ecma/base/ecma-helpers.c`'s
//! `ecma_property_pair_t` (a packed union of data/accessor slots plus a
//! type+flags byte), re-expressed as a Rust sum type so a property is
//! either a data property or an accessor property, never both
//! half-initialized.

use bitflags::bitflags;

use crate::{object::ObjectHandle, string::StringHandle, value::Value};

bitflags! {
    /// The three standard ECMA property attributes. `internal` marks a
    /// property not reachable through the ECMA `[[OwnPropertyKeys]]`
    /// surface (used for engine bookkeeping slots); it is not part of
    /// the ECMA spec's own attribute set but is carried the same way
    /// the original carries its internal-property flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PropertyFlags: u8 {
        const WRITABLE     = 0b0000_0001;
        const ENUMERABLE   = 0b0000_0010;
        const CONFIGURABLE = 0b0000_0100;
        const INTERNAL     = 0b0000_1000;
    }
}

impl Default for PropertyFlags {
    fn default() -> Self {
        Self::WRITABLE | Self::ENUMERABLE | Self::CONFIGURABLE
    }
}

/// How a property is named: an interned string, or a direct array
/// index fast path that skips a string dedup round-trip entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyName {
    String(StringHandle),
    ArrayIndex(u32),
}

/// A data property's accessors: either a direct value, or `get`/`set`
/// function objects. Kept as a sum type rather than a pair of optional
/// handles: a property is never simultaneously a data slot and an
/// accessor pair.
#[derive(Debug, Clone, Copy)]
pub enum PropertyKind {
    Data(Value),
    Accessor {
        getter: Option<ObjectHandle>,
        setter: Option<ObjectHandle>,
    },
}

/// One property pair: name, kind, and attributes.
#[derive(Debug, Clone, Copy)]
pub struct Property {
    pub name: PropertyName,
    pub kind: PropertyKind,
    pub flags: PropertyFlags,
}

impl Property {
    pub fn data(name: PropertyName, value: Value, flags: PropertyFlags) -> Self {
        Self {
            name,
            kind: PropertyKind::Data(value),
            flags,
        }
    }

    pub fn accessor(
        name: PropertyName,
        getter: Option<ObjectHandle>,
        setter: Option<ObjectHandle>,
        flags: PropertyFlags,
    ) -> Self {
        Self {
            name,
            kind: PropertyKind::Accessor { getter, setter },
            flags,
        }
    }

    pub const fn is_writable(&self) -> bool {
        self.flags.contains(PropertyFlags::WRITABLE)
    }

    pub const fn is_enumerable(&self) -> bool {
        self.flags.contains(PropertyFlags::ENUMERABLE)
    }

    pub const fn is_configurable(&self) -> bool {
        self.flags.contains(PropertyFlags::CONFIGURABLE)
    }

    pub const fn is_accessor(&self) -> bool {
        matches!(self.kind, PropertyKind::Accessor { .. })
    }
}
