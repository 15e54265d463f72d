//! Components E and F: objects, their property pairs, and the property
//! hashmap index.

pub mod hashmap;
pub mod header;
pub mod ops;
pub mod property;

pub use header::{ObjectHandle, ObjectHeader, ObjectKind};
pub use ops::ObjectArena;
pub use property::{Property, PropertyFlags, PropertyKind, PropertyName};
