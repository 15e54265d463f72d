//! Runtime-data core for a memory-constrained ECMAScript engine: heap
//! arena, literal recordset, tagged values, string descriptors, the
//! object/property model, property hashmap, LCache, and tri-color GC.
//!
//! The lexer, parser, bytecode compiler, VM dispatch loop, and
//! built-ins live above this crate; this crate fixes the data
//! structures and operations they all share, plus the interface
//! contracts (compiled-code shape, bytecode VLQ/stack-adjust encoding,
//! snapshot format) those layers need to agree on.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bytecode;
pub mod compiled_code;
pub mod consts;
pub mod context;
pub mod error;
pub mod gc;
pub mod heap;
pub mod lcache;
pub mod literal;
pub mod object;
pub mod string;
pub mod value;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{
        consts::Limits,
        context::Context,
        error::{FatalReason, PanicReason, RuntimeError},
        gc::{Finalizer, GcStats},
        heap::Handle,
        object::{ObjectHandle, ObjectKind, Property, PropertyFlags, PropertyName},
        string::StringHandle,
        value::{SimpleValue, Value},
    };
}
