//! Tunable parameters for the runtime-data subsystem.
//!
//! Mirrors the teacher's flat `consts.rs` of compile-time-tunable
//! constants. [`Limits`] bundles the subset a [`crate::context::Context`]
//! needs at construction time so tests can exercise small heaps without
//! touching the defaults live code uses.

/// Width, in bits, of a compressed pointer. Kept as a documented
/// invariant even though [`crate::heap::Handle`] enforces it structurally
/// via its `u16` representation.
pub const CP_WIDTH: u32 = 16;

/// Sentinel compressed-pointer value denoting absence.
pub const CP_NULL: u16 = u16::MAX;

/// Byte granularity of a literal record.
pub const RECORD_UNIT: usize = 4;

/// Size, in bytes, of one logical node of the literal recordset. The
/// recordset is one contiguous `Vec<u8>`; this constant only governs
/// growth increments and the trailing-node trim performed on free.
pub const LITERAL_NODE_SIZE: usize = 256;

/// Number of rows in the LCache.
pub const HASH_ROWS_COUNT: usize = 128;

/// Number of entries per LCache row.
pub const HASH_ROW_LENGTH: usize = 2;

/// Minimum number of properties on an object before a property hashmap
/// is worth attaching.
pub const HASHMAP_MIN_SIZE: usize = 16;

/// Initial size (slot count) of a freshly attached property hashmap.
pub const HASHMAP_INITIAL_SIZE: usize = 32;

/// Load factor (numerator over 10) above which a hashmap is rebuilt at
/// twice its size.
pub const HASHMAP_MAX_LOAD_FACTOR_TENTHS: usize = 8;

/// Threshold share of `new objects since last GC` over `allocated
/// objects` that triggers a low-severity GC.
pub const NEW_OBJECTS_SHARE_TO_START_GC: usize = 4;

/// Maximum number of consecutive GC cycles `finalize` will run while
/// draining objects resurrected by finalizers before giving up fatally.
pub const GC_LOOP_LIMIT: usize = 16;

/// Maximum length, in UTF-16 code units, of a string produced by
/// `concat`. Mirrors `spec.md`'s `MAX_CONCAT`.
pub const MAX_CONCAT_LENGTH: usize = 1 << 24;

/// Shift applied to an opcode byte to recover its encoded stack delta.
pub const STACK_ADJUST_SHIFT: u8 = 5;

/// Base subtracted after shifting to recover the signed stack delta.
pub const STACK_ADJUST_BASE: i8 = 4;

/// Tunable limits threaded through [`crate::context::Context::new`].
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum number of live objects the object arena will hold.
    pub max_objects: usize,
    /// Maximum number of live string descriptors.
    pub max_strings: usize,
    /// Maximum byte length of the literal recordset.
    pub max_literal_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_objects: 1 << 16,
            max_strings: 1 << 16,
            max_literal_bytes: 1 << 19,
        }
    }
}
