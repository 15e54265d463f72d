//! String hashing for property-key and LCache lookups.
//!
//! Grounded on `original_source/jerry-core/ecma/base/ecma-helpers-string.cpp`'s
//! `ecma_string_hash` (a narrow hash over the first/last/middle code
//! units plus length, chosen so hashing a long string stays O(1) rather
//! than O(n)) and on `spec.md` §6 which requires the hashmap and LCache
//! to agree on one hash function per string.

/// Number of bits of hash this crate keeps; matches the spec's 8-bit
/// hash field packed alongside each property pair.
pub const HASH_BITS: u32 = 8;

/// Compute the short hash used to bucket a string by its UTF-16 content.
///
/// Sampling a handful of code units rather than the whole string is
/// intentional: `spec.md` requires hash computation to stay cheap even
/// for multi-megabyte strings built via concatenation.
pub fn hash_utf16(units: &[u16]) -> u8 {
    let len = units.len();
    if len == 0 {
        return 0;
    }

    let mut hash: u32 = len as u32;
    let sample = |i: usize| units[i] as u32;

    hash = hash.wrapping_mul(31).wrapping_add(sample(0));
    hash = hash.wrapping_mul(31).wrapping_add(sample(len - 1));
    if len > 2 {
        hash = hash.wrapping_mul(31).wrapping_add(sample(len / 2));
    }

    (hash ^ (hash >> 8) ^ (hash >> 16)) as u8
}

/// Compute the same hash directly over a UTF-8 slice known to be ASCII
/// (the common case for magic strings and short identifiers), avoiding
/// a UTF-16 conversion pass.
pub fn hash_ascii(bytes: &[u8]) -> u8 {
    let len = bytes.len();
    if len == 0 {
        return 0;
    }

    let mut hash: u32 = len as u32;
    let sample = |i: usize| bytes[i] as u32;

    hash = hash.wrapping_mul(31).wrapping_add(sample(0));
    hash = hash.wrapping_mul(31).wrapping_add(sample(len - 1));
    if len > 2 {
        hash = hash.wrapping_mul(31).wrapping_add(sample(len / 2));
    }

    (hash ^ (hash >> 8) ^ (hash >> 16)) as u8
}
