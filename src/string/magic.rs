//! Magic strings: the fixed table of ECMA-significant strings
//! (property names like `length`, `prototype`, keywords, well-known
//! symbols descriptions) that are baked into the binary so they never
//! need heap storage.
//!
//! Grounded on `spec.md` §3.3's `Magic`/`MagicEx` kinds and on
//! `original_source/jerry-core/ecma/base/ecma-helpers-string.cpp`'s
//! `lit_magic_strings` table: a `strum::EnumIter`-friendly enum plus a
//! const lookup table, rather than the original's generated C arrays.

/// A string baked into the engine's magic-string table.
///
/// Ordered so `as u16` is stable and can be used directly as the
/// compressed-pointer-free magic string id the spec's `Magic` kind
/// stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount)]
#[repr(u16)]
pub enum MagicString {
    Length,
    Prototype,
    Constructor,
    Name,
    Value,
    Writable,
    Enumerable,
    Configurable,
    Get,
    Set,
    Undefined,
    Null,
    True,
    False,
    Object,
    Function,
    Number,
    String,
    Boolean,
    Symbol,
    Arguments,
    Caller,
    Callee,
    Message,
    Stack,
}

impl MagicString {
    /// The UTF-8 text this magic string denotes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Prototype => "prototype",
            Self::Constructor => "constructor",
            Self::Name => "name",
            Self::Value => "value",
            Self::Writable => "writable",
            Self::Enumerable => "enumerable",
            Self::Configurable => "configurable",
            Self::Get => "get",
            Self::Set => "set",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Object => "object",
            Self::Function => "function",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Symbol => "symbol",
            Self::Arguments => "arguments",
            Self::Caller => "caller",
            Self::Callee => "callee",
            Self::Message => "message",
            Self::Stack => "stack",
        }
    }

    /// Look up a magic string by its exact UTF-8 text, if present in the
    /// table. Used by string construction to dedup against magic
    /// strings before falling back to heap storage.
    pub fn find(text: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|m| m.as_str() == text)
    }

    /// Reconstruct a magic string from its table index.
    pub fn from_index(index: u16) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().nth(index as usize)
    }

    /// This magic string's table index.
    pub const fn index(self) -> u16 {
        self as u16
    }

    /// Number of UTF-16 code units in this magic string's text. All
    /// magic strings in this table are ASCII, so this equals the byte
    /// length.
    pub const fn len_utf16(self) -> u32 {
        self.as_str().len() as u32
    }
}

/// A magic string belonging to an "extended" table (reserved for
/// longer, less frequently referenced strings — e.g. error message
/// templates — so the base table stays small and cache-friendly). This
/// crate models it as a parallel, disjoint id space, per spec.md's
/// `MagicEx` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::EnumCount)]
#[repr(u16)]
pub enum MagicStringEx {
    TypeError,
    RangeError,
    ReferenceError,
    SyntaxError,
    InternalError,
}

impl MagicStringEx {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeError => "TypeError",
            Self::RangeError => "RangeError",
            Self::ReferenceError => "ReferenceError",
            Self::SyntaxError => "SyntaxError",
            Self::InternalError => "InternalError",
        }
    }

    pub fn find(text: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|m| m.as_str() == text)
    }

    pub const fn index(self) -> u16 {
        self as u16
    }

    pub const fn len_utf16(self) -> u32 {
        self.as_str().len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_round_trips_through_index() {
        let m = MagicString::find("prototype").unwrap();
        assert_eq!(MagicString::from_index(m.index()), Some(m));
    }

    #[test]
    fn unknown_text_is_not_magic() {
        assert!(MagicString::find("not-a-magic-string-at-all").is_none());
    }

    #[test]
    fn magic_and_magic_ex_tables_are_disjoint_concepts() {
        assert!(MagicStringEx::find("length").is_none());
        assert!(MagicStringEx::find("TypeError").is_some());
    }
}
