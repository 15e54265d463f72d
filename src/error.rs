//! Error taxonomy: fatal, recoverable-ECMA, and cache-miss paths.
//!
//! Grounded on the teacher's `error.rs`: a `derive_more::Display` enum
//! (not `thiserror`, matching the teacher's choice), a hard split between
//! conditions that halt the engine ([`FatalReason`]) and conditions a
//! caller can recover from ([`RuntimeError`]).

use core::fmt;

/// Conditions with no recovery: the host's `jerry_fatal` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum FatalReason {
    /// Heap exhaustion survived a forced GC pass.
    #[display(fmt = "out of memory")]
    OutOfMemory,
    /// A refcount saturated its field width.
    #[display(fmt = "reference count overflow")]
    RefCountOverflow,
    /// `finalize` could not drain resurrected objects within the loop
    /// budget.
    #[display(fmt = "unterminated gc loops")]
    UnterminatedGcLoops,
    /// An internal invariant was violated.
    #[display(fmt = "invariant violated: {_0}")]
    Invariant(&'static str),
}

/// Runtime error description that either has a well-formed ECMA
/// fallback or must halt execution, generic over a caller-supplied
/// storage error the way the teacher's `RuntimeError<StorageError>` is.
#[derive(Debug)]
#[must_use]
pub enum RuntimeError<StorageError = core::convert::Infallible> {
    /// Specified error with a well-formed ECMA fallback.
    Recoverable(PanicReason),
    /// Unrecoverable condition; the engine must halt.
    Fatal(FatalReason),
    /// Storage I/O error from a host collaborator.
    Storage(StorageError),
}

impl<S> RuntimeError<S> {
    /// Whether the error is recoverable as an ECMA exception.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable(_))
    }

    /// Whether the error must halt execution.
    pub const fn must_halt(&self) -> bool {
        !self.is_recoverable()
    }
}

impl<S> From<PanicReason> for RuntimeError<S> {
    fn from(reason: PanicReason) -> Self {
        Self::Recoverable(reason)
    }
}

impl<S> From<FatalReason> for RuntimeError<S> {
    fn from(reason: FatalReason) -> Self {
        Self::Fatal(reason)
    }
}

impl<S: fmt::Debug> fmt::Display for RuntimeError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recoverable(reason) => write!(f, "recoverable error: {reason}"),
            Self::Fatal(reason) => write!(f, "fatal error: {reason}"),
            Self::Storage(err) => write!(f, "storage error: {err:?}"),
        }
    }
}

/// Reasons an ECMA-visible panic (a thrown or aborting value) can carry.
/// Analogous to the teacher's `PanicReason`, scoped to this crate's
/// runtime-data operations rather than a full opcode set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PanicReason {
    /// A property with the given name already exists on the object.
    #[display(fmt = "property already exists")]
    PropertyAlreadyExists,
    /// The requested property does not exist.
    #[display(fmt = "no such property")]
    NoSuchProperty,
    /// An operation required an extensible object but it was not.
    #[display(fmt = "object is not extensible")]
    NotExtensible,
    /// A string operation exceeded `MAX_CONCAT_LENGTH`.
    #[display(fmt = "string too long")]
    StringTooLong,
}

/// Result of an operation with a well-formed ECMA fallback, no storage
/// access.
pub type SimpleResult<T> = Result<T, PanicReason>;

/// Result of an operation that may also hit a fatal condition.
pub type FatalResult<T> = Result<T, FatalReason>;

/// Result of an operation that may recover, halt, or touch storage.
pub type IoResult<T, S = core::convert::Infallible> = Result<T, RuntimeError<S>>;
