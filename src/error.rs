use thiserror::Error;

use super::{Tag, Literal};

/// A `T` or an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by dispatch and by the variant makers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A tagged value was dispatched with no handler for its tag and no
    /// wildcard.
    #[error("Match did not handle variant: '{0}'")]
    UnhandledVariant(Tag),

    /// A literal was dispatched with no pattern containing it and no wildcard.
    #[error("Match did not handle key: '{0}'")]
    UnhandledLiteral(Literal),

    /// A maker was requested for a tag the registry does not declare.
    #[error("no such variant: '{0}'")]
    UnknownVariant(Tag),

    /// `make` was called on a variant that carries no payload.
    #[error("variant '{0}' carries no payload and cannot be called")]
    NotAConstructor(Tag),

    /// `value` was called on a variant that must be constructed.
    #[error("variant '{0}' must be called with its arguments")]
    NotAMarker(Tag),

    /// A constructor with a declared arity was called with a different
    /// number of arguments.
    #[error("variant '{tag}' expects {expected} argument(s), found {found}")]
    Arity { tag: Tag, expected: usize, found: usize },
}
