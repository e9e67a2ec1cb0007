//! Error types for opdiff catalog construction.
//!
//! Legality checks are total functions and never error; an illegal
//! combination is a plain `false`. The only failures in this workspace are
//! malformed catalog entries, which are programming defects and abort
//! catalog assembly before a descriptor can reach the generator.

use thiserror::Error;

/// A defect detected while constructing a catalog entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An operator display pattern's `$` count disagrees with its declared
    /// required parameter slots.
    #[error(
        "display pattern '{pattern}' has {placeholders} placeholder(s) for {required} required parameter(s)"
    )]
    PlaceholderMismatch {
        pattern: String,
        placeholders: usize,
        required: usize,
    },

    /// A descriptor declared no parameter slots at all.
    #[error("operation '{operation}' declares no parameters")]
    NoParameters { operation: String },

    /// An operator pattern or function name was empty.
    #[error("operation display form is empty")]
    EmptyDisplayForm,

    /// A required slot was declared after an optional one. Optional slots
    /// must be trailing so the generator may omit a suffix of the argument
    /// list.
    #[error("operation '{operation}': required parameter at position {position} follows an optional one")]
    RequiredAfterOptional { operation: String, position: usize },
}

/// Result type alias using [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
