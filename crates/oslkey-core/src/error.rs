//! Error types for the oslkey tools.

use std::fmt;

/// Errors that can occur while deriving or scanning parameter keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// A parameter name was empty. Keys are seeded from the first byte of
    /// the name, so an empty name has no key.
    EmptyParameterName,
    /// The shader metadata source failed to produce its parameter lists.
    MetadataError(String),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyParameterName => write!(f, "Parameter name is empty"),
            Self::MetadataError(msg) => write!(f, "Metadata error: {}", msg),
        }
    }
}

impl std::error::Error for KeyError {}

/// Result type for oslkey operations.
pub type KeyResult<T> = Result<T, KeyError>;
