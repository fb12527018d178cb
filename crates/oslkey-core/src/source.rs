//! Shader metadata sources.
//!
//! Parameter lists come from an external introspection step that opens
//! compiled shaders and lists their parameters. This module defines that
//! boundary: a source yields each shader's name together with its parameter
//! names in declaration order, and the scanner consumes them without
//! knowing where they came from.

use crate::error::KeyResult;

/// One shader's name and declared parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderParams {
    /// Shader name as reported by the introspection layer.
    pub name: String,
    /// Declared parameter names, in declaration order.
    pub params: Vec<String>,
}

impl ShaderParams {
    /// Create a new shader entry.
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Trait for suppliers of shader parameter metadata.
///
/// Implementations range from a parsed introspection dump to an in-memory
/// fixture in tests; the scanner only sees this interface.
pub trait ShaderSource {
    /// Yield every shader known to this source.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::MetadataError`](crate::KeyError::MetadataError)
    /// if the underlying metadata cannot be produced.
    fn shaders(&mut self) -> KeyResult<Vec<ShaderParams>>;
}
