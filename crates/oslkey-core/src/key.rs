//! Parameter key derivation.
//!
//! A parameter key is a pure function of the parameter name and the fixed
//! substitution table in `oslkey-utils`: the same name yields the same key
//! in every process, on every platform. Keys are never persisted by this
//! crate; they are recomputed on demand.

use oslkey_utils::pearson16;

use crate::error::{KeyError, KeyResult};

/// Numeric key assigned to a shader parameter name.
pub type ParamKey = u16;

/// Lower bound of the derived key range.
///
/// Keys below this value are reserved for the host's legacy numeric
/// parameter IDs, issued by an older numbering scheme. A raw hash landing
/// in the reserved range is shifted up by this amount, so derived keys
/// always fall within 200..=32767.
pub const OBSOLETE_ID_LIMIT: ParamKey = 200;

/// Derive the key for a parameter name.
///
/// # Errors
///
/// Returns [`KeyError::EmptyParameterName`] if `name` is empty.
///
/// # Examples
///
/// ```
/// use oslkey_core::derive_key;
///
/// assert_eq!(derive_key("color").unwrap(), 16037);
/// ```
pub fn derive_key(name: &str) -> KeyResult<ParamKey> {
    if name.is_empty() {
        return Err(KeyError::EmptyParameterName);
    }

    let raw = pearson16(name);
    if raw < OBSOLETE_ID_LIMIT {
        Ok(raw + OBSOLETE_ID_LIMIT)
    } else {
        Ok(raw)
    }
}
