//! # oslkey-core
//!
//! Stable numeric keys for OSL shader parameters.
//!
//! Host applications reference shader parameters by a compact 15-bit key
//! instead of a name string. This crate derives those keys from parameter
//! names and scans each shader's parameter list for key collisions, so a
//! colliding parameter can be renamed before the keys are ever published.
//!
//! ## Main Types
//!
//! - [`derive_key`] - name to key derivation
//! - [`scan_shader`] / [`scan_all`] - per-shader collision scanning
//! - [`ShaderSource`] - boundary to the external shader introspection step
//! - [`Collision`] - a single scan finding
//! - [`KeyError`] - error types

pub mod error;
pub mod key;
pub mod scan;
pub mod source;

// Re-exports for convenience
pub use error::{KeyError, KeyResult};
pub use key::{derive_key, ParamKey, OBSOLETE_ID_LIMIT};
pub use scan::{scan_all, scan_shader, Collision, ScanOutcome, MAP_SUFFIX};
pub use source::{ShaderParams, ShaderSource};
