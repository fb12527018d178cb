//! Internal utilities for the oslkey shader parameter tools.
//!
//! This crate provides the low-level hashing primitives shared between
//! `oslkey-core` and the `oslkey` command line tool. All utilities are
//! compile-time safe (`const fn`) and have zero external dependencies.
//!
//! # Contents
//!
//! - [`pearson16`] - two-round Pearson hash for parameter key generation
//! - [`PEARSON_TABLE`] - the fixed substitution table the hash runs through

pub mod hash;

pub use hash::{pearson16, PEARSON_TABLE};
