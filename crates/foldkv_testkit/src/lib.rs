//! # FoldKV Testkit
//!
//! Test utilities for FoldKV.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Seeded store fixtures
//!
//! ## Usage
//!
//! ```rust
//! use foldkv_core::Kv;
//! use foldkv_testkit::fixtures::seeded_store;
//!
//! let kv = seeded_store(&[("a", "1"), ("b", "2")]);
//! assert_eq!(kv.list(&"".into()).unwrap().len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::fixtures::{digit_keys_store, seeded_map_store, seeded_store};
    pub use crate::generators::{
        ascii_key_strategy, entries_strategy, key_strategy, ops_strategy, value_strategy, Op,
    };
}
