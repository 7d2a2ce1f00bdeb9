//! # FoldKV Ordered Map
//!
//! Ordered byte-map contract and implementations for FoldKV.
//!
//! This crate provides the lowest-level container abstraction for FoldKV.
//! Ordered maps are **opaque byte containers** keyed in lexicographic byte
//! order - they do not interpret the data they store.
//!
//! ## Design Principles
//!
//! - Maps are simple byte containers (put, get, delete, navigate)
//! - Keys are totally ordered by lexicographic byte comparison
//! - No internal synchronization - the caller owns the lock
//! - FoldKV owns all higher-level semantics (transactions, tombstones)
//!
//! ## Available Implementations
//!
//! - [`BTreeOrderedMap`] - The standard in-memory implementation
//!
//! ## Example
//!
//! ```rust
//! use foldkv_ordmap::{BTreeOrderedMap, OrderedMap};
//!
//! let mut map = BTreeOrderedMap::new();
//! map.put(b"hello", b"world").unwrap();
//! let value = map.get(b"hello").unwrap();
//! assert_eq!(value.as_deref(), Some(&b"world"[..]));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod btree;
mod error;
mod map;

pub use btree::BTreeOrderedMap;
pub use error::{MapError, MapResult};
pub use map::OrderedMap;
