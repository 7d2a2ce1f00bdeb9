//! # FoldKV Core
//!
//! An embeddable, in-memory key-value store with read-committed
//! transactions.
//!
//! This crate provides:
//! - [`Store`] - the base key-value container over an ordered byte map
//! - [`Transaction`] - a private write overlay opened with [`Store::begin`]
//! - [`Kv`] - the shared put/get/delete/list surface of both
//!
//! Writes made inside a transaction are invisible to other readers until
//! [`Transaction::commit`] folds them into the store; reads of untouched
//! keys always see the latest committed state (read-committed, no
//! snapshot). There is no durability - the store lives in process memory
//! and is lost on exit.
//!
//! ## Example
//!
//! ```rust
//! use foldkv_core::{Kv, Store};
//!
//! let kv = Store::new();
//! kv.put("user:alice".into(), "42".into())?;
//!
//! let tx = kv.begin();
//! tx.put("user:bob".into(), "7".into())?;
//! tx.delete(&"user:alice".into())?;
//!
//! // The base is unaffected until commit.
//! assert_eq!(kv.list(&"user:".into())?.len(), 1);
//!
//! tx.commit()?;
//! assert_eq!(kv.list(&"user:".into())?.len(), 1); // bob replaced alice
//! # Ok::<(), foldkv_core::KvError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod kv;
mod store;
mod transaction;
mod types;

pub use error::{KvError, KvResult};
pub use kv::Kv;
pub use store::Store;
pub use transaction::{Transaction, TransactionStatus};
pub use types::{Key, Value};
