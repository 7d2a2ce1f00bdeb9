//! The shared key-value operation surface.

use crate::error::KvResult;
use crate::types::{Key, Value};

/// The basic operations of a key-value store.
///
/// Both [`crate::Store`] and [`crate::Transaction`] implement `Kv`, so code
/// can be written against either: a transaction is used exactly like the
/// store it overlays, with its writes held back until
/// [`crate::Transaction::commit`].
///
/// All methods take `&self`; implementations synchronize internally. Keys
/// and values are arbitrary byte sequences with no length limit; empty byte
/// sequences are valid for both.
pub trait Kv {
    /// Inserts or overwrites the value for a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying ordered map fails, or (for
    /// transactions) if the transaction is no longer active.
    fn put(&self, key: Key, value: Value) -> KvResult<()>;

    /// Returns the value for a key, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying ordered map fails.
    fn get(&self, key: &Key) -> KvResult<Option<Value>>;

    /// Removes a key. Removing an absent key silently succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying ordered map fails, or (for
    /// transactions) if the transaction is no longer active.
    fn delete(&self, key: &Key) -> KvResult<()>;

    /// Returns all keys beginning with `prefix`, in ascending sorted order.
    ///
    /// The empty prefix lists every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying ordered map fails.
    fn list(&self, prefix: &Key) -> KvResult<Vec<Key>>;

    /// Checks whether a key is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying ordered map fails.
    fn contains(&self, key: &Key) -> KvResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
