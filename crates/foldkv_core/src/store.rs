//! The base key-value store.

use crate::error::KvResult;
use crate::kv::Kv;
use crate::transaction::Transaction;
use crate::types::{Key, Value};
use foldkv_ordmap::{BTreeOrderedMap, MapResult, OrderedMap};
use parking_lot::{Mutex, MutexGuard};

/// The base, shared key-value store.
///
/// A `Store` owns an [`OrderedMap`] behind an exclusive lock. Every
/// operation runs under that lock, so no two operations on the same store
/// interleave. The store is purely in-memory; its contents are lost on
/// process exit.
///
/// Transactions are opened with [`Store::begin`] and buffer their writes
/// privately until commit (see [`Transaction`]).
///
/// # Example
///
/// ```rust
/// use foldkv_core::{Kv, Store};
///
/// let kv = Store::new();
/// kv.put("hello".into(), "world".into())?;
///
/// let tx = kv.begin();
/// tx.put("hello".into(), "tx".into())?;
/// assert_eq!(kv.get(&"hello".into())?, Some("world".into()));
///
/// tx.commit()?;
/// assert_eq!(kv.get(&"hello".into())?, Some("tx".into()));
/// # Ok::<(), foldkv_core::KvError>(())
/// ```
pub struct Store {
    map: Mutex<Box<dyn OrderedMap>>,
}

impl Store {
    /// Creates a store backed by the standard B-tree ordered map.
    #[must_use]
    pub fn new() -> Self {
        Self::with_map(Box::new(BTreeOrderedMap::new()))
    }

    /// Creates a store backed by the given ordered map.
    ///
    /// The map may hold pre-existing entries; they become the store's
    /// initial contents.
    #[must_use]
    pub fn with_map(map: Box<dyn OrderedMap>) -> Self {
        Self {
            map: Mutex::new(map),
        }
    }

    /// Begins a transaction bound to this store.
    ///
    /// The transaction starts with an empty write buffer: reads fall
    /// through to this store until the transaction touches a key, and
    /// writes stay invisible to other readers until
    /// [`Transaction::commit`].
    #[must_use]
    pub fn begin(&self) -> Transaction<'_> {
        Transaction::new(self)
    }

    /// Returns the number of keys in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.lock().len()
    }

    /// Checks whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.lock().is_empty()
    }

    /// Locks the underlying map for a multi-step operation.
    ///
    /// Lock ordering: a transaction's own lock is always acquired before
    /// its base store's, and the base store's before its overlay's.
    pub(crate) fn lock_map(&self) -> MutexGuard<'_, Box<dyn OrderedMap>> {
        self.map.lock()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Kv for Store {
    fn put(&self, key: Key, value: Value) -> KvResult<()> {
        self.map.lock().put(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    fn get(&self, key: &Key) -> KvResult<Option<Value>> {
        Ok(self.map.lock().get(key.as_bytes())?.map(Value::from))
    }

    fn delete(&self, key: &Key) -> KvResult<()> {
        self.map.lock().delete(key.as_bytes())?;
        Ok(())
    }

    fn list(&self, prefix: &Key) -> KvResult<Vec<Key>> {
        let map = self.map.lock();
        Ok(scan_prefix(map.as_ref(), prefix.as_bytes())?)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Collects the keys matching `prefix` from an already-locked map.
///
/// Algorithm: the ceiling of `prefix` starts the scan (no ceiling means no
/// match can exist), the max key bounds it, and the scan stops at the first
/// key that does not begin with `prefix`. Sorted order keeps every match
/// contiguous, so the first mismatch ends the listing - the early exit is a
/// correctness condition of the contract, not just a shortcut.
pub(crate) fn scan_prefix(map: &dyn OrderedMap, prefix: &[u8]) -> MapResult<Vec<Key>> {
    let Some((first, _)) = map.ceiling(prefix)? else {
        return Ok(Vec::new());
    };
    let Some((last, _)) = map.max()? else {
        return Ok(Vec::new());
    };

    let mut keys = Vec::new();
    map.ranged_keys(&first, &last, &mut |key, _| {
        if !key.starts_with(prefix) {
            return false;
        }
        keys.push(Key::copy_from(key));
        true
    })?;
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        Key::from(s)
    }

    #[test]
    fn store_new_is_empty() {
        let kv = Store::new();
        assert!(kv.is_empty());
        assert_eq!(kv.len(), 0);
    }

    #[test]
    fn put_get_round_trip() {
        let kv = Store::new();
        kv.put(key("hello"), "world".into()).unwrap();

        assert_eq!(kv.get(&key("hello")).unwrap(), Some("world".into()));
        assert_eq!(kv.len(), 1);
    }

    #[test]
    fn get_absent_is_none() {
        let kv = Store::new();
        assert_eq!(kv.get(&key("missing")).unwrap(), None);
    }

    #[test]
    fn put_overwrites() {
        let kv = Store::new();
        kv.put(key("k"), "one".into()).unwrap();
        kv.put(key("k"), "two".into()).unwrap();

        assert_eq!(kv.get(&key("k")).unwrap(), Some("two".into()));
        assert_eq!(kv.len(), 1);
    }

    #[test]
    fn delete_removes() {
        let kv = Store::new();
        kv.put(key("k"), "v".into()).unwrap();
        kv.delete(&key("k")).unwrap();

        assert_eq!(kv.get(&key("k")).unwrap(), None);
        assert!(kv.is_empty());
    }

    #[test]
    fn delete_absent_silently_succeeds() {
        let kv = Store::new();
        kv.delete(&key("missing")).unwrap();
    }

    #[test]
    fn empty_key_and_value_are_valid() {
        let kv = Store::new();
        kv.put(Key::default(), Value::default()).unwrap();

        assert_eq!(kv.get(&Key::default()).unwrap(), Some(Value::default()));
        assert!(kv.list(&Key::default()).unwrap().contains(&Key::default()));
    }

    #[test]
    fn list_returns_contiguous_prefix_range() {
        let kv = Store::new();
        for k in ["0", "1", "10", "11", "12", "13", "2"] {
            kv.put(key(k), "v".into()).unwrap();
        }

        let got = kv.list(&key("1")).unwrap();
        let want: Vec<Key> = ["1", "10", "11", "12", "13"].map(key).to_vec();
        assert_eq!(got, want);
    }

    #[test]
    fn list_no_match_is_empty() {
        let kv = Store::new();
        kv.put(key("a"), "v".into()).unwrap();

        assert!(kv.list(&key("z")).unwrap().is_empty());
    }

    #[test]
    fn list_empty_store_is_empty() {
        let kv = Store::new();
        assert!(kv.list(&key("a")).unwrap().is_empty());
        assert!(kv.list(&Key::default()).unwrap().is_empty());
    }

    #[test]
    fn list_empty_prefix_lists_all_sorted() {
        let kv = Store::new();
        for k in ["b", "a", "c"] {
            kv.put(key(k), "v".into()).unwrap();
        }

        let got = kv.list(&Key::default()).unwrap();
        assert_eq!(got, ["a", "b", "c"].map(key).to_vec());
    }

    #[test]
    fn list_prefix_past_all_keys() {
        let kv = Store::new();
        for k in ["a", "b"] {
            kv.put(key(k), "v".into()).unwrap();
        }

        // Ceiling exists ("b" >= "ab") but nothing matches the prefix.
        assert!(kv.list(&key("ab")).unwrap().is_empty());
    }

    #[test]
    fn contains_reports_presence() {
        let kv = Store::new();
        kv.put(key("k"), "v".into()).unwrap();

        assert!(kv.contains(&key("k")).unwrap());
        assert!(!kv.contains(&key("other")).unwrap());
    }

    #[test]
    fn with_map_adopts_existing_entries() {
        use foldkv_ordmap::{BTreeOrderedMap, OrderedMap};

        let mut map = BTreeOrderedMap::new();
        map.put(b"seed", b"grown").unwrap();

        let kv = Store::with_map(Box::new(map));
        assert_eq!(kv.get(&key("seed")).unwrap(), Some("grown".into()));
    }

    #[test]
    fn debug_reports_len() {
        let kv = Store::new();
        kv.put(key("k"), "v".into()).unwrap();
        let rendered = format!("{kv:?}");
        assert!(rendered.contains("Store"));
        assert!(rendered.contains("len: 1"));
    }
}
