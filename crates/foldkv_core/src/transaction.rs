//! Transaction overlay and merge engine.

use crate::error::{KvError, KvResult};
use crate::kv::Kv;
use crate::store::{scan_prefix, Store};
use crate::types::{Key, Value};
use parking_lot::Mutex;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// The transaction accepts writes and can commit or roll back.
    Active,
    /// The transaction has been committed.
    Committed,
    /// The transaction has been rolled back.
    RolledBack,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Committed => write!(f, "committed"),
            Self::RolledBack => write!(f, "rolled back"),
        }
    }
}

/// Mutable transaction state, guarded by the transaction's own lock.
struct TxInner {
    status: TransactionStatus,
    /// Keys with a pending write; each has a value in the overlay.
    updated: HashSet<Key>,
    /// Keys with a pending delete; logically absent regardless of overlay
    /// contents. Disjoint from `updated` at all times.
    tombstoned: HashSet<Key>,
}

impl TxInner {
    fn ensure_active(&self) -> KvResult<()> {
        match self.status {
            TransactionStatus::Active => Ok(()),
            status => Err(KvError::TransactionClosed { status }),
        }
    }
}

/// A read-committed transaction over a [`Store`].
///
/// A transaction buffers its writes in a private overlay store and tracks
/// pending deletes as tombstones. Reads resolve in fixed priority:
/// tombstone, then local write, then the bound base store's *current*
/// committed state - there is no snapshot, so commits by other transactions
/// become visible immediately for keys this transaction has not touched
/// (read-committed isolation).
///
/// [`commit`](Self::commit) folds the buffered deletes and writes into the
/// base atomically with respect to other operations on the same store;
/// [`rollback`](Self::rollback) discards them without touching the base.
/// There is no conflict detection between concurrent transactions - the
/// last committer of a key wins.
///
/// After commit or rollback the transaction rejects further mutation, but
/// stays readable: `get` and `list` keep resolving against the residual
/// overlay and tombstone state.
///
/// # Example
///
/// ```rust
/// use foldkv_core::{Kv, Store};
///
/// let kv = Store::new();
/// let tx = kv.begin();
///
/// tx.put("draft".into(), "pending".into())?;
/// assert_eq!(kv.get(&"draft".into())?, None); // invisible until commit
///
/// tx.commit()?;
/// assert_eq!(kv.get(&"draft".into())?, Some("pending".into()));
/// # Ok::<(), foldkv_core::KvError>(())
/// ```
pub struct Transaction<'s> {
    /// The bound base store. The transaction borrows it and never outlives
    /// it.
    base: &'s Store,
    /// Private write buffer, invisible to other readers until commit.
    overlay: Store,
    inner: Mutex<TxInner>,
}

impl<'s> Transaction<'s> {
    pub(crate) fn new(base: &'s Store) -> Self {
        Self {
            base,
            overlay: Store::new(),
            inner: Mutex::new(TxInner {
                status: TransactionStatus::Active,
                updated: HashSet::new(),
                tombstoned: HashSet::new(),
            }),
        }
    }

    /// Returns the transaction's status.
    #[must_use]
    pub fn status(&self) -> TransactionStatus {
        self.inner.lock().status
    }

    /// Checks whether the transaction is still active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status() == TransactionStatus::Active
    }

    /// Returns the number of keys with a pending write.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.lock().updated.len()
    }

    /// Returns the number of keys with a pending delete.
    #[must_use]
    pub fn tombstone_count(&self) -> usize {
        self.inner.lock().tombstoned.len()
    }

    /// Commits the transaction, folding buffered writes and deletes into
    /// the base store.
    ///
    /// Tombstoned keys are deleted from the base, then updated keys are
    /// written with their overlay values. Every base mutation is an
    /// independent per-key upsert or delete with no cross-key invariant, so
    /// no partial-commit rollback is needed. Lock order: transaction, then
    /// base, then overlay.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::TransactionClosed`] if the transaction already
    /// committed or rolled back, or the base map's error unmodified if it
    /// fails.
    pub fn commit(&self) -> KvResult<()> {
        let mut inner = self.inner.lock();
        inner.ensure_active()?;

        let mut base = self.base.lock_map();
        let overlay = self.overlay.lock_map();

        for key in &inner.tombstoned {
            base.delete(key.as_bytes())?;
        }
        for key in &inner.updated {
            // An updated key always has an overlay value in correct usage;
            // the existence check tolerates an inconsistent buffer.
            if let Some(value) = overlay.get(key.as_bytes())? {
                base.put(key.as_bytes(), &value)?;
            }
        }

        inner.status = TransactionStatus::Committed;
        tracing::debug!(
            writes = inner.updated.len(),
            tombstones = inner.tombstoned.len(),
            "transaction committed"
        );
        Ok(())
    }

    /// Rolls the transaction back, discarding buffered writes and deletes.
    ///
    /// The base store is never touched. The overlay and tombstone sets are
    /// not cleared, so residual reads through the transaction stay
    /// coherent.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::TransactionClosed`] if the transaction already
    /// committed or rolled back.
    pub fn rollback(&self) -> KvResult<()> {
        let mut inner = self.inner.lock();
        inner.ensure_active()?;

        inner.status = TransactionStatus::RolledBack;
        tracing::debug!(
            writes = inner.updated.len(),
            tombstones = inner.tombstoned.len(),
            "transaction rolled back"
        );
        Ok(())
    }
}

impl Kv for Transaction<'_> {
    fn put(&self, key: Key, value: Value) -> KvResult<()> {
        let mut inner = self.inner.lock();
        inner.ensure_active()?;

        // A pending delete is cancelled by a write.
        inner.tombstoned.remove(&key);
        inner.updated.insert(key.clone());
        self.overlay.put(key, value)
    }

    fn get(&self, key: &Key) -> KvResult<Option<Value>> {
        let inner = self.inner.lock();
        if inner.tombstoned.contains(key) {
            return Ok(None);
        }
        if inner.updated.contains(key) {
            return self.overlay.get(key);
        }
        // Read-committed, not repeatable-read: untouched keys see the
        // base's current state, including concurrent commits.
        self.base.get(key)
    }

    fn delete(&self, key: &Key) -> KvResult<()> {
        let mut inner = self.inner.lock();
        inner.ensure_active()?;

        inner.updated.remove(key);
        inner.tombstoned.insert(key.clone());
        self.overlay.delete(key)
    }

    fn list(&self, prefix: &Key) -> KvResult<Vec<Key>> {
        let inner = self.inner.lock();

        // Each source is snapshotted under its own lock, acquired in the
        // fixed transaction -> base -> overlay order and released as soon
        // as the snapshot is captured.
        let base_keys = {
            let map = self.base.lock_map();
            scan_prefix(map.as_ref(), prefix.as_bytes())?
        };
        let overlay_keys = {
            let map = self.overlay.lock_map();
            scan_prefix(map.as_ref(), prefix.as_bytes())?
        };

        // The tombstone filter runs while the transaction lock is still
        // held, so a concurrent put/delete cannot produce a half-updated
        // view.
        let mut merged: BTreeSet<Key> = base_keys
            .into_iter()
            .filter(|key| !inner.tombstoned.contains(key))
            .collect();
        drop(inner);

        merged.extend(overlay_keys);
        Ok(merged.into_iter().collect())
    }
}

impl fmt::Debug for Transaction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Transaction")
            .field("status", &inner.status)
            .field("writes", &inner.updated.len())
            .field("tombstones", &inner.tombstoned.len())
            .finish_non_exhaustive()
    }
}
