//! B-tree ordered map implementation.

use crate::error::MapResult;
use crate::map::OrderedMap;
use std::collections::BTreeMap;
use std::ops::Bound;

/// The standard in-memory ordered map.
///
/// `BTreeOrderedMap` stores entries in a [`BTreeMap`], which keeps keys in
/// lexicographic byte order and supports the range navigation the
/// [`OrderedMap`] contract requires. All operations are infallible; the
/// `MapResult` returns exist to satisfy the contract.
///
/// # Example
///
/// ```rust
/// use foldkv_ordmap::{BTreeOrderedMap, OrderedMap};
///
/// let mut map = BTreeOrderedMap::new();
/// map.put(b"b", b"2").unwrap();
/// map.put(b"a", b"1").unwrap();
///
/// // Smallest key >= "aa" is "b"
/// let (key, _) = map.ceiling(b"aa").unwrap().unwrap();
/// assert_eq!(key, b"b");
/// ```
#[derive(Debug, Default)]
pub struct BTreeOrderedMap {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl BTreeOrderedMap {
    /// Creates a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderedMap for BTreeOrderedMap {
    fn put(&mut self, key: &[u8], value: &[u8]) -> MapResult<()> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> MapResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn delete(&mut self, key: &[u8]) -> MapResult<Option<Vec<u8>>> {
        Ok(self.entries.remove(key))
    }

    fn ceiling(&self, key: &[u8]) -> MapResult<Option<(Vec<u8>, Vec<u8>)>> {
        let found = self
            .entries
            .range::<[u8], _>((Bound::Included(key), Bound::Unbounded))
            .next()
            .map(|(k, v)| (k.clone(), v.clone()));
        Ok(found)
    }

    fn max(&self) -> MapResult<Option<(Vec<u8>, Vec<u8>)>> {
        let found = self
            .entries
            .iter()
            .next_back()
            .map(|(k, v)| (k.clone(), v.clone()));
        Ok(found)
    }

    fn ranged_keys(
        &self,
        lo: &[u8],
        hi: &[u8],
        visit: &mut dyn FnMut(&[u8], &[u8]) -> bool,
    ) -> MapResult<()> {
        if lo > hi {
            return Ok(());
        }
        for (key, value) in self
            .entries
            .range::<[u8], _>((Bound::Included(lo), Bound::Included(hi)))
        {
            if !visit(key, value) {
                break;
            }
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
