//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random keys, values, and transaction
//! workloads over the full opaque-byte domain, empty sequences included.

use foldkv_core::{Key, Value};
use proptest::prelude::*;

/// Strategy for generating arbitrary byte keys, including the empty key.
///
/// Short keys collide often, which is what exercises overwrite, tombstone,
/// and merge paths.
pub fn key_strategy() -> impl Strategy<Value = Key> {
    prop::collection::vec(any::<u8>(), 0..8).prop_map(Key::new)
}

/// Strategy for generating printable keys, for readable failure output.
pub fn ascii_key_strategy() -> impl Strategy<Value = Key> {
    prop::string::string_regex("[0-9a-f]{0,6}")
        .expect("invalid regex")
        .prop_map(Key::from)
}

/// Strategy for generating arbitrary byte values, including the empty
/// value.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::new)
}

/// Strategy for generating a deduplicated set of entries.
pub fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<(Key, Value)>> {
    prop::collection::btree_map(
        prop::collection::vec(any::<u8>(), 0..8),
        prop::collection::vec(any::<u8>(), 0..64),
        0..max,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (Key::new(k), Value::new(v)))
            .collect()
    })
}

/// A single operation in a generated transaction workload.
#[derive(Debug, Clone)]
pub enum Op {
    /// Write a key.
    Put(Key, Value),
    /// Delete a key.
    Delete(Key),
}

/// Strategy for generating a transaction workload.
///
/// Keys are drawn from a small alphabet so that puts, deletes, and
/// re-creates of the same key occur frequently.
pub fn ops_strategy(max: usize) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::Put(k, v)),
        key_strategy().prop_map(Op::Delete),
    ];
    prop::collection::vec(op, 0..max)
}
