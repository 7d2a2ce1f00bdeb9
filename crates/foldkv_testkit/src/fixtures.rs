//! Seeded store fixtures.

use foldkv_core::{Key, Kv, Store, Value};
use foldkv_ordmap::{BTreeOrderedMap, OrderedMap};

/// Creates a store seeded with the given string entries.
#[must_use]
pub fn seeded_store(entries: &[(&str, &str)]) -> Store {
    let kv = Store::new();
    for (k, v) in entries {
        kv.put(Key::from(*k), Value::from(*v))
            .expect("seeding an in-memory store cannot fail");
    }
    kv
}

/// Creates a store by seeding an ordered map first and adopting it via
/// [`Store::with_map`].
#[must_use]
pub fn seeded_map_store(entries: &[(&str, &str)]) -> Store {
    let mut map = BTreeOrderedMap::new();
    for (k, v) in entries {
        map.put(k.as_bytes(), v.as_bytes())
            .expect("seeding a B-tree map cannot fail");
    }
    Store::with_map(Box::new(map))
}

/// The digit-key fixture from the prefix-listing contract: listing prefix
/// "1" must return `["1", "10", "11", "12", "13"]`.
#[must_use]
pub fn digit_keys_store() -> Store {
    seeded_store(&[
        ("0", "v"),
        ("1", "v"),
        ("10", "v"),
        ("11", "v"),
        ("12", "v"),
        ("13", "v"),
        ("2", "v"),
    ])
}
