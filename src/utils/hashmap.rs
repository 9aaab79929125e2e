//! A hash-map with a fixed hasher, so iteration order only depends on the inserted keys.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`] with a fixed-seed [`foldhash`] hasher.
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, foldhash::fast::FixedState>;
