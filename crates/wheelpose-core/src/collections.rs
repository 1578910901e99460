#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::hash_map::Entry;
    pub use std::collections::{HashMap, HashSet};

    pub fn new_map<K, V>() -> HashMap<K, V> {
        HashMap::new()
    }

    pub fn new_set<T>() -> HashSet<T> {
        HashSet::new()
    }
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
    pub use std::collections::hash_map::Entry;

    pub fn new_map<K, V>() -> HashMap<K, V> {
        HashMap::default()
    }

    pub fn new_set<T>() -> HashSet<T> {
        HashSet::default()
    }
}
