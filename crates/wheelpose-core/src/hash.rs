//! Hasher used by the keyed caches (label layouts).

#[cfg(feature = "std-hash")]
pub mod default {
    pub use std::collections::hash_map::RandomState as BuildHasher;

    #[inline]
    pub fn build_hasher() -> BuildHasher {
        BuildHasher::new()
    }
}

#[cfg(not(feature = "std-hash"))]
pub mod default {
    // fast branch
    pub use ahash::RandomState as BuildHasher;

    #[inline]
    pub fn build_hasher() -> BuildHasher {
        BuildHasher::default()
    }
}
