//! Bounded cache of measured labels.
//!
//! Wheel pickers redraw the same handful of labels ("00".."59", "AM", "PM")
//! every frame. Measuring them once per (text, style) pair and keeping the
//! result in an LRU map removes text shaping from the scroll path.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lru::LruCache;
use wheelpose_core::hash::default::{build_hasher, BuildHasher};
use wheelpose_ui_graphics::{FontWeight, TextStyle};

use super::measurer::{LabelLayout, LabelMeasurer};

/// Entries kept before the least recently used one is evicted.
pub const DEFAULT_LABEL_CACHE_SIZE: usize = 100;

/// Identity of a cached measurement.
///
/// The font size is compared by bit pattern so the key can be hashed.
#[derive(Clone, Debug)]
pub struct LabelCacheKey {
    pub text: String,
    pub font_size_px: f32,
    pub font_weight: Option<FontWeight>,
    pub font_family: Option<String>,
}

impl LabelCacheKey {
    pub fn new(text: &str, style: &TextStyle) -> Self {
        Self {
            text: text.to_owned(),
            font_size_px: style.resolved_font_size(),
            font_weight: style.font_weight,
            font_family: style.font_family.clone(),
        }
    }
}

impl PartialEq for LabelCacheKey {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.font_size_px.to_bits() == other.font_size_px.to_bits()
            && self.font_weight == other.font_weight
            && self.font_family == other.font_family
    }
}

impl Eq for LabelCacheKey {}

impl Hash for LabelCacheKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.font_size_px.to_bits().hash(state);
        self.font_weight.hash(state);
        self.font_family.hash(state);
    }
}

/// Counters since construction or the last [`LabelCache::clear`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
}

struct LabelCacheInner {
    map: LruCache<LabelCacheKey, LabelLayout, BuildHasher>,
    stats: LabelCacheStats,
}

impl LabelCacheInner {
    fn get_or_measure<M>(&mut self, text: &str, style: &TextStyle, measurer: &M) -> LabelLayout
    where
        M: LabelMeasurer + ?Sized,
    {
        let key = LabelCacheKey::new(text, style);
        if let Some(layout) = self.map.get(&key).copied() {
            self.stats.hits += 1;
            return layout;
        }
        self.stats.misses += 1;
        let layout = measurer.measure(text, style);
        if let Some((evicted, _)) = self.map.push(key, layout) {
            self.stats.evictions += 1;
            log::trace!("label cache evicted {:?}", evicted.text);
        }
        layout
    }
}

/// Thread-safe LRU of label measurements.
///
/// Share one instance across pickers through an `Arc`; every operation takes
/// the same short lock.
pub struct LabelCache {
    inner: Mutex<LabelCacheInner>,
    capacity: NonZeroUsize,
}

impl std::fmt::Debug for LabelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelCache")
            .field("capacity", &self.capacity)
            .field("stats", &self.stats())
            .finish()
    }
}

impl Default for LabelCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LABEL_CACHE_SIZE)
    }
}

impl LabelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is raised to one.
    pub fn with_capacity(max_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LabelCacheInner {
                map: LruCache::with_hasher(capacity, build_hasher()),
                stats: LabelCacheStats::default(),
            }),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    // The LRU map is never left half-updated, so a poisoned lock is still usable.
    fn inner(&self) -> MutexGuard<'_, LabelCacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached layout for `text` in `style`, measuring it on a miss.
    ///
    /// The measurer runs under the cache lock, so concurrent callers asking
    /// for the same key measure it once.
    pub fn measure<M>(&self, text: &str, style: &TextStyle, measurer: &M) -> LabelLayout
    where
        M: LabelMeasurer + ?Sized,
    {
        self.inner().get_or_measure(text, style, measurer)
    }

    /// Drops every entry for `text`, whatever its style.
    ///
    /// Returns how many entries were removed.
    pub fn invalidate(&self, text: &str) -> usize {
        let mut inner = self.inner();
        let stale: Vec<LabelCacheKey> = inner
            .map
            .iter()
            .filter(|(key, _)| key.text == text)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            inner.map.pop(key);
        }
        stale.len()
    }

    pub fn clear(&self) {
        let mut inner = self.inner();
        inner.map.clear();
        inner.stats = LabelCacheStats::default();
    }

    pub fn contains(&self, text: &str, style: &TextStyle) -> bool {
        self.inner().map.contains(&LabelCacheKey::new(text, style))
    }

    pub fn len(&self) -> usize {
        self.inner().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> LabelCacheStats {
        let inner = self.inner();
        LabelCacheStats {
            len: inner.map.len(),
            ..inner.stats
        }
    }
}

#[cfg(test)]
#[path = "../tests/label_cache_tests.rs"]
mod tests;
