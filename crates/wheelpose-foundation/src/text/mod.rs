//! Label measurement and its cache.
//!
//! - [`LabelMeasurer`] - host-provided text measurement
//! - [`LabelCache`] - bounded LRU over (text, size, weight, family)

mod label_cache;
mod measurer;

pub use label_cache::{LabelCache, LabelCacheKey, LabelCacheStats, DEFAULT_LABEL_CACHE_SIZE};
pub use measurer::{LabelLayout, LabelMeasurer, MonospacedLabelMeasurer};
