//! Scroll windowing, label caching and configuration validation for Wheelpose
//!
//! The per-frame picker path runs through [`lazy`] (which indices matter) and
//! [`text`] (what their labels measure). [`validation`] runs once, when a
//! widget is configured.

pub mod lazy;
pub mod text;
pub mod validation;

pub use lazy::{
    calculate_visible_range, is_visible, ScrollPosition, VisibleRange, VisibleRangeCalculator,
    DEFAULT_VISIBLE_RANGE_BUFFER,
};
pub use text::{
    LabelCache, LabelCacheKey, LabelCacheStats, LabelLayout, LabelMeasurer,
    MonospacedLabelMeasurer, DEFAULT_LABEL_CACHE_SIZE,
};
pub use validation::{
    validate, validate_named, ConfigError, ValidationError, ValidationErrors, ValidationResult,
    Validator,
};

pub mod prelude {
    pub use crate::lazy::{ScrollPosition, VisibleRange, VisibleRangeCalculator};
    pub use crate::text::{LabelCache, LabelLayout, LabelMeasurer};
    pub use crate::validation::{ConfigError, ValidationResult, Validator};
}
