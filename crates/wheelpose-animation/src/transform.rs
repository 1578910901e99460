//! 3D-look transform for wheel items.
//!
//! Items are tilted, shrunk and faded according to how far they sit from the
//! center of the visible window. The mapping is a pure function of its inputs
//! so callers may memoize on the argument tuple.

use crate::easing::Lerp;

/// Largest tilt, in degrees, applied at the window edge.
pub const DEFAULT_MAX_TILT: f32 = 60.0;
/// Scale applied at the window edge.
pub const DEFAULT_MIN_SCALE: f32 = 0.7;
/// Opacity applied at the window edge.
pub const DEFAULT_MIN_OPACITY: f32 = 0.3;

/// Edge values of the wheel effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformConfig {
    pub max_tilt: f32,
    pub min_scale: f32,
    pub min_opacity: f32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            max_tilt: DEFAULT_MAX_TILT,
            min_scale: DEFAULT_MIN_SCALE,
            min_opacity: DEFAULT_MIN_OPACITY,
        }
    }
}

impl TransformConfig {
    pub fn with_max_tilt(mut self, max_tilt: f32) -> Self {
        self.max_tilt = max_tilt;
        self
    }

    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }

    pub fn with_min_opacity(mut self, min_opacity: f32) -> Self {
        self.min_opacity = min_opacity;
        self
    }
}

/// Rotation, scale and alpha a renderer applies to one wheel item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    /// Rotation around the horizontal axis. Negative above the center.
    pub tilt_degrees: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl ItemTransform {
    pub const IDENTITY: ItemTransform = ItemTransform {
        tilt_degrees: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for ItemTransform {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            tilt_degrees: self.tilt_degrees.lerp(&target.tilt_degrees, fraction),
            scale: self.scale.lerp(&target.scale, fraction),
            opacity: self.opacity.lerp(&target.opacity, fraction),
        }
    }
}

/// Maps item positions to [`ItemTransform`]s for one wheel configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformCalculator {
    config: TransformConfig,
}

impl TransformCalculator {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Transform for `item_index` given the scroll state of the wheel.
    ///
    /// `item_height_px` and `half_visible_item_count` must be positive. They
    /// are not checked: a zero yields a meaningless transform, never a panic.
    pub fn calculate(
        &self,
        item_index: usize,
        first_visible_index: usize,
        scroll_offset_px: f32,
        item_height_px: f32,
        half_visible_item_count: f32,
    ) -> ItemTransform {
        let steps = item_index as f64 - first_visible_index as f64;
        let distance = steps as f32 - scroll_offset_px / item_height_px;
        let normalized = (distance / half_visible_item_count).clamp(-1.0, 1.0);
        let magnitude = normalized.abs();

        ItemTransform {
            tilt_degrees: normalized * self.config.max_tilt,
            scale: 1.0 - magnitude * (1.0 - self.config.min_scale),
            opacity: 1.0 - magnitude * (1.0 - self.config.min_opacity),
        }
    }
}

/// [`TransformCalculator::calculate`] with the default wheel effect.
pub fn calculate_transform(
    item_index: usize,
    first_visible_index: usize,
    scroll_offset_px: f32,
    item_height_px: f32,
    half_visible_item_count: f32,
) -> ItemTransform {
    TransformCalculator::default().calculate(
        item_index,
        first_visible_index,
        scroll_offset_px,
        item_height_px,
        half_visible_item_count,
    )
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
