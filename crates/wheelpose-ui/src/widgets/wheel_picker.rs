//! Single-column wheel picker.
//!
//! Per frame the picker:
//! 1. finds the visible window around the centered item
//! 2. computes the wheel transform of every item in it
//! 3. looks up each label's measured layout in the shared cache
//!
//! Drag, release and frame ticks move the scroll position. Whenever the item
//! in the center slot changes, the picker requests selection haptics.

use wheelpose_animation::{ItemTransform, TransformCalculator, TransformConfig, Tween, TweenSpec};
use wheelpose_core::measure_calculation;
use wheelpose_foundation::{
    ConfigError, LabelLayout, ScrollPosition, ValidationError, Validator, VisibleRange,
    VisibleRangeCalculator, DEFAULT_VISIBLE_RANGE_BUFFER,
};
use wheelpose_ui_graphics::{Density, Dp, TextStyle};

use crate::context::WheelContext;
use crate::haptics::{perform_or_log, HapticFeedbackType};

/// Default label size of picker rows, in pixels.
pub const DEFAULT_PICKER_FONT_SIZE: f32 = 20.0;

/// Layout and motion of a wheel.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelPickerConfig {
    /// Rows shown at once, center row included.
    pub visible_item_count: usize,
    pub item_height: Dp,
    pub density: Density,
    pub label_style: TextStyle,
    pub transform: TransformConfig,
    /// Rows kept beyond each edge of the visible ones.
    pub range_buffer: usize,
    pub snap: TweenSpec,
}

impl Default for WheelPickerConfig {
    fn default() -> Self {
        Self {
            visible_item_count: 5,
            item_height: Dp(40.0),
            density: Density::default(),
            label_style: TextStyle::default().with_font_size(DEFAULT_PICKER_FONT_SIZE),
            transform: TransformConfig::default(),
            range_buffer: DEFAULT_VISIBLE_RANGE_BUFFER,
            snap: TweenSpec::default(),
        }
    }
}

impl WheelPickerConfig {
    pub fn with_visible_item_count(mut self, visible_item_count: usize) -> Self {
        self.visible_item_count = visible_item_count;
        self
    }

    pub fn with_item_height(mut self, item_height: Dp) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_label_style(mut self, label_style: TextStyle) -> Self {
        self.label_style = label_style;
        self
    }

    pub fn with_transform(mut self, transform: TransformConfig) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_snap(mut self, snap: TweenSpec) -> Self {
        self.snap = snap;
        self
    }

    pub fn item_height_px(&self) -> f32 {
        self.density.dp_to_px(self.item_height).value()
    }

    fn check(&self, validator: Validator) -> Validator {
        let item_height_px = self.item_height_px();
        validator
            .require(self.visible_item_count > 0, || {
                ValidationError::new("visible_item_count", "visible_item_count must be positive")
                    .with_expected_range("At least 1")
            })
            .require(item_height_px > 0.0 && item_height_px.is_finite(), || {
                ValidationError::new(
                    "item_height",
                    format!("item_height {item_height_px}px must be positive"),
                )
            })
    }
}

/// One row the host should draw this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelItem<'a> {
    pub index: usize,
    pub label: &'a str,
    pub transform: ItemTransform,
    pub layout: LabelLayout,
    pub is_selected: bool,
}

/// Everything the host needs to draw a wheel once.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelFrame<'a> {
    /// `None` when the window falls past the end of the list.
    pub range: Option<VisibleRange>,
    pub items: Vec<WheelItem<'a>>,
    pub selected_index: usize,
}

struct SnapState {
    id: String,
    tween: Tween<f64>,
}

/// State of one wheel: its values, scroll position and selection.
pub struct WheelPickerState {
    name: String,
    context: WheelContext,
    values: Vec<String>,
    config: WheelPickerConfig,
    transform: TransformCalculator,
    range: VisibleRangeCalculator,
    position: ScrollPosition,
    selected_index: usize,
    snap: Option<SnapState>,
}

impl std::fmt::Debug for WheelPickerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelPickerState")
            .field("name", &self.name)
            .field("values", &self.values.len())
            .field("position", &self.position)
            .field("selected_index", &self.selected_index)
            .field("snapping", &self.snap.is_some())
            .finish()
    }
}

fn signed_index(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

pub(crate) fn duplicate_name(name: &str) -> ValidationError {
    ValidationError::new("name", format!("name {name:?} is already in use"))
        .with_expected_range("A name no other live widget of the context uses")
}

impl WheelPickerState {
    /// Validates the configuration and centers `selected_index`.
    ///
    /// `name` keys the picker's metrics and animation ids and must not belong
    /// to another live widget of the same context. It is released on drop.
    pub fn new(
        name: impl Into<String>,
        context: WheelContext,
        values: Vec<String>,
        selected_index: usize,
        config: WheelPickerConfig,
    ) -> Result<Self, ConfigError> {
        config
            .check(Validator::new())
            .require_non_empty("values", values.len())
            .require_index_in_bounds("selected_index", signed_index(selected_index), values.len())
            .finish()
            .into_result()?;

        let name = name.into();
        if !context.claim_name(&name) {
            return Err(duplicate_name(&name).into());
        }

        Ok(Self {
            name,
            context,
            transform: TransformCalculator::new(config.transform),
            range: VisibleRangeCalculator::new(config.range_buffer),
            values,
            config,
            position: ScrollPosition::centered_on(selected_index),
            selected_index,
            snap: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn config(&self) -> &WheelPickerConfig {
        &self.config
    }

    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_value(&self) -> &str {
        &self.values[self.selected_index]
    }

    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    fn item_height_px(&self) -> f32 {
        self.config.item_height_px()
    }

    /// Position that centers `index`.
    pub fn scroll_position_for(&self, index: usize) -> ScrollPosition {
        ScrollPosition::centered_on(index.min(self.values.len() - 1))
    }

    /// Jumps to `index` without haptics or animation.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> Result<bool, ConfigError> {
        Validator::new()
            .require_index_in_bounds("selected_index", signed_index(index), self.values.len())
            .finish()
            .into_result()?;
        self.cancel_snap();
        self.position = ScrollPosition::centered_on(index);
        let changed = self.selected_index != index;
        self.selected_index = index;
        Ok(changed)
    }

    /// Replaces the values. The current selection must stay in range.
    pub fn set_values(&mut self, values: Vec<String>) -> Result<(), ConfigError> {
        Validator::new()
            .require_non_empty("values", values.len())
            .require_index_in_bounds(
                "selected_index",
                signed_index(self.selected_index),
                values.len(),
            )
            .finish()
            .into_result()?;
        for stale in &self.values {
            if !values.contains(stale) {
                self.context.label_cache().invalidate(stale);
            }
        }
        self.values = values;
        self.cancel_snap();
        self.position = ScrollPosition::centered_on(self.selected_index);
        Ok(())
    }

    /// Applies a drag delta in pixels. Positive scrolls toward later values.
    ///
    /// Returns the new selection if the center row changed.
    pub fn drag(&mut self, delta_px: f32) -> Option<usize> {
        self.cancel_snap();
        self.position = self
            .position
            .scrolled_by(delta_px, self.item_height_px(), self.values.len());
        self.update_selection()
    }

    /// Ends a drag and settles on the nearest row.
    ///
    /// Animates when the coordinator admits the snap, otherwise jumps.
    /// Returns whether an animation started.
    pub fn release(&mut self) -> bool {
        let item_height = self.item_height_px();
        let delta = self.position.snap_offset(item_height);
        let Some(target) = self.position.selected_index(item_height, self.values.len()) else {
            return false;
        };
        if delta == 0.0 {
            return false;
        }
        let from = self.position.absolute_px(item_height);
        let to = ScrollPosition::centered_on(target).absolute_px(item_height);
        let id = format!("{}:snap", self.name);
        if self.context.coordinator().try_begin(&id) {
            log::trace!("{id}: snapping {delta}px");
            self.snap = Some(SnapState {
                id,
                tween: Tween::new(from, to, self.config.snap),
            });
            true
        } else {
            log::debug!("{id}: animation budget exhausted, jumping");
            self.position = ScrollPosition::from_absolute_px(to, item_height);
            self.update_selection();
            false
        }
    }

    /// Advances a running snap to `frame_nanos`.
    ///
    /// Returns the new selection if the center row changed.
    pub fn advance(&mut self, frame_nanos: u64) -> Option<usize> {
        let item_height = self.item_height_px();
        let finished = {
            let snap = self.snap.as_mut()?;
            let absolute = snap.tween.value_at(frame_nanos);
            self.position = ScrollPosition::from_absolute_px(absolute, item_height);
            snap.tween.is_finished_at(frame_nanos)
        };
        if finished {
            self.cancel_snap();
        }
        self.update_selection()
    }

    fn cancel_snap(&mut self) {
        if let Some(snap) = self.snap.take() {
            self.context.coordinator().unregister_animation(&snap.id);
        }
    }

    fn update_selection(&mut self) -> Option<usize> {
        let selected = self
            .position
            .selected_index(self.item_height_px(), self.values.len())?;
        if selected == self.selected_index {
            return None;
        }
        log::debug!(
            "{}: selection {} -> {}",
            self.name,
            self.selected_index,
            selected
        );
        self.selected_index = selected;
        perform_or_log(
            self.context.haptics(),
            HapticFeedbackType::SelectionChange,
        );
        Some(selected)
    }

    /// Visible rows with their transforms and measured labels.
    pub fn frame(&self) -> WheelFrame<'_> {
        let metrics = self.context.metrics();
        metrics.record_redraw(&self.name);
        measure_calculation(metrics, &self.name, || self.build_frame())
    }

    fn build_frame(&self) -> WheelFrame<'_> {
        let item_height = self.item_height_px();
        let half_visible = self.config.visible_item_count as f32 / 2.0;
        let ScrollPosition {
            first_visible_index,
            offset_px,
        } = self.position;

        // The position names the centered row; the window starts at the top one.
        let top_row = first_visible_index.saturating_sub(self.config.visible_item_count / 2);
        let range = self
            .range
            .calculate(top_row, offset_px, item_height, self.config.visible_item_count)
            .clamp_to(self.values.len());

        let cache = self.context.label_cache();
        let measurer = self.context.measurer();
        let items = range
            .map(|range| {
                range
                    .indices()
                    .map(|index| {
                        let label = self.values[index].as_str();
                        WheelItem {
                            index,
                            label,
                            transform: self.transform.calculate(
                                index,
                                first_visible_index,
                                offset_px,
                                item_height,
                                half_visible,
                            ),
                            layout: cache.measure(label, &self.config.label_style, measurer),
                            is_selected: index == self.selected_index,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        WheelFrame {
            range,
            items,
            selected_index: self.selected_index,
        }
    }
}

impl Drop for WheelPickerState {
    fn drop(&mut self) {
        self.cancel_snap();
        self.context.release_name(&self.name);
    }
}

#[cfg(test)]
#[path = "../tests/wheel_picker_tests.rs"]
mod tests;
