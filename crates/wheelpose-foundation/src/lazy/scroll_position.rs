//! Scroll position of a wheel list.
//!
//! Wheels pad their content so that the item at `first_visible_index` sits in
//! the center slot when `offset_px` is zero. Selection and snapping are both
//! derived from that convention.

/// First visible item and how far it has scrolled past the top, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub first_visible_index: usize,
    /// Never negative.
    pub offset_px: f32,
}

impl ScrollPosition {
    /// Negative and NaN offsets collapse to zero.
    pub fn new(first_visible_index: usize, offset_px: f32) -> Self {
        let offset_px = if offset_px > 0.0 { offset_px } else { 0.0 };
        Self {
            first_visible_index,
            offset_px,
        }
    }

    /// Position that puts `index` in the center slot.
    pub fn centered_on(index: usize) -> Self {
        Self::new(index, 0.0)
    }

    /// Builds a position from a distance scrolled from the top of the list.
    pub fn from_absolute_px(absolute_px: f64, item_height_px: f32) -> Self {
        if !has_extent(item_height_px) || absolute_px.is_nan() || absolute_px <= 0.0 {
            return Self::default();
        }
        let height = item_height_px as f64;
        let index = (absolute_px / height).floor();
        let offset = absolute_px - index * height;
        Self::new(index as usize, offset as f32)
    }

    /// Distance scrolled from the top of the list.
    pub fn absolute_px(&self, item_height_px: f32) -> f64 {
        self.first_visible_index as f64 * item_height_px as f64 + self.offset_px as f64
    }

    /// Index of the item closest to the center slot, clamped to the list.
    ///
    /// `None` for an empty list.
    pub fn selected_index(&self, item_height_px: f32, item_count: usize) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        let steps = if has_extent(item_height_px) {
            (self.offset_px / item_height_px).round() as usize
        } else {
            0
        };
        Some(
            self.first_visible_index
                .saturating_add(steps)
                .min(item_count - 1),
        )
    }

    /// Signed pixel delta that brings the nearest item to the center slot.
    ///
    /// Negative values scroll back, positive values scroll forward.
    pub fn snap_offset(&self, item_height_px: f32) -> f32 {
        if !has_extent(item_height_px) {
            return 0.0;
        }
        let remainder = self.offset_px % item_height_px;
        if remainder * 2.0 >= item_height_px {
            item_height_px - remainder
        } else {
            -remainder
        }
    }

    /// Applies a drag delta, keeping the center inside the list.
    pub fn scrolled_by(&self, delta_px: f32, item_height_px: f32, item_count: usize) -> Self {
        if item_count == 0 || !has_extent(item_height_px) {
            return Self::default();
        }
        let max_px = (item_count - 1) as f64 * item_height_px as f64;
        let target = self.absolute_px(item_height_px) + delta_px as f64;
        let target = if target.is_nan() {
            0.0
        } else {
            target.clamp(0.0, max_px)
        };
        Self::from_absolute_px(target, item_height_px)
    }
}

fn has_extent(item_height_px: f32) -> bool {
    item_height_px > 0.0 && item_height_px.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f32 = 40.0;

    #[test]
    fn negative_offset_is_clamped() {
        assert_eq!(ScrollPosition::new(3, -5.0).offset_px, 0.0);
        assert_eq!(ScrollPosition::new(3, f32::NAN).offset_px, 0.0);
    }

    #[test]
    fn selection_rounds_to_nearest_item() {
        assert_eq!(ScrollPosition::new(4, 0.0).selected_index(HEIGHT, 10), Some(4));
        assert_eq!(ScrollPosition::new(4, 19.0).selected_index(HEIGHT, 10), Some(4));
        assert_eq!(ScrollPosition::new(4, 20.0).selected_index(HEIGHT, 10), Some(5));
        assert_eq!(ScrollPosition::new(9, 30.0).selected_index(HEIGHT, 10), Some(9));
        assert_eq!(ScrollPosition::new(0, 0.0).selected_index(HEIGHT, 0), None);
    }

    #[test]
    fn snap_moves_to_nearest_item() {
        assert_eq!(ScrollPosition::new(2, 10.0).snap_offset(HEIGHT), -10.0);
        assert_eq!(ScrollPosition::new(2, 30.0).snap_offset(HEIGHT), 10.0);
        assert_eq!(ScrollPosition::new(2, 0.0).snap_offset(HEIGHT), 0.0);
        assert_eq!(ScrollPosition::new(2, 10.0).snap_offset(0.0), 0.0);
    }

    #[test]
    fn drag_carries_across_item_boundaries() {
        let position = ScrollPosition::new(2, 30.0).scrolled_by(25.0, HEIGHT, 10);
        assert_eq!(position, ScrollPosition::new(3, 15.0));

        let back = position.scrolled_by(-60.0, HEIGHT, 10);
        assert_eq!(back, ScrollPosition::new(1, 35.0));
    }

    #[test]
    fn drag_is_clamped_to_list_ends() {
        let top = ScrollPosition::new(1, 0.0).scrolled_by(-500.0, HEIGHT, 10);
        assert_eq!(top, ScrollPosition::default());

        let bottom = ScrollPosition::new(8, 0.0).scrolled_by(500.0, HEIGHT, 10);
        assert_eq!(bottom, ScrollPosition::centered_on(9));
    }

    #[test]
    fn absolute_round_trip() {
        let position = ScrollPosition::new(7, 12.5);
        let absolute = position.absolute_px(HEIGHT);
        assert_eq!(absolute, 292.5);
        assert_eq!(ScrollPosition::from_absolute_px(absolute, HEIGHT), position);
    }
}
