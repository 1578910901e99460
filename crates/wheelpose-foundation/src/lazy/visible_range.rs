//! Visible index window for wheel lists.
//!
//! Bounds per-frame work to the items around the viewport: the window starts
//! one buffer before the first visible item and ends one buffer after the
//! last, so the cost of a frame depends on the visible count, not on the list
//! length.

use std::ops::RangeInclusive;

/// Extra items kept on each side of the visible items.
pub const DEFAULT_VISIBLE_RANGE_BUFFER: usize = 1;

/// Closed interval of item indices, `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Intersects with `0..item_count`. `None` when nothing remains.
    pub fn clamp_to(&self, item_count: usize) -> Option<VisibleRange> {
        if item_count == 0 || self.start >= item_count {
            return None;
        }
        Some(VisibleRange::new(self.start, self.end.min(item_count - 1)))
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Computes [`VisibleRange`]s with a fixed buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRangeCalculator {
    buffer: usize,
}

impl Default for VisibleRangeCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_RANGE_BUFFER)
    }
}

impl VisibleRangeCalculator {
    pub fn new(buffer: usize) -> Self {
        Self { buffer }
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }

    /// Window around `first_visible_index`.
    ///
    /// Only the first visible index and the visible count shape the window.
    /// The scroll offset and item height are accepted for call-site symmetry
    /// with the transform calculator but do not shift or tighten it.
    pub fn calculate(
        &self,
        first_visible_index: usize,
        _scroll_offset_px: f32,
        _item_height_px: f32,
        visible_item_count: usize,
    ) -> VisibleRange {
        let start = first_visible_index.saturating_sub(self.buffer);
        let end = first_visible_index
            .saturating_add(visible_item_count)
            .saturating_add(self.buffer);
        VisibleRange { start, end }
    }
}

/// [`VisibleRangeCalculator::calculate`] with the default buffer of one item.
pub fn calculate_visible_range(
    first_visible_index: usize,
    scroll_offset_px: f32,
    item_height_px: f32,
    visible_item_count: usize,
) -> VisibleRange {
    VisibleRangeCalculator::default().calculate(
        first_visible_index,
        scroll_offset_px,
        item_height_px,
        visible_item_count,
    )
}

pub fn is_visible(index: usize, range: &VisibleRange) -> bool {
    range.contains(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_extends_one_item_each_side() {
        let range = calculate_visible_range(10, 0.0, 40.0, 5);
        assert_eq!(range, VisibleRange::new(9, 16));
        assert_eq!(range.len(), 8);
    }

    #[test]
    fn start_is_clamped_at_zero() {
        assert_eq!(calculate_visible_range(0, 0.0, 40.0, 5), VisibleRange::new(0, 6));
        let wide = VisibleRangeCalculator::new(3).calculate(1, 0.0, 40.0, 5);
        assert_eq!(wide, VisibleRange::new(0, 9));
    }

    #[test]
    fn offset_and_item_height_do_not_move_the_window() {
        let base = calculate_visible_range(7, 0.0, 40.0, 5);
        for offset in [0.5, 20.0, 39.9, 1_000.0] {
            for height in [1.0, 40.0, 120.0] {
                assert_eq!(calculate_visible_range(7, offset, height, 5), base);
            }
        }
    }

    #[test]
    fn bounds_never_decrease_as_first_index_grows() {
        let mut previous = calculate_visible_range(0, 0.0, 40.0, 5);
        for first in 1..200 {
            let range = calculate_visible_range(first, 12.0, 40.0, 5);
            assert!(range.start >= previous.start);
            assert!(range.end >= previous.end);
            assert!(range.contains(first));
            previous = range;
        }
    }

    #[test]
    fn membership_is_inclusive() {
        let range = VisibleRange::new(9, 16);
        assert!(is_visible(9, &range));
        assert!(is_visible(16, &range));
        assert!(!is_visible(8, &range));
        assert!(!is_visible(17, &range));
    }

    #[test]
    fn clamp_to_trims_past_the_last_item() {
        let range = VisibleRange::new(9, 16);
        assert_eq!(range.clamp_to(12), Some(VisibleRange::new(9, 11)));
        assert_eq!(range.clamp_to(100), Some(range));
        assert_eq!(range.clamp_to(9), None);
        assert_eq!(range.clamp_to(0), None);
    }

    #[test]
    fn huge_indices_saturate() {
        let range = calculate_visible_range(usize::MAX - 1, 0.0, 40.0, 5);
        assert_eq!(range.end, usize::MAX);
        assert_eq!(range.start, usize::MAX - 2);
    }
}
