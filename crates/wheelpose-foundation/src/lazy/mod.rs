//! Scroll windowing for wheel lists.

mod scroll_position;
mod visible_range;

pub use scroll_position::ScrollPosition;
pub use visible_range::{
    calculate_visible_range, is_visible, VisibleRange, VisibleRangeCalculator,
    DEFAULT_VISIBLE_RANGE_BUFFER,
};
