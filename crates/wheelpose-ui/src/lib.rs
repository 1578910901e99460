//! Wheel pickers and navigation bar state for Wheelpose
//!
//! Widgets here own no rendering. Each frame they hand the host a list of
//! visible items with their labels, measured layouts and wheel transforms.
//! Shared services (label cache, animation coordinator, metrics, haptics)
//! travel in a [`WheelContext`] the application builds once.

mod context;
mod haptics;
pub mod widgets;

pub use context::WheelContext;
pub use haptics::{perform_or_log, HapticError, HapticFeedback, HapticFeedbackType, NoHaptics};
pub use widgets::*;

pub use wheelpose_animation::{ItemTransform, TransformConfig, TweenSpec};
pub use wheelpose_foundation::{ConfigError, ScrollPosition, ValidationError, VisibleRange};
pub use wheelpose_ui_graphics::{Density, Dp, TextStyle};

pub mod prelude {
    pub use crate::context::WheelContext;
    pub use crate::haptics::{HapticFeedback, HapticFeedbackType};
    pub use crate::widgets::{
        ClockPicker, ClockTime, DurationPicker, NavTab, NavigationBar, PickerDuration,
        WheelPickerConfig, WheelPickerState,
    };
}
