//! Wheel transforms, easing and animation admission for Wheelpose
//!
//! Provides the 3D-look item transform used by wheel pickers, frame-driven
//! tweens with easing curves, and the coordinator that caps how many
//! transitions run at once.

pub mod coordinator;
pub mod easing;
pub mod transform;
pub mod tween;

pub use coordinator::{AnimationCoordinator, DEFAULT_MAX_CONCURRENT_ANIMATIONS};
pub use easing::{Easing, Lerp};
pub use transform::{calculate_transform, ItemTransform, TransformCalculator, TransformConfig};
pub use tween::{Tween, TweenSpec};

pub mod prelude {
    pub use crate::coordinator::AnimationCoordinator;
    pub use crate::easing::{Easing, Lerp};
    pub use crate::transform::{ItemTransform, TransformCalculator, TransformConfig};
    pub use crate::tween::{Tween, TweenSpec};
}
