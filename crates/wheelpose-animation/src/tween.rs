//! Frame-driven tweens.
//!
//! A [`Tween`] is sampled with the frame time in nanoseconds supplied by the
//! host. The first sample latches the start time, matching how frame callbacks
//! deliver their first timestamp.

use crate::easing::{Easing, Lerp};

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(250, Easing::FastOutSlowInEasing)
    }
}

#[derive(Debug, Clone)]
pub struct Tween<T> {
    from: T,
    to: T,
    spec: TweenSpec,
    start_nanos: Option<u64>,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, spec: TweenSpec) -> Self {
        Self {
            from,
            to,
            spec,
            start_nanos: None,
        }
    }

    pub fn initial(&self) -> &T {
        &self.from
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn spec(&self) -> TweenSpec {
        self.spec
    }

    fn linear_fraction(&self, start: u64, frame_nanos: u64) -> f32 {
        let duration_nanos = self.spec.duration_millis.saturating_mul(1_000_000);
        if duration_nanos == 0 {
            return 1.0;
        }
        let elapsed = frame_nanos.saturating_sub(start);
        (elapsed as f64 / duration_nanos as f64).min(1.0) as f32
    }

    /// Eased value at `frame_nanos`. The first call defines time zero.
    pub fn value_at(&mut self, frame_nanos: u64) -> T {
        let start = *self.start_nanos.get_or_insert(frame_nanos);
        let fraction = self.linear_fraction(start, frame_nanos);
        if fraction >= 1.0 {
            return self.to.clone();
        }
        self.from
            .lerp(&self.to, self.spec.easing.transform(fraction))
    }

    /// `false` until the tween has been sampled at least once.
    pub fn is_finished_at(&self, frame_nanos: u64) -> bool {
        self.start_nanos
            .is_some_and(|start| self.linear_fraction(start, frame_nanos) >= 1.0)
    }
}
