//! Interpolation and easing curves.

use wheelpose_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

/// Easing curves used by picker snapping and indicator transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    LinearEasing,
    /// Symmetric cubic ease.
    EaseInOut,
    /// Material standard curve; the default for snapping.
    #[default]
    FastOutSlowInEasing,
    /// Material decelerate curve, used for entering motion.
    LinearOutSlowInEasing,
    /// Material accelerate curve, used for exiting motion.
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).ease(fraction),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0).ease(fraction),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0).ease(fraction),
            Easing::FastOutLinearEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0).ease(fraction),
        }
    }
}

/// Polynomial coefficients of one axis of a unit cubic bezier.
#[derive(Clone, Copy)]
struct Axis {
    a: f32,
    b: f32,
    c: f32,
}

impl Axis {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn sample(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

/// Bezier from (0, 0) to (1, 1) through two control points.
struct CubicBezier {
    x: Axis,
    y: Axis,
}

impl CubicBezier {
    const EPSILON: f32 = 1e-6;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Axis::new(x1, x2),
            y: Axis::new(y1, y2),
        }
    }

    fn ease(&self, fraction: f32) -> f32 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self
            .solve_newton(fraction)
            .unwrap_or_else(|| self.solve_bisect(fraction));
        self.y.sample(t)
    }

    fn solve_newton(&self, fraction: f32) -> Option<f32> {
        let mut t = fraction;
        for _ in 0..8 {
            let error = self.x.sample(t) - fraction;
            if error.abs() < Self::EPSILON {
                return Some(t);
            }
            let slope = self.x.slope(t);
            if slope.abs() < Self::EPSILON {
                return None;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }
        None
    }

    fn solve_bisect(&self, fraction: f32) -> f32 {
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        let mut t = fraction;
        for _ in 0..16 {
            let error = self.x.sample(t) - fraction;
            if error.abs() < Self::EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::LinearEasing,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearEasing,
    ];

    #[test]
    fn curves_pin_endpoints() {
        for easing in ALL {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.transform(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.transform(-3.0), 0.0, "{easing:?}");
            assert_eq!(easing.transform(7.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for step in 1..=50 {
                let value = easing.transform(step as f32 / 50.0);
                assert!(value + 1e-4 >= previous, "{easing:?} dipped at step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn fast_out_slow_in_leads_linear() {
        assert!(Easing::FastOutSlowInEasing.transform(0.5) > 0.5);
        assert!(Easing::FastOutLinearEasing.transform(0.5) < 0.5);
    }

    #[test]
    fn points_interpolate_per_axis() {
        let from = Point::new(0.0, 10.0);
        let to = Point::new(100.0, 20.0);
        assert_eq!(from.lerp(&to, 0.25), Point::new(25.0, 12.5));
    }
}
