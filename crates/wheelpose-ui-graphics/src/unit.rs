//! Unit types and the density that converts them to pixels

/// Screen density and user font scale of the surface a picker renders on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub density: f32,
    pub font_scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            density: 1.0,
            font_scale: 1.0,
        }
    }
}

impl Density {
    pub const fn new(density: f32, font_scale: f32) -> Self {
        Self {
            density,
            font_scale,
        }
    }

    pub fn dp_to_px(&self, dp: Dp) -> Px {
        Px(dp.0 * self.density)
    }

    pub fn sp_to_px(&self, sp: Sp) -> Px {
        Px(sp.0 * self.density * self.font_scale)
    }

    pub fn px_to_dp(&self, px: Px) -> Dp {
        Dp(px.0 / self.density)
    }
}

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

/// Scale-independent pixels (for text)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    pub fn value(self) -> f32 {
        self.0
    }
}
