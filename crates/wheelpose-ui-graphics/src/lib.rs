//! Pure data for text styles, units and sizes in Wheelpose
//!
//! Nothing in here knows how to draw. The picker engine and the host renderer
//! both speak these types.

mod geometry;
mod typography;
mod unit;

pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
    pub use crate::typography::{FontStyle, FontWeight, TextStyle};
    pub use crate::unit::{Density, Dp, Px, Sp};
}
