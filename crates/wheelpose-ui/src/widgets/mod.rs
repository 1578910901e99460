mod clock_picker;
mod duration_picker;
mod navigation_bar;
mod wheel_picker;

pub use clock_picker::*;
pub use duration_picker::*;
pub use navigation_bar::*;
pub use wheel_picker::*;
