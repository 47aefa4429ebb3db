mod logic;
mod ui;

pub use logic::{hit_test, strip_layout};
pub use ui::{paint_strip, split_surface, strip_input, StripInput};

/// Bottom edge of every button in a strip, as fraction of the surface height.
pub const STRIP_BUTTON_BOTTOM: f64 = 0.05;
/// Height of every button in a strip, as fraction of the surface height.
pub const STRIP_BUTTON_HEIGHT: f64 = 0.075;
/// Part of the surface height below the plot that is reserved for the strip.
pub const STRIP_MARGIN: f64 = 0.25;

/// A rectangle in fractions of a display surface.
///
/// `origin_y` is measured upward from the bottom edge of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Pixel bounds `[x0, y0, x1, y1]` on a surface of the given size.
    pub fn pixel_bounds(&self, surface_width: f64, surface_height: f64) -> [f64; 4] {
        [
            self.origin_x * surface_width,
            self.origin_y * surface_height,
            (self.origin_x + self.width) * surface_width,
            (self.origin_y + self.height) * surface_height,
        ]
    }
}
