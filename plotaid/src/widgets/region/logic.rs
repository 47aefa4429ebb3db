use crate::widgets::{error::ConfigError, event::ClickEvent};

use super::{Region, STRIP_BUTTON_BOTTOM, STRIP_BUTTON_HEIGHT};

/// Index of the first region that contains the click, if any.
///
/// Points exactly on a region boundary do not match.
pub fn hit_test(regions: &[Region], event: &ClickEvent) -> Option<usize> {
    if regions.is_empty() {
        return None;
    }
    let ClickEvent {
        x,
        y,
        width,
        height,
    } = *event;
    regions.iter().position(|region| {
        let [x0, y0, x1, y1] = region.pixel_bounds(width, height);
        x0 < x && x < x1 && y0 < y && y < y1
    })
}

/// Lay out `num_buttons` buttons of equal `width` from left to right, with
/// equal gaps before, between and after them.
pub fn strip_layout(num_buttons: usize, width: f64) -> Result<Vec<Region>, ConfigError> {
    let n = num_buttons as f64;
    if n * width > 1.0 || width <= 0.0 {
        return Err(ConfigError::StripOverflow {
            buttons: num_buttons,
            width,
        });
    }
    let separation = (1.0 - n * width) / (n + 1.0);
    let regions = (0..num_buttons)
        .map(|b| {
            let start = (b + 1) as f64 * separation + b as f64 * width;
            Region::new(start, STRIP_BUTTON_BOTTOM, width, STRIP_BUTTON_HEIGHT)
        })
        .collect();
    Ok(regions)
}
