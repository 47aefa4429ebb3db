mod logic;
mod ui;

use egui::Color32;

use super::region::Region;

pub const SELECTOR_LABELS: [&str; 3] = ["Select Region", "Clear all regions", "Finish"];

/// Lets the user drag rectangles on a plot and commit them.
///
/// Press anchors the first corner, moving while pressed drags the second one
/// and release stops the drag. A rectangle is only recorded in [`data`] once
/// it is committed with [`select`].
///
/// [`data`]: RectangleSelector::data
/// [`select`]: RectangleSelector::select
#[derive(Debug, Clone)]
pub struct RectangleSelector {
    anchor: Option<[f64; 2]>,
    corner: Option<[f64; 2]>,
    pressed: bool,
    inside: bool,
    current_visible: bool,
    /// Committed rectangles as `[x0, x1, y0, y1]`.
    data: Vec<[f64; 4]>,
    regions: Vec<Region>,
    pub current_style: RectStyle,
    pub saved_style: RectStyle,
}

/// The rectangle currently being dragged. Width and height are negative when
/// the pointer moved left of or below the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRect {
    pub origin: [f64; 2],
    pub size: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub color: Color32,
    pub alpha: f32,
}

impl RectStyle {
    pub fn current() -> Self {
        Self {
            color: Color32::RED,
            alpha: 0.125,
        }
    }

    pub fn saved() -> Self {
        Self {
            color: Color32::BLUE,
            alpha: 0.125,
        }
    }
}
