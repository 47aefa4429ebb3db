mod logic;
mod ui;

/// Which coordinates the readout of the cursor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    Both,
    XOnly,
    YOnly,
}

/// Crosshair guides and a coordinate readout that follow the pointer.
///
/// A snapping cursor locks onto the nearest point of a reference series
/// instead of showing the raw pointer position. The reference points must be
/// sorted ascending by x, otherwise the snapped point is unspecified.
#[derive(Debug, Clone)]
pub struct MeasurementCursor {
    position: Option<[f64; 2]>,
    readout: Option<Readout>,
    /// Anchor of the readout text, as fraction of the plot bounds.
    text_pos: [f64; 2],
    snap_points: Option<Vec<[f64; 2]>>,
}

pub const DEFAULT_TEXT_POS: [f64; 2] = [0.7, 0.9];
