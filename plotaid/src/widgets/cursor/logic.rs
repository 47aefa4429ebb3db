use crate::widgets::event::PointerEvent;

use super::{MeasurementCursor, Readout, DEFAULT_TEXT_POS};

impl Readout {
    /// `None` if neither coordinate should be shown.
    pub fn from_flags(display_x: bool, display_y: bool) -> Option<Self> {
        match (display_x, display_y) {
            (true, true) => Some(Readout::Both),
            (true, false) => Some(Readout::XOnly),
            (false, true) => Some(Readout::YOnly),
            (false, false) => None,
        }
    }

    pub fn format(&self, x: f64, y: f64) -> String {
        match self {
            Readout::Both => format!("x={x:.2}, y={y:.2}"),
            Readout::XOnly => format!("x={x:.2}"),
            Readout::YOnly => format!("y={y:.2}"),
        }
    }
}

impl Default for MeasurementCursor {
    fn default() -> Self {
        Self::new(Some(Readout::Both))
    }
}

impl MeasurementCursor {
    pub fn new(readout: Option<Readout>) -> Self {
        Self {
            position: None,
            readout,
            text_pos: DEFAULT_TEXT_POS,
            snap_points: None,
        }
    }

    /// A cursor snapping onto `points`, which must be sorted ascending by x.
    pub fn snapping(points: Vec<[f64; 2]>) -> Self {
        Self {
            snap_points: Some(points),
            ..Self::new(Some(Readout::Both))
        }
    }

    pub fn with_text_pos(mut self, posx: f64, posy: f64) -> Self {
        self.text_pos = [posx, posy];
        self
    }

    pub fn set_readout(&mut self, readout: Option<Readout>) {
        self.readout = readout;
    }

    /// Follow the pointer. Events outside the plot leave the guides where
    /// they are.
    pub fn on_move(&mut self, event: &PointerEvent) {
        let Some([x, y]) = event.data else {
            return;
        };
        match &self.snap_points {
            Some(points) => {
                if let Some(point) = nearest_point(points, x) {
                    self.position = Some(point);
                }
            }
            None => self.position = Some([x, y]),
        }
    }

    /// Current guide position, `None` before the pointer entered the plot.
    pub fn position(&self) -> Option<[f64; 2]> {
        self.position
    }

    pub fn text_pos(&self) -> [f64; 2] {
        self.text_pos
    }

    pub fn is_snapping(&self) -> bool {
        self.snap_points.is_some()
    }

    pub fn text(&self) -> String {
        match (self.position, self.readout) {
            (Some([x, y]), Some(readout)) => readout.format(x, y),
            _ => String::new(),
        }
    }
}

/// Point closest in x to `x`, looked up around the insertion point of `x`
/// in the (ascending) x values of `points`.
fn nearest_point(points: &[[f64; 2]], x: f64) -> Option<[f64; 2]> {
    let idx = points.partition_point(|point| point[0] < x);
    let below = idx.checked_sub(1);
    let above = (idx < points.len()).then_some(idx);
    [below, above]
        .into_iter()
        .flatten()
        .map(|i| points[i])
        .min_by(|a, b| (a[0] - x).abs().total_cmp(&(b[0] - x).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_modes() {
        assert_eq!(Readout::Both.format(1.0, -2.346), "x=1.00, y=-2.35");
        assert_eq!(Readout::XOnly.format(0.126, 9.0), "x=0.13");
        assert_eq!(Readout::YOnly.format(0.126, 9.0), "y=9.00");
        assert_eq!(Readout::from_flags(true, true), Some(Readout::Both));
        assert_eq!(Readout::from_flags(true, false), Some(Readout::XOnly));
        assert_eq!(Readout::from_flags(false, true), Some(Readout::YOnly));
        assert_eq!(Readout::from_flags(false, false), None);
    }

    #[test]
    fn test_cursor_follows_pointer() {
        let mut cursor = MeasurementCursor::default();
        assert_eq!(cursor.text(), "");
        cursor.on_move(&PointerEvent::at(0.5, 1.5));
        assert_eq!(cursor.position(), Some([0.5, 1.5]));
        assert_eq!(cursor.text(), "x=0.50, y=1.50");
    }

    #[test]
    fn test_cursor_ignores_outside() {
        let mut cursor = MeasurementCursor::new(Some(Readout::XOnly));
        cursor.on_move(&PointerEvent::at(3.0, 4.0));
        cursor.on_move(&PointerEvent::outside());
        assert_eq!(cursor.position(), Some([3.0, 4.0]));
        assert_eq!(cursor.text(), "x=3.00");
    }

    #[test]
    fn test_cursor_without_readout() {
        let mut cursor = MeasurementCursor::new(None);
        cursor.on_move(&PointerEvent::at(3.0, 4.0));
        assert_eq!(cursor.position(), Some([3.0, 4.0]));
        assert_eq!(cursor.text(), "");
    }

    #[test]
    fn test_snapping_cursor() {
        let points = vec![[0.0, 10.0], [1.0, 11.0], [2.0, 12.0], [4.0, 14.0]];
        let mut cursor = MeasurementCursor::snapping(points);
        assert!(cursor.is_snapping());

        cursor.on_move(&PointerEvent::at(1.2, -5.0));
        assert_eq!(cursor.position(), Some([1.0, 11.0]));
        cursor.on_move(&PointerEvent::at(1.8, -5.0));
        assert_eq!(cursor.position(), Some([2.0, 12.0]));
        assert_eq!(cursor.text(), "x=2.00, y=12.00");
        // Halfway between two points the lower one wins.
        cursor.on_move(&PointerEvent::at(3.0, -5.0));
        assert_eq!(cursor.position(), Some([2.0, 12.0]));
        // Beyond both ends of the reference series.
        cursor.on_move(&PointerEvent::at(-3.0, 0.0));
        assert_eq!(cursor.position(), Some([0.0, 10.0]));
        cursor.on_move(&PointerEvent::at(100.0, 0.0));
        assert_eq!(cursor.position(), Some([4.0, 14.0]));
        // Exactly on a reference point.
        cursor.on_move(&PointerEvent::at(4.0, 0.0));
        assert_eq!(cursor.position(), Some([4.0, 14.0]));
    }

    #[test]
    fn test_snapping_cursor_empty_reference() {
        let mut cursor = MeasurementCursor::snapping(vec![]);
        cursor.on_move(&PointerEvent::at(1.0, 1.0));
        assert_eq!(cursor.position(), None);
    }
}
