use crate::widgets::{
    button_bar::DEFAULT_BUTTON_WIDTH,
    error::ConfigError,
    event::{ClickEvent, HostRequest, PointerEvent},
    region::{hit_test, strip_layout, Region},
};

use super::{DragRect, RectStyle, RectangleSelector, SELECTOR_LABELS};

impl Default for RectangleSelector {
    fn default() -> Self {
        // Three buttons of the default width always fit into the strip.
        let regions = strip_layout(SELECTOR_LABELS.len(), DEFAULT_BUTTON_WIDTH).unwrap_or_default();
        Self::from_regions(regions)
    }
}

impl DragRect {
    /// Corners in drawing order, starting at the anchor.
    pub fn corners(&self) -> [[f64; 2]; 4] {
        let [x0, y0] = self.origin;
        let [x1, y1] = [x0 + self.size[0], y0 + self.size[1]];
        [[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
    }
}

impl RectangleSelector {
    /// A selector whose three strip buttons are `button_width` wide.
    pub fn with_width(button_width: f64) -> Result<Self, ConfigError> {
        let regions = strip_layout(SELECTOR_LABELS.len(), button_width)?;
        Ok(Self::from_regions(regions))
    }

    fn from_regions(regions: Vec<Region>) -> Self {
        Self {
            anchor: None,
            corner: None,
            pressed: false,
            inside: true,
            current_visible: false,
            data: Vec::new(),
            regions,
            current_style: RectStyle::current(),
            saved_style: RectStyle::saved(),
        }
    }

    pub fn with_styles(mut self, current: RectStyle, saved: RectStyle) -> Self {
        self.current_style = current;
        self.saved_style = saved;
        self
    }

    fn accepts(&self, event: &PointerEvent) -> Option<[f64; 2]> {
        if !self.inside || event.navigating {
            return None;
        }
        event.data
    }

    pub fn on_press(&mut self, event: &PointerEvent) {
        if self.pressed {
            return;
        }
        let Some(position) = self.accepts(event) else {
            return;
        };
        self.anchor = Some(position);
        self.pressed = true;
    }

    pub fn on_move(&mut self, event: &PointerEvent) {
        if !self.pressed {
            return;
        }
        let Some(position) = self.accepts(event) else {
            return;
        };
        self.corner = Some(position);
        self.current_visible = true;
    }

    pub fn on_release(&mut self, event: &PointerEvent) {
        if !self.pressed {
            return;
        }
        let Some(position) = self.accepts(event) else {
            return;
        };
        self.pressed = false;
        self.corner = Some(position);
        self.current_visible = true;
    }

    pub fn on_enter(&mut self) {
        self.inside = true;
    }

    pub fn on_leave(&mut self) {
        self.inside = false;
    }

    /// Commit the current rectangle, unless it was committed before.
    pub fn select(&mut self) {
        let (Some([x0, y0]), Some([x1, y1])) = (self.anchor, self.corner) else {
            return;
        };
        let rect = [x0, x1, y0, y1];
        if self.data.contains(&rect) {
            return;
        }
        log::info!(
            "Coords x=({:.2}, {:.2})  y=({:.2}, {:.2})",
            x0,
            x1,
            y0,
            y1
        );
        self.data.push(rect);
        self.current_visible = false;
    }

    /// Forget all committed rectangles.
    pub fn clear(&mut self) {
        self.data.clear();
        if self.anchor.is_none() {
            return;
        }
        log::debug!("cleared all selected regions");
        self.current_visible = false;
    }

    pub fn finish(&self) -> HostRequest {
        log::debug!("selection finished with {} regions", self.data.len());
        HostRequest::Close
    }

    /// Dispatch a click on the selector's button strip.
    pub fn click(&mut self, event: &ClickEvent) -> Option<HostRequest> {
        match hit_test(&self.regions, event)? {
            0 => self.select(),
            1 => self.clear(),
            _ => return Some(self.finish()),
        }
        None
    }

    /// Replace the committed rectangles, e.g. with a loaded session.
    pub fn restore(&mut self, data: Vec<[f64; 4]>) {
        self.data = data;
    }

    pub fn data(&self) -> &[[f64; 4]] {
        &self.data
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The rectangle being dragged, if it is shown.
    pub fn current_rect(&self) -> Option<DragRect> {
        if !self.current_visible {
            return None;
        }
        let ([x0, y0], [x1, y1]) = (self.anchor?, self.corner?);
        Some(DragRect {
            origin: [x0, y0],
            size: [x1 - x0, y1 - y0],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn drag(selector: &mut RectangleSelector, from: [f64; 2], to: [f64; 2]) {
        selector.on_press(&PointerEvent::at(from[0], from[1]));
        selector.on_move(&PointerEvent::at(to[0], to[1]));
        selector.on_release(&PointerEvent::at(to[0], to[1]));
    }

    #[test]
    fn test_drag_and_select() {
        init();
        let mut selector = RectangleSelector::default();
        drag(&mut selector, [0.0, 0.0], [1.0, 1.0]);
        assert!(!selector.is_pressed());
        // Releasing does not commit.
        assert!(selector.data().is_empty());
        selector.select();
        assert_eq!(selector.data(), &[[0.0, 1.0, 0.0, 1.0]]);
        // Selecting the same drag again does nothing.
        selector.select();
        assert_eq!(selector.data().len(), 1);
    }

    #[test]
    fn test_select_duplicate_anywhere_is_skipped() {
        let mut selector = RectangleSelector::default();
        drag(&mut selector, [0.0, 0.0], [1.0, 1.0]);
        selector.select();
        drag(&mut selector, [2.0, 2.0], [3.0, 4.0]);
        selector.select();
        drag(&mut selector, [0.0, 0.0], [1.0, 1.0]);
        selector.select();
        assert_eq!(selector.data(), &[[0.0, 1.0, 0.0, 1.0], [2.0, 3.0, 2.0, 4.0]]);
    }

    #[test]
    fn test_select_without_drag() {
        let mut selector = RectangleSelector::default();
        selector.select();
        assert!(selector.data().is_empty());
        // Pressing alone only anchors the first corner.
        selector.on_press(&PointerEvent::at(1.0, 1.0));
        selector.select();
        assert!(selector.data().is_empty());
    }

    #[test]
    fn test_drag_tracks_pointer() {
        let mut selector = RectangleSelector::default();
        assert_eq!(selector.current_rect(), None);
        selector.on_press(&PointerEvent::at(2.0, 3.0));
        assert!(selector.is_pressed());
        selector.on_move(&PointerEvent::at(1.0, 5.0));
        let rect = selector.current_rect().unwrap();
        assert_eq!(rect.origin, [2.0, 3.0]);
        assert_eq!(rect.size, [-1.0, 2.0]);
        assert_eq!(
            rect.corners(),
            [[2.0, 3.0], [1.0, 3.0], [1.0, 5.0], [2.0, 5.0]]
        );
        selector.on_release(&PointerEvent::at(0.0, 0.0));
        assert_eq!(selector.current_rect().unwrap().size, [-2.0, -3.0]);
        selector.select();
        assert_eq!(selector.data(), &[[2.0, 0.0, 3.0, 0.0]]);
        assert_eq!(selector.current_rect(), None);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut selector = RectangleSelector::default();
        selector.on_move(&PointerEvent::at(1.0, 1.0));
        selector.on_release(&PointerEvent::at(1.0, 1.0));
        assert_eq!(selector.current_rect(), None);
        selector.select();
        assert!(selector.data().is_empty());
    }

    #[test]
    fn test_outside_is_ignored() {
        let mut selector = RectangleSelector::default();
        assert!(selector.is_inside());
        selector.on_leave();
        selector.on_press(&PointerEvent::at(0.0, 0.0));
        assert!(!selector.is_pressed());

        selector.on_enter();
        selector.on_press(&PointerEvent::at(0.0, 0.0));
        selector.on_leave();
        selector.on_move(&PointerEvent::at(5.0, 5.0));
        selector.on_release(&PointerEvent::at(5.0, 5.0));
        assert!(selector.is_pressed());
        assert_eq!(selector.current_rect(), None);

        selector.on_enter();
        selector.on_release(&PointerEvent::at(1.0, 2.0));
        selector.select();
        assert_eq!(selector.data(), &[[0.0, 1.0, 0.0, 2.0]]);
    }

    #[test]
    fn test_navigation_is_ignored() {
        let mut selector = RectangleSelector::default();
        selector.on_press(&PointerEvent::at(0.0, 0.0).navigating(true));
        assert!(!selector.is_pressed());
        selector.on_press(&PointerEvent::at(0.0, 0.0));
        selector.on_move(&PointerEvent::at(3.0, 3.0).navigating(true));
        selector.on_release(&PointerEvent::at(3.0, 3.0).navigating(true));
        assert!(selector.is_pressed());
        assert_eq!(selector.current_rect(), None);
    }

    #[test]
    fn test_clear() {
        let mut selector = RectangleSelector::default();
        // Nothing to clear yet.
        selector.clear();
        assert!(selector.data().is_empty());

        drag(&mut selector, [0.0, 0.0], [1.0, 1.0]);
        selector.select();
        drag(&mut selector, [1.0, 1.0], [2.0, 3.0]);
        selector.select();
        drag(&mut selector, [4.0, 4.0], [5.0, 5.0]);
        assert!(selector.current_rect().is_some());
        selector.clear();
        assert!(selector.data().is_empty());
        assert_eq!(selector.current_rect(), None);
    }

    #[test]
    fn test_strip_buttons() {
        init();
        let mut selector = RectangleSelector::default();
        let (w, h) = (640.0, 480.0);
        let center = |region: &Region| {
            let [x0, y0, x1, y1] = region.pixel_bounds(w, h);
            ClickEvent::new((x0 + x1) / 2.0, (y0 + y1) / 2.0, w, h)
        };
        let [select, clear, finish] = [0, 1, 2].map(|i| center(&selector.regions()[i]));

        drag(&mut selector, [0.0, 0.0], [1.0, 1.0]);
        assert_eq!(selector.click(&select), None);
        assert_eq!(selector.data().len(), 1);
        assert_eq!(selector.click(&clear), None);
        assert!(selector.data().is_empty());
        assert_eq!(selector.click(&finish), Some(HostRequest::Close));
        // Off the buttons.
        assert_eq!(selector.click(&ClickEvent::new(1.0, 1.0, w, h)), None);
    }

    #[test]
    fn test_custom_width_and_restore() {
        let mut selector = RectangleSelector::with_width(0.3).unwrap();
        assert_eq!(selector.regions().len(), 3);
        assert!(RectangleSelector::with_width(0.4).is_err());
        selector.restore(vec![[0.0, 1.0, 2.0, 3.0]]);
        assert_eq!(selector.data(), &[[0.0, 1.0, 2.0, 3.0]]);
    }
}
