use egui::{Rect, Stroke};
use egui_plot::{PlotUi, Polygon};

use crate::widgets::{
    event::{HostRequest, PointerEvent},
    region::{hit_test, paint_strip, strip_input},
};

use super::{RectStyle, SELECTOR_LABELS};

impl super::RectangleSelector {
    /// Feed pointer input to the selector and draw all rectangles. Must be
    /// called from within the closure passed to `egui_plot::Plot::show`.
    pub fn render_plot_items(&mut self, plot_ui: &mut PlotUi, navigating: bool) {
        let event = PointerEvent::from_plot(plot_ui, navigating);
        let inside = event.data.is_some();
        if inside != self.is_inside() {
            if inside {
                self.on_enter();
            } else {
                self.on_leave();
            }
        }

        let (pressed, released) = plot_ui
            .ctx()
            .input(|i| (i.pointer.primary_pressed(), i.pointer.primary_released()));
        if pressed {
            self.on_press(&event);
        }
        self.on_move(&event);
        if released {
            self.on_release(&event);
        }

        for &[x0, x1, y0, y1] in self.data() {
            let corners = vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]];
            plot_ui.polygon(styled(Polygon::new(corners), self.saved_style));
        }
        if let Some(rect) = self.current_rect() {
            plot_ui.polygon(styled(
                Polygon::new(rect.corners().to_vec()),
                self.current_style,
            ));
        }
    }

    /// Draw the "Select Region", "Clear all regions" and "Finish" buttons at
    /// the bottom of `surface` and dispatch clicks on them.
    pub fn render_strip(&mut self, ui: &mut egui::Ui, surface: Rect) -> Option<HostRequest> {
        let input = strip_input(ui, surface, "selector_strip");
        let hovered = input
            .hovered
            .and_then(|event| hit_test(self.regions(), &event));
        paint_strip(ui, surface, SELECTOR_LABELS, self.regions(), hovered);
        input.clicked.and_then(|event| self.click(&event))
    }
}

fn styled(polygon: Polygon, style: RectStyle) -> Polygon {
    polygon
        .fill_color(style.color.gamma_multiply(style.alpha))
        .stroke(Stroke::new(1.0, style.color))
}

#[cfg(test)]
mod tests {
    use egui::pos2;

    use crate::widgets::event::headless::{moved, primary, run_frame, BELOW, INSIDE};
    use crate::widgets::RectangleSelector;

    #[test]
    fn test_press_outside_plot_does_not_anchor() {
        let ctx = egui::Context::default();
        let mut selector = RectangleSelector::default();
        for _ in 0..2 {
            run_frame(&ctx, moved(INSIDE), |_| ());
        }
        run_frame(&ctx, primary(BELOW, true), |plot_ui| {
            selector.render_plot_items(plot_ui, false)
        });
        assert!(!selector.is_inside());
        assert!(!selector.is_pressed());
        assert_eq!(selector.current_rect(), None);
    }

    #[test]
    fn test_leaving_mid_drag_freezes_corner() {
        let ctx = egui::Context::default();
        let mut selector = RectangleSelector::default();
        for _ in 0..2 {
            run_frame(&ctx, moved(INSIDE), |_| ());
        }
        run_frame(&ctx, primary(INSIDE, true), |plot_ui| {
            selector.render_plot_items(plot_ui, false)
        });
        assert!(selector.is_pressed());
        run_frame(&ctx, moved(pos2(260.0, 140.0)), |plot_ui| {
            selector.render_plot_items(plot_ui, false)
        });
        let dragged = selector.current_rect();
        assert!(dragged.is_some());

        run_frame(&ctx, moved(BELOW), |plot_ui| {
            selector.render_plot_items(plot_ui, false)
        });
        assert!(!selector.is_inside());
        assert_eq!(selector.current_rect(), dragged);
        // Still pressed, the release happened outside and was ignored.
        run_frame(&ctx, primary(BELOW, false), |plot_ui| {
            selector.render_plot_items(plot_ui, false)
        });
        assert!(selector.is_pressed());
        assert_eq!(selector.current_rect(), dragged);
    }

    #[test]
    fn test_navigating_plot_ignores_press() {
        let ctx = egui::Context::default();
        let mut selector = RectangleSelector::default();
        for _ in 0..2 {
            run_frame(&ctx, moved(INSIDE), |_| ());
        }
        run_frame(&ctx, primary(INSIDE, true), |plot_ui| {
            selector.render_plot_items(plot_ui, true)
        });
        assert!(selector.is_inside());
        assert!(!selector.is_pressed());
    }
}
