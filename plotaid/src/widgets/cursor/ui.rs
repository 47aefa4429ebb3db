use egui_plot::{HLine, PlotPoint, PlotUi, Text, VLine};

use crate::widgets::event::PointerEvent;

impl super::MeasurementCursor {
    /// Update the cursor from the pointer and draw it. Must be called from
    /// within the closure passed to `egui_plot::Plot::show`.
    pub fn render(&mut self, plot_ui: &mut PlotUi) {
        self.on_move(&PointerEvent::from_plot(plot_ui, false));

        let Some([x, y]) = self.position() else {
            return;
        };
        let color = plot_ui.ctx().style().visuals.text_color();
        plot_ui.hline(HLine::new(y).color(color).width(1.0));
        plot_ui.vline(VLine::new(x).color(color).width(1.0));

        let text = self.text();
        if text.is_empty() {
            return;
        }
        let bounds = plot_ui.plot_bounds();
        let [posx, posy] = self.text_pos();
        let anchor = PlotPoint::new(
            bounds.min()[0] + posx * bounds.width(),
            bounds.min()[1] + posy * bounds.height(),
        );
        plot_ui.text(
            Text::new(anchor, egui::RichText::new(text).monospace().color(color))
                .anchor(egui::Align2::LEFT_BOTTOM),
        );
    }
}
