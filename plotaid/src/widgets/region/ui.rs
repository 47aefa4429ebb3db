use egui::{Align2, Rect, TextStyle};

use crate::widgets::event::ClickEvent;

use super::{Region, STRIP_MARGIN};

/// Split a display surface into the plot area and the button strip below it.
pub fn split_surface(surface: Rect) -> (Rect, Rect) {
    let strip_height = surface.height() * STRIP_MARGIN as f32;
    let plot = Rect::from_min_max(
        surface.min,
        egui::pos2(surface.right(), surface.bottom() - strip_height),
    );
    let strip = Rect::from_min_max(
        egui::pos2(surface.left(), surface.bottom() - strip_height),
        surface.max,
    );
    (plot, strip)
}

/// Pointer input over the button strip, in pixel space of the surface.
pub struct StripInput {
    pub clicked: Option<ClickEvent>,
    pub hovered: Option<ClickEvent>,
}

pub fn strip_input(ui: &mut egui::Ui, surface: Rect, id_salt: &str) -> StripInput {
    let (_, strip) = split_surface(surface);
    let response = ui.interact(strip, ui.id().with(id_salt), egui::Sense::click());
    let clicked = if response.clicked() {
        response
            .interact_pointer_pos()
            .map(|pos| ClickEvent::from_screen(pos, surface))
    } else {
        None
    };
    let hovered = response
        .hover_pos()
        .map(|pos| ClickEvent::from_screen(pos, surface));
    StripInput { clicked, hovered }
}

fn screen_rect(region: &Region, surface: Rect) -> Rect {
    let [x0, y0, x1, y1] = region.pixel_bounds(surface.width() as f64, surface.height() as f64);
    Rect::from_min_max(
        egui::pos2(surface.left() + x0 as f32, surface.bottom() - y1 as f32),
        egui::pos2(surface.left() + x1 as f32, surface.bottom() - y0 as f32),
    )
}

/// Paint one button per region. The caller does the hit testing.
pub fn paint_strip<'a>(
    ui: &egui::Ui,
    surface: Rect,
    labels: impl IntoIterator<Item = &'a str>,
    regions: &[Region],
    hovered: Option<usize>,
) {
    let painter = ui.painter();
    let font = TextStyle::Button.resolve(ui.style());
    for (idx, (label, region)) in labels.into_iter().zip(regions).enumerate() {
        let visuals = if hovered == Some(idx) {
            &ui.visuals().widgets.hovered
        } else {
            &ui.visuals().widgets.inactive
        };
        let rect = screen_rect(region, surface);
        painter.rect(rect, visuals.rounding, visuals.weak_bg_fill, visuals.bg_stroke);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            font.clone(),
            visuals.fg_stroke.color,
        );
    }
}
