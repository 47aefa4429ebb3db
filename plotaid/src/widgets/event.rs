//! Toolkit independent input values consumed by the widgets.
//!
//! The `ui` half of every widget translates egui input into these values, so
//! the `logic` half never has to know about egui.

/// A pointer click in pixel space of a display surface.
///
/// `x` and `y` are measured from the bottom-left corner of the surface,
/// `width` and `height` are the live pixel dimensions of that surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClickEvent {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build an event from an egui screen position, relative to `surface`.
    pub fn from_screen(pos: egui::Pos2, surface: egui::Rect) -> Self {
        Self {
            x: (pos.x - surface.left()) as f64,
            // egui counts y downwards, the surface counts it upwards.
            y: (surface.bottom() - pos.y) as f64,
            width: surface.width() as f64,
            height: surface.height() as f64,
        }
    }
}

/// A pointer event in data space of a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in plot coordinates, `None` if the pointer is not
    /// over the plot.
    pub data: Option<[f64; 2]>,
    /// The host's pan/zoom tool is active.
    pub navigating: bool,
}

impl PointerEvent {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            data: Some([x, y]),
            navigating: false,
        }
    }

    pub fn outside() -> Self {
        Self {
            data: None,
            navigating: false,
        }
    }

    pub fn navigating(mut self, navigating: bool) -> Self {
        self.navigating = navigating;
        self
    }

    /// Read the pointer from a plot. `egui_plot` reports a coordinate for
    /// any pointer position in the window, so positions outside the current
    /// plot bounds are turned into `None` here.
    pub fn from_plot(plot_ui: &egui_plot::PlotUi, navigating: bool) -> Self {
        let bounds = plot_ui.plot_bounds();
        let data = plot_ui
            .pointer_coordinate()
            .filter(|point| {
                bounds.range_x().contains(&point.x) && bounds.range_y().contains(&point.y)
            })
            .map(|point| [point.x, point.y]);
        Self { data, navigating }
    }
}

/// Effects a widget asks its host to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Tear down the display surface.
    Close,
}

/// Headless egui frames around a 400x200 plot in a 400x400 window, for
/// tests of the `ui` halves.
#[cfg(test)]
pub(crate) mod headless {
    use egui::{pos2, vec2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
    use egui_plot::{Plot, PlotUi, Points};

    /// Inside the plot area.
    pub const INSIDE: Pos2 = pos2(200.0, 100.0);
    /// Below the plot, where the button strip would be.
    pub const BELOW: Pos2 = pos2(200.0, 350.0);

    pub fn run_frame(ctx: &egui::Context, events: Vec<Event>, mut add: impl FnMut(&mut PlotUi)) {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                Plot::new("headless_plot")
                    .width(400.0)
                    .height(200.0)
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.points(Points::new(vec![[0.0, 0.0], [1.0, 1.0]]));
                        add(plot_ui)
                    });
            });
        });
    }

    pub fn moved(pos: Pos2) -> Vec<Event> {
        vec![Event::PointerMoved(pos)]
    }

    pub fn primary(pos: Pos2, pressed: bool) -> Vec<Event> {
        vec![
            Event::PointerMoved(pos),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::default(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::headless::{moved, run_frame, BELOW, INSIDE};
    use super::*;

    #[test]
    fn test_click_from_screen_flips_y() {
        let surface = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        let event = ClickEvent::from_screen(egui::pos2(30.0, 60.0), surface);
        assert_eq!(event, ClickEvent::new(20.0, 10.0, 100.0, 50.0));
    }

    #[test]
    fn test_pointer_from_plot() {
        let ctx = egui::Context::default();
        let mut seen = Vec::new();
        // The first frame only establishes the plot bounds.
        for _ in 0..2 {
            run_frame(&ctx, moved(INSIDE), |_| ());
        }
        run_frame(&ctx, moved(INSIDE), |plot_ui| {
            seen.push(PointerEvent::from_plot(plot_ui, true))
        });
        run_frame(&ctx, moved(BELOW), |plot_ui| {
            seen.push(PointerEvent::from_plot(plot_ui, false))
        });

        assert!(seen[0].data.is_some());
        assert!(seen[0].navigating);
        assert_eq!(seen[1], PointerEvent::outside());
    }
}
