pub mod common;
pub mod config;
mod events;
pub mod storage;

use config::Config;
use egui_plot::{Legend, Line, Points};
use events::{EventQueue, SessionDialog, SessionOp};
use storage::{load_json, save_json};

use crate::widgets::{
    region::split_surface, ButtonBar, ButtonParams, ButtonResult, HostRequest, InputFormat,
    MeasurementCursor, RectangleSelector,
};

const NUM_SCATTER_POINTS: usize = 100;
const NUM_CURVE_POINTS: usize = 60;

pub struct EguiApp {
    config: Config,
    mode: WidgetMode,
    page: usize,
    last_option: Option<String>,
    button_bar: ButtonBar,
    cursor: MeasurementCursor,
    snap_cursor: MeasurementCursor,
    selector: RectangleSelector,
    /// Pan/zoom the plot instead of handing the pointer to the widgets.
    navigating: bool,
    shortcuts_modal_open: bool,
    ui_selection: UISelection,
    event_queue: EventQueue<Self>,
    request_redraw: Option<()>,
}

#[derive(Debug, PartialEq, Eq)]
enum UISelection {
    Widgets,
    Preferences,
}

/// The widget shown on top of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetMode {
    Buttons,
    Cursor,
    SnapCursor,
    Selector,
}

impl UISelection {
    fn next(&self) -> Self {
        match self {
            UISelection::Widgets => Self::Preferences,
            UISelection::Preferences => Self::Widgets,
        }
    }
}

impl WidgetMode {
    pub fn next(&self) -> Self {
        match self {
            WidgetMode::Buttons => WidgetMode::Cursor,
            WidgetMode::Cursor => WidgetMode::SnapCursor,
            WidgetMode::SnapCursor => WidgetMode::Selector,
            WidgetMode::Selector => WidgetMode::Buttons,
        }
    }

    fn short_name(&self) -> &'static str {
        match self {
            WidgetMode::Buttons => "B",
            WidgetMode::Cursor => "C",
            WidgetMode::SnapCursor => "S",
            WidgetMode::Selector => "R",
        }
    }
}

impl EguiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let button_bar = match demo_button_bar(config.button_width) {
            Ok(bar) => bar,
            Err(err) => {
                log::error!("invalid button configuration, using defaults: {}", err);
                ButtonBar::default()
            }
        };
        let selector = match RectangleSelector::with_width(config.button_width) {
            Ok(selector) => selector,
            Err(err) => {
                log::error!("invalid selector configuration, using defaults: {}", err);
                RectangleSelector::default()
            }
        };
        let mut app = Self {
            mode: WidgetMode::Buttons,
            page: 0,
            last_option: None,
            button_bar,
            cursor: MeasurementCursor::default(),
            snap_cursor: MeasurementCursor::snapping(common::curve(NUM_CURVE_POINTS)),
            selector,
            navigating: false,
            shortcuts_modal_open: false,
            ui_selection: UISelection::Widgets,
            event_queue: EventQueue::<Self>::new(),
            request_redraw: None,
            config,
        };
        app.apply_config();
        app
    }

    /// Push the style related settings of the config into the widgets.
    fn apply_config(&mut self) {
        let config = &self.config;
        self.cursor = MeasurementCursor::new(config.readout())
            .with_text_pos(config.cursor_posx, config.cursor_posy);
        self.snap_cursor = MeasurementCursor::snapping(common::curve(NUM_CURVE_POINTS))
            .with_text_pos(config.cursor_posx, config.cursor_posy);
        self.selector.current_style = config.current_rect_style();
        self.selector.saved_style = config.saved_rect_style();
    }

    fn update_state(&mut self) {
        self.run_events();
        match self.button_bar.take_result() {
            ButtonResult::Index(0) => (),
            ButtonResult::Index(step) => {
                self.page = (self.page as i64 + step as i64)
                    .rem_euclid(common::NUM_PAGES as i64) as usize;
                log::debug!("showing page {}", self.page);
            }
            ButtonResult::Label(label) => {
                log::info!("option '{}' chosen on page {}", label, self.page);
                self.last_option = Some(label);
            }
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }

    fn request_session_dialog(&mut self, op: SessionOp) {
        log::debug!("open dialog to select {:?} path", op);
        let dialog = match op {
            SessionOp::Save => std::thread::spawn(|| {
                rfd::FileDialog::new()
                    .set_file_name("session.json")
                    .save_file()
            }),
            SessionOp::Load => std::thread::spawn(|| rfd::FileDialog::new().pick_file()),
        };
        self.event_queue.push(Box::new(SessionDialog::new(op, Some(dialog))));
    }
}

/// The button flow of the demo: page through the datasets, enter a value,
/// mark a page and close the window.
fn demo_button_bar(width: f64) -> Result<ButtonBar, crate::widgets::ConfigError> {
    let params = vec![
        ButtonParams::default(),
        ButtonParams::default(),
        ButtonParams::default()
            .with_name("x")
            .with_format(InputFormat::Integer)
            .with_prompt("Enter value", "Please enter x in meters.")
            .with_bounds(Some(4.0), Some(10.0)),
        ButtonParams::default().with_func(|| log::info!("page marked")),
        ButtonParams::default(),
    ];
    ButtonBar::with_width(
        &["Previous", "Next", "Enter value", "Mark", "Close"],
        &["PREVIOUS", "NEXT", "UINPUT", "OPTION", "CLOSE"],
        Some(params),
        width,
    )
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }

        self.update_state();

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            // Circle main window view.
            if i.key_pressed(egui::Key::F3) {
                self.ui_selection = self.ui_selection.next();
            }
            // Circle widget mode.
            if i.key_pressed(egui::Key::F4) {
                self.mode = self.mode.next();
            }
            // Quick save session.
            if i.key_pressed(egui::Key::F6) {
                if let Err(error) = save_json(self, None) {
                    log::error!("{}", error)
                };
            }
            // Quick load session.
            if i.key_pressed(egui::Key::F5) {
                if let Err(error) = load_json(self, None) {
                    log::error!("{}", error)
                };
            }
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
            // Open preferences.
            if i.key_pressed(egui::Key::F12) {
                self.ui_selection = UISelection::Preferences;
            }
            if i.key_pressed(egui::Key::S) && i.modifiers.ctrl {
                self.request_session_dialog(SessionOp::Save);
            }
            if i.key_pressed(egui::Key::L) && i.modifiers.ctrl {
                self.request_session_dialog(SessionOp::Load);
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui, ctx);
        });

        let request = egui::CentralPanel::default()
            .show(ctx, |ui| self.central_panel(ui, ctx))
            .inner;

        if should_quit || request == Some(HostRequest::Close) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        for (r, [x0, x1, y0, y1]) in self.selector.data().iter().enumerate() {
            log::info!(
                "Selected region {} was: x=({:.2}, {:.2})  y=({:.2}, {:.2})",
                r,
                x0,
                x1,
                y0,
                y1
            );
        }
        for (name, value) in self.button_bar.data() {
            match value {
                Some(value) => log::info!("input '{}' = {}", name, value),
                None => log::info!("input '{}' was cancelled", name),
            }
        }
    }
}

impl EguiApp {
    fn central_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) -> Option<HostRequest> {
        match self.ui_selection {
            UISelection::Widgets => self.widget_view(ui),
            UISelection::Preferences => {
                if self.config.render(ctx, ui) {
                    self.apply_config();
                }
                None
            }
        }
    }

    fn widget_view(&mut self, ui: &mut egui::Ui) -> Option<HostRequest> {
        self.status_line(ui);

        let surface = ui.available_rect_before_wrap();
        let (plot_rect, _) = split_surface(surface);
        ui.allocate_new_ui(egui::UiBuilder::new().max_rect(plot_rect), |ui| {
            self.plot(ui);
        });

        let request = match self.mode {
            WidgetMode::Buttons => self.button_bar.render(ui, surface),
            WidgetMode::Selector => self.selector.render_strip(ui, surface),
            WidgetMode::Cursor | WidgetMode::SnapCursor => None,
        };
        ui.advance_cursor_after_rect(surface);
        request
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| match self.mode {
            WidgetMode::Buttons => {
                ui.label(format!("Page {} / {}", self.page + 1, common::NUM_PAGES));
                if let Some(option) = &self.last_option {
                    ui.separator();
                    ui.label(format!("Last option: {option}"));
                }
                if let Some(Some(value)) = self.button_bar.data().get("x") {
                    ui.separator();
                    ui.label(format!("x = {value}"));
                }
            }
            WidgetMode::Cursor | WidgetMode::SnapCursor => {
                ui.label("Move the pointer over the plot to measure");
            }
            WidgetMode::Selector => {
                ui.label("Click and draw to select rectangle region");
                ui.separator();
                ui.label(format!("{} selected", self.selector.data().len()));
            }
        });
    }

    fn plot(&mut self, ui: &mut egui::Ui) {
        let interactive = self.mode != WidgetMode::Selector || self.navigating;
        let navigating = self.navigating;
        let points = common::scatter(self.page, NUM_SCATTER_POINTS);

        egui_plot::Plot::new("Plot")
            .allow_drag(interactive)
            .allow_zoom(interactive)
            .allow_boxed_zoom(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.points(Points::new(points).radius(2.5).name("data"));
                match self.mode {
                    WidgetMode::Buttons => (),
                    WidgetMode::Cursor => self.cursor.render(plot_ui),
                    WidgetMode::SnapCursor => {
                        plot_ui.line(Line::new(common::curve(NUM_CURVE_POINTS)).name("curve"));
                        self.snap_cursor.render(plot_ui);
                    }
                    WidgetMode::Selector => self.selector.render_plot_items(plot_ui, navigating),
                }
            });
    }

    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save").clicked() {
                    self.request_session_dialog(SessionOp::Save);
                }
                if ui.button("Load").clicked() {
                    self.request_session_dialog(SessionOp::Load);
                }
                if ui.button("Quick Save").clicked() {
                    if let Err(error) = save_json(self, None) {
                        log::error!("{}", error)
                    };
                }
                if ui.button("Quick Load").clicked() {
                    if let Err(error) = load_json(self, None) {
                        log::error!("{}", error)
                    };
                }
                if ui.button("Preferences").clicked() {
                    self.ui_selection = UISelection::Preferences
                };
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                ui.selectable_value(&mut self.ui_selection, UISelection::Widgets, "Widgets");
                ui.selectable_value(
                    &mut self.ui_selection,
                    UISelection::Preferences,
                    "Preferences",
                );
            });

            let mode_button_label = format!("Mode ({})", self.mode.short_name());
            ui.menu_button(mode_button_label, |ui| {
                ui.selectable_value(&mut self.mode, WidgetMode::Buttons, "Button Bar");
                ui.selectable_value(&mut self.mode, WidgetMode::Cursor, "Measurement Cursor");
                ui.selectable_value(&mut self.mode, WidgetMode::SnapCursor, "Snapping Cursor");
                ui.selectable_value(&mut self.mode, WidgetMode::Selector, "Rectangle Selector");
            });

            ui.toggle_value(&mut self.navigating, "Pan/Zoom");
            ui.toggle_value(&mut self.shortcuts_modal_open, "Help (F1)");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Keyboard Shortcuts");
                    ui.separator();
                    ui.label("CTRL + S = Open Save Dialog");
                    ui.separator();
                    ui.label("CTRL + L = Open Load Dialog");
                    ui.separator();
                    ui.label("F1 = Show Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F3 = Cycle View");
                    ui.separator();
                    ui.label("F4 = Cycle Widget");
                    ui.separator();
                    ui.label("F6 = Save Session");
                    ui.separator();
                    ui.label("F5 = Load Session");
                    ui.separator();
                    ui.label("F10 = Quit App");
                    ui.separator();
                    ui.label("F12 = Open Preferences");
                    ui.separator();
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_mode_cycles_through_all() {
        let mut mode = WidgetMode::Buttons;
        let mut seen = vec![mode];
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(mode.next(), WidgetMode::Buttons);
        assert_eq!(
            seen,
            vec![
                WidgetMode::Buttons,
                WidgetMode::Cursor,
                WidgetMode::SnapCursor,
                WidgetMode::Selector
            ]
        );
    }

    #[test]
    fn test_demo_button_bar() {
        let bar = demo_button_bar(Config::default().button_width).unwrap();
        assert_eq!(bar.buttons().len(), 5);
        assert!(demo_button_bar(0.25).is_err());
    }
}
