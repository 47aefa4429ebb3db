use egui::Rect;

use crate::widgets::{
    event::HostRequest,
    region::{paint_strip, strip_input},
};

impl super::ButtonBar {
    /// Draw the strip at the bottom of `surface` and dispatch clicks on it.
    pub fn render(&mut self, ui: &mut egui::Ui, surface: Rect) -> Option<HostRequest> {
        let input = strip_input(ui, surface, "button_bar");
        let hovered = input.hovered.and_then(|event| self.hovered(&event));
        paint_strip(ui, surface, self.labels(), self.regions(), hovered);

        let request = input.clicked.and_then(|event| self.click(&event));
        self.render_prompt(ui.ctx());
        request
    }

    fn render_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        let mut confirmed = false;
        let mut cancelled = false;

        let modal = egui::Modal::new("button_bar_prompt".into()).show(ctx, |ui| {
            ui.set_min_width(250.0);
            ui.heading(&prompt.title);
            ui.separator();
            ui.label(&prompt.comment);
            let edit = ui.text_edit_singleline(&mut prompt.text);
            if !edit.has_focus() && prompt.text.is_empty() {
                edit.request_focus();
            }
            if let Some(error) = &prompt.error {
                ui.colored_label(egui::Color32::RED, error);
            }
            ui.horizontal(|ui| {
                confirmed = ui.button("OK").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter));
                cancelled = ui.button("Cancel").clicked();
            });
        });

        if confirmed {
            self.confirm_prompt();
        } else if cancelled || modal.should_close() {
            self.cancel_prompt();
        }
    }
}
