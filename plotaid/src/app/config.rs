use app_core::string_error::ErrorStringExt;
use egui::Color32;
use std::{io::Read, path::Path};

use crate::widgets::{Readout, RectStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Width of every strip button, as fraction of the window width.
    pub button_width: f64,
    pub cursor_display_x: bool,
    pub cursor_display_y: bool,
    pub cursor_posx: f64,
    pub cursor_posy: f64,
    pub current_rect_color: Color32,
    pub current_rect_alpha: f32,
    pub saved_rect_color: Color32,
    pub saved_rect_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        let current = RectStyle::current();
        let saved = RectStyle::saved();

        Self {
            button_width: 0.15,
            cursor_display_x: true,
            cursor_display_y: true,
            cursor_posx: 0.7,
            cursor_posy: 0.9,
            current_rect_color: current.color,
            current_rect_alpha: current.alpha,
            saved_rect_color: saved.color,
            saved_rect_alpha: saved.alpha,
        }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        Self::from_path(&home.join(".plotaid"))
    }

    pub fn from_path(path: &Path) -> Result<Self, String> {
        let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
        let mut config_raw = String::new();
        file.read_to_string(&mut config_raw)
            .err_to_string("could not load config file")?;
        Ok(Self::parse(&config_raw))
    }

    /// Parse `key=value` lines, keeping defaults for missing or invalid keys.
    pub fn parse(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.starts_with("#") {
                continue;
            }
            let Some((key, val)) = line.split_once("=") else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            match key {
                "button_width" => parse_into(&mut config.button_width, key, val),
                "cursor_display_x" => parse_into(&mut config.cursor_display_x, key, val),
                "cursor_display_y" => parse_into(&mut config.cursor_display_y, key, val),
                "cursor_posx" => parse_into(&mut config.cursor_posx, key, val),
                "cursor_posy" => parse_into(&mut config.cursor_posy, key, val),
                "current_rect_alpha" => parse_into(&mut config.current_rect_alpha, key, val),
                "saved_rect_alpha" => parse_into(&mut config.saved_rect_alpha, key, val),
                "current_rect_color" => parse_color(&mut config.current_rect_color, key, val),
                "saved_rect_color" => parse_color(&mut config.saved_rect_color, key, val),
                _ => log::warn!("unknown config key '{}'", key),
            }
        }
        config
    }

    pub fn readout(&self) -> Option<Readout> {
        Readout::from_flags(self.cursor_display_x, self.cursor_display_y)
    }

    pub fn current_rect_style(&self) -> RectStyle {
        RectStyle {
            color: self.current_rect_color,
            alpha: self.current_rect_alpha,
        }
    }

    pub fn saved_rect_style(&self) -> RectStyle {
        RectStyle {
            color: self.saved_rect_color,
            alpha: self.saved_rect_alpha,
        }
    }

    /// Preferences view. Returns true if anything was changed.
    pub fn render(&mut self, _ctx: &egui::Context, ui: &mut egui::Ui) -> bool {
        let before = self.clone();

        ui.heading("Cursor");
        ui.checkbox(&mut self.cursor_display_x, "Show x coordinate");
        ui.checkbox(&mut self.cursor_display_y, "Show y coordinate");
        ui.add(egui::Slider::new(&mut self.cursor_posx, 0.0..=1.0).text("Readout x position"));
        ui.add(egui::Slider::new(&mut self.cursor_posy, 0.0..=1.0).text("Readout y position"));
        ui.separator();

        ui.heading("Rectangle Selector");
        ui.horizontal(|ui| {
            ui.color_edit_button_srgba(&mut self.current_rect_color);
            ui.add(egui::Slider::new(&mut self.current_rect_alpha, 0.0..=1.0).text("Current rectangle"));
        });
        ui.horizontal(|ui| {
            ui.color_edit_button_srgba(&mut self.saved_rect_color);
            ui.add(egui::Slider::new(&mut self.saved_rect_alpha, 0.0..=1.0).text("Saved rectangles"));
        });
        ui.separator();

        ui.heading("Buttons");
        ui.add(egui::Slider::new(&mut self.button_width, 0.05..=0.3).text("Button width"))
            .on_hover_text("applied on restart");

        *self != before
    }
}

fn parse_into<T: std::str::FromStr>(target: &mut T, key: &str, val: &str) {
    if let Ok(parsed) = val.parse::<T>() {
        *target = parsed;
    } else {
        log::warn!("could not parse '{}' for config key '{}'", val, key)
    }
}

fn parse_color(target: &mut Color32, key: &str, val: &str) {
    if let Ok(color) = Color32::from_hex(val) {
        *target = color;
    } else {
        log::warn!("could not parse '{}' as hex color for config key '{}'", val, key)
    }
}
