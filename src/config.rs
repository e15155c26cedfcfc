// Fenster- und Darstellungseinstellungen
// Keine Konfigurationsdateien, alles fest eingebaut

use eframe::egui;

pub struct AppConfig {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub log_level: tracing::Level,

    // Schriftgrößen
    pub heading_size: f32,
    pub body_size: f32,
    pub button_size: f32,
    pub small_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Carbon Footprint Calculator",
            inner_size: [480.0, 460.0],
            log_level: tracing::Level::INFO,
            heading_size: 22.0,
            body_size: 15.0,
            button_size: 16.0,
            small_size: 12.0,
        }
    }
}

impl AppConfig {
    /// Feste Fenstergröße, nicht veränderbar
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title)
                .with_inner_size(self.inner_size)
                .with_resizable(false),
            ..Default::default()
        }
    }

    pub fn style(&self, base: &egui::Style) -> egui::Style {
        let mut style = base.clone();
        style.text_styles = [
            (egui::TextStyle::Heading, egui::FontId::proportional(self.heading_size)),
            (egui::TextStyle::Body, egui::FontId::proportional(self.body_size)),
            (egui::TextStyle::Monospace, egui::FontId::monospace(self.body_size)),
            (egui::TextStyle::Button, egui::FontId::proportional(self.button_size)),
            (egui::TextStyle::Small, egui::FontId::proportional(self.small_size)),
        ]
        .into();

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style
    }
}
