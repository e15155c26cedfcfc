use crate::emissions::*;
use crate::form::CalculatorForm;
use eframe::egui;
use egui::Color32;

pub struct CarbonApp {
    form: CalculatorForm,

    // UI State
    show_about: bool,
}

impl Default for CarbonApp {
    fn default() -> Self {
        Self {
            form: CalculatorForm::new(),
            show_about: false,
        }
    }
}

const INPUT_WIDTH: f32 = 160.0;
const HINT_COLOR: Color32 = Color32::from_rgb(200, 50, 50);

impl eframe::App for CarbonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Solange ein Dialog offen ist, ist das Formular gesperrt
        let dialog_open = self.form.error().is_some() || self.show_about;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                self.draw_form(ui);
            });
        });

        // Fehler-Dialog
        if let Some(error) = self.form.error().cloned() {
            egui::Window::new(error.title())
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.set_min_width(240.0);
                    ui.colored_label(HINT_COLOR, error.to_string());
                    ui.add_space(10.0);

                    if ui.button("OK").clicked() {
                        self.form.dismiss_error();
                    }
                });
        }

        // Info-Dialog
        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Carbon Footprint Calculator");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(5.0);
                    ui.label("Estimates daily CO2 emissions from transport,");
                    ui.label("electricity usage and diet.");

                    ui.add_space(10.0);
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }
    }
}

impl CarbonApp {
    fn draw_form(&mut self, ui: &mut egui::Ui) {
        // === EINGABE SECTION ===
        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Transport (km per day):");
                numeric_input(ui, &mut self.form.transport_input);
                ui.end_row();

                ui.label("Electricity Usage (kWh per day):");
                numeric_input(ui, &mut self.form.electricity_input);
                ui.end_row();

                ui.label("Food Choice:");
                egui::ComboBox::from_id_source("food_choice")
                    .width(INPUT_WIDTH)
                    .selected_text(self.form.food.label())
                    .show_ui(ui, |ui| {
                        for category in FoodCategory::ALL {
                            ui.selectable_value(&mut self.form.food, category, category.label());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(10.0);

        // Berechnen-Button
        let calc_button = egui::Button::new(egui::RichText::new("Calculate").strong())
            .min_size(egui::vec2(140.0, 32.0))
            .fill(Color32::from_rgb(40, 130, 90));

        if ui.add(calc_button).clicked() {
            // Fehler merkt sich das Formular, der Dialog öffnet sich über form.error()
            self.form.compute().ok();
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new(self.form.result_label()).heading());

        // === AUFSCHLÜSSELUNG ===
        if let Some(breakdown) = self.form.last_breakdown().copied() {
            ui.add_space(5.0);
            ui.group(|ui| {
                draw_breakdown_bars(ui, &breakdown);
            });
        }

        if let Some(offset) = self.form.offset_suggestion() {
            ui.colored_label(Color32::from_rgb(0, 140, 60), offset);
        }

        // === AKTIONEN ===
        ui.add_space(10.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                self.form.reset();
            }
            if ui.button("About").clicked() {
                self.show_about = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_dark_light_mode_switch(ui);
            });
        });
    }
}

// ========== BALKENDIAGRAMM ==========
const BAR_COLORS: [Color32; 3] = [
    Color32::from_rgb(0, 150, 136),
    Color32::from_rgb(229, 115, 115),
    Color32::from_rgb(100, 181, 246),
];
const BAR_MAX_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 14.0;

/// Einzelwerte als Text mit Balken, Länge relativ zum größten Wert
fn draw_breakdown_bars(ui: &mut egui::Ui, breakdown: &EmissionBreakdown) {
    let shares = breakdown.bar_shares();

    egui::Grid::new("breakdown_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (i, (name, kg)) in breakdown.entries().into_iter().enumerate() {
                ui.label(format_breakdown_line(name, kg));

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(BAR_MAX_WIDTH, BAR_HEIGHT),
                    egui::Sense::hover(),
                );
                let mut bar = rect;
                bar.set_width(BAR_MAX_WIDTH * shares[i] as f32);
                ui.painter()
                    .rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);
                ui.painter().rect_filled(bar, 2.0, BAR_COLORS[i]);
                ui.end_row();
            }
        });
}

/// Textfeld mit Hinweis, solange der Inhalt keine gültige Zahl ist
fn numeric_input(ui: &mut egui::Ui, text: &mut String) {
    ui.vertical(|ui| {
        ui.add(egui::TextEdit::singleline(text).desired_width(INPUT_WIDTH));
        if is_pending_invalid(text.as_str()) {
            ui.label(
                egui::RichText::new("Not a valid number")
                    .small()
                    .color(HINT_COLOR),
            );
        }
    });
}
