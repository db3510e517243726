use chrono::NaiveDate;

use crate::validation::{FlightInfoFields, DATE_FORMAT};

/// Number of departure-airport slots on the form.
const DEPARTURE_FIELDS: usize = 3;

const FIELD_WIDTH: f32 = 110.0;

/// The scan input form: raw text fields, the return checkbox, the Search
/// button, and the accumulating error pane. Duplicate-airport warnings go
/// to a modal dialog instead of the pane.
pub struct WidgetSearchForm {
    pub fields: FlightInfoFields,
    start_picker: NaiveDate,
    end_picker: NaiveDate,
    error_text: String,
    duplicate_dialog: Option<String>,
}

impl WidgetSearchForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            fields: FlightInfoFields {
                departure_airports: vec![String::new(); DEPARTURE_FIELDS],
                ..Default::default()
            },
            start_picker: today,
            end_picker: today,
            error_text: String::new(),
            duplicate_dialog: None,
        }
    }

    /// Adds a line to the error pane.
    pub fn append_error(&mut self, message: &str) {
        self.error_text.push_str("Error: ");
        self.error_text.push_str(message);
        self.error_text.push('\n');
    }

    /// Opens the modal duplicate-airport warning.
    pub fn open_duplicate_dialog(&mut self, message: &str) {
        self.duplicate_dialog = Some(message.to_string());
    }

    /// Draws the form. Returns `true` when the user presses Search.
    /// `search_enabled` is false while a submission is in flight.
    pub fn ui(&mut self, ui: &mut egui::Ui, search_enabled: bool) -> bool {
        let mut search_requested = false;

        ui.heading("Flight Scanner");
        ui.add_space(8.0);

        egui::Grid::new("flight_info_fields")
            .num_columns(3)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Start date (yyyy-MM-dd):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.fields.start_date)
                        .desired_width(FIELD_WIDTH),
                );
                ui.push_id("start_date_picker", |ui| {
                    let response = ui.add(egui_extras::DatePickerButton::new(&mut self.start_picker));
                    if response.changed() {
                        self.fields.start_date = self.start_picker.format(DATE_FORMAT).to_string();
                    }
                });
                ui.end_row();

                ui.label("End date (yyyy-MM-dd):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.fields.end_date)
                        .desired_width(FIELD_WIDTH),
                );
                ui.push_id("end_date_picker", |ui| {
                    let response = ui.add(egui_extras::DatePickerButton::new(&mut self.end_picker));
                    if response.changed() {
                        self.fields.end_date = self.end_picker.format(DATE_FORMAT).to_string();
                    }
                });
                ui.end_row();

                ui.label("Min duration (days):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.fields.min_days)
                        .desired_width(FIELD_WIDTH),
                );
                ui.end_row();

                ui.label("Max duration (days):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.fields.max_days)
                        .desired_width(FIELD_WIDTH),
                );
                ui.end_row();

                for (index, airport) in self.fields.departure_airports.iter_mut().enumerate() {
                    ui.label(format!("Departure airport {}:", index + 1));
                    ui.add(egui::TextEdit::singleline(airport).desired_width(FIELD_WIDTH));
                    ui.end_row();
                }
            });

        ui.add_space(6.0);
        ui.checkbox(
            &mut self.fields.return_to_same_airport,
            "Return to the same airport",
        );

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(search_enabled, egui::Button::new("Search"))
                .clicked()
            {
                search_requested = true;
            }
            if !search_enabled {
                ui.spinner();
                ui.label("Searching...");
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Messages").strong());
            if ui.button("Clear").clicked() {
                self.error_text.clear();
            }
        });
        egui::ScrollArea::vertical()
            .max_height(120.0)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(self.error_text.as_str())
                        .monospace()
                        .color(egui::Color32::LIGHT_RED),
                );
            });

        search_requested
    }

    /// Draws the modal duplicate-airport dialog while one is open.
    pub fn show_dialogs(&mut self, ctx: &egui::Context) {
        let Some(message) = self.duplicate_dialog.clone() else {
            return;
        };

        let mut close = false;
        egui::Window::new("Validation Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.duplicate_dialog = None;
        }
    }
}
