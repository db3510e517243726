use aerotrack_model::{Flight, Trip};

use crate::pagination::Paginator;

/// One results window per successful scan. Owns its trip list for the
/// window's lifetime; closing the window discards it.
pub struct WidgetResults {
    title: String,
    trips: Vec<Trip>,
    paginator: Paginator,
}

impl WidgetResults {
    pub fn new(title: String, trips: Vec<Trip>) -> Self {
        let paginator = Paginator::new(trips.len());
        Self {
            title,
            trips,
            paginator,
        }
    }

    /// Returns `false` once the user closes the window.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        egui::Window::new(self.title.as_str())
            .open(&mut open)
            .default_size([640.0, 560.0])
            .show(ctx, |ui| {
                self.page_ui(ui);
                ui.separator();
                self.navigation_ui(ui);
            });
        open
    }

    fn page_ui(&mut self, ui: &mut egui::Ui) {
        let (start, end) = self.paginator.page_bounds();

        egui::ScrollArea::vertical()
            .max_height(460.0)
            .show(ui, |ui| {
                if self.trips.is_empty() {
                    ui.label("No trips found for this search.");
                    return;
                }

                for (offset, trip) in self.trips[start..end].iter().enumerate() {
                    trip_panel(ui, trip, start + offset + 1);
                    ui.add_space(10.0);
                }
            });
    }

    fn navigation_ui(&mut self, ui: &mut egui::Ui) {
        let at_first = self.paginator.at_first_page();
        let at_last = self.paginator.at_last_page();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!at_first, egui::Button::new("First"))
                .clicked()
            {
                self.paginator.jump_to_first();
            }
            if ui
                .add_enabled(!at_first, egui::Button::new("Previous"))
                .clicked()
            {
                self.paginator.navigate(-1);
            }

            ui.label(format!(
                "{} / {}",
                self.paginator.current_page() + 1,
                self.paginator.total_pages()
            ));

            if ui
                .add_enabled(!at_last, egui::Button::new("Next"))
                .clicked()
            {
                self.paginator.navigate(1);
            }
            if ui
                .add_enabled(!at_last, egui::Button::new("Last"))
                .clicked()
            {
                self.paginator.jump_to_last();
            }
        });
    }
}

fn trip_panel(ui: &mut egui::Ui, trip: &Trip, trip_number: usize) {
    ui.group(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "Trip {} - Total Price: €{:.2}",
                trip_number, trip.total_price
            ))
            .strong()
            .size(16.0),
        );
        ui.add_space(6.0);

        ui.columns(2, |columns| {
            flight_section(&mut columns[0], "Outbound Flights", &trip.outbound_flights);
            flight_section(&mut columns[1], "Return Flights", &trip.return_flights);
        });
    });
}

fn flight_section(ui: &mut egui::Ui, title: &str, flights: &[Flight]) {
    ui.label(egui::RichText::new(title).strong().size(14.0));
    for flight in flights {
        ui.label(format!("Flight: {}", flight.direction));
        ui.label(format!("Departure: {}", flight.formatted_departure()));
        ui.label(format!("Arrival: {}", flight.formatted_arrival()));
        ui.label(format!("Flight Number: {}", flight.flight_number));
        ui.label(format!("Price: ${:.2}", flight.price));
        ui.add_space(4.0);
    }
}
