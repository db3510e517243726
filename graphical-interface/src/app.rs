use std::sync::{Arc, Mutex};
use std::time::Duration;

use logger::Logger;
use search_client::ClientError;

use crate::client::SearchProvider;
use crate::submit::{SearchTask, TaskState};
use crate::validation::{self, Clock, SystemClock, ValidationError, DEFAULT_DESTINATION};
use crate::widgets::{WidgetResults, WidgetSearchForm};

/// Destination override for built requests; defaults to the fixed "DUB"
/// destination the scan service was set up for.
pub struct SearchConfig {
    pub destination_airports: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            destination_airports: vec![DEFAULT_DESTINATION.to_string()],
        }
    }
}

/// The flight scanner application: one input form, at most one in-flight
/// submission, and a results window per completed scan.
pub struct AerotrackApp<P: SearchProvider> {
    provider: Arc<Mutex<P>>,
    config: SearchConfig,
    clock: SystemClock,
    form: WidgetSearchForm,
    pending: Option<SearchTask>,
    results_windows: Vec<WidgetResults>,
    scans_completed: usize,
    logger: Logger,
}

impl<P: SearchProvider> AerotrackApp<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, SearchConfig::default())
    }

    pub fn with_config(provider: P, config: SearchConfig) -> Self {
        let clock = SystemClock;
        let form = WidgetSearchForm::new(clock.today());

        Self {
            provider: Arc::new(Mutex::new(provider)),
            config,
            clock,
            form,
            pending: None,
            results_windows: Vec::new(),
            scans_completed: 0,
            logger: Logger::to_console(),
        }
    }

    fn submit(&mut self) {
        let result = validation::validate(
            &self.form.fields,
            &self.clock,
            &self.config.destination_airports,
        );

        match result {
            Ok(criteria) => {
                self.logger.info(&format!(
                    "submitting scan request: {} -> {}, {} departure airport(s)",
                    criteria.start_date,
                    criteria.end_date,
                    criteria.departure_airports.len()
                ));
                self.pending = Some(SearchTask::spawn(self.provider.clone(), criteria));
            }
            Err(err @ ValidationError::DuplicateAirport(_)) => {
                self.logger.warn(&format!("rejected form input: {}", err));
                self.form.open_duplicate_dialog(&err.to_string());
            }
            Err(err) => {
                self.logger.warn(&format!("rejected form input: {}", err));
                self.form.append_error(&err.to_string());
            }
        }
    }

    fn poll_pending(&mut self) {
        let Some(task) = &self.pending else {
            return;
        };

        match task.poll() {
            TaskState::Pending => {}
            TaskState::Succeeded(response) => {
                self.pending = None;
                self.scans_completed += 1;
                self.logger.info(&format!(
                    "scan finished with {} trip(s)",
                    response.trips.len()
                ));

                let title = format!("Destination Results {}", self.scans_completed);
                self.results_windows
                    .push(WidgetResults::new(title, response.trips));
            }
            TaskState::Failed(ClientError::EmptyResponse) => {
                self.pending = None;
                self.logger.error("scan returned no response");
                self.form
                    .append_error("Failed to get valid response from API.");
            }
            TaskState::Failed(err) => {
                self.pending = None;
                self.logger.error(&format!("scan failed: {}", err));
                self.form
                    .append_error("An exception occurred during API call.");
            }
        }
    }
}

impl<P: SearchProvider> eframe::App for AerotrackApp<P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        if self.pending.is_some() {
            // Keep polling while the worker runs, even without input events.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let search_requested = self.form.ui(ui, self.pending.is_none());
            if search_requested {
                self.submit();
            }
        });

        self.form.show_dialogs(ctx);
        self.results_windows.retain_mut(|window| window.show(ctx));
    }
}
