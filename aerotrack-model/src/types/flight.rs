use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// How timestamps are shown to the user.
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// A single directional flight segment as returned by the scan service.
/// Timestamps are kept as the ISO-8601 UTC strings they arrive in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub direction: String,
    pub departure_date_time: String,
    pub arrival_date_time: String,
    pub flight_number: String,
    pub price: f64,
}

impl Flight {
    pub fn formatted_departure(&self) -> String {
        format_timestamp(&self.departure_date_time)
    }

    pub fn formatted_arrival(&self) -> String {
        format_timestamp(&self.arrival_date_time)
    }
}

/// Renders an ISO-8601 UTC timestamp as `dd/MM/yyyy, HH:mm`.
/// A timestamp that does not parse is shown as-is rather than panicking
/// the render loop.
pub fn format_timestamp(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(datetime) => datetime.format(DISPLAY_FORMAT).to_string(),
        Err(_) => iso.to_string(),
    }
}
