use std::collections::HashSet;
use std::fmt;

use aerotrack_model::SearchCriteria;
use chrono::{NaiveDate, Utc};

/// Input format for the date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Destination used when the search configuration does not override it.
pub const DEFAULT_DESTINATION: &str = "DUB";

/// Source of "today" for the date checks, injected so validation stays
/// deterministic under test.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingFields,
    /// Carries the offending code; shown in the modal dialog channel.
    DuplicateAirport(String),
    BadFormat,
    StartBeforeToday,
    EndBeforeStart,
    MinExceedsMax,
    /// Carries the max duration the date range fails to cover.
    RangeTooShort(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Please fill in all fields."),
            ValidationError::DuplicateAirport(code) => {
                write!(f, "Duplicate departure airport: {}", code)
            }
            ValidationError::BadFormat => write!(f, "Invalid date or duration format."),
            ValidationError::StartBeforeToday => {
                write!(f, "Start date must be equal or after today's date.")
            }
            ValidationError::EndBeforeStart => {
                write!(f, "End date must be equal or after start date.")
            }
            ValidationError::MinExceedsMax => {
                write!(f, "Min duration must be less than or equal to max duration.")
            }
            ValidationError::RangeTooShort(max_days) => {
                write!(
                    f,
                    "End date must be at least {} days after start date.",
                    max_days
                )
            }
        }
    }
}

/// Raw values as typed into the form, one slot per departure field.
#[derive(Debug, Default, Clone)]
pub struct FlightInfoFields {
    pub start_date: String,
    pub end_date: String,
    pub min_days: String,
    pub max_days: String,
    pub departure_airports: Vec<String>,
    pub return_to_same_airport: bool,
}

/// Runs the form checks in order and builds the request; the first failing
/// check wins and nothing is sent. Empty departure fields are skipped, the
/// rest are trimmed. A duplicate departure code aborts validation
/// immediately, so the dialog never stacks on top of later errors.
pub fn validate(
    fields: &FlightInfoFields,
    clock: &impl Clock,
    destination_airports: &[String],
) -> Result<SearchCriteria, ValidationError> {
    let departures: Vec<String> = fields
        .departure_airports
        .iter()
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect();

    if fields.start_date.trim().is_empty()
        || fields.end_date.trim().is_empty()
        || fields.min_days.trim().is_empty()
        || fields.max_days.trim().is_empty()
        || departures.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    let mut unique_departures = HashSet::new();
    for code in &departures {
        if !unique_departures.insert(code.as_str()) {
            return Err(ValidationError::DuplicateAirport(code.clone()));
        }
    }

    let start_date = parse_date(&fields.start_date)?;
    let end_date = parse_date(&fields.end_date)?;
    let min_days = parse_days(&fields.min_days)?;
    let max_days = parse_days(&fields.max_days)?;

    if start_date < clock.today() {
        return Err(ValidationError::StartBeforeToday);
    }

    if end_date < start_date {
        return Err(ValidationError::EndBeforeStart);
    }

    if min_days > max_days {
        return Err(ValidationError::MinExceedsMax);
    }

    let range_days = end_date.signed_duration_since(start_date).num_days();
    if range_days < i64::from(max_days) {
        return Err(ValidationError::RangeTooShort(max_days));
    }

    Ok(SearchCriteria {
        start_date,
        end_date,
        min_days,
        max_days,
        departure_airports: departures,
        destination_airports: destination_airports.to_vec(),
        return_to_same_airport: fields.return_to_same_airport,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ValidationError::BadFormat)
}

fn parse_days(raw: &str) -> Result<u32, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::BadFormat)
}
