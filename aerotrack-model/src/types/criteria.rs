use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The validated, immutable parameters of one scan request.
/// Built once per submission; the validator guarantees the invariants
/// (min_days <= max_days, start <= end, unique non-empty departures).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub min_days: u32,
    pub max_days: u32,
    pub departure_airports: Vec<String>,
    pub destination_airports: Vec<String>,
    pub return_to_same_airport: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let criteria = SearchCriteria {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            min_days: 3,
            max_days: 7,
            departure_airports: vec!["FCO".to_string()],
            destination_airports: vec!["DUB".to_string()],
            return_to_same_airport: true,
        };

        let json = serde_json::to_string(&criteria).unwrap();
        assert!(json.contains("\"startDate\":\"2024-02-01\""));
        assert!(json.contains("\"endDate\":\"2024-02-20\""));
        assert!(json.contains("\"minDays\":3"));
        assert!(json.contains("\"maxDays\":7"));
        assert!(json.contains("\"departureAirports\":[\"FCO\"]"));
        assert!(json.contains("\"destinationAirports\":[\"DUB\"]"));
        assert!(json.contains("\"returnToSameAirport\":true"));
    }
}
