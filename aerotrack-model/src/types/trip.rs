use serde::{Deserialize, Serialize};

use super::Flight;

/// A priced pairing of one outbound flight group and one return flight
/// group. Both groups are non-empty in well-formed responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub total_price: f64,
    pub outbound_flights: Vec<Flight>,
    pub return_flights: Vec<Flight>,
}
