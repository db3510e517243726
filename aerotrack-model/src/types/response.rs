use serde::{Deserialize, Serialize};

use super::Trip;

/// Successful response from the scan service: the ordered list of trips
/// matching the submitted criteria. May be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub trips: Vec<Trip>,
}
