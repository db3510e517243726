mod types;

pub use types::{format_timestamp, Flight, ScanResponse, SearchCriteria, Trip};
