use aerotrack_model::{ScanResponse, SearchCriteria};
use search_client::{AerotrackClient, ClientError};

/// Boundary to the trip-scan service. The app only depends on this trait,
/// so tests can stand in a mock for the TCP client.
pub trait SearchProvider: Send + 'static {
    fn search(&mut self, criteria: &SearchCriteria) -> Result<ScanResponse, ClientError>;
}

impl SearchProvider for AerotrackClient {
    fn search(&mut self, criteria: &SearchCriteria) -> Result<ScanResponse, ClientError> {
        AerotrackClient::search(self, criteria)
    }
}
