mod criteria;
pub use criteria::SearchCriteria;

mod flight;
pub use flight::{format_timestamp, Flight};

mod trip;
pub use trip::Trip;

mod response;
pub use response::ScanResponse;
