pub mod app;
pub mod client;
pub mod pagination;
pub mod submit;
pub mod validation;
mod widgets;

pub use app::{AerotrackApp, SearchConfig};
