mod results;
mod search_form;

pub use results::WidgetResults;
pub use search_form::WidgetSearchForm;
