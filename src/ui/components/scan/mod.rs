mod form;
mod page;
mod results;
mod status;

pub use form::ScanForm;
pub use page::ScanPage;
pub use results::{render_response, ScanResults, NO_RESULTS_PLACEHOLDER};
pub use status::ScanStatus;
