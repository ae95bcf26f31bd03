mod header;
pub mod scan;

pub use header::SiteHeader;
pub use scan::{ScanForm, ScanPage, ScanResults, ScanStatus};
