pub mod app;
pub mod components;
pub mod scan_context;

pub use app::*;
pub use components::*;
pub use scan_context::{ScanContext, ScanContextProvider, ScanFormOptions};
