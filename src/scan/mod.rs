//! Scan backend client
//!
//! Submits GitHub repository URLs to the external scanning service and
//! classifies its responses. The result payload is opaque JSON; nothing
//! here interprets it beyond parsing.

pub mod client;
pub mod models;

pub use client::{ScanClient, ScanError, CONNECT_FAILED_MESSAGE, REQUEST_FAILED_MESSAGE};
pub use models::ScanRequest;
