use serde::Serialize;

/// Request body for the scan endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    pub repo_url: String,
}
