use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::scan::models::ScanRequest;

/// Path of the scan endpoint on the backend origin
pub const SCAN_ENDPOINT: &str = "/api/scan/github";

/// Shown when a rejection carries no usable message field
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Shown when the request never reached the backend
pub const CONNECT_FAILED_MESSAGE: &str = "Could not connect to backend";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("scan backend rejected the request with status {status}")]
    Rejected {
        status: StatusCode,
        body: Option<Value>,
    },
}

impl ScanError {
    /// Message shown inline in the UI. Rejections surface the first usable
    /// message field from the response body, falling back to a generic line;
    /// requests that never connected collapse to a fixed message.
    pub fn user_message(&self, detail_fields: &[String]) -> String {
        match self {
            ScanError::Rejected { body, .. } => body
                .as_ref()
                .and_then(|body| rejection_detail(body, detail_fields))
                .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
            ScanError::Request(e) if e.is_connect() => CONNECT_FAILED_MESSAGE.to_string(),
            ScanError::Request(e) => e.to_string(),
        }
    }
}

/// First non-empty string value among the accepted message fields, in order
fn rejection_detail(body: &Value, detail_fields: &[String]) -> Option<String> {
    detail_fields.iter().find_map(|field| {
        body.get(field)
            .and_then(|value| value.as_str())
            .filter(|message| !message.is_empty())
            .map(|message| message.to_string())
    })
}

#[derive(Clone)]
pub struct ScanClient {
    client: Client,
    base_url: String,
}

impl ScanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit one repository URL for scanning. Surrounding whitespace is
    /// stripped before the request goes out.
    pub async fn scan_github(&self, repo_url: &str) -> Result<Value, ScanError> {
        let url = format!("{}{}", self.base_url, SCAN_ENDPOINT);
        let request = ScanRequest {
            repo_url: repo_url.trim().to_string(),
        };

        debug!("POST {} for '{}'", url, request.repo_url);

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let body: Value = response.json().await?;
            Ok(body)
        } else {
            // Rejection bodies are not guaranteed to be JSON, or to exist at all
            let text = response.text().await.unwrap_or_default();
            warn!("✗ Scan backend rejected request ({}): {}", status, text);

            let body = serde_json::from_str(&text).ok();
            Err(ScanError::Rejected { status, body })
        }
    }
}
