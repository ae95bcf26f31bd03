use crate::config::use_config;
use crate::scan::ScanClient;
use dioxus::prelude::*;
use serde_json::Value;
use std::rc::Rc;
use tracing::{info, warn};

/// Behavioral switches for the scan form, so differently configured
/// placements can share the one component.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanFormOptions {
    /// Clear the URL field after a successful scan
    pub clear_input_on_success: bool,
    /// Return focus to the URL field after a successful scan
    pub refocus_on_success: bool,
    /// Message fields accepted from a rejection body, in preference order
    pub error_detail_fields: Vec<String>,
}

impl Default for ScanFormOptions {
    fn default() -> Self {
        Self {
            clear_input_on_success: true,
            refocus_on_success: true,
            error_detail_fields: vec!["detail".to_string(), "error".to_string()],
        }
    }
}

/// True when a submission is allowed: the field holds something besides
/// whitespace and no scan is already in flight.
pub fn can_submit(repo_url: &str, scan_in_flight: bool) -> bool {
    !scan_in_flight && !repo_url.trim().is_empty()
}

/// Run one scan attempt and map the outcome to what the UI shows
pub async fn run_scan(
    client: &ScanClient,
    repo_url: &str,
    detail_fields: &[String],
) -> Result<Value, String> {
    info!("🛡️ Submitting scan request for '{}'", repo_url);

    match client.scan_github(repo_url).await {
        Ok(body) => {
            info!("✓ Scan backend accepted '{}'", repo_url);
            Ok(body)
        }
        Err(e) => {
            warn!("✗ Scan failed for '{}': {}", repo_url, e);
            Err(e.user_message(detail_fields))
        }
    }
}

#[derive(Clone)]
pub struct ScanContext {
    pub repo_url: Signal<String>,
    pub scan_result: Signal<Option<Value>>,
    pub error_message: Signal<Option<String>>,
    pub is_scanning: Signal<bool>,
    pub input_element: Signal<Option<Rc<MountedData>>>,
    pub options: ScanFormOptions,
    client: ScanClient,
}

impl ScanContext {
    pub fn new(client: ScanClient, options: ScanFormOptions) -> Self {
        Self {
            repo_url: Signal::new(String::new()),
            scan_result: Signal::new(None),
            error_message: Signal::new(None),
            is_scanning: Signal::new(false),
            input_element: Signal::new(None),
            options,
            client,
        }
    }

    /// Remember the mounted URL field so it can be refocused later
    pub fn register_input(&self, element: Rc<MountedData>) {
        let mut input_element = self.input_element;
        input_element.set(Some(element));
    }

    /// Move keyboard focus to the URL field, if it has mounted
    pub fn focus_input(&self) {
        let element = self.input_element.read().as_ref().cloned();
        if let Some(element) = element {
            spawn(async move {
                let _ = element.set_focus(true).await;
            });
        }
    }

    /// Enter the loading state for the typed URL: flips the loading flag and
    /// clears both outcome signals. Returns the trimmed URL to submit, or
    /// `None` (leaving all state untouched) when submission is not allowed.
    pub fn begin_scan(&self) -> Option<String> {
        let typed = self.repo_url.read().clone();
        if !can_submit(&typed, *self.is_scanning.read()) {
            return None;
        }

        // Copy signals to avoid borrowing conflicts (Signal implements Copy)
        let mut scan_result = self.scan_result;
        let mut error_message = self.error_message;
        let mut is_scanning = self.is_scanning;

        is_scanning.set(true);
        error_message.set(None);
        scan_result.set(None);

        Some(typed.trim().to_string())
    }

    /// Run the attempt for a URL returned by [`Self::begin_scan`] and apply
    /// its outcome: exactly one outcome signal is set, the input is cleared
    /// and refocused per the options on success, and the loading flag drops
    /// whichever way the attempt went.
    pub async fn settle_scan(&self, repo_url: String) {
        let mut repo_url_field = self.repo_url;
        let mut scan_result = self.scan_result;
        let mut error_message = self.error_message;
        let mut is_scanning = self.is_scanning;
        let input_element = self.input_element;

        match run_scan(&self.client, &repo_url, &self.options.error_detail_fields).await {
            Ok(body) => {
                scan_result.set(Some(body));

                if self.options.clear_input_on_success {
                    repo_url_field.set(String::new());
                }
                if self.options.refocus_on_success {
                    let element = input_element.read().as_ref().cloned();
                    if let Some(element) = element {
                        let _ = element.set_focus(true).await;
                    }
                }
            }
            Err(message) => {
                error_message.set(Some(message));
            }
        }

        is_scanning.set(false);
    }

    /// Submit the current URL in the background
    pub fn start_scan(&self) {
        if let Some(repo_url) = self.begin_scan() {
            let context = self.clone();
            spawn(async move {
                context.settle_scan(repo_url).await;
            });
        }
    }
}

/// Provider component to make scan state available throughout the app. The
/// context is built inside the provider closure so its signals are created
/// once and owned by this scope.
#[component]
pub fn ScanContextProvider(options: Option<ScanFormOptions>, children: Element) -> Element {
    let config = use_config();

    use_context_provider(move || {
        ScanContext::new(
            ScanClient::new(&config.backend_url),
            options.unwrap_or_default(),
        )
    });

    rsx! {
        {children}
    }
}
