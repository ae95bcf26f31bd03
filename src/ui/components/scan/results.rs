use crate::ui::scan_context::ScanContext;
use dioxus::prelude::*;
use serde_json::Value;

/// Shown in the output block until a scan has produced a result
pub const NO_RESULTS_PLACEHOLDER: &str = "No results yet — enter a repo and press Scan.";

/// Text for the output block: the backend response pretty-printed, or the
/// placeholder when nothing has come back yet
pub fn render_response(response: Option<&Value>) -> String {
    match response {
        Some(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        None => NO_RESULTS_PLACEHOLDER.to_string(),
    }
}

/// Raw scan output block
#[component]
pub fn ScanResults() -> Element {
    let scan_ctx = use_context::<ScanContext>();
    let output = render_response(scan_ctx.scan_result.read().as_ref());

    rsx! {
        pre {
            class: "scan-output",
            "{output}"
        }
    }
}
