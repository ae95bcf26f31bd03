use crate::ui::scan_context::ScanContext;
use dioxus::prelude::*;

/// Displays the error state for the most recent scan attempt
#[component]
pub fn ScanStatus() -> Element {
    let scan_ctx = use_context::<ScanContext>();

    rsx! {
        if let Some(error) = scan_ctx.error_message.read().as_ref() {
            div {
                class: "error-line",
                "{error}"
            }
        }
    }
}
