use dioxus::prelude::*;

/// Static banner above the page content
#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "site-header",
            h1 {
                class: "site-title",
                "VibeGuard"
            }
            p {
                class: "site-sub",
                "Guarding your automated code against vulnerabilities"
            }
        }
    }
}
