use super::{form::ScanForm, results::ScanResults, status::ScanStatus};
use crate::ui::components::SiteHeader;
use dioxus::prelude::*;

/// Main scan page that lays out the submission and results cards
#[component]
pub fn ScanPage() -> Element {
    rsx! {
        SiteHeader {}
        main {
            class: "container",
            ScanForm {}
            aside {
                class: "card results-card",
                h2 {
                    class: "results-title",
                    "Flagged Messages"
                }
                p {
                    class: "small-muted",
                    "Results are redacted and filtered for high-confidence matches."
                }
                ScanStatus {}
                ScanResults {}
            }
        }
    }
}
