use crate::ui::scan_context::{can_submit, ScanContext};
use dioxus::prelude::*;

/// Scan input form with URL field and submit button
#[component]
pub fn ScanForm() -> Element {
    let scan_ctx = use_context::<ScanContext>();
    let mut repo_url = scan_ctx.repo_url;
    let is_scanning = scan_ctx.is_scanning;

    rsx! {
        section {
            class: "card scan-card",
            label {
                class: "field-label",
                r#for: "repo-url",
                "Enter GitHub repository URL"
            }
            div {
                class: "input-row",
                input {
                    id: "repo-url",
                    class: "url-input",
                    r#type: "url",
                    placeholder: "https://github.com/owner/repo",
                    aria_label: "GitHub repository URL",
                    value: "{scan_ctx.repo_url}",
                    onmounted: {
                        let scan_ctx = scan_ctx.clone();
                        move |event| {
                            scan_ctx.register_input(event.data());
                            scan_ctx.focus_input();
                        }
                    },
                    oninput: move |event: FormEvent| {
                        repo_url.set(event.value());
                    },
                    onkeydown: {
                        let scan_ctx = scan_ctx.clone();

                        move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                scan_ctx.start_scan();
                            }
                        }
                    }
                }
                button {
                    class: "button-primary",
                    disabled: !can_submit(&repo_url.read(), *is_scanning.read()),
                    onclick: {
                        let scan_ctx = scan_ctx.clone();
                        move |_| {
                            scan_ctx.start_scan();
                        }
                    },
                    if *is_scanning.read() {
                        "Scanning…"
                    } else {
                        "Scan"
                    }
                }
            }
            p {
                class: "small-muted",
                "Public GitHub repos only — no auth required for demo"
            }
        }
    }
}
