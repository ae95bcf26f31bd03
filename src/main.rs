use vibeguard::ui;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    dioxus::LaunchBuilder::new()
        .with_cfg(ui::make_config())
        .launch(ui::App);
}
