use dioxus::prelude::*;

/// Backend origin used when nothing is configured. Matches the scan
/// service's default development address.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Application configuration
/// In debug builds: loads overrides from a .env file
#[derive(Clone, Debug)]
pub struct Config {
    /// Origin of the scan backend; endpoint paths get appended to this
    pub backend_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            println!("Config: Dev mode activated - loaded .env file");
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    fn from_env() -> Self {
        let backend_url = std::env::var("VIBEGUARD_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        // A trailing slash would double up when the endpoint path is appended
        let backend_url = backend_url.trim_end_matches('/').to_string();

        println!("Config: scan backend at {}", backend_url);

        Self { backend_url }
    }
}

/// Hook returning the app configuration, loaded once per component
pub fn use_config() -> Config {
    use_hook(Config::load)
}
