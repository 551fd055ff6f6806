//! App Configuration
//!
//! Values are baked in at compile time; the wasm bundle has no runtime environment.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const HEALTHY_MESSAGE: &str = "Everything is working fine";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// `GET /health` message that marks the backend as usable
    pub healthy_message: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AppConfig {
    /// Reads `TODO_API_URL` and `TODO_LOG_LEVEL` as set when the bundle was built
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        AppConfig {
            api_base_url,
            healthy_message: HEALTHY_MESSAGE.to_string(),
            log_level,
        }
    }
}
