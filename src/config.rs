//! Application Configuration
//!
//! Build-time settings baked into the WASM bundle.
//! Override with `TASKFLOW_API_URL` / `TASKFLOW_LOG_LEVEL` when running `trunk build`.

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL every API path is appended to (no trailing slash)
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            toast_duration_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl AppConfig {
    /// Configuration from the compile-time environment
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TASKFLOW_API_URL"), option_env!("TASKFLOW_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.com/v1/"), None);
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(AppConfig::from_values(None, Some("debug")).log_level, LevelFilter::Debug);
        // Garbage falls back to the default
        assert_eq!(AppConfig::from_values(None, Some("loud")).log_level, LevelFilter::Info);
    }
}
