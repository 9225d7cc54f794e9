use std::env;
use std::path::PathBuf;

use super::paths::APP_DIR_NAME;

/// Environment variables checked for the assistant API key, in priority order
pub const API_KEY_VARS: [&str; 2] = ["PORTFOLIO_GEMINI_API_KEY", "GEMINI_API_KEY"];
pub const MODEL_VAR: &str = "PORTFOLIO_GEMINI_MODEL";
pub const ENDPOINT_VAR: &str = "PORTFOLIO_GEMINI_ENDPOINT";
pub const LOG_FILTER_VAR: &str = "PORTFOLIO_LOG";
pub const LOG_DIR_VAR: &str = "PORTFOLIO_LOG_DIR";

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for the remote assistant, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// `None` is a valid configuration: the assistant is reported as unavailable
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map instead of the process env)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank =
            |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = API_KEY_VARS.iter().find_map(|name| non_blank(*name));
        let model = non_blank(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let endpoint = non_blank(ENDPOINT_VAR)
            .map(|e| e.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self { api_key, model, endpoint }
    }
}

/// Log filter directive (`PORTFOLIO_LOG`), defaulting to `info`
pub fn get_log_filter() -> String {
    env::var(LOG_FILTER_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Directory for log files: `PORTFOLIO_LOG_DIR`, else the platform data directory
pub fn get_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(LOG_DIR_VAR)
        && !dir.trim().is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join("logs"))
}
