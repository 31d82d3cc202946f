use serde::{Deserialize, Serialize};

use crate::model::Period;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Repository search API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API root (default: https://api.github.com).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Personal access token; raises the search rate limit when set.
    #[serde(default)]
    pub token: Option<String>,
    /// Repositories per page, 1..=100 (default: 30).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Request timeout in seconds (default: 15).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Period selected at startup (default: day).
    #[serde(default)]
    pub default_period: Period,
    /// Render every string in upper case.
    #[serde(default)]
    pub uppercase_strings: bool,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    30
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("repo-viewer/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token: None,
            per_page: default_per_page(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            default_period: Period::default(),
            uppercase_strings: false,
        }
    }
}
