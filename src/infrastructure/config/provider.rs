//! Statistics provider connection settings.

use serde::Deserialize;

/// HTTP settings for the statistics provider.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    /// REST API base URL.
    pub api_url: String,
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: "https://statsapi.mlb.com/api/v1".into(),
            timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
        }
    }
}
