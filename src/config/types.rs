use serde::{Deserialize, Serialize};

use crate::model::RecordStatus;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the vaccine resource (e.g., "http://localhost:8080/vaccines").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Which half of the list is shown on startup: "A" or "I" (default: "A").
    #[serde(default = "default_initial_status")]
    pub initial_status: RecordStatus,
}

fn default_base_url() -> String {
    "http://localhost:8080/vaccines".to_string()
}

fn default_request_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_initial_status() -> RecordStatus {
    RecordStatus::Active
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_status: default_initial_status(),
        }
    }
}
