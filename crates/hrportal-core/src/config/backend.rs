//! External backend API configuration.

use serde::{Deserialize, Serialize};

/// Settings for the remote backend API this gateway wraps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds for all backend calls.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    30
}
