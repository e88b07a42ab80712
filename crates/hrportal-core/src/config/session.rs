//! Session cookie and token configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
///
/// The gateway wraps the backend's bearer token in its own signed session
/// token with an absolute lifetime. There is no idle timeout and no refresh:
/// when the session expires the user logs in again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Absolute session lifetime in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie is marked `Secure` (HTTPS only).
    #[serde(default)]
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            ttl_hours: default_ttl_hours(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_ttl_hours() -> u64 {
    24
}

fn default_cookie_name() -> String {
    "hrportal_session".to_string()
}
