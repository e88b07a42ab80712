//! Session token creation.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use hrportal_core::config::session::SessionConfig;
use hrportal_core::error::AppError;

use super::claims::SessionClaims;
use crate::role::Role;

/// Creates signed session tokens with a fixed absolute lifetime.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Absolute session TTL in hours.
    ttl_hours: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.ttl_hours as i64,
        }
    }

    /// Issues a session token for a freshly authenticated user.
    ///
    /// The backend's bearer credential and profile claims are embedded so
    /// that no backend round-trip is needed to re-derive them per request.
    pub fn issue(
        &self,
        user_id: i64,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
        api_token: &str,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(self.ttl_hours);

        let claims = SessionClaims {
            sub: user_id,
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            is_hr: Some(role.is_hr()),
            api_token: api_token.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}
