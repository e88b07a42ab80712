//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use hrportal_core::config::session::SessionConfig;
use hrportal_core::error::AppError;

use super::claims::SessionClaims;
use crate::session::Session;

/// Validates session tokens and turns them into [`Session`] values.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from session configuration.
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Checks signature validity and expiration. Any failure collapses into
    /// an `Authentication` error: a caller presenting a malformed or expired
    /// token is simply unauthenticated, never shown a distinguishable error.
    pub fn decode(&self, token: &str) -> Result<Session, AppError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authentication("Session has expired")
                }
                _ => AppError::authentication("Invalid session token"),
            })?;

        Ok(token_data.claims.into_session())
    }

    /// Like [`decode`](Self::decode), but collapses failures into `None`.
    ///
    /// This is the introspection entry point the access policy uses: a bad
    /// token and no token must be indistinguishable.
    pub fn decode_opt(&self, token: &str) -> Option<Session> {
        self.decode(token).ok()
    }
}
