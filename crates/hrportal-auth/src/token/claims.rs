//! Claims embedded in the signed session token.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::session::Session;

/// Claims payload of the session cookie token.
///
/// Profile fields and the role flag are embedded at login and re-derived
/// from the token on each request, never re-fetched from the backend
/// mid-session. The wire shape keeps the backend's raw `is_hr` flag; the
/// conversion to [`Role`] happens exactly once, in [`SessionClaims::into_session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject — the backend user id.
    pub sub: i64,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Raw role flag as the backend reported it. Absent means employee.
    #[serde(default)]
    pub is_hr: Option<bool>,
    /// Bearer credential for the backend API.
    pub api_token: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Converts validated claims into a [`Session`].
    ///
    /// This is the single point where the raw `is_hr` flag becomes a
    /// [`Role`] variant.
    pub fn into_session(self) -> Session {
        Session {
            user_id: self.sub,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: Role::from_is_hr(self.is_hr),
            bearer_token: self.api_token,
            expires_at: chrono::DateTime::from_timestamp(self.exp, 0)
                .unwrap_or_else(Utc::now),
        }
    }
}
