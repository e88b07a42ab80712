//! The authenticated caller for the lifetime of one browser session.

use chrono::{DateTime, Utc};

use crate::role::Role;

/// An authenticated caller, assembled from validated session claims.
///
/// A `Session` only exists after the token signature and expiry have been
/// checked; holders may treat it as proof of authentication. The bearer
/// token is the credential presented to the backend on every call made on
/// this caller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Backend user id.
    pub user_id: i64,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Caller role, converted from the backend's `is_hr` flag at decode.
    pub role: Role,
    /// Opaque bearer credential for the backend API.
    pub bearer_token: String,
    /// Absolute expiry of this session.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Full display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
