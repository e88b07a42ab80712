//! Role guard helpers for the JSON action endpoints.
//!
//! Page navigation gets silent redirects from the access middleware; API
//! callers need a status code instead.

use hrportal_auth::role::Role;
use hrportal_auth::session::Session;
use hrportal_core::error::AppError;

/// Checks that the caller holds the HR role.
pub fn require_hr(session: &Session) -> Result<(), AppError> {
    if session.role != Role::Hr {
        return Err(AppError::authorization("HR access required"));
    }
    Ok(())
}
