//! Session extractors — pull the session cookie, validate, and inject context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use hrportal_auth::session::Session;
use hrportal_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Reads and validates the session cookie, if present.
///
/// A missing, malformed, expired, or wrongly-signed cookie all collapse to
/// `None`; token introspection failure is never distinguishable from no
/// token at all.
fn session_from_parts(parts: &Parts, state: &AppState) -> Option<Session> {
    let jar = CookieJar::from_headers(&parts.headers);
    let cookie = jar.get(&state.config.session.cookie_name)?;
    state.token_decoder.decode_opt(cookie.value())
}

/// Extracted authenticated session, required.
///
/// Rejects with 401 when no valid session cookie accompanies the request.
/// Used by the JSON action endpoints; page navigation is gated by the
/// access middleware instead, which redirects rather than rejects.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Session);

impl std::ops::Deref for SessionUser {
    type Target = Session;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_from_parts(parts, state)
            .map(SessionUser)
            .ok_or_else(|| ApiError(AppError::authentication("Not authenticated")))
    }
}
