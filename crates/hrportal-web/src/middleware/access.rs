//! Access-control middleware for page navigation.
//!
//! Runs the route policy before any page handler executes. This is the
//! interception point: a disallowed navigation is answered with a redirect
//! and the protected handler never runs.

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use hrportal_auth::policy::{self, RouteDecision};

use crate::state::AppState;

/// Gates every page request through the route policy.
///
/// Applied to the page sub-router only; JSON action endpoints authenticate
/// through the `SessionUser` extractor and answer with status codes, not
/// redirects.
pub async fn gate_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let session = jar
        .get(&state.config.session.cookie_name)
        .and_then(|c| state.token_decoder.decode_opt(c.value()));

    let path = request.uri().path();
    match policy::decide(session.as_ref(), path) {
        RouteDecision::Allow => next.run(request).await,
        RouteDecision::RedirectTo(target) => {
            tracing::debug!(from = %path, to = %target, "navigation redirected");
            see_other(target)
        }
    }
}

/// 303 See Other to the given path.
fn see_other(target: &str) -> Response {
    (StatusCode::SEE_OTHER, [(header::LOCATION, target.to_string())]).into_response()
}
