//! Auth handlers — login and logout.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use hrportal_auth::role::Role;

use crate::dto::request::{LoginRequest, check};
use crate::dto::response::{ApiResponse, LoginResult, MessageResponse, SessionUserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/login
///
/// Exchanges credentials against the backend, wraps the returned bearer
/// token in a signed session cookie, and tells the client where to land.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResult>>), ApiError> {
    check(&req)?;

    let login = state.backend.login(&req.email, &req.password).await?;
    let role = Role::from_is_hr(login.user.is_hr);

    let token = state.token_encoder.issue(
        login.user.id,
        &login.user.email,
        &login.user.first_name,
        &login.user.last_name,
        role,
        &login.access_token,
    )?;

    let cookie = Cookie::build((state.config.session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session.cookie_secure)
        .build();

    tracing::info!(user_id = login.user.id, role = %role, "login succeeded");

    let result = LoginResult {
        redirect_to: role.home_path().to_string(),
        user: SessionUserResponse {
            id: login.user.id,
            email: login.user.email,
            first_name: login.user.first_name,
            last_name: login.user.last_name,
            role: role.to_string(),
        },
    };

    Ok((jar.add(cookie), Json(ApiResponse::ok(result))))
}

/// POST /auth/logout
///
/// Destroys the session by clearing the cookie. The backend bearer token is
/// simply dropped; the backend owns its own expiry.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let removal = Cookie::build((state.config.session.cookie_name.clone(), ""))
        .path("/")
        .build();

    (
        jar.remove(removal),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}
