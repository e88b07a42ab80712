//! Page view-model handlers.
//!
//! These handlers sit behind the access middleware: by the time one runs,
//! the route policy has already allowed the navigation for this caller.

use axum::Json;
use axum::extract::State;

use hrportal_auth::role::Role;
use hrportal_backend::api::DocumentApi;
use hrportal_backend::compute_slots;

use crate::dto::response::{ApiResponse, ProfileResponse, SessionUserResponse};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET / — the public entry page.
///
/// Authenticated callers never reach this handler; the middleware has
/// already sent them to their landing path.
pub async fn entry() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "page": "login" }))
}

/// GET /empleados — the HR roster page.
pub async fn roster(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let employees = state.backend.list_employees(&session.bearer_token).await?;

    Ok(Json(serde_json::json!({
        "page": "empleados",
        "employees": employees,
    })))
}

/// GET /mi-perfil (page) and GET /api/profile — the caller's profile with
/// reconciled document slots.
pub async fn profile(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let profile = state.backend.profile(&session.bearer_token).await?;

    let slots = match &profile.employee {
        Some(employee) => {
            let catalog = state.backend.document_types(&session.bearer_token).await?;
            compute_slots(&catalog, &employee.documents)
        }
        None => Vec::new(),
    };

    let response = ProfileResponse {
        user: SessionUserResponse {
            id: profile.id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            role: Role::from_is_hr(profile.is_hr).to_string(),
        },
        employee: profile.employee,
        slots,
    };

    Ok(Json(ApiResponse::ok(response)))
}
