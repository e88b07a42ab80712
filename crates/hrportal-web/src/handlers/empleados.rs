//! Employee roster handlers (HR only).
//!
//! Thin pass-through to the backend: validation happens here, authority
//! stays with the backend.

use axum::Json;
use axum::extract::{Path, State};

use hrportal_core::types::Employee;

use crate::dto::request::{CreateEmployeeRequest, UpdateEmployeeRequest, check};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::middleware::rbac::require_hr;
use crate::state::AppState;

/// GET /api/empleados
pub async fn list(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ApiError> {
    require_hr(&session)?;

    let employees = state.backend.list_employees(&session.bearer_token).await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// POST /api/empleados
pub async fn create(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    require_hr(&session)?;
    check(&req)?;

    let employee = state
        .backend
        .create_employee(&session.bearer_token, &req.into_payload())
        .await?;

    tracing::info!(employee_id = employee.id, "employee created");
    Ok(Json(ApiResponse::ok(employee)))
}

/// PATCH /api/empleados/{id}
pub async fn update(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    require_hr(&session)?;
    check(&req)?;

    let employee = state
        .backend
        .update_employee(&session.bearer_token, id, &req.into_payload())
        .await?;

    Ok(Json(ApiResponse::ok(employee)))
}

/// DELETE /api/empleados/{id}
pub async fn delete(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_hr(&session)?;

    state
        .backend
        .delete_employee(&session.bearer_token, id)
        .await?;

    tracing::info!(employee_id = id, "employee deleted");
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Employee deleted".to_string(),
    })))
}
