//! Document handlers — catalog, per-employee slots, upload, delete.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;

use hrportal_auth::role::Role;
use hrportal_auth::session::Session;
use hrportal_backend::api::DocumentApi;
use hrportal_backend::documents::DocumentSet;
use hrportal_core::error::AppError;
use hrportal_core::types::{DocumentType, EmployeeDocument};

use crate::dto::response::{ApiResponse, DeleteDocumentResponse, EmployeeDocumentsResponse};
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::state::AppState;

/// GET /api/document-types — the shared catalog.
pub async fn list_types(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<ApiResponse<Vec<DocumentType>>>, ApiError> {
    let types = state.backend.document_types(&session.bearer_token).await?;
    Ok(Json(ApiResponse::ok(types)))
}

/// GET /api/employees/{id}/documents — reconciled slots for one employee.
pub async fn employee_documents(
    State(state): State<AppState>,
    session: SessionUser,
    Path(employee_id): Path<i64>,
) -> Result<Json<ApiResponse<EmployeeDocumentsResponse>>, ApiError> {
    ensure_owns_employee(&state, &session, employee_id).await?;

    let set = DocumentSet::load(&*state.backend, &session.bearer_token, employee_id).await?;

    Ok(Json(ApiResponse::ok(EmployeeDocumentsResponse {
        slots: set.slots(),
        documents: set.documents().to_vec(),
    })))
}

/// POST /api/documents/upload — multipart: file, document_type_id, employee_id.
pub async fn upload(
    State(state): State<AppState>,
    session: SessionUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<EmployeeDocument>>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Bytes> = None;
    let mut document_type_id: Option<i64> = None;
    let mut employee_id: Option<i64> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "document_type_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                document_type_id = Some(text.parse::<i64>().map_err(|_| {
                    AppError::validation("document_type_id must be a valid number")
                })?);
            }
            "employee_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                employee_id = Some(
                    text.parse::<i64>()
                        .map_err(|_| AppError::validation("employee_id must be a valid number"))?,
                );
            }
            "file" => {
                file_name = field.file_name().map(String::from);
                content_type = field.content_type().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let document_type_id =
        document_type_id.ok_or_else(|| AppError::validation("document_type_id is required"))?;
    let employee_id =
        employee_id.ok_or_else(|| AppError::validation("employee_id is required"))?;
    let file_name = file_name.ok_or_else(|| AppError::validation("file is required"))?;
    let content_type =
        content_type.ok_or_else(|| AppError::validation("file content type is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file data is required"))?;

    ensure_owns_employee(&state, &session, employee_id).await?;

    let mut set = DocumentSet::load(&*state.backend, &session.bearer_token, employee_id).await?;
    let confirmed = set
        .upload(
            &*state.backend,
            &session.bearer_token,
            &state.config.uploads,
            &file_name,
            &content_type,
            data,
            document_type_id,
        )
        .await?;

    tracing::info!(
        employee_id,
        document_type_id,
        document_id = confirmed.id,
        "document uploaded"
    );
    Ok(Json(ApiResponse::ok(confirmed)))
}

/// DELETE /api/documents/{id}
pub async fn delete(
    State(state): State<AppState>,
    session: SessionUser,
    Path(document_id): Path<i64>,
) -> Result<Json<ApiResponse<DeleteDocumentResponse>>, ApiError> {
    let deleted = match session.role {
        // HR may delete any document; the backend checks existence.
        Role::Hr => {
            state
                .backend
                .delete_document(&session.bearer_token, document_id)
                .await?;
            true
        }
        // Employees go through their own document set, which makes
        // deleting an id that is not theirs (or already gone) a no-op.
        Role::Employee => {
            let employee_id = own_employee_id(&state, &session).await?;
            let mut set =
                DocumentSet::load(&*state.backend, &session.bearer_token, employee_id).await?;
            set.delete(&*state.backend, &session.bearer_token, document_id)
                .await?
        }
    };

    Ok(Json(ApiResponse::ok(DeleteDocumentResponse { deleted })))
}

/// Employees may only touch their own documents; HR may touch any.
///
/// The backend stays the authority; this check only spares it requests that
/// can never be authorized.
async fn ensure_owns_employee(
    state: &AppState,
    session: &Session,
    employee_id: i64,
) -> Result<(), AppError> {
    if session.role == Role::Hr {
        return Ok(());
    }
    if own_employee_id(state, session).await? == employee_id {
        return Ok(());
    }
    Err(AppError::authorization(
        "You may only access your own documents",
    ))
}

/// The caller's own employee id, from their backend profile.
async fn own_employee_id(state: &AppState, session: &Session) -> Result<i64, AppError> {
    let profile = state.backend.profile(&session.bearer_token).await?;
    profile
        .employee
        .map(|e| e.id)
        .ok_or_else(|| AppError::not_found("No employee record linked to this account"))
}
