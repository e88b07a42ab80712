//! Response DTOs.

use serde::{Deserialize, Serialize};

use hrportal_auth::session::Session;
use hrportal_core::types::{DocumentSlot, Employee, EmployeeDocument};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// The authenticated user as exposed to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUserResponse {
    /// Backend user id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role name: `"hr"` or `"employee"`.
    pub role: String,
}

impl From<&Session> for SessionUserResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id,
            email: session.email.clone(),
            first_name: session.first_name.clone(),
            last_name: session.last_name.clone(),
            role: session.role.to_string(),
        }
    }
}

/// Login response: where to go next and who logged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    /// Landing path for the caller's role.
    pub redirect_to: String,
    /// The authenticated user.
    pub user: SessionUserResponse,
}

/// Profile page view-model: the caller plus their reconciled documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The authenticated user.
    pub user: SessionUserResponse,
    /// Linked employee record, when one exists.
    pub employee: Option<Employee>,
    /// One slot per catalog entry, catalog order.
    pub slots: Vec<DocumentSlot>,
}

/// Documents view for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDocumentsResponse {
    /// Documents on file.
    pub documents: Vec<EmployeeDocument>,
    /// One slot per catalog entry, catalog order.
    pub slots: Vec<DocumentSlot>,
}

/// Outcome of a document delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    /// `false` when the id was already gone (idempotent no-op).
    pub deleted: bool,
}
