//! Wire types owned by the backend API contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hrportal_core::types::{Employee, EmployeeDocument};

/// `POST /auth/login` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    /// Email address.
    pub email: String,
    /// Plaintext password; only ever sent to the backend over this call.
    pub password: String,
}

/// User fields as the backend reports them on login and profile.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendUser {
    /// Backend user id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Raw role flag; may be absent, which means not HR.
    #[serde(default)]
    pub is_hr: Option<bool>,
}

/// `POST /auth/login` success response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer credential for subsequent calls.
    pub access_token: String,
    /// The authenticated user.
    pub user: BackendUser,
}

/// `GET /auth/profile` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Backend user id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Raw role flag.
    #[serde(default)]
    pub is_hr: Option<bool>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Employee record linked to this user, when one exists.
    #[serde(default)]
    pub employee: Option<Employee>,
}

/// Employee + user fields sent on create.
#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Initial password for the new account.
    pub password: String,
    /// Job title.
    pub job_title: String,
    /// Non-negative salary.
    pub salary: Decimal,
}

/// Employee + user fields sent on update. `None` fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeUpdate {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Non-negative salary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
}

/// `{message}` body the backend attaches to errors and delete confirmations.
///
/// The message is a plain string on most endpoints but an array of
/// validation messages on upload, so both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    /// One message or several.
    #[serde(default)]
    pub message: Option<Messages>,
}

/// A single message or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Messages {
    /// Plain string message.
    One(String),
    /// Validation message list; the first entry is shown.
    Many(Vec<String>),
}

impl MessageBody {
    /// The first message, if any.
    pub fn first(&self) -> Option<&str> {
        match &self.message {
            Some(Messages::One(m)) => Some(m.as_str()),
            Some(Messages::Many(ms)) => ms.first().map(String::as_str),
            None => None,
        }
    }
}

/// Response of a document upload: the canonical, server-confirmed document.
pub type UploadedDocument = EmployeeDocument;
