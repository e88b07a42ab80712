//! HTTP client for the external HR backend API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use hrportal_core::config::backend::BackendConfig;
use hrportal_core::error::AppError;
use hrportal_core::types::{DocumentType, Employee, EmployeeDocument};
use hrportal_core::AppResult;

use crate::api::{DocumentApi, DocumentUpload};
use crate::dto::{
    EmployeeUpdate, LoginPayload, LoginResponse, MessageBody, NewEmployee, UserProfile,
};

/// Client for every backend endpoint the portal uses.
///
/// Stateless: the caller's bearer credential is an argument on each
/// authenticated call, never stored on the client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client from backend configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a backend response to a typed value or an [`AppError`].
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::remote_api(format!("Malformed backend response: {e}")))
    }

    /// Maps a non-2xx backend response to an [`AppError`].
    ///
    /// Error bodies carry an optional `{message}`; when present its first
    /// message becomes the user-visible error text.
    async fn error_from_response(response: reqwest::Response) -> AppError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageBody>(&text)
            .ok()
            .and_then(|b| b.first().map(str::to_string));

        tracing::warn!(status = %status, message = ?message, "backend error response");

        match status {
            StatusCode::UNAUTHORIZED => {
                AppError::authentication(message.unwrap_or_else(|| "Unauthorized".into()))
            }
            StatusCode::FORBIDDEN => {
                AppError::authorization(message.unwrap_or_else(|| "Forbidden".into()))
            }
            StatusCode::NOT_FOUND => {
                AppError::not_found(message.unwrap_or_else(|| "Not found".into()))
            }
            _ => AppError::remote_api(
                message.unwrap_or_else(|| format!("Backend returned {status}")),
            ),
        }
    }

    fn transport_error(e: reqwest::Error) -> AppError {
        AppError::with_source(
            hrportal_core::error::ErrorKind::Network,
            "Backend unreachable",
            e,
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, bearer: &str, path: &str) -> AppResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(Self::transport_error)?;
        self.handle_response(response).await
    }

    // ── Auth ─────────────────────────────────────────────────

    /// `POST /auth/login` — exchange credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let payload = LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&payload)
            .send()
            .await
            .map_err(Self::transport_error)?;
        self.handle_response(response).await
    }

    /// `GET /auth/profile` — the caller's own profile with employee record.
    pub async fn profile(&self, bearer: &str) -> AppResult<UserProfile> {
        self.get_json(bearer, "/auth/profile").await
    }

    // ── Employee roster (HR) ─────────────────────────────────

    /// `GET /empleados` — the full roster.
    pub async fn list_employees(&self, bearer: &str) -> AppResult<Vec<Employee>> {
        self.get_json(bearer, "/empleados").await
    }

    /// `POST /empleados` — create an employee with their user account.
    pub async fn create_employee(
        &self,
        bearer: &str,
        employee: &NewEmployee,
    ) -> AppResult<Employee> {
        let response = self
            .client
            .post(self.url("/empleados"))
            .bearer_auth(bearer)
            .json(employee)
            .send()
            .await
            .map_err(Self::transport_error)?;
        self.handle_response(response).await
    }

    /// `PATCH /empleados/:id` — partial update.
    pub async fn update_employee(
        &self,
        bearer: &str,
        id: i64,
        update: &EmployeeUpdate,
    ) -> AppResult<Employee> {
        let response = self
            .client
            .patch(self.url(&format!("/empleados/{id}")))
            .bearer_auth(bearer)
            .json(update)
            .send()
            .await
            .map_err(Self::transport_error)?;
        self.handle_response(response).await
    }

    /// `DELETE /empleados/:id`.
    pub async fn delete_employee(&self, bearer: &str, id: i64) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/empleados/{id}")))
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(Self::transport_error)?;
        // Body is a `{message}` confirmation; only the status matters here.
        let _: MessageBody = self.handle_response(response).await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentApi for BackendClient {
    async fn document_types(&self, bearer: &str) -> AppResult<Vec<DocumentType>> {
        self.get_json(bearer, "/document-types").await
    }

    async fn employee_documents(
        &self,
        bearer: &str,
        employee_id: i64,
    ) -> AppResult<Vec<EmployeeDocument>> {
        self.get_json(bearer, &format!("/employees/{employee_id}/documents"))
            .await
    }

    async fn upload_document(
        &self,
        bearer: &str,
        upload: DocumentUpload,
    ) -> AppResult<EmployeeDocument> {
        let part = reqwest::multipart::Part::stream(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| AppError::validation(format!("Invalid content type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("document_type_id", upload.document_type_id.to_string())
            .text("employee_id", upload.employee_id.to_string());

        let response = self
            .client
            .post(self.url("/documents/upload"))
            .bearer_auth(bearer)
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport_error)?;
        self.handle_response(response).await
    }

    async fn delete_document(&self, bearer: &str, document_id: i64) -> AppResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/documents/{document_id}")))
            .bearer_auth(bearer)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::error_from_response(response).await)
    }
}
