//! The document service seam.
//!
//! The reconciler never talks to the network directly; it goes through this
//! trait so tests can drive it with a fabricated API.

use async_trait::async_trait;
use bytes::Bytes;

use hrportal_core::AppResult;
use hrportal_core::types::{DocumentType, EmployeeDocument};

/// One file heading for `POST /documents/upload`.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Original file name, forwarded as the multipart file name.
    pub file_name: String,
    /// MIME type as declared by the uploader.
    pub content_type: String,
    /// File contents.
    pub bytes: Bytes,
    /// Owning employee.
    pub employee_id: i64,
    /// Catalog id the file is uploaded against.
    pub document_type_id: i64,
}

/// Remote operations of the document service.
///
/// Every call carries the caller's bearer credential explicitly; there is no
/// ambient token lookup anywhere below this trait.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// `GET /document-types` — the shared catalog.
    async fn document_types(&self, bearer: &str) -> AppResult<Vec<DocumentType>>;

    /// `GET /employees/:id/documents` — documents on file for one employee.
    async fn employee_documents(
        &self,
        bearer: &str,
        employee_id: i64,
    ) -> AppResult<Vec<EmployeeDocument>>;

    /// `POST /documents/upload` — multipart upload; returns the
    /// server-confirmed document.
    async fn upload_document(
        &self,
        bearer: &str,
        upload: DocumentUpload,
    ) -> AppResult<EmployeeDocument>;

    /// `DELETE /documents/:id`.
    async fn delete_document(&self, bearer: &str, document_id: i64) -> AppResult<()>;
}
