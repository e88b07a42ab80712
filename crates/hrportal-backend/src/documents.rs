//! The per-employee document set.
//!
//! Holds the local copy of one employee's document list and mediates the
//! two remote operations that change it. Local state mutates only after the
//! backend confirms: a failed upload or delete leaves the list exactly as it
//! was, so a slot can never show a document the server does not have.

use bytes::Bytes;

use hrportal_core::config::uploads::UploadsConfig;
use hrportal_core::error::AppError;
use hrportal_core::types::{DocumentSlot, DocumentType, EmployeeDocument};
use hrportal_core::AppResult;

use crate::api::{DocumentApi, DocumentUpload};
use crate::slots::compute_slots;

/// One employee's documents reconciled against the shared catalog.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    employee_id: i64,
    catalog: Vec<DocumentType>,
    documents: Vec<EmployeeDocument>,
}

impl DocumentSet {
    /// Builds a set from already-fetched catalog and documents.
    pub fn new(
        employee_id: i64,
        catalog: Vec<DocumentType>,
        documents: Vec<EmployeeDocument>,
    ) -> Self {
        Self {
            employee_id,
            catalog,
            documents,
        }
    }

    /// Fetches the catalog and the employee's documents from the backend.
    pub async fn load(
        api: &dyn DocumentApi,
        bearer: &str,
        employee_id: i64,
    ) -> AppResult<Self> {
        let catalog = api.document_types(bearer).await?;
        let documents = api.employee_documents(bearer, employee_id).await?;
        Ok(Self::new(employee_id, catalog, documents))
    }

    /// The employee this set belongs to.
    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// The current document list.
    pub fn documents(&self) -> &[EmployeeDocument] {
        &self.documents
    }

    /// One display-ready slot per catalog entry, recomputed on demand.
    pub fn slots(&self) -> Vec<DocumentSlot> {
        compute_slots(&self.catalog, &self.documents)
    }

    /// Uploads a file against a catalog entry.
    ///
    /// The type id and the upload policy are checked before any network
    /// call. Only the server-confirmed document enters the list; there is no
    /// placeholder id. A later upload against the same type replaces the
    /// local reference, so of two racing uploads the last confirmed response
    /// wins the slot.
    pub async fn upload(
        &mut self,
        api: &dyn DocumentApi,
        bearer: &str,
        policy: &UploadsConfig,
        file_name: &str,
        content_type: &str,
        bytes: Bytes,
        document_type_id: i64,
    ) -> AppResult<EmployeeDocument> {
        if !self.catalog.iter().any(|t| t.id == document_type_id) {
            return Err(AppError::validation(format!(
                "Unknown document type id: {document_type_id}"
            )));
        }
        if !policy.accepts_mime(content_type) {
            return Err(AppError::validation(format!(
                "File type '{content_type}' is not accepted"
            )));
        }
        if bytes.len() as u64 > policy.max_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the maximum size of {} bytes",
                policy.max_size_bytes
            )));
        }

        let confirmed = api
            .upload_document(
                bearer,
                DocumentUpload {
                    file_name: file_name.to_string(),
                    content_type: content_type.to_string(),
                    bytes,
                    employee_id: self.employee_id,
                    document_type_id,
                },
            )
            .await?;

        if confirmed.document_type_id != document_type_id {
            return Err(AppError::remote_api(format!(
                "Backend confirmed type {} for an upload against type {}",
                confirmed.document_type_id, document_type_id
            )));
        }

        self.documents
            .retain(|d| d.document_type_id != document_type_id);
        self.documents.push(confirmed.clone());
        Ok(confirmed)
    }

    /// Deletes a document by id.
    ///
    /// Returns `false` without touching the network when the id is not in
    /// the local list: deleting what is already gone is a no-op success.
    pub async fn delete(
        &mut self,
        api: &dyn DocumentApi,
        bearer: &str,
        document_id: i64,
    ) -> AppResult<bool> {
        if !self.documents.iter().any(|d| d.id == document_id) {
            return Ok(false);
        }

        api.delete_document(bearer, document_id).await?;
        self.documents.retain(|d| d.id != document_id);
        Ok(true)
    }
}
