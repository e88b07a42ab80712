//! Document catalog and per-employee document types.

use serde::{Deserialize, Serialize};

/// A catalog entry describing one required document category.
///
/// Immutable, sourced from the backend, shared across all employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    /// Catalog identifier.
    pub id: i64,
    /// Display name (e.g. "ID", "Contract").
    pub name: String,
}

/// An uploaded document, logically owned by exactly one employee.
///
/// Field shape follows the backend API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    /// Server-assigned identifier.
    pub id: i64,
    /// Catalog id this document was uploaded against.
    pub document_type_id: i64,
    /// Owning employee.
    pub employee_id: i64,
    /// Storage path or URL as reported by the backend.
    pub file_path: String,
    /// Whether the backend still considers this document current.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// Embedded catalog entry, when the backend includes it.
    #[serde(default)]
    pub document_type: Option<DocumentType>,
}

fn default_is_active() -> bool {
    true
}

/// The reconciliation of one [`DocumentType`] against an employee's
/// uploaded documents: at most one document per catalog entry.
///
/// Derived, never persisted; recomputed whenever the document list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DocumentSlot {
    /// No document uploaded for this category yet.
    Empty {
        /// The catalog entry this slot represents.
        doc_type: DocumentType,
    },
    /// A document is on file for this category.
    Filled {
        /// The catalog entry this slot represents.
        doc_type: DocumentType,
        /// The uploaded document occupying the slot.
        document: EmployeeDocument,
    },
}

impl DocumentSlot {
    /// The catalog entry this slot represents, regardless of fill state.
    pub fn doc_type(&self) -> &DocumentType {
        match self {
            Self::Empty { doc_type } | Self::Filled { doc_type, .. } => doc_type,
        }
    }

    /// The occupying document, if any.
    pub fn document(&self) -> Option<&EmployeeDocument> {
        match self {
            Self::Empty { .. } => None,
            Self::Filled { document, .. } => Some(document),
        }
    }

    /// Whether a document is on file for this slot.
    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Filled { .. })
    }
}
