//! Catalog-to-documents reconciliation.

use hrportal_core::types::{DocumentSlot, DocumentType, EmployeeDocument};

/// Produces one slot per catalog entry, in catalog order.
///
/// For each type the first document whose `document_type_id` matches wins.
/// Fill state never reorders the result. Pure function, O(types × docs).
pub fn compute_slots(types: &[DocumentType], docs: &[EmployeeDocument]) -> Vec<DocumentSlot> {
    types
        .iter()
        .map(|doc_type| {
            match docs.iter().find(|d| d.document_type_id == doc_type.id) {
                Some(document) => DocumentSlot::Filled {
                    doc_type: doc_type.clone(),
                    document: document.clone(),
                },
                None => DocumentSlot::Empty {
                    doc_type: doc_type.clone(),
                },
            }
        })
        .collect()
}
