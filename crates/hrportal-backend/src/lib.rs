//! # hrportal-backend
//!
//! Thin wrapper over the external HR backend API, plus the document slot
//! reconciler that keeps a local document list consistent with the remote
//! store.
//!
//! ## Modules
//!
//! - `client` — reqwest client for every backend endpoint
//! - `api` — the `DocumentApi` seam the reconciler talks through
//! - `dto` — wire types owned by the backend contract
//! - `slots` — pure catalog-to-documents reconciliation
//! - `documents` — the mutable document set with confirm-then-mutate semantics

pub mod api;
pub mod client;
pub mod documents;
pub mod dto;
pub mod slots;

pub use api::{DocumentApi, DocumentUpload};
pub use client::BackendClient;
pub use documents::DocumentSet;
pub use slots::compute_slots;
