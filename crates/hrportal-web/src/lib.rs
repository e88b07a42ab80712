//! # hrportal-web
//!
//! HTTP layer for HR Portal built on Axum.
//!
//! Provides the page and API routes, the access-control middleware that
//! gates every page navigation, session cookie extractors, DTOs, and error
//! mapping. All business logic lives behind the backend API; this layer
//! only routes, gates, and translates.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
