//! Axum middleware layers.

pub mod access;
pub mod logging;
pub mod rbac;
