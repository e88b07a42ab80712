//! HTTP handlers, organized by domain.

pub mod auth;
pub mod documents;
pub mod empleados;
pub mod health;
pub mod pages;
