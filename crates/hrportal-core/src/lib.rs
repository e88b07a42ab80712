//! # hrportal-core
//!
//! Core crate for the HR Portal gateway. Contains configuration schemas,
//! domain types shared with the external backend API, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other HR Portal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
