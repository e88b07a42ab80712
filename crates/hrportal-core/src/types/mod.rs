//! Domain types shared with the external backend API.

pub mod document;
pub mod employee;

pub use document::{DocumentSlot, DocumentType, EmployeeDocument};
pub use employee::Employee;
