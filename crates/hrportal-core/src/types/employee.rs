//! Employee roster entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::document::EmployeeDocument;

/// An employee as reported by the backend.
///
/// The backend is the system of record; this layer only holds a
/// read/write-through copy for the duration of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned identifier.
    pub id: i64,
    /// Job title.
    pub job_title: String,
    /// Non-negative salary, kept as an exact decimal.
    pub salary: Decimal,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Documents on file, when the backend includes them.
    #[serde(default)]
    pub documents: Vec<EmployeeDocument>,
}
