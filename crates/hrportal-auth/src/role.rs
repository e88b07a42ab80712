//! Caller role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two caller roles known to the portal. No hierarchy.
///
/// The backend models the role as an `is_hr` boolean; it is converted to
/// this tagged variant at the single point session claims are decoded so
/// that an accidental flag inversion cannot survive past the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Authorized to manage the full employee roster.
    Hr,
    /// Restricted to their own profile and documents.
    Employee,
}

impl Role {
    /// Convert the backend's raw flag. A missing flag defaults to
    /// [`Role::Employee`].
    pub fn from_is_hr(is_hr: Option<bool>) -> Self {
        if is_hr.unwrap_or(false) {
            Self::Hr
        } else {
            Self::Employee
        }
    }

    /// The raw flag as the backend expects it.
    pub fn is_hr(&self) -> bool {
        matches!(self, Self::Hr)
    }

    /// The landing path users of this role are sent to after login.
    pub fn home_path(&self) -> &'static str {
        match self {
            Self::Hr => crate::policy::HR_HOME,
            Self::Employee => crate::policy::EMPLOYEE_HOME,
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = hrportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hr" => Ok(Self::Hr),
            "employee" => Ok(Self::Employee),
            _ => Err(hrportal_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: hr, employee"
            ))),
        }
    }
}
