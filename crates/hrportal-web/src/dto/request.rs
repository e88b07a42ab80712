//! Request DTOs with validation.
//!
//! Field-level checks run before any backend call is made; a validation
//! failure means the request is never sent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use hrportal_backend::dto::{EmployeeUpdate, NewEmployee};
use hrportal_core::error::AppError;

/// Runs derive-based validation and flattens failures into one
/// field-annotated message.
pub fn check(value: &impl Validate) -> Result<(), AppError> {
    value.validate().map_err(|errors| {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let detail = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{field}: {detail}")
                })
            })
            .collect();
        parts.sort();
        AppError::validation(parts.join("; "))
    })
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Create employee request (HR).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// First name.
    #[validate(custom(function = validate_name))]
    pub first_name: String,
    /// Last name.
    #[validate(custom(function = validate_name))]
    pub last_name: String,
    /// Email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Initial password for the new account.
    #[validate(custom(function = validate_password_strength))]
    pub password: String,
    /// Job title.
    #[validate(length(min = 1, max = 100, message = "job title is required"))]
    pub job_title: String,
    /// Salary; must not be negative.
    #[validate(custom(function = validate_salary))]
    pub salary: Decimal,
}

impl CreateEmployeeRequest {
    /// The backend payload for this request.
    pub fn into_payload(self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            job_title: self.job_title,
            salary: self.salary,
        }
    }
}

/// Update employee request (HR). Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    /// First name.
    #[validate(custom(function = validate_name))]
    pub first_name: Option<String>,
    /// Last name.
    #[validate(custom(function = validate_name))]
    pub last_name: Option<String>,
    /// Email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    /// Job title.
    #[validate(length(min = 1, max = 100, message = "job title must not be empty"))]
    pub job_title: Option<String>,
    /// Salary; must not be negative.
    #[validate(custom(function = validate_salary))]
    pub salary: Option<Decimal>,
}

impl UpdateEmployeeRequest {
    /// The backend payload for this request.
    pub fn into_payload(self) -> EmployeeUpdate {
        EmployeeUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            job_title: self.job_title,
            salary: self.salary,
        }
    }
}

/// Names: letters plus the separators that occur in real names.
fn validate_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '\'' || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("name")
            .with_message("must contain only letters, spaces, apostrophes, or hyphens".into()))
    }
}

/// Passwords: at least 8 characters with upper case, lower case, and a digit.
fn validate_password_strength(value: &str) -> Result<(), ValidationError> {
    let strong = value.len() >= 8
        && value.chars().any(|c| c.is_uppercase())
        && value.chars().any(|c| c.is_lowercase())
        && value.chars().any(|c| c.is_ascii_digit());
    if strong {
        Ok(())
    } else {
        Err(ValidationError::new("password").with_message(
            "must be at least 8 characters with upper case, lower case, and a digit".into(),
        ))
    }
}

fn validate_salary(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        Err(ValidationError::new("salary").with_message("must not be negative".into()))
    } else {
        Ok(())
    }
}
