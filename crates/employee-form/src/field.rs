// File: src/field.rs
// Purpose: Field and error identities with their display text

use employee_validation::{is_valid_email, is_valid_id, is_valid_name};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four employee form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    FirstName,
    LastName,
    EmployeeId,
    Email,
}

/// Which validation rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidName,
    InvalidId,
    InvalidEmail,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::EmployeeId,
        FieldKind::Email,
    ];

    /// Human-readable label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::FirstName => "First Name",
            FieldKind::LastName => "Last Name",
            FieldKind::EmployeeId => "Employee ID",
            FieldKind::Email => "Email",
        }
    }

    /// Stable machine name, also used as the HTML input name
    pub fn key(self) -> &'static str {
        match self {
            FieldKind::FirstName => "first_name",
            FieldKind::LastName => "last_name",
            FieldKind::EmployeeId => "employee_id",
            FieldKind::Email => "email",
        }
    }

    /// The error reported when this field fails validation
    pub fn error_kind(self) -> ErrorKind {
        match self {
            FieldKind::FirstName | FieldKind::LastName => ErrorKind::InvalidName,
            FieldKind::EmployeeId => ErrorKind::InvalidId,
            FieldKind::Email => ErrorKind::InvalidEmail,
        }
    }

    /// Run the pattern predicate for this field
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            FieldKind::FirstName | FieldKind::LastName => is_valid_name(value),
            FieldKind::EmployeeId => is_valid_id(value),
            FieldKind::Email => is_valid_email(value),
        }
    }

    /// `None` when the value passes, otherwise the error for this field
    pub fn check(self, value: &str) -> Option<ErrorKind> {
        if self.is_valid(value) {
            None
        } else {
            Some(self.error_kind())
        }
    }
}

impl ErrorKind {
    /// Message shown under a flagged field and in the error summary
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidName => "must contain only letters, spaces, periods or hyphens",
            ErrorKind::InvalidId => "must be 7 digits starting with 0",
            ErrorKind::InvalidEmail => "must be a valid email address",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{0}` (expected first_name, last_name, employee_id or email)")]
pub struct ParseFieldKindError(pub String);

impl FromStr for FieldKind {
    type Err = ParseFieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "firstname" | "first" => Ok(FieldKind::FirstName),
            "lastname" | "last" => Ok(FieldKind::LastName),
            "employeeid" | "id" => Ok(FieldKind::EmployeeId),
            "email" => Ok(FieldKind::Email),
            _ => Err(ParseFieldKindError(s.to_string())),
        }
    }
}
