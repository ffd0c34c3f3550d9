//! Validated newtypes for employee record fields
//!
//! Each type wraps a `String` and can only be constructed from a value that
//! passes the matching pattern predicate, so an [`Employee`] built from these
//! types is valid by construction.
//!
//! ```rust,ignore
//! use employee_validation::types::EmployeeId;
//!
//! let id = EmployeeId::try_new("0123456".to_string())?;  // ✓
//! let bad = EmployeeId::try_new("1234567".to_string());  // ✗ must start with 0
//! ```
//!
//! The ID stays a string: leading zeros are significant and it is never
//! coerced to a number.

use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::patterns::{is_valid_email, is_valid_id, is_valid_name};

/// First or last name of an employee
#[nutype(
    validate(predicate = is_valid_name),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PersonName(String);

/// Seven digit employee ID starting with `0`
#[nutype(
    validate(predicate = is_valid_id),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmployeeId(String);

/// Email address accepted by the employee form
#[nutype(
    validate(predicate = is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// An employee record whose every field has passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub employee_id: EmployeeId,
    pub email: EmailAddress,
}
