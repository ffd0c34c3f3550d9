//! # employee-form
//!
//! Validation and error reporting for a four-field employee form.
//!
//! ```rust,ignore
//! use employee_form::{FieldKind, FormController};
//!
//! let mut form = FormController::new();
//! form.set_field(FieldKind::FirstName, "John");
//! form.set_field(FieldKind::LastName, "Doe");
//! form.set_field(FieldKind::EmployeeId, "0123456");
//! form.set_field(FieldKind::Email, "john@doe.com");
//!
//! let result = form.submit();
//! assert!(result.is_accepted());
//! println!("{}", form.dialog().unwrap().body);
//! ```
//!
//! Submitting never stores or sends the record; it only computes which fields
//! failed and what the summary dialog says.

pub mod config;
pub mod controller;
pub mod errors;
pub mod field;
pub mod submission;
pub mod validation;

pub use config::{Config, DialogConfig, ServerConfig};
pub use controller::{FieldState, FormController};
pub use errors::{build_errors, ErrorMap};
pub use field::{ErrorKind, FieldKind, ParseFieldKindError};
pub use submission::{Dialog, FieldValues, SubmissionError, SubmissionResult};
pub use validation::Validate;

// Re-export the validators and validated types
pub use employee_validation as validators;
pub use employee_validation::Employee;
