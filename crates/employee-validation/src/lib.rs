//! Employee Validation
//!
//! Pure pattern predicates for the four employee form fields, plus validated
//! newtypes built on them. Predicates are stateless and safe to call from any
//! thread.

pub mod patterns;
pub mod types;

// Re-export all validators
pub use patterns::*;
pub use types::{EmailAddress, Employee, EmployeeId, PersonName};
