// File: src/submission.rs
// Purpose: Deriving the outcome of a submit and the dialog that presents it

use crate::config::DialogConfig;
use crate::errors::{build_errors, ErrorMap};
use crate::field::FieldKind;
use crate::validation::Validate;
use employee_validation::{EmailAddress, Employee, EmployeeId, PersonName};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Raw text of the four form fields
///
/// Missing or `null` fields deserialize as empty strings, which always fail
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldValues {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub employee_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl FieldValues {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        employee_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            employee_id: employee_id.into(),
            email: email.into(),
        }
    }

    pub fn get(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::FirstName => &self.first_name,
            FieldKind::LastName => &self.last_name,
            FieldKind::EmployeeId => &self.employee_id,
            FieldKind::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: FieldKind, value: String) {
        let slot = match field {
            FieldKind::FirstName => &mut self.first_name,
            FieldKind::LastName => &mut self.last_name,
            FieldKind::EmployeeId => &mut self.employee_id,
            FieldKind::Email => &mut self.email,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate the current values
    pub fn errors(&self) -> ErrorMap {
        build_errors(
            &self.first_name,
            &self.last_name,
            &self.employee_id,
            &self.email,
        )
    }
}

/// Outcome of a single submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// Every field passed; values are carried verbatim
    Accepted {
        first_name: String,
        last_name: String,
        employee_id: String,
        email: String,
    },
    /// At least one field failed
    Rejected { errors: ErrorMap },
}

impl SubmissionResult {
    /// Combine freshly computed errors with the values they came from
    pub fn derive(values: &FieldValues, errors: ErrorMap) -> Self {
        if errors.is_empty() {
            SubmissionResult::Accepted {
                first_name: values.first_name.clone(),
                last_name: values.last_name.clone(),
                employee_id: values.employee_id.clone(),
                email: values.email.clone(),
            }
        } else {
            SubmissionResult::Rejected { errors }
        }
    }

    /// Validate and derive in one step
    pub fn evaluate(values: &FieldValues) -> Self {
        let errors = values.validate().err().unwrap_or_default();
        Self::derive(values, errors)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Errors of a rejected submission; empty for an accepted one
    pub fn errors(&self) -> ErrorMap {
        match self {
            SubmissionResult::Accepted { .. } => ErrorMap::new(),
            SubmissionResult::Rejected { errors } => errors.clone(),
        }
    }

    /// Promote an accepted submission into a validated [`Employee`]
    pub fn into_employee(self) -> Result<Employee, SubmissionError> {
        match self {
            SubmissionResult::Accepted {
                first_name,
                last_name,
                employee_id,
                email,
            } => Ok(Employee {
                first_name: PersonName::try_new(first_name)
                    .map_err(|_| SubmissionError::Invalid(FieldKind::FirstName))?,
                last_name: PersonName::try_new(last_name)
                    .map_err(|_| SubmissionError::Invalid(FieldKind::LastName))?,
                employee_id: EmployeeId::try_new(employee_id)
                    .map_err(|_| SubmissionError::Invalid(FieldKind::EmployeeId))?,
                email: EmailAddress::try_new(email)
                    .map_err(|_| SubmissionError::Invalid(FieldKind::Email))?,
            }),
            SubmissionResult::Rejected { errors } => Err(SubmissionError::Rejected(errors)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission was rejected with {} error(s)", .0.len())]
    Rejected(ErrorMap),

    /// Only reachable when an `Accepted` value was constructed by hand
    #[error("{0} does not hold a valid value")]
    Invalid(FieldKind),
}

/// Title and body of the summary dialog shown after submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

impl Dialog {
    /// Render with the default titles
    pub fn new(result: &SubmissionResult) -> Self {
        Self::with_config(result, &DialogConfig::default())
    }

    pub fn with_config(result: &SubmissionResult, config: &DialogConfig) -> Self {
        match result {
            SubmissionResult::Accepted {
                first_name,
                last_name,
                employee_id,
                email,
            } => Self {
                title: config.accepted_title.clone(),
                body: format!(
                    "Employee created with the following details:\n\
                     First Name: {first_name}\n\
                     Last Name: {last_name}\n\
                     ID: {employee_id}\n\
                     Email: {email}"
                ),
            },
            SubmissionResult::Rejected { errors } => {
                // One blank line between the heading and each entry
                let mut body = String::from("The following errors were found:");
                for (field, error) in errors.iter() {
                    body.push_str("\n\n");
                    body.push_str(field.label());
                    body.push_str(": ");
                    body.push_str(error.message());
                }
                Self {
                    title: config.rejected_title.clone(),
                    body,
                }
            }
        }
    }
}
