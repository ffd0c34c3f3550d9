// File: src/controller.rs
// Purpose: Owns the form's field values and error state across submits

use crate::config::DialogConfig;
use crate::errors::ErrorMap;
use crate::field::{ErrorKind, FieldKind};
use crate::submission::{Dialog, FieldValues, SubmissionResult};
use tracing::{debug, info};

/// What the form shows for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No error shown, either never submitted or passing at the last submit
    Untouched,
    /// Failed at the last submit
    Flagged(ErrorKind),
}

impl FieldState {
    pub fn is_flagged(self) -> bool {
        matches!(self, FieldState::Flagged(_))
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            FieldState::Untouched => None,
            FieldState::Flagged(error) => Some(error.message()),
        }
    }
}

/// Employee form state: four field values, the errors from the last submit
/// and the dialog that submit opened.
///
/// Validation only runs on [`submit`](Self::submit). Editing a field leaves
/// its flag in place until the next submit.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    values: FieldValues,
    errors: ErrorMap,
    last_result: Option<SubmissionResult>,
    dialog_open: bool,
    dialog_config: DialogConfig,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialog_config(dialog_config: DialogConfig) -> Self {
        Self {
            dialog_config,
            ..Self::default()
        }
    }

    pub fn set_field(&mut self, field: FieldKind, value: impl Into<String>) {
        debug!(field = field.key(), "field edited");
        self.values.set(field, value.into());
    }

    pub fn field(&self, field: FieldKind) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the most recent submit
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn field_state(&self, field: FieldKind) -> FieldState {
        match self.errors.get(field) {
            Some(error) => FieldState::Flagged(error),
            None => FieldState::Untouched,
        }
    }

    /// Validate every field, replace the error state and open the dialog
    pub fn submit(&mut self) -> SubmissionResult {
        self.errors = self.values.errors();
        let result = SubmissionResult::derive(&self.values, self.errors.clone());

        if result.is_accepted() {
            info!("employee form accepted");
        } else {
            info!(errors = self.errors.len(), "employee form rejected");
        }

        self.last_result = Some(result.clone());
        self.dialog_open = true;
        result
    }

    /// Result of the most recent submit, if any since the last reset
    pub fn last_result(&self) -> Option<&SubmissionResult> {
        self.last_result.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Dialog for the last submit while it is open
    pub fn dialog(&self) -> Option<Dialog> {
        if !self.dialog_open {
            return None;
        }
        self.last_result
            .as_ref()
            .map(|result| Dialog::with_config(result, &self.dialog_config))
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Clear every field and every flag
    pub fn reset(&mut self) {
        debug!("employee form reset");
        self.values.clear();
        self.errors.clear();
        self.last_result = None;
        self.dialog_open = false;
    }
}
