// File: src/errors.rs
// Purpose: Aggregating per-field validation failures into an ErrorMap

use crate::field::{ErrorKind, FieldKind};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use tracing::debug;

/// Every currently failing field and the rule it failed
///
/// A field is present if and only if its value failed validation. Iteration
/// follows form order so summaries render the same way every time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldKind, ErrorKind>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldKind, error: ErrorKind) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: FieldKind) -> Option<ErrorKind> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FieldKind) -> bool {
        self.0.contains_key(&field)
    }

    /// Message for a flagged field, `None` when the field passed
    pub fn message_for(&self, field: FieldKind) -> Option<&'static str> {
        self.get(field).map(ErrorKind::message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, ErrorKind)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(FieldKind, ErrorKind)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldKind, ErrorKind)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ErrorMap {
    type Item = (FieldKind, ErrorKind);
    type IntoIter = btree_map::IntoIter<FieldKind, ErrorKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Validate all four fields independently and collect the failures
///
/// Every field is checked; one failure never hides another. Returns an empty
/// map when everything passes.
pub fn build_errors(first_name: &str, last_name: &str, employee_id: &str, email: &str) -> ErrorMap {
    let values = [
        (FieldKind::FirstName, first_name),
        (FieldKind::LastName, last_name),
        (FieldKind::EmployeeId, employee_id),
        (FieldKind::Email, email),
    ];

    values
        .into_iter()
        .filter_map(|(field, value)| {
            let error = field.check(value)?;
            debug!(field = field.key(), error = ?error, "field failed validation");
            Some((field, error))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_valid() {
        let errors = build_errors("John", "Doe", "0123456", "john@doe.com");
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_all_empty() {
        let errors = build_errors("", "", "", "");
        let expected: ErrorMap = [
            (FieldKind::FirstName, ErrorKind::InvalidName),
            (FieldKind::LastName, ErrorKind::InvalidName),
            (FieldKind::EmployeeId, ErrorKind::InvalidId),
            (FieldKind::Email, ErrorKind::InvalidEmail),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_single_failure() {
        let errors = build_errors("John123", "Doe", "0123456", "john@doe.com");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldKind::FirstName), Some(ErrorKind::InvalidName));
        assert!(!errors.contains(FieldKind::LastName));
    }

    #[test]
    fn test_no_short_circuit() {
        let errors = build_errors("John", "D0e", "1234567", "not-an-email");
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![FieldKind::LastName, FieldKind::EmployeeId, FieldKind::Email]
        );
    }

    #[test]
    fn test_idempotent() {
        let first = build_errors("Jo hn", "", "0123456", "a.b@c.com");
        let second = build_errors("Jo hn", "", "0123456", "a.b@c.com");
        assert_eq!(first, second);
    }

    #[test]
    fn test_message_for() {
        let errors = build_errors("John", "Doe", "12", "john@doe.com");
        assert_eq!(
            errors.message_for(FieldKind::EmployeeId),
            Some("must be 7 digits starting with 0")
        );
        assert_eq!(errors.message_for(FieldKind::FirstName), None);
    }

    #[test]
    fn test_serializes_as_snake_case_map() {
        let errors = build_errors("John", "Doe", "0123456", "bad");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"email":"invalid_email"}"#);

        let back: ErrorMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }
}
