// File: src/validation.rs
// Purpose: Validation trait for form inputs

use crate::errors::ErrorMap;
use crate::submission::FieldValues;

/// Trait for types that can be validated
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with every failing field
    fn validate(&self) -> Result<(), ErrorMap>;
}

impl Validate for FieldValues {
    fn validate(&self) -> Result<(), ErrorMap> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn test_validate_ok() {
        let values = FieldValues::new("John", "Doe", "0123456", "john@doe.com");
        assert!(values.validate().is_ok());
    }

    #[test]
    fn test_validate_err() {
        let values = FieldValues::new("John", "Doe", "0123456", "john.doe@mail.com");
        let errors = values.validate().unwrap_err();
        assert!(errors.contains(FieldKind::Email));
        assert_eq!(errors.len(), 1);
    }
}
