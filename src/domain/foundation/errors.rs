//! Error types shared across the domain layer.

use thiserror::Error;

/// Errors that occur while validating step input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a non-negative number, got '{raw}'")]
    NotANumber { field: String, raw: String },

    #[error("Field '{field}' has invalid value: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a not-a-number validation error.
    pub fn not_a_number(field: impl Into<String>, raw: impl Into<String>) -> Self {
        ValidationError::NotANumber {
            field: field.into(),
            raw: raw.into(),
        }
    }

    /// Creates an invalid value validation error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::NotANumber { field, .. } => field,
            ValidationError::InvalidValue { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_formats_message() {
        let err = ValidationError::empty_field("source");
        assert_eq!(err.to_string(), "Field 'source' cannot be empty");
        assert_eq!(err.field(), "source");
    }

    #[test]
    fn not_a_number_carries_raw_input() {
        let err = ValidationError::not_a_number("weight", "-5");
        assert_eq!(
            err.to_string(),
            "Field 'weight' must be a non-negative number, got '-5'"
        );
    }

    #[test]
    fn invalid_value_carries_reason() {
        let err = ValidationError::invalid_value("vehicleType", "not offered for mode 'air'");
        assert!(err.to_string().contains("not offered for mode 'air'"));
        assert_eq!(err.field(), "vehicleType");
    }
}
