//! Domain errors for the order accumulator.

use thiserror::Error;

/// Domain-level errors raised by business validation.
///
/// These errors are independent of transport concerns; the HTTP and FIX
/// adapters translate them at their own boundaries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed business validation.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Offending field name.
        field: String,
        /// Human-readable message.
        message: String,
    },
}

impl DomainError {
    /// Create an `InvalidValue` error for the given field.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field name, when the error names one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { field, .. } => Some(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_display() {
        let err = DomainError::invalid_value("quantity", "must be greater than zero");
        let msg = format!("{err}");
        assert!(msg.contains("quantity"));
        assert!(msg.contains("greater than zero"));
    }

    #[test]
    fn invalid_value_field() {
        let err = DomainError::invalid_value("symbol", "cannot be empty");
        assert_eq!(err.field(), Some("symbol"));
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(DomainError::invalid_value("test", "test"));
        assert!(!err.to_string().is_empty());
    }
}
