//! Outcome of a single validation

use std::fmt;

use crate::validation::errors::ValidationErrorKind;
use crate::validation::messages::{self, Locale};

/// Outcome of validating one candidate file
///
/// `error` and `kind` are present exactly when `valid` is false; the
/// constructors are the only way to build a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    error: Option<String>,
    kind: Option<ValidationErrorKind>,
}

impl ValidationResult {
    /// The file passed every applicable check
    pub fn accepted() -> Self {
        ValidationResult {
            valid: true,
            error: None,
            kind: None,
        }
    }

    /// The file was rejected for `kind`, with the message in `locale`
    pub fn rejected(kind: ValidationErrorKind, locale: Locale) -> Self {
        ValidationResult {
            valid: false,
            error: Some(messages::message(kind, locale).to_string()),
            kind: Some(kind),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// User-facing message when rejected
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rejection reason for programmatic branching
    pub fn kind(&self) -> Option<ValidationErrorKind> {
        self.kind
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.error) {
            (Some(kind), Some(error)) => write!(f, "rejected [{}]: {}", kind, error),
            _ => write!(f, "valid"),
        }
    }
}
