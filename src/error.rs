//! Error types for promptgen.
//!
//! Uses thiserror for derive macros. `ValidationError` carries field-level
//! detail about why an untyped mapping was rejected; `PromptgenError` is the
//! top-level CLI error and maps each variant to an exit code.

use crate::exit_codes;
use thiserror::Error;

/// A construction failure for a `Requirement` or `Prompt` built from an
/// untyped mapping.
///
/// Raised at the input boundary only. Once a domain object exists it is
/// trusted for the rest of its lifetime, so downstream operations (prompt
/// generation in particular) have no error path of their own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The top-level value was not a mapping at all.
    #[error("expected a mapping, got {found}")]
    NotAMapping {
        /// Human-readable name of the value kind that was found.
        found: &'static str,
    },

    /// A required field was absent.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A required field was present but null.
    #[error("field '{field}' must not be null")]
    NullField { field: &'static str },

    /// A field that must be text held something else.
    #[error("field '{field}' must be a string")]
    ExpectedText { field: &'static str },

    /// A required text field was empty.
    #[error("field '{field}' must not be empty")]
    EmptyText { field: &'static str },

    /// A field that must be a sequence of text held something else.
    #[error("field '{field}' must be a sequence of strings")]
    ExpectedTextSequence { field: &'static str },

    /// A sequence field contained a non-text element.
    #[error("element {index} of field '{field}' must be a string")]
    NonTextElement { field: &'static str, index: usize },

    /// A field that must be a mapping held something else.
    #[error("field '{field}' must be a mapping")]
    ExpectedMapping { field: &'static str },
}

/// Main error type for promptgen CLI operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum PromptgenError {
    /// User provided invalid arguments, an unreadable file, or bad config.
    #[error("{0}")]
    UserError(String),

    /// A requirement or prompt mapping failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The prompt enhancement call failed.
    #[error("enhancement failed: {0}")]
    Enhance(#[from] crate::enhance::EnhanceError),
}

impl PromptgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptgenError::UserError(_) => exit_codes::USER_ERROR,
            PromptgenError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            PromptgenError::Enhance(_) => exit_codes::ENHANCE_FAILURE,
        }
    }
}

/// Result type alias for promptgen operations.
pub type Result<T> = std::result::Result<T, PromptgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromptgenError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = PromptgenError::Validation(ValidationError::MissingField { field: "title" });
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn enhance_error_has_correct_exit_code() {
        let err = PromptgenError::Enhance(crate::enhance::EnhanceError::InvalidResponse(
            "no choices".to_string(),
        ));
        assert_eq!(err.exit_code(), exit_codes::ENHANCE_FAILURE);
    }

    #[test]
    fn validation_error_messages_name_the_field() {
        let err = ValidationError::MissingField { field: "description" };
        assert_eq!(err.to_string(), "missing required field 'description'");

        let err = ValidationError::NonTextElement {
            field: "constraints",
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            "element 2 of field 'constraints' must be a string"
        );

        let err = ValidationError::NotAMapping { found: "sequence" };
        assert_eq!(err.to_string(), "expected a mapping, got sequence");
    }

    #[test]
    fn wrapped_validation_error_is_prefixed() {
        let err: PromptgenError = ValidationError::EmptyText { field: "title" }.into();
        assert_eq!(
            err.to_string(),
            "validation failed: field 'title' must not be empty"
        );
    }
}
