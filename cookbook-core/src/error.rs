use std::fmt;
use thiserror::Error;

/// A single rejected field, keyed by its JSON name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request body: {0}")]
    Malformed(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Validation failed: {}", join_fields(.0))]
    Fields(Vec<FieldError>),
}

impl ValidationError {
    /// Field errors, empty for body-level failures.
    pub fn fields(&self) -> &[FieldError] {
        match self {
            ValidationError::Fields(fields) => fields,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid recipe ID format: {0}")]
pub struct InvalidIdFormat(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);
