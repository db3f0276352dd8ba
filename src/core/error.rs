use super::person::PersonField;
use std::fmt;
use thiserror::Error;

/// Failure of a single exchange with the external Persons API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid base url '{0}'")]
    InvalidBaseUrl(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Missing,
    NotANumber,
    TooLong { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: PersonField,
    pub kind: ValidationKind,
}

impl FieldError {
    pub fn new(field: PersonField, kind: ValidationKind) -> Self {
        Self { field, kind }
    }

    /// Inline message shown next to the offending input.
    pub fn message(&self) -> String {
        match self.kind {
            ValidationKind::Missing => format!("{} is required", self.field.label()),
            ValidationKind::NotANumber => {
                format!("{} must be a whole number", self.field.label())
            }
            ValidationKind::TooLong { max } => {
                format!("{} must be at most {} characters", self.field.label(), max)
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for FieldError {}

/// Every validation failure found in one form submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn for_field(&self, field: PersonField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(FieldError::message).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}
