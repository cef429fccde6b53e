use std::fmt;

/// Reason the external attribute field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidFormat,
    Duplicate,
}

impl ValidationError {
    /// Stable symbolic code, matching what the console reports inline.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required => "REQUIRED",
            ValidationError::InvalidFormat => "INVALID_FORMAT",
            ValidationError::Duplicate => "DUPLICATE",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::Required => "external attribute is required",
            ValidationError::InvalidFormat => {
                "external attribute must be a URI or a valid attribute name"
            }
            ValidationError::Duplicate => "external attribute is already mapped",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    MissingExternalValue,
    MissingLocalAttribute,
    Invalid(ValidationError),
    UnknownLocalAttribute { id: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingExternalValue => f.write_str("external attribute is empty"),
            SubmitError::MissingLocalAttribute => f.write_str("no local attribute selected"),
            SubmitError::Invalid(err) => write!(f, "{err}"),
            SubmitError::UnknownLocalAttribute { id } => {
                write!(f, "local attribute '{id}' is not among the candidates")
            }
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
