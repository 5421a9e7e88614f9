//! Validation error types

use std::fmt;

/// Validation error for request inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Route lookup without both endpoints
    MissingRoute,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::MissingRoute => {
                write!(f, "Please provide both \"from\" and \"to\" locations")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
