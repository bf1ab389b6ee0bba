//! Validation error types

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Rejects control characters (newlines, tabs, NUL, ...) anywhere in the text
static PRINTABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\p{Cc}]+$").expect("invalid printable regex"));

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Number outside the accepted range
    OutOfRange { field: &'static str, min: u32, max: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim and check a short free-form text field.
///
/// Length is counted in characters, not bytes.
pub(crate) fn short_text(
    field: &'static str,
    raw: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let s = raw.trim();

    if s.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if s.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    if !PRINTABLE_RE.is_match(s) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must not contain control characters",
        });
    }

    Ok(s.to_owned())
}
