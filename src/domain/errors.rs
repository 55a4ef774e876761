//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided country code is empty or contains non-digits.
    InvalidCountryCode(String),

    /// A stored normalized phone number is empty or contains non-digits.
    InvalidNormalizedPhone(String),

    /// The provided Telegram username contains characters that cannot appear in a URL path.
    InvalidUsername(String),

    /// A rotation list must hold at least one entry.
    EmptyRotation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCountryCode(code) => write!(f, "Invalid country code: {}", code),
            Self::InvalidNormalizedPhone(phone) => {
                write!(f, "Invalid normalized phone number: {}", phone)
            }
            Self::InvalidUsername(name) => write!(f, "Invalid Telegram username: {}", name),
            Self::EmptyRotation => write!(f, "Rotation list cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
