//! TelegramUsername value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder username shipped with the site before a real one is set.
pub const UNCONFIGURED_USERNAME: &str = "your_telegram_username";

/// A Telegram username without the leading `@`.
///
/// An empty value or [`UNCONFIGURED_USERNAME`] are both accepted and mean
/// "no Telegram account yet".
///
/// # Example
///
/// ```
/// use site_links::domain::TelegramUsername;
///
/// let user = TelegramUsername::new("realuser").unwrap();
/// assert!(user.is_configured());
/// assert!(!TelegramUsername::default().is_configured());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TelegramUsername(String);

impl TelegramUsername {
    /// Create a new TelegramUsername.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUsername` if the name starts with `@`
    /// or contains whitespace or `/`.
    pub fn new(username: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();

        if username.starts_with('@')
            || username.chars().any(|c| c.is_whitespace() || c == '/')
        {
            return Err(ValidationError::InvalidUsername(username));
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a real account name has been filled in.
    pub fn is_configured(&self) -> bool {
        !self.0.is_empty() && self.0 != UNCONFIGURED_USERNAME
    }
}

impl Default for TelegramUsername {
    fn default() -> Self {
        Self(UNCONFIGURED_USERNAME.to_string())
    }
}

impl Serialize for TelegramUsername {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TelegramUsername {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TelegramUsername::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TelegramUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
