//! Phone number value objects and normalization.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Country code prepended by [`normalize`].
pub const DEFAULT_COUNTRY_CODE: &str = "234";

static NON_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D").expect("Failed to compile non-digit regex"));

/// An operator-supplied phone number exactly as written, separators included.
///
/// # Example
///
/// ```
/// use site_links::domain::RawPhoneNumber;
///
/// let raw = RawPhoneNumber::new("091-18-24-47-94");
/// assert_eq!(raw.digits(), "09118244794");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every decimal digit of the raw number, in order.
    pub fn digits(&self) -> String {
        NON_DIGIT_REGEX.replace_all(&self.0, "").into_owned()
    }
}

impl fmt::Display for RawPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A digits-only calling code such as `234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a new CountryCode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCountryCode` if the code is empty or
    /// contains anything other than ASCII digits.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();

        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidCountryCode(code));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self(DEFAULT_COUNTRY_CODE.to_string())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A digits-only phone number suitable for `wa.me` links.
///
/// Only [`normalize`] and [`normalize_with`] construct one in code, so the value
/// never contains a non-digit. Numbers of 10 digits or fewer, and longer ones
/// with a leading `0`, get the country code added. Longer numbers without a
/// leading `0` are passed through unchanged and only assumed to carry one.
///
/// # Example
///
/// ```
/// use site_links::domain::normalize;
///
/// let phone = normalize("091-18-24-47-94");
/// assert_eq!(phone.as_str(), "2349118244794");
/// assert_eq!(phone.display(), "+2349118244794");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPhoneNumber(String);

impl NormalizedPhoneNumber {
    /// Get the normalized digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The number as shown to visitors, with a leading `+`.
    pub fn display(&self) -> String {
        format!("+{}", self.0)
    }
}

/// Normalize a raw phone number using [`DEFAULT_COUNTRY_CODE`].
pub fn normalize(raw: &str) -> NormalizedPhoneNumber {
    normalize_with(raw, &CountryCode::default())
}

/// Normalize a raw phone number against the given country code.
///
/// - 10 or more digits with a leading `0`: the `0` is replaced by the country code.
/// - 10 or fewer digits otherwise: the country code is prepended as-is.
/// - Anything longer is assumed to carry its country code already.
pub fn normalize_with(raw: &str, country_code: &CountryCode) -> NormalizedPhoneNumber {
    let digits = RawPhoneNumber::new(raw).digits();

    let normalized = if digits.len() >= 10 && digits.starts_with('0') {
        format!("{}{}", country_code.as_str(), &digits[1..])
    } else if digits.len() <= 10 {
        format!("{}{}", country_code.as_str(), digits)
    } else {
        digits
    };

    NormalizedPhoneNumber(normalized)
}

impl Serialize for NormalizedPhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Stored values are already normalized; only the digits-only shape is checked.
impl<'de> Deserialize<'de> for NormalizedPhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(serde::de::Error::custom(
                ValidationError::InvalidNormalizedPhone(s),
            ));
        }

        Ok(NormalizedPhoneNumber(s))
    }
}

impl fmt::Display for NormalizedPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
