//! Domain value objects and types.
//!
//! Phone numbers, country codes and messaging usernames. Normalized values are
//! only produced by the normalizer, so a `NormalizedPhoneNumber` in hand is
//! always digits-only and country-code-prefixed.

pub mod errors;
pub mod phone;
pub mod telegram;

pub use errors::ValidationError;
pub use phone::{
    normalize, normalize_with, CountryCode, NormalizedPhoneNumber, RawPhoneNumber,
    DEFAULT_COUNTRY_CODE,
};
pub use telegram::{TelegramUsername, UNCONFIGURED_USERNAME};
