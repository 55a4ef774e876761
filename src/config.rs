//! Configuration management for the site link formatter.
//!
//! Every setting has a default matching the shipped site, so an empty
//! environment is a valid configuration. A `.env` file is read if present.

use crate::domain::{
    normalize_with, CountryCode, NormalizedPhoneNumber, RawPhoneNumber, TelegramUsername,
    DEFAULT_COUNTRY_CODE, UNCONFIGURED_USERNAME,
};
use crate::error::{ConfigError, ConfigResult};
use crate::links::ContactLinks;
use crate::scheduler::RotationSchedule;
use std::env;
use std::time::Duration;

/// Phone number shipped with the site.
pub const DEFAULT_PHONE_NUMBER: &str = "091-18-24-47-94";

/// Configuration for the site link formatter.
#[derive(Debug, Clone)]
pub struct Config {
    /// WhatsApp number as the operator wrote it
    pub raw_phone_number: RawPhoneNumber,

    /// Telegram username without `@` (default: placeholder, meaning unset)
    pub telegram_username: TelegramUsername,

    /// Country code for normalization (default: "234")
    pub country_code: CountryCode,

    /// Milliseconds between rotation ticks (default: 5200)
    pub rotation_interval_ms: u64,

    /// Milliseconds of fade before the text swap (default: 700)
    pub rotation_fade_ms: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SITE_PHONE_NUMBER`: WhatsApp number, any formatting (default: "091-18-24-47-94")
    /// - `SITE_TELEGRAM_USERNAME`: Telegram username, no `@` (default: unset placeholder)
    /// - `SITE_COUNTRY_CODE`: Digits-only calling code (default: "234")
    /// - `ROTATION_INTERVAL_MS`: Rotation interval (default: 5200)
    /// - `ROTATION_FADE_MS`: Fade delay, must be below the interval (default: 700)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let raw_phone_number = RawPhoneNumber::new(
            env::var("SITE_PHONE_NUMBER").unwrap_or_else(|_| DEFAULT_PHONE_NUMBER.to_string()),
        );
        if raw_phone_number.digits().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SITE_PHONE_NUMBER".to_string(),
                reason: "Must contain at least one digit".to_string(),
            });
        }

        let telegram_username = TelegramUsername::new(
            env::var("SITE_TELEGRAM_USERNAME")
                .unwrap_or_else(|_| UNCONFIGURED_USERNAME.to_string()),
        )
        .map_err(|e| ConfigError::InvalidValue {
            var: "SITE_TELEGRAM_USERNAME".to_string(),
            reason: e.to_string(),
        })?;

        let country_code = CountryCode::new(
            env::var("SITE_COUNTRY_CODE").unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.to_string()),
        )
        .map_err(|e| ConfigError::InvalidValue {
            var: "SITE_COUNTRY_CODE".to_string(),
            reason: e.to_string(),
        })?;

        let rotation_interval_ms = Self::parse_env_u64("ROTATION_INTERVAL_MS", 5200)?;
        let rotation_fade_ms = Self::parse_env_u64("ROTATION_FADE_MS", 700)?;

        // Ticks must not overlap
        if rotation_fade_ms >= rotation_interval_ms {
            return Err(ConfigError::InvalidValue {
                var: "ROTATION_FADE_MS".to_string(),
                reason: format!(
                    "Must be less than ROTATION_INTERVAL_MS ({})",
                    rotation_interval_ms
                ),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            raw_phone_number,
            telegram_username,
            country_code,
            rotation_interval_ms,
            rotation_fade_ms,
            log_level,
        })
    }

    /// The configured number, normalized against the configured country code.
    pub fn phone_number(&self) -> NormalizedPhoneNumber {
        normalize_with(self.raw_phone_number.as_str(), &self.country_code)
    }

    /// Link builders for the configured accounts.
    pub fn contact_links(&self) -> ContactLinks {
        ContactLinks::new(self.phone_number(), self.telegram_username.clone())
    }

    pub fn rotation_schedule(&self) -> RotationSchedule {
        RotationSchedule {
            interval: Duration::from_millis(self.rotation_interval_ms),
            fade: Duration::from_millis(self.rotation_fade_ms),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            raw_phone_number: RawPhoneNumber::new(DEFAULT_PHONE_NUMBER),
            telegram_username: TelegramUsername::default(),
            country_code: CountryCode::default(),
            rotation_interval_ms: 5200,
            rotation_fade_ms: 700,
            log_level: "info".to_string(),
        }
    }
}
