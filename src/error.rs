//! Error types for the site link formatter.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::ui::Slot;
use thiserror::Error;

/// Errors raised by a UI sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// No element on the page matches the slot
    #[error("UI slot not found: {0}")]
    SlotNotFound(Slot),

    /// The sink could not apply the update
    #[error("UI update failed: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with UiError
pub type UiResult<T> = Result<T, UiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
