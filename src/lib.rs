//! Site Links - contact-link formatter and text rotator for the Emanuel's Tech World site.
//!
//! The crate turns an operator-written phone number into a WhatsApp deep link,
//! builds Telegram links, fills the page's contact slots, and cycles the
//! facts/tips banners on a timer.
//!
//! # Architecture
//!
//! - **domain**: Phone number normalization and username value objects
//! - **links**: WhatsApp and Telegram link builders
//! - **content**: Hardcoded facts, tips, messages and course buttons
//! - **rotator**: Wraparound rotation lists
//! - **ui**: Slot selectors, the `UiSink` capability and an in-memory page
//! - **wiring**: One-shot pass populating the contact slots
//! - **scheduler**: Repeating rotation task with fade transitions
//! - **effects**: Card tilt and scroll reveal geometry
//! - **preview**: Open an HTML fragment in a new window
//! - **config**: Configuration from environment variables
//! - **error**: Error types
//! - **observability**: In-memory counters

pub mod config;
pub mod content;
pub mod domain;
pub mod effects;
pub mod error;
pub mod links;
pub mod observability;
pub mod preview;
pub mod rotator;
pub mod scheduler;
pub mod ui;
pub mod wiring;

pub use config::Config;
pub use domain::{normalize, NormalizedPhoneNumber, RawPhoneNumber, TelegramUsername};
pub use error::{ConfigError, UiError};
pub use links::{build_chat_link, build_messaging_link, ContactLink, ContactLinks};
pub use observability::MetricsTracker;
pub use rotator::{Advance, RotationList, Rotator};
pub use scheduler::{RotationSchedule, RotationTask};
pub use ui::{InMemoryPage, Slot, Transition, UiSink};
pub use wiring::{wire_page, WiringReport};
