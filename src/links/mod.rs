//! Contact link builders for WhatsApp and Telegram.
//!
//! Links are plain strings recomputed on demand; nothing here caches them.

use crate::domain::{NormalizedPhoneNumber, TelegramUsername, UNCONFIGURED_USERNAME};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base address of WhatsApp click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Base address of Telegram links; also the fallback when no username is set.
pub const TELEGRAM_BASE_URL: &str = "https://t.me";

/// Characters escaped in message text: everything but `A-Za-z0-9 - _ . ! ~ * ' ( )`,
/// the same set browsers leave alone in `encodeURIComponent`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A fully formed URL that opens a chat in an external messaging app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactLink(String);

impl ContactLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContactLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build `https://wa.me/<digits>?text=<encoded message>`.
///
/// The message is percent-encoded; its content and length are not checked.
pub fn build_messaging_link(number: &NormalizedPhoneNumber, message: &str) -> ContactLink {
    ContactLink(format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        number.as_str(),
        utf8_percent_encode(message, MESSAGE_ENCODE_SET)
    ))
}

/// Build `https://t.me/<username>`, or bare `https://t.me` for an empty or
/// placeholder username.
pub fn build_chat_link(username: &str) -> ContactLink {
    if username.is_empty() || username == UNCONFIGURED_USERNAME {
        return ContactLink(TELEGRAM_BASE_URL.to_string());
    }

    ContactLink(format!("{}/{}", TELEGRAM_BASE_URL, username))
}

/// Messaging endpoints for one site owner.
#[derive(Debug, Clone)]
pub struct ContactLinks {
    phone: NormalizedPhoneNumber,
    telegram: TelegramUsername,
}

impl ContactLinks {
    pub fn new(phone: NormalizedPhoneNumber, telegram: TelegramUsername) -> Self {
        Self { phone, telegram }
    }

    pub fn phone(&self) -> &NormalizedPhoneNumber {
        &self.phone
    }

    /// WhatsApp link with the given prefilled message.
    pub fn whatsapp(&self, message: &str) -> ContactLink {
        build_messaging_link(&self.phone, message)
    }

    /// Telegram link, falling back to the bare base URL when unconfigured.
    pub fn telegram(&self) -> ContactLink {
        build_chat_link(self.telegram.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize;

    #[test]
    fn test_messaging_link_contains_number_and_encoded_text() {
        let number = normalize("091-18-24-47-94");
        let link = build_messaging_link(&number, "hi");
        assert_eq!(link.as_str(), "https://wa.me/2349118244794?text=hi");
        assert!(link.as_str().contains(number.as_str()));
    }

    #[test]
    fn test_messaging_link_encodes_spaces_and_symbols() {
        let number = normalize("1234567");
        let link = build_messaging_link(&number, "Robotics & IoT?");
        assert_eq!(
            link.as_str(),
            "https://wa.me/2341234567?text=Robotics%20%26%20IoT%3F"
        );
    }

    #[test]
    fn test_messaging_link_keeps_unreserved_marks() {
        let link = build_messaging_link(&normalize("1234567"), "Hi! (it's *me* ~ a_b-c.)");
        assert_eq!(
            link.as_str(),
            "https://wa.me/2341234567?text=Hi!%20(it's%20*me*%20~%20a_b-c.)"
        );
    }

    #[test]
    fn test_messaging_link_encodes_utf8() {
        let link = build_messaging_link(&normalize("1234567"), "I’m");
        assert_eq!(link.as_str(), "https://wa.me/2341234567?text=I%E2%80%99m");
    }

    #[test]
    fn test_messaging_link_empty_message() {
        let link = build_messaging_link(&normalize("1234567"), "");
        assert_eq!(link.as_str(), "https://wa.me/2341234567?text=");
    }

    #[test]
    fn test_chat_link_fallbacks() {
        assert_eq!(build_chat_link("your_telegram_username").as_str(), "https://t.me");
        assert_eq!(build_chat_link("").as_str(), "https://t.me");
        assert_eq!(build_chat_link("realuser").as_str(), "https://t.me/realuser");
    }

    #[test]
    fn test_contact_links_bundle() {
        let links = ContactLinks::new(
            normalize("091-18-24-47-94"),
            TelegramUsername::new("emanuel_tech").unwrap(),
        );
        assert_eq!(links.telegram().as_str(), "https://t.me/emanuel_tech");
        assert!(links.whatsapp("hello").as_str().starts_with("https://wa.me/2349118244794?text="));
    }

    #[test]
    fn test_contact_link_serializes_as_string() {
        let link = build_chat_link("realuser");
        assert_eq!(serde_json::to_string(&link).unwrap(), "\"https://t.me/realuser\"");
    }
}
