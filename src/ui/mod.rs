//! Output capability for the page being populated.
//!
//! Formatter code never touches markup directly. It addresses elements by
//! [`Slot`] and writes through a [`UiSink`], so the same wiring runs against a
//! real page bridge or the [`InMemoryPage`] used by the binary and tests.

pub mod in_memory;

pub use in_memory::{ElementSnapshot, InMemoryPage};

use crate::error::UiResult;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// Selector for one or more elements on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "by", content = "name", rename_all = "lowercase")]
pub enum Slot {
    /// A single element by `id` attribute.
    Id(String),
    /// Every element carrying the class name.
    Class(String),
}

impl Slot {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Class(class) => write!(f, ".{}", class),
        }
    }
}

/// Visual transition applied around a text swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Fade to transparent and lift slightly.
    FadeOut,
    /// Return to full opacity at rest position.
    FadeIn,
}

impl Transition {
    /// Opacity once the transition has finished.
    pub fn target_opacity(self) -> f32 {
        match self {
            Self::FadeOut => 0.0,
            Self::FadeIn => 1.0,
        }
    }

    /// CSS transform once the transition has finished.
    pub fn target_transform(self) -> &'static str {
        match self {
            Self::FadeOut => "translateY(-8px) scale(0.98)",
            Self::FadeIn => "translateY(0) scale(1)",
        }
    }
}

/// Write access to the page.
///
/// Every update returns how many elements it touched. A slot that matches
/// nothing yields `UiError::SlotNotFound`; callers treat that as "skip".
#[async_trait]
pub trait UiSink: Send + Sync {
    /// Set the `href` attribute of every element matching `slot`.
    async fn set_href(&self, slot: &Slot, href: &str) -> UiResult<usize>;

    /// Replace the text content of every element matching `slot`.
    async fn set_text(&self, slot: &Slot, text: &str) -> UiResult<usize>;

    /// Start a visual transition on every element matching `slot`.
    async fn apply_transition(&self, slot: &Slot, transition: Transition) -> UiResult<usize>;

    /// Show a blocking notice to the visitor.
    async fn alert(&self, message: &str) -> UiResult<()>;
}
