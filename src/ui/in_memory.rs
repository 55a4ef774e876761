//! In-memory page model implementing [`UiSink`].
//!
//! Holds a flat list of elements in document order. Cheap to clone; clones
//! share the same elements.

use super::{Slot, Transition, UiSink};
use crate::content::COURSES;
use crate::error::{UiError, UiResult};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// State of one element on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub opacity: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
}

impl ElementSnapshot {
    fn new(id: Option<&str>, classes: &[&str]) -> Self {
        Self {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            href: None,
            text: None,
            opacity: 1.0,
            transform: None,
        }
    }

    fn matches(&self, slot: &Slot) -> bool {
        match slot {
            Slot::Id(id) => self.id.as_deref() == Some(id.as_str()),
            Slot::Class(class) => self.classes.iter().any(|c| c == class),
        }
    }
}

/// A page held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPage {
    elements: Arc<RwLock<Vec<ElementSnapshot>>>,
    alerts: Arc<RwLock<Vec<String>>>,
}

impl InMemoryPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element addressed by id.
    pub fn with_id(self, id: &str) -> Self {
        self.push(ElementSnapshot::new(Some(id), &[]));
        self
    }

    /// Add an element carrying the given classes and no id.
    pub fn with_classes(self, classes: &[&str]) -> Self {
        self.push(ElementSnapshot::new(None, classes));
        self
    }

    /// The slots present on the Emanuel's Tech World landing page.
    pub fn site_layout() -> Self {
        let mut page = Self::new()
            .with_classes(&["display-phone"])
            .with_id("wh-home")
            .with_id("tg-home")
            .with_id("rotator-fact")
            .with_id("rotator-tip")
            .with_classes(&["btn-neon", "whatsapp-link"])
            .with_classes(&["btn-neon", "telegram-link"]);

        for (id, _) in COURSES {
            page = page.with_id(id);
        }

        page.with_classes(&["display-phone"])
            .with_classes(&["whatsapp-link"])
            .with_classes(&["telegram-link"])
    }

    /// Copy of every element in document order.
    pub fn snapshot(&self) -> Vec<ElementSnapshot> {
        match self.elements.read() {
            Ok(elements) => elements.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Elements matching `slot`, in document order.
    pub fn find(&self, slot: &Slot) -> Vec<ElementSnapshot> {
        self.snapshot()
            .into_iter()
            .filter(|element| element.matches(slot))
            .collect()
    }

    /// Messages passed to [`UiSink::alert`], oldest first.
    pub fn alerts(&self) -> Vec<String> {
        match self.alerts.read() {
            Ok(alerts) => alerts.clone(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, element: ElementSnapshot) {
        if let Ok(mut elements) = self.elements.write() {
            elements.push(element);
        }
    }

    fn update<F>(&self, slot: &Slot, mut apply: F) -> UiResult<usize>
    where
        F: FnMut(&mut ElementSnapshot),
    {
        let mut elements = self
            .elements
            .write()
            .map_err(|e| UiError::Other(format!("page lock poisoned: {}", e)))?;

        let mut touched = 0;
        for element in elements.iter_mut().filter(|element| element.matches(slot)) {
            apply(element);
            touched += 1;
        }

        if touched == 0 {
            return Err(UiError::SlotNotFound(slot.clone()));
        }

        Ok(touched)
    }
}

#[async_trait]
impl UiSink for InMemoryPage {
    async fn set_href(&self, slot: &Slot, href: &str) -> UiResult<usize> {
        self.update(slot, |element| element.href = Some(href.to_string()))
    }

    async fn set_text(&self, slot: &Slot, text: &str) -> UiResult<usize> {
        self.update(slot, |element| element.text = Some(text.to_string()))
    }

    async fn apply_transition(&self, slot: &Slot, transition: Transition) -> UiResult<usize> {
        self.update(slot, |element| {
            element.opacity = transition.target_opacity();
            element.transform = Some(transition.target_transform().to_string());
        })
    }

    async fn alert(&self, message: &str) -> UiResult<()> {
        let mut alerts = self
            .alerts
            .write()
            .map_err(|e| UiError::Other(format!("alert lock poisoned: {}", e)))?;
        alerts.push(message.to_string());
        Ok(())
    }
}
