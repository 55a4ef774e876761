use async_trait::async_trait;
use site_links::error::{UiError, UiResult};
use site_links::ui::{Slot, Transition, UiSink};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// A call made against the sink, in order.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Href(Slot, String),
    Text(Slot, String),
    Transition(Slot, Transition),
    Alert(String),
}

/// Mock UI sink that records every call.
///
/// Every slot is present unless marked missing. Slots marked failing, or every
/// slot once `fail_all` is set, return `UiError::Other`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockUiSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
    missing: Arc<Mutex<HashSet<Slot>>>,
    failing: Arc<Mutex<HashSet<Slot>>>,
    fail_all: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockUiSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_missing(&self, slot: Slot) {
        self.missing.lock().unwrap().insert(slot);
    }

    pub fn mark_failing(&self, slot: Slot) {
        self.failing.lock().unwrap().insert(slot);
    }

    pub fn set_fail_all(&self, fail: bool) {
        *self.fail_all.lock().unwrap() = fail;
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts written to `slot`, oldest first.
    pub fn texts_for(&self, slot: &Slot) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SinkCall::Text(s, text) if &s == slot => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Last href written to `slot`.
    pub fn href_for(&self, slot: &Slot) -> Option<String> {
        self.calls().into_iter().rev().find_map(|call| match call {
            SinkCall::Href(s, href) if &s == slot => Some(href),
            _ => None,
        })
    }

    fn check(&self, slot: &Slot) -> UiResult<()> {
        if *self.fail_all.lock().unwrap() || self.failing.lock().unwrap().contains(slot) {
            return Err(UiError::Other("sink offline".to_string()));
        }
        if self.missing.lock().unwrap().contains(slot) {
            return Err(UiError::SlotNotFound(slot.clone()));
        }
        Ok(())
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UiSink for MockUiSink {
    async fn set_href(&self, slot: &Slot, href: &str) -> UiResult<usize> {
        self.check(slot)?;
        self.record(SinkCall::Href(slot.clone(), href.to_string()));
        Ok(1)
    }

    async fn set_text(&self, slot: &Slot, text: &str) -> UiResult<usize> {
        self.check(slot)?;
        self.record(SinkCall::Text(slot.clone(), text.to_string()));
        Ok(1)
    }

    async fn apply_transition(&self, slot: &Slot, transition: Transition) -> UiResult<usize> {
        self.check(slot)?;
        self.record(SinkCall::Transition(slot.clone(), transition));
        Ok(1)
    }

    async fn alert(&self, message: &str) -> UiResult<()> {
        self.record(SinkCall::Alert(message.to_string()));
        Ok(())
    }
}
