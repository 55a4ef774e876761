//! In-memory counters for page wiring and rotation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters shared between the wiring pass and the rotation task.
#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    elements_written_total: Arc<AtomicU64>,
    slots_missing_total: Arc<AtomicU64>,
    rotation_ticks_total: Arc<AtomicU64>,
    rotations_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a successful slot write.
    pub fn track_slot_written(&self, slot: &str, elements: usize) {
        self.elements_written_total
            .fetch_add(elements as u64, Ordering::Relaxed);
        tracing::trace!(slot = %slot, elements = elements, "Slot written");
    }

    /// Track a slot that matched nothing on the page.
    pub fn track_slot_missing(&self, slot: &str) {
        self.slots_missing_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(slot = %slot, "Slot missing");
    }

    /// Track one scheduler tick and how many rotators it advanced.
    pub fn track_rotation_tick(&self, advanced: usize) {
        self.rotation_ticks_total.fetch_add(1, Ordering::Relaxed);
        self.rotations_total
            .fetch_add(advanced as u64, Ordering::Relaxed);
        tracing::trace!(advanced = advanced, "Rotation tick");
    }

    /// Total elements written by wiring and rotation.
    pub fn elements_written_total(&self) -> u64 {
        self.elements_written_total.load(Ordering::Relaxed)
    }

    /// Total slot lookups that found nothing.
    pub fn slots_missing_total(&self) -> u64 {
        self.slots_missing_total.load(Ordering::Relaxed)
    }

    pub fn rotation_ticks_total(&self) -> u64 {
        self.rotation_ticks_total.load(Ordering::Relaxed)
    }

    pub fn rotations_total(&self) -> u64 {
        self.rotations_total.load(Ordering::Relaxed)
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "elements written: {}, slots missing: {}, rotation ticks: {}, rotations: {}",
            self.elements_written_total(),
            self.slots_missing_total(),
            self.rotation_ticks_total(),
            self.rotations_total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = MetricsTracker::new();
        metrics.track_slot_written(".whatsapp-link", 3);
        metrics.track_slot_missing("#wh-home");
        metrics.track_rotation_tick(2);
        metrics.track_rotation_tick(1);

        assert_eq!(metrics.elements_written_total(), 3);
        assert_eq!(metrics.slots_missing_total(), 1);
        assert_eq!(metrics.rotation_ticks_total(), 2);
        assert_eq!(metrics.rotations_total(), 3);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = MetricsTracker::new();
        let clone = metrics.clone();
        clone.track_slot_missing("#x");
        assert_eq!(metrics.slots_missing_total(), 1);
        assert!(metrics.summary().contains("slots missing: 1"));
    }
}
