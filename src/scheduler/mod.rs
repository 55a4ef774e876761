//! Repeating task that drives the rotators.
//!
//! Each tick fades every present rotator slot out, advances its list, waits
//! for the fade, then writes the new text and fades back in. The task runs
//! until its handle is aborted or the runtime shuts down.

use crate::error::{UiError, UiResult};
use crate::observability::MetricsTracker;
use crate::rotator::Rotator;
use crate::ui::{Transition, UiSink};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Default time between rotation ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5200);

/// Default delay between fading out and swapping the text.
pub const DEFAULT_FADE: Duration = Duration::from_millis(700);

/// Tick timing. `fade` must be shorter than `interval` so ticks never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSchedule {
    pub interval: Duration,
    pub fade: Duration,
}

impl Default for RotationSchedule {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            fade: DEFAULT_FADE,
        }
    }
}

/// Rotators plus the sink they write to.
pub struct RotationTask {
    sink: Arc<dyn UiSink>,
    rotators: Vec<Rotator>,
    schedule: RotationSchedule,
    metrics: MetricsTracker,
}

impl RotationTask {
    pub fn new(
        sink: Arc<dyn UiSink>,
        rotators: Vec<Rotator>,
        schedule: RotationSchedule,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            sink,
            rotators,
            schedule,
            metrics,
        }
    }

    pub fn rotators(&self) -> &[Rotator] {
        &self.rotators
    }

    /// Run one rotation step and return how many rotators advanced.
    ///
    /// A rotator whose slot is missing keeps its position. When the sink fails,
    /// no further rotators are faded out, but every rotator already faded out
    /// is still faded back in before the first error is returned.
    pub async fn tick(&mut self) -> UiResult<usize> {
        let mut pending = Vec::with_capacity(self.rotators.len());
        let mut first_error = None;

        for rotator in &mut self.rotators {
            let slot = rotator.slot().clone();
            match self.sink.apply_transition(&slot, Transition::FadeOut).await {
                Ok(_) => {
                    let text = rotator.list_mut().rotate();
                    pending.push((slot, text));
                }
                Err(UiError::SlotNotFound(_)) => {
                    debug!(slot = %slot, "Rotator slot not on page");
                    self.metrics.track_slot_missing(&slot.to_string());
                }
                Err(e) => {
                    first_error = Some(e);
                    break;
                }
            }
        }

        if !pending.is_empty() {
            tokio::time::sleep(self.schedule.fade).await;
        }

        for (slot, text) in &pending {
            match self.sink.set_text(slot, text).await {
                Ok(count) => {
                    self.metrics.track_slot_written(&slot.to_string(), count);
                    info!(slot = %slot, text = %text, "Rotated");
                }
                Err(UiError::SlotNotFound(_)) => {
                    debug!(slot = %slot, "Rotator slot removed during fade");
                    self.metrics.track_slot_missing(&slot.to_string());
                    continue;
                }
                Err(e) => {
                    warn!(slot = %slot, "Rotator text update failed: {}", e);
                    first_error.get_or_insert(e);
                }
            }

            // Never leave a slot faded out, even if its text could not be swapped
            match self.sink.apply_transition(slot, Transition::FadeIn).await {
                Ok(_) | Err(UiError::SlotNotFound(_)) => {}
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        self.metrics.track_rotation_tick(pending.len());
        Ok(pending.len())
    }

    /// Tick immediately, then once per interval, forever.
    pub async fn run(mut self) {
        let mut interval = tokio::time::interval(self.schedule.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if let Err(e) = self.tick().await {
                warn!("Rotation tick failed: {}", e);
            }
        }
    }

    /// Run on the current runtime. Abort the handle to stop.
    pub fn spawn(self) -> JoinHandle<()> {
        let handle = tokio::spawn(self.run());
        info!("Rotation task started");
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::RotationList;
    use crate::ui::{InMemoryPage, Slot};

    fn rotator(id: &str, items: &[&str]) -> Rotator {
        let list = RotationList::new(items.iter().map(|s| s.to_string()).collect()).unwrap();
        Rotator::new(Slot::id(id), list)
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_swaps_text_and_fades_in() {
        let page = InMemoryPage::new().with_id("rotator-fact");
        let mut task = RotationTask::new(
            Arc::new(page.clone()),
            vec![rotator("rotator-fact", &["a", "b"])],
            RotationSchedule::default(),
            MetricsTracker::new(),
        );

        assert_eq!(task.tick().await.unwrap(), 1);

        let fact = &page.find(&Slot::id("rotator-fact"))[0];
        assert_eq!(fact.text.as_deref(), Some("a"));
        assert_eq!(fact.opacity, 1.0);
        assert_eq!(task.rotators()[0].list().index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_slot_does_not_advance() {
        let page = InMemoryPage::new().with_id("rotator-tip");
        let metrics = MetricsTracker::new();
        let mut task = RotationTask::new(
            Arc::new(page),
            vec![
                rotator("rotator-fact", &["a", "b"]),
                rotator("rotator-tip", &["x", "y"]),
            ],
            RotationSchedule::default(),
            metrics.clone(),
        );

        assert_eq!(task.tick().await.unwrap(), 1);
        assert_eq!(task.rotators()[0].list().index(), 0);
        assert_eq!(task.rotators()[1].list().index(), 1);
        assert_eq!(metrics.slots_missing_total(), 1);
    }

    #[test]
    fn test_default_schedule() {
        let schedule = RotationSchedule::default();
        assert_eq!(schedule.interval, Duration::from_millis(5200));
        assert_eq!(schedule.fade, Duration::from_millis(700));
        assert!(schedule.fade < schedule.interval);
    }
}
