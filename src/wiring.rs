//! One-shot pass that fills the page's contact slots.
//!
//! Slots missing from the page are skipped. Any other sink failure aborts the pass.

use crate::content::{course_message, COURSES, GENERIC_MESSAGE, HOME_MESSAGE};
use crate::error::{UiError, UiResult};
use crate::links::ContactLinks;
use crate::observability::MetricsTracker;
use crate::ui::{Slot, UiSink};
use tracing::{debug, info};

/// Outcome of [`wire_page`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WiringReport {
    /// Slots that matched at least one element.
    pub written: Vec<Slot>,
    /// Slots that matched nothing and were skipped.
    pub skipped: Vec<Slot>,
}

enum Write {
    Href(String),
    Text(String),
}

/// Populate phone display, home buttons, course buttons and class-wide links.
pub async fn wire_page(
    sink: &dyn UiSink,
    links: &ContactLinks,
    metrics: &MetricsTracker,
) -> UiResult<WiringReport> {
    let mut report = WiringReport::default();

    let display_phone = links.phone().display();
    let generic = links.whatsapp(GENERIC_MESSAGE);
    let home = links.whatsapp(HOME_MESSAGE);
    let telegram = links.telegram();

    let mut writes = vec![
        (Slot::class("display-phone"), Write::Text(display_phone)),
        (Slot::class("whatsapp-link"), Write::Href(generic.into_inner())),
        (Slot::id("wh-home"), Write::Href(home.into_inner())),
        (Slot::id("tg-home"), Write::Href(telegram.as_str().to_string())),
    ];
    for (id, course) in COURSES {
        let link = links.whatsapp(&course_message(course));
        writes.push((Slot::id(*id), Write::Href(link.into_inner())));
    }
    writes.push((Slot::class("telegram-link"), Write::Href(telegram.into_inner())));

    for (slot, write) in writes {
        apply(sink, &slot, write, metrics, &mut report).await?;
    }

    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "Page wiring complete"
    );

    Ok(report)
}

async fn apply(
    sink: &dyn UiSink,
    slot: &Slot,
    write: Write,
    metrics: &MetricsTracker,
    report: &mut WiringReport,
) -> UiResult<()> {
    let result = match write {
        Write::Href(href) => sink.set_href(slot, &href).await,
        Write::Text(text) => sink.set_text(slot, &text).await,
    };

    match result {
        Ok(count) => {
            metrics.track_slot_written(&slot.to_string(), count);
            report.written.push(slot.clone());
            Ok(())
        }
        Err(UiError::SlotNotFound(_)) => {
            debug!(slot = %slot, "Slot not on page, skipping");
            metrics.track_slot_missing(&slot.to_string());
            report.skipped.push(slot.clone());
            Ok(())
        }
        Err(e) => Err(e),
    }
}
