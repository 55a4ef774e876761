//! Developer helper: show an HTML fragment in a new window.

use crate::error::UiResult;
use crate::ui::UiSink;
use async_trait::async_trait;
use tracing::warn;

/// Notice shown when the host refuses to open a window.
pub const POPUP_BLOCKED_MESSAGE: &str = "Popup blocked — allow popups.";

/// A freshly opened window.
pub trait PreviewWindow: Send {
    /// Replace the window's document and close it for writing.
    fn write_document(&mut self, document: &str);
}

/// Something that can open new windows; `None` means the host blocked it.
#[async_trait]
pub trait PreviewOpener: Send + Sync {
    async fn open(&self) -> Option<Box<dyn PreviewWindow>>;
}

/// What happened to a preview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOutcome {
    Opened,
    Blocked,
}

/// Wrap a fragment in a minimal HTML document. The title is inserted verbatim.
pub fn render_document(html: &str, title: Option<&str>) -> String {
    format!(
        "<!doctype html><html><head><title>{}</title></head><body>{}</body></html>",
        title.unwrap_or_default(),
        html
    )
}

/// Open a window and write the fragment into it, alerting through `sink` when blocked.
pub async fn open_preview(
    opener: &dyn PreviewOpener,
    sink: &dyn UiSink,
    html: &str,
    title: Option<&str>,
) -> UiResult<PreviewOutcome> {
    let Some(mut window) = opener.open().await else {
        warn!("Preview window blocked");
        sink.alert(POPUP_BLOCKED_MESSAGE).await?;
        return Ok(PreviewOutcome::Blocked);
    };

    window.write_document(&render_document(html, title));
    Ok(PreviewOutcome::Opened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::InMemoryPage;
    use std::sync::{Arc, Mutex};

    struct RecordingWindow(Arc<Mutex<Vec<String>>>);

    impl PreviewWindow for RecordingWindow {
        fn write_document(&mut self, document: &str) {
            self.0.lock().unwrap().push(document.to_string());
        }
    }

    struct Opener {
        allow: bool,
        written: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PreviewOpener for Opener {
        async fn open(&self) -> Option<Box<dyn PreviewWindow>> {
            if self.allow {
                Some(Box::new(RecordingWindow(self.written.clone())))
            } else {
                None
            }
        }
    }

    #[test]
    fn test_render_document() {
        assert_eq!(
            render_document("<p>hi</p>", Some("Demo")),
            "<!doctype html><html><head><title>Demo</title></head><body><p>hi</p></body></html>"
        );
        assert_eq!(
            render_document("", None),
            "<!doctype html><html><head><title></title></head><body></body></html>"
        );
    }

    #[tokio::test]
    async fn test_open_preview_writes_document() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let opener = Opener {
            allow: true,
            written: written.clone(),
        };
        let page = InMemoryPage::new();

        let outcome = open_preview(&opener, &page, "<b>x</b>", None).await.unwrap();

        assert_eq!(outcome, PreviewOutcome::Opened);
        assert_eq!(written.lock().unwrap().len(), 1);
        assert!(page.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_preview_alerts() {
        let opener = Opener {
            allow: false,
            written: Arc::new(Mutex::new(Vec::new())),
        };
        let page = InMemoryPage::new();

        let outcome = open_preview(&opener, &page, "<b>x</b>", Some("t")).await.unwrap();

        assert_eq!(outcome, PreviewOutcome::Blocked);
        assert_eq!(page.alerts(), vec![POPUP_BLOCKED_MESSAGE]);
    }
}
