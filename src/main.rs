//! Site Links - Main entry point
//!
//! Wires the contact links into an in-memory model of the landing page, prints
//! the resulting element states as JSON on stdout, then keeps the facts/tips
//! rotation running until Ctrl-C.

use anyhow::Result;
use site_links::rotator::site_rotators;
use site_links::{wire_page, Config, InMemoryPage, MetricsTracker, RotationTask, UiSink};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; stdout carries the page snapshot)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let links = config.contact_links();
    info!(
        raw = %config.raw_phone_number,
        normalized = %links.phone(),
        "Configuration loaded"
    );

    let page = InMemoryPage::site_layout();
    let metrics = MetricsTracker::new();

    let report = wire_page(&page, &links, &metrics).await?;
    if !report.skipped.is_empty() {
        info!("Skipped {} slot(s) missing from the page", report.skipped.len());
    }

    println!("{}", serde_json::to_string_pretty(&page.snapshot())?);

    let sink = Arc::new(page) as Arc<dyn UiSink>;
    let task = RotationTask::new(
        sink,
        site_rotators()?,
        config.rotation_schedule(),
        metrics.clone(),
    );
    let handle = task.spawn();

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
    }

    handle.abort();
    info!("{}", metrics.summary());
    info!("Site Links shutdown complete");
    Ok(())
}
