//! Observability for the formatter: in-memory counters that also emit
//! `tracing` events.

pub mod metrics;

pub use metrics::MetricsTracker;
