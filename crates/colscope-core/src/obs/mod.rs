//! Observability: scope lifecycle telemetry (metrics) and sink abstractions.
//!
//! Builder, table, and dispatch code never touch `metrics` directly;
//! every counter update flows through `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;


// re-exports
pub use metrics::{EntityCounters, EventOps, EventReport};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
