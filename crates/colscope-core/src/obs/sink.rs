//! Metrics sink boundary.
//!
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.
//! This module is the only bridge between scope logic and the global
//! metrics state.
use crate::obs::metrics;
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent<'a> {
    SetBuilt {
        scopes: u64,
        duplicates: u64,
    },
    SetRejected {
        bad_scopes: u64,
    },
    Attached {
        entity_path: &'static str,
        installed: u64,
        overridden: u64,
    },
    ScopeCalled {
        entity_path: &'static str,
        scope: &'a str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent<'_>);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent<'_>) {
        match event {
            MetricsEvent::SetBuilt { scopes, duplicates } => {
                metrics::with_state_mut(|m| {
                    m.ops.sets_built = m.ops.sets_built.saturating_add(1);
                    m.ops.scopes_declared = m.ops.scopes_declared.saturating_add(scopes);
                    m.ops.duplicate_scopes = m.ops.duplicate_scopes.saturating_add(duplicates);
                });
            }

            MetricsEvent::SetRejected { bad_scopes } => {
                metrics::with_state_mut(|m| {
                    m.ops.sets_rejected = m.ops.sets_rejected.saturating_add(1);
                    m.ops.bad_scopes = m.ops.bad_scopes.saturating_add(bad_scopes);
                });
            }

            MetricsEvent::Attached {
                entity_path,
                installed,
                overridden,
            } => {
                metrics::with_state_mut(|m| {
                    m.ops.attachments = m.ops.attachments.saturating_add(1);
                    m.ops.scopes_installed = m.ops.scopes_installed.saturating_add(installed);
                    m.ops.scopes_overridden = m.ops.scopes_overridden.saturating_add(overridden);

                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    entry.attachments = entry.attachments.saturating_add(1);
                    entry.scopes_installed = entry.scopes_installed.saturating_add(installed);
                    entry.scopes_overridden = entry.scopes_overridden.saturating_add(overridden);
                });
            }

            MetricsEvent::ScopeCalled { entity_path, scope } => {
                metrics::with_state_mut(|m| {
                    m.ops.scope_calls = m.ops.scope_calls.saturating_add(1);

                    let entry = m.entities.entry(entity_path.to_string()).or_default();
                    let calls = entry.scope_calls.entry(scope.to_string()).or_default();
                    *calls = calls.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent<'_>) {
    // clone out of the slot so a sink may itself install an override
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's metrics state.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
