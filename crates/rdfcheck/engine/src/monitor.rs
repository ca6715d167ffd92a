//! Progress monitors: passive observers of a generation run
//!
//! Monitors are push-notified of lifecycle events and return nothing.
//! Registration is set-like, keyed by monitor identity (the `Arc`
//! allocation), so registering the same monitor twice notifies it once.

use rdfcheck_types::{GenerationKind, SourceUri};
use std::sync::Arc;

/// Observer of suite- and source-level generation lifecycle events
///
/// All methods have empty default bodies; implement only the events of
/// interest. Methods take `&self`: implementations that accumulate state
/// use interior mutability.
pub trait GenerationMonitor: Send + Sync {
    /// A generation run started for `source`, covering `schema_count` schemas
    fn generation_started(&self, source: &SourceUri, schema_count: usize) {
        let _ = (source, schema_count);
    }

    /// Generation of one kind started for a source
    fn source_generation_started(&self, source: &SourceUri, kind: GenerationKind) {
        let _ = (source, kind);
    }

    /// Generation of one kind finished for a source, yielding `test_count` cases
    fn source_generation_executed(
        &self,
        source: &SourceUri,
        kind: GenerationKind,
        test_count: usize,
    ) {
        let _ = (source, kind, test_count);
    }

    /// The run finished (also fired after a canceled run)
    fn generation_finished(&self) {}
}

/// Identity-deduplicated collection of registered monitors
///
/// Notification order is registration order. Removal of an unregistered
/// monitor is a no-op.
#[derive(Clone, Default)]
pub struct MonitorSet {
    monitors: Vec<Arc<dyn GenerationMonitor>>,
}

impl MonitorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a monitor; a second registration of the same instance is ignored
    pub fn add(&mut self, monitor: Arc<dyn GenerationMonitor>) {
        if !self.monitors.iter().any(|m| Arc::ptr_eq(m, &monitor)) {
            self.monitors.push(monitor);
        }
    }

    /// Unregister a monitor by identity
    pub fn remove(&mut self, monitor: &Arc<dyn GenerationMonitor>) {
        self.monitors.retain(|m| !Arc::ptr_eq(m, monitor));
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    pub(crate) fn notify_started(&self, source: &SourceUri, schema_count: usize) {
        for monitor in &self.monitors {
            monitor.generation_started(source, schema_count);
        }
    }

    pub(crate) fn notify_source_started(&self, source: &SourceUri, kind: GenerationKind) {
        for monitor in &self.monitors {
            monitor.source_generation_started(source, kind);
        }
    }

    pub(crate) fn notify_source_executed(
        &self,
        source: &SourceUri,
        kind: GenerationKind,
        test_count: usize,
    ) {
        for monitor in &self.monitors {
            monitor.source_generation_executed(source, kind, test_count);
        }
    }

    pub(crate) fn notify_finished(&self) {
        for monitor in &self.monitors {
            monitor.generation_finished();
        }
    }
}

impl std::fmt::Debug for MonitorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorSet")
            .field("len", &self.monitors.len())
            .finish()
    }
}
