//! Status reporting.
//!
//! Parsers report recoverable problems through a [`StatusSink`] injected via
//! the [`crate::context::Corpus`] rather than through a process-wide logger.
//! [`TracingSink`] forwards events to `tracing`; [`CollectingSink`] keeps them
//! in memory so callers can inspect or print what happened during a load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Severity of a status event, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Progress,
    Info,
    Warning,
    Error,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusLevel::Progress => "progress",
            StatusLevel::Info => "info",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// One reported event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    pub level: StatusLevel,
    /// Component that raised the event, e.g. `DataTypeReferencePersistence`
    pub component: String,
    /// Operation within the component, e.g. `from_data`
    pub operation: String,
    pub message: String,
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} | {}",
            self.level, self.component, self.message, self.operation
        )
    }
}

/// Receiver of status events. Must be safe to share across threads.
pub trait StatusSink: Send + Sync {
    fn report(&self, event: StatusEvent);
}

/// Forwards events to `tracing` with `component` and `operation` fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn report(&self, event: StatusEvent) {
        let StatusEvent {
            level,
            component,
            operation,
            message,
        } = event;
        match level {
            StatusLevel::Error => tracing::error!(%component, %operation, "{}", message),
            StatusLevel::Warning => tracing::warn!(%component, %operation, "{}", message),
            StatusLevel::Info => tracing::info!(%component, %operation, "{}", message),
            StatusLevel::Progress => tracing::debug!(%component, %operation, "{}", message),
        }
    }
}

/// Buffers events in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<StatusEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events collected so far
    pub fn events(&self) -> Vec<StatusEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of collected events at exactly `level`
    pub fn count(&self, level: StatusLevel) -> usize {
        self.events().iter().filter(|e| e.level == level).count()
    }

    /// Remove and return all collected events
    pub fn drain(&self) -> Vec<StatusEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl StatusSink for CollectingSink {
    fn report(&self, event: StatusEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
