// Messager - app/sink.rs
//
// Logging sink capability supplied by the host application.
// The catalog decides whether and at what severity to forward text; how the
// text is rendered or persisted is the sink's business.

use crate::core::model::Severity;
use crate::util::constants;
use std::sync::{Arc, Mutex};

/// Destination for emitted catalog messages.
pub trait LogSink: Send + Sync {
    /// Accept one resolved, non-blank message.
    fn log(&self, severity: Severity, text: &str);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, severity: Severity, text: &str) {
        (**self).log(severity, text)
    }
}

impl<S: LogSink + ?Sized> LogSink for &'static S {
    fn log(&self, severity: Severity, text: &str) {
        (**self).log(severity, text)
    }
}

/// Forwards messages to `tracing` under the `messager::emit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, severity: Severity, text: &str) {
        match severity {
            Severity::Severe => tracing::error!(target: constants::EMIT_TARGET, "{text}"),
            Severity::Warning => tracing::warn!(target: constants::EMIT_TARGET, "{text}"),
            Severity::Info => tracing::info!(target: constants::EMIT_TARGET, "{text}"),
            Severity::Debug => tracing::debug!(target: constants::EMIT_TARGET, "{text}"),
        }
    }
}

/// Records messages in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far, oldest first.
    pub fn records(&self) -> Vec<(Severity, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Remove and return everything logged so far.
    pub fn drain(&self) -> Vec<(Severity, String)> {
        match self.records.lock() {
            Ok(mut records) => std::mem::take(&mut *records),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn log(&self, severity: Severity, text: &str) {
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push((severity, text.to_string()));
    }
}
