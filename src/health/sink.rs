// src/health/sink.rs
use std::sync::Mutex;
use tracing::Level;

/// Destination for the classifier's diagnostic lines.
pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message)
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!("{}", message),
            Level::WARN => tracing::warn!("{}", message),
            Level::INFO => tracing::info!("{}", message),
            Level::DEBUG => tracing::debug!("{}", message),
            Level::TRACE => tracing::trace!("{}", message),
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// True if an entry at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lock()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // A poisoned log is still a readable log.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, level: Level, message: &str) {
        self.lock().push((level, message.to_string()));
    }
}
