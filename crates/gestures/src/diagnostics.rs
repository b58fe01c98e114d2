//! # Diagnostics
//!
//! Narrow logging interface used by the recognizer.
//!
//! ## Classes
//! - `DiagnosticSink`: what the core logs through
//! - `TracingSink`: forwards to `tracing` (default)
//! - `MemorySink`: bounded in-memory log, for tests and debug overlays
//! - `NullSink`: drops everything

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Log level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// Destination for recognizer diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

// ============================================================================
// TracingSink
// ============================================================================

/// Forwards diagnostics to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "eustress_gestures", "{message}"),
            LogLevel::Info => tracing::info!(target: "eustress_gestures", "{message}"),
            LogLevel::Warning => tracing::warn!(target: "eustress_gestures", "{message}"),
            LogLevel::Error => tracing::error!(target: "eustress_gestures", "{message}"),
        }
    }
}

// ============================================================================
// NullSink
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

// ============================================================================
// MemorySink
// ============================================================================

/// Log entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps the most recent `max_entries` entries at or above `min_level`.
#[derive(Debug)]
pub struct MemorySink {
    entries: Mutex<VecDeque<LogEntry>>,
    max_entries: usize,
    min_level: LogLevel,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(256)
    }
}

impl MemorySink {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            max_entries,
            min_level: LogLevel::Debug,
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Number of entries logged at exactly `level`.
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.lock().iter().filter(|e| e.level == level).count()
    }

    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|e| e.level == level && e.message.contains(needle))
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level || self.max_entries == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        entries.push_back(LogEntry {
            level,
            message: message.to_string(),
        });
        while entries.len() > self.max_entries {
            entries.pop_front();
        }
    }
}
