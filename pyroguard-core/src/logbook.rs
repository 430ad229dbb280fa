//! Append-only operator log
//!
//! The logbook is the authoritative event stream shown to the operator:
//! append-only, never mutated or truncated, ids strictly increasing.
//! Growth is unbounded, which is acceptable for a single-session demo rig;
//! [`Logbook::len`] is exposed so a consumer can cap it if needed.
//!
//! Every append is mirrored to the `log` facade so the entries also reach
//! whatever logger the host application installs.

use crate::time::Timestamp;

/// Severity / category of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Routine workflow progress
    Info,
    /// Risk detected, escalation underway
    Warning,
    /// Fire confirmed
    Alert,
    /// Positive outcome (analysis negative, alerts dispatched)
    Success,
}

impl LogLevel {
    /// Short name for display
    pub const fn name(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Alert => "alert",
            LogLevel::Success => "success",
        }
    }
}

/// One timestamped operator log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Locally unique, strictly increasing id
    pub id: u64,
    /// Wall-clock time of the append
    pub timestamp: Timestamp,
    /// Operator-facing message
    pub message: String,
    /// Entry category
    pub level: LogLevel,
}

/// Append-only event stream for operator visibility
#[derive(Default)]
pub struct Logbook {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl Logbook {
    /// Create an empty logbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, assigning the next id
    pub fn append(&mut self, timestamp: Timestamp, level: LogLevel, message: impl Into<String>) {
        let message = message.into();

        match level {
            LogLevel::Alert => log::error!("{message}"),
            LogLevel::Warning => log::warn!("{message}"),
            LogLevel::Info | LogLevel::Success => log::info!("{message}"),
        }

        self.entries.push(LogEntry {
            id: self.next_id,
            timestamp,
            message,
            level,
        });
        self.next_id += 1;
    }

    /// Append an info entry
    pub fn info(&mut self, timestamp: Timestamp, message: impl Into<String>) {
        self.append(timestamp, LogLevel::Info, message);
    }

    /// Append a warning entry
    pub fn warning(&mut self, timestamp: Timestamp, message: impl Into<String>) {
        self.append(timestamp, LogLevel::Warning, message);
    }

    /// Append an alert entry
    pub fn alert(&mut self, timestamp: Timestamp, message: impl Into<String>) {
        self.append(timestamp, LogLevel::Alert, message);
    }

    /// Append a success entry
    pub fn success(&mut self, timestamp: Timestamp, message: impl Into<String>) {
        self.append(timestamp, LogLevel::Success, message);
    }

    /// All entries in append order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the logbook is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }
}
