//! Run log for the transcoding pipeline.
//!
//! Entries are printed to stderr (stdout carries the confirmation line or,
//! with `--stdout`, the script itself) and the most recent ones are kept in
//! memory for the JSON run report.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Maximum log entries kept in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Indentation level for nested details
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Format the entry as a terminal line.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global run log
pub static RUN_LOG: Lazy<RunLog> = Lazy::new(RunLog::new);

/// Prints entries and remembers the most recent ones.
pub struct RunLog {
    quiet: AtomicBool,
    recent: Mutex<VecDeque<LogEntry>>,
}

impl RunLog {
    pub fn new() -> Self {
        Self {
            quiet: AtomicBool::new(false),
            recent: Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES)),
        }
    }

    /// Suppress info/success output. Warnings and errors always print.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Record an entry, printing it unless silenced.
    pub fn log(&self, entry: LogEntry) {
        let silenced =
            self.is_quiet() && matches!(entry.level, LogLevel::Info | LogLevel::Success);
        if !silenced {
            eprintln!("{}", entry.render());
        }

        // Poisoned locks still hold valid entries
        let mut recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
        if recent.len() == MAX_LOG_ENTRIES {
            recent.pop_front();
        }
        recent.push_back(entry);
    }

    /// Snapshot of the retained entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        let recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
        recent.iter().cloned().collect()
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    RUN_LOG.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    RUN_LOG.log(LogEntry::info(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_retained_in_order() {
        let log = RunLog::new();
        log.set_quiet(true);
        log.log(LogEntry::info("first"));
        log.log(LogEntry::warning("second"));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, LogLevel::Warning);
    }

    #[test]
    fn test_ring_is_bounded() {
        let log = RunLog::new();
        log.set_quiet(true);
        for i in 0..MAX_LOG_ENTRIES + 5 {
            log.log(LogEntry::info(format!("entry {i}")));
        }

        let entries = log.entries();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        assert_eq!(entries[0].message, "entry 5");
    }

    #[test]
    fn test_log_error_reaches_global_log() {
        log_error("input missing");

        let entries = RUN_LOG.entries();
        assert!(entries
            .iter()
            .any(|e| e.level == LogLevel::Error && e.message == "input missing"));
        assert_eq!(LogEntry::error("x").render(), "   ❌ x");
    }

    #[test]
    fn test_render_indent() {
        let line = LogEntry::success("done").with_indent(1).render();
        assert_eq!(line, "      ✓ done");
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_value(LogEntry::warning("careful")).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["message"], "careful");
        assert_eq!(json["indent"], 0);
    }
}
