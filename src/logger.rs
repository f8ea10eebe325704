//! Custom logging module.
//!
//! This module provides a logger implementation that captures log entries
//! into a shared in-memory buffer, rendered by the debug overlay. The
//! terminal is owned by the UI, so nothing may write to stdout/stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::{Arc, Mutex};

/// Retain at most this many entries; older ones are dropped.
const MAX_ENTRIES: usize = 500;

/// Shared handle to the captured log entries.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        LogBuffer::default()
    }

    /// Snapshot of the captured entries, oldest first.
    ///
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(_) => vec![],
        }
    }

    fn push(&self, entry: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
            if entries.len() > MAX_ENTRIES {
                let excess = entries.len() - MAX_ENTRIES;
                entries.drain(..excess);
            }
        }
        // A poisoned lock just drops the entry; logging is non-critical.
    }
}

/// Format a log record into a string for display.
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that captures entries into a `LogBuffer`.
///
struct BufferLogger {
    buffer: LogBuffer,
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

/// Install the buffer logger as the global logger and return the shared
/// buffer for the debug overlay.
///
pub fn init() -> Result<LogBuffer, SetLoggerError> {
    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(BufferLogger {
        buffer: buffer.clone(),
    }))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_caps_entries() {
        let buffer = LogBuffer::new();
        for i in 0..MAX_ENTRIES + 10 {
            buffer.push(format!("entry {}", i));
        }
        let entries = buffer.entries();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0], "entry 10");
    }

    #[test]
    fn test_format_log_contains_level_and_message() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("hello"))
                .level(Level::Info)
                .build(),
        );
        assert!(formatted.contains("INFO"));
        assert!(formatted.contains("hello"));
    }
}
