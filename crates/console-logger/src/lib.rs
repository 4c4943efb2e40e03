//! Console Logger
//!
//! `log` backend for browser apps. Every record goes to the browser console
//! (stderr off-wasm) and the most recent entries are kept in a circular buffer
//! so the UI can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of entries kept in the ring buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// One captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Single-line form used for console output and the diagnostics panel
    pub fn line(&self, app_name: &str) -> String {
        format!("[{}] {} {} {}: {}", self.timestamp, app_name, self.level, self.target, self.message)
    }
}

/// Logger with a bounded history of recent entries
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.into(),
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Push an entry, evicting the oldest one when full
    fn push(&self, entry: LogEntry) {
        let Ok(mut buffer) = self.buffer.lock() else { return };
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    /// Snapshot of buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: chrono::Utc::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(entry.level, &entry.line(&self.app_name));
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Calling it twice returns the `log` error.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent entries of the global logger (empty before `init_logger`)
pub fn recent_entries() -> Vec<LogEntry> {
    LOGGER.get().map(ConsoleLogger::entries).unwrap_or_default()
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let logger = ConsoleLogger::new("Test", LevelFilter::Trace, 3);
        for i in 0..5 {
            record_at(&logger, Level::Info, &format!("msg {}", i));
        }

        let entries = logger.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "msg 2");
        assert_eq!(entries[2].message, "msg 4");
    }

    #[test]
    fn test_level_filter_skips_verbose_records() {
        let logger = ConsoleLogger::new("Test", LevelFilter::Warn, 10);
        record_at(&logger, Level::Debug, "hidden");
        record_at(&logger, Level::Error, "shown");

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
    }

    #[test]
    fn test_clear_and_line_format() {
        let logger = ConsoleLogger::new("Objects", LevelFilter::Info, 4);
        record_at(&logger, Level::Info, "loaded");
        let line = logger.entries()[0].line(logger.app_name());
        assert!(line.contains("Objects INFO test: loaded"));

        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }
}
