//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and mirrors each one to the browser console (stderr off-WASM).

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// Records kept in memory before the oldest is dropped
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: LevelFilter::Info, capacity: 500 }
    }
}

/// One formatted log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    app_name: String,
    config: LoggerConfig,
    buffer: Mutex<VecDeque<LogRecord>>,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, config: LoggerConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            app_name: app_name.into(),
            config: LoggerConfig { capacity, ..config },
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Oldest first
    pub fn recent(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogRecord>> {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, record: LogRecord) {
        let mut buffer = self.lock();
        if buffer.len() == self.config.capacity {
            buffer.pop_front();
        }
        buffer.push_back(record);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogRecord {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        sink::emit(&self.app_name, &entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::LogRecord;
    use log::Level;
    use wasm_bindgen::JsValue;

    pub fn emit(app_name: &str, record: &LogRecord) {
        let line = JsValue::from_str(&format!("{} {}", app_name, record));
        match record.level {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::LogRecord;

    pub fn emit(app_name: &str, record: &LogRecord) {
        eprintln!("{} {}", app_name, record);
    }
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Only the first call wins.
pub fn init_logger(app_name: &str, config: LoggerConfig) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, config));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(logger)
}

/// The installed logger, if `init_logger` has run
pub fn logger() -> Option<&'static RollingLogger> {
    LOGGER.get()
}
