//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to a sink (stderr, the browser console, ...).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// One formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    pub fn now(level: Level, target: &str, message: String) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level,
            target: target.to_string(),
            message,
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Fixed-capacity buffer; the oldest line is dropped when full
#[derive(Debug, Clone)]
pub struct LogRing {
    capacity: usize,
    lines: VecDeque<LogLine>,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }
}

pub type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

struct RollingLogger {
    level: LevelFilter,
    ring: Mutex<LogRing>,
    sink: Sink,
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine::now(record.level(), record.target(), record.args().to_string());
        (self.sink)(&line);
        self.ring
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Install the rolling logger as the global `log` backend
///
/// Fails if any logger was installed before.
pub fn init_logger(capacity: usize, level: LevelFilter, sink: Sink) -> Result<(), SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger {
        level,
        ring: Mutex::new(LogRing::new(capacity)),
        sink,
    }));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Sink writing each line to stderr
pub fn stderr_sink() -> Sink {
    Box::new(|line: &LogLine| eprintln!("{}", line))
}

/// Lines buffered by the installed logger, oldest first
pub fn recent() -> Vec<LogLine> {
    LOGGER
        .get()
        .map(|logger| {
            logger
                .ring
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .snapshot()
        })
        .unwrap_or_default()
}
