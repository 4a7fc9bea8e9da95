//! Severity-tagged leveled logging.
//!
//! This module provides [`Logger`], a small console logger that tags each
//! record with a fixed four-letter severity marker and a wall-clock
//! timestamp, and drops records below a configured threshold. The validation
//! chain does not depend on it.

use std::fmt::Debug;
use std::io::{self, Write};

use chrono::Local;

/// Log severity, ordered from most verbose to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Verbose tracing output.
    Trace,
    /// Debugging output.
    Debug,
    /// Informational output.
    Info,
    /// Something looks wrong but execution continues.
    Warn,
    /// An operation failed.
    Error,
    /// The process cannot continue.
    Fatal,
}

impl LogLevel {
    /// The fixed four-letter tag written in front of each record.
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "VBOS",
            LogLevel::Debug => "DBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERRR",
            LogLevel::Fatal => "FTAL",
        }
    }
}

/// A leveled logger writing `TAG HH:MM:SS - message` lines.
///
/// Records below the configured threshold are dropped. The default
/// constructor writes to stderr; [`with_writer`](Logger::with_writer)
/// accepts any [`io::Write`], which is what the tests use.
///
/// # Example
///
/// ```rust
/// use verdict::{Logger, LogLevel};
///
/// let mut log = Logger::with_writer(LogLevel::Warn, Vec::new());
/// log.info("dropped");
/// log.error("kept");
/// ```
#[derive(Debug)]
pub struct Logger<W: Write = io::Stderr> {
    level: LogLevel,
    out: W,
}

impl Logger<io::Stderr> {
    /// Creates a logger writing to stderr with the given threshold.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            out: io::stderr(),
        }
    }
}

impl<W: Write> Logger<W> {
    /// Creates a logger with the given threshold writing to `out`.
    pub fn with_writer(level: LogLevel, out: W) -> Self {
        Self { level, out }
    }

    /// Returns the current threshold.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Replaces the threshold.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn trace(&mut self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&mut self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&mut self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal(&mut self, message: &str) {
        self.log(LogLevel::Fatal, message);
    }

    /// Logs a `Debug` rendering of `value` at info severity.
    ///
    /// Suppressed entirely when the threshold is above info.
    pub fn inspect<T: Debug>(&mut self, name: &str, value: &T) {
        if self.level > LogLevel::Info {
            return;
        }

        let line = format!("Inspecting {}: {:?}", name, value);
        self.log(LogLevel::Info, &line);
    }

    /// Writes one record, unless `level` is below the threshold.
    ///
    /// Write failures are ignored; logging never disturbs the caller.
    pub fn log(&mut self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S");
        let _ = writeln!(self.out, "{} {} - {}", level.tag(), timestamp, message);
    }
}
