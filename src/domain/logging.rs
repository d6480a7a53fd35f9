//! Structured logging shared by every layer.
//!
//! A single `Logger` is installed at startup; until then (and in native tests)
//! entries go nowhere. Entries carry a layer tag and optional `key=value`
//! fields, and are filtered by level before any message is formatted.

use std::fmt::{Arguments, Display};
use std::sync::OnceLock;

use derive_more::Display as DisplayDerive;
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, DisplayDerive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace,
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer tag attached to every entry, e.g. `APP:Session` or `INF:HTTP`.
#[derive(Debug, Clone, PartialEq, Eq, DisplayDerive)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl Display) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    /// `[ts] LEVEL component | message | k=v k=v`
    pub fn format_line(&self) -> String {
        let timestamp = get_time_provider().format_timestamp(self.timestamp);
        let head = format!("[{}] {} {} | {}", timestamp, self.level, self.component, self.message);
        if self.fields.is_empty() {
            return head;
        }
        let fields: Vec<String> = self.fields.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        format!("{} | {}", head, fields.join(" "))
    }
}

pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

pub trait Logger: Send + Sync {
    /// Sink for entries that passed `enabled`.
    fn write(&self, entry: &LogEntry);

    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, entry: LogEntry) {
        if self.enabled(entry.level) {
            self.write(&entry);
        }
    }

    fn trace(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, component, message));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the process logger. Only the first call takes effect.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Install the clock used for entry timestamps. Only the first call takes effect.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&Silent)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER.get().map(|clock| clock.as_ref()).unwrap_or(&CounterClock)
}

/// Backend of the `log_*!` macros: the message is only formatted when the
/// installed logger accepts `level`.
pub fn emit(level: LogLevel, component: LogComponent, args: Arguments<'_>) {
    let logger = get_logger();
    if logger.enabled(level) {
        logger.write(&LogEntry::new(level, component, args.to_string()));
    }
}

struct Silent;

impl Logger for Silent {
    fn write(&self, _entry: &LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Sequence numbers instead of wall time.
struct CounterClock;

impl TimeProvider for CounterClock {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NEXT.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Trace, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Error, $component, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn component_tags_carry_layer_prefix() {
        assert_eq!(LogComponent::Application("Session").to_string(), "APP:Session");
        assert_eq!(LogComponent::Infrastructure("HTTP").to_string(), "INF:HTTP");
    }

    #[test]
    fn entry_line_lists_fields() {
        let entry = LogEntry::new(LogLevel::Debug, LogComponent::Application("RemoteLoader"), "stale response")
            .field("loader", "fx")
            .field("token", 3);
        let line = entry.format_line();
        assert!(line.ends_with("DEBUG APP:RemoteLoader | stale response | loader=fx token=3"));
        let bare = LogEntry::new(LogLevel::Warn, LogComponent::Presentation("Market"), "no data");
        assert!(bare.format_line().ends_with(" WARN PRE:Market | no data"));
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(LogLevel::from_str("warn"), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("DEBUG"), Ok(LogLevel::Debug));
        assert!(LogLevel::from_str("loud").is_err());
        assert!(LogLevel::Debug < LogLevel::Info);
    }
}
