/// Structured logging for the indicator stage
///
/// Provides context-rich logging with component/zone identifiers,
/// timestamps, and severity levels. Supports both console output
/// and file-based logging when embedded in a long-running producer.
///
/// Until `init_logger` is called every logging call is a no-op, so the
/// library stays silent for callers that never configure it.

use chrono::{DateTime, Utc};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::model::IndicatorError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Config,
    Rainfall,
    SoilMoisture,
    Risk,
    Calculator,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Config => write!(f, "CFG"),
            Component::Rainfall => write!(f, "RAIN"),
            Component::SoilMoisture => write!(f, "SOIL"),
            Component::Risk => write!(f, "RISK"),
            Component::Calculator => write!(f, "CALC"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    fn log(&self, level: LogLevel, component: Component, zone_id: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = format_entry(Utc::now(), level, component, zone_id, message);
        let zone_part = zone_id.map(|z| format!(" [{}]", z)).unwrap_or_default();

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info | LogLevel::Debug => println!("{}", log_entry),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", component, zone_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", component, zone_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

/// Formats one log line: `<timestamp> <LEVEL> <COMPONENT>[ [zone]]: <message>`.
pub fn format_entry(
    timestamp: DateTime<Utc>,
    level: LogLevel,
    component: Component,
    zone_id: Option<&str>,
    message: &str,
) -> String {
    let zone_part = zone_id.map(|z| format!(" [{}]", z)).unwrap_or_default();
    format!(
        "{} {} {}{}: {}",
        timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        level,
        component,
        zone_part,
        message
    )
}

fn logger() -> MutexGuard<'static, Option<Logger>> {
    // A panic while logging must not silence every later message.
    LOGGER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    *logger() = Some(Logger {
        min_level,
        log_file: log_file.map(String::from),
        console_timestamps,
    });
}

fn log(level: LogLevel, component: Component, zone_id: Option<&str>, message: &str) {
    if let Some(logger) = logger().as_ref() {
        logger.log(level, component, zone_id, message);
    }
}

/// Log a general informational message
pub fn info(component: Component, zone_id: Option<&str>, message: &str) {
    log(LogLevel::Info, component, zone_id, message);
}

/// Log a warning message
pub fn warn(component: Component, zone_id: Option<&str>, message: &str) {
    log(LogLevel::Warning, component, zone_id, message);
}

/// Log an error message
pub fn error(component: Component, zone_id: Option<&str>, message: &str) {
    log(LogLevel::Error, component, zone_id, message);
}

/// Log a debug message
pub fn debug(component: Component, zone_id: Option<&str>, message: &str) {
    log(LogLevel::Debug, component, zone_id, message);
}

// ---------------------------------------------------------------------------
// Validation Failure Logging
// ---------------------------------------------------------------------------

/// The component an input error originates from.
pub fn component_for(err: &IndicatorError) -> Component {
    match err {
        IndicatorError::InvalidRainfallValue { .. } => Component::Rainfall,
        IndicatorError::InvalidMoistureValue(_) => Component::SoilMoisture,
        IndicatorError::InvalidDecayFactor(_) => Component::Config,
        IndicatorError::InvalidRiskScore(_) => Component::Risk,
    }
}

/// Log a rejected input, tagged with the component it belongs to
pub fn log_validation_failure(zone_id: Option<&str>, operation: &str, err: &IndicatorError) {
    let message = format!("{} rejected input: {}", operation, err);
    warn(component_for(err), zone_id, &message);
}
