//! Rolling Logger
//!
//! Installs a `tracing` subscriber that mirrors every record to the browser
//! console and keeps the most recent lines in a bounded in-memory buffer.
//! Records emitted through the `log` facade are bridged into the same
//! subscriber.

mod buffer;
mod writer;

use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

pub use buffer::LogBuffer;
pub use writer::{ConsoleMakeWriter, LineWriter};

/// Lines kept when no explicit capacity is requested
pub const DEFAULT_CAPACITY: usize = 500;

static BUFFER: OnceLock<Arc<Mutex<LogBuffer>>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Wall-clock timestamps, `HH:MM:SS.mmm`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize the process-wide logger with the default buffer capacity.
pub fn init_logger(app_name: &str) -> Result<(), LoggerError> {
    init_logger_with_capacity(app_name, DEFAULT_CAPACITY)
}

/// Initialize the process-wide logger keeping at most `capacity` lines.
pub fn init_logger_with_capacity(app_name: &str, capacity: usize) -> Result<(), LoggerError> {
    let buffer = Arc::new(Mutex::new(LogBuffer::new(capacity)));
    BUFFER
        .set(buffer.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(buffer))
        .with_timer(ClockTime)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| LoggerError::Install(e.to_string()))?;

    log::info!("[{}] logger ready (keeping {} lines)", app_name, capacity);
    Ok(())
}

/// Snapshot of the buffered lines, oldest first. Empty before initialization.
pub fn recent_lines() -> Vec<String> {
    BUFFER
        .get()
        .and_then(|buffer| buffer.lock().ok().map(|guard| guard.snapshot()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_once_and_capture() {
        assert!(recent_lines().is_empty());

        init_logger_with_capacity("test", 8).unwrap();
        log::warn!("bridged from log");
        tracing::info!("native event");

        let err = init_logger("test").unwrap_err();
        assert!(matches!(err, LoggerError::AlreadyInitialized));

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("logger ready")));
        assert!(lines.iter().any(|l| l.contains("bridged from log")));
        assert!(lines.iter().any(|l| l.contains("native event")));
        assert!(lines.len() <= 8);
    }
}
