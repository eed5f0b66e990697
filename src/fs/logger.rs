//! Match logger.
//!
//! Implements the [`log`] facade. Every record is printed to the console and
//! appended to `log.txt` in the working directory (the SD card root on the
//! brain). The file is truncated when the logger is installed; if it cannot be
//! opened, records still reach the console.
//!
//! ```text
//! INFO [2s 10ms] spinup::auton::selector - Match configuration selected: Red/Full
//! WARN [14s 2ms] spinup::motion::primitives - Launch toward Red goal: disk release is not implemented
//! ```
//!
//! # Example
//!
//! ```ignore
//! use log::LevelFilter;
//! use spinup::fs::logger;
//!
//! logger::init(LevelFilter::Info).unwrap_or_else(|e| println!("Logger Error: {}", e));
//! ```

use std::{
    fmt::Arguments,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

/// File the logger writes to.
pub const LOG_FILE: &str = "log.txt";

/// Writes every record to the console and [`LOG_FILE`].
pub struct MatchLogger {
    file_writer: Mutex<Option<BufWriter<File>>>,
}

impl MatchLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(LOG_FILE)
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for MatchLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), uptime(), record.target(), record.args());
        print!("{}", line);

        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file_writer.lock() {
            if let Some(writer) = guard.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<MatchLogger> = OnceLock::new();

/// Installs the match logger as the global logger.
///
/// Records above `level` are dropped.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| {
        start_clock();
        MatchLogger::new()
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// One log line, newline included.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use log::Level;
/// use spinup::fs::logger::format_line;
///
/// let line = format_line(Level::Warn, Duration::from_millis(2010), "spinup", &format_args!("hi"));
/// assert_eq!(line, "WARN [2s 10ms] spinup - hi\n");
/// ```
pub fn format_line(level: Level, uptime: Duration, target: &str, args: &Arguments) -> String {
    format!("{} [{}] {} - {}\n", level, format_duration(uptime), target, args)
}

#[cfg(feature = "vexide")]
fn start_clock() {}

#[cfg(feature = "vexide")]
fn uptime() -> Duration { vexide::time::user_uptime() }

#[cfg(not(feature = "vexide"))]
static START: OnceLock<std::time::Instant> = OnceLock::new();

#[cfg(not(feature = "vexide"))]
fn start_clock() { START.get_or_init(std::time::Instant::now); }

#[cfg(not(feature = "vexide"))]
fn uptime() -> Duration {
    START
        .get()
        .map(std::time::Instant::elapsed)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_layout() {
        assert_eq!(
            format_line(
                Level::Info,
                Duration::from_millis(125_432),
                "spinup::auton",
                &format_args!("Autonomous started: {}", "Red/Full"),
            ),
            "INFO [2m 5s 432ms] spinup::auton - Autonomous started: Red/Full\n"
        );
    }

    #[test]
    fn zero_uptime() {
        assert_eq!(
            format_line(Level::Error, Duration::ZERO, "t", &format_args!("x")),
            "ERROR [0s] t - x\n"
        );
    }

    #[test]
    fn installed_logger_writes_formatted_lines_to_file() {
        use log::{debug, warn};

        init(LevelFilter::Info).expect("Failed to initialize logger");
        assert!(init(LevelFilter::Info).is_err());

        debug!("dropped below the level");
        warn!("Spinner Velocity Error: port 8 disconnected");
        log::logger().flush();

        let contents = std::fs::read_to_string(LOG_FILE).expect("log file written");
        let line = contents
            .lines()
            .find(|line| line.contains("port 8 disconnected"))
            .expect("warning reached the file");
        assert!(line.starts_with("WARN ["));
        assert!(line.ends_with(
            "] spinup::fs::logger::tests - Spinner Velocity Error: port 8 disconnected"
        ));
        assert!(!contents.contains("dropped below the level"));
    }
}
