use crate::log::Level;
use crate::log::tags::TagList;
use crate::time::FormatTime;
use once_cell::sync::OnceCell;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::SystemTime;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LogEvent {
    pub time: SystemTime,
    pub level: Level,
    pub tags: TagList,
}
impl LogEvent {
    /// Writes the event as one JSON object, without a trailing newline.
    ///
    /// # Errors
    /// Returns an error when writing to `f` fails.
    pub fn write_json(&self, f: &mut impl Write) -> Result<(), std::io::Error> {
        // {"time_ns":1681457536082810000,"time":"2023-04-14T07:32:16Z","level":"info",...}
        let time_ns = self.time.epoch_ns();
        let time = self.time.iso8601_utc();
        let level = self.level;
        let tags = &self.tags;
        if tags.is_empty() {
            write!(
                f,
                "{{\"time_ns\":{time_ns},\"time\":\"{time}\",\"level\":\"{level}\"}}"
            )
        } else {
            write!(
                f,
                "{{\"time_ns\":{time_ns},\"time\":\"{time}\",\"level\":\"{level}\",{tags}}}"
            )
        }
    }
}

pub trait Logger: Send + Sync {
    fn add(&self, event: LogEvent);
}

/// Prints each event to stdout as a JSON line.
#[derive(Clone, Debug, Default)]
pub struct StdoutLogger {}
impl Logger for StdoutLogger {
    fn add(&self, event: LogEvent) {
        let mut line = Vec::new();
        if event.write_json(&mut line).is_ok() {
            line.push(b'\n');
            let _ignored = std::io::stdout().lock().write_all(&line);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GlobalLoggerAlreadySetError {}
impl core::fmt::Display for GlobalLoggerAlreadySetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "global logger is already set")
    }
}
impl std::error::Error for GlobalLoggerAlreadySetError {}

static GLOBAL_LOGGER: OnceCell<Box<dyn Logger>> = OnceCell::new();
static STDOUT_LOGGER: StdoutLogger = StdoutLogger {};
static MAX_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Sends all future log events to `logger`.
///
/// # Errors
/// Returns an error when a global logger was already set.
pub fn set_global_logger(logger: impl Logger + 'static) -> Result<(), GlobalLoggerAlreadySetError> {
    GLOBAL_LOGGER
        .set(Box::new(logger))
        .map_err(|_| GlobalLoggerAlreadySetError {})
}

/// Gets the logger previously passed to [`set_global_logger`].
/// Returns [`StdoutLogger`] if no global logger was set.
pub fn global_logger() -> &'static dyn Logger {
    match GLOBAL_LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &STDOUT_LOGGER,
    }
}

/// Drops events less severe than `level`.  The default is [`Level::Info`].
pub fn set_max_level(level: Level) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

#[must_use]
pub fn max_level() -> Level {
    Level::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
}

#[must_use]
pub fn level_enabled(level: Level) -> bool {
    (level as u8) <= MAX_LEVEL.load(Ordering::Relaxed)
}

pub fn log(time: SystemTime, level: Level, tags: impl Into<TagList>) {
    if !level_enabled(level) {
        return;
    }
    let tags: TagList = tags.into();
    global_logger().add(LogEvent { time, level, tags });
}
