//! Structured logging.
//!
//! Each event has a time, a [`Level`], and a list of named [`Tag`]s.
//! Events go to the logger passed to [`set_global_logger`],
//! or to stdout as JSON lines when none was set.
mod logger;
mod tag_value;
mod tags;

pub use logger::{
    GlobalLoggerAlreadySetError, LogEvent, Logger, StdoutLogger, global_logger, level_enabled,
    max_level, set_global_logger, set_max_level,
};
pub use tag_value::TagValue;
pub use tags::{Tag, TagList, tag};

use logger::log;
use std::fmt::{Display, Formatter};
use std::time::SystemTime;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Info = 1,
    Debug = 2,
}
impl Level {
    #[must_use]
    pub fn from_u8(n: u8) -> Self {
        match n {
            0 => Level::Error,
            1 => Level::Info,
            _ => Level::Debug,
        }
    }
}
impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Level::Error => write!(f, "error"),
            Level::Info => write!(f, "info"),
            Level::Debug => write!(f, "debug"),
        }
    }
}

fn log_with_msg(level: Level, msg: impl Into<String>, tags: impl Into<TagList>) {
    if !level_enabled(level) {
        return;
    }
    let msg: String = msg.into();
    let mut tags: TagList = tags.into();
    tags.0.insert(0, tag("msg", msg));
    log(SystemTime::now(), level, tags);
}

/// Makes a new log event with 'info' level and sends it to the global logger.
pub fn info(msg: impl Into<String>, tags: impl Into<TagList>) {
    log_with_msg(Level::Info, msg, tags);
}

/// Makes a new log event with 'debug' level and sends it to the global logger.
pub fn debug(msg: impl Into<String>, tags: impl Into<TagList>) {
    log_with_msg(Level::Debug, msg, tags);
}
