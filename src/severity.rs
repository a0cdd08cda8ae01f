//! Logger levels to journal priorities.

use journal::Priority;
use logging::Level;

/// Levels that have a journal priority, most severe first.
pub const JOURNAL_LEVELS: [Level; 6] = [
    Level::Panic,
    Level::Fatal,
    Level::Error,
    Level::Warn,
    Level::Info,
    Level::Debug,
];

/// Looks up the journal priority for `level`.
///
/// Returns `None` for [`Level::Trace`], which has no counterpart below
/// `LOG_DEBUG`.
pub const fn priority_for(level: Level) -> Option<Priority> {
    match level {
        Level::Panic => Some(Priority::Emergency),
        Level::Fatal => Some(Priority::Critical),
        Level::Error => Some(Priority::Error),
        Level::Warn => Some(Priority::Warning),
        Level::Info => Some(Priority::Info),
        Level::Debug => Some(Priority::Debug),
        Level::Trace => None,
    }
}
