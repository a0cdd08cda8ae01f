//! crates/logging/src/levels.rs
//! Severity levels ordered from most to least severe.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log record.
///
/// Variants are declared from most to least severe, so the derived ordering
/// places [`Level::Panic`] lowest and [`Level::Trace`] highest. A logger with
/// threshold `Info` accepts every level `<= Level::Info`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// The process cannot continue.
    Panic,
    /// A fatal condition for the current operation.
    Fatal,
    /// An error the caller should see.
    Error,
    /// Something unexpected that did not stop the operation.
    Warn,
    /// Normal operational messages.
    #[default]
    Info,
    /// Diagnostics useful while debugging.
    Debug,
    /// Very fine-grained diagnostics.
    Trace,
}

/// Every level, most severe first.
pub const ALL_LEVELS: [Level; 7] = [
    Level::Panic,
    Level::Fatal,
    Level::Error,
    Level::Warn,
    Level::Info,
    Level::Debug,
    Level::Trace,
];

impl Level {
    /// Returns the lowercase name used by the text formatter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Reports whether a record at `self` passes a logger whose threshold is `threshold`.
    pub fn enabled_at(self, threshold: Self) -> bool {
        self <= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("not a valid log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}
