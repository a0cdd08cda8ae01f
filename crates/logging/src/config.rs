//! crates/logging/src/config.rs
//! Logger configuration.

use super::levels::Level;

/// Settings applied when a [`Logger`](crate::Logger) is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Least severe level that is still emitted.
    pub level: Level,
}

impl LoggerConfig {
    /// Configuration with the given threshold.
    pub const fn with_level(level: Level) -> Self {
        Self { level }
    }
}
