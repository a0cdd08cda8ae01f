// Journal priorities.
//
// The journal stores the syslog(3) severity scale verbatim in the
// `PRIORITY=` field, so the discriminants are the POSIX `LOG_*` values.

use std::fmt;

/// Journal priority levels matching POSIX syslog(3) severity constants.
///
/// Lower values are more severe. The numeric value is what ends up in the
/// `PRIORITY=` field of the entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    /// System is unusable (LOG_EMERG).
    Emergency = 0,
    /// Action must be taken immediately (LOG_ALERT).
    Alert = 1,
    /// Critical conditions (LOG_CRIT).
    Critical = 2,
    /// Error conditions (LOG_ERR).
    Error = 3,
    /// Warning conditions (LOG_WARNING).
    Warning = 4,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = 5,
    /// Informational messages (LOG_INFO).
    Info = 6,
    /// Debug-level messages (LOG_DEBUG).
    Debug = 7,
}

impl Priority {
    /// Returns the numeric severity.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the value written after `PRIORITY=`.
    pub const fn as_field_value(self) -> &'static str {
        match self {
            Self::Emergency => "0",
            Self::Alert => "1",
            Self::Critical => "2",
            Self::Error => "3",
            Self::Warning => "4",
            Self::Notice => "5",
            Self::Info => "6",
            Self::Debug => "7",
        }
    }

    /// Converts a numeric severity back into a priority.
    ///
    /// Returns `None` for values above 7.
    ///
    /// # Examples
    ///
    /// ```
    /// use journal::Priority;
    ///
    /// assert_eq!(Priority::from_u8(3), Some(Priority::Error));
    /// assert_eq!(Priority::from_u8(8), None);
    /// ```
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Returns the conventional short name (`emerg`, `alert`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emergency => "emerg",
            Self::Alert => "alert",
            Self::Critical => "crit",
            Self::Error => "err",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.as_u8()
    }
}
