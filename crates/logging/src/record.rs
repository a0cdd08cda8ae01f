//! crates/logging/src/record.rs
//! The log record handed to hooks and the formatter.

use rustc_hash::FxHashMap;

use crate::levels::Level;
use crate::value::Value;

/// Unordered set of named field values attached to a record.
///
/// Iteration order is unspecified; consumers needing a stable order must sort.
pub type Fields = FxHashMap<String, Value>;

/// One log event: message, severity and structured fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Human-readable message text.
    pub message: String,
    /// Severity of the event.
    pub level: Level,
    /// Structured context attached to the event.
    pub fields: Fields,
}

impl Record {
    /// Creates a record without fields.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            fields: Fields::default(),
        }
    }

    /// Adds or replaces a field, returning the record for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}
