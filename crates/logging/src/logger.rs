//! crates/logging/src/logger.rs
//! The logging context: threshold, hook registry and text output.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::LoggerConfig;
use crate::formatter::format_text;
use crate::hook::{Hook, LevelHooks};
use crate::levels::Level;
use crate::record::{Fields, Record};
use crate::sink::Output;
use crate::value::Value;

/// A logging context that callers pass around explicitly.
///
/// Registration (`add_hook`, `set_output`, `set_level`) takes `&mut self`, so
/// it must happen before the logger is shared across threads. Emitting
/// records only needs `&self`.
///
/// # Examples
///
/// ```
/// use logging::{Level, Logger, Output};
///
/// let mut logger = Logger::new();
/// logger.set_output(Output::Discard);
/// logger.with_field("path", "/var").error("disk full");
/// assert_eq!(logger.level(), Level::Info);
/// ```
#[derive(Debug)]
pub struct Logger {
    level: Level,
    hooks: LevelHooks,
    out: Mutex<Output>,
}

impl Logger {
    /// Creates a logger writing to stderr at the default threshold.
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Creates a logger writing to stderr with the supplied configuration.
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            hooks: LevelHooks::new(),
            out: Mutex::new(Output::Stderr),
        }
    }

    /// Current threshold.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Changes the threshold.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Registered hooks.
    pub const fn hooks(&self) -> &LevelHooks {
        &self.hooks
    }

    /// Registers an additional hook.
    pub fn add_hook(&mut self, hook: Arc<dyn Hook>) {
        self.hooks.add(hook);
    }

    /// Replaces the text output.
    pub fn set_output(&mut self, output: Output) {
        *self.out.get_mut().unwrap_or_else(PoisonError::into_inner) = output;
    }

    /// Returns `true` when the text output has been replaced by [`Output::Discard`].
    pub fn is_output_discarded(&self) -> bool {
        self.out
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_discard()
    }

    /// Reports whether a record at `level` would be emitted.
    pub fn is_enabled(&self, level: Level) -> bool {
        level.enabled_at(self.level)
    }

    /// Emits a record: fires the matching hooks, then writes the text line.
    ///
    /// Hook failures and output errors are reported on stderr and otherwise
    /// ignored, so a broken consumer never turns into a failed log call.
    pub fn log(&self, record: &Record) {
        if !self.is_enabled(record.level) {
            return;
        }

        for err in self.hooks.fire(record) {
            eprintln!("Failed to fire hook: {err}");
        }

        let line = format_text(record);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = out.write_all(line.as_bytes()) {
            eprintln!("Failed to write to log, {err}");
        }
    }

    /// Starts an [`Entry`] carrying one field.
    pub fn with_field(&self, name: impl Into<String>, value: impl Into<Value>) -> Entry<'_> {
        Entry::new(self).with_field(name, value)
    }

    /// Starts an [`Entry`] carrying several fields.
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry<'_>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Entry::new(self).with_fields(fields)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// A pending record bound to a logger, built up field by field.
#[derive(Debug)]
#[must_use = "an entry emits nothing until a level method is called"]
pub struct Entry<'a> {
    logger: &'a Logger,
    fields: Fields,
}

impl<'a> Entry<'a> {
    /// Creates an entry without fields.
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            logger,
            fields: Fields::default(),
        }
    }

    /// Adds or replaces a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Adds or replaces several fields.
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Emits the entry at `level`.
    pub fn log(self, level: Level, message: impl Into<String>) {
        let record = Record {
            message: message.into(),
            level,
            fields: self.fields,
        };
        self.logger.log(&record);
    }
}

macro_rules! level_methods {
    ($($(#[$doc:meta])* $name:ident => $level:ident),+ $(,)?) => {
        impl Logger {
            $(
                $(#[$doc])*
                pub fn $name(&self, message: impl Into<String>) {
                    Entry::new(self).log(Level::$level, message);
                }
            )+
        }

        impl Entry<'_> {
            $(
                $(#[$doc])*
                pub fn $name(self, message: impl Into<String>) {
                    self.log(Level::$level, message);
                }
            )+
        }
    };
}

level_methods! {
    /// Emits at [`Level::Panic`]. The logger only records it; it does not unwind.
    panic => Panic,
    /// Emits at [`Level::Fatal`]. The logger only records it; it does not exit.
    fatal => Fatal,
    /// Emits at [`Level::Error`].
    error => Error,
    /// Emits at [`Level::Warn`].
    warn => Warn,
    /// Emits at [`Level::Info`].
    info => Info,
    /// Emits at [`Level::Debug`].
    debug => Debug,
    /// Emits at [`Level::Trace`].
    trace => Trace,
}
