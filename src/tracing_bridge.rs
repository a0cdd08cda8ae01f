//! Bridge from the `tracing` ecosystem into the journal hook.
//!
//! [`JournalLayer`] is a `tracing-subscriber` layer that turns each event into
//! a [`Record`] and fires a [`JournalHook`] with it, so code instrumented with
//! `tracing` macros reaches the journal through the same transformation as
//! records emitted on a [`Logger`](logging::Logger).
//!
//! - The event's `message` field becomes the record message; every other
//!   field becomes a typed [`Value`].
//! - `TRACE` events map to [`Level::Trace`], which has no journal priority,
//!   and are skipped.
//!
//! ```no_run
//! use journalhook::{HookConfig, init_journal_tracing};
//!
//! init_journal_tracing(&HookConfig::sorted())?;
//! tracing::error!(path = "/var", bytes.free = 0, "disk full");
//! # Ok::<(), tracing_subscriber::util::TryInitError>(())
//! ```

use std::fmt;

use journal::{JournalSink, SystemJournal};
use logging::{Level, Record, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::activation::{Activation, UNAVAILABLE_WARNING};
use crate::config::HookConfig;
use crate::hook::JournalHook;

/// A tracing layer that forwards events to the journal.
#[derive(Debug)]
pub struct JournalLayer<J = SystemJournal> {
    hook: JournalHook<J>,
}

impl JournalLayer<SystemJournal> {
    /// Layer sending to the journal named in `config`.
    #[must_use]
    pub fn new(config: &HookConfig) -> Self {
        Self::with_hook(JournalHook::with_config(config))
    }
}

impl<J: JournalSink> JournalLayer<J> {
    /// Layer firing an existing hook.
    #[must_use]
    pub const fn with_hook(hook: JournalHook<J>) -> Self {
        Self { hook }
    }

    /// The hook events are delivered to.
    pub const fn hook(&self) -> &JournalHook<J> {
        &self.hook
    }
}

/// Maps a tracing level onto the logger's level scale.
pub const fn level_from_tracing(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        tracing::Level::TRACE => Level::Trace,
    }
}

impl<S, J> Layer<S> for JournalLayer<J>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    J: JournalSink + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = level_from_tracing(event.metadata().level());
        if !self.hook.levels().contains(&level) {
            return;
        }

        let mut visitor = RecordVisitor {
            record: Record::new(level, String::new()),
        };
        event.record(&mut visitor);

        // Reporting through tracing here would re-enter this layer.
        if let Err(err) = self.hook.fire(&visitor.record) {
            eprintln!("Failed to fire hook: {err}");
        }
    }
}

/// Collects an event's fields into a [`Record`].
struct RecordVisitor {
    record: Record,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.record.fields.insert(field.name().to_owned(), value);
    }
}

impl Visit for RecordVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.record.message);
        } else {
            self.insert(field, Value::from(value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == "message" {
            self.record.message = text;
        } else {
            self.insert(field, Value::from(text));
        }
    }
}

/// Installs a global subscriber that sends `tracing` events to the journal.
///
/// Events are filtered by `RUST_LOG`, defaulting to `info`. When the journal
/// is unavailable a plain stderr formatter is installed instead and one
/// warning is emitted through it.
///
/// # Errors
///
/// Fails when a global subscriber has already been set.
pub fn init_journal_tracing(config: &HookConfig) -> Result<Activation, TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = JournalLayer::new(config);

    if layer.hook().journal().is_available() {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()?;
        return Ok(Activation::Enabled);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    tracing::warn!("{UNAVAILABLE_WARNING}");
    Ok(Activation::Unavailable)
}
