//! One-time installation of the journal hook on a logger.

use std::sync::Arc;

use journal::{JournalSink, SystemJournal};
use logging::{Logger, Output};

use crate::config::HookConfig;
use crate::hook::JournalHook;

/// Warning emitted through the logger when the journal cannot be reached.
pub const UNAVAILABLE_WARNING: &str =
    "Journal not available but user requests we log to it. Ignoring";

/// Outcome of an activation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Activation {
    /// The hook is registered and the text output discarded.
    Enabled,
    /// The journal was unavailable; the logger is unchanged apart from one
    /// warning line.
    Unavailable,
}

impl Activation {
    /// Returns `true` when records now go to the journal.
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Sends `logger`'s records to the local journal, fields in unspecified order.
pub fn enable(logger: &mut Logger) -> Activation {
    enable_with(logger, SystemJournal::new(), false)
}

/// Sends `logger`'s records to the local journal, fields processed in
/// sorted order of their original names.
pub fn enable_sort_entries(logger: &mut Logger) -> Activation {
    enable_with(logger, SystemJournal::new(), true)
}

/// Activation driven by a [`HookConfig`].
pub fn enable_with_config(logger: &mut Logger, config: &HookConfig) -> Activation {
    enable_with(
        logger,
        SystemJournal::with_config(&config.journal),
        config.sort_entries,
    )
}

/// Probes `journal` and installs a [`JournalHook`] on `logger` if it is
/// reachable.
///
/// When the journal is unavailable a single warning is logged through
/// `logger` itself and nothing else changes. Otherwise the hook is
/// registered for every mapped level and the logger's text output is
/// replaced with [`Output::Discard`]. There is no way to undo this.
///
/// # Examples
///
/// ```no_run
/// use journalhook::{Activation, enable_sort_entries};
/// use logging::Logger;
///
/// let mut logger = Logger::new();
/// if enable_sort_entries(&mut logger) == Activation::Enabled {
///     logger.with_field("path", "/var").error("disk full");
/// }
/// ```
pub fn enable_with<J>(logger: &mut Logger, journal: J, sort_entries: bool) -> Activation
where
    J: JournalSink + 'static,
{
    if !journal.is_available() {
        logger.warn(UNAVAILABLE_WARNING);
        return Activation::Unavailable;
    }

    logger.add_hook(Arc::new(JournalHook::with_journal(journal, sort_entries)));
    logger.set_output(Output::Discard);
    tracing::debug!(sort_entries, "journal hook enabled");
    Activation::Enabled
}
