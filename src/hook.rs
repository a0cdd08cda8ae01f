//! The journal hook.

use journal::{JournalSink, SystemJournal};
use logging::{Hook, Level, Record};

use crate::config::HookConfig;
use crate::entries::JournalEntry;
use crate::error::HookError;
use crate::severity::JOURNAL_LEVELS;

/// Forwards every record at a mapped level to the journal.
///
/// Each [`fire`](Self::fire) is one synchronous send: no buffering, no
/// retry. The hook registers for every level in
/// [`JOURNAL_LEVELS`](crate::JOURNAL_LEVELS).
///
/// # Examples
///
/// Build the hook by hand and register it on a logger:
///
/// ```no_run
/// use std::sync::Arc;
///
/// use journalhook::JournalHook;
/// use logging::Logger;
///
/// let mut logger = Logger::new();
/// logger.add_hook(Arc::new(JournalHook::new(true)));
/// logger.with_field("path", "/var").error("disk full");
/// ```
#[derive(Clone, Debug)]
pub struct JournalHook<J = SystemJournal> {
    journal: J,
    sort_entries: bool,
}

impl JournalHook<SystemJournal> {
    /// Hook sending to the local journald.
    pub fn new(sort_entries: bool) -> Self {
        Self::with_journal(SystemJournal::new(), sort_entries)
    }

    /// Hook sending to the journal socket named in `config`.
    pub fn with_config(config: &HookConfig) -> Self {
        Self::with_journal(
            SystemJournal::with_config(&config.journal),
            config.sort_entries,
        )
    }
}

impl<J: JournalSink> JournalHook<J> {
    /// Hook sending to an arbitrary journal client.
    pub const fn with_journal(journal: J, sort_entries: bool) -> Self {
        Self {
            journal,
            sort_entries,
        }
    }

    /// Whether fields are processed in sorted order.
    pub const fn sort_entries(&self) -> bool {
        self.sort_entries
    }

    /// The journal client entries are sent to.
    pub const fn journal(&self) -> &J {
        &self.journal
    }

    /// Levels this hook receives.
    pub const fn levels(&self) -> &'static [Level] {
        &JOURNAL_LEVELS
    }

    /// Transforms `record` and sends it.
    pub fn fire(&self, record: &Record) -> Result<(), HookError> {
        let entry = JournalEntry::from_record(record, self.sort_entries)?;
        self.journal
            .send(&entry.message, entry.priority, &entry.fields)?;
        Ok(())
    }
}

impl<J: JournalSink + 'static> Hook for JournalHook<J> {
    fn levels(&self) -> &[Level] {
        Self::levels(self)
    }

    fn fire(&self, record: &Record) -> Result<(), logging::HookError> {
        Self::fire(self, record).map_err(Into::into)
    }
}
