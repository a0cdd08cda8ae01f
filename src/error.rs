use journal::JournalError;
use logging::Level;
use thiserror::Error;

/// Errors reported by [`JournalHook::fire`](crate::JournalHook::fire).
#[derive(Debug, Error)]
pub enum HookError {
    /// The record's level has no journal priority. The logger should never
    /// deliver such a record, since the hook does not register for it.
    #[error("log level {0} has no journal priority")]
    UnmappedLevel(Level),
    /// The journal refused or failed to take the entry.
    #[error(transparent)]
    Send(#[from] JournalError),
}
