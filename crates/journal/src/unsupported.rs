// Platforms without journald.

use crate::JournalSink;
use crate::config::JournalConfig;
use crate::error::JournalError;
use crate::field::JournalFields;
use crate::priority::Priority;

/// Placeholder client on platforms without journald; never available.
#[derive(Debug, Default)]
pub struct SystemJournal {
    _private: (),
}

impl SystemJournal {
    /// Creates the placeholder client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the placeholder client; the configuration is ignored.
    pub fn with_config(_config: &JournalConfig) -> Self {
        Self::default()
    }
}

impl JournalSink for SystemJournal {
    fn is_available(&self) -> bool {
        false
    }

    fn send(
        &self,
        _message: &str,
        _priority: Priority,
        _fields: &JournalFields,
    ) -> Result<(), JournalError> {
        Err(JournalError::Unsupported)
    }
}
