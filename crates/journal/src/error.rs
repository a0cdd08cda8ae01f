use std::io;

use thiserror::Error;

/// Why a field name was refused.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FieldNameError {
    /// The name has no characters.
    #[error("empty variable name")]
    Empty,
    /// Names starting with `_` are reserved for fields journald adds itself.
    #[error("variable name begins with an underscore")]
    LeadingUnderscore,
    /// Only `A-Z`, `0-9` and `_` are allowed.
    #[error("variable name contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Errors reported by a journal client.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A field name does not satisfy the journal's naming rules.
    #[error("invalid journal field {name:?}: {reason}")]
    InvalidFieldName {
        /// The offending name.
        name: String,
        /// What is wrong with it.
        reason: FieldNameError,
    },
    /// The client socket could not be created.
    #[error("could not initialize socket to journald")]
    SocketInit,
    /// The platform has no journal.
    #[error("the journal is not supported on this platform")]
    Unsupported,
    /// Writing the entry failed.
    #[error("failed to send entry to journald: {0}")]
    Io(#[from] io::Error),
}
