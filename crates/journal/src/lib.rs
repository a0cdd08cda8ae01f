#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/journal/src/lib.rs
//!
//! # Overview
//!
//! `journal` sends structured entries to the systemd journal over its native
//! datagram protocol. An entry is a message, a [`Priority`] and a set of
//! uppercase [`JournalFields`].
//!
//! # Design
//!
//! - [`JournalSink`] is the seam consumers program against: an availability
//!   probe and a synchronous, at-most-once send. [`SystemJournal`] is the
//!   socket-backed implementation; tests substitute recording doubles.
//! - [`encode_entry`] produces the datagram. Field names are validated with
//!   [`validate_field_name`] before anything is sent.
//! - Entries that do not fit in one datagram are written to an unlinked
//!   temporary file whose descriptor is passed to journald instead.
//!
//! # Invariants
//!
//! - `PRIORITY` and `MESSAGE` are always the first two fields of a datagram.
//! - A send either delivers the whole entry or returns an error; nothing is
//!   buffered or retried.
//!
//! # Errors
//!
//! All fallible operations return [`JournalError`].
//!
//! # Examples
//!
//! ```no_run
//! use journal::{JournalSink, Priority, SystemJournal, print};
//!
//! let journal = SystemJournal::new();
//! if journal.is_available() {
//!     print(&journal, Priority::Notice, "service ready")?;
//! }
//! # Ok::<(), journal::JournalError>(())
//! ```

use std::fmt::Display;
use std::sync::Arc;

mod config;
mod error;
#[cfg(target_os = "linux")]
mod fd_passing;
mod field;
mod payload;
mod priority;
#[cfg(target_os = "linux")]
mod socket;
#[cfg(unix)]
mod stream;
#[cfg(not(target_os = "linux"))]
mod unsupported;

pub use config::{DEFAULT_SOCKET_PATH, JournalConfig};
pub use error::{FieldNameError, JournalError};
pub use field::{JournalFields, MESSAGE, PRIORITY, validate_field_name};
pub use payload::encode_entry;
pub use priority::Priority;
#[cfg(target_os = "linux")]
pub use socket::SystemJournal;
#[cfg(unix)]
pub use stream::{
    JOURNAL_STREAM_ENV, fd_is_journal_stream, parse_journal_stream, stderr_is_journal_stream,
};
#[cfg(not(target_os = "linux"))]
pub use unsupported::SystemJournal;

/// A destination that accepts journal entries.
///
/// Implementations must tolerate concurrent `send` calls from several
/// logging threads.
pub trait JournalSink: Send + Sync {
    /// Reports whether entries can currently be delivered.
    fn is_available(&self) -> bool;

    /// Delivers one entry, synchronously and at most once.
    fn send(
        &self,
        message: &str,
        priority: Priority,
        fields: &JournalFields,
    ) -> Result<(), JournalError>;
}

impl<T: JournalSink + ?Sized> JournalSink for Arc<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn send(
        &self,
        message: &str,
        priority: Priority,
        fields: &JournalFields,
    ) -> Result<(), JournalError> {
        (**self).send(message, priority, fields)
    }
}

impl<T: JournalSink + ?Sized> JournalSink for &T {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn send(
        &self,
        message: &str,
        priority: Priority,
        fields: &JournalFields,
    ) -> Result<(), JournalError> {
        (**self).send(message, priority, fields)
    }
}

/// Sends a message with no extra fields.
pub fn print<J>(journal: &J, priority: Priority, message: impl Display) -> Result<(), JournalError>
where
    J: JournalSink + ?Sized,
{
    journal.send(&message.to_string(), priority, &JournalFields::new())
}
