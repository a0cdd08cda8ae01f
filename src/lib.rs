#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `journalhook` routes records from the [`logging`] framework to the systemd
//! journal. Field names are sanitized into journal-legal names, values are
//! rendered as text, and the record's level is mapped onto a syslog
//! priority before the entry is handed to a [`journal::JournalSink`].
//!
//! # Design
//!
//! - [`JournalHook`] implements [`logging::Hook`] for the six levels that have
//!   a journal priority. Each fire is one synchronous send.
//! - [`enable`] and [`enable_sort_entries`] probe the local journal and, when
//!   it is reachable, install the hook on an explicit [`logging::Logger`] and
//!   discard the logger's own text output. [`enable_with`] accepts any
//!   journal client.
//! - [`sanitize_key`], [`stringify_entry`] and [`stringify_entries`] are the
//!   pure transformation steps and never fail.
//! - [`JournalLayer`] feeds `tracing` events through the same hook.
//!
//! # Invariants
//!
//! - Every field name sent is non-empty, uses only `A-Z`, `0-9` and `_`, and
//!   does not start with `_`.
//! - With sorted entries, identical field sets always produce identical
//!   datagrams.
//!
//! # Examples
//!
//! ```no_run
//! use journalhook::enable;
//! use logging::Logger;
//!
//! let mut logger = Logger::new();
//! let _ = enable(&mut logger);
//! logger
//!     .with_field("path", "/var")
//!     .with_field("bytes-free", 0)
//!     .error("disk full");
//! ```

mod activation;
mod config;
mod entries;
mod error;
mod hook;
mod sanitize;
mod severity;
mod tracing_bridge;

pub use activation::{
    Activation, UNAVAILABLE_WARNING, enable, enable_sort_entries, enable_with, enable_with_config,
};
pub use config::HookConfig;
pub use entries::{JournalEntry, stringify_entries, stringify_entry};
pub use error::HookError;
pub use hook::JournalHook;
pub use sanitize::sanitize_key;
pub use severity::{JOURNAL_LEVELS, priority_for};
pub use tracing_bridge::{JournalLayer, init_journal_tracing, level_from_tracing};

pub use journal;
pub use logging;
