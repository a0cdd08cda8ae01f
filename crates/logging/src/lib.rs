#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a small leveled logger for structured records. A [`Logger`]
//! is an explicit context value: it owns a severity threshold, a registry of
//! [`Hook`]s and a text [`Output`]. Every emitted [`Record`] carries a
//! message, a [`Level`] and an unordered set of [`Value`] fields.
//!
//! # Design
//!
//! - Hooks receive records synchronously on the logging thread, filtered by
//!   the levels each hook asks for. A failing hook is reported on stderr and
//!   never stops the other hooks or the text output.
//! - The text output defaults to stderr and can be replaced, for example by
//!   [`Output::Discard`] once a hook has taken over delivery.
//! - Registration needs `&mut Logger`; emitting needs `&Logger`. Set the
//!   logger up first, then share it.
//!
//! # Examples
//!
//! ```
//! use logging::{Logger, Output};
//!
//! let mut logger = Logger::new();
//! logger.set_output(Output::writer(Vec::new()));
//! logger
//!     .with_field("path", "/var")
//!     .with_field("bytes-free", 0)
//!     .error("disk full");
//! ```

mod config;
mod formatter;
mod hook;
mod levels;
mod logger;
mod record;
mod sink;
mod value;

pub use config::LoggerConfig;
pub use formatter::format_text;
pub use hook::{Hook, HookError, LevelHooks};
pub use levels::{ALL_LEVELS, Level, ParseLevelError};
pub use logger::{Entry, Logger};
pub use record::{Fields, Record};
pub use sink::Output;
pub use value::Value;
