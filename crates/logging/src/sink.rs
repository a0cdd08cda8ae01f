//! crates/logging/src/sink.rs
//! Destination for the logger's formatted text output.

use std::fmt;
use std::io::{self, Write};

/// Where the [`Logger`](crate::Logger) writes formatted records.
///
/// Hooks are independent of the output: replacing the output with
/// [`Output::Discard`] silences the text stream while hooks keep firing.
#[derive(Default)]
pub enum Output {
    /// The process's standard error stream.
    #[default]
    Stderr,
    /// Accepts and drops every byte.
    Discard,
    /// Any caller-provided writer.
    Writer(Box<dyn Write + Send>),
}

impl Output {
    /// Wraps an arbitrary writer.
    pub fn writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::Writer(Box::new(writer))
    }

    /// Returns `true` for [`Output::Discard`].
    pub const fn is_discard(&self) -> bool {
        matches!(self, Self::Discard)
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stderr => io::stderr().write(buf),
            Self::Discard => Ok(buf.len()),
            Self::Writer(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().lock().write_all(buf),
            Self::Discard => Ok(()),
            Self::Writer(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stderr => io::stderr().flush(),
            Self::Discard => Ok(()),
            Self::Writer(w) => w.flush(),
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::Discard => f.write_str("Discard"),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}
