//! Detection of stderr already being connected to journald.
//!
//! systemd sets `JOURNAL_STREAM=<device>:<inode>` for services whose stdout
//! or stderr is a journal stream. A program that also sends native entries
//! can compare its stderr against that pair to avoid logging twice.

use std::fs::File;
use std::io;
use std::os::fd::{AsFd, BorrowedFd};
use std::os::unix::fs::MetadataExt;

/// Environment variable systemd uses to announce a journal stream.
pub const JOURNAL_STREAM_ENV: &str = "JOURNAL_STREAM";

/// Parses a `JOURNAL_STREAM` value into `(device, inode)`.
///
/// # Examples
///
/// ```
/// use journal::parse_journal_stream;
///
/// assert_eq!(parse_journal_stream("8:12345"), Some((8, 12345)));
/// assert_eq!(parse_journal_stream("garbage"), None);
/// ```
pub fn parse_journal_stream(value: &str) -> Option<(u64, u64)> {
    let (dev, ino) = value.trim().split_once(':')?;
    Some((dev.parse().ok()?, ino.parse().ok()?))
}

/// Reports whether `fd` is the journal stream described by `value`.
pub fn fd_is_journal_stream(fd: BorrowedFd<'_>, value: &str) -> io::Result<bool> {
    let (dev, ino) = parse_journal_stream(value).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("malformed {JOURNAL_STREAM_ENV} value {value:?}"),
        )
    })?;
    let meta = File::from(fd.try_clone_to_owned()?).metadata()?;
    Ok(meta.dev() == dev && meta.ino() == ino)
}

/// Reports whether this process's stderr is connected to the journal.
///
/// Returns `Ok(false)` when `JOURNAL_STREAM` is unset.
pub fn stderr_is_journal_stream() -> io::Result<bool> {
    match std::env::var(JOURNAL_STREAM_ENV) {
        Ok(value) => fd_is_journal_stream(io::stderr().as_fd(), &value),
        Err(_) => Ok(false),
    }
}
