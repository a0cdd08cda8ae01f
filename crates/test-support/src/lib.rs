//! Shared test doubles for the journalhook workspace.

use std::io::{self, Write};
use std::os::unix::net::UnixDatagram;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use journal::{JournalError, JournalFields, JournalSink, Priority};

/// One entry captured by [`RecordingJournal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentEntry {
    /// Message text.
    pub message: String,
    /// Priority the entry was sent with.
    pub priority: Priority,
    /// Fields in the order they were sent.
    pub fields: JournalFields,
}

/// In-memory journal that records every send.
///
/// Availability and send failures can be switched at runtime to exercise
/// both activation branches and error propagation.
#[derive(Debug)]
pub struct RecordingJournal {
    available: AtomicBool,
    failing: AtomicBool,
    sent: Mutex<Vec<SentEntry>>,
}

impl RecordingJournal {
    /// A journal that reports itself available.
    pub fn available() -> Arc<Self> {
        Arc::new(Self {
            available: AtomicBool::new(true),
            failing: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
        })
    }

    /// A journal that reports itself unavailable.
    pub fn unavailable() -> Arc<Self> {
        let journal = Self::available();
        journal.available.store(false, Ordering::SeqCst);
        journal
    }

    /// Makes subsequent sends fail with a broken-pipe error.
    pub fn fail_sends(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Entries received so far.
    pub fn sent(&self) -> MutexGuard<'_, Vec<SentEntry>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl JournalSink for RecordingJournal {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn send(
        &self,
        message: &str,
        priority: Priority,
        fields: &JournalFields,
    ) -> Result<(), JournalError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe).into());
        }
        self.sent().push(SentEntry {
            message: message.to_owned(),
            priority,
            fields: fields.clone(),
        });
        Ok(())
    }
}

/// Cloneable in-memory writer; every clone appends to the same buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A bound datagram socket standing in for journald.
pub struct FakeJournald {
    _dir: tempfile::TempDir,
    path: PathBuf,
    server: UnixDatagram,
}

impl FakeJournald {
    /// Binds a socket in a fresh temporary directory.
    pub fn bind() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("socket");
        let server = UnixDatagram::bind(&path)?;
        Ok(Self {
            _dir: dir,
            path,
            server,
        })
    }

    /// Path clients should send to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Receives one datagram.
    pub fn recv(&self) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; 64 * 1024];
        let n = self.server.recv(&mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }
}
