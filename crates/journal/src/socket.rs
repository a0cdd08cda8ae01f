// Socket-backed journal client.
//
// Entries go to journald as single datagrams on its native protocol socket.
// The client socket is unbound and unconnected so a journald restart never
// leaves it pointing at a dead peer; every send names the destination path.

use std::io;
use std::os::unix::fs::FileTypeExt;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};

use crate::JournalSink;
use crate::config::JournalConfig;
use crate::error::JournalError;
use crate::fd_passing;
use crate::field::JournalFields;
use crate::payload::encode_entry;
use crate::priority::Priority;

/// Client for the local journald instance.
///
/// # Examples
///
/// ```no_run
/// use journal::{JournalFields, JournalSink, Priority, SystemJournal};
///
/// let journal = SystemJournal::new();
/// if journal.is_available() {
///     let mut fields = JournalFields::new();
///     fields.insert("PATH", "/var");
///     journal.send("disk full", Priority::Error, &fields)?;
/// }
/// # Ok::<(), journal::JournalError>(())
/// ```
#[derive(Debug)]
pub struct SystemJournal {
    socket_path: PathBuf,
    socket: Option<UnixDatagram>,
}

impl SystemJournal {
    /// Client for the default journald socket.
    pub fn new() -> Self {
        Self::with_config(&JournalConfig::default())
    }

    /// Client for the socket named in `config`.
    ///
    /// Creating the client never fails; if the local socket cannot be
    /// created, [`is_available`](JournalSink::is_available) reports `false`
    /// and every send fails with [`JournalError::SocketInit`].
    pub fn with_config(config: &JournalConfig) -> Self {
        Self {
            socket_path: config.socket_path.clone(),
            socket: UnixDatagram::unbound().ok(),
        }
    }

    /// Path entries are sent to.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    fn socket(&self) -> Result<&UnixDatagram, JournalError> {
        self.socket.as_ref().ok_or(JournalError::SocketInit)
    }
}

impl Default for SystemJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalSink for SystemJournal {
    fn is_available(&self) -> bool {
        if self.socket.is_none() {
            return false;
        }
        let is_socket = std::fs::metadata(&self.socket_path)
            .is_ok_and(|meta| meta.file_type().is_socket());
        is_socket
            && UnixDatagram::unbound()
                .and_then(|probe| probe.connect(&self.socket_path))
                .is_ok()
    }

    fn send(
        &self,
        message: &str,
        priority: Priority,
        fields: &JournalFields,
    ) -> Result<(), JournalError> {
        let socket = self.socket()?;
        let payload = encode_entry(message, priority, fields)?;
        match socket.send_to(&payload, &self.socket_path) {
            Ok(_) => Ok(()),
            Err(err) if is_socket_space_error(&err) => {
                fd_passing::send_via_file(&self.socket_path, &payload)?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Datagram too large for the socket buffer; the entry must travel as a file.
fn is_socket_space_error(err: &io::Error) -> bool {
    matches!(err.raw_os_error(), Some(libc::EMSGSIZE | libc::ENOBUFS))
}
