#![allow(unsafe_code)]

// Oversized entries.
//
// A datagram larger than the socket's send buffer fails with EMSGSIZE or
// ENOBUFS. journald also accepts an entry as an unlinked file whose
// descriptor arrives via SCM_RIGHTS in an otherwise empty datagram; the
// file contents use the same native encoding.

use std::fs::File;
use std::io::{self, Write};
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};
use std::os::unix::net::UnixDatagram;
use std::path::Path;

/// tmpfs keeps the spill file out of the page cache writeback path.
const SPILL_DIR: &str = "/dev/shm";

/// Writes `payload` to an unlinked file and hands the descriptor to journald.
pub(crate) fn send_via_file(socket_path: &Path, payload: &[u8]) -> io::Result<()> {
    let mut file = spill_file()?;
    file.write_all(payload)?;
    file.flush()?;

    let socket = UnixDatagram::unbound()?;
    socket.connect(socket_path)?;
    send_fd(&socket, file.as_fd())
}

fn spill_file() -> io::Result<File> {
    tempfile::tempfile_in(SPILL_DIR).or_else(|_| tempfile::tempfile())
}

fn send_fd(socket: &UnixDatagram, fd: BorrowedFd<'_>) -> io::Result<()> {
    let fds = [fd.as_raw_fd()];
    let payload_len = std::mem::size_of_val(&fds) as libc::c_uint;

    // SAFETY: CMSG_SPACE/CMSG_LEN are pure size computations.
    let (space, len) = unsafe { (libc::CMSG_SPACE(payload_len), libc::CMSG_LEN(payload_len)) };

    // u64 backing keeps the control buffer aligned for cmsghdr.
    let mut control = vec![0u64; (space as usize).div_ceil(std::mem::size_of::<u64>())];

    // SAFETY: msghdr is a plain C struct for which all-zero is a valid value.
    let mut msg: libc::msghdr = unsafe { std::mem::zeroed() };
    msg.msg_control = control.as_mut_ptr().cast();
    msg.msg_controllen = space as _;

    // SAFETY: msg_control points at `control`, which is at least `space`
    // bytes long and aligned, so CMSG_FIRSTHDR returns a valid header with
    // room for `payload_len` data bytes.
    unsafe {
        let cmsg = libc::CMSG_FIRSTHDR(&msg);
        if cmsg.is_null() {
            return Err(io::Error::other("control buffer too small for SCM_RIGHTS"));
        }
        (*cmsg).cmsg_level = libc::SOL_SOCKET;
        (*cmsg).cmsg_type = libc::SCM_RIGHTS;
        (*cmsg).cmsg_len = len as _;
        std::ptr::copy_nonoverlapping(
            fds.as_ptr().cast::<u8>(),
            libc::CMSG_DATA(cmsg),
            payload_len as usize,
        );
    }

    // SAFETY: the socket descriptor is open for the duration of the call and
    // `msg` only references buffers that outlive it.
    let sent = unsafe { libc::sendmsg(socket.as_raw_fd(), &msg, libc::MSG_NOSIGNAL) };
    if sent < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}
