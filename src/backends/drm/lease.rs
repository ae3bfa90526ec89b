// src/backends/drm/lease.rs

//! Client side of the DRM lease manager protocol.
//!
//! Each lease is served on its own Unix stream socket named after the lease
//! under the manager's runtime directory. The client sends a 4 byte
//! native-endian opcode and receives the leased DRM file descriptor as
//! `SCM_RIGHTS` ancillary data.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use nix::sys::socket::{recvmsg, ControlMessageOwned, MsgFlags};
use std::io::{IoSliceMut, Write};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

pub const RUNTIME_PATH_ENV: &str = "DLM_RUNTIME_PATH";
pub const DEFAULT_RUNTIME_PATH: &str = "/var/local/run/drm-lease-manager";

const OPCODE_GET_LEASE: u32 = 0;

/// Socket path for the lease called `name`.
pub fn socket_path(runtime_dir: Option<PathBuf>, name: &str) -> PathBuf {
    runtime_dir
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RUNTIME_PATH))
        .join(name)
}

/// Asks the lease manager for the lease called `name`.
pub fn request_lease(name: &str) -> Result<OwnedFd> {
    if name.is_empty() || name.contains('/') {
        bail!("invalid lease name {:?}", name);
    }
    let path = socket_path(std::env::var_os(RUNTIME_PATH_ENV).map(PathBuf::from), name);
    debug!("DrmLease: connecting to {}", path.display());
    let mut stream = UnixStream::connect(&path)
        .with_context(|| format!("Cannot connect to lease manager at {}", path.display()))?;

    stream
        .write_all(&OPCODE_GET_LEASE.to_ne_bytes())
        .context("Failed to send lease request")?;

    let fd = receive_fd(stream.as_raw_fd())
        .with_context(|| format!("Lease manager refused lease {:?}", name))?;
    info!("DrmLease: obtained lease {:?}", name);
    Ok(fd)
}

fn receive_fd(socket: RawFd) -> Result<OwnedFd> {
    let mut payload = [0u8; 16];
    let mut iov = [IoSliceMut::new(&mut payload)];
    let mut space = nix::cmsg_space!(RawFd);
    let msg = recvmsg::<()>(socket, &mut iov, Some(&mut space), MsgFlags::MSG_CMSG_CLOEXEC)
        .context("recvmsg failed")?;

    let mut received = None;
    for cmsg in msg.cmsgs().context("Malformed control message")? {
        if let ControlMessageOwned::ScmRights(fds) = cmsg {
            for fd in fds {
                // SAFETY: the kernel installed this descriptor for us.
                let owned = unsafe { OwnedFd::from_raw_fd(fd) };
                if received.is_none() {
                    received = Some(owned);
                }
            }
        }
    }
    match received {
        Some(fd) => Ok(fd),
        None if msg.bytes == 0 => bail!("connection closed without a descriptor"),
        None => bail!("reply carried no descriptor"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::sys::socket::{sendmsg, ControlMessage};
    use std::io::IoSlice;
    use test_log::test;

    #[test]
    fn it_should_place_sockets_under_the_runtime_directory() {
        assert_eq!(
            socket_path(None, "lease-a"),
            PathBuf::from("/var/local/run/drm-lease-manager/lease-a")
        );
        assert_eq!(
            socket_path(Some(PathBuf::from("/tmp/dlm")), "lease-a"),
            PathBuf::from("/tmp/dlm/lease-a")
        );
    }

    #[test]
    fn it_should_reject_names_that_escape_the_runtime_directory() {
        assert!(request_lease("../card0").is_err());
        assert!(request_lease("").is_err());
    }

    #[test]
    fn it_should_receive_a_descriptor_passed_with_scm_rights() {
        let (manager, client) = UnixStream::pair().unwrap();
        let (shared, _keep) = UnixStream::pair().unwrap();

        let fds = [shared.as_raw_fd()];
        let cmsg = [ControlMessage::ScmRights(&fds)];
        let iov = [IoSlice::new(&[0u8])];
        sendmsg::<()>(manager.as_raw_fd(), &iov, &cmsg, MsgFlags::empty(), None).unwrap();

        let received = receive_fd(client.as_raw_fd()).unwrap();
        assert_ne!(received.as_raw_fd(), shared.as_raw_fd());
    }

    #[test]
    fn it_should_fail_when_the_manager_hangs_up() {
        let (manager, client) = UnixStream::pair().unwrap();
        drop(manager);
        assert!(receive_fd(client.as_raw_fd()).is_err());
    }
}
