// src/fifo.rs

//! The named pipe that carries protocol commands.
//!
//! [`Fifo`] owns the filesystem node and removes it on drop. [`FifoChannel`]
//! is the read end, opened non-blocking so that opening never waits for a
//! writer. When the last writer closes, reads return end-of-file until the
//! fifo is opened again, which the engine does through
//! [`CommandChannel::reopen`].

use crate::protocol::{CommandChannel, Readiness};
use crate::signals;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use nix::errno::Errno;
use nix::poll::{ppoll, PollFd, PollFlags};
use nix::sys::stat::Mode;
use nix::sys::time::TimeSpec;
use nix::unistd::mkfifo;
use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::os::fd::AsFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The fifo node on disk. Unlinked when dropped.
#[derive(Debug)]
pub struct Fifo {
    path: PathBuf,
}

impl Fifo {
    /// Creates the fifo with mode 0660. An existing node at `path` is reused.
    pub fn create(path: &Path) -> Result<Self> {
        let mode = Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IWGRP;
        match mkfifo(path, mode) {
            Ok(()) => info!("Fifo: created {}", path.display()),
            Err(Errno::EEXIST) => debug!("Fifo: reusing existing {}", path.display()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create fifo {}", path.display()))
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Fifo {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("Fifo: failed to remove {}: {}", self.path.display(), e);
        } else {
            debug!("Fifo: removed {}", self.path.display());
        }
    }
}

/// Non-blocking read end of the command fifo.
#[derive(Debug)]
pub struct FifoChannel {
    path: PathBuf,
    file: File,
}

impl FifoChannel {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            file: open_read_end(path)?,
        })
    }
}

fn open_read_end(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
        .with_context(|| format!("Failed to open fifo {} for reading", path.display()))
}

/// Upper bound for a single wait; longer timeouts do not fit a `timespec`
/// on every target.
const LONGEST_WAIT: Duration = Duration::from_secs(i32::MAX as u64);

impl CommandChannel for FifoChannel {
    fn wait(&mut self, timeout: Option<Duration>) -> Result<Readiness> {
        if signals::shutdown_requested() {
            return Ok(Readiness::Interrupted);
        }
        // Termination signals are only deliverable inside ppoll, so one that
        // arrived after the check above is still pending and interrupts it.
        let mask = signals::wait_mask()?;
        let timeout = timeout.map(|t| TimeSpec::from_duration(t.min(LONGEST_WAIT)));
        let mut fds = [PollFd::new(self.file.as_fd(), PollFlags::POLLIN)];
        match ppoll(&mut fds, timeout, Some(mask)) {
            Ok(0) => Ok(Readiness::TimedOut),
            Ok(_) => Ok(Readiness::Ready),
            Err(Errno::EINTR) if signals::shutdown_requested() => Ok(Readiness::Interrupted),
            // Some other signal; the read that follows sees EAGAIN and loops.
            Err(Errno::EINTR) => Ok(Readiness::Ready),
            Err(e) => Err(e).context("ppoll on command fifo failed"),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }

    fn reopen(&mut self) -> Result<()> {
        self.file = open_read_end(&self.path)?;
        Ok(())
    }
}
