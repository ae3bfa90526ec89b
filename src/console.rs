// src/console.rs

//! Virtual terminal switching.
//!
//! While the splash is up the kernel console must not draw over it, so we
//! move to a free VT and put it in graphics mode. [`ConsoleGuard`] remembers
//! the VT that was active and switches back, in text mode, when dropped.

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};

const CONSOLE_PATH: &str = "/dev/tty0";

const KD_TEXT: libc::c_int = 0x00;
const KD_GRAPHICS: libc::c_int = 0x01;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
#[allow(dead_code)]
pub struct VtStat {
    pub v_active: u16,
    pub v_signal: u16,
    pub v_state: u16,
}

mod ioctl {
    use super::VtStat;

    const VT_OPENQRY: u32 = 0x5600;
    const VT_GETSTATE: u32 = 0x5603;
    const VT_ACTIVATE: u32 = 0x5606;
    const VT_WAITACTIVE: u32 = 0x5607;
    const KDSETMODE: u32 = 0x4B3A;

    nix::ioctl_read_bad!(vt_openqry, VT_OPENQRY, libc::c_int);
    nix::ioctl_read_bad!(vt_getstate, VT_GETSTATE, VtStat);
    nix::ioctl_write_int_bad!(vt_activate, VT_ACTIVATE);
    nix::ioctl_write_int_bad!(vt_waitactive, VT_WAITACTIVE);
    nix::ioctl_write_int_bad!(kd_setmode, KDSETMODE);
}

fn open_tty(path: &str) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_NONBLOCK | libc::O_NOCTTY)
        .open(path)
        .with_context(|| format!("Failed to open {}", path))
}

fn activate(fd: RawFd, vt: libc::c_int) -> Result<()> {
    unsafe { ioctl::vt_activate(fd, vt) }.with_context(|| format!("VT_ACTIVATE {} failed", vt))?;
    unsafe { ioctl::vt_waitactive(fd, vt) }
        .with_context(|| format!("VT_WAITACTIVE {} failed", vt))?;
    Ok(())
}

/// Holds the splash VT in graphics mode until dropped.
#[derive(Debug)]
pub struct ConsoleGuard {
    vt: File,
    previous: libc::c_int,
}

impl ConsoleGuard {
    /// Switches to a free VT. Failure is not fatal to the splash, so it is
    /// logged and `None` returned.
    pub fn acquire() -> Option<Self> {
        match Self::switch() {
            Ok(guard) => Some(guard),
            Err(e) => {
                warn!("ConsoleGuard: console switch skipped: {:#}", e);
                None
            }
        }
    }

    fn switch() -> Result<Self> {
        let console = open_tty(CONSOLE_PATH)?;
        let fd = console.as_raw_fd();

        let mut state = VtStat::default();
        unsafe { ioctl::vt_getstate(fd, &mut state) }.context("VT_GETSTATE failed")?;

        let mut free: libc::c_int = -1;
        unsafe { ioctl::vt_openqry(fd, &mut free) }.context("VT_OPENQRY failed")?;
        if free <= 0 {
            bail!("no free virtual terminal");
        }
        drop(console);

        let vt = open_tty(&format!("/dev/tty{}", free))?;
        let guard = ConsoleGuard {
            vt,
            previous: libc::c_int::from(state.v_active),
        };
        let fd = guard.vt.as_raw_fd();
        activate(fd, free)?;
        unsafe { ioctl::kd_setmode(fd, KD_GRAPHICS) }.context("KDSETMODE KD_GRAPHICS failed")?;

        info!("ConsoleGuard: switched from VT {} to VT {}", guard.previous, free);
        Ok(guard)
    }
}

impl Drop for ConsoleGuard {
    fn drop(&mut self) {
        let fd = self.vt.as_raw_fd();
        if let Err(e) = unsafe { ioctl::kd_setmode(fd, KD_TEXT) } {
            warn!("ConsoleGuard: failed to restore text mode: {}", e);
        }
        match activate(fd, self.previous) {
            Ok(()) => debug!("ConsoleGuard: restored VT {}", self.previous),
            Err(e) => warn!("ConsoleGuard: failed to restore VT {}: {:#}", self.previous, e),
        }
    }
}
