// src/signals.rs

//! Termination signal handling.
//!
//! The handlers only raise a flag. The termination signals stay blocked
//! while the process runs and are unblocked only for the duration of the
//! command wait (see [`wait_mask`]), so a signal that arrives just before
//! the wait starts is held pending and interrupts it instead of being lost.

use anyhow::{Context, Result};
use log::debug;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

const TERMINATION_SIGNALS: [Signal; 4] = [
    Signal::SIGHUP,
    Signal::SIGINT,
    Signal::SIGQUIT,
    Signal::SIGTERM,
];

extern "C" fn on_termination(_signal: libc::c_int) {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

fn termination_set() -> SigSet {
    let mut set = SigSet::empty();
    for signal in TERMINATION_SIGNALS {
        set.add(signal);
    }
    set
}

/// Installs the flag-raising handlers and blocks the termination signals in
/// the calling thread. Call it from the thread that runs the command loop.
pub fn install_shutdown_handlers() -> Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_termination),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for signal in TERMINATION_SIGNALS {
        // SAFETY: the handler only touches an atomic.
        unsafe { sigaction(signal, &action) }
            .with_context(|| format!("Failed to install handler for {}", signal))?;
    }
    termination_set()
        .thread_block()
        .context("Failed to block termination signals")?;
    debug!("Signals: shutdown handlers installed");
    Ok(())
}

/// The calling thread's signal mask with the termination signals removed,
/// for use as the temporary mask of a `ppoll`.
pub fn wait_mask() -> Result<SigSet> {
    let mut mask = SigSet::thread_get_mask().context("Failed to read the signal mask")?;
    for signal in TERMINATION_SIGNALS {
        mask.remove(signal);
    }
    Ok(mask)
}

/// True once any termination signal has been delivered.
pub fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}
