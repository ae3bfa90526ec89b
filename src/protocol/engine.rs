// src/protocol/engine.rs

//! Reads commands from a channel and applies them to the splash scene.
//!
//! The engine is a single blocking loop: wait for input, read what is there,
//! dispatch every complete line, then wait again. Each dispatched command
//! (other than `QUIT`) ends with a flip so its effect becomes visible before
//! the next one is read.

use super::{Command, CommandBuffer};
use crate::backends::Backend;
use crate::splash::Splash;
use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use std::io;
use std::time::Duration;

/// Outcome of waiting on a [`CommandChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    TimedOut,
    /// A termination signal arrived while waiting.
    Interrupted,
}

/// Source of protocol bytes.
pub trait CommandChannel {
    /// Blocks until data (or a hangup) is available, `timeout` passes, or
    /// shutdown is requested. `None` waits forever.
    fn wait(&mut self, timeout: Option<Duration>) -> Result<Readiness>;

    /// Reads available bytes. `Ok(0)` means the last writer went away.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Re-opens the channel so later writers can reach us again.
    fn reopen(&mut self) -> Result<()>;
}

/// Why [`CommandEngine::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineExit {
    Quit,
    TimedOut,
    Interrupted,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct CommandEngine<'s> {
    splash: &'s Splash<'s>,
    timeout: Option<Duration>,
    buffer: CommandBuffer,
}

impl<'s> CommandEngine<'s> {
    pub fn new(splash: &'s Splash<'s>, timeout: Option<Duration>) -> Self {
        Self {
            splash,
            timeout,
            buffer: CommandBuffer::default(),
        }
    }

    /// Serves commands until `QUIT`, a timeout, or an interrupting signal.
    ///
    /// Only channel failures are errors; malformed input and failed flips are
    /// logged and skipped.
    pub fn run<C, B>(&mut self, channel: &mut C, backend: &mut B) -> Result<EngineExit>
    where
        C: CommandChannel + ?Sized,
        B: Backend + ?Sized,
    {
        loop {
            match channel.wait(self.timeout)? {
                Readiness::Ready => {}
                Readiness::TimedOut => {
                    info!("CommandEngine: no command within {:?}, exiting", self.timeout);
                    return Ok(EngineExit::TimedOut);
                }
                Readiness::Interrupted => {
                    info!("CommandEngine: interrupted by signal");
                    return Ok(EngineExit::Interrupted);
                }
            }

            let count = match channel.read(self.buffer.spare_mut()) {
                Ok(count) => count,
                Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                    trace!("CommandEngine: spurious wakeup ({})", e);
                    continue;
                }
                Err(e) => return Err(e).context("Failed to read from command channel"),
            };

            if count == 0 {
                debug!("CommandEngine: writer closed the channel, reopening");
                channel.reopen().context("Failed to reopen command channel")?;
                continue;
            }

            self.buffer.commit(count);
            for command in self.buffer.take_commands() {
                if self.dispatch(command, backend) == Flow::Stop {
                    return Ok(EngineExit::Quit);
                }
            }
        }
    }

    fn dispatch<B: Backend + ?Sized>(&self, command: Command, backend: &mut B) -> Flow {
        debug!("CommandEngine: {:?}", command);
        match command {
            Command::Quit => return Flow::Stop,
            Command::Msg(Some(text)) => self.splash.draw_msg(&mut backend.canvas(), &text),
            Command::Progress(Some(value)) => {
                self.splash.draw_progress(&mut backend.canvas(), value)
            }
            Command::Msg(None) | Command::Progress(None) => {
                trace!("CommandEngine: command without argument, nothing to draw")
            }
            Command::Unknown(line) => trace!("CommandEngine: ignoring {:?}", line),
        }
        if let Err(e) = backend.flip(false) {
            warn!("CommandEngine: flip failed: {:#}", e);
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests;
