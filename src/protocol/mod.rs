// src/protocol/mod.rs

//! The line-oriented command protocol spoken over the fifo.
//!
//! ```text
//! MSG <text>          redraw the status message
//! PROGRESS <n>        redraw the progress bar, n in [-100, 100]
//! QUIT                stop rendering
//! ```
//!
//! Lines end with `\n` or NUL. Writers may deliver a line in several pieces,
//! so bytes are accumulated in a [`CommandBuffer`] until a terminator shows
//! up.

pub mod engine;

pub use engine::{CommandChannel, CommandEngine, EngineExit, Readiness};

use log::trace;

/// Size of the receive buffer, and so the longest line that is kept intact.
pub const BUFFER_CAPACITY: usize = 2048;

/// One decoded protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` when the line had no argument.
    Msg(Option<String>),
    Progress(Option<i32>),
    Quit,
    /// Anything with an unrecognised verb, kept for logging.
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        if line == "QUIT" {
            return Command::Quit;
        }
        let line = line.trim_start_matches(' ');
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb, Some(arg).filter(|a| !a.is_empty())),
            None => (line, None),
        };
        match verb {
            "MSG" => Command::Msg(arg.map(str::to_owned)),
            "PROGRESS" => Command::Progress(arg.map(parse_int)),
            "QUIT" => Command::Quit,
            _ => Command::Unknown(line.to_owned()),
        }
    }
}

/// Lenient integer parsing: optional leading whitespace and sign, then
/// digits up to the first non-digit. Anything unparsable is 0 and
/// out-of-range values saturate.
pub fn parse_int(text: &str) -> i32 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(digit - b'0')).min(i64::from(i32::MAX) + 1);
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == 0
}

/// Accumulates raw channel bytes and splits them into commands.
///
/// A trailing partial line stays in the buffer until a later read completes
/// it. A buffer filled to capacity without any terminator is handed out as
/// one line so reading can continue.
#[derive(Debug)]
pub struct CommandBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::with_capacity(BUFFER_CAPACITY)
    }
}

impl CommandBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity.max(1)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Space available for the next read. Never empty after
    /// [`take_commands`](Self::take_commands).
    pub fn spare_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.len..]
    }

    /// Marks `count` bytes of [`spare_mut`](Self::spare_mut) as filled.
    pub fn commit(&mut self, count: usize) {
        self.len = (self.len + count).min(self.data.len());
    }

    /// Bytes received but not yet part of a complete line.
    pub fn pending(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Extracts every complete line, skipping empty ones.
    pub fn take_commands(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        let mut start = 0;

        while let Some(offset) = self.data[start..self.len].iter().position(|&b| is_terminator(b)) {
            let end = start + offset;
            if end > start {
                commands.push(Self::decode(&self.data[start..end]));
            }
            start = end + 1;
        }

        if start == 0 && self.len == self.data.len() {
            trace!("CommandBuffer: flushing {} unterminated bytes", self.len);
            commands.push(Self::decode(&self.data[..self.len]));
            start = self.len;
        }

        self.data.copy_within(start..self.len, 0);
        self.len -= start;
        commands
    }

    fn decode(line: &[u8]) -> Command {
        Command::parse(&String::from_utf8_lossy(line))
    }
}
