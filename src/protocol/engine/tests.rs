// src/protocol/engine/tests.rs

use super::*;
use crate::backends::HeadlessBackend;
use crate::canvas::Rotation;
use crate::color::Rgb;
use crate::config::{ColorScheme, LayoutConfig};
use anyhow::anyhow;
use std::collections::VecDeque;
use test_log::test;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

#[derive(Debug)]
enum Step {
    Data(&'static [u8]),
    Hangup,
    Timeout,
    Interrupt,
    Fail,
}

/// Replays a fixed script of channel events.
#[derive(Debug, Default)]
struct ScriptedChannel {
    steps: VecDeque<Step>,
    reopens: usize,
    waits: usize,
}

impl ScriptedChannel {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            ..Default::default()
        }
    }
}

impl CommandChannel for ScriptedChannel {
    fn wait(&mut self, _timeout: Option<Duration>) -> Result<Readiness> {
        self.waits += 1;
        match self.steps.front() {
            None | Some(Step::Timeout) => {
                self.steps.pop_front();
                Ok(Readiness::TimedOut)
            }
            Some(Step::Interrupt) => {
                self.steps.pop_front();
                Ok(Readiness::Interrupted)
            }
            Some(Step::Fail) => Err(anyhow!("poll failed")),
            Some(_) => Ok(Readiness::Ready),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.steps.pop_front() {
            Some(Step::Data(bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                if n < bytes.len() {
                    self.steps.push_front(Step::Data(&bytes[n..]));
                }
                Ok(n)
            }
            Some(Step::Hangup) => Ok(0),
            other => panic!("read without data: {:?}", other),
        }
    }

    fn reopen(&mut self) -> Result<()> {
        self.reopens += 1;
        Ok(())
    }
}

fn scheme() -> ColorScheme {
    ColorScheme {
        bar: Rgb::new(0x12, 0x34, 0x56),
        ..ColorScheme::default()
    }
}

/// Runs `steps` against a fresh backend showing the initial scene.
fn run_script(steps: Vec<Step>) -> (HeadlessBackend, ScriptedChannel, EngineExit) {
    let layout = LayoutConfig::default();
    let splash = Splash::new(scheme(), &layout);
    let mut backend = HeadlessBackend::new(WIDTH, HEIGHT, Rotation::Deg0, true);
    splash.draw_initial_scene(&mut backend.canvas());
    backend.flip(true).unwrap();

    let mut channel = ScriptedChannel::new(steps);
    let exit = CommandEngine::new(&splash, None)
        .run(&mut channel, &mut backend)
        .unwrap();
    (backend, channel, exit)
}

fn flips_after_setup(backend: &HeadlessBackend) -> usize {
    backend.flip_count() - 1
}

fn contains_color(frame: &[u8], color: Rgb) -> bool {
    let (packed, len) = crate::canvas::PixelFormat::Rgb888
        .pack(32, color)
        .unwrap();
    frame.chunks_exact(4).any(|pixel| pixel == &packed[..len])
}

#[test]
fn it_should_dispatch_lines_split_across_reads_exactly_once() {
    let (split, _, exit) = run_script(vec![
        Step::Data(b"MSG a\nPROG"),
        Step::Data(b"RESS 50\n"),
    ]);
    assert_eq!(exit, EngineExit::TimedOut);
    assert_eq!(flips_after_setup(&split), 2);

    let (whole, _, _) = run_script(vec![Step::Data(b"MSG a\nPROGRESS 50\n")]);
    assert_eq!(flips_after_setup(&whole), 2);
    assert_eq!(split.front_frame(), whole.front_frame());
}

#[test]
fn it_should_reopen_the_channel_after_a_writer_disconnects() {
    let (backend, channel, exit) = run_script(vec![
        Step::Data(b"MSG first\n"),
        Step::Hangup,
        Step::Data(b"PROGRESS 10\n"),
        Step::Hangup,
        Step::Data(b"QUIT\n"),
    ]);
    assert_eq!(exit, EngineExit::Quit);
    assert_eq!(channel.reopens, 2);
    assert_eq!(flips_after_setup(&backend), 2);
}

#[test]
fn it_should_return_when_the_wait_times_out() {
    let (backend, _, exit) = run_script(vec![Step::Timeout, Step::Data(b"MSG late\n")]);
    assert_eq!(exit, EngineExit::TimedOut);
    assert_eq!(flips_after_setup(&backend), 0);
}

#[test]
fn it_should_return_when_interrupted() {
    let (backend, _, exit) = run_script(vec![Step::Data(b"PROGRESS 1\n"), Step::Interrupt]);
    assert_eq!(exit, EngineExit::Interrupted);
    assert_eq!(flips_after_setup(&backend), 1);
}

#[test]
fn it_should_quit_without_a_final_flip() {
    let (backend, channel, exit) = run_script(vec![Step::Data(b"PROGRESS 5\nQUIT\nMSG ignored\n")]);
    assert_eq!(exit, EngineExit::Quit);
    assert_eq!(flips_after_setup(&backend), 1);
    assert_eq!(channel.waits, 1);
}

#[test]
fn it_should_flip_for_unknown_and_argument_less_commands() {
    let (backend, _, exit) = run_script(vec![Step::Data(b"FOO bar\n\n\nMSG\nPROGRESS\n")]);
    assert_eq!(exit, EngineExit::TimedOut);
    assert_eq!(flips_after_setup(&backend), 3);
}

#[test]
fn it_should_clamp_progress_magnitude() {
    let frame = |data: &'static [u8]| run_script(vec![Step::Data(data)]).0.front_frame().to_vec();
    assert_eq!(frame(b"PROGRESS 150\n"), frame(b"PROGRESS 100\n"));
    assert_eq!(frame(b"PROGRESS -150\n"), frame(b"PROGRESS -100\n"));
    assert_ne!(frame(b"PROGRESS 50\n"), frame(b"PROGRESS -50\n"));
}

#[test]
fn it_should_draw_no_bar_pixels_for_zero_progress() {
    let (initial, _, _) = run_script(vec![]);
    assert!(!contains_color(initial.front_frame(), scheme().bar));

    let (filled, _, _) = run_script(vec![Step::Data(b"PROGRESS 40\n")]);
    assert!(contains_color(filled.front_frame(), scheme().bar));

    // The third command lands in the buffer that showed 40%.
    let (cleared, _, _) = run_script(vec![Step::Data(b"PROGRESS 40\nPROGRESS 30\nPROGRESS 0\n")]);
    assert!(!contains_color(cleared.front_frame(), scheme().bar));
    assert_eq!(cleared.front_frame(), initial.front_frame());
}

#[test]
fn it_should_draw_each_command_into_the_alternate_buffer() {
    let (backend, _, _) = run_script(vec![Step::Data(b"MSG one\nMSG two\n")]);
    // Front shows "two"; back still holds "one" drawn over the synced scene.
    assert_ne!(backend.front_frame(), backend.back_frame());

    let (once, _, _) = run_script(vec![Step::Data(b"MSG two\n")]);
    assert_eq!(backend.front_frame(), once.front_frame());
}

#[test]
fn it_should_propagate_channel_failures() {
    let layout = LayoutConfig::default();
    let splash = Splash::new(scheme(), &layout);
    let mut backend = HeadlessBackend::new(WIDTH, HEIGHT, Rotation::Deg0, false);
    let mut channel = ScriptedChannel::new(vec![Step::Fail]);
    let result = CommandEngine::new(&splash, None).run(&mut channel, &mut backend);
    assert!(result.is_err());
}
