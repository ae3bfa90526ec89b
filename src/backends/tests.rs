// src/backends/tests.rs

use super::*;
use crate::canvas::Rotation;
use crate::color::Rgb;
use anyhow::anyhow;
use test_log::test;

#[derive(Debug, Default)]
struct ScriptedDisplay {
    waits: usize,
    shown: Vec<usize>,
    fail_wait: bool,
    fail_show: bool,
}

impl RefreshSync for ScriptedDisplay {
    fn wait_for_refresh(&mut self) -> Result<()> {
        self.waits += 1;
        if self.fail_wait {
            return Err(anyhow!("no vsync"));
        }
        Ok(())
    }

    fn show(&mut self, index: usize) -> Result<()> {
        if self.fail_show {
            return Err(anyhow!("pan rejected"));
        }
        self.shown.push(index);
        Ok(())
    }
}

fn two_frames() -> DoubleBuffer<Vec<Vec<u8>>> {
    DoubleBuffer::new(vec![vec![0u8; 8], vec![0u8; 8]], 0)
}

#[test]
fn it_should_wait_then_present_the_back_frame_and_swap_roles() {
    let mut buffers = two_frames();
    let mut display = ScriptedDisplay::default();
    assert_eq!((buffers.front(), buffers.back()), (0, 1));

    buffers.back_frame_mut().fill(7);
    buffers.flip(&mut display, false).unwrap();

    assert_eq!(display.waits, 1);
    assert_eq!(display.shown, vec![1]);
    assert_eq!((buffers.front(), buffers.back()), (1, 0));
    assert_eq!(buffers.front_frame(), &[7u8; 8]);
    // Without sync the new back keeps its stale contents.
    assert_eq!(buffers.back_frame(), &[0u8; 8]);
}

#[test]
fn it_should_copy_the_new_front_into_the_back_on_sync() {
    let mut buffers = two_frames();
    let mut display = ScriptedDisplay::default();
    buffers.back_frame_mut().copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    buffers.flip(&mut display, true).unwrap();
    assert_eq!(buffers.back_frame(), buffers.front_frame());

    // And again in the other direction.
    buffers.back_frame_mut()[0] = 42;
    buffers.flip(&mut display, true).unwrap();
    assert_eq!(buffers.front(), 0);
    assert_eq!(buffers.back_frame()[0], 42);
    assert_eq!(display.shown, vec![1, 0]);
}

#[test]
fn it_should_treat_a_single_frame_as_both_front_and_back() {
    let mut buffers = DoubleBuffer::new(vec![vec![0u8; 4]], 0);
    let mut display = ScriptedDisplay::default();
    assert!(!buffers.is_double());
    buffers.back_frame_mut()[1] = 9;
    buffers.flip(&mut display, true).unwrap();
    assert_eq!(display.waits, 0);
    assert!(display.shown.is_empty());
    assert_eq!(buffers.front_frame(), &[0, 9, 0, 0]);
}

#[test]
fn it_should_swap_even_when_the_refresh_wait_fails() {
    let mut buffers = two_frames();
    let mut display = ScriptedDisplay {
        fail_wait: true,
        ..Default::default()
    };
    buffers.flip(&mut display, false).unwrap();
    assert_eq!(buffers.front(), 1);
}

#[test]
fn it_should_keep_roles_when_presenting_fails() {
    let mut buffers = two_frames();
    let mut display = ScriptedDisplay {
        fail_show: true,
        ..Default::default()
    };
    assert!(buffers.flip(&mut display, false).is_err());
    assert_eq!(buffers.front(), 0);
}

#[test]
fn it_should_start_from_the_frame_reported_as_front() {
    let buffers = DoubleBuffer::new(vec![vec![0u8; 1], vec![0u8; 1]], 1);
    assert_eq!((buffers.front(), buffers.back()), (1, 0));
    let clamped = DoubleBuffer::new(vec![vec![0u8; 1]], 1);
    assert_eq!(clamped.front(), 0);
}

#[test]
fn it_should_draw_into_the_back_frame_of_the_headless_backend() {
    let mut backend = HeadlessBackend::new(4, 2, Rotation::Deg0, true);
    backend.canvas().plot(0, 0, Rgb::new(255, 255, 255));
    assert!(backend.front_frame().iter().all(|&b| b == 0));
    assert!(backend.back_frame().iter().any(|&b| b != 0));

    backend.flip(true).unwrap();
    assert_eq!(backend.flip_count(), 1);
    assert_eq!(backend.refresh_waits(), 1);
    assert_eq!(backend.presented(), &[1]);
    assert_eq!(backend.front_frame(), backend.back_frame());
}

#[test]
fn it_should_report_rotated_geometry_from_the_headless_backend() {
    let backend = HeadlessBackend::new(6, 4, Rotation::Deg90, false);
    let info = backend.info();
    assert_eq!((info.width, info.height), (4, 6));
    assert_eq!(info.frame_len(), 6 * 4 * 4);
}
