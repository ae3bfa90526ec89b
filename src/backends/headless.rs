// src/backends/headless.rs

//! In-memory backend with no display attached.

use super::{Backend, DoubleBuffer, RefreshSync};
use crate::canvas::{Canvas, CanvasInfo, PixelFormat, Rotation};
use anyhow::Result;
use log::{info, trace};

/// Counts refresh waits and records which frame was presented.
#[derive(Debug, Default)]
struct HeadlessDisplay {
    refresh_waits: usize,
    shown: Vec<usize>,
}

impl RefreshSync for HeadlessDisplay {
    fn wait_for_refresh(&mut self) -> Result<()> {
        self.refresh_waits += 1;
        Ok(())
    }

    fn show(&mut self, index: usize) -> Result<()> {
        trace!("HeadlessBackend: presenting frame {}", index);
        self.shown.push(index);
        Ok(())
    }
}

#[derive(Debug)]
pub struct HeadlessBackend {
    info: CanvasInfo,
    buffers: DoubleBuffer<Vec<Vec<u8>>>,
    display: HeadlessDisplay,
    flips: usize,
}

impl HeadlessBackend {
    /// A 32 bpp RGB888 surface of `width` x `height` physical pixels.
    pub fn new(width: u32, height: u32, rotation: Rotation, double_buffered: bool) -> Self {
        let stride = width as usize * 4;
        let info = CanvasInfo::from_physical(
            width,
            height,
            32,
            stride,
            rotation,
            PixelFormat::Rgb888,
        );
        Self::with_info(info, double_buffered)
    }

    pub fn with_info(info: CanvasInfo, double_buffered: bool) -> Self {
        let count = if double_buffered { 2 } else { 1 };
        let frames = vec![vec![0u8; info.frame_len()]; count];
        info!(
            "HeadlessBackend: {}x{} {} bpp, {} frame(s)",
            info.width, info.height, info.bpp, count
        );
        Self {
            info,
            buffers: DoubleBuffer::new(frames, 0),
            display: HeadlessDisplay::default(),
            flips: 0,
        }
    }

    /// Contents of the frame currently "on screen".
    pub fn front_frame(&self) -> &[u8] {
        self.buffers.front_frame()
    }

    pub fn back_frame(&self) -> &[u8] {
        self.buffers.back_frame()
    }

    pub fn flip_count(&self) -> usize {
        self.flips
    }

    pub fn refresh_waits(&self) -> usize {
        self.display.refresh_waits
    }

    /// Frame indices in the order they were presented.
    pub fn presented(&self) -> &[usize] {
        &self.display.shown
    }
}

impl Backend for HeadlessBackend {
    fn info(&self) -> CanvasInfo {
        self.info
    }

    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(self.info, self.buffers.back_frame_mut())
    }

    fn flip(&mut self, sync: bool) -> Result<()> {
        self.flips += 1;
        self.buffers.flip(&mut self.display, sync)
    }
}
