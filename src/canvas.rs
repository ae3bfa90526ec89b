// src/canvas.rs

//! The drawable surface handed to the drawing layer by a backend.
//!
//! A `Canvas` couples the surface geometry (`CanvasInfo`) with a mutable view
//! of the buffer currently designated "back". Every write funnels through
//! [`Canvas::plot`], which performs clipping, rotation and pixel packing in one
//! place; higher level operations in `crate::draw` only ever call `plot`.

use crate::color::Rgb;
use std::fmt;

/// Logical-to-physical rotation applied by the plotter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// True when logical width/height are the physical height/width.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u32> for Rotation {
    type Error = String;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("unsupported angle {}, expected 0, 90, 180 or 270", other)),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Position and width of one color channel inside a packed pixel word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Channel {
    pub offset: u32,
    pub length: u32,
}

impl Channel {
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    #[inline]
    fn place(self, value: u8) -> u32 {
        let value = u32::from(value) >> 8u32.saturating_sub(self.length);
        value.checked_shl(self.offset).unwrap_or(0)
    }
}

/// Channel layout of the display, classified once from the offsets the
/// backend reports so the plotter can take a fixed packing path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgb565,
    Bgr565,
    Rgb888,
    Bgr888,
    Generic {
        red: Channel,
        green: Channel,
        blue: Channel,
    },
}

impl PixelFormat {
    pub fn classify(red: Channel, green: Channel, blue: Channel) -> Self {
        let layout = (
            (red.offset, red.length),
            (green.offset, green.length),
            (blue.offset, blue.length),
        );
        match layout {
            ((11, 5), (5, 6), (0, 5)) => PixelFormat::Rgb565,
            ((0, 5), (5, 6), (11, 5)) => PixelFormat::Bgr565,
            ((16, 8), (8, 8), (0, 8)) => PixelFormat::Rgb888,
            ((0, 8), (8, 8), (16, 8)) => PixelFormat::Bgr888,
            _ => PixelFormat::Generic { red, green, blue },
        }
    }

    /// Packs `color` into the bytes of one pixel at `bpp` bits per pixel.
    ///
    /// Returns the packed bytes and how many of them are used, or `None` when
    /// the depth is not supported for this layout.
    pub fn pack(self, bpp: u32, color: Rgb) -> Option<([u8; 4], usize)> {
        let Rgb { r, g, b } = color;
        match self {
            PixelFormat::Rgb565 | PixelFormat::Rgb888 => pack_ordered(bpp, r, g, b),
            // Same packing as RGB with the red and blue channels exchanged.
            PixelFormat::Bgr565 | PixelFormat::Bgr888 => pack_ordered(bpp, b, g, r),
            PixelFormat::Generic { red, green, blue } => {
                let word = red.place(r) | green.place(g) | blue.place(b);
                match bpp {
                    32 => Some((word.to_ne_bytes(), 4)),
                    16 => {
                        let [lo, hi] = (word as u16).to_ne_bytes();
                        Some(([lo, hi, 0, 0], 2))
                    }
                    _ => None,
                }
            }
        }
    }
}

/// `hi` lands in the most significant channel, `lo` in the least.
fn pack_ordered(bpp: u32, hi: u8, mid: u8, lo: u8) -> Option<([u8; 4], usize)> {
    match bpp {
        16 => {
            let word = (u16::from(hi >> 3) << 11) | (u16::from(mid >> 2) << 5) | u16::from(lo >> 3);
            let [a, b] = word.to_ne_bytes();
            Some(([a, b, 0, 0], 2))
        }
        24 => {
            if cfg!(target_endian = "big") {
                Some(([hi, mid, lo, 0], 3))
            } else {
                Some(([lo, mid, hi, 0], 3))
            }
        }
        32 => {
            let word = (u32::from(hi) << 16) | (u32::from(mid) << 8) | u32::from(lo);
            Some((word.to_ne_bytes(), 4))
        }
        _ => None,
    }
}

/// Geometry and format of a canvas, independent of the buffer it points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasInfo {
    /// Logical width (after rotation).
    pub width: u32,
    /// Logical height (after rotation).
    pub height: u32,
    pub bpp: u32,
    /// Bytes per physical row.
    pub stride: usize,
    pub rotation: Rotation,
    pub format: PixelFormat,
}

impl CanvasInfo {
    /// Builds the logical description of a physical surface, swapping the
    /// dimensions for quarter-turn rotations.
    pub fn from_physical(
        physical_width: u32,
        physical_height: u32,
        bpp: u32,
        stride: usize,
        rotation: Rotation,
        format: PixelFormat,
    ) -> Self {
        let (width, height) = if rotation.swaps_axes() {
            (physical_height, physical_width)
        } else {
            (physical_width, physical_height)
        };
        Self {
            width,
            height,
            bpp,
            stride,
            rotation,
            format,
        }
    }

    pub fn physical_height(&self) -> u32 {
        if self.rotation.swaps_axes() {
            self.width
        } else {
            self.height
        }
    }

    /// Bytes covered by one full frame of this surface.
    pub fn frame_len(&self) -> usize {
        self.stride * self.physical_height() as usize
    }

    /// Byte offset of logical pixel `(x, y)`, or `None` when it lies outside
    /// the canvas.
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let (w, h) = (self.width, self.height);
        let (px, py) = match self.rotation {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (y, w - x - 1),
            Rotation::Deg180 => (w - x - 1, h - y - 1),
            Rotation::Deg270 => (h - y - 1, x),
        };
        Some(py as usize * self.stride + px as usize * (self.bpp as usize >> 3))
    }
}

/// Anything that accepts logical pixel writes.
///
/// Implemented by [`Canvas`]; tests substitute recorders.
pub trait PixelSink {
    fn plot(&mut self, x: i32, y: i32, color: Rgb);
}

/// A writable view of the back buffer.
pub struct Canvas<'a> {
    info: CanvasInfo,
    data: &'a mut [u8],
}

impl<'a> Canvas<'a> {
    pub fn new(info: CanvasInfo, data: &'a mut [u8]) -> Self {
        debug_assert!(
            data.len() >= info.frame_len(),
            "canvas buffer holds {} bytes, frame needs {}",
            data.len(),
            info.frame_len()
        );
        Self { info, data }
    }

    pub fn info(&self) -> &CanvasInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Writes one pixel. Out-of-canvas coordinates and unsupported depths are
    /// silently ignored.
    pub fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        let Some(offset) = self.info.offset(x, y) else {
            return;
        };
        let Some((bytes, len)) = self.info.format.pack(self.info.bpp, color) else {
            return;
        };
        if let Some(dst) = self.data.get_mut(offset..offset + len) {
            dst.copy_from_slice(&bytes[..len]);
        }
    }
}

impl PixelSink for Canvas<'_> {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        Canvas::plot(self, x, y, color);
    }
}

impl fmt::Debug for Canvas<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("info", &self.info)
            .field("len", &self.data.len())
            .finish()
    }
}
