// src/draw/rle.rs

//! Run-length encoded image decoding.
//!
//! The stream is a sequence of records, each starting with a length byte:
//!
//! ```text
//! 1nnnnnnn  <pixel>                 run:     one pixel repeated n times
//! 0nnnnnnn  <pixel> x n             literal: n distinct pixels
//! ```
//!
//! A pixel is 3 bytes (RGB) or 4 bytes (RGBA). In RGBA streams a zero fourth
//! byte marks the pixel fully transparent; anything else is opaque. Records
//! may span row boundaries. A record with `n == 0` ends the stream.

use crate::canvas::PixelSink;
use crate::color::Rgb;
use log::trace;

const RUN_FLAG: u8 = 0x80;
const LENGTH_MASK: u8 = 0x7f;

/// A compiled-in RLE image.
#[derive(Debug, Clone, Copy)]
pub struct RleImage<'a> {
    pub width: u32,
    pub height: u32,
    /// 3 (RGB) or 4 (RGBA).
    pub bytes_per_pixel: u32,
    /// Bytes per encoded row; may exceed `width * bytes_per_pixel`.
    pub rowstride: u32,
    pub data: &'a [u8],
}

/// Tracks the decode position in image space.
struct Cursor {
    dx: u32,
    dy: u32,
    width: u32,
    height: u32,
    bytes_per_pixel: u32,
    rowstride: u32,
}

impl Cursor {
    fn emit<S: PixelSink + ?Sized>(&mut self, sink: &mut S, x: i32, y: i32, pixel: &[u8]) {
        let opaque = self.bytes_per_pixel < 4 || pixel[3] != 0;
        if opaque && self.dx < self.width && self.dy < self.height {
            sink.plot(
                x.saturating_add(self.dx as i32),
                y.saturating_add(self.dy as i32),
                Rgb::new(pixel[0], pixel[1], pixel[2]),
            );
        }
        self.dx += 1;
        if self.dx * self.bytes_per_pixel >= self.rowstride {
            self.dx = 0;
            self.dy += 1;
        }
    }
}

/// Decodes `image` with its top-left corner at `(x, y)`.
///
/// Decoding stops at the end marker, when `rowstride * height` encoded bytes
/// have been consumed, when the input runs out, or once every row has been
/// produced. Malformed streams are drawn as far as they are safe to read.
pub fn draw_image<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y: i32, image: &RleImage<'_>) {
    let bpp = image.bytes_per_pixel as usize;
    if !(3..=4).contains(&bpp) || image.rowstride < image.bytes_per_pixel {
        trace!(
            "draw_image: refusing image with {} bytes per pixel, rowstride {}",
            bpp,
            image.rowstride
        );
        return;
    }

    let data = image.data;
    let total = (image.rowstride as usize * image.height as usize).min(data.len());
    let mut cursor = Cursor {
        dx: 0,
        dy: 0,
        width: image.width,
        height: image.height,
        bytes_per_pixel: image.bytes_per_pixel,
        rowstride: image.rowstride,
    };
    let mut pos = 0;

    while pos < total && cursor.dy < image.height {
        let header = data[pos];
        pos += 1;
        let count = header & LENGTH_MASK;
        if count == 0 {
            break;
        }

        if header & RUN_FLAG != 0 {
            let Some(pixel) = data.get(pos..pos + bpp) else {
                break;
            };
            for _ in 0..count {
                cursor.emit(sink, x, y, pixel);
            }
            pos += bpp;
        } else {
            for _ in 0..count {
                if pos >= total {
                    break;
                }
                let Some(pixel) = data.get(pos..pos + bpp) else {
                    return;
                };
                cursor.emit(sink, x, y, pixel);
                pos += bpp;
            }
        }
    }
}
