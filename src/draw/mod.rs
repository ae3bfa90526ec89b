// src/draw/mod.rs

//! Drawing operations layered on top of the pixel plotter.
//!
//! None of these functions clip on their own: every pixel goes through
//! [`PixelSink::plot`], which discards anything outside the canvas.

pub mod font;
pub mod rle;

use crate::canvas::PixelSink;
use crate::color::Rgb;

pub use font::{draw_text, text_size, Font};
pub use rle::{draw_image, RleImage};

/// Fills `[x, x + width) x [y, y + height)` with `color`.
pub fn draw_rect<S: PixelSink + ?Sized>(
    sink: &mut S,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Rgb,
) {
    for dy in 0..height.max(0) {
        for dx in 0..width.max(0) {
            sink.plot(x.saturating_add(dx), y.saturating_add(dy), color);
        }
    }
}

#[cfg(test)]
mod tests;
