// src/draw/font.rs

//! Bitmap font lookup, text measurement and text drawing.
//!
//! Glyphs are stored as one `u32` per pixel row, most significant bit is the
//! leftmost pixel. The index is hashed on the low bits of the code point:
//!
//! - `offset[code & index_mask]` is where the bucket for that hash starts in
//!   `index`.
//! - A bucket is a list of `(key, content_offset)` pairs ended by a zero key.
//!   The key holds the code point's high bits (`code & !index_mask`) and the
//!   glyph width in its low bits (`key & index_mask`).

use crate::canvas::PixelSink;
use crate::color::Rgb;
use log::trace;

const GLYPH_ROW_BITS: u32 = u32::BITS;
const LEFTMOST_PIXEL: u32 = 1 << (GLYPH_ROW_BITS - 1);

/// A fixed-height bitmap font.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    /// Height of every glyph and of a text line, in pixels.
    pub height: u32,
    pub index_mask: u32,
    pub offset: &'a [u32],
    pub index: &'a [u32],
    pub content: &'a [u32],
}

/// One rasterized character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub width: u32,
    pub rows: &'a [u32],
}

impl<'a> Font<'a> {
    /// Looks up the glyph for `c`. Characters the font does not cover return
    /// `None` and are skipped by the text routines.
    pub fn glyph(&self, c: char) -> Option<Glyph<'a>> {
        let code = c as u32;
        let mask = self.index_mask;
        let mut i = *self.offset.get((code & mask) as usize)? as usize;
        loop {
            let key = *self.index.get(i)?;
            if key == 0 {
                return None;
            }
            if key & !mask == code & !mask {
                let start = *self.index.get(i + 1)? as usize;
                let rows = self.content.get(start..start + self.height as usize)?;
                return Some(Glyph {
                    width: key & mask,
                    rows,
                });
            }
            i += 2;
        }
    }

    fn advance(&self, c: char) -> u32 {
        self.glyph(c).map_or(0, |glyph| glyph.width)
    }
}

/// Returns the `(width, height)` `text` occupies when drawn with `font`.
///
/// Width is that of the widest line; height is one font height per line.
pub fn text_size(font: &Font<'_>, text: &str) -> (u32, u32) {
    let mut widest = 0;
    let mut line_width = 0;
    let mut lines = 1;
    for c in text.chars() {
        if c == '\n' {
            widest = widest.max(line_width);
            line_width = 0;
            lines += 1;
            continue;
        }
        line_width += font.advance(c);
    }
    (widest.max(line_width), lines * font.height)
}

/// Draws `text` with its top-left corner at `(x, y)`.
pub fn draw_text<S: PixelSink + ?Sized>(
    sink: &mut S,
    x: i32,
    y: i32,
    color: Rgb,
    font: &Font<'_>,
    text: &str,
) {
    let line_height = font.height as i32;
    let (mut dx, mut dy) = (0i32, 0i32);

    for c in text.chars() {
        if c == '\n' {
            dy += line_height;
            dx = 0;
            continue;
        }

        let Some(glyph) = font.glyph(c) else {
            trace!("draw_text: no glyph for {:?}, skipping", c);
            continue;
        };

        for (cy, &row) in glyph.rows.iter().enumerate() {
            let mut bits = row;
            for cx in 0..glyph.width.min(GLYPH_ROW_BITS) {
                if bits & LEFTMOST_PIXEL != 0 {
                    sink.plot(x + dx + cx as i32, y + dy + cy as i32, color);
                }
                bits <<= 1;
            }
        }

        dx += glyph.width as i32;
    }
}
