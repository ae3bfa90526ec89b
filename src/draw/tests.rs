// src/draw/tests.rs

use super::*;
use crate::canvas::{Canvas, CanvasInfo, PixelFormat, PixelSink, Rotation};
use crate::color::Rgb;
use std::collections::BTreeMap;
use test_log::test;

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Records every plot call instead of writing pixels.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<(i32, i32, Rgb)>,
}

impl PixelSink for Recorder {
    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        self.calls.push((x, y, color));
    }
}

impl Recorder {
    fn pixels(&self) -> BTreeMap<(i32, i32), Rgb> {
        self.calls.iter().map(|&(x, y, c)| ((x, y), c)).collect()
    }
}

// --- Rectangles ---

#[test]
fn it_should_fill_every_pixel_of_a_rectangle_once() {
    let mut recorder = Recorder::default();
    draw_rect(&mut recorder, 2, 3, 4, 2, RED);
    assert_eq!(recorder.calls.len(), 8);
    let pixels = recorder.pixels();
    assert_eq!(pixels.len(), 8);
    assert!(pixels.keys().all(|&(x, y)| (2..6).contains(&x) && (3..5).contains(&y)));
}

#[test]
fn it_should_draw_nothing_for_degenerate_rectangles() {
    let mut recorder = Recorder::default();
    draw_rect(&mut recorder, 0, 0, 0, 10, RED);
    draw_rect(&mut recorder, 0, 0, 10, -3, RED);
    assert!(recorder.calls.is_empty());
}

#[test]
fn it_should_rely_on_the_plotter_to_clip_rectangles() {
    let info = CanvasInfo::from_physical(4, 4, 32, 16, Rotation::Deg0, PixelFormat::Rgb888);
    let mut data = vec![0u8; info.frame_len()];
    draw_rect(&mut Canvas::new(info, &mut data), -2, -2, 4, 4, BLUE);
    let painted: Vec<usize> = (0..16)
        .filter(|i| data[i * 4..i * 4 + 4].iter().any(|&b| b != 0))
        .collect();
    // Only the top-left 2x2 block survives clipping.
    assert_eq!(painted, vec![0, 1, 4, 5]);
}

// --- RLE images ---

/// Greedy encoder producing both run and literal records.
fn encode_rle(pixels: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < pixels.len() {
        let mut run = 1;
        while i + run < pixels.len() && run < 127 && pixels[i + run] == pixels[i] {
            run += 1;
        }
        if run >= 2 {
            out.push(0x80 | run as u8);
            out.extend_from_slice(&pixels[i]);
            i += run;
            continue;
        }
        let start = i;
        while i < pixels.len() && i - start < 127 {
            if i + 1 < pixels.len() && pixels[i + 1] == pixels[i] {
                break;
            }
            i += 1;
        }
        if i == start {
            i += 1;
        }
        out.push((i - start) as u8);
        for pixel in &pixels[start..i] {
            out.extend_from_slice(pixel);
        }
    }
    out
}

fn rgb(c: Rgb) -> Vec<u8> {
    vec![c.r, c.g, c.b]
}

fn rgba(c: Rgb, alpha: u8) -> Vec<u8> {
    vec![c.r, c.g, c.b, alpha]
}

#[test]
fn it_should_reproduce_an_rgb_image_encoded_with_runs_and_literals() {
    let width = 5;
    let rows = [
        [RED, RED, RED, GREEN, BLUE],
        [GREEN, BLUE, BLUE, BLUE, BLUE],
        [BLUE, RED, GREEN, RED, RED],
    ];
    let pixels: Vec<Vec<u8>> = rows.iter().flatten().map(|&c| rgb(c)).collect();
    let data = encode_rle(&pixels);
    assert!(data.iter().any(|&b| b & 0x80 != 0), "expected run records");

    let image = RleImage {
        width,
        height: 3,
        bytes_per_pixel: 3,
        rowstride: width * 3,
        data: &data,
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 10, 20, &image);

    let expected: BTreeMap<(i32, i32), Rgb> = rows
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &c)| ((10 + x as i32, 20 + y as i32), c))
        })
        .collect();
    assert_eq!(recorder.calls.len(), 15);
    assert_eq!(recorder.pixels(), expected);
}

#[test]
fn it_should_skip_transparent_pixels_in_rgba_images() {
    let pixels = vec![
        rgba(RED, 0xff),
        rgba(RED, 0x00),
        rgba(RED, 0x00),
        rgba(GREEN, 0x01),
        rgba(BLUE, 0x00),
        rgba(BLUE, 0x80),
    ];
    let data = encode_rle(&pixels);
    let image = RleImage {
        width: 3,
        height: 2,
        bytes_per_pixel: 4,
        rowstride: 12,
        data: &data,
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);

    assert_eq!(
        recorder.calls,
        vec![(0, 0, RED), (0, 1, GREEN), (2, 1, BLUE)]
    );
}

#[test]
fn it_should_wrap_runs_across_row_boundaries() {
    let data = [0x80 | 6, 1, 2, 3];
    let image = RleImage {
        width: 4,
        height: 2,
        bytes_per_pixel: 3,
        rowstride: 12,
        data: &data,
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);
    let positions: Vec<(i32, i32)> = recorder.calls.iter().map(|&(x, y, _)| (x, y)).collect();
    assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (1, 1)]);
}

#[test]
fn it_should_skip_padding_columns_beyond_the_image_width() {
    // Three pixels per encoded row but the image is only two wide.
    let pixels: Vec<Vec<u8>> = [RED, GREEN, BLUE, GREEN, RED, BLUE].iter().map(|&c| rgb(c)).collect();
    let data = encode_rle(&pixels);
    let image = RleImage {
        width: 2,
        height: 2,
        bytes_per_pixel: 3,
        rowstride: 9,
        data: &data,
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);
    assert_eq!(
        recorder.calls,
        vec![(0, 0, RED), (1, 0, GREEN), (0, 1, GREEN), (1, 1, RED)]
    );
}

#[test]
fn it_should_stop_at_a_zero_length_record() {
    let data = [0x82, 9, 9, 9, 0x00, 0x82, 7, 7, 7];
    let image = RleImage {
        width: 8,
        height: 1,
        bytes_per_pixel: 3,
        rowstride: 24,
        data: &data,
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);
    assert_eq!(recorder.calls.len(), 2);

    let run_marker = [0x80, 9, 9, 9, 0x82, 7, 7, 7];
    let image = RleImage {
        data: &run_marker,
        ..image
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);
    assert!(recorder.calls.is_empty());
}

#[test]
fn it_should_not_read_past_a_truncated_stream() {
    // Literal claims five pixels but only two are present.
    let data = [0x05, 1, 1, 1, 2, 2];
    let image = RleImage {
        width: 8,
        height: 1,
        bytes_per_pixel: 3,
        rowstride: 24,
        data: &data,
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);
    assert_eq!(recorder.calls, vec![(0, 0, Rgb::new(1, 1, 1))]);

    // Run header with an incomplete pixel.
    let data = [0x83, 1, 1];
    let image = RleImage {
        data: &data,
        ..image
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);
    assert!(recorder.calls.is_empty());
}

#[test]
fn it_should_not_draw_rows_past_the_declared_height() {
    // One long run covering three rows of a two-row image.
    let data = [0x80 | 6, 5, 5, 5];
    let image = RleImage {
        width: 2,
        height: 2,
        bytes_per_pixel: 3,
        rowstride: 6,
        data: &data,
    };
    let mut recorder = Recorder::default();
    draw_image(&mut recorder, 0, 0, &image);
    assert_eq!(recorder.calls.len(), 4);
    assert!(recorder.calls.iter().all(|&(_, y, _)| y < 2));
}

#[test]
fn it_should_decode_the_bundled_artwork_inside_its_bounds() {
    for image in [&crate::assets::LOGO_IMG, &crate::assets::BAR_IMG] {
        let mut recorder = Recorder::default();
        draw_image(&mut recorder, 0, 0, image);
        assert!(!recorder.calls.is_empty());
        assert!(recorder.calls.iter().all(|&(x, y, _)| {
            (0..image.width as i32).contains(&x) && (0..image.height as i32).contains(&y)
        }));
    }
}

// --- Fonts ---

/// Owned tables for a synthetic font built from `(char, width, rows)`.
struct FontTables {
    height: u32,
    mask: u32,
    offset: Vec<u32>,
    index: Vec<u32>,
    content: Vec<u32>,
}

impl FontTables {
    fn build(mask: u32, height: u32, glyphs: &[(char, u32, Vec<u32>)]) -> Self {
        let mut buckets = vec![Vec::new(); (mask + 1) as usize];
        let mut content = Vec::new();
        for (c, width, rows) in glyphs {
            assert_eq!(rows.len(), height as usize);
            let code = *c as u32;
            buckets[(code & mask) as usize].push(((code & !mask) | width, content.len() as u32));
            content.extend_from_slice(rows);
        }
        let mut offset = Vec::new();
        let mut index = Vec::new();
        for bucket in buckets {
            offset.push(index.len() as u32);
            for (key, at) in bucket {
                index.push(key);
                index.push(at);
            }
            index.push(0);
        }
        Self {
            height,
            mask,
            offset,
            index,
            content,
        }
    }

    fn font(&self) -> Font<'_> {
        Font {
            height: self.height,
            index_mask: self.mask,
            offset: &self.offset,
            index: &self.index,
            content: &self.content,
        }
    }
}

const G: u32 = 3;
const H: u32 = 2;

fn row(bits: u32) -> u32 {
    bits << (32 - G)
}

fn sample_font() -> FontTables {
    // 'a' (97) and 'e' (101) share bucket 1 with a mask of 0x3.
    FontTables::build(
        0x3,
        H,
        &[
            ('a', G, vec![row(0b101), row(0b010)]),
            ('b', G, vec![row(0b111), row(0b000)]),
            ('c', G, vec![row(0b100), row(0b100)]),
            ('d', G, vec![row(0b001), row(0b001)]),
            ('e', G, vec![row(0b010), row(0b111)]),
        ],
    )
}

#[test]
fn it_should_find_glyphs_sharing_a_bucket() {
    let tables = sample_font();
    let font = tables.font();
    let a = font.glyph('a').expect("a present");
    let e = font.glyph('e').expect("e present");
    assert_eq!(a.width, G);
    assert_eq!(a.rows, &[row(0b101), row(0b010)]);
    assert_eq!(e.rows, &[row(0b010), row(0b111)]);
}

#[test]
fn it_should_report_missing_glyphs_without_looping() {
    let tables = sample_font();
    let font = tables.font();
    assert_eq!(font.glyph('z'), None);
    assert_eq!(font.glyph('\u{2603}'), None);
    assert_eq!(text_size(&font, "azb"), (2 * G, H));

    let mut recorder = Recorder::default();
    draw_text(&mut recorder, 0, 0, RED, &font, "zzz");
    assert!(recorder.calls.is_empty());
}

#[test]
fn it_should_measure_the_widest_line_and_every_line_height() {
    let tables = sample_font();
    let font = tables.font();
    assert_eq!(text_size(&font, "ab\ncde"), (3 * G, 2 * H));
    assert_eq!(text_size(&font, "cde\nab"), (3 * G, 2 * H));
    assert_eq!(text_size(&font, "a"), (G, H));
    assert_eq!(text_size(&font, ""), (0, H));
}

#[test]
fn it_should_plot_set_bits_most_significant_first() {
    let tables = sample_font();
    let font = tables.font();
    let mut recorder = Recorder::default();
    draw_text(&mut recorder, 10, 5, GREEN, &font, "a");
    assert_eq!(
        recorder.calls,
        vec![(10, 5, GREEN), (12, 5, GREEN), (11, 6, GREEN)]
    );
}

#[test]
fn it_should_advance_by_glyph_width_and_reset_on_newline() {
    let tables = sample_font();
    let font = tables.font();
    let mut recorder = Recorder::default();
    draw_text(&mut recorder, 0, 0, BLUE, &font, "dd\nd");
    let positions: Vec<(i32, i32)> = recorder.calls.iter().map(|&(x, y, _)| (x, y)).collect();
    assert_eq!(
        positions,
        vec![(2, 0), (2, 1), (5, 0), (5, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn it_should_cover_printable_ascii_in_the_bundled_font() {
    let font = &crate::assets::FONT_8X16;
    for c in ' '..='~' {
        let glyph = font.glyph(c).unwrap_or_else(|| panic!("missing {:?}", c));
        assert_eq!(glyph.width, 8);
        assert_eq!(glyph.rows.len(), 16);
    }
    assert_eq!(font.glyph('é'), None);
    assert_eq!(text_size(font, "Boot\nok"), (32, 32));
}
