// src/splash/tests.rs

use super::*;
use crate::canvas::{CanvasInfo, PixelFormat, Rotation};
use crate::color::Rgb;
use test_log::test;

const W: u32 = 640;
const H: u32 = 480;

fn colors() -> ColorScheme {
    ColorScheme {
        background: Rgb::new(1, 1, 1),
        text: Rgb::new(2, 2, 2),
        bar: Rgb::new(3, 3, 3),
        bar_background: Rgb::new(4, 4, 4),
    }
}

struct Surface {
    info: CanvasInfo,
    data: Vec<u8>,
}

impl Surface {
    fn new(rotation: Rotation) -> Self {
        let info = CanvasInfo::from_physical(W, H, 32, W as usize * 4, rotation, PixelFormat::Rgb888);
        Self {
            info,
            data: vec![0u8; info.frame_len()],
        }
    }

    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(self.info, &mut self.data)
    }

    /// Blue channel of the pixel at logical `(x, y)`; the test palette is grey.
    fn at(&self, x: i32, y: i32) -> u8 {
        let offset = self.info.offset(x, y).unwrap();
        let word = u32::from_ne_bytes(self.data[offset..offset + 4].try_into().unwrap());
        (word & 0xff) as u8
    }
}

#[test]
fn it_should_place_the_split_line_from_the_configured_fraction() {
    let mut layout = LayoutConfig::default();
    let splash = Splash::new(colors(), &layout);
    assert_eq!(splash.split_line(480), 400);
    assert_eq!(splash.split_line(601), 601 - 100);

    layout.split_numerator = 1;
    layout.split_denominator = 2;
    let splash = Splash::new(colors(), &layout);
    assert_eq!(splash.split_line(480), 240);
}

#[test]
fn it_should_fill_progress_from_the_left_for_positive_values() {
    let layout = LayoutConfig::default();
    let splash = Splash::new(colors(), &layout);
    let mut surface = Surface::new(Rotation::Deg0);
    splash.draw_progress(&mut surface.canvas(), 50);

    let inner_x = (W as i32 - BAR_IMG.width as i32) / 2 + 4;
    let inner_w = BAR_IMG.width as i32 - 8;
    let y = 400 + 4;
    assert_eq!(surface.at(inner_x, y), 3);
    assert_eq!(surface.at(inner_x + inner_w / 2 - 1, y), 3);
    assert_eq!(surface.at(inner_x + inner_w / 2, y), 4);
    assert_eq!(surface.at(inner_x + inner_w - 1, y), 4);
    // Border untouched.
    assert_eq!(surface.at(inner_x - 1, y), 0);
    assert_eq!(surface.at(inner_x, y - 1), 0);
}

#[test]
fn it_should_fill_progress_from_the_right_for_negative_values() {
    let layout = LayoutConfig::default();
    let splash = Splash::new(colors(), &layout);
    let mut surface = Surface::new(Rotation::Deg0);
    splash.draw_progress(&mut surface.canvas(), -25);

    let inner_x = (W as i32 - BAR_IMG.width as i32) / 2 + 4;
    let inner_w = BAR_IMG.width as i32 - 8;
    let filled = 25 * inner_w / 100;
    let y = 400 + 4;
    assert_eq!(surface.at(inner_x, y), 4);
    assert_eq!(surface.at(inner_x + inner_w - filled - 1, y), 4);
    assert_eq!(surface.at(inner_x + inner_w - filled, y), 3);
    assert_eq!(surface.at(inner_x + inner_w - 1, y), 3);
}

#[test]
fn it_should_skip_the_bar_when_disabled() {
    let layout = LayoutConfig {
        show_progress_bar: false,
        ..LayoutConfig::default()
    };
    let splash = Splash::new(colors(), &layout);
    let mut surface = Surface::new(Rotation::Deg0);
    splash.draw_progress(&mut surface.canvas(), 100);
    assert!(surface.data.iter().all(|&b| b == 0));
}

#[test]
fn it_should_clear_and_center_messages_above_the_split_line() {
    let layout = LayoutConfig::default();
    let splash = Splash::new(colors(), &layout);
    let mut surface = Surface::new(Rotation::Deg0);
    splash.draw_msg(&mut surface.canvas(), "Booting");

    let (w, h) = text_size(&FONT_8X16, "Booting");
    let top = 400 - h as i32;
    // The cleared band spans the full width.
    assert_eq!(surface.at(0, top), 1);
    assert_eq!(surface.at(W as i32 - 1, top + h as i32 - 1), 1);
    assert_eq!(surface.at(0, top - 1), 0);
    assert_eq!(surface.at(0, 400), 0);

    let left = (W as i32 - w as i32) / 2;
    let text_columns: Vec<i32> = (0..W as i32)
        .filter(|&x| (top..top + h as i32).any(|y| surface.at(x, y) == 2))
        .collect();
    assert!(!text_columns.is_empty());
    assert!(text_columns.iter().all(|&x| x >= left && x < left + w as i32));
}

#[test]
fn it_should_grow_the_message_band_for_multi_line_text() {
    let layout = LayoutConfig::default();
    let splash = Splash::new(colors(), &layout);
    let mut surface = Surface::new(Rotation::Deg0);
    splash.draw_msg(&mut surface.canvas(), "one\ntwo");
    assert_eq!(surface.at(0, 400 - 32), 1);
    assert_eq!(surface.at(0, 400 - 33), 0);
}

#[test]
fn it_should_paint_the_initial_scene_for_every_rotation() {
    let layout = LayoutConfig {
        startup_message: Some("Starting".into()),
        ..LayoutConfig::default()
    };
    let splash = Splash::new(colors(), &layout);
    for rotation in [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270] {
        let mut surface = Surface::new(rotation);
        splash.draw_initial_scene(&mut surface.canvas());
        let (w, h) = (surface.info.width as i32, surface.info.height as i32);
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(surface.at(x, y), 1, "rotation {}", rotation);
        }
        let split = splash.split_line(h as u32);
        let bar_mid_x = w / 2;
        assert_eq!(surface.at(bar_mid_x, split + 4), 4, "rotation {}", rotation);
    }
}
