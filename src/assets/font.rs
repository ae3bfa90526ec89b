// src/assets/font.rs

//! Compiled-in 8x16 console font covering printable ASCII.
//!
//! Generated table data; do not edit by hand.

use crate::draw::font::Font;

pub static FONT_8X16: Font<'static> = Font {
    height: 16,
    index_mask: 0x3f,
    offset: &OFFSET,
    index: &INDEX,
    content: &CONTENT,
};

#[rustfmt::skip]
static OFFSET: [u32; 64] = [
    0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45,
    48, 51, 54, 57, 60, 63, 66, 69, 72, 75, 78, 81, 84, 87, 90, 93,
    96, 101, 106, 111, 116, 121, 126, 131, 136, 141, 146, 151, 156, 161, 166, 171,
    176, 181, 186, 191, 196, 201, 206, 211, 216, 221, 226, 231, 236, 241, 246, 251,
];

#[rustfmt::skip]
static INDEX: [u32; 254] = [
    72, 512, 0, 72, 528, 0, 72, 544, 0, 72, 560, 0,
    72, 576, 0, 72, 592, 0, 72, 608, 0, 72, 624, 0,
    72, 640, 0, 72, 656, 0, 72, 672, 0, 72, 688, 0,
    72, 704, 0, 72, 720, 0, 72, 736, 0, 72, 752, 0,
    72, 768, 0, 72, 784, 0, 72, 800, 0, 72, 816, 0,
    72, 832, 0, 72, 848, 0, 72, 864, 0, 72, 880, 0,
    72, 896, 0, 72, 912, 0, 72, 928, 0, 72, 944, 0,
    72, 960, 0, 72, 976, 0, 72, 992, 0, 72, 1008, 0,
    8, 0, 72, 1024, 0, 8, 16, 72, 1040, 0, 8, 32,
    72, 1056, 0, 8, 48, 72, 1072, 0, 8, 64, 72, 1088,
    0, 8, 80, 72, 1104, 0, 8, 96, 72, 1120, 0, 8,
    112, 72, 1136, 0, 8, 128, 72, 1152, 0, 8, 144, 72,
    1168, 0, 8, 160, 72, 1184, 0, 8, 176, 72, 1200, 0,
    8, 192, 72, 1216, 0, 8, 208, 72, 1232, 0, 8, 224,
    72, 1248, 0, 8, 240, 72, 1264, 0, 8, 256, 72, 1280,
    0, 8, 272, 72, 1296, 0, 8, 288, 72, 1312, 0, 8,
    304, 72, 1328, 0, 8, 320, 72, 1344, 0, 8, 336, 72,
    1360, 0, 8, 352, 72, 1376, 0, 8, 368, 72, 1392, 0,
    8, 384, 72, 1408, 0, 8, 400, 72, 1424, 0, 8, 416,
    72, 1440, 0, 8, 432, 72, 1456, 0, 8, 448, 72, 1472,
    0, 8, 464, 72, 1488, 0, 8, 480, 72, 1504, 0, 8,
    496, 0,
];

#[rustfmt::skip]
static CONTENT: [u32; 1520] = [
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x18000000, 0x3c000000, 0x3c000000, 0x3c000000, 0x18000000, 0x18000000,
    0x18000000, 0x00000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x66000000, 0x66000000, 0x66000000, 0x24000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x6c000000, 0x6c000000, 0xfe000000, 0x6c000000, 0x6c000000,
    0x6c000000, 0xfe000000, 0x6c000000, 0x6c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x18000000, 0x18000000, 0x7c000000, 0xc6000000, 0xc2000000, 0xc0000000, 0x7c000000, 0x06000000,
    0x06000000, 0x86000000, 0xc6000000, 0x7c000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xc2000000, 0xc6000000, 0x0c000000, 0x18000000,
    0x30000000, 0x60000000, 0xc6000000, 0x86000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x38000000, 0x6c000000, 0x6c000000, 0x38000000, 0x76000000, 0xdc000000,
    0xcc000000, 0xcc000000, 0xcc000000, 0x76000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x30000000, 0x30000000, 0x30000000, 0x60000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x0c000000, 0x18000000, 0x30000000, 0x30000000, 0x30000000, 0x30000000,
    0x30000000, 0x30000000, 0x18000000, 0x0c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x30000000, 0x18000000, 0x0c000000, 0x0c000000, 0x0c000000, 0x0c000000,
    0x0c000000, 0x0c000000, 0x18000000, 0x30000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x66000000, 0x3c000000, 0xff000000,
    0x3c000000, 0x66000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18000000, 0x18000000, 0x7e000000,
    0x18000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x18000000, 0x18000000, 0x18000000, 0x30000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfe000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x02000000, 0x06000000, 0x0c000000, 0x18000000,
    0x30000000, 0x60000000, 0xc0000000, 0x80000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x38000000, 0x6c000000, 0xc6000000, 0xc6000000, 0xd6000000, 0xd6000000,
    0xc6000000, 0xc6000000, 0x6c000000, 0x38000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x18000000, 0x38000000, 0x78000000, 0x18000000, 0x18000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x7e000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0x06000000, 0x0c000000, 0x18000000, 0x30000000,
    0x60000000, 0xc0000000, 0xc6000000, 0xfe000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0x06000000, 0x06000000, 0x3c000000, 0x06000000,
    0x06000000, 0x06000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x0c000000, 0x1c000000, 0x3c000000, 0x6c000000, 0xcc000000, 0xfe000000,
    0x0c000000, 0x0c000000, 0x0c000000, 0x1e000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfe000000, 0xc0000000, 0xc0000000, 0xc0000000, 0xfc000000, 0x06000000,
    0x06000000, 0x06000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x38000000, 0x60000000, 0xc0000000, 0xc0000000, 0xfc000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfe000000, 0xc6000000, 0x06000000, 0x06000000, 0x0c000000, 0x18000000,
    0x30000000, 0x30000000, 0x30000000, 0x30000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000, 0xc6000000, 0x7c000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000, 0xc6000000, 0x7e000000, 0x06000000,
    0x06000000, 0x06000000, 0x0c000000, 0x78000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000,
    0x00000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000,
    0x00000000, 0x18000000, 0x18000000, 0x30000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x06000000, 0x0c000000, 0x18000000, 0x30000000, 0x60000000,
    0x30000000, 0x18000000, 0x0c000000, 0x06000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7e000000, 0x00000000, 0x00000000,
    0x7e000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x60000000, 0x30000000, 0x18000000, 0x0c000000, 0x06000000,
    0x0c000000, 0x18000000, 0x30000000, 0x60000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000, 0x0c000000, 0x18000000, 0x18000000,
    0x18000000, 0x00000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000, 0xde000000, 0xde000000,
    0xde000000, 0xdc000000, 0xc0000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x10000000, 0x38000000, 0x6c000000, 0xc6000000, 0xc6000000, 0xfe000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfc000000, 0x66000000, 0x66000000, 0x66000000, 0x7c000000, 0x66000000,
    0x66000000, 0x66000000, 0x66000000, 0xfc000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x3c000000, 0x66000000, 0xc2000000, 0xc0000000, 0xc0000000, 0xc0000000,
    0xc0000000, 0xc2000000, 0x66000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xf8000000, 0x6c000000, 0x66000000, 0x66000000, 0x66000000, 0x66000000,
    0x66000000, 0x66000000, 0x6c000000, 0xf8000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfe000000, 0x66000000, 0x62000000, 0x68000000, 0x78000000, 0x68000000,
    0x60000000, 0x62000000, 0x66000000, 0xfe000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfe000000, 0x66000000, 0x62000000, 0x68000000, 0x78000000, 0x68000000,
    0x60000000, 0x60000000, 0x60000000, 0xf0000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x3c000000, 0x66000000, 0xc2000000, 0xc0000000, 0xc0000000, 0xde000000,
    0xc6000000, 0xc6000000, 0x66000000, 0x3a000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xfe000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x3c000000, 0x18000000, 0x18000000, 0x18000000, 0x18000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x1e000000, 0x0c000000, 0x0c000000, 0x0c000000, 0x0c000000, 0x0c000000,
    0xcc000000, 0xcc000000, 0xcc000000, 0x78000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xe6000000, 0x66000000, 0x66000000, 0x6c000000, 0x78000000, 0x78000000,
    0x6c000000, 0x66000000, 0x66000000, 0xe6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xf0000000, 0x60000000, 0x60000000, 0x60000000, 0x60000000, 0x60000000,
    0x60000000, 0x62000000, 0x66000000, 0xfe000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xc6000000, 0xee000000, 0xfe000000, 0xfe000000, 0xd6000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xc6000000, 0xe6000000, 0xf6000000, 0xfe000000, 0xde000000, 0xce000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfc000000, 0x66000000, 0x66000000, 0x66000000, 0x7c000000, 0x60000000,
    0x60000000, 0x60000000, 0x60000000, 0xf0000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000,
    0xc6000000, 0xd6000000, 0xde000000, 0x7c000000, 0x0c000000, 0x0e000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfc000000, 0x66000000, 0x66000000, 0x66000000, 0x7c000000, 0x6c000000,
    0x66000000, 0x66000000, 0x66000000, 0xe6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000, 0x60000000, 0x38000000, 0x0c000000,
    0x06000000, 0xc6000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x7e000000, 0x7e000000, 0x5a000000, 0x18000000, 0x18000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000,
    0xc6000000, 0x6c000000, 0x38000000, 0x10000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xc6000000, 0xd6000000, 0xd6000000,
    0xd6000000, 0xfe000000, 0xee000000, 0x6c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xc6000000, 0xc6000000, 0x6c000000, 0x7c000000, 0x38000000, 0x38000000,
    0x7c000000, 0x6c000000, 0xc6000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x66000000, 0x66000000, 0x66000000, 0x66000000, 0x3c000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xfe000000, 0xc6000000, 0x86000000, 0x0c000000, 0x18000000, 0x30000000,
    0x60000000, 0xc2000000, 0xc6000000, 0xfe000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x3c000000, 0x30000000, 0x30000000, 0x30000000, 0x30000000, 0x30000000,
    0x30000000, 0x30000000, 0x30000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x80000000, 0xc0000000, 0x60000000, 0x30000000, 0x18000000,
    0x0c000000, 0x06000000, 0x02000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x3c000000, 0x0c000000, 0x0c000000, 0x0c000000, 0x0c000000, 0x0c000000,
    0x0c000000, 0x0c000000, 0x0c000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x10000000, 0x38000000, 0x6c000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xff000000, 0x00000000, 0x00000000,
    0x00000000, 0x30000000, 0x18000000, 0x0c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x78000000, 0x0c000000, 0x7c000000,
    0xcc000000, 0xcc000000, 0xcc000000, 0x76000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0xe0000000, 0x60000000, 0x60000000, 0x78000000, 0x6c000000, 0x66000000,
    0x66000000, 0x66000000, 0x66000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc0000000,
    0xc0000000, 0xc0000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x1c000000, 0x0c000000, 0x0c000000, 0x3c000000, 0x6c000000, 0xcc000000,
    0xcc000000, 0xcc000000, 0xcc000000, 0x76000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xfe000000,
    0xc0000000, 0xc0000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x1c000000, 0x36000000, 0x32000000, 0x30000000, 0x78000000, 0x30000000,
    0x30000000, 0x30000000, 0x30000000, 0x78000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x76000000, 0xcc000000, 0xcc000000,
    0xcc000000, 0xcc000000, 0xcc000000, 0x7c000000, 0x0c000000, 0xcc000000, 0x78000000, 0x00000000,
    0x00000000, 0x00000000, 0xe0000000, 0x60000000, 0x60000000, 0x6c000000, 0x76000000, 0x66000000,
    0x66000000, 0x66000000, 0x66000000, 0xe6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x18000000, 0x18000000, 0x00000000, 0x38000000, 0x18000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x06000000, 0x06000000, 0x00000000, 0x0e000000, 0x06000000, 0x06000000,
    0x06000000, 0x06000000, 0x06000000, 0x06000000, 0x66000000, 0x66000000, 0x3c000000, 0x00000000,
    0x00000000, 0x00000000, 0xe0000000, 0x60000000, 0x60000000, 0x66000000, 0x6c000000, 0x78000000,
    0x78000000, 0x6c000000, 0x66000000, 0xe6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x38000000, 0x18000000, 0x18000000, 0x18000000, 0x18000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x3c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xec000000, 0xfe000000, 0xd6000000,
    0xd6000000, 0xd6000000, 0xd6000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xdc000000, 0x66000000, 0x66000000,
    0x66000000, 0x66000000, 0x66000000, 0x66000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xdc000000, 0x66000000, 0x66000000,
    0x66000000, 0x66000000, 0x66000000, 0x7c000000, 0x60000000, 0x60000000, 0xf0000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x76000000, 0xcc000000, 0xcc000000,
    0xcc000000, 0xcc000000, 0xcc000000, 0x7c000000, 0x0c000000, 0x0c000000, 0x1e000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xdc000000, 0x76000000, 0x66000000,
    0x60000000, 0x60000000, 0x60000000, 0xf0000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x7c000000, 0xc6000000, 0x60000000,
    0x38000000, 0x0c000000, 0xc6000000, 0x7c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x10000000, 0x30000000, 0x30000000, 0xfc000000, 0x30000000, 0x30000000,
    0x30000000, 0x30000000, 0x36000000, 0x1c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xcc000000, 0xcc000000, 0xcc000000,
    0xcc000000, 0xcc000000, 0xcc000000, 0x76000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x66000000, 0x66000000, 0x66000000,
    0x66000000, 0x66000000, 0x3c000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xc6000000, 0xc6000000, 0xd6000000,
    0xd6000000, 0xd6000000, 0xfe000000, 0x6c000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xc6000000, 0x6c000000, 0x38000000,
    0x38000000, 0x38000000, 0x6c000000, 0xc6000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xc6000000, 0xc6000000, 0xc6000000,
    0xc6000000, 0xc6000000, 0xc6000000, 0x7e000000, 0x06000000, 0x0c000000, 0xf8000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0xfe000000, 0xcc000000, 0x18000000,
    0x30000000, 0x60000000, 0xc6000000, 0xfe000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x0e000000, 0x18000000, 0x18000000, 0x18000000, 0x70000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x0e000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x18000000, 0x18000000, 0x18000000, 0x18000000, 0x00000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x18000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x70000000, 0x18000000, 0x18000000, 0x18000000, 0x0e000000, 0x18000000,
    0x18000000, 0x18000000, 0x18000000, 0x70000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x76000000, 0xdc000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
];
