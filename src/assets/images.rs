// src/assets/images.rs

//! Run-length encoded splash artwork.
//!
//! Generated table data; do not edit by hand.

use crate::draw::rle::RleImage;

/// Centered logo, RGBA with a transparent surround.
pub static LOGO_IMG: RleImage<'static> = RleImage {
    width: 96,
    height: 96,
    bytes_per_pixel: 4,
    rowstride: 384,
    data: &LOGO_IMG_RLE,
};

#[rustfmt::skip]
static LOGO_IMG_RLE: [u8; 2215] = [
    0xff, 0x00, 0x00, 0x00, 0x00, 0xea, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0xcd,
    0x00, 0x00, 0x00, 0x00, 0x98, 0x2f, 0x6f, 0xb0, 0xff, 0xc5, 0x00, 0x00, 0x00, 0x00, 0x9e, 0x2f,
    0x6f, 0xb0, 0xff, 0xbf, 0x00, 0x00, 0x00, 0x00, 0xa4, 0x2f, 0x6f, 0xb0, 0xff, 0xba, 0x00, 0x00,
    0x00, 0x00, 0xa8, 0x2f, 0x6f, 0xb0, 0xff, 0xb6, 0x00, 0x00, 0x00, 0x00, 0xac, 0x2f, 0x6f, 0xb0,
    0xff, 0xb2, 0x00, 0x00, 0x00, 0x00, 0xb0, 0x2f, 0x6f, 0xb0, 0xff, 0xaf, 0x00, 0x00, 0x00, 0x00,
    0xb2, 0x2f, 0x6f, 0xb0, 0xff, 0xac, 0x00, 0x00, 0x00, 0x00, 0x95, 0x2f, 0x6f, 0xb0, 0xff, 0x8c,
    0x00, 0x00, 0x00, 0x00, 0x95, 0x2f, 0x6f, 0xb0, 0xff, 0xa9, 0x00, 0x00, 0x00, 0x00, 0x91, 0x2f,
    0x6f, 0xb0, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x91, 0x2f, 0x6f, 0xb0, 0xff, 0xa7, 0x00, 0x00,
    0x00, 0x00, 0x8f, 0x2f, 0x6f, 0xb0, 0xff, 0x9c, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x2f, 0x6f, 0xb0,
    0xff, 0xa5, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0xa0, 0x00, 0x00, 0x00, 0x00,
    0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0xa2, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0xa4,
    0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0x9f, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x2f,
    0x6f, 0xb0, 0xff, 0xa8, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x2f, 0x6f, 0xb0, 0xff, 0x9d, 0x00, 0x00,
    0x00, 0x00, 0x8d, 0x2f, 0x6f, 0xb0, 0xff, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x2f, 0x6f, 0xb0,
    0xff, 0x9c, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xae, 0x00, 0x00, 0x00, 0x00,
    0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xb0,
    0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f,
    0x6f, 0xb0, 0xff, 0xb2, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0x97, 0x00, 0x00,
    0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0,
    0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xb6, 0x00, 0x00, 0x00, 0x00,
    0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x9b,
    0x00, 0x00, 0x00, 0x00, 0x82, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f,
    0x6f, 0xb0, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0,
    0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00,
    0x86, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x90,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d,
    0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8f, 0x00, 0x00,
    0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70,
    0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00,
    0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff, 0x9a,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f,
    0x6f, 0xb0, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00,
    0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0,
    0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00,
    0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x99,
    0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f,
    0x6f, 0xb0, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x98, 0x00, 0x00,
    0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0,
    0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00,
    0x96, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x89,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x98, 0x6d,
    0x6d, 0x70, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x88, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70,
    0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x88, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x9c, 0x6d, 0x6d, 0x70, 0xff, 0x96,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f,
    0x6f, 0xb0, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x9e, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00, 0x00,
    0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0xa0, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x94,
    0x00, 0x00, 0x00, 0x00, 0xa2, 0x6d, 0x6d, 0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f,
    0x6f, 0xb0, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x93, 0x00, 0x00,
    0x00, 0x00, 0xa4, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00,
    0xa6, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x85,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0xa8, 0x6d,
    0x6d, 0x70, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0xaa, 0x6d, 0x6d, 0x70,
    0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0xac, 0x6d, 0x6d, 0x70, 0xff, 0x90,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f,
    0x6f, 0xb0, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0xae, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0xb0, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x8d,
    0x00, 0x00, 0x00, 0x00, 0xb2, 0x6d, 0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f,
    0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x8c, 0x00, 0x00,
    0x00, 0x00, 0xb4, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00,
    0xb4, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0xb2, 0x6d,
    0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0xb0, 0x6d, 0x6d, 0x70,
    0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0xae, 0x6d, 0x6d, 0x70, 0xff, 0x8f,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f,
    0x6f, 0xb0, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0xac, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0xaa, 0x6d, 0x6d, 0x70, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x91,
    0x00, 0x00, 0x00, 0x00, 0xa8, 0x6d, 0x6d, 0x70, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f,
    0x6f, 0xb0, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x92, 0x00, 0x00,
    0x00, 0x00, 0xa6, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00,
    0xa4, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x86,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0xa2, 0x6d,
    0x6d, 0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x86, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0xa0, 0x6d, 0x6d, 0x70,
    0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00,
    0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x9e, 0x6d, 0x6d, 0x70, 0xff, 0x95,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f,
    0x6f, 0xb0, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x9c, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x88, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x88, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x97,
    0x00, 0x00, 0x00, 0x00, 0x98, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f,
    0x6f, 0xb0, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0, 0xff, 0x98, 0x00, 0x00,
    0x00, 0x00, 0x96, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0x88, 0x2f, 0x6f, 0xb0,
    0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00,
    0x94, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8a,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d,
    0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8b, 0x00, 0x00,
    0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70,
    0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00,
    0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x9a,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f,
    0x6f, 0xb0, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00,
    0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0,
    0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00,
    0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f, 0x6f, 0xb0, 0xff, 0x9b,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x89, 0x2f,
    0x6f, 0xb0, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00,
    0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0,
    0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x93,
    0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x82, 0x6d,
    0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x2f, 0x6f, 0xb0, 0xff, 0x94, 0x00, 0x00,
    0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xb6, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0,
    0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xb4, 0x00, 0x00, 0x00, 0x00,
    0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xb2,
    0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f,
    0x6f, 0xb0, 0xff, 0xb0, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0x9b, 0x00, 0x00,
    0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0, 0xff, 0xae, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x2f, 0x6f, 0xb0,
    0xff, 0x9c, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x2f, 0x6f, 0xb0, 0xff, 0xaa, 0x00, 0x00, 0x00, 0x00,
    0x8d, 0x2f, 0x6f, 0xb0, 0xff, 0x9d, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x2f, 0x6f, 0xb0, 0xff, 0xa8,
    0x00, 0x00, 0x00, 0x00, 0x8d, 0x2f, 0x6f, 0xb0, 0xff, 0x9f, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f,
    0x6f, 0xb0, 0xff, 0xa4, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0xa2, 0x00, 0x00,
    0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0,
    0xff, 0xa5, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x2f, 0x6f, 0xb0, 0xff, 0x9c, 0x00, 0x00, 0x00, 0x00,
    0x8f, 0x2f, 0x6f, 0xb0, 0xff, 0xa7, 0x00, 0x00, 0x00, 0x00, 0x91, 0x2f, 0x6f, 0xb0, 0xff, 0x96,
    0x00, 0x00, 0x00, 0x00, 0x91, 0x2f, 0x6f, 0xb0, 0xff, 0xa9, 0x00, 0x00, 0x00, 0x00, 0x95, 0x2f,
    0x6f, 0xb0, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x95, 0x2f, 0x6f, 0xb0, 0xff, 0xac, 0x00, 0x00,
    0x00, 0x00, 0xb2, 0x2f, 0x6f, 0xb0, 0xff, 0xaf, 0x00, 0x00, 0x00, 0x00, 0xb0, 0x2f, 0x6f, 0xb0,
    0xff, 0xb2, 0x00, 0x00, 0x00, 0x00, 0xac, 0x2f, 0x6f, 0xb0, 0xff, 0xb6, 0x00, 0x00, 0x00, 0x00,
    0xa8, 0x2f, 0x6f, 0xb0, 0xff, 0xba, 0x00, 0x00, 0x00, 0x00, 0xa4, 0x2f, 0x6f, 0xb0, 0xff, 0xbf,
    0x00, 0x00, 0x00, 0x00, 0x9e, 0x2f, 0x6f, 0xb0, 0xff, 0xc5, 0x00, 0x00, 0x00, 0x00, 0x98, 0x2f,
    0x6f, 0xb0, 0xff, 0xcd, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x2f, 0x6f, 0xb0, 0xff, 0xff, 0x00, 0x00,
    0x00, 0x00, 0xea, 0x00, 0x00, 0x00, 0x00,
];

/// Progress bar frame. The fill area is inset by 4 pixels on each side.
pub static BAR_IMG: RleImage<'static> = RleImage {
    width: 300,
    height: 24,
    bytes_per_pixel: 3,
    rowstride: 900,
    data: &BAR_IMG_RLE,
};

#[rustfmt::skip]
static BAR_IMG_RLE: [u8; 356] = [
    0xff, 0x6d, 0x6d, 0x70, 0xff, 0x6d, 0x6d, 0x70, 0xff, 0x6d, 0x6d, 0x70, 0xff, 0x6d, 0x6d, 0x70,
    0xde, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xec, 0xec, 0xe1, 0xff, 0xec, 0xec, 0xe1, 0xaa, 0xec, 0xec, 0xe1,
    0xff, 0x6d, 0x6d, 0x70, 0xff, 0x6d, 0x6d, 0x70, 0xff, 0x6d, 0x6d, 0x70, 0xff, 0x6d, 0x6d, 0x70,
    0xde, 0x6d, 0x6d, 0x70,
];
