// src/assets/mod.rs

//! Artwork and font data compiled into the binary.

mod font;
mod images;

pub use font::FONT_8X16;
pub use images::{BAR_IMG, LOGO_IMG};
