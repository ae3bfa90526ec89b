// src/splash.rs

//! The splash scene: background, logo, progress bar and status message.
//!
//! The screen is divided at the split line. The logo and the message sit
//! above it, the progress bar frame hangs directly below it.

use crate::assets::{BAR_IMG, FONT_8X16, LOGO_IMG};
use crate::canvas::Canvas;
use crate::config::{ColorScheme, LayoutConfig};
use crate::draw::{draw_image, draw_rect, draw_text, text_size, Font, RleImage};
use log::debug;

/// Inset between the bar frame image and the fillable area.
const BAR_BORDER: i32 = 4;

pub struct Splash<'a> {
    colors: ColorScheme,
    layout: &'a LayoutConfig,
    font: &'a Font<'a>,
    logo: &'a RleImage<'a>,
    bar: &'a RleImage<'a>,
}

impl<'a> Splash<'a> {
    /// A scene using the compiled-in font and artwork.
    pub fn new(colors: ColorScheme, layout: &'a LayoutConfig) -> Self {
        Self::with_assets(colors, layout, &FONT_8X16, &LOGO_IMG, &BAR_IMG)
    }

    pub fn with_assets(
        colors: ColorScheme,
        layout: &'a LayoutConfig,
        font: &'a Font<'a>,
        logo: &'a RleImage<'a>,
        bar: &'a RleImage<'a>,
    ) -> Self {
        Self {
            colors,
            layout,
            font,
            logo,
            bar,
        }
    }

    /// Row at which the progress bar frame starts.
    pub fn split_line(&self, height: u32) -> i32 {
        let height = i64::from(height);
        let numerator = i64::from(self.layout.split_numerator);
        let denominator = i64::from(self.layout.split_denominator.max(1));
        (height - (denominator - numerator) * height / denominator) as i32
    }

    /// Paints the complete scene shown before any command arrives.
    pub fn draw_initial_scene(&self, canvas: &mut Canvas<'_>) {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        draw_rect(canvas, 0, 0, width, height, self.colors.background);

        let logo_x = (width - self.logo.width as i32) / 2;
        let logo_y = if self.layout.fullscreen_image {
            (height - self.logo.height as i32) / 2
        } else {
            let upper = i64::from(height) * i64::from(self.layout.split_numerator)
                / i64::from(self.layout.split_denominator.max(1));
            (upper as i32 - self.logo.height as i32) / 2
        };
        draw_image(canvas, logo_x, logo_y, self.logo);

        if self.layout.show_progress_bar {
            let bar_x = (width - self.bar.width as i32) / 2;
            draw_image(canvas, bar_x, self.split_line(canvas.height()), self.bar);
            self.draw_progress(canvas, 0);
        }

        if let Some(message) = &self.layout.startup_message {
            self.draw_msg(canvas, message);
        }
    }

    /// Erases the message area and draws `text` centered above the split line.
    pub fn draw_msg(&self, canvas: &mut Canvas<'_>, text: &str) {
        let (w, h) = text_size(self.font, text);
        let (w, h) = (w as i32, h as i32);
        let width = canvas.width() as i32;
        let top = self.split_line(canvas.height()) - h;
        debug!("Splash: message {:?} ({}x{})", text, w, h);

        draw_rect(canvas, 0, top, width, h, self.colors.background);
        draw_text(
            canvas,
            (width - w) / 2,
            top,
            self.colors.text,
            self.font,
            text,
        );
    }

    /// Fills the bar to `value` percent. Positive values grow from the left,
    /// negative values from the right; the magnitude is clamped to 100.
    pub fn draw_progress(&self, canvas: &mut Canvas<'_>, value: i32) {
        if !self.layout.show_progress_bar {
            return;
        }
        let x = (canvas.width() as i32 - self.bar.width as i32) / 2 + BAR_BORDER;
        let y = self.split_line(canvas.height()) + BAR_BORDER;
        let width = self.bar.width as i32 - 2 * BAR_BORDER;
        let height = self.bar.height as i32 - 2 * BAR_BORDER;

        let filled = value.unsigned_abs().min(100) as i32 * width / 100;
        let (fill_x, rest_x) = if value > 0 {
            (x, x + filled)
        } else {
            (x + width - filled, x)
        };
        debug!("Splash: progress {} fills {} of {}", value, filled, width);

        draw_rect(canvas, rest_x, y, width - filled, height, self.colors.bar_background);
        draw_rect(canvas, fill_x, y, filled, height, self.colors.bar);
    }
}

#[cfg(test)]
mod tests;
