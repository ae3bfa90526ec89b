// src/config.rs

//! Configuration structures for the splash renderer.
//!
//! Every struct deserializes with `#[serde(default)]`, so a configuration file
//! only needs to name the values it changes. The file is JSON and is located
//! through the `PSPLASH_CONFIG` environment variable; without it the built-in
//! defaults are used.

use crate::color::Rgb;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Names the JSON configuration file to load.
pub const CONFIG_PATH_ENV: &str = "PSPLASH_CONFIG";
/// Overrides `channel.run_dir`.
pub const FIFO_DIR_ENV: &str = "PSPLASH_FIFO_DIR";

pub const DEFAULT_RUN_DIR: &str = "/run";
pub const DEFAULT_FIFO_NAME: &str = "psplash_fifo";

/// The configuration loaded once at startup by the binaries.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

/// Root of the configuration tree.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub colors: ColorScheme,
    pub layout: LayoutConfig,
    pub channel: ChannelConfig,
}

// --- Colors ---

/// Colors used by the scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorScheme {
    /// Screen background, also used to erase the message region.
    pub background: Rgb,
    pub text: Rgb,
    /// Filled part of the progress bar.
    pub bar: Rgb,
    /// Unfilled part of the progress bar.
    pub bar_background: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            background: Rgb::new(0xec, 0xec, 0xe1),
            text: Rgb::new(0x6d, 0x6d, 0x70),
            bar: Rgb::new(0x6d, 0x6d, 0x70),
            bar_background: Rgb::new(0xec, 0xec, 0xe1),
        }
    }
}

// --- Layout ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// The logo and message occupy the upper `numerator / denominator` of
    /// the screen; the progress bar sits on the line below it.
    pub split_numerator: u32,
    pub split_denominator: u32,
    /// Center the logo in the whole screen instead of the upper part.
    pub fullscreen_image: bool,
    pub show_progress_bar: bool,
    /// Message drawn before the first command arrives.
    pub startup_message: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            split_numerator: 5,
            split_denominator: 6,
            fullscreen_image: false,
            show_progress_bar: true,
            startup_message: None,
        }
    }
}

// --- Command channel ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelConfig {
    /// Directory holding the command fifo.
    pub run_dir: PathBuf,
    pub fifo_name: String,
    /// Exit after this many seconds without a command. 0 waits forever.
    pub timeout_secs: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            run_dir: PathBuf::from(DEFAULT_RUN_DIR),
            fifo_name: DEFAULT_FIFO_NAME.to_string(),
            timeout_secs: 0,
        }
    }
}

impl ChannelConfig {
    pub fn fifo_path(&self) -> PathBuf {
        self.run_dir.join(&self.fifo_name)
    }

    /// `None` means block indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Config {
    /// Loads the configuration from `PSPLASH_CONFIG` (if set) and applies the
    /// `PSPLASH_FIFO_DIR` override. Never fails: an unreadable or malformed
    /// file is reported and the defaults are used instead.
    pub fn load() -> Config {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Config::from_file(Path::new(&path)).unwrap_or_else(|e| {
                warn!("Config: {:#}; using defaults", e);
                Config::default()
            }),
            None => {
                debug!("Config: {} not set, using defaults", CONFIG_PATH_ENV);
                Config::default()
            }
        };
        config.apply_env_overrides(std::env::var_os(FIFO_DIR_ENV).map(PathBuf::from));
        config
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Config::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Config: loaded {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        if layout.split_denominator == 0 || layout.split_numerator > layout.split_denominator {
            anyhow::bail!(
                "invalid split {}/{}",
                layout.split_numerator,
                layout.split_denominator
            );
        }
        if self.channel.fifo_name.is_empty() || self.channel.fifo_name.contains('/') {
            anyhow::bail!("invalid fifo name {:?}", self.channel.fifo_name);
        }
        Ok(())
    }

    /// Applies the fifo directory override, if one is given.
    pub fn apply_env_overrides(&mut self, fifo_dir: Option<PathBuf>) {
        if let Some(dir) = fifo_dir.filter(|d| !d.as_os_str().is_empty()) {
            debug!("Config: fifo directory overridden to {}", dir.display());
            self.channel.run_dir = dir;
        }
    }
}

#[cfg(test)]
mod tests;
