// src/config.rs

//! Defines the configuration structures for the game.
//!
//! Every section can be deserialized from a JSON file; any field that is
//! missing falls back to its default, so a config file only needs to name the
//! settings it changes. The defaults reproduce the classic layout: a grid of
//! 200-pixel cells, ten animation frames at roughly 60 fps, two starting tiles
//! and vi-style movement keys.

use crate::color::{Color, NamedColor, Palette};
use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

/// Environment variable naming the JSON config file used by [`CONFIG`].
pub const CONFIG_ENV_VAR: &str = "SLIDE_MERGE_CONFIG";

/// Process-wide configuration, loaded on first use from the file named by
/// `SLIDE_MERGE_CONFIG`, or the defaults when the variable is unset.
pub static CONFIG: Lazy<Config> = Lazy::new(|| match std::env::var_os(CONFIG_ENV_VAR) {
    Some(path) => Config::load_or_default(Path::new(&path)),
    None => Config::default(),
});

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Spawning and RNG settings.
    pub game: GameConfig,
    /// Geometry and timing of tile animations.
    pub animation: AnimationConfig,
    /// Tile palette and board chrome colors.
    pub colors: ColorScheme,
    /// Keys for the line-oriented front end.
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.game = config.game.validated();
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`Config::load`], but logs the failure and returns the defaults.
    pub fn load_or_default(path: &Path) -> Config {
        Config::load(path).unwrap_or_else(|e| {
            warn!("{:#}. Using default configuration.", e);
            Config::default()
        })
    }
}

// --- Game Configuration ---

/// Controls how tiles enter the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles placed on the empty board when a session starts.
    pub initial_tiles: usize,
    /// Tiles placed after each move that changes the board.
    pub tiles_per_move: usize,
    /// Fixed RNG seed for reproducible games. `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Accepted values for `initial_tiles` and `tiles_per_move`.
pub const SPAWN_COUNT_RANGE: RangeInclusive<usize> = 1..=2;

impl GameConfig {
    /// Clamps both spawn counts into [`SPAWN_COUNT_RANGE`], warning about any
    /// value that had to change.
    pub fn validated(self) -> Self {
        GameConfig {
            initial_tiles: clamp_spawn_count("initial_tiles", self.initial_tiles),
            tiles_per_move: clamp_spawn_count("tiles_per_move", self.tiles_per_move),
            ..self
        }
    }
}

/// Clamps one spawn count into [`SPAWN_COUNT_RANGE`].
pub fn clamp_spawn_count(name: &str, value: usize) -> usize {
    let clamped = value.clamp(*SPAWN_COUNT_RANGE.start(), *SPAWN_COUNT_RANGE.end());
    if clamped != value {
        warn!(
            "game.{} = {} is outside {:?}; using {}.",
            name, value, SPAWN_COUNT_RANGE, clamped
        );
    }
    clamped
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            initial_tiles: 2,
            tiles_per_move: 1,
            seed: None,
        }
    }
}

// --- Animation Configuration ---

/// Geometry and timing consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// On-screen size of one cell in pixels; animation distances are multiples of it.
    pub cell_span_px: f32,
    /// Side of the filled square drawn for a tile, in pixels.
    pub tile_size_px: f32,
    /// Frames used to play one move.
    pub frames: u32,
    /// Target time per frame. Pacing itself is up to the display layer.
    pub frame_interval_ms: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            cell_span_px: 200.0,
            tile_size_px: 197.0,
            frames: 10,
            frame_interval_ms: 1000.0 / 60.0,
        }
    }
}

// --- Color Scheme Configuration ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Tile colors, lowest rank first.
    pub palette: Palette,
    pub background: Color,
    pub grid_line: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            palette: Palette::default(),
            background: Color::Named(NamedColor::White),
            grid_line: Color::Named(NamedColor::Black),
        }
    }
}

// --- Keybinding Configuration ---

/// Characters the front end maps to actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub left: char,
    pub right: char,
    pub up: char,
    pub down: char,
    pub quit: char,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        KeybindingsConfig {
            left: 'h',
            down: 'j',
            up: 'k',
            right: 'l',
            quit: 'q',
        }
    }
}
