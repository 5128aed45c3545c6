// src/color.rs

//! Defines color-related types (`NamedColor`, `Color`) and the tile `Palette`.
//!
//! The engine only knows tile ranks. Turning a rank into something drawable is
//! the renderer's business, and the palette is how it does that.

use serde::{Deserialize, Serialize};

/// Number of palette entries; ranks above this reuse the last entry.
pub const PALETTE_SIZE: usize = 11;

/// The colors the default palette and board chrome are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedColor {
    Grey,
    Yellow,
    Orange,
    Red,
    Magenta,
    Purple,
    Blue,
    Cyan,
    Green,
    Brown,
    Black,
    White,
}

impl NamedColor {
    /// The `(r, g, b)` components of this named color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Grey => (105, 105, 105),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Orange => (200, 100, 0),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Magenta => (130, 18, 75),
            NamedColor::Purple => (255, 100, 255),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Cyan => (0, 255, 255),
            NamedColor::Green => (55, 206, 68),
            NamedColor::Brown => (20, 14, 15),
            NamedColor::Black => (0, 0, 0),
            NamedColor::White => (255, 255, 255),
        }
    }
}

/// A color as written in the config file: a name or explicit RGB components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Resolves to `(r, g, b)`.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::Black)
    }
}

/// Tile colors keyed by rank: entry 0 is rank 1 (the "2" tile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub [Color; PALETTE_SIZE]);

impl Palette {
    /// Color for a tile of `rank`, or `None` for an empty cell.
    pub fn color_for_rank(&self, rank: u8) -> Option<Color> {
        if rank == 0 {
            return None;
        }
        let entry = (rank as usize - 1).min(PALETTE_SIZE - 1);
        Some(self.0[entry])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette([
            Color::Named(NamedColor::Grey),    // 2
            Color::Named(NamedColor::Yellow),  // 4
            Color::Named(NamedColor::Orange),  // 8
            Color::Named(NamedColor::Red),     // 16
            Color::Named(NamedColor::Magenta), // 32
            Color::Named(NamedColor::Purple),  // 64
            Color::Named(NamedColor::Blue),    // 128
            Color::Named(NamedColor::Cyan),    // 256
            Color::Named(NamedColor::Green),   // 512
            Color::Named(NamedColor::Brown),   // 1024
            Color::Named(NamedColor::Black),   // 2048
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn rank_one_uses_first_entry_and_high_ranks_clamp() {
        let palette = Palette::default();
        assert_eq!(palette.color_for_rank(0), None);
        assert_eq!(palette.color_for_rank(1), Some(Color::Named(NamedColor::Grey)));
        assert_eq!(palette.color_for_rank(11), Some(Color::Named(NamedColor::Black)));
        assert_eq!(palette.color_for_rank(17), Some(Color::Named(NamedColor::Black)));
    }

    #[test]
    fn named_and_rgb_resolve_to_components() {
        assert_eq!(Color::Named(NamedColor::Orange).to_rgb(), (200, 100, 0));
        assert_eq!(Color::Rgb(1, 2, 3).to_rgb(), (1, 2, 3));
    }
}
