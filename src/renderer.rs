// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` turns engine output into backend-agnostic scenes: lists of
//! tile sprites with pixel positions and colors. A display layer only has to
//! fill one square per sprite. For a move it produces one scene per animation
//! frame, sliding each tile from its source cell toward its destination; after
//! the last frame the caller switches to `layout` of the new board, which is
//! where merged and spawned tiles appear.
//!
//! Scenes are handed to a [`Presenter`], the surface that actually shows them.

use crate::color::{Color, Palette};
use crate::config::Config;
use crate::engine::board::{coords, Board, CELL_COUNT};
use crate::engine::AnimationDescriptor;
use anyhow::Result;
use log::{trace, warn};
use std::time::Duration;

/// Gap between a cell's top-left corner and the tile drawn inside it.
const TILE_INSET_PX: f32 = 1.0;

/// One tile to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Board index the tile belongs to (its source cell while animating).
    pub index: usize,
    pub rank: u8,
    /// Top-left corner in pixels.
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

impl Sprite {
    /// Number shown on the tile: `2^rank`.
    pub fn value(&self) -> u32 {
        1u32 << self.rank
    }
}

/// Everything to draw for one frame: board chrome plus tiles in board order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// On-screen size of one cell; sprite coordinates are in the same units.
    pub cell_span: f32,
    pub background: Color,
    pub grid_line: Color,
    pub sprites: Vec<Sprite>,
}

impl Scene {
    pub fn sprite(&self, index: usize) -> Option<&Sprite> {
        self.sprites.iter().find(|sprite| sprite.index == index)
    }
}

/// A surface scenes are shown on, fed by the orchestrator.
pub trait Presenter {
    /// Draws a board at rest. Replaces the last animation frame when the
    /// surface can redraw in place.
    fn draw_scene(&mut self, scene: &Scene) -> Result<()>;

    /// Draws one animation frame. Replaces the previous frame of the same
    /// animation when the surface can redraw in place.
    fn draw_frame(&mut self, scene: &Scene) -> Result<()>;

    /// Shows a line of text to the player.
    fn show_message(&mut self, text: &str) -> Result<()>;

    /// Makes everything drawn so far visible.
    fn present(&mut self) -> Result<()>;
}

/// Translates boards and animation queues into scenes.
#[derive(Debug, Clone)]
pub struct Renderer {
    cell_span: f32,
    tile_size: f32,
    frames: u32,
    frame_interval: Duration,
    palette: Palette,
    background: Color,
    grid_line: Color,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        let interval_ms = config.animation.frame_interval_ms;
        let frame_interval = Duration::try_from_secs_f64(interval_ms / 1000.0).unwrap_or_else(|e| {
            warn!("Invalid frame interval {} ms ({}); frames will not be paced.", interval_ms, e);
            Duration::ZERO
        });
        Renderer {
            cell_span: config.animation.cell_span_px,
            tile_size: config.animation.tile_size_px,
            frames: config.animation.frames,
            frame_interval,
            palette: config.colors.palette.clone(),
            background: config.colors.background,
            grid_line: config.colors.grid_line,
        }
    }

    /// Time each animation frame should stay on screen.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    fn scene(&self, sprites: Vec<Sprite>) -> Scene {
        Scene {
            cell_span: self.cell_span,
            background: self.background,
            grid_line: self.grid_line,
            sprites,
        }
    }

    /// Pixel position of the tile drawn in cell `index` when at rest.
    pub fn cell_origin(&self, index: usize) -> (f32, f32) {
        let (col, row) = coords(index);
        (
            col as f32 * self.cell_span + TILE_INSET_PX,
            row as f32 * self.cell_span + TILE_INSET_PX,
        )
    }

    /// Every tile of `board` at rest in its cell.
    pub fn layout(&self, board: &Board) -> Scene {
        let sprites = (0..CELL_COUNT)
            .filter_map(|index| {
                let rank = board.rank(index);
                let color = self.palette.color_for_rank(rank)?;
                let (x, y) = self.cell_origin(index);
                Some(Sprite {
                    index,
                    rank,
                    x,
                    y,
                    size: self.tile_size,
                    color,
                })
            })
            .collect();
        self.scene(sprites)
    }

    /// The animation frames for a move that started from `before`.
    ///
    /// Frame `k` (1-based) shows every moving tile `k / frames` of the way to
    /// its destination; the last frame has each one exactly on its destination
    /// cell. Zero-distance descriptors leave their tile where it is.
    pub fn frames(&self, before: &Board, animations: &[AnimationDescriptor]) -> Vec<Scene> {
        if self.frames == 0 {
            warn!("Animation frame count is zero; skipping move animation.");
            return Vec::new();
        }
        let start = self.layout(before);
        let mut moving: [Option<&AnimationDescriptor>; CELL_COUNT] = [None; CELL_COUNT];
        for descriptor in animations.iter().filter(|d| !d.is_stationary()) {
            moving[descriptor.source] = Some(descriptor);
        }

        (1..=self.frames)
            .map(|frame| {
                let fraction = frame as f32 / self.frames as f32;
                let sprites = start
                    .sprites
                    .iter()
                    .map(|sprite| match moving[sprite.index] {
                        Some(descriptor) => {
                            let (dx, dy) = descriptor.offset_at(fraction);
                            Sprite {
                                x: sprite.x + dx,
                                y: sprite.y + dy,
                                ..*sprite
                            }
                        }
                        None => *sprite,
                    })
                    .collect();
                self.scene(sprites)
            })
            .inspect(|scene| trace!("Renderer: frame with {} sprites", scene.sprites.len()))
            .collect()
    }
}
