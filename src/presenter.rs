// src/presenter.rs

//! A text [`Presenter`] that draws scenes as character grids on any writer.
//!
//! Each cell is seven columns wide (a six-column tile label plus the grid
//! line) and two rows tall (the tile row plus the row separator), so tiles
//! caught mid-slide land between cells instead of snapping. With ANSI output
//! enabled, every character is painted with the background of whatever covers
//! it, and animation frames redraw in place.

use crate::color::Color;
use crate::engine::board::SIDE;
use crate::renderer::{Presenter, Scene};
use anyhow::{Context, Result};
use std::io::Write;

/// Columns per cell, grid line included.
const CELL_COLS: usize = 7;
/// Columns of the tile label inside a cell.
const TILE_COLS: usize = CELL_COLS - 1;
/// Rows per cell, separator included.
const CELL_ROWS: usize = 2;

const CANVAS_COLS: usize = SIDE * CELL_COLS - 1;
const CANVAS_ROWS: usize = SIDE * CELL_ROWS - 1;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    bg: Color,
}

/// Writes scenes as text. Owns its writer; take it back with [`TextPresenter::into_inner`].
pub struct TextPresenter<W: Write> {
    output: W,
    ansi: bool,
    /// Rows occupied by the last animation frame, while it can still be overwritten.
    frame_rows: Option<usize>,
}

impl<W: Write> TextPresenter<W> {
    /// `ansi` enables truecolor backgrounds and in-place redraws; leave it off
    /// for pipes and files.
    pub fn new(output: W, ansi: bool) -> Self {
        TextPresenter {
            output,
            ansi,
            frame_rows: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_scene(&mut self, scene: &Scene) -> Result<()> {
        let previous_frame = self.frame_rows.take();
        if let (true, Some(rows)) = (self.ansi, previous_frame) {
            write!(self.output, "\x1b[{}A", rows).context("Failed to move cursor")?;
        }
        for row in rasterize(scene) {
            let mut line = String::with_capacity(CANVAS_COLS);
            let mut current = None;
            for glyph in row {
                if self.ansi && current != Some(glyph.bg) {
                    let (r, g, b) = glyph.bg.to_rgb();
                    line.push_str(&format!("\x1b[48;2;{};{};{}m", r, g, b));
                    current = Some(glyph.bg);
                }
                line.push(glyph.ch);
            }
            if self.ansi {
                line.push_str("\x1b[0m");
            }
            writeln!(self.output, "{}", line).context("Failed to write scene")?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn draw_scene(&mut self, scene: &Scene) -> Result<()> {
        self.write_scene(scene)
    }

    fn draw_frame(&mut self, scene: &Scene) -> Result<()> {
        self.write_scene(scene)?;
        self.frame_rows = Some(CANVAS_ROWS);
        Ok(())
    }

    fn show_message(&mut self, text: &str) -> Result<()> {
        self.frame_rows = None;
        writeln!(self.output, "{}", text).context("Failed to write message")
    }

    fn present(&mut self) -> Result<()> {
        self.output.flush().context("Failed to flush output")
    }
}

/// Empty board chrome with every sprite's label stamped on top, later sprites winning.
fn rasterize(scene: &Scene) -> Vec<Vec<Glyph>> {
    let blank = Glyph {
        ch: ' ',
        bg: scene.background,
    };
    let line = Glyph {
        ch: '|',
        bg: scene.grid_line,
    };
    let separator = Glyph {
        ch: '-',
        bg: scene.grid_line,
    };

    let mut canvas = vec![vec![blank; CANVAS_COLS]; CANVAS_ROWS];
    for (row, glyphs) in canvas.iter_mut().enumerate() {
        if row % CELL_ROWS == CELL_ROWS - 1 {
            glyphs.fill(separator);
            continue;
        }
        for cell in 0..SIDE {
            glyphs[cell * CELL_COLS + TILE_COLS / 2 - 1].ch = '.';
            if cell + 1 < SIDE {
                glyphs[cell * CELL_COLS + TILE_COLS] = line;
            }
        }
    }

    if scene.cell_span <= 0.0 {
        return canvas;
    }
    for sprite in &scene.sprites {
        let col = (sprite.x / scene.cell_span * CELL_COLS as f32).round().max(0.0) as usize;
        let row = (sprite.y / scene.cell_span * CELL_ROWS as f32).round().max(0.0) as usize;
        let Some(glyphs) = canvas.get_mut(row) else {
            continue;
        };
        let label = format!("{:^width$}", sprite.value(), width = TILE_COLS);
        for (offset, ch) in label.chars().enumerate() {
            if let Some(glyph) = glyphs.get_mut(col + offset) {
                *glyph = Glyph {
                    ch,
                    bg: sprite.color,
                };
            }
        }
    }
    canvas
}
