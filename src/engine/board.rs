// src/engine/board.rs

//! The board data model: sixteen tile ranks laid out row-major on a 4x4 grid,
//! plus the directions a move can take and the line walks they induce.

use super::fixed::FixedVec;
use super::line;
use log::{trace, warn};
use rand::seq::index;
use rand::Rng;
use std::fmt;

/// Width and height of the grid.
pub const SIDE: usize = 4;
/// Number of cells on the board (`SIDE * SIDE`).
pub const CELL_COUNT: usize = SIDE * SIDE;
/// Rank given to freshly spawned tiles (displayed as 2).
pub const SPAWN_RANK: u8 = 1;

/// Indices of the cells touched by a spawn.
pub type SpawnedCells = FixedVec<usize, CELL_COUNT>;

/// A move direction. Tiles slide toward the named edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

/// The axis a direction moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// The four lines of the board for this direction, in processing order.
    /// Each walk starts at the cell tiles slide toward.
    pub fn line_walks(self) -> [LineWalk; SIDE] {
        let side = SIDE as isize;
        std::array::from_fn(|n| match self {
            Direction::Left => LineWalk::new(n * SIDE, 1),
            Direction::Right => LineWalk::new(n * SIDE + SIDE - 1, -1),
            Direction::Up => LineWalk::new(n, side),
            Direction::Down => LineWalk::new((SIDE - 1) * SIDE + n, -side),
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// One row or column, walked from its head (`start`) toward its tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWalk {
    pub start: usize,
    pub step: isize,
}

impl LineWalk {
    pub const fn new(start: usize, step: isize) -> Self {
        LineWalk { start, step }
    }

    /// Board index of the `position`-th cell of the line (0 = head).
    pub fn cell(&self, position: usize) -> usize {
        (self.start as isize + self.step * position as isize) as usize
    }

    /// All board indices of the line, head first.
    pub fn cells(&self) -> [usize; SIDE] {
        std::array::from_fn(|position| self.cell(position))
    }
}

/// Row-major board position -> (column, row).
pub fn coords(index: usize) -> (usize, usize) {
    (index % SIDE, index / SIDE)
}

/// Sixteen tile ranks (0 = empty) and a running count of empty cells.
#[derive(Clone, Copy)]
pub struct Board {
    pub(super) cells: [u8; CELL_COUNT],
    pub(super) empty: u8,
}

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board {
        cells: [0; CELL_COUNT],
        empty: CELL_COUNT as u8,
    };

    /// Builds a board from explicit ranks, deriving the empty count.
    pub fn from_ranks(cells: [u8; CELL_COUNT]) -> Self {
        let empty = cells.iter().filter(|&&rank| rank == 0).count() as u8;
        Board { cells, empty }
    }

    pub fn ranks(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    pub fn rank(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == 0
    }

    pub fn empty_count(&self) -> usize {
        self.empty as usize
    }

    /// Highest rank on the board (0 for an empty board).
    pub fn max_rank(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Displayed value of a cell: `2^rank`, or 0 when empty.
    pub fn tile_value(&self, index: usize) -> u32 {
        match self.cells[index] {
            0 => 0,
            rank => 1u32 << rank,
        }
    }

    /// Places `count` rank-1 tiles into distinct empty cells chosen uniformly
    /// at random. Asking for more tiles than there are empty cells spawns one
    /// per empty cell. Returns the indices that were filled, lowest first.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> SpawnedCells {
        let mut spawned = SpawnedCells::new();
        let empty = self.empty_count();
        if empty == 0 {
            warn!("spawn_random_tile called on a full board; nothing spawned");
            return spawned;
        }

        let amount = count.min(empty);
        let mut picks = index::sample(rng, empty, amount).into_vec();
        picks.sort_unstable();

        // `picks` are ordinals among the empty cells; walk the board to resolve them.
        let mut ordinal = 0;
        let mut next_pick = picks.iter().peekable();
        for cell in 0..CELL_COUNT {
            if self.cells[cell] != 0 {
                continue;
            }
            if next_pick.peek() == Some(&&ordinal) {
                next_pick.next();
                self.cells[cell] = SPAWN_RANK;
                self.empty -= 1;
                spawned.push(cell);
            }
            ordinal += 1;
        }
        trace!("Spawned rank-{} tiles at {:?}", SPAWN_RANK, spawned);
        spawned
    }

    /// The board this one would become after sliding in `direction`, without
    /// spawning and without recording animations.
    pub fn shifted(&self, direction: Direction) -> Board {
        let mut next = *self;
        for walk in direction.line_walks() {
            line::transform_line(&mut next, walk, direction, &mut ());
        }
        next
    }

    /// True if sliding in `direction` would change the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.shifted(direction) != *self
    }

    /// Checks the stored empty count against the cells.
    pub fn is_consistent(&self) -> bool {
        self.cells.iter().filter(|&&rank| rank == 0).count() == self.empty_count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::EMPTY
    }
}

impl PartialEq for Board {
    /// Cell-by-cell comparison; the empty count follows from the cells.
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("cells", &self.cells)
            .field("empty", &self.empty)
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SIDE * 7 - 1);
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f, "{}", separator)?;
            }
            let line: Vec<String> = (0..SIDE)
                .map(|col| match self.tile_value(row * SIDE + col) {
                    0 => format!("{:^6}", "."),
                    value => format!("{:^6}", value),
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
