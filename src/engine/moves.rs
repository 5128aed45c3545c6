// src/engine/moves.rs

//! Full-board moves: four line transforms, change detection and spawning.

use super::animation::AnimationPlanner;
use super::board::{Board, Direction, SpawnedCells, CELL_COUNT};
use super::line::transform_line;
use bitflags::bitflags;
use log::debug;
use rand::Rng;

bitflags! {
    /// What happened to a cell during a move, as seen by whoever draws it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TileChange: u8 {
        /// A tile slid into this cell from elsewhere.
        const MOVED   = 1 << 0;
        /// Two tiles combined into this cell.
        const MERGED  = 1 << 1;
        /// A new tile appeared here after the slide.
        const SPAWNED = 1 << 2;
    }
}

/// Summary of one move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// False when the direction left every cell untouched; nothing spawned then.
    pub changed: bool,
    pub merges: usize,
    pub spawned: SpawnedCells,
    /// Indexed by board position, after the move.
    pub changes: [TileChange; CELL_COUNT],
}

/// Slides `board` in `direction`, recording animations in `planner`, and spawns
/// `spawn_count` new tiles if anything changed.
///
/// The planner is cleared first; whatever it held from the previous move is
/// discarded.
pub fn apply_move<R: Rng + ?Sized>(
    board: &mut Board,
    direction: Direction,
    planner: &mut AnimationPlanner,
    rng: &mut R,
    spawn_count: usize,
) -> MoveResult {
    planner.clear();
    let before = *board;

    let mut merges = 0;
    for walk in direction.line_walks() {
        merges += transform_line(board, walk, direction, planner);
    }

    let changed = *board != before;
    let mut changes = [TileChange::empty(); CELL_COUNT];
    for (cell, change) in changes.iter_mut().enumerate() {
        let mut arriving = 0;
        for descriptor in planner.arriving_at(cell) {
            arriving += 1;
            if !descriptor.is_stationary() {
                *change |= TileChange::MOVED;
            }
        }
        if arriving > 1 {
            *change |= TileChange::MERGED;
        }
    }

    let spawned = if changed {
        board.spawn_random_tile(rng, spawn_count)
    } else {
        SpawnedCells::new()
    };
    for &cell in &spawned {
        changes[cell] |= TileChange::SPAWNED;
    }

    debug!(
        "apply_move {}: changed={} merges={} spawned={:?} empty={}",
        direction,
        changed,
        merges,
        spawned,
        board.empty_count()
    );

    MoveResult {
        changed,
        merges,
        spawned,
        changes,
    }
}
