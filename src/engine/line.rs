// src/engine/line.rs

//! Shift and combine primitives over a single line of the board.
//!
//! A line is described by a [`LineWalk`]: the head cell (the edge tiles slide
//! toward) and a signed step. The same three passes serve every direction:
//!
//! 1. compact toward the head, registering one animation per tile,
//! 2. merge equal neighbours, head-first, at most once per pair,
//! 3. compact again to close the gaps merges left, re-targeting animations.

use super::board::{Board, Direction, LineWalk, SIDE};
use log::trace;

/// Receives the movements a line transform performs.
///
/// The planner implements this to build the animation queue; `()` implements
/// it as a no-op for pure board arithmetic (look-ahead, game-over checks).
pub trait AnimationSink {
    /// A tile that started the move at `source` now sits at `destination`.
    fn register(&mut self, direction: Direction, source: usize, destination: usize);
    /// Whatever was heading for `old_destination` now ends at `new_destination`.
    fn retarget(&mut self, old_destination: usize, new_destination: usize);
}

impl AnimationSink for () {
    fn register(&mut self, _direction: Direction, _source: usize, _destination: usize) {}
    fn retarget(&mut self, _old_destination: usize, _new_destination: usize) {}
}

/// Which compaction pass is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftPass {
    /// Before merging: every tile registers a descriptor.
    First,
    /// After merging: moves only re-target existing descriptors.
    Second,
}

/// Slides every tile of the line toward its head, keeping their order.
pub fn shift_line<S: AnimationSink + ?Sized>(
    board: &mut Board,
    walk: LineWalk,
    direction: Direction,
    pass: ShiftPass,
    sink: &mut S,
) {
    let mut free = 0;
    for position in 0..SIDE {
        let from = walk.cell(position);
        let rank = board.cells[from];
        if rank == 0 {
            continue;
        }
        let to = walk.cell(free);
        board.cells[from] = 0;
        board.cells[to] = rank;

        match pass {
            ShiftPass::First => sink.register(direction, from, to),
            ShiftPass::Second if from != to => sink.retarget(from, to),
            ShiftPass::Second => {}
        }
        free += 1;
    }
}

/// Merges equal adjacent tiles into the cell nearer the head.
///
/// After a merge the scan moves on to the now-empty trailing cell, so a freshly
/// merged tile is never compared against its new neighbour in the same pass.
/// Returns the number of merges performed.
pub fn combine_line<S: AnimationSink + ?Sized>(board: &mut Board, walk: LineWalk, sink: &mut S) -> usize {
    let mut merges = 0;
    for position in 0..SIDE - 1 {
        let head = walk.cell(position);
        let trailing = walk.cell(position + 1);
        let rank = board.cells[head];
        if rank != 0 && rank == board.cells[trailing] {
            board.cells[head] = rank.saturating_add(1);
            board.cells[trailing] = 0;
            board.empty += 1;
            sink.retarget(trailing, head);
            merges += 1;
        }
    }
    merges
}

/// Shift, combine, shift. Returns the number of merges.
pub fn transform_line<S: AnimationSink + ?Sized>(
    board: &mut Board,
    walk: LineWalk,
    direction: Direction,
    sink: &mut S,
) -> usize {
    shift_line(board, walk, direction, ShiftPass::First, sink);
    let merges = combine_line(board, walk, sink);
    shift_line(board, walk, direction, ShiftPass::Second, sink);
    trace!(
        "transform_line {} start={} step={}: merges={}",
        direction,
        walk.start,
        walk.step,
        merges
    );
    merges
}

#[cfg(test)]
mod tests;
