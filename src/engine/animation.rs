// src/engine/animation.rs

//! Builds the list of per-tile movements a renderer needs to interpolate one move.
//!
//! Every tile present when a move starts gets one [`AnimationDescriptor`] during
//! the first shift pass. Later passes move tiles again; instead of adding more
//! descriptors they re-target the existing ones so each descriptor always ends
//! where its tile ends up.
//!
//! Re-targeting goes through an arrival table: one slot per board cell listing
//! the descriptors currently ending there. A slot holds at most two entries, the
//! two halves of a merged tile, and re-targeting moves the whole slot. Two tiles
//! that merged therefore always travel on together.

use super::board::{coords, Axis, Direction, CELL_COUNT};
use super::fixed::FixedVec;
use super::line::AnimationSink;
use log::trace;

/// Upper bound on tiles ending a move in the same cell (the two halves of a merge).
pub const MAX_ARRIVALS: usize = 2;

/// Descriptors for one move. At most one per tile on the board.
pub type AnimationQueue = FixedVec<AnimationDescriptor, CELL_COUNT>;

type Arrivals = FixedVec<u8, MAX_ARRIVALS>;

/// Movement of one tile over a single move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationDescriptor {
    pub direction: Direction,
    /// Pixels travelled along the move axis. Zero means the tile stays put.
    pub distance: f32,
    /// Board index of the tile when the move started.
    pub source: usize,
    /// Board index the tile ends up in.
    pub destination: usize,
}

impl AnimationDescriptor {
    fn new(direction: Direction, source: usize, destination: usize, cell_span: f32) -> Self {
        AnimationDescriptor {
            direction,
            distance: distance(direction, source, destination, cell_span),
            source,
            destination,
        }
    }

    /// True when there is nothing to draw for this descriptor.
    pub fn is_stationary(&self) -> bool {
        self.distance == 0.0
    }

    /// Signed (dx, dy) pixel offset from the source after `fraction` of the travel.
    pub fn offset_at(&self, fraction: f32) -> (f32, f32) {
        let travelled = self.distance * fraction;
        match self.direction {
            Direction::Left => (-travelled, 0.0),
            Direction::Right => (travelled, 0.0),
            Direction::Up => (0.0, -travelled),
            Direction::Down => (0.0, travelled),
        }
    }
}

/// |delta| of the row or column coordinate (per the direction's axis), in pixels.
fn distance(direction: Direction, source: usize, destination: usize, cell_span: f32) -> f32 {
    let (source_col, source_row) = coords(source);
    let (dest_col, dest_row) = coords(destination);
    let cells = match direction.axis() {
        Axis::Horizontal => source_col.abs_diff(dest_col),
        Axis::Vertical => source_row.abs_diff(dest_row),
    };
    cells as f32 * cell_span
}

/// Owns the animation queue for the move in progress.
#[derive(Debug, Clone)]
pub struct AnimationPlanner {
    queue: AnimationQueue,
    arrivals: [Arrivals; CELL_COUNT],
    cell_span: f32,
}

impl AnimationPlanner {
    /// `cell_span` is the on-screen size of one cell; distances are multiples of it.
    pub fn new(cell_span: f32) -> Self {
        AnimationPlanner {
            queue: AnimationQueue::new(),
            arrivals: [Arrivals::new(); CELL_COUNT],
            cell_span,
        }
    }

    pub fn cell_span(&self) -> f32 {
        self.cell_span
    }

    pub fn descriptors(&self) -> &[AnimationDescriptor] {
        self.queue.as_slice()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Descriptors currently ending at `destination`.
    pub fn arriving_at(&self, destination: usize) -> impl Iterator<Item = &AnimationDescriptor> + '_ {
        self.arrivals[destination]
            .iter()
            .map(move |&id| &self.queue[id as usize])
    }

    /// Hands the queue to the caller and resets the planner for the next move.
    pub fn take(&mut self) -> AnimationQueue {
        let queue = self.queue;
        self.clear();
        queue
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        for slot in self.arrivals.iter_mut() {
            slot.clear();
        }
    }
}

impl AnimationSink for AnimationPlanner {
    fn register(&mut self, direction: Direction, source: usize, destination: usize) {
        let id = self.queue.len() as u8;
        self.queue
            .push(AnimationDescriptor::new(direction, source, destination, self.cell_span));
        self.arrivals[destination].push(id);
        trace!("register {}: {} -> {}", direction, source, destination);
    }

    fn retarget(&mut self, old_destination: usize, new_destination: usize) {
        if old_destination == new_destination {
            return;
        }
        let moving = std::mem::take(&mut self.arrivals[old_destination]);
        for &id in &moving {
            if let Some(descriptor) = self.queue.get_mut(id as usize) {
                descriptor.destination = new_destination;
                descriptor.distance = distance(
                    descriptor.direction,
                    descriptor.source,
                    new_destination,
                    self.cell_span,
                );
            }
            self.arrivals[new_destination].push(id);
        }
        trace!(
            "retarget {} -> {} ({} descriptors)",
            old_destination,
            new_destination,
            moving.len()
        );
    }
}
