// src/engine/session.rs

//! One running game: the board, the animation plan for the last move, and the
//! RNG that decides where tiles spawn.

use super::animation::{AnimationDescriptor, AnimationPlanner, AnimationQueue};
use super::board::{Board, Direction};
use super::moves::{apply_move, MoveResult};
use super::terminal::is_game_over;
use crate::config::{clamp_spawn_count, Config};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything a front end needs after a move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub direction: Direction,
    /// The board as it was before the move; animations start from its tiles.
    pub before: Board,
    pub result: MoveResult,
    pub game_over: bool,
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        self.result.changed
    }
}

/// Owns all mutable game state. Moves take `&mut self`, so they run one at a time.
pub struct GameSession {
    board: Board,
    planner: AnimationPlanner,
    rng: StdRng,
    tiles_per_move: usize,
    moves_made: u64,
}

impl GameSession {
    /// Starts a game: an empty board seeded with `config.game.initial_tiles` tiles.
    /// Spawn counts outside `1..=2` are clamped.
    pub fn new(config: &Config) -> Self {
        let game = config.game.clone().validated();
        let rng = match game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = GameSession::with_board(
            Board::EMPTY,
            rng,
            config.animation.cell_span_px,
            game.tiles_per_move,
        );
        let spawned = session
            .board
            .spawn_random_tile(&mut session.rng, game.initial_tiles);
        info!(
            "New game: seed={:?}, initial tiles at {:?}",
            game.seed, spawned
        );
        session
    }

    /// A session over an existing board. Nothing is spawned up front.
    pub fn with_board(board: Board, rng: StdRng, cell_span: f32, tiles_per_move: usize) -> Self {
        GameSession {
            board,
            planner: AnimationPlanner::new(cell_span),
            rng,
            tiles_per_move: clamp_spawn_count("tiles_per_move", tiles_per_move),
            moves_made: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Animations of the last move, until [`GameSession::take_animations`] drains them.
    pub fn animations(&self) -> &[AnimationDescriptor] {
        self.planner.descriptors()
    }

    pub fn take_animations(&mut self) -> AnimationQueue {
        self.planner.take()
    }

    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.board)
    }

    /// Moves that changed the board.
    pub fn moves_made(&self) -> u64 {
        self.moves_made
    }

    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.board;
        let result = apply_move(
            &mut self.board,
            direction,
            &mut self.planner,
            &mut self.rng,
            self.tiles_per_move,
        );
        if result.changed {
            self.moves_made += 1;
        }
        let game_over = self.is_game_over();
        debug!(
            "Move #{} ({}): changed={}, game_over={}",
            self.moves_made, direction, result.changed, game_over
        );
        trace!("Board after {}:\n{}", direction, self.board);
        MoveOutcome {
            direction,
            before,
            result,
            game_over,
        }
    }
}
