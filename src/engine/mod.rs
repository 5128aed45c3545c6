// src/engine/mod.rs

//! The grid-state transition engine.
//!
//! Given a direction, the engine slides and merges tiles, decides whether the
//! board changed, spawns new tiles, and produces an animation plan describing
//! where every tile travelled. Nothing in here draws or reads input; the
//! `renderer` and the front end in `main` consume its output.

pub mod animation;
pub mod board;
pub mod fixed;
pub mod line;
pub mod moves;
pub mod session;
pub mod terminal;

pub use animation::{AnimationDescriptor, AnimationPlanner};
pub use board::{Board, Direction, CELL_COUNT};
pub use session::{GameSession, MoveOutcome};
