// src/engine/terminal.rs

//! Game-over detection.

use super::board::{Board, SIDE};

/// True when the board is full and no row or column holds two equal neighbours,
/// i.e. no direction can change the board.
pub fn is_game_over(board: &Board) -> bool {
    if board.empty_count() > 0 {
        return false;
    }

    let ranks = board.ranks();
    for row in 0..SIDE {
        for col in 0..SIDE - 1 {
            let index = row * SIDE + col;
            if ranks[index] == ranks[index + 1] {
                return false;
            }
        }
    }

    for col in 0..SIDE {
        for row in 0..SIDE - 1 {
            let index = row * SIDE + col;
            if ranks[index] == ranks[index + SIDE] {
                return false;
            }
        }
    }

    true
}
