// src/engine/board/tests.rs

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_log::test;

#[test]
fn line_walks_start_at_the_edge_tiles_slide_toward() {
    let heads = |d: Direction| d.line_walks().map(|w| w.start);
    assert_eq!(heads(Direction::Left), [0, 4, 8, 12]);
    assert_eq!(heads(Direction::Right), [3, 7, 11, 15]);
    assert_eq!(heads(Direction::Up), [0, 1, 2, 3]);
    assert_eq!(heads(Direction::Down), [12, 13, 14, 15]);

    assert_eq!(Direction::Right.line_walks()[1].cells(), [7, 6, 5, 4]);
    assert_eq!(Direction::Down.line_walks()[2].cells(), [14, 10, 6, 2]);
}

#[test]
fn from_ranks_derives_empty_count() {
    let board = Board::from_ranks([1, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 11]);
    assert_eq!(board.empty_count(), 13);
    assert!(board.is_consistent());
    assert!(board.is_empty(1));
    assert!(!board.is_empty(0));
    assert_eq!(board.max_rank(), 11);
    assert_eq!(board.tile_value(15), 2048);
    assert_eq!(board.tile_value(1), 0);
}

#[test]
fn spawn_fills_distinct_empty_cells_with_rank_one() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let mut board = Board::from_ranks([2, 0, 3, 0, 0, 4, 0, 0, 5, 0, 0, 6, 0, 0, 0, 7]);
        let before = board;
        let spawned = board.spawn_random_tile(&mut rng, 2);
        assert_eq!(spawned.len(), 2);
        assert_ne!(spawned[0], spawned[1]);
        for &cell in &spawned {
            assert!(before.is_empty(cell));
            assert_eq!(board.rank(cell), SPAWN_RANK);
        }
        assert_eq!(board.empty_count(), before.empty_count() - 2);
        assert!(board.is_consistent());
    }
}

#[test]
fn spawn_reaches_every_empty_cell() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut seen = [false; CELL_COUNT];
    for _ in 0..1000 {
        let mut board = Board::EMPTY;
        for &cell in &board.spawn_random_tile(&mut rng, 1) {
            seen[cell] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn spawn_is_clamped_to_available_cells() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut cells = [1; CELL_COUNT];
    cells[9] = 0;
    let mut board = Board::from_ranks(cells);

    let spawned = board.spawn_random_tile(&mut rng, 2);
    assert_eq!(spawned.as_slice(), &[9]);
    assert_eq!(board.empty_count(), 0);

    // Full board: caller error, nothing happens.
    let spawned = board.spawn_random_tile(&mut rng, 1);
    assert!(spawned.is_empty());
    assert_eq!(board.empty_count(), 0);
}

#[test]
fn equality_compares_cells() {
    let a = Board::from_ranks([1; CELL_COUNT]);
    let mut b = a;
    assert_eq!(a, b);
    b.cells[4] = 2;
    assert_ne!(a, b);
}

#[test]
fn shifted_leaves_the_board_untouched() {
    let board = Board::from_ranks([0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let left = board.shifted(Direction::Left);
    assert_eq!(left.rank(0), 2);
    assert_eq!(board.rank(2), 1);
    assert!(board.can_move(Direction::Left));
    assert!(board.can_move(Direction::Right));

    let corner = Board::from_ranks([3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert!(!corner.can_move(Direction::Left));
    assert!(!corner.can_move(Direction::Up));
    assert!(corner.can_move(Direction::Down));
}

#[test]
fn display_shows_tile_values() {
    let board = Board::from_ranks([1, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].contains('2'));
    assert!(lines[2].contains("2048"));
}
