// src/engine/line/tests.rs

use super::*;
use crate::engine::animation::AnimationPlanner;
use crate::engine::board::CELL_COUNT;
use test_log::test;

const SPAN: f32 = 200.0;

// --- Test Helpers ---

/// A board whose top row holds `row` and whose other cells are empty.
fn board_with_top_row(row: [u8; SIDE]) -> Board {
    let mut cells = [0; CELL_COUNT];
    cells[..SIDE].copy_from_slice(&row);
    Board::from_ranks(cells)
}

fn top_row(board: &Board) -> [u8; SIDE] {
    let mut row = [0; SIDE];
    row.copy_from_slice(&board.ranks()[..SIDE]);
    row
}

/// Runs the top row through a full transform and returns (row, merges, planner).
fn run(row: [u8; SIDE], direction: Direction) -> ([u8; SIDE], usize, AnimationPlanner) {
    let mut board = board_with_top_row(row);
    let mut planner = AnimationPlanner::new(SPAN);
    let walk = direction.line_walks()[0];
    let merges = transform_line(&mut board, walk, direction, &mut planner);
    assert!(board.is_consistent(), "empty count drifted for {:?}", row);
    (top_row(&board), merges, planner)
}

/// (source, destination, distance) of every descriptor, in queue order.
fn plan(planner: &AnimationPlanner) -> Vec<(usize, usize, f32)> {
    planner
        .descriptors()
        .iter()
        .map(|d| (d.source, d.destination, d.distance))
        .collect()
}

// --- Shift / combine behavior ---

#[test]
fn equal_pair_merges_into_head_and_both_descriptors_end_there() {
    let (row, merges, planner) = run([2, 2, 0, 0], Direction::Left);
    assert_eq!(row, [3, 0, 0, 0]);
    assert_eq!(merges, 1);
    assert_eq!(plan(&planner), vec![(0, 0, 0.0), (1, 0, SPAN)]);
}

#[test]
fn gaps_are_compacted_before_merging() {
    let (row, merges, planner) = run([0, 1, 0, 1], Direction::Left);
    assert_eq!(row, [2, 0, 0, 0]);
    assert_eq!(merges, 1);
    assert_eq!(plan(&planner), vec![(1, 0, SPAN), (3, 0, 3.0 * SPAN)]);
}

#[test]
fn merged_tile_is_not_merged_again_in_the_same_move() {
    let (row, merges, _) = run([1, 1, 1, 0], Direction::Left);
    assert_eq!(row, [2, 1, 0, 0]);
    assert_eq!(merges, 1);

    let (row, merges, _) = run([1, 1, 1, 1], Direction::Left);
    assert_eq!(row, [2, 2, 0, 0]);
    assert_eq!(merges, 2);

    let (row, merges, _) = run([2, 1, 1, 0], Direction::Left);
    assert_eq!(row, [2, 2, 0, 0]);
    assert_eq!(merges, 1);
}

#[test]
fn second_shift_carries_both_halves_of_a_merge() {
    // The pair at 2/3 merges into 2, then slides to 1 after the first pair merged.
    let (row, merges, planner) = run([1, 1, 2, 2], Direction::Left);
    assert_eq!(row, [2, 3, 0, 0]);
    assert_eq!(merges, 2);
    assert_eq!(
        plan(&planner),
        vec![(0, 0, 0.0), (1, 0, SPAN), (2, 1, SPAN), (3, 1, 2.0 * SPAN)]
    );
    assert_eq!(planner.arriving_at(1).count(), 2);
    assert_eq!(planner.arriving_at(2).count(), 0);
}

#[test]
fn right_moves_toward_the_last_column() {
    let (row, merges, planner) = run([0, 2, 2, 1], Direction::Right);
    assert_eq!(row, [0, 0, 3, 1]);
    assert_eq!(merges, 1);
    let moved: Vec<_> = plan(&planner).into_iter().filter(|p| p.2 > 0.0).collect();
    assert_eq!(moved, vec![(1, 2, SPAN)]);
    assert!(planner
        .descriptors()
        .iter()
        .all(|d| d.direction == Direction::Right));
}

#[test]
fn no_movement_still_registers_zero_distance_descriptors() {
    let (row, merges, planner) = run([1, 2, 3, 0], Direction::Left);
    assert_eq!(row, [1, 2, 3, 0]);
    assert_eq!(merges, 0);
    assert_eq!(planner.len(), 3);
    assert!(planner.descriptors().iter().all(|d| d.is_stationary()));
}

#[test]
fn vertical_walk_uses_column_cells() {
    let mut cells = [0; CELL_COUNT];
    cells[4] = 1; // column 0, row 1
    cells[12] = 1; // column 0, row 3
    let mut board = Board::from_ranks(cells);
    let mut planner = AnimationPlanner::new(SPAN);
    let walk = Direction::Up.line_walks()[0];
    assert_eq!(walk.cells(), [0, 4, 8, 12]);

    let merges = transform_line(&mut board, walk, Direction::Up, &mut planner);
    assert_eq!(merges, 1);
    assert_eq!(board.rank(0), 2);
    assert_eq!(board.empty_count(), CELL_COUNT - 1);
    assert_eq!(plan(&planner), vec![(4, 0, SPAN), (12, 0, 3.0 * SPAN)]);
}

// --- Properties over every small line ---

/// All rows with ranks 0..=3 in each cell.
fn all_small_rows() -> impl Iterator<Item = [u8; SIDE]> {
    (0..4u32.pow(SIDE as u32)).map(|mut n| {
        let mut row = [0u8; SIDE];
        for cell in row.iter_mut() {
            *cell = (n % 4) as u8;
            n /= 4;
        }
        row
    })
}

fn tile_sum(row: &[u8]) -> u32 {
    row.iter().map(|&r| if r == 0 { 0 } else { 1u32 << r }).sum()
}

#[test]
fn transform_conserves_value_and_each_merge_frees_one_cell() {
    for row in all_small_rows() {
        let before = board_with_top_row(row);
        let (after_row, merges, _) = run(row, Direction::Left);
        let after = board_with_top_row(after_row);
        assert_eq!(tile_sum(&row), tile_sum(&after_row), "value changed for {:?}", row);
        assert_eq!(after.empty_count(), before.empty_count() + merges, "row {:?}", row);
    }
}

#[test]
fn transform_is_idempotent_once_nothing_can_merge() {
    for row in all_small_rows() {
        let mut once = board_with_top_row(row);
        let walk = Direction::Left.line_walks()[0];
        transform_line(&mut once, walk, Direction::Left, &mut ());
        let settled = top_row(&once);
        let can_merge = settled.windows(2).any(|w| w[0] != 0 && w[0] == w[1]);
        if can_merge {
            continue;
        }
        let mut twice = once;
        let merges = transform_line(&mut twice, walk, Direction::Left, &mut ());
        assert_eq!(merges, 0);
        assert_eq!(twice, once, "second transform changed {:?}", settled);
    }
}

#[test]
fn surviving_tiles_keep_their_order() {
    for row in all_small_rows() {
        let (after, merges, _) = run(row, Direction::Left);
        if merges > 0 {
            continue;
        }
        let before: Vec<u8> = row.iter().copied().filter(|&r| r != 0).collect();
        let after: Vec<u8> = after.iter().copied().filter(|&r| r != 0).collect();
        assert_eq!(before, after);
    }
}
