//! Moves module - directional transforms over the grid
//!
//! Each direction is the same lane walk: read four cells in the direction of
//! travel, run the slide-and-merge pass, write the result back through the
//! same index mapping. The merge algorithm itself lives in `line` and is
//! written exactly once.

use crate::core::grid::Grid;
use crate::core::line::slide_and_merge;
use crate::types::{Direction, GRID_SIZE};

/// Grid coordinate of `slot` within `lane` when sliding toward `dir`.
///
/// Slot 0 is the near edge of the move: Left reads rows left-to-right,
/// Right right-to-left, Up reads columns top-to-bottom, Down bottom-to-top.
#[inline]
fn lane_cell(dir: Direction, lane: usize, slot: usize) -> (usize, usize) {
    match dir {
        Direction::Left => (lane, slot),
        Direction::Right => (lane, GRID_SIZE - 1 - slot),
        Direction::Up => (slot, lane),
        Direction::Down => (GRID_SIZE - 1 - slot, lane),
    }
}

/// Slide and merge every lane toward `dir`.
///
/// Returns true if any cell changed. When this returns false the grid is
/// bit-for-bit identical to its input; callers rely on that to decide
/// whether a spawn should follow.
pub fn apply_move(grid: &mut Grid, dir: Direction) -> bool {
    let mut changed = false;

    for lane in 0..GRID_SIZE {
        let mut cells = [0u32; GRID_SIZE];
        for (slot, cell) in cells.iter_mut().enumerate() {
            let (row, col) = lane_cell(dir, lane, slot);
            *cell = grid.get(row, col);
        }

        if slide_and_merge(&mut cells) {
            changed = true;
            for (slot, &cell) in cells.iter().enumerate() {
                let (row, col) = lane_cell(dir, lane, slot);
                grid.set(row, col, cell);
            }
        }
    }

    changed
}
