//! Spawn module - seeding new games and placing post-move tiles

use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::types::{FOUR_CHANCE_IN, GRID_SIZE, START_TILES};

/// Value for a freshly placed tile: 4 one time in ten, otherwise 2
fn draw_tile_value(rng: &mut SimpleRng) -> u32 {
    if rng.one_in(FOUR_CHANCE_IN) {
        4
    } else {
        2
    }
}

/// Place one new tile into a uniformly chosen empty cell.
///
/// Returns the coordinate written, or None on a full grid. The full-grid
/// case is unreachable while callers honor `can_move`, but it must stay a
/// silent no-op regardless.
pub fn spawn_tile(grid: &mut Grid, rng: &mut SimpleRng) -> Option<(u8, u8)> {
    let empties = grid.empty_cells();
    if empties.is_empty() {
        return None;
    }
    let pick = rng.next_range(empties.len() as u32) as usize;
    let (row, col) = empties[pick];
    grid.set(row as usize, col as usize, draw_tile_value(rng));
    Some((row, col))
}

/// Place `count` starting tiles at distinct random cells.
///
/// Rejection-samples coordinates until an empty cell is hit, which is cheap
/// at game start when the grid is almost entirely empty.
pub fn seed_grid(grid: &mut Grid, rng: &mut SimpleRng, count: usize) {
    for _ in 0..count {
        if grid.empty_cells().is_empty() {
            return;
        }
        loop {
            let row = rng.next_range(GRID_SIZE as u32) as usize;
            let col = rng.next_range(GRID_SIZE as u32) as usize;
            if grid.get(row, col) == 0 {
                grid.set(row, col, draw_tile_value(rng));
                break;
            }
        }
    }
}

/// Start a new game: an empty grid with the standard two starting tiles
pub fn new_game(rng: &mut SimpleRng) -> Grid {
    let mut grid = Grid::new();
    seed_grid(&mut grid, rng, START_TILES);
    grid
}
