//! Policy module - heuristic evaluation and greedy move selection
//!
//! One-ply lookahead: try each direction on an owned copy of the grid, score
//! the result, keep the best. The live grid is never touched during trials.
//!
//! The evaluation is a linear blend of empty-cell count and largest tile.
//! A clustering term (rewarding adjacency of equal tiles) has been
//! considered but its metric is an open design decision; see DESIGN.md.

use crate::core::grid::Grid;
use crate::core::moves::apply_move;
use crate::core::rng::SimpleRng;
use crate::core::spawn::spawn_tile;
use crate::types::{Direction, WEIGHT_EMPTY_CELLS, WEIGHT_MAX_TILE};

/// Heuristic favorability of a grid. Ranks candidate moves only; this is
/// not the game score.
pub fn evaluate(grid: &Grid) -> f64 {
    let empty = grid.empty_cells().len() as f64;
    let max_tile = grid.max_tile() as f64;
    WEIGHT_EMPTY_CELLS * empty + WEIGHT_MAX_TILE * max_tile
}

/// Pick the direction whose trial result scores highest.
///
/// Directions are tried in `Direction::ALL` order on scratch copies;
/// directions that do not change the grid are skipped. Ties keep the
/// earlier-tried direction. Returns None when no direction moves anything,
/// which only happens on a terminal grid.
pub fn choose_move(grid: &Grid) -> Option<Direction> {
    let mut best: Option<(Direction, f64)> = None;

    for dir in Direction::ALL {
        let mut trial = *grid;
        if !apply_move(&mut trial, dir) {
            continue;
        }
        let score = evaluate(&trial);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((dir, score)),
        }
    }

    best.map(|(dir, _)| dir)
}

/// Run one automatic turn: apply the chosen move and spawn a tile.
///
/// Returns false without mutating anything when no move is possible.
pub fn auto_step(grid: &mut Grid, rng: &mut SimpleRng) -> bool {
    match choose_move(grid) {
        Some(dir) => {
            apply_move(grid, dir);
            spawn_tile(grid, rng);
            true
        }
        None => false,
    }
}
