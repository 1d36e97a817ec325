//! Core module - pure game rules with no UI or I/O dependencies

pub mod grid;
pub mod line;
pub mod moves;
pub mod rng;
pub mod spawn;

// Re-export commonly used items
pub use grid::Grid;
pub use line::slide_and_merge;
pub use moves::apply_move;
pub use rng::SimpleRng;
pub use spawn::{new_game, seed_grid, spawn_tile};
