//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Side length of the square grid
pub const GRID_SIZE: usize = 4;

/// Number of tiles placed when a new game starts
pub const START_TILES: usize = 2;

/// A spawned tile is a 4 one time in `FOUR_CHANCE_IN`, otherwise a 2
pub const FOUR_CHANCE_IN: u32 = 10;

/// Heuristic weights for the auto-play policy
pub const WEIGHT_EMPTY_CELLS: f64 = 5.0;
pub const WEIGHT_MAX_TILE: f64 = 2.0;

/// Auto-play defaults
pub const DEFAULT_AUTO_STEPS: u32 = 1000;
pub const AUTO_STEP_DELAY_MS: u64 = 40;

/// Directions a move can slide toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Trial order for the auto-play policy.
    ///
    /// Ties between equally scored directions resolve to the earlier entry,
    /// so this order is part of the policy's observable behavior.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }
}

/// Keyboard layouts for the direction keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLayout {
    /// w/a/s/d for Up/Left/Down/Right
    Qwerty,
    /// z/q/s/d for Up/Left/Down/Right
    Azerty,
}

impl KeyLayout {
    /// Parse layout from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "qwerty" | "wasd" => Some(KeyLayout::Qwerty),
            "azerty" | "zqsd" => Some(KeyLayout::Azerty),
            _ => None,
        }
    }

    /// Direction keys in `Direction::ALL` order (Up, Left, Down, Right),
    /// used for key mapping and the on-screen help line.
    pub fn keys(&self) -> [char; 4] {
        match self {
            KeyLayout::Qwerty => ['w', 'a', 's', 'd'],
            KeyLayout::Azerty => ['z', 'q', 's', 'd'],
        }
    }
}
